//! Request payload structs with validation and typed-payload conversion.

pub mod products;
