//! Diesel row structs and their conversions to domain entities.

pub mod category;
pub mod config;
pub mod product;
