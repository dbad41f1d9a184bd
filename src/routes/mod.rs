//! HTTP route handlers. Thin wrappers that translate service results into
//! responses and status codes.

pub mod products;
