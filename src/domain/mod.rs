//! Domain aggregates exposed by the storefront catalog layer.

pub mod auth;
pub mod order;
pub mod product;
pub mod types;
