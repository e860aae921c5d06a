//! Data transfer objects shared between services and external collaborators.

pub mod catalog;
pub mod order;
pub mod product;
