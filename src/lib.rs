//! Storefront catalog: list views over the product collection served by the
//! storefront backend, plus the admin back-office operations around them.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod listing;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod services;

/// Products per page in the customer catalog.
pub const CATALOG_PAGE_SIZE: usize = 8;
/// Rows per page in the admin product table.
pub const ADMIN_PAGE_SIZE: usize = 8;
