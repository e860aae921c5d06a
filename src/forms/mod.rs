//! Form definitions backing the admin product screens.

use thiserror::Error;

pub mod product;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    /// Rule violation reported to the user verbatim.
    #[error("{0}")]
    Rejected(String),

    #[error("invalid name")]
    InvalidName,

    #[error("invalid category")]
    InvalidCategory,

    #[error("invalid price")]
    InvalidPrice,

    #[error("invalid stock")]
    InvalidStock,

    #[error("invalid image url")]
    InvalidImageUrl,
}
