//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-blank names, non-negative
//! prices, image links) so that once a value reaches the domain layer it can be
//! treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateUrl;

/// File extensions accepted for product images.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Price was negative.
    #[error("price must be a non-negative number")]
    NegativePrice,
    /// Price was NaN or infinite.
    #[error("price must be a finite number")]
    NonFinitePrice,
    /// Stock count was negative.
    #[error("stock must be a non-negative number")]
    NegativeStock,
    /// Ordered quantity was zero or negative.
    #[error("quantity must be a positive number")]
    NonPositiveQuantity,
    /// Provided url failed format validation.
    #[error("invalid url address")]
    InvalidUrl,
    /// Url does not point at a supported image file.
    #[error("url must be a valid image link (jpg, png, webp, gif)")]
    InvalidImageUrl,
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(ProductId, "Opaque identifier assigned to a product by the backend.");
non_empty_string_newtype!(ProductName, "Display name of a product.");
non_empty_string_newtype!(CategoryName, "Category label a product is filed under.");
non_empty_string_newtype!(OrderId, "Identifier the backend assigns to a placed order.");

/// Non-negative, finite product price.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Creates a price rejecting NaN, infinities and negative amounts.
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if !value.is_finite() {
            return Err(TypeConstraintError::NonFinitePrice);
        }
        if value < 0.0 {
            return Err(TypeConstraintError::NegativePrice);
        }
        Ok(Self(value))
    }

    /// Returns the raw amount.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Price {
    type Error = TypeConstraintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

/// Number of units available for sale.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stock(u32);

impl Stock {
    /// Creates a stock count, rejecting negative values.
    pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
        if value < 0 {
            return Err(TypeConstraintError::NegativeStock);
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| TypeConstraintError::InvalidValue(format!("stock {value} is too large")))
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Display for Stock {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Stock {
    type Error = TypeConstraintError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Stock> for u32 {
    fn from(value: Stock) -> Self {
        value.0
    }
}

/// Units of one product in a cart or order line.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
        if value <= 0 {
            return Err(TypeConstraintError::NonPositiveQuantity);
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| TypeConstraintError::InvalidValue(format!("quantity {value} is too large")))
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns `true` when `url` is an http(s) link to a supported image file.
pub fn is_image_link(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    let Some(rest) = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
    else {
        return false;
    };

    IMAGE_EXTENSIONS.iter().any(|ext| {
        rest.strip_suffix(ext)
            .and_then(|stem| stem.strip_suffix('.'))
            .is_some_and(|stem| !stem.is_empty())
    })
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Trimmed http(s) URL pointing at a product image.
pub struct ImageUrl(String);

impl ImageUrl {
    /// Ensures the trimmed URL is well-formed and ends with an image extension.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let url = NonEmptyString::new(value)?;

        if !url.as_str().validate_url() {
            return Err(TypeConstraintError::InvalidUrl);
        }
        if !is_image_link(url.as_str()) {
            return Err(TypeConstraintError::InvalidImageUrl);
        }
        Ok(Self(url.into_inner()))
    }

    /// Borrow the image URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extract the owned image URL.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ImageUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ImageUrl {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ImageUrl {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ImageUrl> for String {
    fn from(value: ImageUrl) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_trimmed_and_must_not_be_blank() {
        assert_eq!(ProductName::new("  Widget ").unwrap().as_str(), "Widget");
        assert_eq!(
            CategoryName::new("   "),
            Err(TypeConstraintError::EmptyString)
        );
    }

    #[test]
    fn price_rejects_negative_and_non_finite_values() {
        assert_eq!(Price::new(0.0).unwrap().get(), 0.0);
        assert_eq!(Price::new(-1.0), Err(TypeConstraintError::NegativePrice));
        assert_eq!(Price::new(f64::NAN), Err(TypeConstraintError::NonFinitePrice));
        assert_eq!(
            Price::new(f64::INFINITY),
            Err(TypeConstraintError::NonFinitePrice)
        );
    }

    #[test]
    fn stock_rejects_negative_values() {
        assert_eq!(Stock::new(3).unwrap().get(), 3);
        assert_eq!(Stock::new(-3), Err(TypeConstraintError::NegativeStock));
    }

    #[test]
    fn quantity_must_be_positive() {
        assert_eq!(Quantity::new(2).unwrap().get(), 2);
        assert_eq!(Quantity::new(0), Err(TypeConstraintError::NonPositiveQuantity));
        assert_eq!(Quantity::new(-1), Err(TypeConstraintError::NonPositiveQuantity));
    }

    #[test]
    fn image_url_requires_image_extension() {
        assert!(ImageUrl::new("https://cdn.example.com/phone.JPG").is_ok());
        assert!(ImageUrl::new("http://cdn.example.com/a/b.webp").is_ok());
        assert_eq!(
            ImageUrl::new("https://cdn.example.com/phone.pdf"),
            Err(TypeConstraintError::InvalidImageUrl)
        );
        assert_eq!(
            ImageUrl::new("not a url"),
            Err(TypeConstraintError::InvalidUrl)
        );
    }

    #[test]
    fn image_link_needs_scheme_and_stem() {
        assert!(is_image_link("https://x.png"));
        assert!(!is_image_link("https://.png"));
        assert!(!is_image_link("ftp://example.com/x.png"));
    }
}
