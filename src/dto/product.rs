//! Wire shape of products exchanged with the storefront backend.
//!
//! Payloads are decoded into [`Product`] exactly once, here, so the listing
//! and service layers only ever see validated values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::product::Product;
use crate::domain::types::{
    CategoryName, ImageUrl, Price, ProductId, ProductName, Stock, TypeConstraintError,
};

/// Product record as served by the REST API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProductPayload {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid record at index {index}: {source}")]
    Invalid {
        index: usize,
        source: TypeConstraintError,
    },
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl TryFrom<ProductPayload> for Product {
    type Error = TypeConstraintError;

    fn try_from(payload: ProductPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::new(payload.id)?,
            name: ProductName::new(payload.name)?,
            price: Price::new(payload.price)?,
            category: CategoryName::new(payload.category)?,
            stock: payload.stock.map(Stock::new).transpose()?,
            image: non_blank(payload.image).map(ImageUrl::new).transpose()?,
            description: non_blank(payload.description),
        })
    }
}

impl From<&Product> for ProductPayload {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.to_string(),
            price: product.price.get(),
            category: product.category.to_string(),
            stock: product.stock.map(|s| i64::from(s.get())),
            image: product.image.as_ref().map(ToString::to_string),
            description: product.description.clone(),
        }
    }
}

/// Decodes a JSON array of product payloads, failing on the first invalid record.
pub fn decode_products(json: &str) -> Result<Vec<Product>, DecodeError> {
    let payloads: Vec<ProductPayload> = serde_json::from_str(json)?;

    payloads
        .into_iter()
        .enumerate()
        .map(|(index, payload)| {
            Product::try_from(payload).map_err(|source| DecodeError::Invalid { index, source })
        })
        .collect()
}

/// Decodes a single product payload.
pub fn decode_product(json: &str) -> Result<Product, DecodeError> {
    let payload: ProductPayload = serde_json::from_str(json)?;
    Product::try_from(payload).map_err(|source| DecodeError::Invalid { index: 0, source })
}
