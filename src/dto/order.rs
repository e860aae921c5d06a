//! Wire shape of carts and orders served by the storefront backend.

use serde::Deserialize;

use crate::domain::order::{Cart, Order, OrderLine};
use crate::domain::product::Product;
use crate::domain::types::{OrderId, Quantity, TypeConstraintError};
use crate::dto::product::{DecodeError, ProductPayload};

/// Line as served by the API; `product` is `null` once the product is deleted.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct OrderLinePayload {
    #[serde(default)]
    pub product: Option<ProductPayload>,
    pub quantity: i64,
}

/// Populated `user` reference of an order.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct OrderUserPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct OrderPayload {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<OrderUserPayload>,
    #[serde(default)]
    pub items: Vec<OrderLinePayload>,
    pub status: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct CartPayload {
    #[serde(default)]
    pub items: Vec<OrderLinePayload>,
}

impl TryFrom<OrderLinePayload> for OrderLine {
    type Error = TypeConstraintError;

    fn try_from(payload: OrderLinePayload) -> Result<Self, Self::Error> {
        Ok(Self {
            product: payload.product.map(Product::try_from).transpose()?,
            quantity: Quantity::new(payload.quantity)?,
        })
    }
}

fn decode_lines(lines: Vec<OrderLinePayload>) -> Result<Vec<OrderLine>, TypeConstraintError> {
    lines.into_iter().map(OrderLine::try_from).collect()
}

impl TryFrom<OrderPayload> for Order {
    type Error = TypeConstraintError;

    fn try_from(payload: OrderPayload) -> Result<Self, Self::Error> {
        let user = payload.user.unwrap_or_default();
        Ok(Self {
            id: OrderId::new(payload.id)?,
            customer_name: user.name,
            customer_email: user.email,
            items: decode_lines(payload.items)?,
            status: payload.status.parse()?,
        })
    }
}

impl TryFrom<CartPayload> for Cart {
    type Error = TypeConstraintError;

    fn try_from(payload: CartPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            items: decode_lines(payload.items)?,
        })
    }
}

/// Decodes a JSON array of orders, failing on the first invalid record.
pub fn decode_orders(json: &str) -> Result<Vec<Order>, DecodeError> {
    let payloads: Vec<OrderPayload> = serde_json::from_str(json)?;

    payloads
        .into_iter()
        .enumerate()
        .map(|(index, payload)| {
            Order::try_from(payload).map_err(|source| DecodeError::Invalid { index, source })
        })
        .collect()
}

pub fn decode_cart(json: &str) -> Result<Cart, DecodeError> {
    let payload: CartPayload = serde_json::from_str(json)?;
    Cart::try_from(payload).map_err(|source| DecodeError::Invalid { index: 0, source })
}
