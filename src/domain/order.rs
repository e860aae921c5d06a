//! Carts and placed orders.
//!
//! A line keeps its quantity even after the referenced product has been
//! deleted from the catalog; such lines are shown as deleted and are worth
//! nothing in the totals.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::product::Product;
use crate::domain::types::{OrderId, ProductId, Quantity, TypeConstraintError};

/// Fulfilment state an admin can move an order through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("unknown order status {s:?}")))
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One product and its quantity inside a cart or an order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// `None` once the product has been removed from the catalog.
    pub product: Option<Product>,
    pub quantity: Quantity,
}

impl OrderLine {
    pub fn is_product_deleted(&self) -> bool {
        self.product.is_none()
    }

    /// `price × quantity`, or zero for a deleted product.
    pub fn total(&self) -> f64 {
        self.product
            .as_ref()
            .map_or(0.0, |product| product.price.get() * f64::from(self.quantity.get()))
    }
}

/// Sum of the line totals.
pub fn lines_total(lines: &[OrderLine]) -> f64 {
    lines.iter().map(OrderLine::total).sum()
}

/// Contents of a shopper's cart.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    pub items: Vec<OrderLine>,
}

impl Cart {
    pub fn total(&self) -> f64 {
        lines_total(&self.items)
    }

    /// Drops every line for `product_id`, returning whether anything was removed.
    pub fn remove_product(&mut self, product_id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|line| {
            line.product
                .as_ref()
                .is_none_or(|product| &product.id != product_id)
        });
        self.items.len() != before
    }
}

/// Placed order as shown in "My orders" and the admin order table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub items: Vec<OrderLine>,
    pub status: OrderStatus,
}

impl Order {
    pub fn total(&self) -> f64 {
        lines_total(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{CategoryName, Price, ProductName};

    fn product(id: &str, price: f64) -> Product {
        Product::new(
            ProductId::new(id).unwrap(),
            ProductName::new(format!("Product {id}")).unwrap(),
            Price::new(price).unwrap(),
            CategoryName::new("Mobile").unwrap(),
        )
    }

    fn line(product: Option<Product>, quantity: i64) -> OrderLine {
        OrderLine {
            product,
            quantity: Quantity::new(quantity).unwrap(),
        }
    }

    #[test]
    fn total_multiplies_price_by_quantity() {
        let lines = vec![line(Some(product("p1", 250.0)), 2), line(Some(product("p2", 19.5)), 4)];
        assert_eq!(lines_total(&lines), 578.0);
    }

    #[test]
    fn deleted_products_count_as_zero() {
        let order = Order {
            id: OrderId::new("o1").unwrap(),
            customer_name: Some("Asha".to_string()),
            customer_email: None,
            items: vec![line(None, 3), line(Some(product("p1", 100.0)), 1)],
            status: OrderStatus::Pending,
        };

        assert!(order.items[0].is_product_deleted());
        assert_eq!(order.items[0].total(), 0.0);
        assert_eq!(order.total(), 100.0);
    }

    #[test]
    fn empty_cart_totals_zero() {
        assert_eq!(Cart::default().total(), 0.0);
    }

    #[test]
    fn removing_from_cart_keeps_other_lines() {
        let mut cart = Cart {
            items: vec![
                line(Some(product("p1", 10.0)), 1),
                line(None, 2),
                line(Some(product("p2", 5.0)), 3),
            ],
        };

        assert!(cart.remove_product(&ProductId::new("p1").unwrap()));
        assert!(!cart.remove_product(&ProductId::new("p9").unwrap()));
        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.total(), 15.0);
    }

    #[test]
    fn status_parses_admin_dropdown_values() {
        assert_eq!("Shipped".parse::<OrderStatus>(), Ok(OrderStatus::Shipped));
        assert_eq!(OrderStatus::Cancelled.to_string(), "Cancelled");
        assert!("Lost".parse::<OrderStatus>().is_err());
    }
}
