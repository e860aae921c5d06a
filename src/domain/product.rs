use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryName, ImageUrl, Price, ProductId, ProductName, Stock};
use crate::listing::Listable;

/// Product as listed in the catalog and the admin table.
///
/// Only `id`, `name`, `price` and `category` are needed for listing; the
/// remaining fields are optional because catalog payloads may omit them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub price: Price,
    pub category: CategoryName,
    pub stock: Option<Stock>,
    pub image: Option<ImageUrl>,
    pub description: Option<String>,
}

impl Product {
    /// Builds a product carrying only the listing fields.
    #[must_use]
    pub fn new(id: ProductId, name: ProductName, price: Price, category: CategoryName) -> Self {
        Self {
            id,
            name,
            price,
            category,
            stock: None,
            image: None,
            description: None,
        }
    }

    /// Materializes a freshly created product under the given identifier.
    #[must_use]
    pub fn from_new(id: ProductId, new_product: NewProduct) -> Self {
        Self {
            id,
            name: new_product.name,
            price: new_product.price,
            category: new_product.category,
            stock: Some(new_product.stock),
            image: Some(new_product.image),
            description: Some(new_product.description),
        }
    }

    /// Overwrites every editable field with the values from `updates`.
    pub fn apply_update(&mut self, updates: UpdateProduct) {
        self.name = updates.name;
        self.price = updates.price;
        self.category = updates.category;
        self.stock = Some(updates.stock);
        self.image = Some(updates.image);
        self.description = Some(updates.description);
    }
}

impl Listable for Product {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn price(&self) -> f64 {
        self.price.get()
    }

    fn category(&self) -> &str {
        self.category.as_str()
    }
}

/// Fully validated payload for creating a product from the admin table.
#[derive(Clone, Debug, PartialEq)]
pub struct NewProduct {
    pub name: ProductName,
    pub price: Price,
    pub category: CategoryName,
    pub stock: Stock,
    pub image: ImageUrl,
    pub description: String,
}

/// Fully validated payload replacing the editable fields of a product.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateProduct {
    pub name: ProductName,
    pub price: Price,
    pub category: CategoryName,
    pub stock: Stock,
    pub image: ImageUrl,
    pub description: String,
}

impl From<NewProduct> for UpdateProduct {
    fn from(value: NewProduct) -> Self {
        Self {
            name: value.name,
            price: value.price,
            category: value.category,
            stock: value.stock,
            image: value.image,
            description: value.description,
        }
    }
}
