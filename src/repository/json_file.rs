//! Product source backed by a JSON dump of the backend's `/products` payload.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use uuid::Uuid;

use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::types::ProductId;
use crate::dto::product::{ProductPayload, decode_products};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ProductReader, ProductWriter};

/// Reads and rewrites a JSON array of product payloads on every call.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> RepositoryResult<Vec<Product>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            // A store that has never been written is empty.
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(decode_products(&raw)?)
    }

    fn store(&self, products: &[Product]) -> RepositoryResult<()> {
        let payloads: Vec<ProductPayload> = products.iter().map(ProductPayload::from).collect();
        let raw = serde_json::to_string_pretty(&payloads)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl ProductReader for JsonFileRepository {
    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        self.load()
    }

    fn get_product_by_id(&self, id: &ProductId) -> RepositoryResult<Option<Product>> {
        Ok(self.load()?.into_iter().find(|product| &product.id == id))
    }
}

impl ProductWriter for JsonFileRepository {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product> {
        let mut products = self.load()?;

        let id = ProductId::new(Uuid::new_v4().simple().to_string())?;
        let product = Product::from_new(id, new_product.clone());

        products.push(product.clone());
        self.store(&products)?;

        Ok(product)
    }

    fn update_product(
        &self,
        id: &ProductId,
        updates: &UpdateProduct,
    ) -> RepositoryResult<Product> {
        let mut products = self.load()?;

        let product = products
            .iter_mut()
            .find(|product| &product.id == id)
            .ok_or(RepositoryError::NotFound)?;
        product.apply_update(updates.clone());
        let updated = product.clone();

        self.store(&products)?;

        Ok(updated)
    }

    fn delete_product(&self, id: &ProductId) -> RepositoryResult<()> {
        let mut products = self.load()?;

        let before = products.len();
        products.retain(|product| &product.id != id);
        if products.len() == before {
            return Err(RepositoryError::NotFound);
        }

        self.store(&products)
    }
}
