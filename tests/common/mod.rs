use std::path::Path;

use storefront_catalog::domain::product::Product;
use storefront_catalog::domain::types::{CategoryName, Price, ProductId, ProductName};
use tempfile::TempDir;

/// Temporary product store removed when dropped.
pub struct TestStore {
    _dir: TempDir,
    path: std::path::PathBuf,
}

#[allow(dead_code)]
impl TestStore {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        Self { _dir: dir, path }
    }

    pub fn with_contents(name: &str, json: &str) -> Self {
        let store = Self::new(name);
        std::fs::write(&store.path, json).expect("write product dump");
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[allow(dead_code)]
pub fn product(id: &str, name: &str, price: f64, category: &str) -> Product {
    Product::new(
        ProductId::new(id).unwrap(),
        ProductName::new(name).unwrap(),
        Price::new(price).unwrap(),
        CategoryName::new(category).unwrap(),
    )
}
