use crate::{
    domain::{
        order::{Order, OrderStatus},
        product::{NewProduct, Product, UpdateProduct},
        types::{OrderId, ProductId},
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod json_file;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use json_file::JsonFileRepository;

/// Read side of the product data source.
pub trait ProductReader {
    /// Fetches the whole product collection in backend order.
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    fn get_product_by_id(&self, id: &ProductId) -> RepositoryResult<Option<Product>>;
}

/// Write side used by the admin back-office.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, id: &ProductId, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    fn delete_product(&self, id: &ProductId) -> RepositoryResult<()>;
}

/// Orders visible to the back-office.
pub trait OrderReader {
    fn list_orders(&self) -> RepositoryResult<Vec<Order>>;
}

pub trait OrderWriter {
    fn update_order_status(&self, id: &OrderId, status: OrderStatus) -> RepositoryResult<()>;
}
