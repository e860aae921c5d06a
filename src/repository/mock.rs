//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::order::{Order, OrderStatus};
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::types::{OrderId, ProductId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{OrderReader, OrderWriter, ProductReader, ProductWriter};

mock! {
    pub Repository {}

    impl ProductReader for Repository {
        fn list_products(&self) -> RepositoryResult<Vec<Product>>;
        fn get_product_by_id(&self, id: &ProductId) -> RepositoryResult<Option<Product>>;
    }

    impl ProductWriter for Repository {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(
            &self,
            id: &ProductId,
            updates: &UpdateProduct,
        ) -> RepositoryResult<Product>;
        fn delete_product(&self, id: &ProductId) -> RepositoryResult<()>;
    }

    impl OrderReader for Repository {
        fn list_orders(&self) -> RepositoryResult<Vec<Order>>;
    }

    impl OrderWriter for Repository {
        fn update_order_status(&self, id: &OrderId, status: OrderStatus) -> RepositoryResult<()>;
    }
}
