use storefront_catalog::domain::product::{NewProduct, UpdateProduct};
use storefront_catalog::domain::types::{
    CategoryName, ImageUrl, Price, ProductId, ProductName, Stock,
};
use storefront_catalog::repository::errors::RepositoryError;
use storefront_catalog::repository::{JsonFileRepository, ProductReader, ProductWriter};
use storefront_catalog::services::catalog::load_catalog;

mod common;

fn new_product(name: &str) -> NewProduct {
    NewProduct {
        name: ProductName::new(name).unwrap(),
        price: Price::new(129.0).unwrap(),
        category: CategoryName::new("Accessories").unwrap(),
        stock: Stock::new(7).unwrap(),
        image: ImageUrl::new("https://cdn.example.com/item.png").unwrap(),
        description: "Accessory".to_string(),
    }
}

#[test]
fn test_missing_store_is_empty() {
    let store = common::TestStore::new("products.json");
    let repo = JsonFileRepository::new(store.path());

    assert!(repo.list_products().unwrap().is_empty());
}

#[test]
fn test_reads_backend_dump_in_order() {
    let store = common::TestStore::with_contents(
        "products.json",
        r#"[
            {"_id": "a1", "name": "Phone X", "price": 699, "category": "Mobile"},
            {"_id": "a2", "name": "Laptop Pro", "price": 1499.99, "category": "Laptop", "stock": 2}
        ]"#,
    );
    let repo = JsonFileRepository::new(store.path());

    let products = repo.list_products().unwrap();
    let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2"]);

    let laptop = repo
        .get_product_by_id(&ProductId::new("a2").unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(laptop.stock.map(Stock::get), Some(2));
}

#[test]
fn test_invalid_dump_is_rejected_at_the_boundary() {
    let store = common::TestStore::with_contents(
        "products.json",
        r#"[{"_id": "a1", "name": "", "price": 699, "category": "Mobile"}]"#,
    );
    let repo = JsonFileRepository::new(store.path());

    assert!(matches!(
        repo.list_products(),
        Err(RepositoryError::ValidationError(_))
    ));
}

#[test]
fn test_malformed_json_is_a_decode_error() {
    let store = common::TestStore::with_contents("products.json", "{ not json");
    let repo = JsonFileRepository::new(store.path());

    assert!(matches!(
        repo.list_products(),
        Err(RepositoryError::DecodeError(_))
    ));
}

#[test]
fn test_write_into_missing_directory_is_a_storage_error() {
    let store = common::TestStore::new("missing/products.json");
    let repo = JsonFileRepository::new(store.path());

    assert!(repo.list_products().unwrap().is_empty());
    assert!(matches!(
        repo.create_product(&new_product("Cable")),
        Err(RepositoryError::StorageError(_))
    ));
}

#[test]
fn test_product_repository_crud() {
    let store = common::TestStore::new("products.json");
    let repo = JsonFileRepository::new(store.path());

    let cable = repo.create_product(&new_product("Cable")).unwrap();
    let charger = repo.create_product(&new_product("Charger")).unwrap();
    assert_ne!(cable.id, charger.id);
    assert_eq!(repo.list_products().unwrap().len(), 2);

    let mut updates = UpdateProduct::from(new_product("Fast Charger"));
    updates.price = Price::new(49.0).unwrap();
    let updated = repo.update_product(&charger.id, &updates).unwrap();
    assert_eq!(updated.name.as_str(), "Fast Charger");
    assert_eq!(updated.price.get(), 49.0);

    repo.delete_product(&cable.id).unwrap();
    assert!(repo.get_product_by_id(&cable.id).unwrap().is_none());

    let remaining = repo.list_products().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name.as_str(), "Fast Charger");

    assert!(matches!(
        repo.delete_product(&cable.id),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_catalog_loads_from_file_store() {
    let store = common::TestStore::new("products.json");
    let repo = JsonFileRepository::new(store.path());
    for i in 0..10 {
        repo.create_product(&new_product(&format!("Item {i}"))).unwrap();
    }

    let controller = load_catalog(&repo, 8).unwrap();
    let state = controller.pagination_state();

    assert_eq!(state.total_count, 10);
    assert_eq!(state.total_pages, 2);
    assert_eq!(controller.visible_items().len(), 8);
}
