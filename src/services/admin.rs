//! Back-office product management: the admin table and its mutations.

use crate::domain::auth::AuthenticatedUser;
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::types::ProductId;
use crate::forms::product::ProductForm;
use crate::listing::{ListViewController, SearchScope};
use crate::repository::{ProductReader, ProductWriter};
use crate::services::catalog::refresh;
use crate::services::{ServiceError, ServiceResult, ensure_admin};

/// Loads every product into the admin table, which searches names and categories.
pub fn load_admin_products<R>(
    repo: &R,
    user: &AuthenticatedUser,
    page_size: usize,
) -> ServiceResult<ListViewController<Product>>
where
    R: ProductReader + ?Sized,
{
    ensure_admin(user)?;

    let products = repo.list_products().map_err(|err| {
        log::error!("Failed to fetch admin products: {err}");
        err
    })?;

    Ok(ListViewController::new(products, page_size)?.search_scope(SearchScope::NameOrCategory))
}

/// Validates the form, creates the product and reloads the table.
pub fn add_product<R>(
    repo: &R,
    user: &AuthenticatedUser,
    controller: &mut ListViewController<Product>,
    form: ProductForm,
) -> ServiceResult<Product>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    ensure_admin(user)?;

    let new_product = NewProduct::try_from(form).map_err(|err| {
        log::error!("Failed to validate product form: {err}");
        ServiceError::from(err)
    })?;

    let created = repo.create_product(&new_product).map_err(|err| {
        log::error!("Failed to add product: {err}");
        err
    })?;

    refresh(repo, controller)?;

    Ok(created)
}

/// Validates the form, replaces the product's fields and reloads the table.
pub fn update_product<R>(
    repo: &R,
    user: &AuthenticatedUser,
    controller: &mut ListViewController<Product>,
    product_id: &str,
    form: ProductForm,
) -> ServiceResult<Product>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    ensure_admin(user)?;

    let product_id = ProductId::new(product_id)?;
    let updates = UpdateProduct::try_from(form).map_err(|err| {
        log::error!("Failed to validate product form: {err}");
        ServiceError::from(err)
    })?;

    let updated = repo
        .update_product(&product_id, &updates)
        .map_err(|err| {
            log::error!("Failed to update product {product_id}: {err}");
            err
        })?;

    refresh(repo, controller)?;

    Ok(updated)
}

/// Deletes the product and drops it from the table without re-fetching.
pub fn delete_product<R>(
    repo: &R,
    user: &AuthenticatedUser,
    controller: &mut ListViewController<Product>,
    product_id: &str,
) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    ensure_admin(user)?;

    let product_id = ProductId::new(product_id)?;
    repo.delete_product(&product_id).map_err(|err| {
        log::error!("Failed to delete product {product_id}: {err}");
        err
    })?;

    let remaining = controller
        .items()
        .iter()
        .filter(|product| product.id != product_id)
        .cloned()
        .collect();
    controller.set_items(remaining);

    Ok(())
}
