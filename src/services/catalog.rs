use crate::domain::product::Product;
use crate::dto::catalog::{CatalogPageData, CatalogQuery};
use crate::listing::{CategoryFilter, ListViewController, SortOrder};
use crate::repository::ProductReader;
use crate::services::ServiceResult;

/// Fetches the product collection and wraps it in a catalog list view.
pub fn load_catalog<R>(repo: &R, page_size: usize) -> ServiceResult<ListViewController<Product>>
where
    R: ProductReader + ?Sized,
{
    let products = repo.list_products().map_err(|err| {
        log::error!("Failed to load products: {err}");
        err
    })?;

    Ok(ListViewController::new(products, page_size)?)
}

/// Replaces the controller's collection with a fresh fetch.
///
/// On failure the controller keeps showing the previous collection.
pub fn refresh<R>(repo: &R, controller: &mut ListViewController<Product>) -> ServiceResult<()>
where
    R: ProductReader + ?Sized,
{
    let products = repo.list_products().map_err(|err| {
        log::error!("Failed to refresh products: {err}");
        err
    })?;

    controller.set_items(products);
    Ok(())
}

/// Forwards raw list controls into the controller and returns the page to render.
///
/// Only controls whose value differs from the current query are applied, so an
/// unchanged search box does not throw the user back to the first page.
pub fn apply_query<'a>(
    controller: &'a mut ListViewController<Product>,
    query: CatalogQuery,
) -> ServiceResult<CatalogPageData<'a>> {
    let search = match query.search {
        Some(raw) => raw.trim().to_string(),
        None => controller.query().search_text.clone(),
    };
    let category = match query.category {
        Some(raw) => raw.trim().parse::<CategoryFilter>().unwrap_or_default(),
        None => controller.query().category.clone(),
    };
    let sort_order = match query.sort {
        Some(raw) => raw.parse::<SortOrder>()?,
        None => controller.query().sort_order,
    };

    if controller.query().search_text != search {
        controller.set_search_text(search.clone());
    }
    if controller.query().category != category {
        controller.set_category(category.clone());
    }
    if controller.query().sort_order != sort_order {
        controller.set_sort_order(sort_order);
    }
    if let Some(page) = query.page {
        controller.set_page(page);
    }

    let controller: &'a ListViewController<Product> = controller;

    Ok(CatalogPageData {
        products: controller.paginated(),
        search_query: Some(search).filter(|s| !s.is_empty()),
        category,
        sort_order,
        categories: controller.categories(),
    })
}
