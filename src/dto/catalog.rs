//! DTOs for the catalog and admin product listings.

use serde::Deserialize;

use crate::domain::product::Product;
use crate::listing::{CategoryFilter, SortOrder};
use crate::pagination::Paginated;

/// Raw list controls forwarded by the view layer.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CatalogQuery {
    /// Text typed into the search box.
    pub search: Option<String>,
    /// Dropdown value; `"All"` selects every category.
    pub category: Option<String>,
    /// `""`, `"asc"` or `"desc"`.
    pub sort: Option<String>,
    /// Page button clicked by the user.
    pub page: Option<usize>,
}

/// Data required to render one page of a product listing.
#[derive(Debug)]
pub struct CatalogPageData<'a> {
    pub products: Paginated<&'a Product>,
    /// Search query echoed back to the view when present.
    pub search_query: Option<String>,
    pub category: CategoryFilter,
    pub sort_order: SortOrder,
    /// Options for the category dropdown.
    pub categories: Vec<&'a str>,
}
