//! Client-side list view: text search, category filter, price sort and
//! fixed-size pagination over an already fetched collection.
//!
//! The pipeline is recomputed synchronously after every mutation, so the
//! visible page and the pagination metadata are always consistent with the
//! current [`ListQuery`].

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::pagination::Paginated;

pub mod query;

pub use query::{ALL_CATEGORIES, CategoryFilter, ListQuery, SearchScope, SortOrder};

/// Minimal view of a record the controller can list.
pub trait Listable {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn price(&self) -> f64;
    fn category(&self) -> &str;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    #[error("page size must be greater than zero")]
    InvalidPageSize,

    #[error("unknown sort order: {0}")]
    UnknownSortOrder(String),
}

/// Read-only pager snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl PaginationState {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Owns a collection and derives the visible page from the current query.
///
/// The backing collection is never reordered; the filtered and sorted
/// sequence is kept as indices into it.
#[derive(Debug, Clone)]
pub struct ListViewController<T> {
    items: Vec<T>,
    query: ListQuery,
    scope: SearchScope,
    derived: Vec<usize>,
}

impl<T: Listable> ListViewController<T> {
    /// Creates a controller over `items` showing `page_size` items per page.
    pub fn new(items: Vec<T>, page_size: usize) -> Result<Self, ListingError> {
        if page_size == 0 {
            return Err(ListingError::InvalidPageSize);
        }

        let mut controller = Self {
            items,
            query: ListQuery::new(page_size),
            scope: SearchScope::default(),
            derived: Vec::new(),
        };
        controller.recompute();
        Ok(controller)
    }

    /// Selects which fields the search text is matched against.
    pub fn search_scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self.recompute();
        self
    }

    /// Replaces the backing collection keeping the current query.
    ///
    /// The current page is preserved when it still exists and clamped down to
    /// the last page otherwise.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.recompute();
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.search_text = text.into();
        self.query.page = 1;
        self.recompute();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.query.category = category;
        self.query.page = 1;
        self.recompute();
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.query.sort_order = order;
        self.query.page = 1;
        self.recompute();
    }

    /// Moves to `page`, clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize) {
        self.query.page = self.clamp_page(page);
    }

    pub fn next_page(&mut self) {
        self.set_page(self.query.page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.query.page.saturating_sub(1));
    }

    /// Items of the current page in pipeline order.
    pub fn visible_items(&self) -> Vec<&T> {
        let page_size = self.query.page_size;
        let start = (self.query.page - 1) * page_size;

        self.derived
            .iter()
            .skip(start)
            .take(page_size)
            .map(|&index| &self.items[index])
            .collect()
    }

    pub fn pagination_state(&self) -> PaginationState {
        PaginationState {
            page: self.query.page,
            total_pages: self.total_pages(),
            total_count: self.derived.len(),
        }
    }

    /// Current page together with pager links for rendering.
    pub fn paginated(&self) -> Paginated<&T> {
        let state = self.pagination_state();
        Paginated::new(
            self.visible_items(),
            state.page,
            state.total_pages,
            state.total_count,
        )
    }

    /// Distinct categories of the backing collection in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(Listable::category)
            .filter(|category| seen.insert(*category))
            .collect()
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn page_size(&self) -> usize {
        self.query.page_size
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    fn total_pages(&self) -> usize {
        self.derived.len().div_ceil(self.query.page_size).max(1)
    }

    fn clamp_page(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages())
    }

    fn matches_search(&self, item: &T, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        if item.name().to_lowercase().contains(needle) {
            return true;
        }
        self.scope == SearchScope::NameOrCategory
            && item.category().to_lowercase().contains(needle)
    }

    fn recompute(&mut self) {
        let needle = self.query.search_text.to_lowercase();

        let mut derived: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.matches_search(item, &needle))
            .filter(|(_, item)| self.query.category.matches(item.category()))
            .map(|(index, _)| index)
            .collect();

        // `sort_by` is stable, so equal prices keep collection order.
        let items = &self.items;
        match self.query.sort_order {
            SortOrder::None => {}
            SortOrder::AscendingByPrice => {
                derived.sort_by(|&a, &b| items[a].price().total_cmp(&items[b].price()));
            }
            SortOrder::DescendingByPrice => {
                derived.sort_by(|&a, &b| items[b].price().total_cmp(&items[a].price()));
            }
        }

        self.derived = derived;

        let requested = self.query.page;
        self.query.page = self.clamp_page(requested);
        if self.query.page != requested {
            log::debug!(
                "Clamped page {requested} to {} after recompute",
                self.query.page
            );
        }

        log::debug!(
            "Recomputed list view: {} of {} items match, page {}/{}",
            self.derived.len(),
            self.items.len(),
            self.query.page,
            self.total_pages()
        );
    }
}
