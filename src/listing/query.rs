//! Filter, sort and page selection driving a [`super::ListViewController`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::listing::ListingError;

/// Sentinel the storefront uses for "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Category restriction applied after the text search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Keep only items whose category equals the label exactly.
    Only(String),
}

impl CategoryFilter {
    /// Exact, case-sensitive comparison against an item's category.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(expected) => expected == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    /// Maps the dropdown value to a filter; `"All"` and blank select everything.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == ALL_CATEGORIES {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(s.to_string()))
        }
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "{ALL_CATEGORIES}"),
            CategoryFilter::Only(category) => write!(f, "{category}"),
        }
    }
}

/// Price ordering of the filtered sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    /// Keep the collection order.
    #[default]
    None,
    AscendingByPrice,
    DescendingByPrice,
}

impl FromStr for SortOrder {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" => Ok(SortOrder::None),
            "asc" => Ok(SortOrder::AscendingByPrice),
            "desc" => Ok(SortOrder::DescendingByPrice),
            other => Err(ListingError::UnknownSortOrder(other.to_string())),
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            SortOrder::None => "none",
            SortOrder::AscendingByPrice => "asc",
            SortOrder::DescendingByPrice => "desc",
        };
        write!(f, "{value}")
    }
}

/// Fields the search text is matched against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SearchScope {
    /// Catalog view: product name only.
    #[default]
    Name,
    /// Admin table: product name or category label.
    NameOrCategory,
}

/// Current filter, sort and page selection.
///
/// `page` is always within `[1, total_pages]` once the owning controller has
/// recomputed; `page_size` never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub search_text: String,
    pub category: CategoryFilter,
    pub sort_order: SortOrder,
    pub page: usize,
    pub page_size: usize,
}

impl ListQuery {
    pub(crate) fn new(page_size: usize) -> Self {
        Self {
            search_text: String::new(),
            category: CategoryFilter::All,
            sort_order: SortOrder::None,
            page: 1,
            page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_sentinel_parses_to_all() {
        assert_eq!("All".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!("".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "Laptop".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only("Laptop".to_string()))
        );
    }

    #[test]
    fn category_match_is_case_sensitive() {
        let filter = CategoryFilter::Only("Mobile".to_string());
        assert!(filter.matches("Mobile"));
        assert!(!filter.matches("mobile"));
        assert!(CategoryFilter::All.matches("anything"));
    }

    #[test]
    fn sort_order_parses_storefront_values() {
        assert_eq!("".parse::<SortOrder>().unwrap(), SortOrder::None);
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::AscendingByPrice);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::DescendingByPrice);
        assert!(matches!(
            "price".parse::<SortOrder>(),
            Err(ListingError::UnknownSortOrder(value)) if value == "price"
        ));
    }
}
