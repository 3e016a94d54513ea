/// Pagination support for queries
///
/// Standard search and pagination model consumed by every gateway's
/// `find_all`.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Search parameters for paginated listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub page: u32,
    pub per_page: u32,
    pub terms: String,
    pub sort: String,
    pub direction: SortDirection,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
            terms: String::new(),
            sort: "name".to_string(),
            direction: SortDirection::Asc,
        }
    }
}

impl SearchQuery {
    pub fn new(
        page: u32,
        per_page: u32,
        terms: impl Into<String>,
        sort: impl Into<String>,
        direction: SortDirection,
    ) -> Self {
        Self {
            page,
            per_page,
            terms: terms.into(),
            sort: sort.into(),
            direction,
        }
    }

    /// Calculate offset for database queries
    pub fn offset(&self) -> i64 {
        (self.page.saturating_sub(1) as i64) * (self.per_page as i64)
    }

    /// Get limit for database queries
    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination<T> {
    pub current_page: u32,
    pub per_page: u32,
    pub total: u64,
    pub items: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn new(current_page: u32, per_page: u32, total: u64, items: Vec<T>) -> Self {
        Self {
            current_page,
            per_page,
            total,
            items,
        }
    }

    /// Project the page into another item type, keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Pagination<U> {
        Pagination {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }

    pub fn total_pages(&self) -> u32 {
        ((self.total as f64) / (self.per_page as f64)).ceil() as u32
    }
}
