//! Pagination and sorting primitives for list endpoints.

use serde::{Deserialize, Serialize};

/// Pagination query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    pub page: Option<i64>,
    #[serde(alias = "limit")]
    pub per_page: Option<i64>,
}

impl Pagination {
    /// Maximum items per page.
    const MAX_PER_PAGE: i64 = 100;

    /// Default items per page.
    const DEFAULT_PER_PAGE: i64 = 20;

    pub fn limit(&self) -> i64 {
        self.per_page
            .unwrap_or(Self::DEFAULT_PER_PAGE)
            .clamp(1, Self::MAX_PER_PAGE)
    }

    pub fn offset(&self) -> i64 {
        (self.current_page() - 1).saturating_mul(self.limit())
    }

    pub fn current_page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }
}

/// Whitelisted sort columns for the code listing.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Insertion order (row id).
    Date,
    Status,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Resolved sort applied to a listing, echoed back in the response.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Sort {
    pub by: SortField,
    pub order: SortOrder,
}

impl Sort {
    /// Resolve raw `sort_by` / `order` parameters.
    ///
    /// Unknown fields fall back to date. Date sorts newest first unless
    /// `asc` is requested; status sorts Active first unless `desc` is requested.
    pub fn resolve(sort_by: Option<&str>, order: Option<&str>) -> Self {
        let order = order.map(str::to_lowercase);
        match sort_by {
            Some("status") => Self {
                by: SortField::Status,
                order: if order.as_deref() == Some("desc") {
                    SortOrder::Desc
                } else {
                    SortOrder::Asc
                },
            },
            _ => Self {
                by: SortField::Date,
                order: if order.as_deref() == Some("asc") {
                    SortOrder::Asc
                } else {
                    SortOrder::Desc
                },
            },
        }
    }

    /// ORDER BY clause for the `game_codes` table.
    pub fn order_by_clause(&self) -> String {
        match self.by {
            SortField::Status => format!("ORDER BY status {}, id DESC", self.order.as_sql()),
            SortField::Date => format!("ORDER BY id {}", self.order.as_sql()),
        }
    }
}

impl Default for Sort {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

/// Paged result envelope returned by list endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct PagedResult<T: Serialize> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
    pub sort: Sort,
}

impl<T: Serialize> PagedResult<T> {
    pub fn new(items: Vec<T>, total: i64, pagination: &Pagination, sort: Sort) -> Self {
        let per_page = pagination.limit();
        let total_pages = (total + per_page - 1) / per_page;
        Self {
            items,
            total,
            page: pagination.current_page(),
            per_page,
            total_pages,
            sort,
        }
    }
}
