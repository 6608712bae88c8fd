//! Pagination primitives shared by the list endpoints and pages.

use serde::{Deserialize, Serialize};

/// Pagination query parameters. `page` is 1-based.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl Pagination {
    /// Maximum items per page.
    const MAX_LIMIT: i64 = 100;

    /// Default items per page.
    const DEFAULT_LIMIT: i64 = 10;

    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT)
    }

    pub fn offset(&self) -> i64 {
        (self.current_page() - 1) * self.limit()
    }

    pub fn current_page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }
}

/// Pagination metadata returned alongside a page of items.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

/// Paged result envelope returned by list endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct Paged<T: Serialize> {
    pub items: Vec<T>,
    pub pagination: PageMeta,
}

impl<T: Serialize> Paged<T> {
    pub fn new(items: Vec<T>, total: i64, pagination: &Pagination) -> Self {
        let limit = pagination.limit();
        Self {
            items,
            pagination: PageMeta {
                total,
                page: pagination.current_page(),
                limit,
                total_pages: (total + limit - 1) / limit,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults() {
        let p = Pagination {
            page: None,
            limit: None,
        };
        assert_eq!(p.limit(), 10);
        assert_eq!(p.offset(), 0);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn pagination_clamps_limit() {
        let p = Pagination {
            page: Some(1),
            limit: Some(500),
        };
        assert_eq!(p.limit(), 100);
    }

    #[test]
    fn pagination_offset_calculation() {
        // page=2, limit=10 skips the first 10 records
        let p = Pagination {
            page: Some(2),
            limit: Some(10),
        };
        assert_eq!(p.offset(), 10);
    }

    #[test]
    fn paged_total_pages_is_ceiling() {
        let p = Pagination {
            page: Some(1),
            limit: Some(10),
        };
        let result = Paged::new(vec![1, 2, 3], 25, &p);
        assert_eq!(result.pagination.total_pages, 3);
        assert_eq!(result.pagination.total, 25);
        assert_eq!(result.pagination.page, 1);
    }

    #[test]
    fn paged_empty_collection_has_zero_pages() {
        let p = Pagination::default();
        let result = Paged::<i64>::new(vec![], 0, &p);
        assert_eq!(result.pagination.total_pages, 0);
    }

    #[test]
    fn page_meta_wire_names() {
        let p = Pagination {
            page: Some(1),
            limit: Some(10),
        };
        let json = serde_json::to_value(Paged::new(vec![1], 11, &p)).unwrap();
        assert_eq!(json["pagination"]["totalPages"], 2);
        assert_eq!(json["pagination"]["limit"], 10);
    }
}
