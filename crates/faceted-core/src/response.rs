use serde::{Deserialize, Serialize};

///
/// PaginationState
///
/// Pagination descriptor derived once from an executed query's row count;
/// immutable after creation. `page_size == total_count` when no page window
/// was requested (the whole result is one page).
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PaginationState {
    pub page_size: u32,
    pub current_page: u32,
    pub total_count: u32,
}

impl PaginationState {
    #[must_use]
    pub const fn new(page_size: u32, current_page: u32, total_count: u32) -> Self {
        Self {
            page_size,
            current_page,
            total_count,
        }
    }

    /// Number of pages needed to cover `total_count` rows.
    #[must_use]
    pub const fn page_count(&self) -> u32 {
        if self.total_count == 0 {
            return 0;
        }

        let size = if self.page_size == 0 {
            self.total_count
        } else {
            self.page_size
        };

        self.total_count.div_ceil(size)
    }
}

///
/// Page
///
/// Materialized query result: the current page's rows plus the pagination
/// descriptor for callers that render navigation.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub pagination: PaginationState,
}

impl<T> Page<T> {
    #[must_use]
    pub const fn new(rows: Vec<T>, pagination: PaginationState) -> Self {
        Self { rows, pagination }
    }

    /// Number of rows on this page, truncated to `u32`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn count(&self) -> u32 {
        self.rows.len() as u32
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consume this page and return `(rows, pagination)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, PaginationState) {
        (self.rows, self.pagination)
    }

    /// Map the row type while keeping the pagination descriptor.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            rows: self.rows.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

///
/// TESTS
///
