use faceted_core::{
    filter::FilterMap,
    query::{OrderSpec, PageSpec, Predicate},
};
use serde::{Deserialize, Serialize};

///
/// ItemListOptions
///
/// Caller-facing listing options. Every part is optional; an empty options
/// value lists the whole published set in recency order.
///

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemListOptions {
    #[serde(default)]
    pub where_clause: Option<Predicate>,
    #[serde(default)]
    pub order: Option<OrderSpec>,
    #[serde(default)]
    pub filters: Option<FilterMap>,
    #[serde(default)]
    pub pagination: Option<PageRequest>,
}

impl ItemListOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the listing with a structural predicate.
    #[must_use]
    pub fn with_where(mut self, predicate: Predicate) -> Self {
        self.where_clause = Some(predicate);
        self
    }

    /// Override the default recency ordering.
    #[must_use]
    pub fn ordered_by(mut self, order: OrderSpec) -> Self {
        self.order = Some(order);
        self
    }

    /// Apply a raw faceted filter mapping.
    #[must_use]
    pub fn with_filters(mut self, filters: FilterMap) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Request one page of the result.
    #[must_use]
    pub fn paginated(mut self, page: PageRequest) -> Self {
        self.pagination = Some(page);
        self
    }
}

///
/// PageRequest
///
/// 1-based page window. `per_page == 0` means "no limit"; `page == 0` is
/// clamped to the first page.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    #[must_use]
    pub const fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// Lower into the executor's limit/offset window.
    #[must_use]
    pub const fn to_page_spec(self) -> PageSpec {
        if self.per_page == 0 {
            return PageSpec::new(None, 0);
        }

        let page = if self.page == 0 { 1 } else { self.page };
        PageSpec::new(Some(self.per_page), (page - 1) * self.per_page)
    }
}

///
/// CategoryListOptions
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CategoryListOptions {
    #[serde(default)]
    pub tag: Option<String>,
}

impl CategoryListOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only categories carrying this tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

///
/// TESTS
///
