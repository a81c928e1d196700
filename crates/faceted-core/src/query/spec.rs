use crate::{
    filter::{NormalizedFilters, PriceBand},
    query::{FacetMatch, OrderSpec, PageSpec, Predicate},
};
use serde::{Deserialize, Serialize};

///
/// ItemQuery
///
/// The assembled listing query: one immutable value combining the
/// externally supplied restriction, the ordering, the price band, the
/// aggregated attribute restriction, and the page window.
///
/// The published-only base is implicit and applied by every execution
/// path; no transformation here can remove it. Assembly is a chain of
/// pure transformations: each method consumes the query and returns the
/// extended value, so a compiled query can be stored, compared, shipped
/// to a storage integration, or executed, with no builder state involved.
///

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemQuery {
    where_clause: Option<Predicate>,
    order: Option<OrderSpec>,
    price: Option<PriceBand>,
    facets: Option<FacetMatch>,
    page: Option<PageSpec>,
}

impl ItemQuery {
    /// The published-only, recency-ordered base query.
    #[must_use]
    pub fn base() -> Self {
        Self::default()
    }

    /// Apply an externally supplied structural restriction.
    #[must_use]
    pub fn with_where(mut self, predicate: Predicate) -> Self {
        self.where_clause = Some(match self.where_clause.take() {
            Some(existing) => existing.and(predicate),
            None => predicate,
        });
        self
    }

    /// Override the default recency ordering.
    #[must_use]
    pub fn ordered_by(mut self, order: OrderSpec) -> Self {
        self.order = Some(order);
        self
    }

    /// Apply a price band over the computed selling price.
    /// A void band carries no constraint and leaves the query unchanged.
    #[must_use]
    pub fn with_price(mut self, band: PriceBand) -> Self {
        if !band.is_void() {
            self.price = Some(band);
        }
        self
    }

    /// Apply the aggregated attribute restriction.
    #[must_use]
    pub fn with_facets(mut self, facets: FacetMatch) -> Self {
        self.facets = Some(facets);
        self
    }

    /// Apply a full set of normalized filters: the price band directly on
    /// the item relation, the attribute criteria through the aggregation.
    #[must_use]
    pub fn with_filters(mut self, filters: NormalizedFilters) -> Self {
        if let Some(band) = filters.price {
            self = self.with_price(band);
        }
        if let Some(facets) = FacetMatch::from_criteria(filters.criteria) {
            self = self.with_facets(facets);
        }
        self
    }

    /// Apply a page window.
    #[must_use]
    pub fn paged(mut self, page: PageSpec) -> Self {
        self.page = Some(page);
        self
    }

    // --- Accessors ---

    #[must_use]
    pub const fn where_clause(&self) -> Option<&Predicate> {
        self.where_clause.as_ref()
    }

    /// Effective ordering: the explicit override, or recency.
    #[must_use]
    pub fn order(&self) -> OrderSpec {
        self.order.clone().unwrap_or_default()
    }

    #[must_use]
    pub const fn price(&self) -> Option<&PriceBand> {
        self.price.as_ref()
    }

    #[must_use]
    pub const fn facets(&self) -> Option<&FacetMatch> {
        self.facets.as_ref()
    }

    #[must_use]
    pub const fn page(&self) -> Option<&PageSpec> {
        self.page.as_ref()
    }
}

///
/// TESTS
///
