use crate::{
    error::Error,
    lookup::Lookup,
    options::{CategoryListOptions, ItemListOptions},
    view::{CategoryNode, CategoryView, ItemView},
};
use faceted_core::{
    executor,
    filter::normalize,
    obs::{self, ObsEvent},
    query::{ItemQuery, PageSpec, Predicate},
    record::CategoryRecord,
    response::{Page, PaginationState},
    source::CatalogSource,
};
use std::collections::{HashMap, HashSet};

///
/// Catalog
///
/// Request-scoped read API over a catalog source. One instance serves one
/// logical request: it owns the lookup memos and the pagination state of
/// the last listing call, and nothing else. Compiled queries are plain
/// values; instances never share state, so any number of catalogs can run
/// against the same source concurrently.
///

#[derive(Debug)]
pub struct Catalog<S: CatalogSource> {
    source: S,
    item_memo: HashMap<Lookup, ItemView>,
    category_memo: HashMap<Lookup, CategoryView>,
    pagination: Option<PaginationState>,
}

impl<S: CatalogSource> Catalog<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            item_memo: HashMap::new(),
            category_memo: HashMap::new(),
            pagination: None,
        }
    }

    /// Borrow the underlying source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// List published items: compile the options into one query, execute it
    /// once, and keep the pagination descriptor for `pagination()`.
    pub fn items(&mut self, options: ItemListOptions) -> Result<Page<ItemView>, Error> {
        let mut query = ItemQuery::base();
        if let Some(predicate) = options.where_clause {
            query = query.with_where(predicate);
        }
        if let Some(order) = options.order {
            query = query.ordered_by(order);
        }
        if let Some(filters) = options.filters {
            query = query.with_filters(normalize(filters));
        }
        if let Some(page) = options.pagination {
            query = query.paged(page.to_page_spec());
        }

        let page = executor::execute(&self.source, &query)?;
        self.pagination = Some(page.pagination);

        Ok(page.map(ItemView::from))
    }

    /// Fetch one published item by id or slug; memoized per request.
    pub fn item(&mut self, lookup: impl Into<Lookup>) -> Result<ItemView, Error> {
        let lookup = lookup.into();

        if let Some(view) = self.item_memo.get(&lookup) {
            obs::record(ObsEvent::MemoHit);
            return Ok(view.clone());
        }
        obs::record(ObsEvent::MemoMiss);

        let view = self.find_item(&lookup)?;
        self.item_memo.insert(lookup, view.clone());

        Ok(view)
    }

    /// The most recent published items, optionally restricted.
    ///
    /// Executes directly and leaves the `pagination()` state untouched.
    pub fn last(
        &self,
        limit: u32,
        where_clause: Option<Predicate>,
    ) -> Result<Vec<ItemView>, Error> {
        let mut query = ItemQuery::base().paged(PageSpec::first(limit));
        if let Some(predicate) = where_clause {
            query = query.with_where(predicate);
        }

        let page = executor::execute(&self.source, &query)?;

        Ok(page.rows.into_iter().map(ItemView::from).collect())
    }

    /// Fetch one published category by id or slug; memoized per request.
    pub fn category(&mut self, lookup: impl Into<Lookup>) -> Result<CategoryView, Error> {
        let lookup = lookup.into();

        if let Some(view) = self.category_memo.get(&lookup) {
            obs::record(ObsEvent::MemoHit);
            return Ok(view.clone());
        }
        obs::record(ObsEvent::MemoMiss);

        let view = self
            .published_categories()?
            .into_iter()
            .find(|category| lookup.matches_category(category))
            .map(CategoryView::from)
            .ok_or_else(|| Error::not_found(format!("category {lookup}")))?;
        self.category_memo.insert(lookup, view.clone());

        Ok(view)
    }

    /// Flat listing of published categories, optionally restricted to one tag.
    pub fn categories(&self, options: CategoryListOptions) -> Result<Vec<CategoryView>, Error> {
        let views = self
            .published_categories()?
            .into_iter()
            .map(CategoryView::from)
            .filter(|view| options.tag.as_deref().is_none_or(|tag| view.has_tag(tag)))
            .collect();

        Ok(views)
    }

    /// Published categories as a tree, children in source order.
    pub fn tree(&self) -> Result<Vec<CategoryNode>, Error> {
        let records = self.published_categories()?;
        let known: HashSet<u64> = records.iter().map(|category| category.id).collect();

        Ok(subtree(&records, None, &known))
    }

    /// Pagination descriptor of the last listing call; `None` before the
    /// first one.
    #[must_use]
    pub const fn pagination(&self) -> Option<&PaginationState> {
        self.pagination.as_ref()
    }

    fn find_item(&self, lookup: &Lookup) -> Result<ItemView, Error> {
        let predicate = match lookup {
            Lookup::Id(id) => Predicate::eq("id", *id),
            Lookup::Slug(slug) => Predicate::eq("slug", slug.as_str()),
        };
        let query = ItemQuery::base()
            .with_where(predicate)
            .paged(PageSpec::first(1));

        executor::execute(&self.source, &query)?
            .rows
            .into_iter()
            .next()
            .map(ItemView::from)
            .ok_or_else(|| Error::not_found(format!("item {lookup}")))
    }

    fn published_categories(&self) -> Result<Vec<CategoryRecord>, Error> {
        let records = self
            .source
            .categories()
            .map_err(faceted_core::error::InternalError::from)?
            .into_iter()
            .filter(|category| category.status.is_published())
            .collect();

        Ok(records)
    }
}

/// Children of `parent`, recursively. Categories whose parent is unknown
/// (unpublished or missing) surface as roots rather than disappearing.
fn subtree(
    records: &[CategoryRecord],
    parent: Option<u64>,
    known: &HashSet<u64>,
) -> Vec<CategoryNode> {
    records
        .iter()
        .filter(|category| match (category.parent_id, parent) {
            (Some(p), Some(target)) => p == target,
            (None, None) => true,
            (Some(p), None) => !known.contains(&p),
            (None, Some(_)) => false,
        })
        .map(|category| CategoryNode {
            category: CategoryView::from(category.clone()),
            children: subtree(records, Some(category.id), known),
        })
        .collect()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PageRequest;
    use faceted_core::record::{AttributeRow, ItemRecord, Status, Timestamp};
    use faceted_core::source::MemorySource;

    fn item(id: u64, slug: &str, price: f64, created: u64) -> ItemRecord {
        ItemRecord {
            id,
            category_id: 1,
            slug: slug.into(),
            title: slug.to_uppercase(),
            price,
            discount: 0,
            status: Status::Published,
            created: Timestamp::from_seconds(created),
            seo: None,
        }
    }

    fn category(id: u64, parent_id: Option<u64>, slug: &str, tags: &[&str]) -> CategoryRecord {
        CategoryRecord {
            id,
            parent_id,
            slug: slug.into(),
            title: slug.to_uppercase(),
            tags: tags.iter().map(ToString::to_string).collect(),
            status: Status::Published,
            seo: None,
        }
    }

    fn shop() -> MemorySource {
        MemorySource::new()
            .with_item(item(1, "a", 10.0, 100))
            .with_item(item(2, "b", 20.0, 200))
            .with_item(item(3, "c", 30.0, 300))
            .with_attribute(AttributeRow::new(1, "color", "red"))
            .with_attribute(AttributeRow::new(1, "size", 10_i64))
            .with_attribute(AttributeRow::new(2, "color", "red"))
            .with_attribute(AttributeRow::new(2, "size", 12_i64))
            .with_attribute(AttributeRow::new(3, "color", "blue"))
            .with_attribute(AttributeRow::new(3, "size", 10_i64))
            .with_category(category(1, None, "tools", &["featured"]))
            .with_category(category(2, Some(1), "hand-tools", &[]))
            .with_category(category(3, None, "garden", &["featured", "outdoor"]))
    }

    fn filters(json: serde_json::Value) -> faceted_core::filter::FilterMap {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn listing_compiles_filters_into_one_query() {
        let mut catalog = Catalog::new(shop());

        let page = catalog
            .items(ItemListOptions::new().with_filters(filters(serde_json::json!({
                "color": "red",
                "size": [null, 10],
            }))))
            .unwrap();

        let slugs: Vec<&str> = page.rows.iter().map(|view| view.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a"]);
    }

    #[test]
    fn pagination_is_none_before_any_listing() {
        let catalog = Catalog::new(shop());
        assert!(catalog.pagination().is_none());
    }

    #[test]
    fn listing_records_pagination_state() {
        let source = (1..=5).fold(MemorySource::new(), |source, n| {
            source.with_item(item(n, &format!("i{n}"), 10.0, 100 * n))
        });
        let mut catalog = Catalog::new(source);

        let page = catalog
            .items(ItemListOptions::new().paginated(PageRequest::new(1, 2)))
            .unwrap();

        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.pagination.total_count, 5);

        let state = catalog.pagination().unwrap();
        assert_eq!(state.page_size, 2);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_count, 5);
        assert_eq!(state.page_count(), 3);
    }

    #[test]
    fn item_resolves_by_id_and_by_slug() {
        let mut catalog = Catalog::new(shop());

        assert_eq!(catalog.item(2_u64).unwrap().id, 2);
        assert_eq!(catalog.item("b").unwrap().slug, "b");
    }

    #[test]
    fn item_not_found_for_absent_or_unpublished() {
        let mut hidden = item(9, "ghost", 5.0, 900);
        hidden.status = Status::Hidden;
        let mut catalog = Catalog::new(shop().with_item(hidden));

        assert!(catalog.item(42_u64).unwrap_err().is_not_found());
        assert!(catalog.item("ghost").unwrap_err().is_not_found());
    }

    #[test]
    fn item_lookups_are_memoized_per_request() {
        obs::reset();
        let mut catalog = Catalog::new(shop());

        catalog.item("a").unwrap();
        catalog.item("a").unwrap();
        catalog.item(1_u64).unwrap(); // distinct key, separate miss

        let counters = obs::snapshot();
        assert_eq!(counters.memo_hits, 1);
        assert_eq!(counters.memo_misses, 2);
    }

    #[test]
    fn last_returns_newest_first_and_skips_pagination_state() {
        let catalog = Catalog::new(shop());

        let latest = catalog.last(2, None).unwrap();
        let slugs: Vec<&str> = latest.iter().map(|view| view.slug.as_str()).collect();
        assert_eq!(slugs, vec!["c", "b"]);
        assert!(catalog.pagination().is_none());
    }

    #[test]
    fn last_honors_a_where_restriction() {
        let mut other = item(4, "d", 5.0, 400);
        other.category_id = 2;
        let catalog = Catalog::new(shop().with_item(other));

        let latest = catalog
            .last(10, Some(Predicate::eq("category_id", 2_i64)))
            .unwrap();
        let slugs: Vec<&str> = latest.iter().map(|view| view.slug.as_str()).collect();
        assert_eq!(slugs, vec!["d"]);
    }

    #[test]
    fn categories_filter_by_tag() {
        let catalog = Catalog::new(shop());

        let all = catalog.categories(CategoryListOptions::new()).unwrap();
        assert_eq!(all.len(), 3);

        let featured = catalog
            .categories(CategoryListOptions::new().with_tag("featured"))
            .unwrap();
        let slugs: Vec<&str> = featured.iter().map(|view| view.slug.as_str()).collect();
        assert_eq!(slugs, vec!["tools", "garden"]);

        let outdoor = catalog
            .categories(CategoryListOptions::new().with_tag("outdoor"))
            .unwrap();
        assert_eq!(outdoor.len(), 1);
    }

    #[test]
    fn category_lookup_is_memoized_and_fails_closed() {
        obs::reset();
        let mut catalog = Catalog::new(shop());

        assert_eq!(catalog.category("tools").unwrap().id, 1);
        assert_eq!(catalog.category("tools").unwrap().id, 1);
        assert!(catalog.category("nope").unwrap_err().is_not_found());

        let counters = obs::snapshot();
        assert_eq!(counters.memo_hits, 1);
    }

    #[test]
    fn tree_nests_children_under_parents() {
        let catalog = Catalog::new(shop());

        let tree = catalog.tree().unwrap();
        let roots: Vec<&str> = tree
            .iter()
            .map(|node| node.category.slug.as_str())
            .collect();
        assert_eq!(roots, vec!["tools", "garden"]);

        assert_eq!(tree[0].children.len(), 1);
        assert_eq!(tree[0].children[0].category.slug, "hand-tools");
        assert!(tree[1].children.is_empty());
    }

    #[test]
    fn orphaned_categories_surface_as_roots() {
        let catalog = Catalog::new(
            MemorySource::new()
                .with_category(category(1, Some(99), "stranded", &[])),
        );

        let tree = catalog.tree().unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].category.slug, "stranded");
    }
}
