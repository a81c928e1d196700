//! Query execution.
//!
//! Canonical evaluation of an assembled `ItemQuery` against a
//! `CatalogSource`: published gate, structural restriction, price band,
//! facet aggregation, ordering, and the page window. One pass, one scan
//! per relation touched.


use crate::{
    error::InternalError,
    obs::{self, ObsEvent},
    query::{
        eval, AttributeCondition, FieldPresence, ItemQuery, OrderDirection, OrderSpec, PageSpec,
        Row,
    },
    record::{AttributeRow, ItemRecord},
    response::{Page, PaginationState},
    source::CatalogSource,
    value::{canonical_cmp, Value},
};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

///
/// Execute a query and materialize the current page.
///
/// Executes exactly once: the item relation is scanned a single time, the
/// attribute relation only when facet criteria are present. The
/// published-only base restriction is applied here unconditionally and is
/// not expressible away through the query value.
///
pub fn execute<S: CatalogSource + ?Sized>(
    source: &S,
    query: &ItemQuery,
) -> Result<Page<ItemRecord>, InternalError> {
    let items = source.items()?;
    let rows_scanned = items.len() as u64;

    let mut rows: Vec<ItemRecord> = items
        .into_iter()
        .filter(|item| item.status.is_published())
        .filter(|item| query.where_clause().is_none_or(|p| eval(item, p)))
        .filter(|item| {
            query
                .price()
                .is_none_or(|band| band.contains(item.final_price()))
        })
        .collect();

    let mut facet_rows_scanned = 0;
    if let Some(facets) = query.facets() {
        let attribute_rows = source.attributes()?;
        facet_rows_scanned = attribute_rows.len() as u64;

        let matched = matched_criteria(&attribute_rows, facets.conditions());

        // An item qualifies only when every distinct criterion is satisfied.
        // Multiple rows satisfying the same criterion credit it once; raw
        // row counting would break the AND semantics.
        let required = facets.required();
        rows.retain(|item| {
            matched
                .get(&item.id)
                .is_some_and(|credited| credited.len() == required)
        });
    }

    sort_rows(&mut rows, &query.order());

    #[allow(clippy::cast_possible_truncation)]
    let total = rows.len() as u32;
    let (rows, pagination) = paginate(rows, query.page(), total);

    obs::record(ObsEvent::QueryExecuted {
        rows_scanned,
        facet_rows_scanned,
    });

    Ok(Page::new(rows, pagination))
}

/// Group the attribute relation by item, crediting each condition index at
/// most once per item.
fn matched_criteria(
    rows: &[AttributeRow],
    conditions: &[AttributeCondition],
) -> HashMap<u64, HashSet<usize>> {
    let mut matched: HashMap<u64, HashSet<usize>> = HashMap::new();

    for row in rows {
        for (index, condition) in conditions.iter().enumerate() {
            if condition.matches(row) {
                matched.entry(row.item_id).or_default().insert(index);
            }
        }
    }

    matched
}

fn sort_rows(rows: &mut [ItemRecord], order: &OrderSpec) {
    rows.sort_by(|a, b| compare_rows(a, b, order));
}

fn compare_rows(a: &ItemRecord, b: &ItemRecord, order: &OrderSpec) -> Ordering {
    for (field, direction) in &order.fields {
        let ord = canonical_cmp(&field_value(a, field), &field_value(b, field));
        let ord = match direction {
            OrderDirection::Asc => ord,
            OrderDirection::Desc => ord.reverse(),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    Ordering::Equal
}

/// Missing sort fields order as `Null` (first ascending, last descending).
fn field_value(row: &ItemRecord, field: &str) -> Value {
    match row.field(field) {
        FieldPresence::Present(value) => value,
        FieldPresence::Missing => Value::Null,
    }
}

fn paginate(
    rows: Vec<ItemRecord>,
    page: Option<&PageSpec>,
    total: u32,
) -> (Vec<ItemRecord>, PaginationState) {
    let Some(spec) = page else {
        // No page window: the whole result is one page.
        return (rows, PaginationState::new(total, 1, total));
    };

    let limit = spec.limit.map_or(usize::MAX, |l| l as usize);
    let rows: Vec<_> = rows
        .into_iter()
        .skip(spec.offset as usize)
        .take(limit)
        .collect();

    let page_size = spec.limit.unwrap_or(total);
    (rows, PaginationState::new(page_size, spec.current_page(), total))
}
