//! Shared fixtures for in-crate tests.

use crate::record::{AttributeRow, CategoryRecord, ItemRecord, Status, Timestamp};
use crate::value::Value;

/// Published item with no discount in category 1.
pub(crate) fn item(id: u64, slug: &str, price: f64, created: u64) -> ItemRecord {
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

pub(crate) fn attr(item_id: u64, name: &str, value: impl Into<Value>) -> AttributeRow {
    AttributeRow::new(item_id, name, value)
}

/// Published category with no parent.
pub(crate) fn category(id: u64, slug: &str, tags: &[&str]) -> CategoryRecord {
    CategoryRecord {
        id,
        parent_id: None,
        slug: slug.into(),
        title: slug.to_uppercase(),
        tags: tags.iter().map(ToString::to_string).collect(),
        status: Status::Published,
        seo: None,
    }
}
