use faceted_core::record::{CategoryRecord, ItemRecord, SeoMeta, Timestamp};
use serde::{Deserialize, Serialize};

///
/// ItemView
///
/// Read-only caller-facing projection of a published item. `final_price`
/// is the computed selling price after the percentage discount.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemView {
    pub id: u64,
    pub category_id: u64,
    pub slug: String,
    pub title: String,
    pub price: f64,
    pub discount: u32,
    pub final_price: f64,
    pub created: Timestamp,
    pub seo: Option<SeoMeta>,
}

impl ItemView {
    /// True when the item currently sells below list price.
    #[must_use]
    pub const fn is_discounted(&self) -> bool {
        self.discount > 0
    }
}

impl From<ItemRecord> for ItemView {
    fn from(record: ItemRecord) -> Self {
        let final_price = record.final_price();

        Self {
            id: record.id,
            category_id: record.category_id,
            slug: record.slug,
            title: record.title,
            price: record.price,
            discount: record.discount,
            final_price,
            created: record.created,
            seo: record.seo,
        }
    }
}

///
/// CategoryView
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CategoryView {
    pub id: u64,
    pub parent_id: Option<u64>,
    pub slug: String,
    pub title: String,
    pub tags: Vec<String>,
    pub seo: Option<SeoMeta>,
}

impl CategoryView {
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl From<CategoryRecord> for CategoryView {
    fn from(record: CategoryRecord) -> Self {
        Self {
            id: record.id,
            parent_id: record.parent_id,
            slug: record.slug,
            title: record.title,
            tags: record.tags,
            seo: record.seo,
        }
    }
}

///
/// CategoryNode
/// One node of the category tree, children in source order.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CategoryNode {
    pub category: CategoryView,
    pub children: Vec<CategoryNode>,
}

///
/// TESTS
///
