use crate::value::Value;
use derive_more::{Add, AddAssign, Display, FromStr, Sub, SubAssign};
use serde::{Deserialize, Serialize};

///
/// Timestamp
/// (in seconds)
///

#[derive(
    Add,
    AddAssign,
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    Sub,
    SubAssign,
)]
#[repr(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const EPOCH: Self = Self(u64::MIN);

    /// Construct from seconds.
    #[must_use]
    pub const fn from_seconds(secs: u64) -> Self {
        Self(secs)
    }

    /// Seconds since the epoch.
    #[must_use]
    pub const fn as_seconds(self) -> u64 {
        self.0
    }

    /// RFC 3339 rendering; `None` when out of the representable range.
    #[must_use]
    pub fn to_rfc3339(self) -> Option<String> {
        let secs = i64::try_from(self.0).ok()?;

        chrono::DateTime::from_timestamp(secs, 0).map(|dt| dt.to_rfc3339())
    }
}

///
/// Status
///
/// Publication gate shared by items and categories. Every read path in this
/// crate is restricted to `Published` rows; the restriction is applied at
/// execution time and cannot be removed by callers.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Hidden,
    #[default]
    Published,
}

impl Status {
    #[must_use]
    pub const fn is_published(self) -> bool {
        matches!(self, Self::Published)
    }
}

///
/// SeoMeta
/// Denormalized search metadata carried alongside items and categories.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeoMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: String,
}

///
/// ItemRecord
///
/// Persisted catalog item projection. `price` and `discount` together define
/// the computed selling price used by price filters.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: u64,
    pub category_id: u64,
    pub slug: String,
    pub title: String,
    pub price: f64,
    /// Discount percentage, 0..=100.
    pub discount: u32,
    pub status: Status,
    pub created: Timestamp,
    #[serde(default)]
    pub seo: Option<SeoMeta>,
}

impl ItemRecord {
    /// Selling price after the percentage discount: `price * (1 - discount/100)`.
    #[must_use]
    pub fn final_price(&self) -> f64 {
        self.price * (1.0 - f64::from(self.discount) / 100.0)
    }
}

///
/// CategoryRecord
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: u64,
    #[serde(default)]
    pub parent_id: Option<u64>,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: Status,
    #[serde(default)]
    pub seo: Option<SeoMeta>,
}

///
/// AttributeRow
///
/// EAV fact: one attribute value for one item. An item may carry zero, one,
/// or multiple rows for the same attribute name.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttributeRow {
    pub item_id: u64,
    pub name: String,
    pub value: Value,
}

impl AttributeRow {
    #[must_use]
    pub fn new(item_id: u64, name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            item_id,
            name: name.into(),
            value: value.into(),
        }
    }
}

///
/// TESTS
///
