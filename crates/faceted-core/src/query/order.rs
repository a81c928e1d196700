use serde::{Deserialize, Serialize};

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderDirection {
    Asc,
    Desc,
}

///
/// OrderSpec
///
/// Ordered list of sort keys. The default listing order is recency:
/// newest first, with the identifier as a deterministic tiebreak.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct OrderSpec {
    pub fields: Vec<(String, OrderDirection)>,
}

impl OrderSpec {
    /// Single ascending sort key.
    #[must_use]
    pub fn by(field: impl Into<String>) -> Self {
        Self {
            fields: vec![(field.into(), OrderDirection::Asc)],
        }
    }

    /// Single descending sort key.
    #[must_use]
    pub fn by_desc(field: impl Into<String>) -> Self {
        Self {
            fields: vec![(field.into(), OrderDirection::Desc)],
        }
    }

    /// Append an ascending sort key.
    #[must_use]
    pub fn then(mut self, field: impl Into<String>) -> Self {
        self.fields.push((field.into(), OrderDirection::Asc));
        self
    }

    /// Append a descending sort key.
    #[must_use]
    pub fn then_desc(mut self, field: impl Into<String>) -> Self {
        self.fields.push((field.into(), OrderDirection::Desc));
        self
    }

    /// Default recency ordering: newest first, id tiebreak.
    #[must_use]
    pub fn recency() -> Self {
        Self::by_desc("created").then_desc("id")
    }
}

impl Default for OrderSpec {
    fn default() -> Self {
        Self::recency()
    }
}

///
/// TESTS
///
