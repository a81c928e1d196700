use crate::value::Value;
use derive_more::{Deref, DerefMut};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// FilterInput
///
/// One raw filter entry as supplied by a caller: a scalar or a list.
/// Untagged so client-shaped JSON maps directly: `"red"` → scalar,
/// `[50, 100]` → list. Lists of any length deserialize; only 2-element
/// lists survive normalization.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterInput {
    Scalar(Value),
    List(Vec<Value>),
}

impl FilterInput {
    /// Scalar equality input.
    pub fn scalar(value: impl Into<Value>) -> Self {
        Self::Scalar(value.into())
    }

    /// Two-element range input; use `Value::Null` for an open end.
    pub fn pair(low: impl Into<Value>, high: impl Into<Value>) -> Self {
        Self::List(vec![low.into(), high.into()])
    }
}

impl From<Value> for FilterInput {
    fn from(value: Value) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for FilterInput {
    fn from(value: &str) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<String> for FilterInput {
    fn from(value: String) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<i64> for FilterInput {
    fn from(value: i64) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<f64> for FilterInput {
    fn from(value: f64) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<bool> for FilterInput {
    fn from(value: bool) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<Vec<Value>> for FilterInput {
    fn from(values: Vec<Value>) -> Self {
        Self::List(values)
    }
}

///
/// FilterMap
///
/// Unordered raw mapping from attribute name to filter input. Backed by an
/// ordered map so normalization output is deterministic. The reserved key
/// `"price"` targets the computed selling price, not an EAV attribute.
///

#[derive(Clone, Debug, Default, Deref, DerefMut, PartialEq, Serialize, Deserialize)]
pub struct FilterMap(pub BTreeMap<String, FilterInput>);

impl FilterMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, input: impl Into<FilterInput>) -> Self {
        self.0.insert(name.into(), input.into());
        self
    }
}

impl FromIterator<(String, FilterInput)> for FilterMap {
    fn from_iter<I: IntoIterator<Item = (String, FilterInput)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

///
/// TESTS
///
