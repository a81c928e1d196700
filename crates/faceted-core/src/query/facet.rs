use crate::{
    filter::Criterion,
    record::AttributeRow,
    value::{eq_coerced, order_coerced, Value},
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// ValueTest
///
/// Test applied to an attribute row's value. Range ends are inclusive.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ValueTest {
    Eq(Value),
    AtLeast(Value),
    AtMost(Value),
    Between(Value, Value),
}

impl ValueTest {
    /// Coerced evaluation; an undefined comparison is a non-match.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Eq(expected) => eq_coerced(value, expected).unwrap_or(false),
            Self::AtLeast(low) => order_coerced(value, low).is_some_and(Ordering::is_ge),
            Self::AtMost(high) => order_coerced(value, high).is_some_and(Ordering::is_le),
            Self::Between(low, high) => {
                order_coerced(value, low).is_some_and(Ordering::is_ge)
                    && order_coerced(value, high).is_some_and(Ordering::is_le)
            }
        }
    }
}

///
/// AttributeCondition
///
/// One attribute criterion compiled into a row predicate:
/// `row.name == name AND test(row.value)`.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttributeCondition {
    pub name: String,
    pub test: ValueTest,
}

impl AttributeCondition {
    /// Compile one normalized criterion. `None` for a void range, which
    /// carries no constraint.
    #[must_use]
    pub fn from_criterion(criterion: Criterion) -> Option<Self> {
        match criterion {
            Criterion::Equality { field, value } => Some(Self {
                name: field,
                test: ValueTest::Eq(value),
            }),
            Criterion::Range { field, low, high } => {
                let test = match (low, high) {
                    (Some(low), Some(high)) => ValueTest::Between(low, high),
                    (Some(low), None) => ValueTest::AtLeast(low),
                    (None, Some(high)) => ValueTest::AtMost(high),
                    (None, None) => return None,
                };

                Some(Self { name: field, test })
            }
        }
    }

    #[must_use]
    pub fn matches(&self, row: &AttributeRow) -> bool {
        row.name == self.name && self.test.matches(&row.value)
    }
}

///
/// FacetMatch
///
/// The aggregated attribute restriction: an item qualifies only when, for
/// every condition here, at least one of its attribute rows matches.
///
/// Condition positions are the identity the evaluator counts by. Multiple
/// rows matching the same condition credit it once; the distinct-criteria
/// count must reach `required()`, so a plain matching-row count would both
/// over-count (duplicate rows) and break the AND semantics.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FacetMatch {
    conditions: Vec<AttributeCondition>,
}

impl FacetMatch {
    /// Compile normalized criteria into an aggregated restriction.
    /// `None` when no effective condition remains; zero criteria must not
    /// filter out any item.
    #[must_use]
    pub fn from_criteria(criteria: Vec<Criterion>) -> Option<Self> {
        let conditions: Vec<_> = criteria
            .into_iter()
            .filter_map(AttributeCondition::from_criterion)
            .collect();

        if conditions.is_empty() {
            return None;
        }

        Some(Self { conditions })
    }

    #[must_use]
    pub fn conditions(&self) -> &[AttributeCondition] {
        &self.conditions
    }

    /// Number of distinct criteria an item must satisfy.
    #[must_use]
    pub fn required(&self) -> usize {
        self.conditions.len()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn row(item_id: u64, name: &str, value: impl Into<Value>) -> AttributeRow {
        AttributeRow::new(item_id, name, value)
    }

    #[test]
    fn equality_condition_matches_name_and_value() {
        let cond = AttributeCondition::from_criterion(Criterion::Equality {
            field: "color".into(),
            value: "red".into(),
        })
        .unwrap();

        assert!(cond.matches(&row(1, "color", "red")));
        assert!(!cond.matches(&row(1, "color", "blue")));
        assert!(!cond.matches(&row(1, "size", "red")));
    }

    #[test]
    fn range_shapes_compile_to_inclusive_tests() {
        let between = AttributeCondition::from_criterion(Criterion::Range {
            field: "size".into(),
            low: Some(Value::Int(8)),
            high: Some(Value::Int(12)),
        })
        .unwrap();
        assert!(between.matches(&row(1, "size", 8_i64)));
        assert!(between.matches(&row(1, "size", 12_i64)));
        assert!(!between.matches(&row(1, "size", 13_i64)));

        let at_most = AttributeCondition::from_criterion(Criterion::Range {
            field: "size".into(),
            low: None,
            high: Some(Value::Int(10)),
        })
        .unwrap();
        assert!(at_most.matches(&row(1, "size", 10_i64)));
        assert!(!at_most.matches(&row(1, "size", 11_i64)));
    }

    #[test]
    fn numeric_text_attribute_values_coerce() {
        let cond = AttributeCondition::from_criterion(Criterion::Range {
            field: "size".into(),
            low: None,
            high: Some(Value::Int(10)),
        })
        .unwrap();

        // EAV values commonly arrive as text.
        assert!(cond.matches(&row(1, "size", "10")));
        assert!(!cond.matches(&row(1, "size", "12")));
        assert!(!cond.matches(&row(1, "size", "large")));
    }

    #[test]
    fn void_range_compiles_to_nothing() {
        assert!(AttributeCondition::from_criterion(Criterion::Range {
            field: "size".into(),
            low: None,
            high: None,
        })
        .is_none());
        assert!(FacetMatch::from_criteria(vec![]).is_none());
    }

    #[test]
    fn required_counts_conditions() {
        let facets = FacetMatch::from_criteria(vec![
            Criterion::Equality {
                field: "color".into(),
                value: "red".into(),
            },
            Criterion::Range {
                field: "size".into(),
                low: None,
                high: Some(Value::Int(10)),
            },
        ])
        .unwrap();

        assert_eq!(facets.required(), 2);
    }
}
