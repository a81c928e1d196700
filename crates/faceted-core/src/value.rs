use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

///
/// Value
///
/// Scalar value usable as an attribute value, a filter operand, or a field
/// value read from a record row.
///
/// Deserialization is untagged so untrusted, client-constructed filter input
/// maps directly onto it: JSON `null` → `Null`, numbers → `Int`/`Float`,
/// strings → `Text`.
///

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Loose-input falsiness: `Null`, `false`, `0`, `0.0`, `""`.
    ///
    /// The normalizer drops range bounds that are falsy, so `[0, 100]`
    /// means "at most 100", matching the untrusted-input contract.
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => !b,
            Self::Int(n) => *n == 0,
            Self::Float(n) => *n == 0.0,
            Self::Text(s) => s.is_empty(),
        }
    }

    /// Numeric view of this value, coercing numeric text.
    ///
    /// EAV attribute values arrive as text; range filters compare them
    /// numerically, so `Text("10")` coerces to `10.0`.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
            Self::Null | Self::Bool(_) => None,
        }
    }

    /// Canonical variant rank used by the total comparator.
    #[must_use]
    pub const fn canonical_rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Int(_) | Self::Float(_) => 2,
            Self::Text(_) => 3,
        }
    }
}

///
/// Coerced comparison
///
/// Equality and ordering used by filter evaluation. Numeric coercion applies
/// whenever both sides have a numeric view; otherwise comparison falls back
/// to strict same-variant semantics. An undefined comparison is `None` and
/// is treated as a non-match by callers, never as an error.
///

/// Coerced equality; `None` when the comparison is undefined.
#[must_use]
pub fn eq_coerced(left: &Value, right: &Value) -> Option<bool> {
    if let (Some(a), Some(b)) = (left.as_number(), right.as_number()) {
        return Some(a == b);
    }

    match (left, right) {
        (Value::Null, Value::Null) => Some(true),
        (Value::Bool(a), Value::Bool(b)) => Some(a == b),
        (Value::Text(a), Value::Text(b)) => Some(a == b),
        _ => None,
    }
}

/// Coerced ordering; `None` when the two values are not orderable.
#[must_use]
pub fn order_coerced(left: &Value, right: &Value) -> Option<Ordering> {
    if let (Some(a), Some(b)) = (left.as_number(), right.as_number()) {
        return a.partial_cmp(&b);
    }

    match (left, right) {
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Total canonical comparator used for result ordering.
///
/// Ordering rules:
/// 1. canonical variant rank (`Null < Bool < numeric < Text`)
/// 2. variant comparison for same-ranked values, numerics merged
#[must_use]
pub fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    let rank = left.canonical_rank().cmp(&right.canonical_rank());
    if rank != Ordering::Equal {
        return rank;
    }

    match (left, right) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        // Same rank and not handled above: both are numeric.
        (a, b) => {
            let a = a.as_number().unwrap_or(f64::NAN);
            let b = b.as_number().unwrap_or(f64::NAN);
            a.total_cmp(&b)
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        // Catalog identifiers fit i64; saturate rather than wrap.
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falsy_covers_all_zero_shapes() {
        assert!(Value::Null.is_falsy());
        assert!(Value::Bool(false).is_falsy());
        assert!(Value::Int(0).is_falsy());
        assert!(Value::Float(0.0).is_falsy());
        assert!(Value::Text(String::new()).is_falsy());

        assert!(!Value::Bool(true).is_falsy());
        assert!(!Value::Int(-1).is_falsy());
        assert!(!Value::Float(0.5).is_falsy());
        assert!(!Value::Text("red".into()).is_falsy());
    }

    #[test]
    fn numeric_text_coerces_for_equality_and_order() {
        assert_eq!(
            eq_coerced(&Value::Text("10".into()), &Value::Int(10)),
            Some(true)
        );
        assert_eq!(
            eq_coerced(&Value::Int(10), &Value::Float(10.0)),
            Some(true)
        );
        assert_eq!(
            order_coerced(&Value::Text("9".into()), &Value::Int(10)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn non_numeric_text_stays_strict() {
        assert_eq!(
            eq_coerced(&Value::Text("red".into()), &Value::Text("red".into())),
            Some(true)
        );
        assert_eq!(eq_coerced(&Value::Text("red".into()), &Value::Int(1)), None);
        assert_eq!(order_coerced(&Value::Text("red".into()), &Value::Int(1)), None);
    }

    #[test]
    fn canonical_cmp_ranks_before_values() {
        assert_eq!(
            canonical_cmp(&Value::Null, &Value::Text("a".into())),
            Ordering::Less
        );
        assert_eq!(
            canonical_cmp(&Value::Int(2), &Value::Float(1.5)),
            Ordering::Greater
        );
        assert_eq!(
            canonical_cmp(&Value::Text("a".into()), &Value::Text("b".into())),
            Ordering::Less
        );
    }

    #[test]
    fn untagged_deserialization_maps_json_shapes() {
        assert_eq!(
            serde_json::from_str::<Value>("null").unwrap(),
            Value::Null
        );
        assert_eq!(serde_json::from_str::<Value>("12").unwrap(), Value::Int(12));
        assert_eq!(
            serde_json::from_str::<Value>("1.5").unwrap(),
            Value::Float(1.5)
        );
        assert_eq!(
            serde_json::from_str::<Value>("\"red\"").unwrap(),
            Value::Text("red".into())
        );
    }
}
