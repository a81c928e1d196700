use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr, Not};

///
/// Predicate
///
/// Externally supplied structural restriction over item fields, applied on
/// top of the published-only base. Pure representation; evaluation happens
/// against a `Row` in the executor.
///

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    #[default]
    True,
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
    Compare(Compare),
}

impl Predicate {
    /// Create a single comparison: `field cmp value`.
    pub fn compare(field: impl Into<String>, op: CompareOp, value: impl Into<Value>) -> Self {
        Self::Compare(Compare::new(field, op, value))
    }

    // --- Equality ---

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::Eq, value)
    }

    pub fn ne(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::Ne, value)
    }

    // --- Ordering ---

    pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::Lt, value)
    }

    pub fn lte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::Lte, value)
    }

    pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::Gt, value)
    }

    pub fn gte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::Gte, value)
    }

    /// Combine two predicates into an `And`, flattening nested `And`s.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::And(mut a), Self::And(mut b)) => {
                a.append(&mut b);
                Self::And(a)
            }
            (Self::And(mut a), b) => {
                a.push(b);
                Self::And(a)
            }
            (a, Self::And(mut b)) => {
                let mut list = vec![a];
                list.append(&mut b);
                Self::And(list)
            }
            (a, b) => Self::And(vec![a, b]),
        }
    }

    /// Combine two predicates into an `Or`, flattening nested `Or`s.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match (self, other) {
            (Self::Or(mut a), Self::Or(mut b)) => {
                a.append(&mut b);
                Self::Or(a)
            }
            (Self::Or(mut a), b) => {
                a.push(b);
                Self::Or(a)
            }
            (a, Self::Or(mut b)) => {
                let mut list = vec![a];
                list.append(&mut b);
                Self::Or(list)
            }
            (a, b) => Self::Or(vec![a, b]),
        }
    }
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl Not for Predicate {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::Not(Box::new(self))
    }
}

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

///
/// Compare
/// A basic comparison: `field cmp value`.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Compare {
    pub field: String,
    pub op: CompareOp,
    pub value: Value,
}

impl Compare {
    #[must_use]
    pub fn new(field: impl Into<String>, op: CompareOp, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(field: &str) -> Predicate {
        Predicate::eq(field, 1_i64)
    }

    #[test]
    fn constructors_build_clauses() {
        match Predicate::lte("price", 100_i64) {
            Predicate::Compare(c) => {
                assert_eq!(c.field, "price");
                assert_eq!(c.op, CompareOp::Lte);
                assert_eq!(c.value, Value::Int(100));
            }
            other => panic!("expected Compare, got {other:?}"),
        }
    }

    #[test]
    fn and_flattens_nested_ands() {
        let p = (clause("a") & (clause("b") & clause("c"))) & clause("d");
        match p {
            Predicate::And(children) => assert_eq!(children.len(), 4),
            other => panic!("expected And, got {other:?}"),
        }
    }

    #[test]
    fn or_flattens_nested_ors() {
        let p = (clause("x") | (clause("y") | clause("z"))) | clause("w");
        match p {
            Predicate::Or(children) => assert_eq!(children.len(), 4),
            other => panic!("expected Or, got {other:?}"),
        }
    }

    #[test]
    fn not_wraps_once() {
        let p = !clause("a");
        assert!(matches!(p, Predicate::Not(_)));
    }
}
