use crate::{
    query::predicate::{Compare, CompareOp, Predicate},
    record::ItemRecord,
    value::{eq_coerced, order_coerced, Value},
};
use std::cmp::Ordering;

///
/// FieldPresence
///
/// Result of reading a field from a row during predicate evaluation.
/// Distinguishes a missing field from a present one.
///

#[derive(Clone, Debug, PartialEq)]
pub enum FieldPresence {
    Present(Value),
    Missing,
}

///
/// Row
///
/// Abstraction over a row-like value that exposes fields by name.
/// Decouples predicate evaluation and ordering from concrete record types.
///

pub trait Row {
    fn field(&self, name: &str) -> FieldPresence;
}

impl Row for ItemRecord {
    fn field(&self, name: &str) -> FieldPresence {
        let value = match name {
            "id" => Value::from(self.id),
            "category_id" => Value::from(self.category_id),
            "slug" => Value::from(self.slug.as_str()),
            "title" => Value::from(self.title.as_str()),
            "price" => Value::from(self.price),
            "discount" => Value::from(self.discount),
            "created" => Value::from(self.created.as_seconds()),
            _ => return FieldPresence::Missing,
        };

        FieldPresence::Present(value)
    }
}

///
/// Evaluate a predicate against a single row.
///
/// Pure runtime evaluation: no schema access, no planning. Any comparison
/// that is undefined for the operand types evaluates to `false`, never to
/// an error.
///
#[must_use]
pub(crate) fn eval<R: Row + ?Sized>(row: &R, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::True => true,
        Predicate::And(children) => children.iter().all(|child| eval(row, child)),
        Predicate::Or(children) => children.iter().any(|child| eval(row, child)),
        Predicate::Not(inner) => !eval(row, inner),
        Predicate::Compare(cmp) => eval_compare(row, cmp),
    }
}

/// Returns `false` when the field is missing or the comparison is undefined.
fn eval_compare<R: Row + ?Sized>(row: &R, cmp: &Compare) -> bool {
    let FieldPresence::Present(actual) = row.field(&cmp.field) else {
        return false;
    };

    match cmp.op {
        CompareOp::Eq => eq_coerced(&actual, &cmp.value).unwrap_or(false),
        CompareOp::Ne => eq_coerced(&actual, &cmp.value).is_some_and(|v| !v),

        CompareOp::Lt => order_coerced(&actual, &cmp.value).is_some_and(Ordering::is_lt),
        CompareOp::Lte => order_coerced(&actual, &cmp.value).is_some_and(Ordering::is_le),
        CompareOp::Gt => order_coerced(&actual, &cmp.value).is_some_and(Ordering::is_gt),
        CompareOp::Gte => order_coerced(&actual, &cmp.value).is_some_and(Ordering::is_ge),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Status, Timestamp};

    fn item() -> ItemRecord {
        ItemRecord {
            id: 7,
            category_id: 3,
            slug: "blue-widget".into(),
            title: "Blue Widget".into(),
            price: 120.0,
            discount: 10,
            status: Status::Published,
            created: Timestamp::from_seconds(1_000),
            seo: None,
        }
    }

    #[test]
    fn compare_reads_item_fields() {
        assert!(eval(&item(), &Predicate::eq("category_id", 3_i64)));
        assert!(eval(&item(), &Predicate::eq("slug", "blue-widget")));
        assert!(!eval(&item(), &Predicate::eq("category_id", 4_i64)));
    }

    #[test]
    fn missing_fields_never_match() {
        assert!(!eval(&item(), &Predicate::eq("nope", 1_i64)));
        // Ne over a missing field is also a non-match, not a match.
        assert!(!eval(&item(), &Predicate::ne("nope", 1_i64)));
    }

    #[test]
    fn boolean_composition() {
        let p = Predicate::eq("category_id", 3_i64) & Predicate::gte("price", 100_i64);
        assert!(eval(&item(), &p));

        let p = Predicate::eq("category_id", 9_i64) | Predicate::lt("price", 200_i64);
        assert!(eval(&item(), &p));

        assert!(eval(&item(), &!Predicate::eq("category_id", 9_i64)));
        assert!(eval(&item(), &Predicate::True));
    }

    #[test]
    fn undefined_comparisons_are_non_matches() {
        // slug is text; ordering against a number is undefined.
        assert!(!eval(&item(), &Predicate::lt("slug", 10_i64)));
    }
}
