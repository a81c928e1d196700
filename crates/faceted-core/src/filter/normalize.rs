use crate::{
    filter::{Criterion, FilterInput, FilterMap, PriceBand},
    value::Value,
};

/// Reserved filter key targeting the computed selling price.
const PRICE_KEY: &str = "price";

///
/// NormalizedFilters
///
/// Output of the normalization pass: typed attribute criteria in field
/// order, plus the separately extracted price band. Every entry here is
/// well-formed; malformed input never survives normalization.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalizedFilters {
    pub criteria: Vec<Criterion>,
    pub price: Option<PriceBand>,
}

impl NormalizedFilters {
    /// True when neither attribute criteria nor a price band were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty() && self.price.is_none()
    }
}

///
/// Normalize a raw filter mapping into typed criteria.
///
/// Leniency rules (silent skip; filter input originates from untrusted
/// client query strings and partially-invalid sets must keep working):
/// - a list of length other than 2 contributes nothing
/// - a falsy bound (`null`, `false`, `0`, `0.0`, `""`) is an open end
/// - a range with two open ends is void and is dropped before counting
/// - the reserved `price` key is always consumed; only a 2-element list
///   with at least one numeric bound yields a band
///
/// Pure transformation; no side effects, no errors.
///
#[must_use]
pub fn normalize(filters: FilterMap) -> NormalizedFilters {
    let mut criteria = Vec::new();
    let mut price = None;

    for (field, input) in filters.0 {
        if field == PRICE_KEY {
            price = price_band(input);
            continue;
        }

        match input {
            FilterInput::Scalar(value) => criteria.push(Criterion::Equality { field, value }),
            FilterInput::List(values) => {
                if let Some(criterion) = range_criterion(field, values) {
                    criteria.push(criterion);
                }
            }
        }
    }

    NormalizedFilters { criteria, price }
}

fn range_criterion(field: String, values: Vec<Value>) -> Option<Criterion> {
    let [low, high] = <[Value; 2]>::try_from(values).ok()?;

    let low = bound(low);
    let high = bound(high);
    if low.is_none() && high.is_none() {
        return None;
    }

    Some(Criterion::Range { field, low, high })
}

fn price_band(input: FilterInput) -> Option<PriceBand> {
    let FilterInput::List(values) = input else {
        // A scalar price has no range semantics and contributes nothing.
        return None;
    };
    let [low, high] = <[Value; 2]>::try_from(values).ok()?;

    let band = PriceBand::new(numeric_bound(&low), numeric_bound(&high));
    (!band.is_void()).then_some(band)
}

fn bound(value: Value) -> Option<Value> {
    (!value.is_falsy()).then_some(value)
}

fn numeric_bound(value: &Value) -> Option<f64> {
    if value.is_falsy() {
        return None;
    }

    value.as_number()
}

///
/// TESTS
///
