use crate::value::Value;
use serde::{Deserialize, Serialize};

///
/// Criterion
///
/// One normalized unit of filter intent against an EAV attribute.
///
/// A `Range` is inclusive on every present end: both bounds ⇒ between,
/// only `low` ⇒ `>= low`, only `high` ⇒ `<= high`. A range with neither
/// bound is void and never leaves the normalizer.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Criterion {
    Equality {
        field: String,
        value: Value,
    },
    Range {
        field: String,
        low: Option<Value>,
        high: Option<Value>,
    },
}

impl Criterion {
    /// The attribute name this criterion constrains.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::Equality { field, .. } | Self::Range { field, .. } => field,
        }
    }
}

///
/// PriceBand
///
/// Numeric band over the computed selling price
/// `price * (1 - discount/100)`. Extracted from the reserved `price` filter
/// key and applied directly on the item relation, never through the
/// attribute aggregation.
///

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceBand {
    pub low: Option<f64>,
    pub high: Option<f64>,
}

impl PriceBand {
    #[must_use]
    pub const fn new(low: Option<f64>, high: Option<f64>) -> Self {
        Self { low, high }
    }

    /// A band with no bounds constrains nothing and must not be applied.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        self.low.is_none() && self.high.is_none()
    }

    /// Inclusive containment on every present end.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        if let Some(low) = self.low {
            if price < low {
                return false;
            }
        }
        if let Some(high) = self.high {
            if price > high {
                return false;
            }
        }

        true
    }
}

///
/// TESTS
///
