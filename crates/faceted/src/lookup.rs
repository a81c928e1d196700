use derive_more::From;
use faceted_core::record::{CategoryRecord, ItemRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Lookup
///
/// Single-row lookup key: a numeric identifier or a slug. Replaces the
/// mixed "id or slug" parameter with an explicit shape; an `Id` matches
/// only the identifier, a `Slug` only the slug. Also the memo key for
/// request-scoped lookup caching.
///

#[derive(Clone, Debug, Eq, From, Hash, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lookup {
    Id(u64),
    Slug(String),
}

impl Lookup {
    #[must_use]
    pub fn matches_item(&self, item: &ItemRecord) -> bool {
        match self {
            Self::Id(id) => item.id == *id,
            Self::Slug(slug) => item.slug == *slug,
        }
    }

    #[must_use]
    pub fn matches_category(&self, category: &CategoryRecord) -> bool {
        match self {
            Self::Id(id) => category.id == *id,
            Self::Slug(slug) => category.slug == *slug,
        }
    }
}

impl From<&str> for Lookup {
    fn from(slug: &str) -> Self {
        Self::Slug(slug.to_string())
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Slug(slug) => write!(f, "'{slug}'"),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_pick_the_right_variant() {
        assert_eq!(Lookup::from(5_u64), Lookup::Id(5));
        assert_eq!(Lookup::from("widget"), Lookup::Slug("widget".into()));
    }

    #[test]
    fn display_distinguishes_variants() {
        assert_eq!(Lookup::Id(5).to_string(), "#5");
        assert_eq!(Lookup::from("widget").to_string(), "'widget'");
    }
}
