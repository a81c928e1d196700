use serde::{Deserialize, Serialize};

///
/// PageSpec
///
/// Limit/offset window applied after filtering and ordering. No limit means
/// fetch everything from `offset` on.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PageSpec {
    pub limit: Option<u32>,
    pub offset: u32,
}

impl PageSpec {
    #[must_use]
    pub const fn new(limit: Option<u32>, offset: u32) -> Self {
        Self { limit, offset }
    }

    /// First `n` rows.
    #[must_use]
    pub const fn first(n: u32) -> Self {
        Self {
            limit: Some(n),
            offset: 0,
        }
    }

    /// 1-based page number for pagination metadata.
    #[must_use]
    pub fn current_page(&self) -> u32 {
        match self.limit {
            Some(limit) if limit > 0 => self.offset / limit + 1,
            _ => 1,
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
    fn current_page_derives_from_offset() {
        assert_eq!(PageSpec::new(Some(10), 0).current_page(), 1);
        assert_eq!(PageSpec::new(Some(10), 20).current_page(), 3);
        assert_eq!(PageSpec::new(None, 20).current_page(), 1);
        assert_eq!(PageSpec::new(Some(0), 20).current_page(), 1);
    }
}
