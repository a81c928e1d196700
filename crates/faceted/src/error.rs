use faceted_core::error::{ErrorClass, ErrorOrigin, InternalError};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// A single-row lookup matched nothing published.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, format!("not found: {}", what.into()))
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound)
    }
}

impl From<InternalError> for Error {
    fn from(err: InternalError) -> Self {
        let kind = match (err.class, err.origin) {
            (ErrorClass::NotFound, _) => ErrorKind::NotFound,
            (_, ErrorOrigin::Source) => ErrorKind::Source,
            _ => ErrorKind::Internal,
        };

        Self::new(kind, err.message)
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A single-item/category lookup matched nothing published.
    NotFound,

    /// A storage-layer failure, propagated unchanged.
    Source,

    /// The caller cannot remediate this.
    Internal,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use faceted_core::source::SourceError;

    #[test]
    fn not_found_kind_round_trips() {
        let err = Error::not_found("item 'widget'");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "not found: item 'widget'");
    }

    #[test]
    fn source_failures_keep_kind_and_message() {
        let err = Error::from(InternalError::from(SourceError::new("connection reset")));
        assert_eq!(err.kind, ErrorKind::Source);
        assert!(err.message.contains("connection reset"));
    }
}
