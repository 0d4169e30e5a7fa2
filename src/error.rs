//! Error types for the rule evaluation core
//!
//! The core predicates (`expand`, `validate`, wildcard matching) are total:
//! "not found" and "no match" are ordinary return values. Errors only arise
//! at the configuration seam, when constraint attributes handed over by the
//! external rule loader cannot be parsed.

use thiserror::Error;

/// Main error type for rule evaluation operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A numeric constraint attribute holds an unparseable value.
    #[error("invalid count for '{attribute}': {value:?}")]
    InvalidCount {
        /// Name of the constraint attribute.
        attribute: String,
        /// The rejected attribute value.
        value: String,
    },
}

impl Error {
    /// Create an invalid count error.
    pub fn invalid_count(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidCount {
            attribute: attribute.into(),
            value: value.into(),
        }
    }
}

/// Result type alias for rule evaluation operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_count("maxfiles", "lots");
        assert_eq!(err.to_string(), "invalid count for 'maxfiles': \"lots\"");
    }
}
