//! Unified error type for the domain layer
//!
//! Character mutations never fail - invalid requests are silently absorbed
//! and the state is returned unchanged. Errors exist only at the parsing
//! boundary, where external input (header payloads, stored snapshots) is
//! converted into rulebook types.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for rulebook enums)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string doesn't
    /// match any known variant:
    ///
    /// ```ignore
    /// "Agent".parse::<Path>()?;
    /// "Pilot".parse::<Path>(); // Err(DomainError::Parse(..))
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("level must be positive");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: level must be positive");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown path: Pilot");
        assert!(matches!(err, DomainError::Parse(_)));
        assert_eq!(err.to_string(), "Parse error: Unknown path: Pilot");
    }
}
