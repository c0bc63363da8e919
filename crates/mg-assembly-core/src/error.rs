//! Schema layer errors.

use thiserror::Error;

/// Errors raised by the schema layer.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A payload was not a well-formed keyed structure. Raised when the
    /// top level of a decode input is a scalar or array instead of an
    /// object, or the input is not parseable JSON at all.
    #[error("Schema violation: expected a JSON object, found {found}")]
    SchemaViolation { found: String },

    /// Serializer failure while encoding a record.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_violation_display() {
        let err = SchemaError::SchemaViolation {
            found: "array".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Schema violation: expected a JSON object, found array"
        );
    }
}
