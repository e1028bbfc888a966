//! Error types for schema-typed values.
//!
//! This module defines all error types that can occur when assembling a type
//! specification or validating a decoded value against one, including type
//! mismatches, constraint violations, and format failures.

use serde_json::Value;
use thiserror::Error;

use crate::spec::ValueType;

/// Result type for schema-typed value operations.
pub type Result<T> = std::result::Result<T, SchemaTypeError>;

/// Main error type for schema-typed value operations.
///
/// Every violation is raised at the point of detection and aborts the
/// current load or assignment; there is no partial-success mode.
#[derive(Error, Debug)]
pub enum SchemaTypeError {
    /// No declared candidate type matched the raw value
    #[error("'{value}' did not match any of the declared types [{candidates}]")]
    TypeMismatch {
        /// The offending value
        value: String,
        /// The full candidate type list, in declaration order
        candidates: String,
    },

    /// The raw value is not of the single required type
    #[error("'{value}' is not a {expected} value")]
    UnexpectedType {
        /// The offending value
        value: String,
        /// The type that was required
        expected: ValueType,
    },

    /// The value is not representable by a primitive slot
    #[error("'{value}' is not a primitive value")]
    NotPrimitive {
        /// The offending value
        value: String,
    },

    /// A string value did not satisfy the declared pattern
    #[error("'{value}' does not match the pattern '{pattern}'")]
    PatternMismatch {
        /// The offending value
        value: String,
        /// The declared pattern source
        pattern: String,
    },

    /// A numeric value fell below the declared minimum
    #[error("{value} is less than the minimum of {minimum}")]
    BelowMinimum {
        /// The offending value
        value: f64,
        /// The declared minimum
        minimum: f64,
    },

    /// A numeric value exceeded the declared maximum
    #[error("{value} is greater than the maximum of {maximum}")]
    AboveMaximum {
        /// The offending value
        value: f64,
        /// The declared maximum
        maximum: f64,
    },

    /// A write was attempted on a slot with a const value
    #[error("const value is set, the value cannot be changed")]
    ConstViolation,

    /// A value is not a member of the declared enumeration
    #[error("'{value}' is not one of the enumerated values [{allowed}]")]
    EnumViolation {
        /// The offending value
        value: String,
        /// The permitted values, in declaration order
        allowed: String,
    },

    /// A string failed its named format's grammar
    #[error("'{value}' is not a valid {format}: {reason}")]
    FormatViolation {
        /// The format that was violated
        format: String,
        /// The offending value
        value: String,
        /// What the grammar rejected
        reason: String,
    },

    /// The named format exists but is deliberately not supported
    #[error("the format '{format}' is not supported: {reason}")]
    UnsupportedFormat {
        /// The unsupported format name
        format: String,
        /// Why it is unsupported
        reason: String,
    },

    /// The named format is not part of the format vocabulary
    #[error("the string format '{0}' is not valid")]
    UnknownFormat(String),

    /// A bound assignment received a non-numeric value
    #[error("bound must be numeric, got '{value}'")]
    NonNumericBound {
        /// The offending value
        value: String,
    },

    /// A bound assignment would violate the minimum <= maximum ordering
    #[error("minimum of {minimum} is greater than maximum of {maximum}")]
    InvertedBounds {
        /// The effective minimum
        minimum: f64,
        /// The effective maximum
        maximum: f64,
    },

    /// An enumeration assignment received an unsupported container type
    #[error("enumeration must be a sequence or a scalar value, got '{value}'")]
    InvalidEnumeration {
        /// The offending value
        value: String,
    },

    /// An enumeration assignment received an empty sequence
    #[error("enumeration must contain at least one value")]
    EmptyEnumeration,

    /// A pattern assignment failed to compile
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern source
        pattern: String,
        /// The compiler's diagnostic
        reason: String,
    },
}

impl SchemaTypeError {
    /// Creates a new aggregate type mismatch error naming the candidate list.
    pub fn type_mismatch(value: &Value, candidates: &[ValueType]) -> Self {
        Self::TypeMismatch {
            value: fmt_value(value),
            candidates: candidates
                .iter()
                .map(ValueType::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Creates a new single-type mismatch error.
    pub fn unexpected_type(value: &Value, expected: ValueType) -> Self {
        Self::UnexpectedType {
            value: fmt_value(value),
            expected,
        }
    }

    /// Creates a new non-primitive value error.
    pub fn not_primitive(value: &Value) -> Self {
        Self::NotPrimitive {
            value: fmt_value(value),
        }
    }

    /// Creates a new pattern mismatch error.
    pub fn pattern_mismatch(value: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::PatternMismatch {
            value: value.into(),
            pattern: pattern.into(),
        }
    }

    /// Creates a new below-minimum error.
    pub fn below_minimum(value: f64, minimum: f64) -> Self {
        Self::BelowMinimum { value, minimum }
    }

    /// Creates a new above-maximum error.
    pub fn above_maximum(value: f64, maximum: f64) -> Self {
        Self::AboveMaximum { value, maximum }
    }

    /// Creates a new enumeration violation error.
    pub fn enum_violation(value: &Value, allowed: &[Value]) -> Self {
        Self::EnumViolation {
            value: fmt_value(value),
            allowed: allowed.iter().map(fmt_value).collect::<Vec<_>>().join(", "),
        }
    }

    /// Creates a new format violation error.
    pub fn format_violation(
        format: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::FormatViolation {
            format: format.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new unsupported format error.
    pub fn unsupported_format(format: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new unknown format error.
    pub fn unknown_format(format: impl Into<String>) -> Self {
        Self::UnknownFormat(format.into())
    }

    /// Creates a new non-numeric bound error.
    pub fn non_numeric_bound(value: &Value) -> Self {
        Self::NonNumericBound {
            value: fmt_value(value),
        }
    }

    /// Creates a new inverted bounds error.
    pub fn inverted_bounds(minimum: f64, maximum: f64) -> Self {
        Self::InvertedBounds { minimum, maximum }
    }

    /// Creates a new invalid enumeration error.
    pub fn invalid_enumeration(value: &Value) -> Self {
        Self::InvalidEnumeration {
            value: fmt_value(value),
        }
    }

    /// Creates a new invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}

/// Renders a decoded value for an error message, without quoting strings.
fn fmt_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_mismatch_names_candidates() {
        let err = SchemaTypeError::type_mismatch(&json!(350), &[ValueType::String, ValueType::Boolean]);
        let msg = err.to_string();
        assert!(msg.contains("350"), "message should name the value: {msg}");
        assert!(msg.contains("string, boolean"), "message should list candidates: {msg}");
    }

    #[test]
    fn test_string_values_render_unquoted() {
        let err = SchemaTypeError::unexpected_type(&json!("true"), ValueType::Boolean);
        assert_eq!(err.to_string(), "'true' is not a boolean value");
    }

    #[test]
    fn test_enum_violation_lists_allowed() {
        let allowed = vec![json!("A"), json!("B")];
        let err = SchemaTypeError::enum_violation(&json!("D"), &allowed);
        assert_eq!(err.to_string(), "'D' is not one of the enumerated values [A, B]");
    }
}
