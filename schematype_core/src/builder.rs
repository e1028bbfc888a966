//! Builder for type specifications.
//!
//! The builder is the only way to construct a [`TypeSpec`], so the
//! cross-field invariants hold for every spec in existence. Constraint
//! setters take decoded JSON values and fail at assignment time: a
//! non-numeric bound, a bound that inverts the `minimum <= maximum`
//! ordering, an unsupported enumeration container, and a malformed pattern
//! are all rejected before the spec is built.

use serde_json::Value;

use crate::error::{Result, SchemaTypeError};
use crate::spec::{FormatKind, Pattern, TypeSpec, ValueType};

/// Builder for creating a [`TypeSpec`].
///
/// # Example
///
/// ```rust
/// use schematype_core::{TypeSpec, ValueType};
///
/// let spec = TypeSpec::builder(ValueType::Number)
///     .minimum(0)?
///     .maximum(120)?
///     .build();
///
/// assert_eq!(spec.minimum(), Some(0.0));
/// assert_eq!(spec.maximum(), Some(120.0));
/// # Ok::<(), schematype_core::SchemaTypeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TypeSpecBuilder {
    types: Vec<ValueType>,
    pattern: Option<Pattern>,
    minimum: Option<f64>,
    maximum: Option<f64>,
    const_value: Option<Value>,
    enumeration: Option<Vec<Value>>,
    format: Option<FormatKind>,
}

impl TypeSpecBuilder {
    /// Creates a new builder with one declared candidate type.
    pub fn new(vtype: ValueType) -> Self {
        Self {
            types: vec![vtype],
            pattern: None,
            minimum: None,
            maximum: None,
            const_value: None,
            enumeration: None,
            format: None,
        }
    }

    /// Appends a candidate type. Candidates are tried in declaration order.
    pub fn candidate(mut self, vtype: ValueType) -> Self {
        self.types.push(vtype);
        self
    }

    /// Sets the pattern constraint, compiling it immediately.
    ///
    /// # Errors
    ///
    /// Returns `SchemaTypeError::InvalidPattern` if the pattern does not
    /// compile.
    pub fn pattern(mut self, source: &str) -> Result<Self> {
        self.pattern = Some(Pattern::compile(source)?);
        Ok(self)
    }

    /// Sets the minimum bound from a decoded value. JSON `null` clears it.
    ///
    /// # Errors
    ///
    /// Returns `SchemaTypeError::NonNumericBound` for a non-numeric value,
    /// or `SchemaTypeError::InvertedBounds` if the new minimum exceeds a
    /// maximum that is already set.
    pub fn minimum(mut self, bound: impl Into<Value>) -> Result<Self> {
        let bound = bound.into();
        if bound.is_null() {
            self.minimum = None;
            return Ok(self);
        }
        let Some(min) = bound.as_f64() else {
            return Err(SchemaTypeError::non_numeric_bound(&bound));
        };
        if let Some(max) = self.maximum {
            if min > max {
                return Err(SchemaTypeError::inverted_bounds(min, max));
            }
        }
        self.minimum = Some(min);
        Ok(self)
    }

    /// Clears the minimum bound.
    pub fn clear_minimum(mut self) -> Self {
        self.minimum = None;
        self
    }

    /// Sets the maximum bound from a decoded value. JSON `null` clears it.
    ///
    /// # Errors
    ///
    /// Returns `SchemaTypeError::NonNumericBound` for a non-numeric value,
    /// or `SchemaTypeError::InvertedBounds` if the new maximum falls below a
    /// minimum that is already set.
    pub fn maximum(mut self, bound: impl Into<Value>) -> Result<Self> {
        let bound = bound.into();
        if bound.is_null() {
            self.maximum = None;
            return Ok(self);
        }
        let Some(max) = bound.as_f64() else {
            return Err(SchemaTypeError::non_numeric_bound(&bound));
        };
        if let Some(min) = self.minimum {
            if max < min {
                return Err(SchemaTypeError::inverted_bounds(min, max));
            }
        }
        self.maximum = Some(max);
        Ok(self)
    }

    /// Clears the maximum bound.
    pub fn clear_maximum(mut self) -> Self {
        self.maximum = None;
        self
    }

    /// Sets the const value. Once set, reads always yield this value and
    /// writes are rejected.
    pub fn const_value(mut self, value: impl Into<Value>) -> Self {
        self.const_value = Some(value.into());
        self
    }

    /// Sets the enumeration from a decoded value.
    ///
    /// A sequence is stored as-is; a scalar (string, number, or boolean) is
    /// wrapped into a one-element sequence; JSON `null` clears the
    /// enumeration.
    ///
    /// # Errors
    ///
    /// Returns `SchemaTypeError::EmptyEnumeration` for an empty sequence,
    /// or `SchemaTypeError::InvalidEnumeration` for any other container.
    pub fn enumeration(mut self, values: impl Into<Value>) -> Result<Self> {
        match values.into() {
            Value::Null => self.enumeration = None,
            Value::Array(items) => {
                if items.is_empty() {
                    return Err(SchemaTypeError::EmptyEnumeration);
                }
                self.enumeration = Some(items);
            }
            scalar @ (Value::String(_) | Value::Number(_) | Value::Bool(_)) => {
                self.enumeration = Some(vec![scalar]);
            }
            other => return Err(SchemaTypeError::invalid_enumeration(&other)),
        }
        Ok(self)
    }

    /// Clears the enumeration.
    pub fn clear_enumeration(mut self) -> Self {
        self.enumeration = None;
        self
    }

    /// Sets the named format. Unknown names are stored and rejected at
    /// validation time.
    pub fn format(mut self, format: impl Into<FormatKind>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Builds the spec.
    pub fn build(self) -> TypeSpec {
        TypeSpec {
            types: self.types,
            pattern: self.pattern,
            minimum: self.minimum,
            maximum: self.maximum,
            const_value: self.const_value,
            enumeration: self.enumeration,
            format: self.format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_maximum_below_minimum_is_rejected() {
        let builder = TypeSpecBuilder::new(ValueType::Number).minimum(351).unwrap();
        let err = builder.maximum(350).unwrap_err();
        assert!(matches!(err, SchemaTypeError::InvertedBounds { .. }));
    }

    #[test]
    fn test_minimum_above_maximum_is_rejected() {
        let builder = TypeSpecBuilder::new(ValueType::Number).maximum(350).unwrap();
        let err = builder.minimum(351).unwrap_err();
        assert!(matches!(err, SchemaTypeError::InvertedBounds { .. }));
    }

    #[test]
    fn test_equal_bounds_are_valid() {
        let spec = TypeSpecBuilder::new(ValueType::Number)
            .minimum(351)
            .unwrap()
            .maximum(351)
            .unwrap()
            .build();
        assert_eq!(spec.minimum(), Some(351.0));
        assert_eq!(spec.maximum(), Some(351.0));
    }

    #[test]
    fn test_clearing_releases_the_cross_check() {
        // A maximum below a cleared minimum is fine.
        let spec = TypeSpecBuilder::new(ValueType::Number)
            .minimum(351)
            .unwrap()
            .clear_minimum()
            .maximum(50)
            .unwrap()
            .build();
        assert_eq!(spec.minimum(), None);
        assert_eq!(spec.maximum(), Some(50.0));
    }

    #[test]
    fn test_null_clears_a_bound() {
        let spec = TypeSpecBuilder::new(ValueType::Number)
            .minimum(10)
            .unwrap()
            .minimum(json!(null))
            .unwrap()
            .build();
        assert_eq!(spec.minimum(), None);
    }

    #[test]
    fn test_non_numeric_bound_is_rejected() {
        let err = TypeSpecBuilder::new(ValueType::Number)
            .minimum("not a number")
            .unwrap_err();
        assert!(matches!(err, SchemaTypeError::NonNumericBound { .. }));
    }

    #[test]
    fn test_scalar_enumeration_is_wrapped() {
        let spec = TypeSpecBuilder::new(ValueType::String)
            .enumeration("only value")
            .unwrap()
            .build();
        assert_eq!(spec.enumeration(), Some(&[json!("only value")][..]));
    }

    #[test]
    fn test_mapping_enumeration_is_rejected() {
        let err = TypeSpecBuilder::new(ValueType::String)
            .enumeration(json!({"not a valid enumeration type": 0}))
            .unwrap_err();
        assert!(matches!(err, SchemaTypeError::InvalidEnumeration { .. }));
    }

    #[test]
    fn test_empty_enumeration_is_rejected() {
        let err = TypeSpecBuilder::new(ValueType::String)
            .enumeration(json!([]))
            .unwrap_err();
        assert!(matches!(err, SchemaTypeError::EmptyEnumeration));
    }

    #[test]
    fn test_null_clears_the_enumeration() {
        let spec = TypeSpecBuilder::new(ValueType::String)
            .enumeration(json!(["A"]))
            .unwrap()
            .enumeration(json!(null))
            .unwrap()
            .build();
        assert_eq!(spec.enumeration(), None);
    }
}
