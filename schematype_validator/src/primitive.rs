//! Primitive value validation.
//!
//! This module provides [`PrimitiveValue`], the container for the
//! primitive type union (string, number, boolean, null). It owns one
//! [`TypeSpec`] and validates decoded values against it: candidate types
//! are tried in declaration order, the first structural match wins, and
//! the matched candidate's constraints (pattern, bounds, format) plus the
//! enumeration decide whether the value is stored.

use serde_json::Value;
use tracing::{debug, trace};

use schematype_core::{
    Checksum, Result, SchemaTypeError, TypeSpec, ValueContainer, ValueType,
};

use crate::formats;
use crate::value::CheckedValue;

/// A primitive value slot governed by a type specification.
///
/// # Example
///
/// ```rust
/// use schematype_core::{TypeSpec, ValueContainer, ValueType};
/// use schematype_validator::PrimitiveValue;
/// use serde_json::json;
///
/// let spec = TypeSpec::builder(ValueType::String)
///     .candidate(ValueType::Number)
///     .build();
/// let mut slot = PrimitiveValue::new(spec);
///
/// slot.load_from_object(&json!("350.00"))?;
/// assert_eq!(slot.value(), Some(json!("350.00")));
///
/// slot.load_from_object(&json!(350))?;
/// assert_eq!(slot.value(), Some(json!(350)));
/// # Ok::<(), schematype_core::SchemaTypeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PrimitiveValue {
    spec: TypeSpec,
    value: Option<CheckedValue>,
}

impl PrimitiveValue {
    /// Creates an empty slot for the given spec.
    pub fn new(spec: TypeSpec) -> Self {
        Self { spec, value: None }
    }

    /// Creates an empty slot for a single unconstrained type.
    pub fn of(vtype: ValueType) -> Self {
        Self::new(TypeSpec::of(vtype))
    }

    /// Returns the governing spec.
    pub fn spec(&self) -> &TypeSpec {
        &self.spec
    }

    /// Returns the effective value as a decoded JSON value.
    ///
    /// When a const is set it is always returned, regardless of any stored
    /// value.
    pub fn value(&self) -> Option<Value> {
        if let Some(c) = self.spec.const_value() {
            return Some(c.clone());
        }
        self.value.as_ref().map(CheckedValue::to_object)
    }

    /// Returns the stored value in its parsed form, if any.
    ///
    /// Unlike [`value`](Self::value) this does not apply the const
    /// override; it exposes what a load actually stored, e.g. the parsed
    /// date for a date-formatted string.
    pub fn held(&self) -> Option<&CheckedValue> {
        self.value.as_ref()
    }

    /// Assigns a value directly, subject to the const and enumeration
    /// invariants.
    ///
    /// # Errors
    ///
    /// Returns `ConstViolation` when a const is set (even if the new value
    /// equals it), `EnumViolation` when an enumeration is set and the
    /// value is not a member, or `NotPrimitive` for arrays and objects.
    pub fn set_value(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        if self.spec.const_value().is_some() {
            return Err(SchemaTypeError::ConstViolation);
        }
        if !self.spec.enumeration_allows(&value) {
            return Err(SchemaTypeError::enum_violation(
                &value,
                self.spec.enumeration().unwrap_or(&[]),
            ));
        }
        self.value = Some(CheckedValue::from_object(&value)?);
        Ok(())
    }

    /// Tries one candidate type against the raw value.
    ///
    /// `Ok(None)` means the candidate did not structurally match and the
    /// next one may be tried. A constraint failure on a structural match
    /// is a hard error that aborts the whole load.
    fn match_candidate(&self, vtype: ValueType, raw: &Value) -> Result<Option<CheckedValue>> {
        match vtype {
            ValueType::String => {
                let Value::String(s) = raw else {
                    return Ok(None);
                };
                if let Some(pattern) = self.spec.pattern() {
                    if !pattern.matches(s) {
                        return Err(SchemaTypeError::pattern_mismatch(s, pattern.as_str()));
                    }
                }
                if let Some(format) = self.spec.format() {
                    return formats::check(format, s).map(Some);
                }
                Ok(Some(CheckedValue::Str(s.clone())))
            }
            ValueType::Number => {
                let Value::Number(n) = raw else {
                    return Ok(None);
                };
                let Some(num) = n.as_f64() else {
                    return Ok(None);
                };
                if let Some(min) = self.spec.minimum() {
                    if num < min {
                        return Err(SchemaTypeError::below_minimum(num, min));
                    }
                }
                if let Some(max) = self.spec.maximum() {
                    if num > max {
                        return Err(SchemaTypeError::above_maximum(num, max));
                    }
                }
                Ok(Some(match n.as_i64() {
                    Some(i) => CheckedValue::Integer(i),
                    None => CheckedValue::Float(num),
                }))
            }
            // A declared boolean accepts nothing but a literal boolean;
            // 0, 1, and "true" are hard failures, not fall-throughs.
            ValueType::Boolean => match raw {
                Value::Bool(b) => Ok(Some(CheckedValue::Bool(*b))),
                other => Err(SchemaTypeError::unexpected_type(other, ValueType::Boolean)),
            },
            ValueType::Null => {
                if raw.is_null() {
                    Ok(Some(CheckedValue::Null))
                } else {
                    Ok(None)
                }
            }
            // Composite containers validate these; a primitive slot never
            // matches them.
            ValueType::Array | ValueType::Object => Ok(None),
        }
    }
}

impl ValueContainer for PrimitiveValue {
    fn load_from_object(&mut self, raw: &Value) -> Result<()> {
        for vtype in self.spec.types() {
            trace!(candidate = %vtype, "trying candidate type");
            if let Some(checked) = self.match_candidate(*vtype, raw)? {
                if !self.spec.enumeration_allows(raw) {
                    return Err(SchemaTypeError::enum_violation(
                        raw,
                        self.spec.enumeration().unwrap_or(&[]),
                    ));
                }
                debug!(matched = %vtype, value = %checked.type_name(), "value accepted");
                self.value = Some(checked);
                return Ok(());
            }
        }
        debug!("no candidate type matched");
        Err(SchemaTypeError::type_mismatch(raw, self.spec.types()))
    }

    fn dump_to_object(&self, hide_empty: bool) -> Result<Option<Value>> {
        match self.value() {
            Some(value) => Ok(Some(value)),
            None if hide_empty => Ok(None),
            None => Ok(Some(Value::Null)),
        }
    }

    fn checksum(&self) -> Checksum {
        let dumped = self
            .value()
            .map(|v| v.to_string())
            .unwrap_or_default();
        Checksum::compute(
            self.spec
                .types()
                .iter()
                .map(|t| t.as_str().as_bytes())
                .chain(std::iter::once(dumped.as_bytes())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_first_match_wins_in_declaration_order() {
        let spec = TypeSpec::builder(ValueType::String)
            .candidate(ValueType::Number)
            .build();
        let mut slot = PrimitiveValue::new(spec);

        slot.load_from_object(&json!("350.00")).unwrap();
        assert_eq!(slot.held(), Some(&CheckedValue::Str("350.00".into())));

        slot.load_from_object(&json!(350)).unwrap();
        assert_eq!(slot.held(), Some(&CheckedValue::Integer(350)));
    }

    #[test]
    fn test_number_stores_integer_or_float() {
        let mut slot = PrimitiveValue::of(ValueType::Number);
        slot.load_from_object(&json!(350)).unwrap();
        assert_eq!(slot.held(), Some(&CheckedValue::Integer(350)));
        slot.load_from_object(&json!(3.5)).unwrap();
        assert_eq!(slot.held(), Some(&CheckedValue::Float(3.5)));
    }

    #[test]
    fn test_null_candidate_matches_json_null() {
        let mut slot = PrimitiveValue::of(ValueType::Null);
        slot.load_from_object(&json!(null)).unwrap();
        assert_eq!(slot.held(), Some(&CheckedValue::Null));

        let err = slot.load_from_object(&json!("null")).unwrap_err();
        assert!(matches!(err, SchemaTypeError::TypeMismatch { .. }));
    }

    #[test]
    fn test_composite_tags_never_match() {
        let mut slot = PrimitiveValue::of(ValueType::Array);
        let err = slot.load_from_object(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, SchemaTypeError::TypeMismatch { .. }));
    }

    #[test]
    fn test_dump_hides_or_emits_empty() {
        let slot = PrimitiveValue::of(ValueType::String);
        assert_eq!(slot.dump_to_object(true).unwrap(), None);
        assert_eq!(slot.dump_to_object(false).unwrap(), Some(Value::Null));
    }

    #[test]
    fn test_dump_returns_effective_value() {
        let mut slot = PrimitiveValue::of(ValueType::String);
        slot.load_from_object(&json!("held")).unwrap();
        assert_eq!(slot.dump_to_object(true).unwrap(), Some(json!("held")));

        let with_const = PrimitiveValue::new(
            TypeSpec::builder(ValueType::String).const_value("fixed").build(),
        );
        assert_eq!(with_const.dump_to_object(true).unwrap(), Some(json!("fixed")));
    }

    #[test]
    fn test_checksum_tracks_state() {
        let mut a = PrimitiveValue::of(ValueType::String);
        let mut b = PrimitiveValue::of(ValueType::String);
        assert_eq!(a.checksum(), b.checksum());

        a.load_from_object(&json!("one")).unwrap();
        b.load_from_object(&json!("two")).unwrap();
        assert_ne!(a.checksum(), b.checksum());

        b.load_from_object(&json!("one")).unwrap();
        assert_eq!(a.checksum(), b.checksum());

        let other_type = PrimitiveValue::of(ValueType::Number);
        assert_ne!(other_type.checksum(), PrimitiveValue::of(ValueType::String).checksum());
    }
}
