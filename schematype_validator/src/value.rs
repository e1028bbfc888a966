//! Held values for primitive slots.
//!
//! This module provides the representation of a validated value after it
//! has passed type dispatch and constraint checks. Temporal formats store
//! the parsed value rather than the raw text, so callers get a typed date
//! or time back instead of re-parsing the string.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde_json::{Number, Value};

use schematype_core::{Result, SchemaTypeError};

/// A validated value held by a primitive slot.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckedValue {
    /// The JSON null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// String value
    Str(String),
    /// Parsed date and time with offset (format "date-time")
    DateTime(DateTime<FixedOffset>),
    /// Parsed calendar date (format "date")
    Date(NaiveDate),
    /// Parsed time of day (format "time")
    Time(NaiveTime),
}

impl CheckedValue {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, CheckedValue::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            CheckedValue::Null => "null",
            CheckedValue::Bool(_) => "boolean",
            CheckedValue::Integer(_) => "integer",
            CheckedValue::Float(_) => "number",
            CheckedValue::Str(_) => "string",
            CheckedValue::DateTime(_) => "date-time",
            CheckedValue::Date(_) => "date",
            CheckedValue::Time(_) => "time",
        }
    }

    /// Attempts to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CheckedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to get this value as an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CheckedValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Attempts to get this value as a float. Integers widen losslessly.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CheckedValue::Float(f) => Some(*f),
            CheckedValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Attempts to get this value as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CheckedValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get this value as a parsed date-time.
    pub fn as_datetime(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            CheckedValue::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Attempts to get this value as a parsed date.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CheckedValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Attempts to get this value as a parsed time.
    pub fn as_time(&self) -> Option<NaiveTime> {
        match self {
            CheckedValue::Time(t) => Some(*t),
            _ => None,
        }
    }

    /// Converts a decoded primitive value into a held value.
    ///
    /// # Errors
    ///
    /// Returns `SchemaTypeError::NotPrimitive` for arrays and objects;
    /// those belong to composite containers.
    pub fn from_object(raw: &Value) -> Result<Self> {
        match raw {
            Value::Null => Ok(CheckedValue::Null),
            Value::Bool(b) => Ok(CheckedValue::Bool(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(CheckedValue::Integer(i)),
                None => match n.as_f64() {
                    Some(f) => Ok(CheckedValue::Float(f)),
                    None => Err(SchemaTypeError::not_primitive(raw)),
                },
            },
            Value::String(s) => Ok(CheckedValue::Str(s.clone())),
            Value::Array(_) | Value::Object(_) => Err(SchemaTypeError::not_primitive(raw)),
        }
    }

    /// Re-encodes this value as a decoded JSON value.
    ///
    /// Temporal values render their ISO-8601 text forms, so a loaded date
    /// dumps back to the same calendar date.
    pub fn to_object(&self) -> Value {
        match self {
            CheckedValue::Null => Value::Null,
            CheckedValue::Bool(b) => Value::Bool(*b),
            CheckedValue::Integer(i) => Value::from(*i),
            CheckedValue::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
            CheckedValue::Str(s) => Value::String(s.clone()),
            CheckedValue::DateTime(dt) => Value::String(dt.to_rfc3339()),
            CheckedValue::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
            CheckedValue::Time(t) => Value::String(t.format("%H:%M:%S%.f").to_string()),
        }
    }
}

impl From<bool> for CheckedValue {
    fn from(b: bool) -> Self {
        CheckedValue::Bool(b)
    }
}

impl From<i64> for CheckedValue {
    fn from(i: i64) -> Self {
        CheckedValue::Integer(i)
    }
}

impl From<f64> for CheckedValue {
    fn from(f: f64) -> Self {
        CheckedValue::Float(f)
    }
}

impl From<&str> for CheckedValue {
    fn from(s: &str) -> Self {
        CheckedValue::Str(s.to_string())
    }
}

impl From<String> for CheckedValue {
    fn from(s: String) -> Self {
        CheckedValue::Str(s)
    }
}

impl From<NaiveDate> for CheckedValue {
    fn from(d: NaiveDate) -> Self {
        CheckedValue::Date(d)
    }
}

impl From<NaiveTime> for CheckedValue {
    fn from(t: NaiveTime) -> Self {
        CheckedValue::Time(t)
    }
}

impl From<DateTime<FixedOffset>> for CheckedValue {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        CheckedValue::DateTime(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_type_names() {
        assert_eq!(CheckedValue::Null.type_name(), "null");
        assert_eq!(CheckedValue::Str("x".into()).type_name(), "string");
        assert_eq!(CheckedValue::Integer(42).type_name(), "integer");
        assert_eq!(CheckedValue::Float(3.5).type_name(), "number");
        assert_eq!(CheckedValue::Bool(true).type_name(), "boolean");
    }

    #[test]
    fn test_accessors() {
        let val = CheckedValue::Str("hello".into());
        assert_eq!(val.as_str(), Some("hello"));
        assert_eq!(val.as_i64(), None);

        let val = CheckedValue::Integer(42);
        assert_eq!(val.as_i64(), Some(42));
        assert_eq!(val.as_f64(), Some(42.0));
        assert_eq!(val.as_str(), None);
    }

    #[test]
    fn test_from_object_rejects_composites() {
        let err = CheckedValue::from_object(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, SchemaTypeError::NotPrimitive { .. }));
        let err = CheckedValue::from_object(&json!({"k": 1})).unwrap_err();
        assert!(matches!(err, SchemaTypeError::NotPrimitive { .. }));
    }

    #[test]
    fn test_object_round_trip() {
        for raw in [json!(null), json!(true), json!(350), json!(3.5), json!("text")] {
            let checked = CheckedValue::from_object(&raw).unwrap();
            assert_eq!(checked.to_object(), raw);
        }
    }

    #[test]
    fn test_temporal_values_render_iso_text() {
        let date = CheckedValue::Date(NaiveDate::from_ymd_opt(2018, 11, 13).unwrap());
        assert_eq!(date.to_object(), json!("2018-11-13"));

        let time = CheckedValue::Time(NaiveTime::from_hms_opt(20, 20, 39).unwrap());
        assert_eq!(time.to_object(), json!("20:20:39"));
    }
}
