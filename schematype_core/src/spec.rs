//! Type specifications for schema-typed values.
//!
//! This module contains the declared-type vocabulary, the named string
//! formats, and the `TypeSpec` itself: the immutable set of constraints
//! attached to a single value slot.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::builder::TypeSpecBuilder;
use crate::error::{Result, SchemaTypeError};

/// A declared value type tag.
///
/// The primitive validator matches `string`, `number`, `boolean`, and
/// `null`. The `array` and `object` tags are part of the vocabulary so a
/// spec can declare them, but they belong to composite containers and never
/// match a primitive slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// A JSON string
    String,
    /// A JSON number, integer or floating point
    Number,
    /// A JSON boolean
    Boolean,
    /// The JSON null value
    Null,
    /// A JSON array (composite, handled elsewhere)
    Array,
    /// A JSON object (composite, handled elsewhere)
    Object,
}

impl ValueType {
    /// Returns the schema keyword for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// Returns true if this tag can be held by a primitive slot.
    pub fn is_primitive(&self) -> bool {
        !matches!(self, Self::Array | Self::Object)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named semantic string format.
///
/// Unrecognized names are carried as `Other` and rejected when a load
/// actually consults the format, not when the spec is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatKind {
    /// ISO-8601 date and time with offset (e.g., "2018-11-13T20:20:39+00:00")
    DateTime,
    /// ISO-8601 calendar date (e.g., "2018-11-13")
    Date,
    /// ISO-8601 time, with or without offset (e.g., "20:20:39+00:00")
    Time,
    /// RFC 5321/5322 email address
    Email,
    /// Internationalized email address (RFC 6531, unsupported)
    IdnEmail,
    /// Fully-qualified domain name
    Hostname,
    /// Internationalized hostname (unsupported)
    IdnHostname,
    /// IPv4 address
    Ipv4,
    /// IPv6 address
    Ipv6,
    /// Absolute URI (RFC 3986)
    Uri,
    /// Absolute IRI (RFC 3987)
    Iri,
    /// Any format name outside the vocabulary
    #[serde(untagged)]
    Other(String),
}

impl FormatKind {
    /// Resolves a format name from its schema keyword.
    pub fn from_name(name: &str) -> Self {
        match name {
            "date-time" => Self::DateTime,
            "date" => Self::Date,
            "time" => Self::Time,
            "email" => Self::Email,
            "idn-email" => Self::IdnEmail,
            "hostname" => Self::Hostname,
            "idn-hostname" => Self::IdnHostname,
            "ipv4" => Self::Ipv4,
            "ipv6" => Self::Ipv6,
            "uri" => Self::Uri,
            "iri" => Self::Iri,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the schema keyword for this format.
    pub fn as_str(&self) -> &str {
        match self {
            Self::DateTime => "date-time",
            Self::Date => "date",
            Self::Time => "time",
            Self::Email => "email",
            Self::IdnEmail => "idn-email",
            Self::Hostname => "hostname",
            Self::IdnHostname => "idn-hostname",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
            Self::Uri => "uri",
            Self::Iri => "iri",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for FormatKind {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compiled pattern constraint.
///
/// Matching is anchored at the start of the input: the pattern must match
/// from the first character, and `$` inside the pattern controls the end
/// boundary. The pattern is never searched for as a substring.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compiles a pattern, anchoring it at the start of the input.
    pub(crate) fn compile(source: &str) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{source})"))
            .map_err(|e| SchemaTypeError::invalid_pattern(source, e.to_string()))?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// Returns the original pattern source.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns true if the input satisfies the pattern.
    pub fn matches(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}

/// The type specification attached to a single value slot.
///
/// Holds the ordered candidate types and the optional constraints (pattern,
/// numeric bounds, const, enumeration, format). A `TypeSpec` is immutable
/// once built; the builder enforces the cross-field invariants (numeric
/// bounds ordering, non-empty enumeration) at assignment time.
///
/// # Example
///
/// ```rust
/// use schematype_core::{TypeSpec, ValueType};
///
/// let spec = TypeSpec::builder(ValueType::String)
///     .candidate(ValueType::Number)
///     .pattern(r"[0-9]+")?
///     .build();
///
/// assert_eq!(spec.types(), [ValueType::String, ValueType::Number]);
/// # Ok::<(), schematype_core::SchemaTypeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TypeSpec {
    pub(crate) types: Vec<ValueType>,
    pub(crate) pattern: Option<Pattern>,
    pub(crate) minimum: Option<f64>,
    pub(crate) maximum: Option<f64>,
    pub(crate) const_value: Option<Value>,
    pub(crate) enumeration: Option<Vec<Value>>,
    pub(crate) format: Option<FormatKind>,
}

impl TypeSpec {
    /// Starts a builder with one declared candidate type.
    pub fn builder(vtype: ValueType) -> TypeSpecBuilder {
        TypeSpecBuilder::new(vtype)
    }

    /// Creates an unconstrained spec for a single type.
    pub fn of(vtype: ValueType) -> Self {
        Self::builder(vtype).build()
    }

    /// Returns the candidate types in declaration order.
    pub fn types(&self) -> &[ValueType] {
        &self.types
    }

    /// Returns the pattern constraint, if set.
    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    /// Returns the minimum bound, if set.
    pub fn minimum(&self) -> Option<f64> {
        self.minimum
    }

    /// Returns the maximum bound, if set.
    pub fn maximum(&self) -> Option<f64> {
        self.maximum
    }

    /// Returns the const value, if set.
    pub fn const_value(&self) -> Option<&Value> {
        self.const_value.as_ref()
    }

    /// Returns the enumeration, if set.
    pub fn enumeration(&self) -> Option<&[Value]> {
        self.enumeration.as_deref()
    }

    /// Returns the named format, if set.
    pub fn format(&self) -> Option<&FormatKind> {
        self.format.as_ref()
    }

    /// Returns true if the enumeration permits the value, or is unset.
    pub fn enumeration_allows(&self, value: &Value) -> bool {
        match &self.enumeration {
            Some(allowed) => allowed.contains(value),
            None => true,
        }
    }
}
