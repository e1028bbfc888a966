//! # Schema Types Validator
//!
//! Validation of decoded JSON values against primitive type
//! specifications. This crate provides the concrete implementation of the
//! [`schematype_core::ValueContainer`] capability for the primitive type
//! union:
//!
//! - Type dispatch over the declared candidate list, first match wins
//! - Layered constraint checks after a type match (pattern, numeric
//!   bounds, enumeration)
//! - Semantic string formats (date-time, date, time, email, hostname,
//!   ipv4/ipv6, uri/iri), each with its own grammar
//!
//! ## Example
//!
//! ```rust
//! use schematype_core::{TypeSpec, ValueContainer, ValueType};
//! use schematype_validator::PrimitiveValue;
//! use serde_json::json;
//!
//! let spec = TypeSpec::builder(ValueType::Number)
//!     .minimum(0)?
//!     .build();
//! let mut slot = PrimitiveValue::new(spec);
//!
//! slot.load_from_object(&json!(42))?;
//! assert_eq!(slot.value(), Some(json!(42)));
//!
//! assert!(slot.load_from_object(&json!(-1)).is_err());
//! # Ok::<(), schematype_core::SchemaTypeError>(())
//! ```

mod formats;
mod primitive;
mod value;

pub use primitive::*;
pub use value::*;
