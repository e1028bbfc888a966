//! # Schema Types Core
//!
//! Core data structures and contracts for validating decoded JSON values
//! against JSON Schema-style type specifications.
//!
//! This crate provides the building blocks shared by every schema-backed
//! value container: the declared-type vocabulary, the immutable
//! [`TypeSpec`] with its invariant-enforcing builder, the error taxonomy,
//! and the [`ValueContainer`] capability that composite containers use to
//! validate nested values polymorphically.
//!
//! ## Key Concepts
//!
//! - **TypeSpec**: the declared candidate types plus constraints (pattern,
//!   bounds, const, enumeration, format) attached to a value slot
//! - **ValueContainer**: the load/dump/checksum capability implemented by
//!   primitive and composite containers alike
//! - **SchemaTypeError**: one variant per violation kind, raised at the
//!   point of detection
//!
//! ## Example
//!
//! ```rust
//! use schematype_core::{TypeSpec, ValueType};
//!
//! let spec = TypeSpec::builder(ValueType::Number)
//!     .minimum(0)?
//!     .maximum(120)?
//!     .build();
//!
//! assert_eq!(spec.types(), [ValueType::Number]);
//! assert_eq!(spec.maximum(), Some(120.0));
//! # Ok::<(), schematype_core::SchemaTypeError>(())
//! ```

pub mod builder;
pub mod container;
pub mod error;
pub mod spec;

pub use builder::*;
pub use container::*;
pub use error::*;
pub use spec::*;
