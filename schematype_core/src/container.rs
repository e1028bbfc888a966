//! The value-container capability.
//!
//! Every schema-backed value holder, primitive or composite, implements
//! [`ValueContainer`] so that composite containers (arrays, objects) can
//! recursively validate nested values without knowing whether a child is a
//! leaf or another container.

use std::fmt;

use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::error::Result;

/// Capability implemented by every schema-backed value container.
///
/// # Example
///
/// ```rust
/// use schematype_core::{Checksum, Result, ValueContainer};
/// use serde_json::Value;
///
/// struct Passthrough(Option<Value>);
///
/// impl ValueContainer for Passthrough {
///     fn load_from_object(&mut self, raw: &Value) -> Result<()> {
///         self.0 = Some(raw.clone());
///         Ok(())
///     }
///
///     fn dump_to_object(&self, hide_empty: bool) -> Result<Option<Value>> {
///         match &self.0 {
///             Some(v) => Ok(Some(v.clone())),
///             None if hide_empty => Ok(None),
///             None => Ok(Some(Value::Null)),
///         }
///     }
///
///     fn checksum(&self) -> Checksum {
///         let dumped = self.0.as_ref().map(|v| v.to_string()).unwrap_or_default();
///         Checksum::compute([dumped.as_bytes()])
///     }
/// }
/// ```
pub trait ValueContainer {
    /// Consumes an already-decoded value and attempts to populate the held
    /// state.
    ///
    /// # Errors
    ///
    /// Fails with a validation error when the value does not satisfy the
    /// container's type specification.
    fn load_from_object(&mut self, raw: &Value) -> Result<()>;

    /// Produces a decoded value suitable for re-encoding.
    ///
    /// `hide_empty` controls whether an absent value is omitted (`None`) or
    /// emitted as JSON `null`.
    fn dump_to_object(&self, hide_empty: bool) -> Result<Option<Value>>;

    /// Produces a stable fingerprint of the held state, for change
    /// detection or caching by composite callers.
    fn checksum(&self) -> Checksum;
}

/// A stable SHA-256 fingerprint of a container's held state.
///
/// The same (type, value) state always produces the same checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checksum([u8; 32]);

impl Checksum {
    /// Computes a checksum over a sequence of byte parts.
    ///
    /// Parts are separated by a zero byte so that part boundaries
    /// contribute to the digest.
    pub fn compute<'a>(parts: impl IntoIterator<Item = &'a [u8]>) -> Self {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update(part);
            hasher.update([0u8]);
        }
        Self(hasher.finalize().into())
    }

    /// Returns the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Renders the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_checksum_is_deterministic() {
        let a = Checksum::compute([b"string".as_slice(), b"350".as_slice()]);
        let b = Checksum::compute([b"string".as_slice(), b"350".as_slice()]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_checksum_changes_with_content() {
        let a = Checksum::compute([b"string".as_slice(), b"350".as_slice()]);
        let b = Checksum::compute([b"string".as_slice(), b"351".as_slice()]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_part_boundaries_matter() {
        let joined = Checksum::compute([b"stringnumber".as_slice()]);
        let split = Checksum::compute([b"string".as_slice(), b"number".as_slice()]);
        assert_ne!(joined, split);
    }

    #[test]
    fn test_hex_rendering() {
        let checksum = Checksum::compute([b"x".as_slice()]);
        let hex = checksum.to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(checksum.to_string(), hex);
    }
}
