//! Format sub-validators.
//!
//! One validator per named string format, behind the [`FormatCheck`] seam
//! so each grammar can be backed by whatever parsing facility fits without
//! leaking that choice into the dispatch logic. Each validator consumes an
//! already type-matched string and either returns the (possibly parsed)
//! held value or fails with a format violation. A format failure is a hard
//! failure of the enclosing load; it never falls through to another
//! candidate type.

use std::net::IpAddr;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveTime};
use regex::Regex;
use url::Url;

use schematype_core::{FormatKind, Result, SchemaTypeError};

use crate::value::CheckedValue;

/// Per-format validation seam.
pub(crate) trait FormatCheck {
    /// The schema keyword this validator covers.
    fn name(&self) -> &'static str;

    /// Validates the raw string, returning the held value on success.
    fn check(&self, raw: &str) -> Result<CheckedValue>;
}

/// Resolves the validator for a format, rejecting names outside the
/// vocabulary.
pub(crate) fn for_kind(kind: &FormatKind) -> Result<&'static dyn FormatCheck> {
    match kind {
        FormatKind::DateTime => Ok(&DateTimeCheck),
        FormatKind::Date => Ok(&DateCheck),
        FormatKind::Time => Ok(&TimeCheck),
        FormatKind::Email => Ok(&EmailCheck),
        FormatKind::IdnEmail => Ok(&IDN_EMAIL),
        FormatKind::Hostname => Ok(&HostnameCheck),
        FormatKind::IdnHostname => Ok(&IDN_HOSTNAME),
        FormatKind::Ipv4 => Ok(&IPV4),
        FormatKind::Ipv6 => Ok(&IPV6),
        FormatKind::Uri => Ok(&URI),
        FormatKind::Iri => Ok(&IRI),
        FormatKind::Other(name) => Err(SchemaTypeError::unknown_format(name.as_str())),
    }
}

/// Validates a raw string against a named format.
pub(crate) fn check(kind: &FormatKind, raw: &str) -> Result<CheckedValue> {
    for_kind(kind)?.check(raw)
}

/// ISO-8601 date and time, offset required.
struct DateTimeCheck;

impl FormatCheck for DateTimeCheck {
    fn name(&self) -> &'static str {
        "date-time"
    }

    fn check(&self, raw: &str) -> Result<CheckedValue> {
        let parsed = DateTime::parse_from_rfc3339(raw)
            .map_err(|e| SchemaTypeError::format_violation(self.name(), raw, e.to_string()))?;
        Ok(CheckedValue::DateTime(parsed))
    }
}

/// ISO-8601 calendar date.
struct DateCheck;

impl FormatCheck for DateCheck {
    fn name(&self) -> &'static str {
        "date"
    }

    fn check(&self, raw: &str) -> Result<CheckedValue> {
        let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|e| SchemaTypeError::format_violation(self.name(), raw, e.to_string()))?;
        Ok(CheckedValue::Date(parsed))
    }
}

/// Accepted time layouts, tried in order. An offset, when present, is
/// parsed and discarded.
const TIME_LAYOUTS: &[&str] = &["%H:%M:%S%.f", "%H:%M:%S%.f%:z", "%H:%M:%S%.f%z"];

/// ISO-8601 time of day, with or without offset.
struct TimeCheck;

impl FormatCheck for TimeCheck {
    fn name(&self) -> &'static str {
        "time"
    }

    fn check(&self, raw: &str) -> Result<CheckedValue> {
        for layout in TIME_LAYOUTS {
            if let Ok(parsed) = NaiveTime::parse_from_str(raw, layout) {
                return Ok(CheckedValue::Time(parsed));
            }
        }
        // A trailing Z marks UTC; the layouts above only cover numeric
        // offsets.
        if let Some(stripped) = raw.strip_suffix('Z').or_else(|| raw.strip_suffix('z')) {
            if let Ok(parsed) = NaiveTime::parse_from_str(stripped, "%H:%M:%S%.f") {
                return Ok(CheckedValue::Time(parsed));
            }
        }
        Err(SchemaTypeError::format_violation(
            self.name(),
            raw,
            "not an ISO-8601 time",
        ))
    }
}

/// RFC 5321/5322 address grammar: dotted or quoted local part, domain or
/// bracketed IP literal. Comments are not part of the grammar.
static EMAIL_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)^(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])$"#,
    )
    .expect("email grammar compiles")
});

/// RFC 5321/5322 email address.
struct EmailCheck;

impl FormatCheck for EmailCheck {
    fn name(&self) -> &'static str {
        "email"
    }

    fn check(&self, raw: &str) -> Result<CheckedValue> {
        if !EMAIL_GRAMMAR.is_match(raw) {
            return Err(SchemaTypeError::format_violation(
                self.name(),
                raw,
                "not an RFC 5321 address",
            ));
        }
        Ok(CheckedValue::Str(raw.to_string()))
    }
}

/// Syntactic FQDN check: at least two labels of 1-63 ASCII alphanumerics
/// or hyphens, no leading or trailing hyphen, no empty labels, at most 253
/// characters, one optional trailing dot.
fn is_valid_hostname(raw: &str) -> bool {
    let name = raw.strip_suffix('.').unwrap_or(raw);
    if name.is_empty() || name.len() > 253 {
        return false;
    }
    let labels: Vec<&str> = name.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
            && !label.starts_with('-')
            && !label.ends_with('-')
    })
}

/// Fully-qualified domain name.
struct HostnameCheck;

impl FormatCheck for HostnameCheck {
    fn name(&self) -> &'static str {
        "hostname"
    }

    fn check(&self, raw: &str) -> Result<CheckedValue> {
        if !is_valid_hostname(raw) {
            return Err(SchemaTypeError::format_violation(
                self.name(),
                raw,
                "not a fully-qualified domain name",
            ));
        }
        Ok(CheckedValue::Str(raw.to_string()))
    }
}

/// IP address of either family. The underlying parser is family-agnostic,
/// so both keywords accept both families.
struct IpCheck {
    name: &'static str,
}

static IPV4: IpCheck = IpCheck { name: "ipv4" };
static IPV6: IpCheck = IpCheck { name: "ipv6" };

impl FormatCheck for IpCheck {
    fn name(&self) -> &'static str {
        self.name
    }

    fn check(&self, raw: &str) -> Result<CheckedValue> {
        raw.parse::<IpAddr>()
            .map_err(|e| SchemaTypeError::format_violation(self.name, raw, e.to_string()))?;
        Ok(CheckedValue::Str(raw.to_string()))
    }
}

/// Absolute URI or IRI. The URI keyword additionally requires an all-ASCII
/// input; non-ASCII characters belong to IRIs.
struct ResourceIdCheck {
    name: &'static str,
    ascii_only: bool,
}

static URI: ResourceIdCheck = ResourceIdCheck {
    name: "uri",
    ascii_only: true,
};
static IRI: ResourceIdCheck = ResourceIdCheck {
    name: "iri",
    ascii_only: false,
};

impl FormatCheck for ResourceIdCheck {
    fn name(&self) -> &'static str {
        self.name
    }

    fn check(&self, raw: &str) -> Result<CheckedValue> {
        // The URL parser would percent-encode these; the grammar treats
        // them as invalid characters outside a percent-encoding.
        if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(SchemaTypeError::format_violation(
                self.name,
                raw,
                "contains whitespace or control characters",
            ));
        }
        if self.ascii_only && !raw.is_ascii() {
            return Err(SchemaTypeError::format_violation(
                self.name,
                raw,
                "non-ASCII characters are only permitted in an IRI",
            ));
        }
        Url::parse(raw)
            .map_err(|e| SchemaTypeError::format_violation(self.name, raw, e.to_string()))?;
        Ok(CheckedValue::Str(raw.to_string()))
    }
}

/// A format that is named in the vocabulary but always rejected.
struct UnsupportedCheck {
    name: &'static str,
    reason: &'static str,
}

static IDN_EMAIL: UnsupportedCheck = UnsupportedCheck {
    name: "idn-email",
    reason: "internationalized email addresses (RFC 6531) are not supported",
};
static IDN_HOSTNAME: UnsupportedCheck = UnsupportedCheck {
    name: "idn-hostname",
    reason: "internationalized hostnames are not supported",
};

impl FormatCheck for UnsupportedCheck {
    fn name(&self) -> &'static str {
        self.name
    }

    fn check(&self, _raw: &str) -> Result<CheckedValue> {
        Err(SchemaTypeError::unsupported_format(self.name, self.reason))
    }
}
