//! # Pattern-Constrained String Newtypes
//!
//! Newtype wrappers for the string kinds that carry a format: [`Uuid`],
//! [`Phone`], [`ZipCode`], and the deliberately unchecked [`Email`].
//!
//! ## Validation
//!
//! Each type validates at construction (`new`), on serde deserialization,
//! on [`Codec::decode`], and again on [`Codec::encode`]. Matches are
//! full-string: a valid ZIP code followed by anything else is rejected.
//!
//! | type      | format |
//! |-----------|--------|
//! | `Uuid`    | `^[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}$` |
//! | `Phone`   | `^\+?[1-9]\d{1,14}$` |
//! | `ZipCode` | `^[0-9]{5}(?:-[0-9]{4})?$` |
//! | `Email`   | any string |

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::Codec;
use crate::error::ValidationError;
use crate::path::FieldPath;

/// Implements `Deserialize` by going through the type's validating `new()`,
/// so invalid values are rejected at deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Implements the string-backed [`Codec`], `as_str`, `Display`, and
/// `AsRef<str>` for a validated newtype with a `check` function.
macro_rules! impl_pattern_string {
    ($ty:ident, $kind:literal) => {
        impl $ty {
            /// Access the string value.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper, returning the string value.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Codec for $ty {
            const KIND: &'static str = $kind;

            fn decode(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
                match value.as_str() {
                    Some(s) if Self::check(s) => Ok(Self(s.to_string())),
                    _ => Err(ValidationError::invalid(path.clone(), Self::KIND, value)),
                }
            }

            fn encode(&self, path: &FieldPath) -> Result<Value, ValidationError> {
                let value = Value::String(self.0.clone());
                if Self::check(&self.0) {
                    Ok(value)
                } else {
                    Err(ValidationError::invalid(path.clone(), Self::KIND, &value))
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl_validating_deserialize!($ty);
    };
}

// ---------------------------------------------------------------------------
// UUID
// ---------------------------------------------------------------------------

/// A UUID in canonical form: lowercase hex, hyphenated 8-4-4-4-12.
///
/// Uppercase, braced, URN, and simple (unhyphenated) forms are rejected
/// even though they name a valid UUID; payloads carry exactly one
/// spelling per identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Uuid(String);

impl Uuid {
    /// Create a UUID from a string, validating the canonical form.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `value` is not a lowercase,
    /// hyphenated UUID.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if Self::check(&s) {
            Ok(Self(s))
        } else {
            Err(ValidationError::invalid(FieldPath::root(), Self::KIND, &Value::String(s)))
        }
    }

    /// Generate a new random (version 4) UUID.
    pub fn new_v4() -> Self {
        Self::from_uuid(uuid::Uuid::new_v4())
    }

    /// Render an existing `uuid::Uuid` in canonical form.
    pub fn from_uuid(id: uuid::Uuid) -> Self {
        Self(id.hyphenated().to_string())
    }

    /// Parse into a `uuid::Uuid`.
    pub fn to_uuid(&self) -> uuid::Uuid {
        // The canonical form is always parseable; nil is unreachable.
        uuid::Uuid::parse_str(&self.0).unwrap_or_default()
    }

    fn check(s: &str) -> bool {
        let bytes = s.as_bytes();
        bytes.len() == 36
            && bytes.iter().enumerate().all(|(i, &b)| match i {
                8 | 13 | 18 | 23 => b == b'-',
                _ => b.is_ascii_digit() || (b'a'..=b'f').contains(&b),
            })
    }
}

impl From<uuid::Uuid> for Uuid {
    fn from(id: uuid::Uuid) -> Self {
        Self::from_uuid(id)
    }
}

impl_pattern_string!(Uuid, "UUID");

// ---------------------------------------------------------------------------
// Phone
// ---------------------------------------------------------------------------

/// An E.164-like phone number.
///
/// # Validation
///
/// - Optional leading `+`
/// - Then digits only, the first in `1..=9`
/// - 2 to 15 digits in total
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Phone(String);

impl Phone {
    /// Create a phone number from a string, validating format.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `value` is not an E.164-like number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if Self::check(&s) {
            Ok(Self(s))
        } else {
            Err(ValidationError::invalid(FieldPath::root(), Self::KIND, &Value::String(s)))
        }
    }

    fn check(s: &str) -> bool {
        let digits = s.strip_prefix('+').unwrap_or(s);
        (2..=15).contains(&digits.len())
            && digits.bytes().all(|b| b.is_ascii_digit())
            && !digits.starts_with('0')
    }
}

impl_pattern_string!(Phone, "phone number");

// ---------------------------------------------------------------------------
// ZIP code
// ---------------------------------------------------------------------------

/// A US ZIP code: five digits, optionally followed by `-` and four digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ZipCode(String);

impl ZipCode {
    /// Create a ZIP code from a string, validating format.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] unless `value` is `NNNNN` or `NNNNN-NNNN`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if Self::check(&s) {
            Ok(Self(s))
        } else {
            Err(ValidationError::invalid(FieldPath::root(), Self::KIND, &Value::String(s)))
        }
    }

    /// The five-digit base code.
    pub fn base(&self) -> &str {
        self.0.get(..5).unwrap_or(&self.0)
    }

    /// The four-digit extension, if present.
    pub fn extension(&self) -> Option<&str> {
        self.0.get(6..)
    }

    fn check(s: &str) -> bool {
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        match s.split_once('-') {
            None => s.len() == 5 && all_digits(s),
            Some((base, ext)) => {
                base.len() == 5 && ext.len() == 4 && all_digits(base) && all_digits(ext)
            }
        }
    }
}

impl_pattern_string!(ZipCode, "ZIP code");

// ---------------------------------------------------------------------------
// Email
// ---------------------------------------------------------------------------

/// An email address.
///
/// Only the string shape is enforced; the address format is accepted as
/// given. Producers that need stricter checks must apply them before
/// building the payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Email(String);

impl Email {
    /// Wrap a string as an email address.
    ///
    /// # Errors
    ///
    /// Never fails; the `Result` keeps the signature uniform with the
    /// other validated newtypes.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(value.into()))
    }

    fn check(_s: &str) -> bool {
        true
    }
}

impl_pattern_string!(Email, "email");
