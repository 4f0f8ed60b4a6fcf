//! # Records and Record Descriptors
//!
//! A record is a typed payload object. Every record type implements
//! [`Record`] (decode, encode, re-validate) on top of [`Codec`] and
//! publishes a static [`RecordDescriptor`]: its wire name, namespace,
//! version, and the ordered list of declared fields with their kinds.
//!
//! Descriptors are plain data. The codec itself never consults them for
//! field values; they drive the undeclared-key check in
//! [`ObjectReader`](crate::codec::ObjectReader), schema generation, and
//! tooling that lists payload shapes.

use serde_json::Value;

use crate::codec::Codec;
use crate::error::{NsaError, ValidationError};
use crate::path::FieldPath;

/// The kind of value a declared field holds.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Plain string.
    String,
    /// 64-bit signed integer; booleans rejected.
    Integer,
    /// Boolean.
    Boolean,
    /// Calendar date, `YYYY-MM-DD`.
    Date,
    /// RFC 3339 date-time with offset.
    DateTime,
    /// Canonical lowercase hyphenated UUID.
    Uuid,
    /// E.164-like phone number.
    Phone,
    /// `NNNNN` or `NNNNN-NNNN`.
    ZipCode,
    /// Email address (string, unchecked).
    Email,
    /// Any JSON value.
    Any,
    /// Closed set of string literals.
    Enum {
        /// Enumeration name.
        name: &'static str,
        /// Accepted literals.
        values: &'static [&'static str],
    },
    /// Ordered list of another kind.
    List(&'static FieldKind),
    /// Nested record.
    Record(&'static RecordDescriptor),
}

impl FieldKind {
    /// Short label for the kind, as shown in listings.
    pub fn label(&self) -> String {
        match self {
            Self::String => "String".to_string(),
            Self::Integer => "Int".to_string(),
            Self::Boolean => "Boolean".to_string(),
            Self::Date => "Date".to_string(),
            Self::DateTime => "DateTime".to_string(),
            Self::Uuid => "UUID".to_string(),
            Self::Phone => "Phone".to_string(),
            Self::ZipCode => "ZIPCode".to_string(),
            Self::Email => "Email".to_string(),
            Self::Any => "Any".to_string(),
            Self::Enum { name, .. } => (*name).to_string(),
            Self::List(inner) => format!("[{}]", inner.label()),
            Self::Record(descriptor) => descriptor.name.to_string(),
        }
    }
}

/// A declared field of a record.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Wire name, exactly as it appears in payloads.
    pub name: &'static str,
    /// Value kind.
    pub kind: FieldKind,
    /// Whether absence is a validation failure.
    pub required: bool,
}

impl FieldSpec {
    /// A field that must be present and non-null.
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    /// A field that may be absent or null.
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// Static description of a record type.
#[derive(Debug)]
pub struct RecordDescriptor {
    /// Record name, e.g. `Profile`.
    pub name: &'static str,
    /// Message namespace, e.g. `api.tweet.profile`.
    pub namespace: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Message version.
    pub version: u32,
    /// Declared fields, in wire order.
    pub fields: &'static [FieldSpec],
}

impl RecordDescriptor {
    /// Look up a declared field by wire name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Wire names of all declared fields, in order.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    /// Wire names of the required fields, in order.
    pub fn required_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect()
    }
}

/// A payload record: decode from, encode to, and re-validate against its
/// untyped structural form.
///
/// Implementors provide [`Codec`] (field-by-field decode and encode at a
/// path), [`Record::descriptor`], and [`Record::validate`]. The provided
/// methods add the top-level entry points.
pub trait Record: Codec {
    /// The static descriptor for this record type.
    fn descriptor() -> &'static RecordDescriptor;

    /// Re-check every constrained field of an already-built record,
    /// recursing into nested records and list elements.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] at `path` for the first field that no
    /// longer satisfies its kind.
    fn validate_at(&self, path: &FieldPath) -> Result<(), ValidationError>;

    /// Re-check every constrained field, reporting paths from the record root.
    ///
    /// # Errors
    ///
    /// See [`Record::validate_at`].
    fn validate(&self) -> Result<(), ValidationError> {
        self.validate_at(&FieldPath::record(Self::descriptor().name))
    }

    /// Decode a record from an untyped value.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `value` is not an object or any
    /// declared field is missing or invalid.
    fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let descriptor = Self::descriptor();
        Self::decode(value, &FieldPath::record(descriptor.name)).map_err(|e| {
            tracing::debug!(record = descriptor.name, error = %e, "payload rejected");
            e
        })
    }

    /// Re-validate, then encode a record into its untyped value.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if [`Record::validate_at`] or the
    /// encode-time format checks fail.
    fn to_value(&self) -> Result<Value, ValidationError> {
        let path = FieldPath::record(Self::descriptor().name);
        self.validate_at(&path)?;
        self.encode(&path)
    }

    /// Parse JSON text and decode it.
    ///
    /// # Errors
    ///
    /// Returns [`NsaError::Json`] for malformed text and
    /// [`NsaError::Validation`] for a malformed payload.
    fn from_json_str(s: &str) -> Result<Self, NsaError> {
        let value: Value = serde_json::from_str(s)?;
        Ok(Self::from_value(&value)?)
    }

    /// Encode and render as compact JSON text.
    ///
    /// # Errors
    ///
    /// See [`Record::to_value`].
    fn to_json_string(&self) -> Result<String, NsaError> {
        Ok(serde_json::to_string(&self.to_value()?)?)
    }

    /// Encode and render as pretty-printed JSON text.
    ///
    /// # Errors
    ///
    /// See [`Record::to_value`].
    fn to_json_pretty(&self) -> Result<String, NsaError> {
        Ok(serde_json::to_string_pretty(&self.to_value()?)?)
    }
}
