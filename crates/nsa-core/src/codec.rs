//! # Codec — Typed Values ↔ Untyped Structural Values
//!
//! [`Codec`] is the one seam every field kind goes through: primitive
//! scalars, validated newtypes, lists, and whole records. Decoding reads a
//! `serde_json::Value` at a [`FieldPath`]; encoding writes the canonical
//! representation back.
//!
//! ## Null handling
//!
//! `Codec::decode` only ever sees present, non-null values. Absence is
//! decided one level up: [`validate`] and [`ObjectReader::optional`] map a
//! null to `None`, while [`is_required`] and [`ObjectReader::required`]
//! turn it into a [`ValidationError`] naming the field.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::path::FieldPath;
use crate::record::RecordDescriptor;

/// A type with a canonical untyped representation.
pub trait Codec: Sized {
    /// Human-readable kind, used as the `expected` part of errors.
    const KIND: &'static str;

    /// Validate and convert a present, non-null value.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] at `path` if the value does not have
    /// the expected structure or format.
    fn decode(value: &Value, path: &FieldPath) -> Result<Self, ValidationError>;

    /// Produce the canonical untyped representation, re-validating any
    /// format constraint on the way out.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] at `path` if the value no longer
    /// satisfies its constraints.
    fn encode(&self, path: &FieldPath) -> Result<Value, ValidationError>;
}

/// Validate a value outside any record: `null` is absent, anything else
/// must decode as `T`.
///
/// # Errors
///
/// Returns the decoder's [`ValidationError`] for a present, invalid value.
pub fn validate<T: Codec>(value: &Value) -> Result<Option<T>, ValidationError> {
    validate_at(value, &FieldPath::root())
}

/// Like [`validate`], reporting failures at `path`.
pub fn validate_at<T: Codec>(value: &Value, path: &FieldPath) -> Result<Option<T>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        present => T::decode(present, path).map(Some),
    }
}

/// Reject an absent value for a required field.
///
/// # Errors
///
/// Returns a missing-value [`ValidationError`] at `path` when `value` is `None`.
pub fn is_required<T: Codec>(value: Option<T>, path: &FieldPath) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::missing(path.clone(), T::KIND))
}

impl<T: Codec> Codec for Vec<T> {
    const KIND: &'static str = "list";

    fn decode(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        let items = value
            .as_array()
            .ok_or_else(|| ValidationError::invalid(path.clone(), format!("list of {}", T::KIND), value))?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let item_path = path.index(i);
                match item {
                    Value::Null => Err(ValidationError::missing(item_path, T::KIND)),
                    present => T::decode(present, &item_path),
                }
            })
            .collect()
    }

    fn encode(&self, path: &FieldPath) -> Result<Value, ValidationError> {
        self.iter()
            .enumerate()
            .map(|(i, item)| item.encode(&path.index(i)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}

/// Field-by-field reader over a JSON object being decoded into a record.
///
/// Missing keys and explicit nulls are treated alike. Keys the record does
/// not declare are ignored.
#[derive(Debug)]
pub struct ObjectReader<'a> {
    fields: &'a Map<String, Value>,
    path: &'a FieldPath,
}

impl<'a> ObjectReader<'a> {
    /// Open `value` as an instance of the record described by `descriptor`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] at `path` if `value` is not an object.
    pub fn new(
        value: &'a Value,
        path: &'a FieldPath,
        descriptor: &RecordDescriptor,
    ) -> Result<Self, ValidationError> {
        let fields = value
            .as_object()
            .ok_or_else(|| ValidationError::invalid(path.clone(), descriptor.name, value))?;

        for key in fields.keys() {
            if descriptor.field(key).is_none() {
                tracing::trace!(record = descriptor.name, %path, key = %key, "ignoring undeclared key");
            }
        }

        Ok(Self { fields, path })
    }

    /// Decode a field that must be present and non-null.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the field is absent, null, or invalid.
    pub fn required<T: Codec>(&self, name: &str) -> Result<T, ValidationError> {
        let path = self.path.field(name);
        let value = self.fields.get(name).unwrap_or(&Value::Null);
        is_required(validate_at(value, &path)?, &path)
    }

    /// Decode a field that may be absent or null.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the field is present but invalid.
    pub fn optional<T: Codec>(&self, name: &str) -> Result<Option<T>, ValidationError> {
        match self.fields.get(name) {
            None => Ok(None),
            Some(value) => validate_at(value, &self.path.field(name)),
        }
    }
}

/// Builder for the JSON object an encoded record becomes.
///
/// Keys are emitted in the order they are written, which is the record's
/// declared field order.
#[derive(Debug)]
pub struct ObjectWriter<'a> {
    fields: Map<String, Value>,
    path: &'a FieldPath,
}

impl<'a> ObjectWriter<'a> {
    /// Start an empty object at `path`.
    pub fn new(path: &'a FieldPath) -> Self {
        Self {
            fields: Map::new(),
            path,
        }
    }

    /// Write a required field.
    ///
    /// # Errors
    ///
    /// Returns the field's encode [`ValidationError`].
    pub fn required<T: Codec>(mut self, name: &str, value: &T) -> Result<Self, ValidationError> {
        let encoded = value.encode(&self.path.field(name))?;
        self.fields.insert(name.to_string(), encoded);
        Ok(self)
    }

    /// Write an optional field; `None` becomes an explicit `null`.
    ///
    /// # Errors
    ///
    /// Returns the field's encode [`ValidationError`].
    pub fn optional<T: Codec>(mut self, name: &str, value: Option<&T>) -> Result<Self, ValidationError> {
        let encoded = match value {
            Some(v) => v.encode(&self.path.field(name))?,
            None => Value::Null,
        };
        self.fields.insert(name.to_string(), encoded);
        Ok(self)
    }

    /// Finish the object.
    pub fn finish(self) -> Value {
        Value::Object(self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FieldKind, FieldSpec};
    use serde_json::json;

    static PAIR_FIELDS: [FieldSpec; 2] = [
        FieldSpec::required("name", FieldKind::String),
        FieldSpec::optional("count", FieldKind::Integer),
    ];

    static PAIR: RecordDescriptor = RecordDescriptor {
        name: "Pair",
        namespace: "test.pair",
        description: "Test pair",
        version: 1,
        fields: &PAIR_FIELDS,
    };

    #[test]
    fn test_validate_null_is_absent() {
        assert_eq!(validate::<String>(&Value::Null).unwrap(), None);
    }

    #[test]
    fn test_is_required_rejects_none() {
        let path = FieldPath::record("Pair").field("name");
        let err = is_required::<String>(None, &path).unwrap_err();
        assert!(err.is_missing());
        assert_eq!(err.path, path);
    }

    #[test]
    fn test_list_preserves_order() {
        let value = json!(["c", "a", "b"]);
        let decoded: Vec<String> = Vec::decode(&value, &FieldPath::root()).unwrap();
        assert_eq!(decoded, vec!["c", "a", "b"]);
        assert_eq!(decoded.encode(&FieldPath::root()).unwrap(), value);
    }

    #[test]
    fn test_list_single_failure_fails_whole_list() {
        let path = FieldPath::record("Pair").field("tags");
        let err = Vec::<String>::decode(&json!(["a", 1, "c"]), &path).unwrap_err();
        assert_eq!(err.path.to_string(), "Pair.tags[1]");
    }

    #[test]
    fn test_list_rejects_null_element() {
        let err = Vec::<String>::decode(&json!(["a", null]), &FieldPath::root()).unwrap_err();
        assert!(err.is_missing());
        assert_eq!(err.path.to_string(), "[1]");
    }

    #[test]
    fn test_list_rejects_non_array() {
        let err = Vec::<String>::decode(&json!({"a": 1}), &FieldPath::root()).unwrap_err();
        assert_eq!(err.expected, "list of string");
    }

    #[test]
    fn test_reader_rejects_non_object() {
        let path = FieldPath::record("Pair");
        let err = ObjectReader::new(&json!([1, 2]), &path, &PAIR).unwrap_err();
        assert_eq!(err.expected, "Pair");
        assert_eq!(err.path, path);
    }

    #[test]
    fn test_reader_required_and_optional() {
        let path = FieldPath::record("Pair");
        let value = json!({"name": "a", "extra": true});
        let reader = ObjectReader::new(&value, &path, &PAIR).unwrap();
        assert_eq!(reader.required::<String>("name").unwrap(), "a");
        assert_eq!(reader.optional::<i64>("count").unwrap(), None);

        let err = reader.required::<i64>("count").unwrap_err();
        assert_eq!(err.path.to_string(), "Pair.count");
        assert!(err.is_missing());
    }

    #[test]
    fn test_reader_required_rejects_explicit_null() {
        let path = FieldPath::record("Pair");
        let value = json!({"name": null});
        let reader = ObjectReader::new(&value, &path, &PAIR).unwrap();
        assert!(reader.required::<String>("name").unwrap_err().is_missing());
    }

    #[test]
    fn test_writer_emits_declared_order_and_nulls() {
        let path = FieldPath::record("Pair");
        let value = ObjectWriter::new(&path)
            .required("name", &"a".to_string())
            .unwrap()
            .optional::<i64>("count", None)
            .unwrap()
            .finish();
        assert_eq!(value, json!({"name": "a", "count": null}));
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["name", "count"]);
    }
}
