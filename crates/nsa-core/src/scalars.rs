//! # Primitive Validators
//!
//! [`Codec`] implementations for the plain JSON kinds (string, integer,
//! boolean, any) and the named `validate_*` entry points for every
//! primitive kind. Pattern and temporal kinds live in [`crate::identity`]
//! and [`crate::temporal`]; their validators are re-exported here so that
//! one module lists the whole primitive library.
//!
//! Every validator returns `Ok(None)` for `null` and leaves the
//! required-or-optional decision to the record.

use serde_json::Value;

use crate::codec::{validate, Codec};
use crate::error::ValidationError;
use crate::identity::{Email, Phone, Uuid, ZipCode};
use crate::path::FieldPath;
use crate::temporal::{Date, DateTime};

impl Codec for String {
    const KIND: &'static str = "string";

    fn decode(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ValidationError::invalid(path.clone(), Self::KIND, value))
    }

    fn encode(&self, _path: &FieldPath) -> Result<Value, ValidationError> {
        Ok(Value::String(self.clone()))
    }
}

impl Codec for i64 {
    const KIND: &'static str = "integer";

    /// Accepts JSON integers that fit in an `i64`. Booleans are rejected
    /// outright, as are floats even when integral (`1.0`).
    fn decode(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        match value {
            Value::Number(n) => n.as_i64().ok_or_else(|| {
                let expected = if n.is_u64() {
                    "integer within 64-bit signed range"
                } else {
                    Self::KIND
                };
                ValidationError::invalid(path.clone(), expected, value)
            }),
            _ => Err(ValidationError::invalid(path.clone(), Self::KIND, value)),
        }
    }

    fn encode(&self, _path: &FieldPath) -> Result<Value, ValidationError> {
        Ok(Value::from(*self))
    }
}

impl Codec for bool {
    const KIND: &'static str = "boolean";

    fn decode(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        value
            .as_bool()
            .ok_or_else(|| ValidationError::invalid(path.clone(), Self::KIND, value))
    }

    fn encode(&self, _path: &FieldPath) -> Result<Value, ValidationError> {
        Ok(Value::Bool(*self))
    }
}

/// Opaque passthrough.
impl Codec for Value {
    const KIND: &'static str = "any";

    fn decode(value: &Value, _path: &FieldPath) -> Result<Self, ValidationError> {
        Ok(value.clone())
    }

    fn encode(&self, _path: &FieldPath) -> Result<Value, ValidationError> {
        Ok(self.clone())
    }
}

/// Validate a string.
pub fn validate_string(value: &Value) -> Result<Option<String>, ValidationError> {
    validate(value)
}

/// Validate an integer. Booleans are rejected.
pub fn validate_integer(value: &Value) -> Result<Option<i64>, ValidationError> {
    validate(value)
}

/// Validate a boolean.
pub fn validate_bool(value: &Value) -> Result<Option<bool>, ValidationError> {
    validate(value)
}

/// Validate a calendar date given as `YYYY-MM-DD`.
pub fn validate_date(value: &Value) -> Result<Option<Date>, ValidationError> {
    validate(value)
}

/// Validate an RFC 3339 date-time with offset.
pub fn validate_datetime(value: &Value) -> Result<Option<DateTime>, ValidationError> {
    validate(value)
}

/// Validate a canonical lowercase, hyphenated UUID.
pub fn validate_uuid(value: &Value) -> Result<Option<Uuid>, ValidationError> {
    validate(value)
}

/// Validate an E.164-like phone number.
pub fn validate_phone(value: &Value) -> Result<Option<Phone>, ValidationError> {
    validate(value)
}

/// Validate a `NNNNN` or `NNNNN-NNNN` ZIP code.
pub fn validate_zip_code(value: &Value) -> Result<Option<ZipCode>, ValidationError> {
    validate(value)
}

/// Validate an email address. Only the string shape is checked.
pub fn validate_email(value: &Value) -> Result<Option<Email>, ValidationError> {
    validate(value)
}

/// Accept any value unchanged.
pub fn validate_any(value: &Value) -> Result<Option<Value>, ValidationError> {
    validate(value)
}

/// Validate a list whose elements all decode as `T`, preserving order.
pub fn validate_list<T: Codec>(value: &Value) -> Result<Option<Vec<T>>, ValidationError> {
    validate(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_accepts_string() {
        assert_eq!(validate_string(&json!("hi")).unwrap().as_deref(), Some("hi"));
    }

    #[test]
    fn test_string_rejects_number() {
        let err = validate_string(&json!(5)).unwrap_err();
        assert_eq!(err.expected, "string");
        assert_eq!(err.actual, Some(json!(5)));
    }

    #[test]
    fn test_integer_rejects_booleans() {
        assert!(validate_integer(&json!(true)).is_err());
        assert!(validate_integer(&json!(false)).is_err());
    }

    #[test]
    fn test_integer_rejects_floats() {
        assert!(validate_integer(&json!(1.5)).is_err());
        assert!(validate_integer(&json!(1.0)).is_err());
    }

    #[test]
    fn test_integer_rejects_out_of_range() {
        let err = validate_integer(&json!(u64::MAX)).unwrap_err();
        assert_eq!(err.expected, "integer within 64-bit signed range");
    }

    #[test]
    fn test_integer_accepts_negative_and_zero() {
        assert_eq!(validate_integer(&json!(-7)).unwrap(), Some(-7));
        assert_eq!(validate_integer(&json!(0)).unwrap(), Some(0));
    }

    #[test]
    fn test_integer_rejects_numeric_string() {
        assert!(validate_integer(&json!("12")).is_err());
    }

    #[test]
    fn test_bool_accepts_only_bool() {
        assert_eq!(validate_bool(&json!(true)).unwrap(), Some(true));
        assert!(validate_bool(&json!(1)).is_err());
        assert!(validate_bool(&json!("true")).is_err());
    }

    #[test]
    fn test_null_is_absent_for_every_kind() {
        let null = Value::Null;
        assert!(validate_string(&null).unwrap().is_none());
        assert!(validate_integer(&null).unwrap().is_none());
        assert!(validate_bool(&null).unwrap().is_none());
        assert!(validate_date(&null).unwrap().is_none());
        assert!(validate_datetime(&null).unwrap().is_none());
        assert!(validate_uuid(&null).unwrap().is_none());
        assert!(validate_phone(&null).unwrap().is_none());
        assert!(validate_zip_code(&null).unwrap().is_none());
        assert!(validate_email(&null).unwrap().is_none());
        assert!(validate_any(&null).unwrap().is_none());
        assert!(validate_list::<String>(&null).unwrap().is_none());
    }

    #[test]
    fn test_any_passes_through() {
        let value = json!({"nested": [1, "two", null]});
        assert_eq!(validate_any(&value).unwrap(), Some(value));
    }

    #[test]
    fn test_list_of_integers() {
        assert_eq!(validate_list::<i64>(&json!([3, 1, 2])).unwrap(), Some(vec![3, 1, 2]));
        assert!(validate_list::<i64>(&json!([1, true])).is_err());
        assert!(validate_list::<i64>(&json!("1,2")).is_err());
    }
}
