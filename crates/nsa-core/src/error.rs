//! # Error Types
//!
//! Every codec failure is a [`ValidationError`]: the path of the offending
//! field, what was expected there, and what was found (or that nothing was
//! found). Failures are raised at the point of violation and propagate
//! unchanged; no partial record is ever returned.
//!
//! [`NsaError`] wraps validation failures together with the JSON text
//! errors that the string convenience methods can hit.

use serde_json::Value;
use thiserror::Error;

use crate::path::FieldPath;

/// Longest rendering of an offending value kept in error messages.
const MAX_ACTUAL_LEN: usize = 64;

/// A value failed validation.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{path}: expected {expected}, found {}", describe_actual(.actual.as_ref()))]
pub struct ValidationError {
    /// Where the failure happened.
    pub path: FieldPath,
    /// The kind or format that was expected.
    pub expected: String,
    /// The offending value. `None` means the value was absent.
    pub actual: Option<Value>,
}

impl ValidationError {
    /// A present value that does not conform.
    pub fn invalid(path: FieldPath, expected: impl Into<String>, actual: &Value) -> Self {
        Self {
            path,
            expected: expected.into(),
            actual: Some(actual.clone()),
        }
    }

    /// A required value that is absent or null.
    pub fn missing(path: FieldPath, expected: impl Into<String>) -> Self {
        Self {
            path,
            expected: expected.into(),
            actual: None,
        }
    }

    /// Re-home an error raised without context (for example by a newtype
    /// constructor) onto the field it belongs to.
    pub fn at(mut self, path: FieldPath) -> Self {
        self.path = path;
        self
    }

    /// Returns true when the failure is a missing required value.
    pub fn is_missing(&self) -> bool {
        self.actual.is_none()
    }

    /// The name of the innermost field on the error path.
    pub fn field(&self) -> Option<&str> {
        self.path.last_field()
    }
}

/// Top-level error type for the payload codec.
#[derive(Error, Debug)]
pub enum NsaError {
    /// A payload or value failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON text could not be parsed or produced.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A generated schema could not be compiled or used.
    #[error("schema error: {0}")]
    Schema(String),
}

fn describe_actual(actual: Option<&Value>) -> String {
    match actual {
        None => "nothing".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(value) => {
            let rendered = value.to_string();
            if rendered.chars().count() > MAX_ACTUAL_LEN {
                let truncated: String = rendered.chars().take(MAX_ACTUAL_LEN).collect();
                format!("{truncated}…")
            } else {
                rendered
            }
        }
    }
}
