//! # Enumerations
//!
//! Closed enumerations used by payload fields. Each enum has one wire
//! spelling per variant, `as_str`/`FromStr` that agree with serde, and an
//! exhaustive [`Codec`] so that unknown literals are rejected on decode.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::codec::Codec;
use crate::error::ValidationError;
use crate::path::FieldPath;

/// Kind of account behind a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    /// A business account.
    Business,
    /// A content creator account.
    Creator,
}

impl AccountType {
    /// Wire spellings of every variant, in declaration order.
    pub const VALUES: &'static [&'static str] = &["BUSINESS", "CREATOR"];

    /// Returns every variant in declaration order.
    pub fn all() -> &'static [AccountType] {
        &[Self::Business, Self::Creator]
    }

    /// Returns the wire spelling of this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Business => "BUSINESS",
            Self::Creator => "CREATOR",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = ValidationError;

    /// Parse a wire spelling. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUSINESS" => Ok(Self::Business),
            "CREATOR" => Ok(Self::Creator),
            other => Err(ValidationError::invalid(
                FieldPath::root(),
                Self::KIND,
                &Value::String(other.to_string()),
            )),
        }
    }
}

impl Codec for AccountType {
    const KIND: &'static str = "AccountType (BUSINESS | CREATOR)";

    fn decode(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        match value.as_str() {
            Some(s) => s.parse().map_err(|e: ValidationError| e.at(path.clone())),
            None => Err(ValidationError::invalid(path.clone(), Self::KIND, value)),
        }
    }

    fn encode(&self, _path: &FieldPath) -> Result<Value, ValidationError> {
        Ok(Value::String(self.as_str().to_string()))
    }
}
