//! # Payload Registry
//!
//! The top-level messages this crate knows, addressable by a short name
//! (`profile`, `my-tweets`, `stats`). Tooling uses the registry to pick a
//! record type at runtime without matching on record types itself.

use std::str::FromStr;

use nsa_core::{NsaError, Record, RecordDescriptor, ValidationError};
use serde_json::Value;

use crate::my_tweets::MyTweets;
use crate::profile::Profile;
use crate::stats::Stats;

/// A top-level payload message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    /// `api.tweet.profile`
    Profile,
    /// `api.tweet.myTweets`
    MyTweets,
    /// `api.tweet.stats`
    Stats,
}

impl PayloadKind {
    /// Every payload kind, in registry order.
    pub fn all() -> &'static [PayloadKind] {
        &[Self::Profile, Self::MyTweets, Self::Stats]
    }

    /// Short name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::MyTweets => "my-tweets",
            Self::Stats => "stats",
        }
    }

    /// Descriptor of the root record.
    pub fn descriptor(&self) -> &'static RecordDescriptor {
        match self {
            Self::Profile => Profile::descriptor(),
            Self::MyTweets => MyTweets::descriptor(),
            Self::Stats => Stats::descriptor(),
        }
    }

    /// Decode `value` as this payload and encode it back, yielding the
    /// canonical representation.
    ///
    /// # Errors
    ///
    /// Returns the decode or encode [`ValidationError`].
    pub fn normalize(&self, value: &Value) -> Result<Value, ValidationError> {
        match self {
            Self::Profile => Profile::from_value(value)?.to_value(),
            Self::MyTweets => MyTweets::from_value(value)?.to_value(),
            Self::Stats => Stats::from_value(value)?.to_value(),
        }
    }
}

impl std::fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayloadKind {
    type Err = NsaError;

    /// Accepts the short name or the message namespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s || kind.descriptor().namespace == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::all().iter().map(PayloadKind::as_str).collect();
                NsaError::Schema(format!(
                    "unknown payload kind {s:?} (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_as_str_roundtrip() {
        for kind in PayloadKind::all() {
            let parsed: PayloadKind = kind.as_str().parse().unwrap();
            assert_eq!(*kind, parsed);
        }
    }

    #[test]
    fn test_parse_by_namespace() {
        assert_eq!(
            "api.tweet.myTweets".parse::<PayloadKind>().unwrap(),
            PayloadKind::MyTweets
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "tweet".parse::<PayloadKind>().unwrap_err();
        assert!(err.to_string().contains("my-tweets"));
    }

    #[test]
    fn test_descriptor_names() {
        assert_eq!(PayloadKind::Profile.descriptor().name, "Profile");
        assert_eq!(PayloadKind::MyTweets.descriptor().name, "MyTweets");
        assert_eq!(PayloadKind::Stats.descriptor().name, "Stats");
    }

    #[test]
    fn test_normalize_fills_optional_nulls() {
        let normalized = PayloadKind::Profile
            .normalize(&json!({
                "id": "0f8fad5b-d9cb-469f-a165-70867728950e",
                "username": "ada",
                "email": "ada@example.com",
                "unknown": 1
            }))
            .unwrap();
        assert_eq!(normalized["firstName"], Value::Null);
        assert!(normalized.get("unknown").is_none());
    }

    #[test]
    fn test_normalize_reports_errors() {
        let err = PayloadKind::Stats.normalize(&json!([])).unwrap_err();
        assert_eq!(err.path.to_string(), "Stats");
    }
}
