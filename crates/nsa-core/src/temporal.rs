//! # Temporal Types — Calendar Dates and Offset Date-Times
//!
//! [`Date`] is a calendar date with no time component; its canonical
//! form is ISO-8601 `YYYY-MM-DD`. [`DateTime`] is a timezone-aware instant
//! that keeps the offset it was given; its canonical form is RFC 3339 with
//! `Z` for UTC and sub-seconds only when they are non-zero.
//!
//! Both types accept either an already-typed chrono value (`From`) or a
//! string in their canonical format. Malformed strings are rejected, never
//! coerced.

use chrono::{FixedOffset, NaiveDate, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::Codec;
use crate::error::ValidationError;
use crate::path::FieldPath;

/// A calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date(NaiveDate);

impl Date {
    /// Build a date from year, month, and day.
    ///
    /// Returns `None` for impossible dates such as February 30th.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse a `YYYY-MM-DD` string.
    ///
    /// The shape is checked before parsing, so unpadded forms such as
    /// `2020-1-1` are rejected rather than normalised.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the string is not a real calendar
    /// date in `YYYY-MM-DD` form.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let shaped = s.len() == 10
            && s.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });
        let invalid = || ValidationError::invalid(FieldPath::root(), Self::KIND, &Value::String(s.to_string()));
        if !shaped {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Access the inner `NaiveDate`.
    pub fn as_naive(&self) -> &NaiveDate {
        &self.0
    }

    /// Render as `YYYY-MM-DD`.
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<Date> for String {
    fn from(date: Date) -> Self {
        date.to_iso8601()
    }
}

impl TryFrom<String> for Date {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl std::str::FromStr for Date {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl Codec for Date {
    const KIND: &'static str = "date (YYYY-MM-DD)";

    fn decode(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        match value.as_str() {
            Some(s) => Self::parse(s).map_err(|e| e.at(path.clone())),
            None => Err(ValidationError::invalid(path.clone(), Self::KIND, value)),
        }
    }

    fn encode(&self, _path: &FieldPath) -> Result<Value, ValidationError> {
        Ok(Value::String(self.to_iso8601()))
    }
}

/// A timezone-aware date-time.
///
/// Equality and ordering compare the instant, so `12:00:00Z` equals
/// `14:00:00+02:00`; the offset is still kept for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateTime(chrono::DateTime<FixedOffset>);

impl DateTime {
    /// Parse an RFC 3339 / ISO-8601 string with an explicit offset.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the string is not RFC 3339, including
    /// when the offset is missing.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        chrono::DateTime::parse_from_rfc3339(s)
            .map(Self)
            .map_err(|_| ValidationError::invalid(FieldPath::root(), Self::KIND, &Value::String(s.to_string())))
    }

    /// Access the inner chrono value.
    pub fn as_datetime(&self) -> &chrono::DateTime<FixedOffset> {
        &self.0
    }

    /// The same instant in UTC.
    pub fn to_utc(&self) -> chrono::DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }

    /// Render as RFC 3339 (e.g., `2026-01-15T12:00:00Z`,
    /// `2026-01-15T17:00:00.250+05:00`).
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

impl<Tz: TimeZone> From<chrono::DateTime<Tz>> for DateTime {
    fn from(dt: chrono::DateTime<Tz>) -> Self {
        Self(dt.fixed_offset())
    }
}

impl From<DateTime> for String {
    fn from(dt: DateTime) -> Self {
        dt.to_rfc3339()
    }
}

impl TryFrom<String> for DateTime {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl std::str::FromStr for DateTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl Codec for DateTime {
    const KIND: &'static str = "date-time (RFC 3339)";

    fn decode(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        match value.as_str() {
            Some(s) => Self::parse(s).map_err(|e| e.at(path.clone())),
            None => Err(ValidationError::invalid(path.clone(), Self::KIND, value)),
        }
    }

    fn encode(&self, _path: &FieldPath) -> Result<Value, ValidationError> {
        Ok(Value::String(self.to_rfc3339()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ---- Date ----

    #[test]
    fn test_date_parse_and_render() {
        let date = Date::parse("2020-01-01").unwrap();
        assert_eq!(date, Date::from_ymd(2020, 1, 1).unwrap());
        assert_eq!(date.to_iso8601(), "2020-01-01");
        assert_eq!(date.to_string(), "2020-01-01");
    }

    #[test]
    fn test_date_rejects_unpadded() {
        assert!(Date::parse("2020-1-1").is_err());
    }

    #[test]
    fn test_date_rejects_impossible() {
        assert!(Date::parse("2021-02-30").is_err());
        assert!(Date::parse("2021-13-01").is_err());
    }

    #[test]
    fn test_date_rejects_datetime_and_garbage() {
        assert!(Date::parse("2020-01-01T00:00:00Z").is_err());
        assert!(Date::parse("20200101").is_err());
        assert!(Date::parse("not-a-date").is_err());
        assert!(Date::parse("").is_err());
    }

    #[test]
    fn test_date_leap_day() {
        assert!(Date::parse("2024-02-29").is_ok());
        assert!(Date::parse("2023-02-29").is_err());
    }

    #[test]
    fn test_date_codec_error_path() {
        let path = FieldPath::record("Tweet").field("date");
        let err = Date::decode(&json!("01/02/2020"), &path).unwrap_err();
        assert_eq!(err.path, path);
        assert_eq!(err.actual, Some(json!("01/02/2020")));

        let err = Date::decode(&json!(20200102), &path).unwrap_err();
        assert_eq!(err.path, path);
    }

    #[test]
    fn test_date_from_naive() {
        let naive = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        assert_eq!(Date::from(naive).to_iso8601(), "1999-12-31");
    }

    #[test]
    fn test_date_serde_roundtrip() {
        let date = Date::parse("2020-06-30").unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2020-06-30\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
        assert!(serde_json::from_str::<Date>("\"2020-6-30\"").is_err());
    }

    // ---- DateTime ----

    #[test]
    fn test_datetime_utc_canonical() {
        let dt = DateTime::parse("2026-01-15T12:00:00Z").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-01-15T12:00:00Z");
    }

    #[test]
    fn test_datetime_keeps_offset() {
        let dt = DateTime::parse("2026-01-15T17:00:00+05:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-01-15T17:00:00+05:00");
        assert_eq!(dt.to_utc().to_rfc3339_opts(SecondsFormat::Secs, true), "2026-01-15T12:00:00Z");
    }

    #[test]
    fn test_datetime_keeps_subseconds() {
        let dt = DateTime::parse("2026-01-15T12:00:00.250Z").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-01-15T12:00:00.250Z");
    }

    #[test]
    fn test_datetime_equality_is_by_instant() {
        let a = DateTime::parse("2026-01-15T12:00:00Z").unwrap();
        let b = DateTime::parse("2026-01-15T14:00:00+02:00").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_datetime_requires_offset() {
        assert!(DateTime::parse("2026-01-15T12:00:00").is_err());
        assert!(DateTime::parse("2026-01-15").is_err());
        assert!(DateTime::parse("yesterday").is_err());
    }

    #[test]
    fn test_datetime_from_chrono() {
        let utc = Utc.with_ymd_and_hms(2026, 6, 30, 23, 59, 59).unwrap();
        assert_eq!(DateTime::from(utc).to_rfc3339(), "2026-06-30T23:59:59Z");
    }

    #[test]
    fn test_datetime_codec() {
        let value = json!("2026-01-15T12:00:00Z");
        let dt = DateTime::decode(&value, &FieldPath::root()).unwrap();
        assert_eq!(dt.encode(&FieldPath::root()).unwrap(), value);
        assert!(DateTime::decode(&json!(true), &FieldPath::root()).is_err());
    }
}
