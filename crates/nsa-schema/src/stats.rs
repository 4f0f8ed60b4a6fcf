//! # Stats — `api.tweet.stats` v1
//!
//! Tweet stats: engagement counters for one tweet on one day.

use nsa_core::{
    Codec, Date, FieldKind, FieldPath, FieldSpec, ObjectReader, ObjectWriter, Record,
    RecordDescriptor, ValidationError,
};
use serde_json::Value;

static STAT_FIELDS: [FieldSpec; 4] = [
    FieldSpec::required("views", FieldKind::Integer),
    FieldSpec::required("likes", FieldKind::Integer),
    FieldSpec::required("retweets", FieldKind::Integer),
    FieldSpec::required("responses", FieldKind::Integer),
];

/// Descriptor for [`Stat`].
pub static STAT: RecordDescriptor = RecordDescriptor {
    name: "Stat",
    namespace: "api.tweet.stats",
    description: "Engagement counters",
    version: 1,
    fields: &STAT_FIELDS,
};

static STATS_FIELDS: [FieldSpec; 3] = [
    FieldSpec::required("id", FieldKind::String),
    FieldSpec::required("date", FieldKind::Date),
    FieldSpec::required("stats", FieldKind::Record(&STAT)),
];

/// Descriptor for [`Stats`].
pub static STATS: RecordDescriptor = RecordDescriptor {
    name: "Stats",
    namespace: "api.tweet.stats",
    description: "Tweet stats",
    version: 1,
    fields: &STATS_FIELDS,
};

/// Engagement counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    views: i64,
    likes: i64,
    retweets: i64,
    responses: i64,
}

impl Stat {
    /// Build the counters.
    pub fn new(views: i64, likes: i64, retweets: i64, responses: i64) -> Self {
        Self {
            views,
            likes,
            retweets,
            responses,
        }
    }

    /// View count.
    pub fn views(&self) -> i64 {
        self.views
    }

    /// Like count.
    pub fn likes(&self) -> i64 {
        self.likes
    }

    /// Retweet count.
    pub fn retweets(&self) -> i64 {
        self.retweets
    }

    /// Response count.
    pub fn responses(&self) -> i64 {
        self.responses
    }
}

impl Codec for Stat {
    const KIND: &'static str = "Stat";

    fn decode(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        let obj = ObjectReader::new(value, path, &STAT)?;
        Ok(Self {
            views: obj.required("views")?,
            likes: obj.required("likes")?,
            retweets: obj.required("retweets")?,
            responses: obj.required("responses")?,
        })
    }

    fn encode(&self, path: &FieldPath) -> Result<Value, ValidationError> {
        Ok(ObjectWriter::new(path)
            .required("views", &self.views)?
            .required("likes", &self.likes)?
            .required("retweets", &self.retweets)?
            .required("responses", &self.responses)?
            .finish())
    }
}

impl Record for Stat {
    fn descriptor() -> &'static RecordDescriptor {
        &STAT
    }

    fn validate_at(&self, _path: &FieldPath) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Stats for one tweet on one day.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    id: String,
    date: Date,
    stats: Stat,
}

impl Stats {
    /// Build the payload.
    pub fn new(id: impl Into<String>, date: Date, stats: Stat) -> Self {
        Self {
            id: id.into(),
            date,
            stats,
        }
    }

    /// Tweet identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Day the counters were taken.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The counters.
    pub fn stats(&self) -> &Stat {
        &self.stats
    }
}

impl Codec for Stats {
    const KIND: &'static str = "Stats";

    fn decode(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        let obj = ObjectReader::new(value, path, &STATS)?;
        Ok(Self {
            id: obj.required("id")?,
            date: obj.required("date")?,
            stats: obj.required("stats")?,
        })
    }

    fn encode(&self, path: &FieldPath) -> Result<Value, ValidationError> {
        Ok(ObjectWriter::new(path)
            .required("id", &self.id)?
            .required("date", &self.date)?
            .required("stats", &self.stats)?
            .finish())
    }
}

impl Record for Stats {
    fn descriptor() -> &'static RecordDescriptor {
        &STATS
    }

    fn validate_at(&self, path: &FieldPath) -> Result<(), ValidationError> {
        self.stats.validate_at(&path.field("stats"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stat_roundtrip() {
        let value = json!({"views": 1, "likes": 2, "retweets": 3, "responses": 4});
        let stat = Stat::from_value(&value).unwrap();
        assert_eq!(stat, Stat::new(1, 2, 3, 4));
        assert_eq!(stat.to_value().unwrap(), value);
    }

    #[test]
    fn test_stat_rejects_boolean_counter() {
        let err = Stat::from_value(&json!({
            "views": true, "likes": 2, "retweets": 3, "responses": 4
        }))
        .unwrap_err();
        assert_eq!(err.path.to_string(), "Stat.views");
    }

    #[test]
    fn test_stat_rejects_missing_counter() {
        let err = Stat::from_value(&json!({"views": 1, "likes": 2, "retweets": 3})).unwrap_err();
        assert_eq!(err.path.to_string(), "Stat.responses");
        assert!(err.is_missing());
    }

    #[test]
    fn test_stats_nested_path() {
        let err = Stats::from_value(&json!({
            "id": "42",
            "date": "2022-05-06",
            "stats": {"views": 1, "likes": "2", "retweets": 3, "responses": 4}
        }))
        .unwrap_err();
        assert_eq!(err.path.to_string(), "Stats.stats.likes");
    }

    #[test]
    fn test_stats_requires_nested_record() {
        let err = Stats::from_value(&json!({"id": "42", "date": "2022-05-06", "stats": null}))
            .unwrap_err();
        assert_eq!(err.path.to_string(), "Stats.stats");
        assert!(err.is_missing());
    }

    #[test]
    fn test_stats_accessors() {
        let stats = Stats::from_value(&json!({
            "id": "42",
            "date": "2022-05-06",
            "stats": {"views": 10, "likes": 5, "retweets": 1, "responses": 0}
        }))
        .unwrap();
        assert_eq!(stats.id(), "42");
        assert_eq!(stats.date().to_iso8601(), "2022-05-06");
        assert_eq!(stats.stats().views(), 10);
        assert_eq!(stats.stats().responses(), 0);
    }
}
