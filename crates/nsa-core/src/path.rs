//! # Field Paths
//!
//! A [`FieldPath`] names the location of a value inside a payload, starting
//! at the record that owns it: `Profile.id`, `Stats.stats.views`,
//! `MyTweets.tweets[2].date`. Every [`ValidationError`](crate::ValidationError)
//! carries one so that callers can point at the offending field without
//! re-walking the input.

use std::fmt;

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// The record a path starts from.
    Record(&'static str),
    /// A named field of an object.
    Field(String),
    /// A position inside a list.
    Index(usize),
}

/// Location of a value inside a payload.
///
/// Paths are built by extension: [`FieldPath::field`] and
/// [`FieldPath::index`] return a new, longer path and leave the receiver
/// untouched, so a decoder can hand each child its own path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// The empty path, used for values validated outside any record.
    pub fn root() -> Self {
        Self::default()
    }

    /// A path rooted at the named record.
    pub fn record(name: &'static str) -> Self {
        Self {
            segments: vec![Segment::Record(name)],
        }
    }

    /// Extend the path with a field name.
    pub fn field(&self, name: impl Into<String>) -> Self {
        self.push(Segment::Field(name.into()))
    }

    /// Extend the path with a list index.
    pub fn index(&self, index: usize) -> Self {
        self.push(Segment::Index(index))
    }

    /// The segments of this path, outermost first.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns true for the empty path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The last field name on the path, if any.
    ///
    /// For `MyTweets.tweets[0].body` this is `body`; for `MyTweets.tweets[0]`
    /// it is `tweets`.
    pub fn last_field(&self) -> Option<&str> {
        self.segments.iter().rev().find_map(|s| match s {
            Segment::Field(name) => Some(name.as_str()),
            _ => None,
        })
    }

    fn push(&self, segment: Segment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("(value)");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Record(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                Segment::Field(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
