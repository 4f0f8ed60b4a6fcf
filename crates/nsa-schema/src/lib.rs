//! # nsa-schema — Payload Records & JSON Schemas
//!
//! Typed records for the tweet API messages, each built from the shared
//! validator library in `nsa-core`:
//!
//! | message              | root record  | nested records |
//! |----------------------|--------------|----------------|
//! | `api.tweet.profile`  | [`Profile`]  | |
//! | `api.tweet.myTweets` | [`MyTweets`] | [`Tweet`] |
//! | `api.tweet.stats`    | [`Stats`]    | [`Stat`] |
//!
//! Every record decodes from and encodes to `serde_json::Value` through
//! [`nsa_core::Record`]. Decoding validates each declared field and
//! re-encoding yields the canonical form, with explicit nulls for absent
//! optional fields.
//!
//! ## JSON Schemas (`json_schema`, `validate`)
//!
//! Each message's descriptor can be rendered as a draft-07 JSON Schema
//! ([`json_schema()`]) and compiled into a [`PayloadValidator`] that lists
//! every structural violation in a document.
//!
//! ## Crate Policy
//!
//! - Depends only on `nsa-core` internally.
//! - Wire field names and namespaces must never change without bumping the
//!   message version.

pub mod config;
pub mod json_schema;
pub mod my_tweets;
pub mod profile;
pub mod registry;
pub mod stats;
pub mod validate;

pub use config::SchemaConfig;
pub use json_schema::{json_schema, schema_id};
pub use my_tweets::{MyTweets, Tweet};
pub use profile::{Profile, ProfileFields};
pub use registry::PayloadKind;
pub use stats::{Stat, Stats};
pub use validate::{PayloadValidator, Violation};
