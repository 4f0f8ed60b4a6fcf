//! # nsa-cli — Payload Codec Command-Line Interface
//!
//! A thin clap-based front end over `nsa-schema` for working with payload
//! documents on disk or stdin.
//!
//! ## Subcommands
//!
//! - `decode` — Validate a payload and print its canonical encoding
//! - `check` — Report schema violations and the first codec error
//! - `schema` — Print the generated JSON Schema for a payload kind
//! - `kinds` — List the known payload kinds
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `nsa-schema`; no validation rules here.
//! - Handlers return an exit code; errors propagate as `anyhow::Error`.

pub mod check;
pub mod decode;
pub mod input;
pub mod kinds;
pub mod schema;
