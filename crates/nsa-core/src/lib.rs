//! # nsa-core — Foundational Types for Nav Schema Payloads
//!
//! This crate is the shared validator library behind every payload module.
//! It defines the primitive validators, the error type, and the traits
//! that typed records are built on. `nsa-schema` depends on it; it depends
//! on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One validator library.** String, Integer, Boolean, Date, DateTime,
//!    UUID, Phone, ZIPCode, Email, Any, and List<T> are defined once and
//!    shared by every record.
//!
//! 2. **Untyped input is `serde_json::Value`.** Decoding pattern-matches on
//!    the value tree; there are no runtime type assertions.
//!
//! 3. **Newtypes for constrained strings.** `Uuid`, `Phone`, `ZipCode`, and
//!    `Email` validate at construction, on deserialization, on decode, and
//!    again on encode.
//!
//! 4. **Required vs optional lives in the type.** Required fields are plain
//!    values; optional fields are `Option<T>` and encode as explicit `null`.
//!
//! 5. **One error kind.** Every failure is a [`ValidationError`] carrying
//!    the field path, the expected kind, and the offending value.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Validators are pure: no shared state, safe to call from any thread.

pub mod codec;
pub mod enums;
pub mod error;
pub mod identity;
pub mod path;
pub mod record;
pub mod scalars;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use codec::{is_required, validate, validate_at, Codec, ObjectReader, ObjectWriter};
pub use enums::AccountType;
pub use error::{NsaError, ValidationError};
pub use identity::{Email, Phone, Uuid, ZipCode};
pub use path::{FieldPath, Segment};
pub use record::{FieldKind, FieldSpec, Record, RecordDescriptor};
pub use scalars::{
    validate_any, validate_bool, validate_date, validate_datetime, validate_email,
    validate_integer, validate_list, validate_phone, validate_string, validate_uuid,
    validate_zip_code,
};
pub use temporal::{Date, DateTime};
