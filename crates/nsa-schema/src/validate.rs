//! # Schema Validation
//!
//! Structural validation of untyped payloads against the generated JSON
//! Schema of a [`PayloadKind`], using the `jsonschema` crate.
//!
//! Unlike the codec, which stops at the first violation, schema validation
//! reports every violation in the document. It is a complementary check
//! for tooling; decoding a record is still the authoritative test.

use std::fmt;

use jsonschema::{Draft, Retrieve, Uri, Validator};
use nsa_core::NsaError;
use serde_json::Value;

use crate::config::SchemaConfig;
use crate::json_schema::json_schema;
use crate::registry::PayloadKind;

/// Retriever that refuses every external resource.
///
/// Generated schemas are self-contained (`#/definitions/...` only) and the
/// draft-07 meta-schema is bundled with `jsonschema`, so anything that
/// reaches this retriever would otherwise be fetched over the network.
struct OfflineRetriever;

impl Retrieve for OfflineRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        Err(format!("external schema resources are not retrieved: {}", uri.as_str()).into())
    }
}

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer to the violating value in the instance.
    pub instance_path: String,
    /// JSON Pointer to the schema keyword that failed.
    pub schema_path: String,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// A compiled schema for one payload kind.
///
/// Compilation happens once in [`PayloadValidator::new`]; the validator
/// can then be shared across threads.
pub struct PayloadValidator {
    kind: PayloadKind,
    schema: Value,
    validator: Validator,
}

impl PayloadValidator {
    /// Generate and compile the schema for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`NsaError::Schema`] if the generated schema does not compile,
    /// including when it names a `$schema` other than the bundled draft-07
    /// meta-schema. No resource is ever fetched.
    pub fn new(kind: PayloadKind, config: &SchemaConfig) -> Result<Self, NsaError> {
        let schema = json_schema(kind.descriptor(), config);

        let mut opts = jsonschema::options();
        opts.with_draft(Draft::Draft7);
        opts.with_retriever(OfflineRetriever);
        let validator = opts
            .build(&schema)
            .map_err(|e| NsaError::Schema(format!("schema for {kind} does not compile: {e}")))?;

        tracing::debug!(%kind, id = %schema["$id"], "compiled payload schema");
        Ok(Self {
            kind,
            schema,
            validator,
        })
    }

    /// The payload kind this validator checks.
    pub fn kind(&self) -> PayloadKind {
        self.kind
    }

    /// The generated schema document.
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Returns true if `instance` satisfies the schema.
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validator.is_valid(instance)
    }

    /// Every violation of the schema in `instance`; empty when valid.
    pub fn violations(&self, instance: &Value) -> Vec<Violation> {
        self.validator
            .iter_errors(instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect()
    }
}

impl fmt::Debug for PayloadValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayloadValidator")
            .field("kind", &self.kind)
            .field("id", &self.schema["$id"])
            .finish_non_exhaustive()
    }
}
