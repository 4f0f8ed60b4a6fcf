//! # Check Subcommand
//!
//! Checks a payload two ways: against the generated JSON Schema, which
//! lists every structural violation, and through the typed decoder, which
//! is authoritative and stops at the first error. Exits 1 if either fails.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde_json::Value;

use nsa_core::ValidationError;
use nsa_schema::{PayloadKind, PayloadValidator, SchemaConfig, Violation};

use crate::input::read_payload;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Payload kind (profile, my-tweets, stats, or a namespace).
    #[arg(long)]
    pub kind: PayloadKind,

    /// Payload file (JSON or YAML). Reads stdin when absent or `-`.
    pub path: Option<PathBuf>,
}

/// Outcome of checking one payload.
#[derive(Debug)]
pub struct CheckReport {
    /// Payload kind the document was checked as.
    pub kind: PayloadKind,
    /// Every JSON Schema violation; empty when the schema accepts it.
    pub violations: Vec<Violation>,
    /// First error from the typed decoder, if decoding failed.
    pub decode_error: Option<ValidationError>,
}

impl CheckReport {
    /// Returns true when both the schema and the decoder accept the payload.
    pub fn passed(&self) -> bool {
        self.violations.is_empty() && self.decode_error.is_none()
    }
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs, config: &SchemaConfig) -> Result<u8> {
    let payload = read_payload(args.path.as_ref())?;
    let report = check_payload(args.kind, &payload, config)?;

    println!("Checking {} payload", report.kind);
    if report.violations.is_empty() {
        println!("  schema: OK");
    } else {
        println!("  schema: {} violation(s)", report.violations.len());
        for v in &report.violations {
            println!("    {v}");
        }
    }
    match &report.decode_error {
        None => println!("  decode: OK"),
        Some(e) => println!("  decode: FAIL {e}"),
    }

    Ok(if report.passed() { 0 } else { 1 })
}

/// Run both checks on `payload`.
pub fn check_payload(
    kind: PayloadKind,
    payload: &Value,
    config: &SchemaConfig,
) -> Result<CheckReport> {
    let validator = PayloadValidator::new(kind, config)?;
    let violations = validator.violations(payload);
    let decode_error = kind.normalize(payload).err();
    tracing::debug!(
        %kind,
        violations = violations.len(),
        decoded = decode_error.is_none(),
        "payload checked"
    );
    Ok(CheckReport {
        kind,
        violations,
        decode_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_payload_passes() {
        let report = check_payload(
            PayloadKind::MyTweets,
            &json!({
                "id": "9b2c7e1a-4f3d-4c8b-a1e2-3d4c5b6a7f80",
                "username": "bob",
                "tweets": [{"id": "1", "date": "2020-01-01", "body": "hi"}]
            }),
            &SchemaConfig::default(),
        )
        .unwrap();
        assert!(report.passed(), "{report:?}");
    }

    #[test]
    fn test_invalid_payload_reports_both() {
        let report = check_payload(
            PayloadKind::Profile,
            &json!({"id": "nope", "username": "a", "email": "a@b.com"}),
            &SchemaConfig::default(),
        )
        .unwrap();
        assert!(!report.passed());
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].instance_path, "/id");
        assert_eq!(report.decode_error.unwrap().field(), Some("id"));
    }
}
