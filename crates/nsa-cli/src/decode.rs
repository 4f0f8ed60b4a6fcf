//! # Decode Subcommand
//!
//! Decodes a payload as the requested kind and prints the canonical
//! encoding: declared field order, canonical dates and explicit nulls for
//! absent optional fields.
//!
//! ```bash
//! nsa decode --kind profile profile.json
//! cat stats.yaml | nsa decode --kind stats
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use nsa_schema::PayloadKind;

use crate::input::read_payload;

/// Arguments for the decode subcommand.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Payload kind (profile, my-tweets, stats, or a namespace).
    #[arg(long)]
    pub kind: PayloadKind,

    /// Payload file (JSON or YAML). Reads stdin when absent or `-`.
    pub path: Option<PathBuf>,

    /// Print compact JSON instead of pretty-printed.
    #[arg(long)]
    pub compact: bool,
}

/// Execute the decode subcommand.
pub fn run_decode(args: &DecodeArgs) -> Result<u8> {
    let payload = read_payload(args.path.as_ref())?;
    let Some(canonical) = decode_payload(args.kind, &payload)? else {
        return Ok(1);
    };
    let text = if args.compact {
        serde_json::to_string(&canonical)
    } else {
        serde_json::to_string_pretty(&canonical)
    }
    .context("failed to serialize canonical payload")?;
    println!("{text}");
    Ok(0)
}

/// Decode and re-encode `payload`. Returns `None` after reporting the
/// validation error on stderr.
pub fn decode_payload(kind: PayloadKind, payload: &Value) -> Result<Option<Value>> {
    match kind.normalize(payload) {
        Ok(canonical) => {
            tracing::info!(%kind, "payload decoded");
            Ok(Some(canonical))
        }
        Err(e) => {
            eprintln!("invalid {kind} payload: {e}");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_canonicalizes() {
        let canonical = decode_payload(
            PayloadKind::Stats,
            &json!({
                "stats": {"responses": 4, "retweets": 3, "likes": 2, "views": 1},
                "date": "2020-01-01",
                "id": "7"
            }),
        )
        .unwrap()
        .unwrap();
        let keys: Vec<&String> = canonical.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["id", "date", "stats"]);
    }

    #[test]
    fn test_decode_rejects_invalid() {
        let result = decode_payload(PayloadKind::Stats, &json!({"id": "7"})).unwrap();
        assert!(result.is_none());
    }
}
