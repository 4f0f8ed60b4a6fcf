//! # Schema Subcommand
//!
//! Prints the generated JSON Schema for a payload kind.

use anyhow::{Context, Result};
use clap::Args;

use nsa_schema::{json_schema, PayloadKind, SchemaConfig};

/// Arguments for the schema subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Payload kind (profile, my-tweets, stats, or a namespace).
    #[arg(long)]
    pub kind: PayloadKind,
}

/// Execute the schema subcommand.
pub fn run_schema(args: &SchemaArgs, config: &SchemaConfig) -> Result<u8> {
    let schema = json_schema(args.kind.descriptor(), config);
    let text = serde_json::to_string_pretty(&schema).context("failed to serialize schema")?;
    println!("{text}");
    Ok(0)
}
