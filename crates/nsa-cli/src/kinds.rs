//! # Kinds Subcommand
//!
//! Lists the payload kinds the CLI accepts for `--kind`, with each root
//! record's declared fields. Optional fields are marked with `?`.

use anyhow::Result;

use nsa_schema::{schema_id, PayloadKind, SchemaConfig};

/// Execute the kinds subcommand.
pub fn run_kinds(config: &SchemaConfig) -> Result<u8> {
    println!("Payload kinds:");
    println!();
    for kind in PayloadKind::all() {
        let desc = kind.descriptor();
        println!(
            "  {:<10} {:<20} v{}  {}",
            kind.as_str(),
            desc.namespace,
            desc.version,
            desc.description
        );
        println!("  {:<10} {}", "", schema_id(desc, config));
        for field in desc.fields {
            let marker = if field.required { "" } else { "?" };
            println!("  {:<10}   {}{marker}: {}", "", field.name, field.kind.label());
        }
    }
    println!();
    println!("Total: {} kinds", PayloadKind::all().len());
    Ok(0)
}
