//! # nsa CLI entry point
//!
//! Parses command-line arguments, configures logging from the verbosity
//! flag and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nsa_cli::check::{run_check, CheckArgs};
use nsa_cli::decode::{run_decode, DecodeArgs};
use nsa_cli::kinds::run_kinds;
use nsa_cli::schema::{run_schema, SchemaArgs};
use nsa_schema::SchemaConfig;

/// Tweet API payload codec.
///
/// Decodes payloads into their canonical form, checks them against the
/// generated JSON Schemas and prints those schemas.
#[derive(Parser, Debug)]
#[command(name = "nsa", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Prefix for schema `$id`s. Overrides NSA_URI_SCHEME.
    #[arg(long, global = true)]
    uri_scheme: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a payload and print its canonical encoding.
    Decode(DecodeArgs),

    /// Check a payload against its schema and the typed decoder.
    Check(CheckArgs),

    /// Print the generated JSON Schema for a payload kind.
    Schema(SchemaArgs),

    /// List the known payload kinds.
    Kinds,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = schema_config(cli.uri_scheme.as_deref());
    tracing::debug!(uri_scheme = %config.uri_scheme, "nsa CLI starting");

    let result = match &cli.command {
        Commands::Decode(args) => run_decode(args),
        Commands::Check(args) => run_check(args, &config),
        Commands::Schema(args) => run_schema(args, &config),
        Commands::Kinds => run_kinds(&config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// Environment configuration with the command-line override applied.
fn schema_config(uri_scheme: Option<&str>) -> SchemaConfig {
    let config = SchemaConfig::from_env();
    match uri_scheme {
        Some(scheme) => config.with_uri_scheme(scheme),
        None => config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nsa_schema::PayloadKind;
    use std::path::PathBuf;

    #[test]
    fn cli_parse_decode_with_path() {
        let cli = Cli::try_parse_from(["nsa", "decode", "--kind", "profile", "p.json"]).unwrap();
        if let Commands::Decode(args) = cli.command {
            assert_eq!(args.kind, PayloadKind::Profile);
            assert_eq!(args.path, Some(PathBuf::from("p.json")));
            assert!(!args.compact);
        } else {
            panic!("expected decode");
        }
    }

    #[test]
    fn cli_parse_decode_stdin() {
        let cli = Cli::try_parse_from(["nsa", "decode", "--kind", "stats", "--compact"]).unwrap();
        if let Commands::Decode(args) = cli.command {
            assert!(args.path.is_none());
            assert!(args.compact);
        } else {
            panic!("expected decode");
        }
    }

    #[test]
    fn cli_parse_kind_by_namespace() {
        let cli =
            Cli::try_parse_from(["nsa", "check", "--kind", "api.tweet.myTweets", "-"]).unwrap();
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.kind, PayloadKind::MyTweets);
            assert_eq!(args.path, Some(PathBuf::from("-")));
        } else {
            panic!("expected check");
        }
    }

    #[test]
    fn cli_parse_unknown_kind_fails() {
        assert!(Cli::try_parse_from(["nsa", "schema", "--kind", "tweet"]).is_err());
    }

    #[test]
    fn cli_parse_kind_required() {
        assert!(Cli::try_parse_from(["nsa", "schema"]).is_err());
    }

    #[test]
    fn cli_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "nsa",
            "kinds",
            "-vv",
            "--uri-scheme",
            "https://schemas.example.org",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.uri_scheme.as_deref(), Some("https://schemas.example.org"));
        assert!(matches!(cli.command, Commands::Kinds));
    }

    #[test]
    fn cli_uri_scheme_override() {
        let config = schema_config(Some("https://schemas.example.org/"));
        assert_eq!(config.uri_scheme, "https://schemas.example.org");
    }
}
