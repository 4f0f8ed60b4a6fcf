//! # Payload Input
//!
//! Reads a payload document from a file or stdin. JSON is tried first;
//! files ending in `.yaml`/`.yml` and text that is not JSON are parsed as
//! YAML, so hand-written fixtures can use either format.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

/// Where to read a payload from. `-` or no path means stdin.
pub fn is_stdin(path: Option<&Path>) -> bool {
    path.map_or(true, |p| p.as_os_str() == "-")
}

/// Read and parse a payload document.
pub fn read_payload(path: Option<&PathBuf>) -> Result<Value> {
    let path = path.map(PathBuf::as_path);
    if is_stdin(path) {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read payload from stdin")?;
        tracing::debug!(bytes = text.len(), "read payload from stdin");
        return parse_payload(&text, None);
    }

    let path = path.context("payload path is required")?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read payload: {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read payload file");
    parse_payload(&text, path.extension().and_then(|e| e.to_str()))
        .with_context(|| format!("failed to parse payload: {}", path.display()))
}

/// Parse payload text, using `extension` as a format hint.
pub fn parse_payload(text: &str, extension: Option<&str>) -> Result<Value> {
    if matches!(extension, Some("yaml" | "yml")) {
        return serde_yaml::from_str(text).context("invalid YAML");
    }
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(json_err) => serde_yaml::from_str(text)
            .map_err(|_| anyhow::Error::new(json_err).context("invalid JSON")),
    }
}
