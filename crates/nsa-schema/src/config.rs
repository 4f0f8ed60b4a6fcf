//! # Schema Configuration
//!
//! Settings that shape generated JSON Schemas. Defaults match the
//! published schemas; both values can be overridden from the environment.
//!
//! | variable                  | default |
//! |---------------------------|---------|
//! | `NSA_URI_SCHEME`          | `http://nav.com` |
//! | `NSA_JSON_SCHEMA_VERSION` | `http://json-schema.org/draft-07/schema#` |
//!
//! Only draft-07 meta-schema URIs are honoured for the version; other
//! values are ignored with a warning.

/// Environment variable overriding [`SchemaConfig::uri_scheme`].
pub const URI_SCHEME_ENV: &str = "NSA_URI_SCHEME";

/// Environment variable overriding [`SchemaConfig::json_schema_version`].
pub const JSON_SCHEMA_VERSION_ENV: &str = "NSA_JSON_SCHEMA_VERSION";

const DEFAULT_URI_SCHEME: &str = "http://nav.com";
const DEFAULT_JSON_SCHEMA_VERSION: &str = "http://json-schema.org/draft-07/schema#";

/// Configuration for JSON Schema generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaConfig {
    /// Prefix of every schema `$id`, without a trailing slash.
    pub uri_scheme: String,
    /// Value of the `$schema` keyword.
    pub json_schema_version: String,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            uri_scheme: DEFAULT_URI_SCHEME.to_string(),
            json_schema_version: DEFAULT_JSON_SCHEMA_VERSION.to_string(),
        }
    }
}

impl SchemaConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup. Unset and
    /// empty values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };
        Self {
            uri_scheme: normalize_scheme(&read(URI_SCHEME_ENV, defaults.uri_scheme)),
            json_schema_version: supported_version(read(
                JSON_SCHEMA_VERSION_ENV,
                defaults.json_schema_version.clone(),
            ))
            .unwrap_or(defaults.json_schema_version),
        }
    }

    /// Replace the URI scheme.
    pub fn with_uri_scheme(mut self, uri_scheme: &str) -> Self {
        self.uri_scheme = normalize_scheme(uri_scheme);
        self
    }
}

/// Accept only draft-07 meta-schema URIs; anything else would have to be
/// retrieved to compile a schema.
fn supported_version(version: String) -> Option<String> {
    let bare = version.trim_end_matches('#');
    let scheme_free = bare
        .strip_prefix("http://")
        .or_else(|| bare.strip_prefix("https://"))
        .unwrap_or(bare);
    if scheme_free == "json-schema.org/draft-07/schema" {
        Some(version)
    } else {
        tracing::warn!(
            version = %version,
            "ignoring {JSON_SCHEMA_VERSION_ENV}: only draft-07 is supported"
        );
        None
    }
}

fn normalize_scheme(s: &str) -> String {
    s.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = SchemaConfig::default();
        assert_eq!(config.uri_scheme, "http://nav.com");
        assert_eq!(config.json_schema_version, "http://json-schema.org/draft-07/schema#");
    }

    #[test]
    fn test_lookup_overrides() {
        let env: HashMap<&str, &str> = [
            (URI_SCHEME_ENV, "https://schemas.example.org/"),
            (JSON_SCHEMA_VERSION_ENV, "http://json-schema.org/draft-07/schema"),
        ]
        .into_iter()
        .collect();
        let config = SchemaConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.uri_scheme, "https://schemas.example.org");
        assert_eq!(config.json_schema_version, "http://json-schema.org/draft-07/schema");
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config = SchemaConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, SchemaConfig::default());
    }

    #[test]
    fn test_non_draft_07_version_ignored() {
        let config = SchemaConfig::from_lookup(|k| {
            (k == JSON_SCHEMA_VERSION_ENV).then(|| "http://example.invalid/my-schema#".to_string())
        });
        assert_eq!(config.json_schema_version, "http://json-schema.org/draft-07/schema#");
    }

    #[test]
    fn test_with_uri_scheme_strips_slash() {
        let config = SchemaConfig::default().with_uri_scheme("http://localhost:8080//");
        assert_eq!(config.uri_scheme, "http://localhost:8080");
    }
}
