//! # JSON Schema Generation
//!
//! Renders a [`RecordDescriptor`] as a draft-07 JSON Schema document, so
//! that collaborators without access to this crate can check payloads
//! structurally.
//!
//! ## Shape
//!
//! ```json
//! {
//!   "$schema": "http://json-schema.org/draft-07/schema#",
//!   "$id": "http://nav.com/api.tweet.myTweets.schema.json/v1",
//!   "title": "MyTweets",
//!   "description": "User Tweets payload",
//!   "type": "object",
//!   "properties": { "...": {} },
//!   "required": ["id", "username", "tweets"],
//!   "definitions": { "Tweet": { "type": "object", "...": {} } }
//! }
//! ```
//!
//! The root record's properties are inlined; nested records go under
//! `definitions` and are referenced as `#/definitions/<Name>`. Optional
//! fields also accept `null`, because encoded payloads carry explicit
//! nulls for absent values.

use serde_json::{json, Map, Value};

use nsa_core::{FieldKind, FieldSpec, RecordDescriptor};

use crate::config::SchemaConfig;

const DATE_PATTERN: &str = "^[0-9]{4}-[0-9]{2}-[0-9]{2}$";
const DATETIME_PATTERN: &str =
    "^[0-9]{4}-[0-9]{2}-[0-9]{2}[Tt ][0-9]{2}:[0-9]{2}:[0-9]{2}(\\.[0-9]+)?([Zz]|[+-][0-9]{2}:[0-9]{2})$";
const UUID_PATTERN: &str = "^[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}$";
const PHONE_PATTERN: &str = "^\\+?[1-9]\\d{1,14}$";
const ZIP_CODE_PATTERN: &str = "^[0-9]{5}(?:-[0-9]{4})?$";

/// The `$id` of the schema generated for `descriptor`.
pub fn schema_id(descriptor: &RecordDescriptor, config: &SchemaConfig) -> String {
    format!(
        "{}/{}.schema.json/v{}",
        config.uri_scheme, descriptor.namespace, descriptor.version
    )
}

/// Generate the JSON Schema for a root record.
pub fn json_schema(descriptor: &RecordDescriptor, config: &SchemaConfig) -> Value {
    let mut definitions = Map::new();
    let (properties, required) = object_members(descriptor, &mut definitions);

    let mut schema = Map::new();
    schema.insert("$schema".into(), json!(config.json_schema_version));
    schema.insert("$id".into(), json!(schema_id(descriptor, config)));
    schema.insert("title".into(), json!(descriptor.name));
    schema.insert("description".into(), json!(descriptor.description));
    schema.insert("type".into(), json!("object"));
    schema.insert("properties".into(), Value::Object(properties));
    schema.insert("required".into(), json!(required));
    if !definitions.is_empty() {
        schema.insert("definitions".into(), Value::Object(definitions));
    }
    Value::Object(schema)
}

fn object_members(
    descriptor: &RecordDescriptor,
    definitions: &mut Map<String, Value>,
) -> (Map<String, Value>, Vec<&'static str>) {
    let properties = descriptor
        .fields
        .iter()
        .map(|field| (field.name.to_string(), field_schema(field, definitions)))
        .collect();
    (properties, descriptor.required_fields())
}

fn field_schema(field: &FieldSpec, definitions: &mut Map<String, Value>) -> Value {
    let schema = kind_schema(&field.kind, definitions);
    if field.required {
        schema
    } else {
        json!({ "anyOf": [schema, { "type": "null" }] })
    }
}

fn kind_schema(kind: &FieldKind, definitions: &mut Map<String, Value>) -> Value {
    match kind {
        FieldKind::String | FieldKind::Email => json!({ "type": "string" }),
        FieldKind::Integer => json!({ "type": "integer" }),
        FieldKind::Boolean => json!({ "type": "boolean" }),
        FieldKind::Date => json!({ "type": "string", "pattern": DATE_PATTERN }),
        FieldKind::DateTime => json!({ "type": "string", "pattern": DATETIME_PATTERN }),
        FieldKind::Uuid => json!({ "type": "string", "pattern": UUID_PATTERN }),
        FieldKind::Phone => json!({ "type": "string", "pattern": PHONE_PATTERN }),
        FieldKind::ZipCode => json!({ "type": "string", "pattern": ZIP_CODE_PATTERN }),
        FieldKind::Any => {
            json!({ "type": ["object", "array", "string", "number", "boolean", "null"] })
        }
        FieldKind::Enum { values, .. } => json!({ "enum": values }),
        FieldKind::List(item) => json!({
            "type": "array",
            "items": kind_schema(item, definitions),
        }),
        FieldKind::Record(nested) => {
            if !definitions.contains_key(nested.name) {
                // Reserve the slot first so a self-referencing record terminates.
                definitions.insert(nested.name.to_string(), Value::Null);
                let (properties, required) = object_members(nested, definitions);
                definitions.insert(
                    nested.name.to_string(),
                    json!({
                        "type": "object",
                        "properties": properties,
                        "required": required,
                    }),
                );
            }
            json!({ "$ref": format!("#/definitions/{}", nested.name) })
        }
    }
}
