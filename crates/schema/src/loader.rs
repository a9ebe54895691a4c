//! Parses schema sources and assembles resolved, typed schemas.
//!
//! Schemas are authored as YAML documents (JSON is accepted too); reading
//! files and scanning directories stays outside the core; everything here
//! is string in, value out. A load replaces the previous schema wholesale;
//! nothing is patched incrementally.

use crate::error::SchemaError;
use crate::model::{Definitions, Schema};
use crate::resolver::resolve_refs;
use serde_json::Value;

/// Parses one YAML schema source into its raw tree.
pub fn schema_from_yaml_str(source: &str) -> Result<Value, SchemaError> {
    Ok(serde_yaml_ng::from_str(source)?)
}

/// Parses one JSON schema source into its raw tree.
pub fn schema_from_json_str(source: &str) -> Result<Value, SchemaError> {
    Ok(serde_json::from_str(source)?)
}

/// Builds the definitions table from raw fragments keyed by their id.
/// Fragments without an id are the caller's problem; the table itself is
/// read-only input to resolution from here on.
pub fn build_definitions<I>(fragments: I) -> Definitions
where
    I: IntoIterator<Item = (String, Value)>,
{
    fragments.into_iter().collect()
}

/// Resolves every reference in `raw` and deserializes the typed schema.
pub fn load_schema(raw: &Value, definitions: &Definitions) -> Result<Schema, SchemaError> {
    let resolved = resolve_refs(raw, definitions);
    Ok(serde_json::from_value(resolved)?)
}

/// Convenience: YAML source straight to a resolved, typed schema.
pub fn load_schema_from_yaml_str(
    source: &str,
    definitions: &Definitions,
) -> Result<Schema, SchemaError> {
    let raw = schema_from_yaml_str(source)?;
    load_schema(&raw, definitions)
}
