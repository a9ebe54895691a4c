//! Routes loaded schemas and data tables into the resolvers.
//!
//! An editing session owns one schema and one data tree per top-level record
//! file, replaced wholesale on reload. The session itself holds no resolver
//! state: every lookup re-runs the pure core against the current trees, so
//! there is never a cached result to invalidate.

use mason_foreign_key::{ForeignKeyConfig, ForeignKeyOption, ForeignKeyResolver};
use mason_path::ArrayIndices;
use mason_schema::{Definitions, Schema, SchemaError, SwitchCase, SwitchSchema};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Default)]
pub struct EditorSession {
    schemas: HashMap<String, Schema>,
    data: HashMap<String, Value>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves and installs the schema for one record file, replacing any
    /// previous version.
    pub fn load_schema(
        &mut self,
        name: &str,
        raw: &Value,
        definitions: &Definitions,
    ) -> Result<(), SchemaError> {
        let schema = mason_schema::load_schema(raw, definitions)?;
        self.schemas.insert(name.to_string(), schema);
        Ok(())
    }

    /// YAML convenience over [`EditorSession::load_schema`].
    pub fn load_schema_yaml(
        &mut self,
        name: &str,
        source: &str,
        definitions: &Definitions,
    ) -> Result<(), SchemaError> {
        let raw = mason_schema::schema_from_yaml_str(source)?;
        self.load_schema(name, &raw, definitions)
    }

    /// Installs the data tree for one record file, replacing any previous
    /// version. The tree is owned here and borrowed out per evaluation.
    pub fn insert_data(&mut self, name: &str, data: Value) {
        self.data.insert(name.to_string(), data);
    }

    pub fn schema(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    pub fn data(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// All options the config offers, drawn from the referenced data file.
    /// A missing file yields no options rather than an error.
    pub fn foreign_key_options(&self, config: &ForeignKeyConfig) -> Vec<ForeignKeyOption> {
        let Some(root) = self.data.get(&config.schema_id) else {
            log::warn!("foreign key data not found for schema: {}", config.schema_id);
            return Vec::new();
        };
        ForeignKeyResolver::new(root, config).get_all_options()
    }

    /// Display label for a stored key, used to show ids as names.
    pub fn foreign_key_display(&self, config: &ForeignKeyConfig, key: &Value) -> Option<String> {
        let root = self.data.get(&config.schema_id)?;
        ForeignKeyResolver::new(root, config).get_display_by_foreign_key(key)
    }

    /// Location of the record a stored key points at, used to jump there.
    pub fn foreign_key_indices(
        &self,
        config: &ForeignKeyConfig,
        key: &Value,
    ) -> Option<ArrayIndices> {
        let root = self.data.get(&config.schema_id)?;
        ForeignKeyResolver::new(root, config).find_indices_by_foreign_key(key)
    }

    /// Selects the active case of a switch schema against one data file.
    pub fn select_case<'a>(
        &self,
        switch: &'a SwitchSchema,
        data_name: &str,
        current_path: &[String],
        indices: Option<&ArrayIndices>,
    ) -> Option<&'a SwitchCase> {
        let root = self.data.get(data_name)?;
        mason_schema::select_case(switch, current_path, root, indices)
    }
}
