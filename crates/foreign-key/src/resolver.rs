//! Pairs expanded id and display results into selectable options.

use crate::config::ForeignKeyConfig;
use crate::expand::{display_string, expand_pattern};
use crate::pattern::{PatternSegment, parse_pattern};
use mason_path::ArrayIndices;
use serde_json::Value;

/// One selectable option: a stored id paired with its display label and the
/// concrete location it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKeyOption {
    pub id: Value,
    pub display: String,
    /// The concrete id path, for diagnostics.
    pub path: String,
    /// The array indices that locate this option's record; used to jump to
    /// the referenced record.
    pub indices: ArrayIndices,
    /// Hierarchy labels from parent to child, empty unless the config
    /// declares hierarchy display paths.
    pub hierarchy: Vec<String>,
    /// Group name for selector organisation (the first hierarchy level).
    pub group: Option<String>,
}

/// Enumerates the options a foreign-key configuration offers over one data
/// tree. Options are produced on demand and never cached here.
pub struct ForeignKeyResolver<'a> {
    root: &'a Value,
    config: &'a ForeignKeyConfig,
}

impl<'a> ForeignKeyResolver<'a> {
    pub fn new(root: &'a Value, config: &'a ForeignKeyConfig) -> Self {
        Self { root, config }
    }

    /// Expands both patterns and pairs results whose indices are equal by
    /// value. Id results with no matching display result are dropped.
    pub fn get_all_options(&self) -> Vec<ForeignKeyOption> {
        let hierarchy: Vec<Vec<PatternSegment>> = self
            .config
            .hierarchy_display_paths
            .iter()
            .map(|path| parse_pattern(path))
            .collect();

        let id_segments = parse_pattern(&self.config.foreign_key_id_path);
        let display_segments = parse_pattern(&self.config.display_element_path);

        let id_results = expand_pattern(self.root, &id_segments, &hierarchy);
        let display_results = expand_pattern(self.root, &display_segments, &hierarchy);

        id_results
            .into_iter()
            .filter_map(|id_result| {
                let display = display_results
                    .iter()
                    .find(|candidate| candidate.indices == id_result.indices)?;

                let leaf = display_string(display.value);
                let (label, group) = if display.hierarchy.is_empty() {
                    (leaf, None)
                } else {
                    let mut parts = display.hierarchy.clone();
                    parts.push(leaf);
                    (parts.join(" > "), display.hierarchy.first().cloned())
                };

                Some(ForeignKeyOption {
                    id: id_result.value.clone(),
                    display: label,
                    path: id_result.path,
                    indices: id_result.indices,
                    hierarchy: display.hierarchy.clone(),
                    group,
                })
            })
            .collect()
    }

    /// Display label for a stored key, if any option carries it.
    pub fn get_display_by_foreign_key(&self, key: &Value) -> Option<String> {
        self.get_all_options()
            .into_iter()
            .find(|option| option.id == *key)
            .map(|option| option.display)
    }

    /// Array indices of the first option carrying `key`, used to navigate to
    /// the referenced record.
    pub fn find_indices_by_foreign_key(&self, key: &Value) -> Option<ArrayIndices> {
        self.get_all_options()
            .into_iter()
            .find(|option| option.id == *key)
            .map(|option| option.indices)
    }
}

/// Convenience wrapper that builds a resolver and returns all options.
pub fn resolve_foreign_key_options(
    root: &Value,
    config: &ForeignKeyConfig,
) -> Vec<ForeignKeyOption> {
    ForeignKeyResolver::new(root, config).get_all_options()
}
