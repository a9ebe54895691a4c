//! Configuration carried by fields that reference records in another data file.

use serde::{Deserialize, Serialize};

/// Describes how a stored key in one record resolves to a record in another
/// top-level data file, and how that record is labelled.
///
/// Both path patterns must share the same wildcard shape (the same count and
/// nesting of `[*]`); branches that cannot be paired are dropped rather than
/// reported.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ForeignKeyConfig {
    /// Id of the data file the key points into.
    pub schema_id: String,
    /// Wildcard pattern locating each candidate record's stored id.
    pub foreign_key_id_path: String,
    /// Wildcard pattern locating each candidate record's display label.
    pub display_element_path: String,
    /// Extra patterns whose leaf values are collected while branching, used
    /// to build grouped `Parent > Child` labels.
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hierarchy_display_paths: Vec<String>,
}
