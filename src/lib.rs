//! Resolution core for a schema-driven editor of structured game
//! configuration records (items, blocks, recipes).
//!
//! The heavy lifting lives in three algorithm crates, re-exported here:
//!
//! - **`mason-path`**: evaluates path expressions (absolute, relative,
//!   array-indexed and wildcard) against a record data tree.
//! - **`mason-schema`**: the schema model, `ref` inlining against a
//!   definitions table, and switch-variant selection.
//! - **`mason-foreign-key`**: expands wildcard patterns into paired
//!   (id, label) option sets with reverse lookup.
//!
//! [`EditorSession`] ties them together for a running editor: it owns the
//! loaded schemas and per-file data trees and routes borrows into the pure
//! resolvers. Everything is synchronous and side-effect free; callers re-run
//! resolution on every data change instead of patching cached results.

pub mod session;

// --- Public API ---
pub use mason_foreign_key::{
    ForeignKeyConfig, ForeignKeyOption, ForeignKeyResolver, PatternError,
    resolve_foreign_key_options, validate_foreign_key_path,
};
pub use mason_path::{ArrayIndices, PathError, PathExpr, evaluate, parse_path};
pub use mason_schema::{
    DataInitializer, Definitions, Schema, SchemaError, SchemaId, SwitchCase, SwitchSchema,
    ValueSchema, build_definitions, deep_merge, load_schema, load_schema_from_yaml_str,
    process_switch_fields, resolve_refs, schema_from_json_str, schema_from_yaml_str, select_case,
};
pub use session::EditorSession;
