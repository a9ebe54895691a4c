//! Foreign-key option enumeration over wildcarded record paths.
//!
//! A field that stores a key into another data file carries a
//! [`ForeignKeyConfig`] with two wildcard patterns: one locating each
//! candidate record's id, one locating its display label. This crate expands
//! both patterns over the referenced data tree, branching into every array
//! element at a `[*]`, and pairs the results into [`ForeignKeyOption`]s,
//! with reverse lookup from a stored id back to its label and location.

pub mod config;
pub mod error;
pub mod expand;
pub mod pattern;
pub mod resolver;

// --- Public API ---
pub use config::ForeignKeyConfig;
pub use error::PatternError;
pub use expand::PathResult;
pub use pattern::{PatternSegment, parse_pattern, validate_foreign_key_path};
pub use resolver::{ForeignKeyOption, ForeignKeyResolver, resolve_foreign_key_options};
