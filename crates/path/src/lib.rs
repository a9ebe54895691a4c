//! A small path expression language for addressing one value inside a
//! JSON-like record tree.
//!
//! Expressions come in absolute (`/a/b`), sibling (`./b`, or a bare `b`),
//! and parent (`../b`, `../../b`) forms, with array segments written
//! `name[2]`, `name[*]`, or `name[@]`. The wildcard forms resolve through a
//! caller-supplied [`ArrayIndices`] table so the same stored expression can
//! be evaluated from inside any concrete array element. It is used by the
//! schema crate to resolve switch discriminants and by foreign-key lookups.

pub mod ast;
pub mod engine;
pub mod error;
pub mod indices;
mod parser;

// --- Public API ---
pub use ast::{Anchor, IndexSelector, PathExpr, Segment};
pub use engine::{evaluate, evaluate_parsed};
pub use error::PathError;
pub use indices::ArrayIndices;
pub use parser::parse_path;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_absolute_with_index() {
        let expr = parse_path("/data/items[2]/id").unwrap();
        assert_eq!(expr.anchor, Anchor::Root);
        assert_eq!(expr.segments.len(), 3);
        assert_eq!(
            expr.segments[1],
            Segment {
                name: "items".to_string(),
                index: Some(IndexSelector::Literal(2)),
            }
        );
    }

    #[test]
    fn parse_relative_forms() {
        assert_eq!(parse_path("./theme").unwrap().anchor, Anchor::Up(1));
        assert_eq!(parse_path("theme").unwrap().anchor, Anchor::Up(1));
        assert_eq!(parse_path("../../theme").unwrap().anchor, Anchor::Up(2));
        let up_only = parse_path("../").unwrap();
        assert_eq!(up_only.anchor, Anchor::Up(1));
        assert!(up_only.segments.is_empty());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(parse_path(""), Err(PathError::Empty)));
        assert!(parse_path("/a/b[").is_err());
        assert!(parse_path("/a]b").is_err());
    }

    #[test]
    fn evaluate_absolute_leaf() {
        let data = json!({ "settings": { "theme": "dark" } });
        let value = evaluate("/settings/theme", &[], &data, None).unwrap();
        assert_eq!(value, Some(&json!("dark")));
    }

    #[test]
    fn evaluate_root_path_returns_whole_tree() {
        let data = json!({ "a": 1 });
        assert_eq!(evaluate("/", &[], &data, None).unwrap(), Some(&data));
    }

    #[test]
    fn evaluate_sibling() {
        let data = json!({ "settings": { "theme": "dark", "language": "en" } });
        let current = vec!["settings".to_string(), "theme".to_string()];
        let value = evaluate("./language", &current, &data, None).unwrap();
        assert_eq!(value, Some(&json!("en")));
    }

    #[test]
    fn evaluate_wildcard_uses_indices() {
        let data = json!({ "items": ["apple", "banana", "orange"] });
        let indices: ArrayIndices = [(vec!["items".to_string()], 2)].into_iter().collect();
        let value = evaluate("/items[@]", &[], &data, Some(&indices)).unwrap();
        assert_eq!(value, Some(&json!("orange")));
        // `[*]` resolves through the same table.
        let value = evaluate("/items[*]", &[], &data, Some(&indices)).unwrap();
        assert_eq!(value, Some(&json!("orange")));
    }

    #[test]
    fn evaluate_wildcard_defaults_to_first_element() {
        let data = json!({ "items": ["apple", "banana"] });
        let value = evaluate("/items[*]", &[], &data, None).unwrap();
        assert_eq!(value, Some(&json!("apple")));
    }

    #[test]
    fn evaluate_missing_is_none_not_error() {
        let data = json!({ "settings": { "theme": "dark" }, "nothing": null });
        assert_eq!(evaluate("/settings/missing", &[], &data, None).unwrap(), None);
        assert_eq!(evaluate("/nothing/deeper", &[], &data, None).unwrap(), None);
        assert_eq!(evaluate("/settings/theme/deeper", &[], &data, None).unwrap(), None);
        assert_eq!(evaluate("/settings[0]", &[], &data, None).unwrap(), None);
    }
}
