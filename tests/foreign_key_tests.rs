mod common;

use common::fixtures::{item_data, item_foreign_key};
use mason::{
    EditorSession, ForeignKeyConfig, ForeignKeyResolver, PatternError, validate_foreign_key_path,
};
use serde_json::json;

#[test]
fn wildcard_cardinality_matches_the_source_rows() {
    let data = item_data();
    let config = item_foreign_key();
    let options = ForeignKeyResolver::new(&data, &config).get_all_options();

    assert_eq!(options.len(), 3);
    let pairs: Vec<_> = options
        .iter()
        .map(|option| (option.id.clone(), option.display.clone()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (json!("item-001"), "Iron Ore".to_string()),
            (json!("item-002"), "Copper Wire".to_string()),
            (json!("item-003"), "Steel Plate".to_string()),
        ]
    );
    // Every option pairs id and display from the same array index.
    for (index, option) in options.iter().enumerate() {
        assert_eq!(option.indices.get(&["data".to_string()]), Some(index));
    }
}

#[test]
fn nested_wildcards_enumerate_every_combination() {
    let data = json!({
        "groups": [
            { "entries": [{ "id": "a1", "label": "A1" }, { "id": "a2", "label": "A2" }] },
            { "entries": [{ "id": "b1", "label": "B1" }, { "id": "b2", "label": "B2" }] }
        ]
    });
    let config = ForeignKeyConfig {
        schema_id: "nested".to_string(),
        foreign_key_id_path: "/groups/[*]/entries/[*]/id".to_string(),
        display_element_path: "/groups/[*]/entries/[*]/label".to_string(),
        hierarchy_display_paths: Vec::new(),
    };
    let options = ForeignKeyResolver::new(&data, &config).get_all_options();

    // Two groups of two yield exactly four, group-major.
    let ids: Vec<_> = options.iter().map(|option| option.id.clone()).collect();
    assert_eq!(ids, vec![json!("a1"), json!("a2"), json!("b1"), json!("b2")]);
}

#[test]
fn mismatched_wildcard_shapes_drop_unpairable_entries() {
    let data = json!({
        "groups": [{ "entries": [{ "id": "a1" }], "label": "Group A" }]
    });
    let config = ForeignKeyConfig {
        schema_id: "nested".to_string(),
        // Id pattern branches twice, display pattern once: indices never
        // line up, so nothing can be paired.
        foreign_key_id_path: "/groups/[*]/entries/[*]/id".to_string(),
        display_element_path: "/groups/[*]/label".to_string(),
        hierarchy_display_paths: Vec::new(),
    };
    assert!(ForeignKeyResolver::new(&data, &config).get_all_options().is_empty());
}

#[test]
fn stored_pattern_validation_reports_structured_errors() {
    assert_eq!(validate_foreign_key_path(""), Err(PatternError::Empty));
    assert_eq!(
        validate_foreign_key_path("data/[*]/id"),
        Err(PatternError::NotAbsolute)
    );
    assert_eq!(
        validate_foreign_key_path("/data/[@]/id"),
        Err(PatternError::BadSegment("[@]".to_string()))
    );
    assert!(validate_foreign_key_path("/data/[*]/id").is_ok());

    // The messages are what the editor surfaces to schema authors.
    assert_eq!(
        validate_foreign_key_path("").unwrap_err().to_string(),
        "Path cannot be empty"
    );
    assert_eq!(
        validate_foreign_key_path("x").unwrap_err().to_string(),
        "Foreign key paths must be absolute (start with /)"
    );
}

#[test]
fn session_routes_lookups_to_the_referenced_data_file() {
    let mut session = EditorSession::new();
    session.insert_data("items", item_data());
    let config = item_foreign_key();

    let options = session.foreign_key_options(&config);
    assert_eq!(options.len(), 3);

    assert_eq!(
        session.foreign_key_display(&config, &json!("item-003")),
        Some("Steel Plate".to_string())
    );
    let indices = session
        .foreign_key_indices(&config, &json!("item-003"))
        .unwrap();
    assert_eq!(indices.get(&["data".to_string()]), Some(2));

    assert_eq!(session.foreign_key_display(&config, &json!("item-999")), None);
}

#[test]
fn missing_data_file_yields_no_options() {
    let session = EditorSession::new();
    assert!(session.foreign_key_options(&item_foreign_key()).is_empty());
}
