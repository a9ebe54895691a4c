use mason::{Definitions, ForeignKeyConfig, build_definitions};
use serde_json::{Value, json};

/// A settings tree with enough nesting to exercise every relative form.
pub fn settings_tree() -> Value {
    json!({
        "users": [
            { "id": 1, "name": "Alice", "profile": { "age": 25, "city": "Tokyo" } },
            { "id": 2, "name": "Bob", "profile": { "age": 30, "city": "Osaka" } }
        ],
        "settings": {
            "theme": "dark",
            "language": "ja",
            "nested": { "deep": { "value": "found" } }
        },
        "items": ["apple", "banana", "orange"],
        "nothing": null,
        "emptyObject": {},
        "emptyArray": []
    })
}

/// The canonical item data file foreign keys point into.
pub fn item_data() -> Value {
    json!({
        "data": [
            { "itemGuid": "item-001", "name": "Iron Ore", "category": "resource" },
            { "itemGuid": "item-002", "name": "Copper Wire", "category": "component" },
            { "itemGuid": "item-003", "name": "Steel Plate", "category": "material" }
        ]
    })
}

pub fn item_foreign_key() -> ForeignKeyConfig {
    ForeignKeyConfig {
        schema_id: "items".to_string(),
        foreign_key_id_path: "/data/[*]/itemGuid".to_string(),
        display_element_path: "/data/[*]/name".to_string(),
        hierarchy_display_paths: Vec::new(),
    }
}

/// A recipe schema exercising refs, switches and a foreign-key uuid field.
pub const RECIPES_SCHEMA_YAML: &str = r#"
type: object
properties:
  - key: data
    type: array
    items:
      type: object
      properties:
        - key: recipeGuid
          type: uuid
          autoGenerated: true
        - key: resultItem
          type: uuid
          foreignKey:
            schemaId: items
            foreignKeyIdPath: /data/[*]/itemGuid
            displayElementPath: /data/[*]/name
        - key: craftTime
          ref: duration
        - key: machineType
          type: enum
          options: [Smelter, Assembler]
        - key: machineParam
          switch: ./machineType
          cases:
            - when: Smelter
              type: object
              properties:
                - key: heat
                  type: integer
                  default: 400
            - when: Assembler
              type: object
              properties:
                - key: slots
                  type: integer
                  default: 2
"#;

/// Fragment table used by the recipes schema.
pub fn recipe_definitions() -> Definitions {
    build_definitions([(
        "duration".to_string(),
        json!({ "type": "number", "default": 1.0, "min": 0.0 }),
    )])
}
