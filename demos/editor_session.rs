//! Walks through a small editing session: load a schema with fragments,
//! install two data files, pick a switch case and enumerate foreign-key
//! options.
//!
//! Run with `cargo run --example editor_session`.

use mason::{
    EditorSession, Schema, ValueSchema, build_definitions, validate_foreign_key_path,
};
use serde_json::json;

const RECIPES_SCHEMA: &str = r#"
type: object
properties:
  - key: data
    type: array
    items:
      type: object
      properties:
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

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let definitions = build_definitions([(
        "duration".to_string(),
        json!({ "type": "number", "default": 1.0, "min": 0.0 }),
    )]);

    let mut session = EditorSession::new();
    session.load_schema_yaml("recipes", RECIPES_SCHEMA, &definitions)?;
    session.insert_data(
        "items",
        json!({ "data": [
            { "itemGuid": "item-001", "name": "Iron Ore" },
            { "itemGuid": "item-002", "name": "Iron Plate" }
        ]}),
    );
    session.insert_data(
        "recipes",
        json!({ "data": [
            { "resultItem": "item-002", "machineType": "Smelter", "machineParam": { "heat": 600 } }
        ]}),
    );

    // Dig out the row schema the form renderer would walk.
    let Some(Schema::Value(ValueSchema::Object(root))) = session.schema("recipes") else {
        return Err("recipes schema should be an object".into());
    };
    let Schema::Value(ValueSchema::Array(data)) = &root.property("data").unwrap().schema else {
        return Err("data member should be an array".into());
    };
    let Schema::Value(ValueSchema::Object(row)) = data.items.as_ref() else {
        return Err("rows should be objects".into());
    };

    // The switch member resolves against the live record.
    let Schema::Switch(machine_param) = &row.property("machineParam").unwrap().schema else {
        return Err("machineParam should be a switch".into());
    };
    let current = vec![
        "data".to_string(),
        "0".to_string(),
        "machineParam".to_string(),
    ];
    match session.select_case(machine_param, "recipes", &current, None) {
        Some(case) => println!("active machineParam case: {}", case.when),
        None => println!("machineParam renders nothing"),
    }

    // The foreign-key field enumerates its options from the items file.
    let Schema::Value(ValueSchema::Uuid(result_item)) = &row.property("resultItem").unwrap().schema
    else {
        return Err("resultItem should be a uuid".into());
    };
    let config = result_item.foreign_key.as_ref().unwrap();
    validate_foreign_key_path(&config.foreign_key_id_path)?;

    for option in session.foreign_key_options(config) {
        println!("option {} -> {}", option.id, option.display);
    }
    let stored = json!("item-002");
    if let Some(display) = session.foreign_key_display(config, &stored) {
        println!("stored id {} displays as '{}'", stored, display);
    }

    Ok(())
}
