//! Schema model, reference resolution and variant selection.
//!
//! Schema sources are YAML (or JSON) documents describing the shape of one
//! record file. Reusable fragments live in a definitions table and are
//! pulled in by `ref`; [`resolver::RefResolver`] inlines them before the
//! typed [`model::Schema`] is built. At render time, `switch` nodes pick
//! their concrete case from live data via [`switch::select_case`], and the
//! data-editing helpers ([`init`], [`merge`], [`switch_fields`]) keep record
//! values in step with the schema.

pub mod error;
pub mod init;
pub mod loader;
pub mod merge;
pub mod model;
pub mod resolver;
pub mod switch;
pub mod switch_fields;

// --- Public API ---
pub use error::SchemaError;
pub use init::{DataInitializer, calculate_auto_increment};
pub use loader::{
    build_definitions, load_schema, load_schema_from_yaml_str, schema_from_json_str,
    schema_from_yaml_str,
};
pub use merge::deep_merge;
pub use model::{
    ArraySchema, AutoIncrement, BooleanSchema, Definitions, Direction, EnumSchema, IntegerSchema,
    NumberSchema, ObjectSchema, Property, RefSchema, Schema, SchemaId, StringSchema, SwitchCase,
    SwitchSchema, UuidSchema, ValueSchema, VectorIntSchema, VectorSchema,
};
pub use resolver::{RefResolver, resolve_refs};
pub use switch::select_case;
pub use switch_fields::process_switch_fields;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn definitions(entries: &[(&str, Value)]) -> Definitions {
        build_definitions(
            entries
                .iter()
                .map(|(id, value)| (id.to_string(), value.clone())),
        )
    }

    #[test]
    fn typed_model_preserves_member_order() {
        let schema = load_schema_from_yaml_str(
            r#"
type: object
properties:
  - key: zeta
    type: string
  - key: alpha
    type: integer
  - key: size
    type: vector2Int
"#,
            &Definitions::new(),
        )
        .unwrap();
        let Schema::Value(ValueSchema::Object(object)) = schema else {
            panic!("expected object schema");
        };
        let keys: Vec<_> = object.properties.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "size"]);
        assert!(matches!(
            object.properties[2].schema,
            Schema::Value(ValueSchema::Vector2Int(_))
        ));
    }

    #[test]
    fn uuid_field_carries_foreign_key_config() {
        let schema = load_schema_from_yaml_str(
            r#"
type: uuid
foreignKey:
  schemaId: items
  foreignKeyIdPath: /data/[*]/itemGuid
  displayElementPath: /data/[*]/name
"#,
            &Definitions::new(),
        )
        .unwrap();
        let Schema::Value(ValueSchema::Uuid(uuid)) = schema else {
            panic!("expected uuid schema");
        };
        let config = uuid.foreign_key.unwrap();
        assert_eq!(config.schema_id, "items");
        assert_eq!(config.foreign_key_id_path, "/data/[*]/itemGuid");
    }

    #[test]
    fn ref_is_inlined_through_chains() {
        let defs = definitions(&[
            ("position", json!({ "ref": "vec3" })),
            ("vec3", json!({ "type": "vector3" })),
        ]);
        let raw = json!({ "type": "object", "properties": [
            { "key": "pos", "ref": "position" }
        ]});
        let resolved = resolve_refs(&raw, &defs);
        assert_eq!(
            resolved["properties"][0],
            json!({ "key": "pos", "type": "vector3" })
        );
    }

    #[test]
    fn local_fields_override_the_fragment() {
        let defs = definitions(&[(
            "count",
            json!({ "type": "integer", "default": 0, "min": 0 }),
        )]);
        let raw = json!({ "ref": "count", "default": 5 });
        let resolved = resolve_refs(&raw, &defs);
        assert_eq!(resolved, json!({ "type": "integer", "default": 5, "min": 0 }));
    }

    #[test]
    fn missing_ref_degrades_to_passthrough() {
        let raw = json!({ "type": "object", "properties": [
            { "key": "broken", "ref": "nowhere" }
        ]});
        let resolved = resolve_refs(&raw, &Definitions::new());
        assert_eq!(resolved, raw);
    }

    #[test]
    fn ref_cycles_stop_with_a_degraded_node() {
        let defs = definitions(&[
            ("a", json!({ "ref": "b" })),
            ("b", json!({ "ref": "a" })),
        ]);
        let raw = json!({ "ref": "a" });
        // Must terminate; the cyclic tail stays an unexpanded ref node.
        let resolved = resolve_refs(&raw, &defs);
        assert_eq!(resolved, json!({ "ref": "a" }));

        let typed: Schema = serde_json::from_value(resolved).unwrap();
        assert!(matches!(typed, Schema::Ref(_)));
    }

    #[test]
    fn resolution_is_idempotent_on_resolved_trees() {
        let defs = definitions(&[("vec3", json!({ "type": "vector3" }))]);
        let raw = json!({ "type": "object", "properties": [
            { "key": "pos", "ref": "vec3" },
            { "key": "name", "type": "string" }
        ]});
        let once = resolve_refs(&raw, &defs);
        let twice = resolve_refs(&once, &defs);
        assert_eq!(once, twice);
    }

    #[test]
    fn switch_case_selection_follows_declaration_order() {
        let schema = load_schema_from_yaml_str(
            r#"
switch: ./blockType
cases:
  - when: Gear
    type: object
    properties:
      - key: teeth
        type: integer
  - when: Gear
    type: string
  - when: Conveyor
    type: object
    properties:
      - key: speed
        type: number
"#,
            &Definitions::new(),
        )
        .unwrap();
        let Schema::Switch(switch_schema) = schema else {
            panic!("expected switch schema");
        };

        let data = json!({ "data": [{ "blockType": "Gear", "blockParam": {} }] });
        let current = vec![
            "data".to_string(),
            "0".to_string(),
            "blockParam".to_string(),
        ];

        let case = select_case(&switch_schema, &current, &data, None).unwrap();
        // First matching case wins even with a duplicate `when`.
        assert_eq!(case.when, json!("Gear"));
        assert!(matches!(case.schema, Schema::Value(ValueSchema::Object(_))));

        let none = {
            let data = json!({ "data": [{ "blockType": "Piston", "blockParam": {} }] });
            select_case(&switch_schema, &current, &data, None)
        };
        assert!(none.is_none());
    }

    #[test]
    fn switch_with_malformed_expression_selects_nothing() {
        let switch_schema = SwitchSchema {
            switch: "/bad[".to_string(),
            cases: Vec::new(),
            optional: false,
        };
        assert!(select_case(&switch_schema, &[], &json!({}), None).is_none());
    }

    #[test]
    fn yaml_and_json_sources_agree() {
        let yaml = schema_from_yaml_str("type: object\nproperties:\n  - key: a\n    type: string\n")
            .unwrap();
        let json =
            schema_from_json_str(r#"{"type":"object","properties":[{"key":"a","type":"string"}]}"#)
                .unwrap();
        assert_eq!(yaml, json);
    }
}
