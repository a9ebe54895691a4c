//! Keeps switch members in step with their discriminant.
//!
//! When an edit changes a field that a sibling `switch` discriminates on,
//! the newly selected case's required fields are generated and merged under
//! the switch member, preserving anything the user already entered there.

use crate::init::DataInitializer;
use crate::merge::deep_merge;
use crate::model::{ObjectSchema, Schema};
use serde_json::{Map, Value};

/// Returns `updated` with every affected switch member re-initialised.
/// Only the sibling (`./field`) discriminant form can be re-evaluated here;
/// other path shapes pass through untouched.
pub fn process_switch_fields(
    schema: &ObjectSchema,
    original: &Value,
    updated: &Value,
    changed_key: &str,
) -> Value {
    let mut processed = updated.clone();

    for property in &schema.properties {
        let Schema::Switch(switch_schema) = &property.schema else {
            continue;
        };
        let Some(referenced) = switch_schema.switch.strip_prefix("./") else {
            continue;
        };
        if referenced != changed_key {
            continue;
        }

        let old_value = original.get(referenced);
        let Some(new_value) = updated.get(referenced) else {
            continue;
        };
        if old_value == Some(new_value) {
            continue;
        }

        let Some(case) = switch_schema
            .cases
            .iter()
            .find(|case| case.when == *new_value)
        else {
            continue;
        };
        let Some(required) = DataInitializer::new(&[]).create_required_value(&case.schema, None)
        else {
            continue;
        };

        let existing_member = processed
            .get(property.key.as_str())
            .cloned()
            .unwrap_or(Value::Object(Map::new()));
        let merged = deep_merge(&existing_member, &required);
        if let Value::Object(map) = &mut processed {
            map.insert(property.key.clone(), merged);
        }
    }

    processed
}
