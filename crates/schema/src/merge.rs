//! Deep merge that never overwrites data the user already entered.
//!
//! The target (existing data) wins: its scalars and arrays are preserved,
//! objects merge member-wise, and the source only fills holes (missing or
//! null members). Array elements merge element-wise when both sides hold
//! objects at the same position.

use serde_json::{Map, Value};

pub fn deep_merge(target: &Value, source: &Value) -> Value {
    match (target, source) {
        (Value::Array(existing), Value::Array(incoming)) => Value::Array(
            existing
                .iter()
                .enumerate()
                .map(|(index, item)| match (item, incoming.get(index)) {
                    (Value::Object(_), Some(filler @ Value::Object(_))) => {
                        deep_merge(item, filler)
                    }
                    _ => item.clone(),
                })
                .collect(),
        ),
        (Value::Object(existing), Value::Object(incoming)) => {
            let mut merged = existing.clone();
            for (key, filler) in incoming {
                let current = existing.get(key);
                match filler {
                    Value::Array(_) => {
                        // Existing arrays are kept untouched; wiping user
                        // rows with generated ones is never acceptable.
                        if !matches!(current, Some(Value::Array(_))) {
                            merged.insert(key.clone(), filler.clone());
                        }
                    }
                    Value::Object(_) => {
                        let base = match current {
                            Some(value @ Value::Object(_)) => value.clone(),
                            _ => Value::Object(Map::new()),
                        };
                        merged.insert(key.clone(), deep_merge(&base, filler));
                    }
                    _ => {
                        if matches!(current, None | Some(Value::Null)) {
                            merged.insert(key.clone(), filler.clone());
                        }
                    }
                }
            }
            Value::Object(merged)
        }
        _ => source.clone(),
    }
}
