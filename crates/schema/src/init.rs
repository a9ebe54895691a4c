//! Builds the minimal data value a schema requires.
//!
//! Used when a new record is created or a switch member changes shape: every
//! required field gets its declared default or the type's zero value,
//! auto-generated uuids are minted, and auto-increment fields are computed
//! from the rows already present in the table.

use crate::model::{
    ArraySchema, AutoIncrement, Direction, ObjectSchema, Schema, ValueSchema, VectorIntSchema,
    VectorSchema,
};
use serde_json::{Map, Value};
use uuid::Uuid;

pub struct DataInitializer<'a> {
    existing: &'a [Value],
}

impl<'a> DataInitializer<'a> {
    /// `existing` holds the sibling rows auto-increment fields are computed
    /// against; pass an empty slice when there is no table context.
    pub fn new(existing: &'a [Value]) -> Self {
        Self { existing }
    }

    /// Returns the initial value for a required node, `None` for optional
    /// nodes and degraded references (the member is omitted entirely).
    ///
    /// `context` carries the sibling data of the node being initialized so
    /// switch members can resolve their `./field` discriminant.
    pub fn create_required_value(
        &self,
        schema: &Schema,
        context: Option<&Value>,
    ) -> Option<Value> {
        match schema {
            Schema::Ref(_) => None,
            // A switch only becomes concrete as an object member, where the
            // sibling discriminant is at hand.
            Schema::Switch(_) => None,
            Schema::Value(value_schema) => {
                if value_schema.is_optional() {
                    return None;
                }
                Some(self.create_value(value_schema, context))
            }
        }
    }

    fn create_value(&self, schema: &ValueSchema, context: Option<&Value>) -> Value {
        match schema {
            ValueSchema::Object(object) => self.create_object(object, context),
            ValueSchema::Array(array) => self.create_array(array),
            ValueSchema::String(s) => Value::String(s.default.clone().unwrap_or_default()),
            ValueSchema::Enum(e) => Value::String(e.default.clone().unwrap_or_default()),
            ValueSchema::Uuid(u) => {
                if u.auto_generated {
                    Value::String(Uuid::new_v4().to_string())
                } else {
                    Value::String(String::new())
                }
            }
            ValueSchema::Integer(i) => Value::from(i.default.unwrap_or(0)),
            ValueSchema::Number(n) => Value::from(n.default.unwrap_or(0.0)),
            ValueSchema::Boolean(b) => Value::Bool(b.default.unwrap_or(false)),
            ValueSchema::Vector2(v) => vector_value(v, 2),
            ValueSchema::Vector3(v) => vector_value(v, 3),
            ValueSchema::Vector4(v) => vector_value(v, 4),
            ValueSchema::Vector2Int(v) => vector_int_value(v, 2),
            ValueSchema::Vector3Int(v) => vector_int_value(v, 3),
            ValueSchema::Vector4Int(v) => vector_int_value(v, 4),
        }
    }

    fn create_object(&self, schema: &ObjectSchema, context: Option<&Value>) -> Value {
        let mut object = Map::new();
        for property in &schema.properties {
            match &property.schema {
                Schema::Switch(switch_schema) => {
                    if switch_schema.optional {
                        continue;
                    }
                    // Only the sibling form of the discriminant can be
                    // resolved without a full data tree.
                    let Some(referenced) = switch_schema.switch.strip_prefix("./") else {
                        continue;
                    };
                    let Some(context) = context else { continue };
                    let Some(discriminant) = context.get(referenced) else { continue };
                    let Some(case) = switch_schema
                        .cases
                        .iter()
                        .find(|case| case.when == *discriminant)
                    else {
                        continue;
                    };
                    if let Some(value) = self
                        .create_required_value(&case.schema, context.get(property.key.as_str()))
                    {
                        object.insert(property.key.clone(), value);
                    }
                }
                other => {
                    if let Some(value) = self.create_required_value(other, None) {
                        object.insert(property.key.clone(), value);
                    }
                }
            }
        }

        // Auto-increment fields override their defaults, computed against
        // the rows already in the table.
        for property in &schema.properties {
            let auto = match &property.schema {
                Schema::Value(ValueSchema::Integer(s)) => {
                    s.auto_increment.as_ref().map(|a| (a, true))
                }
                Schema::Value(ValueSchema::Number(s)) => {
                    s.auto_increment.as_ref().map(|a| (a, false))
                }
                _ => None,
            };
            if let Some((auto, integral)) = auto {
                if object.contains_key(&property.key) {
                    let next = calculate_auto_increment(self.existing, &property.key, auto);
                    let value = if integral {
                        Value::from(next as i64)
                    } else {
                        Value::from(next)
                    };
                    object.insert(property.key.clone(), value);
                }
            }
        }

        Value::Object(object)
    }

    fn create_array(&self, schema: &ArraySchema) -> Value {
        let mut items = Vec::new();
        for _ in 0..schema.min_length.unwrap_or(0) {
            if let Some(item) = self.create_required_value(&schema.items, None) {
                items.push(item);
            }
        }
        Value::Array(items)
    }
}

fn vector_value(schema: &VectorSchema, arity: usize) -> Value {
    match &schema.default {
        Some(components) => Value::from(components.clone()),
        None => Value::from(vec![0.0; arity]),
    }
}

fn vector_int_value(schema: &VectorIntSchema, arity: usize) -> Value {
    match &schema.default {
        Some(components) => Value::from(components.clone()),
        None => Value::from(vec![0i64; arity]),
    }
}

/// Next value for an auto-increment field: max+step ascending, min-step
/// descending, `start_with` when no row holds a finite number yet.
pub fn calculate_auto_increment(rows: &[Value], key: &str, options: &AutoIncrement) -> f64 {
    let values: Vec<f64> = rows
        .iter()
        .filter_map(|row| row.get(key))
        .filter_map(Value::as_f64)
        .filter(|value| value.is_finite())
        .collect();
    if values.is_empty() {
        return options.start_with;
    }
    match options.direction {
        Direction::Asc => values.into_iter().fold(f64::NEG_INFINITY, f64::max) + options.step,
        Direction::Desc => values.into_iter().fold(f64::INFINITY, f64::min) - options.step,
    }
}
