//! Inlines `ref` pointers in a raw schema tree.
//!
//! Resolution runs before typed deserialization, over the raw
//! `serde_json::Value` form, so merging a fragment into the node that
//! references it is plain map merging. Failures degrade: an unknown id or a
//! reference cycle leaves the node unexpanded with a warning, and the rest
//! of the schema still resolves.

use crate::model::Definitions;
use serde_json::Value;
use std::collections::HashSet;

pub struct RefResolver<'a> {
    definitions: &'a Definitions,
}

impl<'a> RefResolver<'a> {
    pub fn new(definitions: &'a Definitions) -> Self {
        Self { definitions }
    }

    /// Returns a copy of `value` with every reachable `ref` inlined.
    /// Idempotent over trees that contain no references.
    pub fn resolve(&self, value: &Value) -> Value {
        self.resolve_inner(value, &mut HashSet::new())
    }

    fn resolve_inner(&self, value: &Value, in_flight: &mut HashSet<String>) -> Value {
        match value {
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| self.resolve_inner(item, in_flight))
                    .collect(),
            ),
            Value::Object(map) => {
                if let Some(Value::String(id)) = map.get("ref") {
                    if in_flight.contains(id.as_str()) {
                        log::warn!("reference cycle through '{}', leaving node unexpanded", id);
                        return value.clone();
                    }
                    let Some(target) = self.definitions.get(id.as_str()) else {
                        log::warn!("reference not found: {}", id);
                        return value.clone();
                    };

                    in_flight.insert(id.clone());
                    let resolved = self.resolve_inner(target, in_flight);
                    in_flight.remove(id.as_str());

                    let Value::Object(mut merged) = resolved else {
                        // A non-object fragment has nothing to merge with;
                        // it replaces the referencing node outright.
                        return resolved;
                    };
                    // Fields declared alongside `ref` override the fragment.
                    for (key, local) in map {
                        if key == "ref" {
                            continue;
                        }
                        merged.insert(key.clone(), self.resolve_inner(local, in_flight));
                    }
                    Value::Object(merged)
                } else {
                    Value::Object(
                        map.iter()
                            .map(|(key, nested)| {
                                (key.clone(), self.resolve_inner(nested, in_flight))
                            })
                            .collect(),
                    )
                }
            }
            leaf => leaf.clone(),
        }
    }
}

/// Resolves every `ref` in `value` against `definitions`.
pub fn resolve_refs(value: &Value, definitions: &Definitions) -> Value {
    RefResolver::new(definitions).resolve(value)
}
