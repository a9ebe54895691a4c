//! Selects the concrete case of a switch schema from live data.

use crate::model::{SwitchCase, SwitchSchema};
use mason_path::ArrayIndices;
use serde_json::Value;

/// Evaluates the switch discriminant and returns the first case whose `when`
/// equals it, in declaration order. `None` when the discriminant is absent
/// or no case matches; the caller renders nothing for the field.
pub fn select_case<'a>(
    schema: &'a SwitchSchema,
    current_path: &[String],
    root: &Value,
    indices: Option<&ArrayIndices>,
) -> Option<&'a SwitchCase> {
    let discriminant = match mason_path::evaluate(&schema.switch, current_path, root, indices) {
        Ok(value) => value?,
        Err(err) => {
            log::warn!("invalid switch expression '{}': {}", schema.switch, err);
            return None;
        }
    };
    schema
        .cases
        .iter()
        .find(|case| case.when == *discriminant)
}
