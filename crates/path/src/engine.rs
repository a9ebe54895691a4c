//! The evaluation engine for walking a parsed path against a data tree.
//!
//! Evaluation is total: any missing member, wrong container kind, or
//! out-of-range index resolves to `None`. Only parsing can fail.

use super::ast::{Anchor, IndexSelector, PathExpr, Segment};
use super::indices::ArrayIndices;
use super::parser::parse_path;
use crate::error::PathError;
use serde_json::Value;

/// Parses and evaluates `expression` against `root`.
///
/// `current_path` is the concrete location the expression is relative to
/// (ignored by absolute paths). `indices` disambiguates `[*]`/`[@]` segments
/// when evaluating from inside a specific array element. The expression is
/// reparsed on every call; there is no cache to invalidate.
pub fn evaluate<'a>(
    expression: &str,
    current_path: &[String],
    root: &'a Value,
    indices: Option<&ArrayIndices>,
) -> Result<Option<&'a Value>, PathError> {
    let expr = parse_path(expression)?;
    Ok(evaluate_parsed(&expr, current_path, root, indices))
}

/// Evaluates a pre-parsed expression. Total over any input tree.
pub fn evaluate_parsed<'a>(
    expr: &PathExpr,
    current_path: &[String],
    root: &'a Value,
    indices: Option<&ArrayIndices>,
) -> Option<&'a Value> {
    let base = match expr.anchor {
        Anchor::Root => &[][..],
        Anchor::Up(levels) => {
            let keep = current_path.len().saturating_sub(levels);
            &current_path[..keep]
        }
    };

    // The prefix accumulates segment names from the root so that wildcard
    // lookups stay root-anchored even for relative expressions.
    let mut prefix: Vec<String> = Vec::with_capacity(base.len() + expr.segments.len());
    let mut current = root;
    for raw in base {
        current = step(current, &Segment::from_concrete(raw), &mut prefix, indices)?;
    }
    for seg in &expr.segments {
        current = step(current, seg, &mut prefix, indices)?;
    }
    Some(current)
}

/// Walks one segment. Bracketed segments push only the member name onto the
/// prefix; the resolved element index is not part of it.
fn step<'a>(
    current: &'a Value,
    seg: &Segment,
    prefix: &mut Vec<String>,
    indices: Option<&ArrayIndices>,
) -> Option<&'a Value> {
    match seg.index {
        Some(selector) => {
            let member = current.get(seg.name.as_str())?;
            prefix.push(seg.name.clone());
            let items = member.as_array()?;
            let index = match selector {
                IndexSelector::Literal(i) => i,
                IndexSelector::Wildcard | IndexSelector::Current => indices
                    .and_then(|map| map.get(prefix))
                    .unwrap_or(0),
            };
            items.get(index)
        }
        None => {
            // A numeric segment indexes the current value when it is an
            // array, and is an ordinary key otherwise, so one stored path
            // works for both shapes.
            let next = match current {
                Value::Array(items) => seg.name.parse::<usize>().ok().and_then(|i| items.get(i)),
                Value::Object(map) => map.get(&seg.name),
                _ => None,
            };
            prefix.push(seg.name.clone());
            next
        }
    }
}
