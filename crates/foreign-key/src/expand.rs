//! Wildcard pattern expansion over a data tree.
//!
//! Unlike the single-value path evaluator, expansion branches into *every*
//! element at a `[*]` segment, yielding one result per concrete traversal.
//! Pairing of id and display results rests on the structural
//! [`ArrayIndices`] recorded per branch; the string `path` is diagnostics
//! only.

use crate::pattern::PatternSegment;
use mason_path::ArrayIndices;
use serde_json::Value;

/// One concrete traversal produced by expanding a pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult<'a> {
    pub value: &'a Value,
    /// The concrete path walked, for diagnostics.
    pub path: String,
    pub indices: ArrayIndices,
    /// Hierarchy label values collected while branching, outermost first.
    pub hierarchy: Vec<String>,
}

struct Frame<'a> {
    node: &'a Value,
    seg_idx: usize,
    /// Concrete components walked so far, element indices included.
    trail: Vec<String>,
    indices: ArrayIndices,
    hierarchy: Vec<String>,
}

/// Expands `segments` against `root`, branching at every `[*]`.
///
/// An explicit worklist keeps branching iterative; frames are pushed in
/// reverse so results come out in source order (group-major for nested
/// wildcards). A branch whose next segment is missing is dropped silently;
/// one malformed element must not hide the rest of the options.
pub fn expand_pattern<'a>(
    root: &'a Value,
    segments: &[PatternSegment],
    hierarchy_paths: &[Vec<PatternSegment>],
) -> Vec<PathResult<'a>> {
    let mut results = Vec::new();
    let mut stack = vec![Frame {
        node: root,
        seg_idx: 0,
        trail: Vec::new(),
        indices: ArrayIndices::new(),
        hierarchy: Vec::new(),
    }];

    while let Some(frame) = stack.pop() {
        let Some(segment) = segments.get(frame.seg_idx) else {
            results.push(PathResult {
                value: frame.node,
                path: format!("/{}", frame.trail.join("/")),
                indices: frame.indices,
                hierarchy: frame.hierarchy,
            });
            continue;
        };

        match segment {
            PatternSegment::Field(name) => {
                if let Some(next) = frame.node.get(name.as_str()) {
                    let mut trail = frame.trail;
                    trail.push(name.clone());
                    stack.push(Frame {
                        node: next,
                        seg_idx: frame.seg_idx + 1,
                        trail,
                        indices: frame.indices,
                        hierarchy: frame.hierarchy,
                    });
                }
            }
            PatternSegment::FieldEach(name) => {
                let Some(items) = frame.node.get(name.as_str()).and_then(Value::as_array)
                else {
                    log::debug!("expected '{}' to be an array while expanding pattern", name);
                    continue;
                };
                // The indices key is the concrete trail plus the array name;
                // outer element indices stay part of inner keys.
                let mut key = frame.trail.clone();
                key.push(name.clone());
                let consumed = &segments[..=frame.seg_idx];
                for (index, item) in items.iter().enumerate().rev() {
                    let mut trail = frame.trail.clone();
                    trail.push(name.clone());
                    trail.push(index.to_string());
                    let mut indices = frame.indices.clone();
                    indices.set(key.clone(), index);
                    let mut hierarchy = frame.hierarchy.clone();
                    if let Some(label) = hierarchy_value(item, consumed, hierarchy_paths) {
                        hierarchy.push(label);
                    }
                    stack.push(Frame {
                        node: item,
                        seg_idx: frame.seg_idx + 1,
                        trail,
                        indices,
                        hierarchy,
                    });
                }
            }
            PatternSegment::Each => {
                let Some(items) = frame.node.as_array() else {
                    log::debug!("expected an array while expanding standalone [*] segment");
                    continue;
                };
                let key = frame.trail.clone();
                let consumed = &segments[..=frame.seg_idx];
                for (index, item) in items.iter().enumerate().rev() {
                    let mut trail = frame.trail.clone();
                    trail.push(index.to_string());
                    let mut indices = frame.indices.clone();
                    indices.set(key.clone(), index);
                    let mut hierarchy = frame.hierarchy.clone();
                    if let Some(label) = hierarchy_value(item, consumed, hierarchy_paths) {
                        hierarchy.push(label);
                    }
                    stack.push(Frame {
                        node: item,
                        seg_idx: frame.seg_idx + 1,
                        trail,
                        indices,
                        hierarchy,
                    });
                }
            }
        }
    }

    results
}

/// A hierarchy pattern contributes a label at a branch point when it extends
/// the consumed pattern prefix by exactly one leaf member.
fn hierarchy_value(
    item: &Value,
    consumed: &[PatternSegment],
    hierarchy_paths: &[Vec<PatternSegment>],
) -> Option<String> {
    for candidate in hierarchy_paths {
        if candidate.len() != consumed.len() + 1 || candidate[..consumed.len()] != *consumed {
            continue;
        }
        if let PatternSegment::Field(leaf) = &candidate[consumed.len()] {
            if let Some(value) = item.get(leaf.as_str()) {
                return Some(display_string(value));
            }
        }
    }
    None
}

/// Renders a leaf value the way a selector shows it: strings verbatim,
/// null as empty, everything else via its JSON form.
pub(crate) fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
