//! Parsing and validation of stored wildcard path patterns.
//!
//! Stored patterns are a restricted form of the path expression language:
//! always absolute, and the only bracket form allowed is `name[*]` (the
//! evaluator's `[@]` and literal indices are runtime-only notation).

use crate::error::PatternError;

/// One step of a normalized pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    /// Plain member access.
    Field(String),
    /// `name[*]`: branch into every element of the named array member.
    FieldEach(String),
    /// A standalone `[*]`: branch into every element of the current value,
    /// used when the data root is itself an array.
    Each,
}

/// Normalizes a pattern into segments: the leading `/` is stripped and a
/// `/[*]` component collapses into a trailing `[*]` on the preceding segment
/// (`/data/[*]/id` becomes `data[*]`, `id`).
pub fn parse_pattern(pattern: &str) -> Vec<PatternSegment> {
    let normalized = pattern.strip_prefix('/').unwrap_or(pattern);
    let mut segments = Vec::new();
    for part in normalized.split('/').filter(|part| !part.is_empty()) {
        if part == "[*]" {
            match segments.pop() {
                Some(PatternSegment::Field(name)) => {
                    segments.push(PatternSegment::FieldEach(name));
                }
                Some(other) => {
                    segments.push(other);
                    segments.push(PatternSegment::Each);
                }
                None => segments.push(PatternSegment::Each),
            }
        } else if let Some(name) = part.strip_suffix("[*]") {
            if name.is_empty() {
                segments.push(PatternSegment::Each);
            } else {
                segments.push(PatternSegment::FieldEach(name.to_string()));
            }
        } else {
            segments.push(PatternSegment::Field(part.to_string()));
        }
    }
    segments
}

/// Checks that a stored pattern is syntactically usable before it is ever
/// expanded. Reported as a structured error, never raised during expansion.
pub fn validate_foreign_key_path(path: &str) -> Result<(), PatternError> {
    if path.is_empty() {
        return Err(PatternError::Empty);
    }
    if !path.starts_with('/') {
        return Err(PatternError::NotAbsolute);
    }
    for segment in path.split('/').filter(|segment| !segment.is_empty()) {
        if segment.contains('[') {
            if segment == "[*]" {
                continue;
            }
            match segment.strip_suffix("[*]") {
                Some(name) if !name.is_empty() && !name.contains('[') => {}
                _ => return Err(PatternError::BadSegment(segment.to_string())),
            }
        }
    }
    Ok(())
}
