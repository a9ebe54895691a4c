//! The disambiguation table mapping array path prefixes to concrete indices.

use std::collections::HashMap;

/// Maps the path prefix of an array (the segment names walked from the root,
/// up to and including the array's own name) to the element index in play
/// during one evaluation. Keys are structural (ordered segment lists
/// compared by value), so pairing never depends on string concatenation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayIndices {
    entries: HashMap<Vec<String>, usize>,
}

impl ArrayIndices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the concrete index for the array at `prefix`.
    pub fn set(&mut self, prefix: Vec<String>, index: usize) {
        self.entries.insert(prefix, index);
    }

    pub fn get(&self, prefix: &[String]) -> Option<usize> {
        self.entries.get(prefix).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[String], usize)> {
        self.entries.iter().map(|(k, v)| (k.as_slice(), *v))
    }
}

impl FromIterator<(Vec<String>, usize)> for ArrayIndices {
    fn from_iter<I: IntoIterator<Item = (Vec<String>, usize)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
