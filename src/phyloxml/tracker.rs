//! Bookkeeping of attribute columns already written.

use std::collections::HashSet;

/// Set of column names already represented in the output of one pass.
///
/// Columns consumed as structural elements (name, confidence, color,
/// branch length, tree-level elements and properties) are marked here, so
/// they are not written a second time as generic properties.
/// Create a fresh tracker per pass.
#[derive(Debug, Clone, Default)]
pub struct EmissionTracker {
    names: HashSet<String>,
}

impl EmissionTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether column `name` has been marked.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Marks column `name` as written. Idempotent.
    ///
    /// # Returns
    /// `true` if the name was not marked before.
    pub fn mark(&mut self, name: &str) -> bool {
        if self.names.contains(name) {
            return false;
        }
        self.names.insert(name.to_string())
    }

    /// Returns the number of marked columns.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns whether no column has been marked.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
