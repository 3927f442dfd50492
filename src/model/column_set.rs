//! Ordered collection of [AttributeColumn]s with lookup by name.

use crate::model::column::AttributeColumn;
use std::collections::HashMap;

/// Ordered set of attribute columns, addressable by position or by name.
///
/// Insertion order is the native column order and is kept stable.
/// Names are unique: adding a column under an existing name replaces the
/// previous column in place.
#[derive(Debug, Clone, Default)]
pub struct ColumnSet {
    columns: Vec<AttributeColumn>,
    positions: HashMap<String, usize>,
}

impl ColumnSet {
    /// Creates a new empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column, replacing any column with the same name.
    ///
    /// # Returns
    /// The position of the column in this set.
    pub fn add(&mut self, column: AttributeColumn) -> usize {
        if let Some(&position) = self.positions.get(column.name()) {
            self.columns[position] = column;
            return position;
        }

        let position = self.columns.len();
        self.positions.insert(column.name().to_string(), position);
        self.columns.push(column);
        position
    }

    /// Returns the column named `name`, or `None`.
    pub fn get(&self, name: &str) -> Option<&AttributeColumn> {
        self.position(name).map(|p| &self.columns[p])
    }

    /// Returns a mutable reference to the column named `name`, or `None`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut AttributeColumn> {
        self.position(name).map(|p| &mut self.columns[p])
    }

    /// Returns the position of the column named `name`, or `None`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Returns the column at `position`, or `None` if out of range.
    pub fn column(&self, position: usize) -> Option<&AttributeColumn> {
        self.columns.get(position)
    }

    /// Returns whether a column named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Iterates over columns in native order.
    pub fn iter(&self) -> std::slice::Iter<'_, AttributeColumn> {
        self.columns.iter()
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns whether this set holds no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<'a> IntoIterator for &'a ColumnSet {
    type Item = &'a AttributeColumn;
    type IntoIter = std::slice::Iter<'a, AttributeColumn>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
