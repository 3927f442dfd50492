//! Named attribute columns attached to vertices or edges of a tree.

use crate::model::value::Value;
use std::collections::BTreeMap;

/// Metadata key for the namespace prefix of a property reference.
pub const AUTHORITY_KEY: &str = "authority";
/// Metadata key for the scope keyword of a property.
pub const APPLIES_TO_KEY: &str = "applies_to";
/// Metadata key for the unit of a property.
pub const UNIT_KEY: &str = "unit";
/// Metadata key for the type of a confidence value.
pub const TYPE_KEY: &str = "type";

// =#========================================================================#=
// ATTRIBUTE COLUMN
// =#========================================================================€=
/// A named sequence of [Value]s, one tuple per vertex (or per edge).
///
/// Each tuple consists of `num_components` values, stored flat. Most columns
/// have a single component; a color column for example has three.
/// A column further carries free-form string metadata (see [AUTHORITY_KEY],
/// [APPLIES_TO_KEY], [UNIT_KEY], [TYPE_KEY]).
///
/// # Example
/// ```
/// use phyloxml_writer::model::AttributeColumn;
///
/// let column = AttributeColumn::new("height", vec![0.0, 1.5, 2.5])
///     .with_metadata("unit", "MYA");
/// assert_eq!(column.num_tuples(), 3);
/// assert_eq!(column.value_at(1).unwrap().to_string(), "1.5");
/// assert_eq!(column.metadata("unit"), Some("MYA"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeColumn {
    name: String,
    num_components: usize,
    values: Vec<Value>,
    metadata: BTreeMap<String, String>,
}

impl AttributeColumn {
    /// Creates a single-component column.
    ///
    /// # Arguments
    /// * `name` - Name of the column, used to look it up
    /// * `values` - One value per vertex/edge, in index order
    pub fn new<S, T, I>(name: S, values: I) -> Self
    where
        S: Into<String>,
        T: Into<Value>,
        I: IntoIterator<Item = T>,
    {
        Self::with_components(name, 1, values)
    }

    /// Creates a column whose tuples have `num_components` values each.
    ///
    /// # Arguments
    /// * `name` - Name of the column
    /// * `num_components` - Width of each tuple; must be positive
    /// * `values` - Flat values, tuple after tuple
    ///
    /// # Panics
    /// Panics if `num_components` is zero.
    pub fn with_components<S, T, I>(name: S, num_components: usize, values: I) -> Self
    where
        S: Into<String>,
        T: Into<Value>,
        I: IntoIterator<Item = T>,
    {
        assert!(num_components > 0);
        AttributeColumn {
            name: name.into(),
            num_components,
            values: values.into_iter().map(Into::into).collect(),
            metadata: BTreeMap::new(),
        }
    }

    /// Attaches a metadata entry to this column.
    pub fn with_metadata<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.set_metadata(key, value);
        self
    }

    /// Sets (or replaces) a metadata entry.
    pub fn set_metadata<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.metadata.insert(key.into(), value.into());
    }

    /// Returns the metadata value for `key`, or `None` if not set.
    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Returns the metadata value for `key` if set and non-empty.
    pub fn non_empty_metadata(&self, key: &str) -> Option<&str> {
        self.metadata(key).filter(|v| !v.is_empty())
    }

    /// Returns the name of this column.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of components per tuple.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Returns the number of complete tuples in this column.
    pub fn num_tuples(&self) -> usize {
        self.values.len() / self.num_components
    }

    /// Returns the first component of tuple `index`, or `None` if out of range.
    pub fn value_at(&self, index: usize) -> Option<&Value> {
        self.component(index, 0)
    }

    /// Returns component `component` of tuple `index`, or `None` if out of range.
    pub fn component(&self, index: usize, component: usize) -> Option<&Value> {
        if component >= self.num_components || index >= self.num_tuples() {
            return None;
        }
        self.values.get(index * self.num_components + component)
    }

    /// Returns the string form of tuple `index`, empty if out of range.
    pub fn string_at(&self, index: usize) -> String {
        self.value_at(index).map(Value::to_string).unwrap_or_default()
    }
}
