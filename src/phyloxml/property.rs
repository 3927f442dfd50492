//! Resolution of attribute columns into PhyloXML `property` elements.

use crate::model::column::{APPLIES_TO_KEY, AUTHORITY_KEY, UNIT_KEY};
use crate::model::{AttributeColumn, ValueKind, VertexIndex};
use crate::phyloxml::datatype::map_datatype;
use crate::phyloxml::defs::{
    APPLIES_TO, DATATYPE, DEFAULT_APPLIES_TO, DEFAULT_AUTHORITY, PROPERTY, PROPERTY_MARKER, REF,
    UNIT,
};
use crate::phyloxml::tracker::EmissionTracker;
use crate::xml::XmlElement;

/// What a property describes: the whole tree or a single vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyTarget {
    /// Tree-level property; represented by the value at index 0
    Tree,
    /// Property of the clade of the given vertex
    Vertex(VertexIndex),
}

/// Everything needed to write one `property` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Namespaced reference, `authority:name`
    pub reference: String,
    pub applies_to: String,
    pub unit: Option<String>,
    pub datatype: &'static str,
    pub value: String,
}

impl PropertyDescriptor {
    /// Resolves the property of `column` for `target`.
    ///
    /// Authority and scope come from the column metadata, falling back to
    /// [DEFAULT_AUTHORITY] and [DEFAULT_APPLIES_TO]; the unit is only set
    /// if the column provides a non-empty one. The property name is the
    /// column name after the first occurrence of [PROPERTY_MARKER], or the
    /// full column name if the marker does not occur.
    ///
    /// For [PropertyTarget::Tree], the column is marked in `tracker`, since
    /// such a property is resolved only once per pass. For
    /// [PropertyTarget::Vertex] the tracker is left untouched.
    ///
    /// # Example
    /// ```
    /// use phyloxml_writer::model::AttributeColumn;
    /// use phyloxml_writer::phyloxml::{EmissionTracker, PropertyDescriptor, PropertyTarget};
    ///
    /// let column = AttributeColumn::new("property.height", vec![3.5]).with_metadata("unit", "m");
    /// let mut tracker = EmissionTracker::new();
    /// let property = PropertyDescriptor::resolve(&column, PropertyTarget::Vertex(0), &mut tracker);
    ///
    /// assert_eq!(property.reference, "VTK:height");
    /// assert_eq!(property.datatype, "xsd:double");
    /// assert_eq!(property.unit.as_deref(), Some("m"));
    /// assert!(tracker.is_empty());
    /// ```
    pub fn resolve(
        column: &AttributeColumn,
        target: PropertyTarget,
        tracker: &mut EmissionTracker,
    ) -> Self {
        let authority = column
            .non_empty_metadata(AUTHORITY_KEY)
            .unwrap_or(DEFAULT_AUTHORITY);
        let applies_to = column
            .non_empty_metadata(APPLIES_TO_KEY)
            .unwrap_or(DEFAULT_APPLIES_TO);
        let unit = column.non_empty_metadata(UNIT_KEY).map(str::to_string);

        let name = column.name();
        let property_name = name
            .find(PROPERTY_MARKER)
            .map_or(name, |start| &name[start + PROPERTY_MARKER.len()..]);

        let index = match target {
            PropertyTarget::Tree => {
                tracker.mark(name);
                0
            }
            PropertyTarget::Vertex(index) => index,
        };

        let value = column.value_at(index);
        PropertyDescriptor {
            reference: format!("{authority}:{property_name}"),
            applies_to: applies_to.to_string(),
            unit,
            datatype: map_datatype(ValueKind::of(value)),
            value: value.map(|v| v.to_string()).unwrap_or_default(),
        }
    }

    /// Builds the `property` element for this descriptor.
    pub fn to_element(&self) -> XmlElement {
        let mut element = XmlElement::new(PROPERTY);
        element.set_attribute(DATATYPE, self.datatype);
        element.set_attribute(REF, self.reference.as_str());
        element.set_attribute(APPLIES_TO, self.applies_to.as_str());
        if let Some(unit) = &self.unit {
            element.set_attribute(UNIT, unit.as_str());
        }
        element.set_character_data(self.value.as_str());
        element
    }
}
