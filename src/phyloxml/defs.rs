//! Constants and definitions for the PhyloXML writer.
//!
//! Holds the document envelope, element and attribute names of the PhyloXML
//! vocabulary, as well as the column names and prefixes by which attribute
//! columns are mapped onto that vocabulary.

use crate::model::column::TYPE_KEY;

/// Opening tag of the document-level element, including namespaces and
/// schema location (format version 1.10).
pub(crate) const PHYLOXML_OPEN: &str = "<phyloxml xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
xmlns=\"http://www.phyloxml.org\" \
xsi:schemaLocation=\"http://www.phyloxml.org http://www.phyloxml.org/1.10/phyloxml.xsd\">\n";

/// Closing tag of the document-level element.
pub(crate) const PHYLOXML_CLOSE: &str = "</phyloxml>\n";

/// Default file extension of PhyloXML files.
pub const DEFAULT_FILE_EXTENSION: &str = "xml";

// Default configuration
/// Default name of the edge column providing branch lengths.
pub const DEFAULT_EDGE_WEIGHT_COLUMN: &str = "weight";
/// Default name of the vertex column providing clade names.
pub const DEFAULT_NODE_NAME_COLUMN: &str = "node name";
/// Default number of spaces per nesting level.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

// Elements
pub(crate) const PHYLOGENY: &str = "phylogeny";
pub(crate) const CLADE: &str = "clade";
pub(crate) const NAME: &str = "name";
pub(crate) const DESCRIPTION: &str = "description";
pub(crate) const CONFIDENCE: &str = "confidence";
pub(crate) const COLOR: &str = "color";
pub(crate) const RED: &str = "red";
pub(crate) const GREEN: &str = "green";
pub(crate) const BLUE: &str = "blue";
pub(crate) const PROPERTY: &str = "property";

// Attributes
pub(crate) const ROOTED: &str = "rooted";
pub(crate) const BRANCH_LENGTH: &str = "branch_length";
pub(crate) const TYPE: &str = "type";
pub(crate) const DATATYPE: &str = "datatype";
pub(crate) const REF: &str = "ref";
pub(crate) const APPLIES_TO: &str = "applies_to";
pub(crate) const UNIT: &str = "unit";

// Column naming conventions
/// Vertex column mapped to clade `confidence` elements.
pub const CONFIDENCE_COLUMN: &str = "confidence";
/// Vertex column mapped to clade `color` elements (3 components).
pub const COLOR_COLUMN: &str = "color";
/// Prefix of vertex columns describing the whole tree.
pub const TREE_LEVEL_PREFIX: &str = "phylogeny.";
/// Prefix of vertex columns emitted as tree-level properties.
pub const TREE_PROPERTY_PREFIX: &str = "phylogeny.property.";
/// Marker stripped from a column name to obtain the property name.
pub const PROPERTY_MARKER: &str = "property.";

/// Tree-level single value elements in output order, each with the
/// attribute it may carry and the column metadata key that attribute is read
/// from.
pub(crate) const TREE_LEVEL_ELEMENTS: &[(&str, Option<(&str, &str)>)] = &[
    (NAME, None),
    (DESCRIPTION, None),
    (CONFIDENCE, Some((TYPE, TYPE_KEY))),
];

// Property defaults
/// Authority used when a column provides none.
pub const DEFAULT_AUTHORITY: &str = "VTK";
/// Scope used when a column provides none.
pub const DEFAULT_APPLIES_TO: &str = "clade";
