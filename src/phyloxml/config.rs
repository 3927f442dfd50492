//! Configuration of the PhyloXML writer.

use crate::phyloxml::defs::{
    DEFAULT_EDGE_WEIGHT_COLUMN, DEFAULT_INDENT_WIDTH, DEFAULT_NODE_NAME_COLUMN,
};
use crate::phyloxml::error::PhyloXmlError;
use serde::{Deserialize, Serialize};

/// Settings of a [PhyloXmlWriter](crate::phyloxml::PhyloXmlWriter).
///
/// Only the two column names feeding branch lengths and clade names are
/// configurable; all other mappings follow fixed naming conventions
/// (see [crate::phyloxml]).
///
/// Can be loaded from TOML, where missing keys take their defaults:
/// ```
/// use phyloxml_writer::phyloxml::WriterConfig;
///
/// let config = WriterConfig::from_toml_str(r#"node_name_column = "taxon""#).unwrap();
/// assert_eq!(config.node_name_column, "taxon");
/// assert_eq!(config.edge_weight_column, "weight");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Name of the edge column written as `branch_length`
    pub edge_weight_column: String,
    /// Name of the vertex column written as clade `name`
    pub node_name_column: String,
    /// Spaces per nesting level in the output
    pub indent_width: usize,
}

impl WriterConfig {
    /// Parses a configuration from a TOML document.
    ///
    /// # Errors
    /// Returns [PhyloXmlError::Config] if the document is not valid TOML or
    /// holds values of the wrong type.
    pub fn from_toml_str(toml: &str) -> Result<Self, PhyloXmlError> {
        Ok(toml::from_str(toml)?)
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        WriterConfig {
            edge_weight_column: DEFAULT_EDGE_WEIGHT_COLUMN.to_string(),
            node_name_column: DEFAULT_NODE_NAME_COLUMN.to_string(),
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}
