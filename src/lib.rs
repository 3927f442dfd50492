//! Phyloxml-writer is a library to write attributed phylogenetic trees as
//! PhyloXML documents.
//!
//! This crate converts a rooted, ordered tree whose vertices and edges carry
//! arbitrary named, typed attribute columns into PhyloXML (version 1.10).
//! Core functionality provided:
//! - Tree model: [AttributedTree] stores vertices and edges using the arena
//!   pattern, together with vertex and edge [ColumnSet]s of
//!   [AttributeColumn]s. See [crate::model] for details.
//! - Writer: [PhyloXmlWriter] maps columns onto the PhyloXML vocabulary
//!   (branch lengths, names, confidences, colors, tree-level elements) and
//!   writes all remaining columns as generic `property` elements, each
//!   column exactly once. See [crate::phyloxml] for the mapping.
//! - Configurability: names of the branch length and name columns,
//!   indentation; in code or loaded from TOML via [WriterConfig].
//!
//! Limitations:
//! - Writing only, no PhyloXML parsing
//! - One phylogeny per document
//!
//! # Usage patterns
//! 1. Quick functions with default settings: [to_phyloxml_string] and
//!    [write_phyloxml_file].
//! 2. A configured [PhyloXmlWriter] for full control.
//!
//! ## Example
//! ```
//! use phyloxml_writer::model::{AttributeColumn, AttributedTree};
//! use phyloxml_writer::to_phyloxml_string;
//!
//! // Root with leaves "Kiwi" and "Moa"
//! let mut tree = AttributedTree::new();
//! let root = tree.add_root();
//! tree.add_child(root);
//! tree.add_child(root);
//! tree.vertex_data_mut()
//!     .add(AttributeColumn::new("node name", vec!["", "Kiwi", "Moa"]));
//! tree.edge_data_mut()
//!     .add(AttributeColumn::new("weight", vec![1.5, 2.0]));
//!
//! let xml = to_phyloxml_string(&tree);
//! assert!(xml.contains("<clade branch_length=\"1.5\">"));
//! assert!(xml.contains("<name>Moa</name>"));
//! ```
//!
//! ## Example Writer Configuration
//! ```no_run
//! use phyloxml_writer::phyloxml::PhyloXmlWriter;
//! # use phyloxml_writer::model::AttributedTree;
//! # let tree = AttributedTree::new();
//!
//! let writer = PhyloXmlWriter::new()
//!     .with_edge_weight_column("distance") // branch lengths
//!     .with_node_name_column("taxon")      // clade names
//!     .with_indent_width(4);
//! writer.write_file(&tree, "ratites.xml")?;
//! # Ok::<(), phyloxml_writer::phyloxml::PhyloXmlError>(())
//! ```

pub mod model;
pub mod phyloxml;
pub mod xml;

pub use crate::model::{AttributeColumn, AttributedTree, ColumnSet, Value, ValueKind};
pub use crate::phyloxml::{PhyloXmlError, PhyloXmlWriter, WriterConfig};

use std::path::Path;

// ============================================================================
// Quick PhyloXML API
// ============================================================================
/// Returns the PhyloXML document of `tree`, using default settings.
///
/// See [`phyloxml::to_string`] for full documentation.
pub fn to_phyloxml_string(tree: &AttributedTree) -> String {
    phyloxml::to_string(tree)
}

/// Writes the PhyloXML document of `tree` to a new file at `path`,
/// using default settings.
///
/// See [`phyloxml::write_file`] for full documentation.
pub fn write_phyloxml_file<P: AsRef<Path>>(tree: &AttributedTree, path: P) -> Result<(), PhyloXmlError> {
    phyloxml::write_file(tree, path)
}
