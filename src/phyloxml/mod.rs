//! PhyloXML writer for attributed trees.
//!
//! This module provides [`PhyloXmlWriter`] to serialize an
//! [`AttributedTree`] into a PhyloXML (version 1.10) document.
//!
//! # Quick API
//! For simple use cases with default settings:
//! * [`to_string`] - returns the document as string
//! * [`write_file`] - writes the document to a file
//!
//! # Full API
//! Configure a [`PhyloXmlWriter`] (or load a [`WriterConfig`]) to choose the
//! columns feeding branch lengths and names, then call
//! [`PhyloXmlWriter::write`], [`PhyloXmlWriter::write_to_string`] or
//! [`PhyloXmlWriter::write_file`].
//!
//! # Mapping
//! Each vertex becomes a `clade`, nested as in the tree and in child order.
//! Columns are mapped by name:
//! * edge column `weight` (configurable) → clade attribute `branch_length`
//! * vertex column `node name` (configurable) → clade element `name`
//! * vertex column `confidence` → clade element `confidence`,
//!   with attribute `type` from the column metadata key `type`
//! * 3-component vertex column `color` → clade element `color`
//!   with `red`, `green` and `blue`
//! * vertex columns `phylogeny.name`, `phylogeny.description` and
//!   `phylogeny.confidence` → elements of the `phylogeny` itself,
//!   value taken from index 0
//! * vertex columns `phylogeny.property.<name>` → `property` of the
//!   `phylogeny`, value taken from index 0
//! * every other vertex column → one `property` per clade
//!
//! Each column is written at most once: either as one structure or as one
//! property per clade. Empty names and confidences are omitted.
//!
//! A `property` has the reference `<authority>:<name>`, where `authority`
//! comes from the column metadata (default `VTK`) and `name` is the column
//! name after `property.` (if present). Its `applies_to` and `unit` come
//! from the metadata as well (default `clade`, no unit) and its `datatype`
//! from the kind of the value (see [`map_datatype`]).

mod clade;
mod config;
mod datatype;
pub mod defs;
mod error;
mod property;
mod tracker;
mod writer;

pub use self::config::WriterConfig;
pub use self::datatype::map_datatype;
pub use self::error::PhyloXmlError;
pub use self::property::{PropertyDescriptor, PropertyTarget};
pub use self::tracker::EmissionTracker;
pub use self::writer::PhyloXmlWriter;

use crate::model::AttributedTree;
use std::path::Path;

// ============================================================================
// QUICK WRITING API (pub)
// ============================================================================
/// Returns the PhyloXML document of `tree`, using default settings.
///
/// # Example
/// ```
/// use phyloxml_writer::model::AttributedTree;
///
/// let mut tree = AttributedTree::new();
/// tree.add_root();
/// let xml = phyloxml_writer::phyloxml::to_string(&tree);
/// assert!(xml.starts_with("<phyloxml"));
/// ```
pub fn to_string(tree: &AttributedTree) -> String {
    PhyloXmlWriter::new().write_to_string(tree)
}

/// Writes the PhyloXML document of `tree` to a new file at `path`,
/// using default settings.
///
/// # Errors
/// Returns a [`PhyloXmlError`] if the file cannot be created or written.
///
/// # Example
/// ```ignore
/// use phyloxml_writer::phyloxml::write_file;
///
/// write_file(&tree, "kiwi.xml")?;
/// ```
pub fn write_file<P: AsRef<Path>>(tree: &AttributedTree, path: P) -> Result<(), PhyloXmlError> {
    PhyloXmlWriter::new().write_file(tree, path)
}
