//! PhyloXML document writing for [AttributedTree]s.

use crate::model::AttributedTree;
use crate::phyloxml::clade::CladeBuilder;
use crate::phyloxml::config::WriterConfig;
use crate::phyloxml::defs::{
    PHYLOGENY, PHYLOXML_CLOSE, PHYLOXML_OPEN, ROOTED, TREE_LEVEL_ELEMENTS, TREE_LEVEL_PREFIX,
    TREE_PROPERTY_PREFIX,
};
use crate::phyloxml::error::PhyloXmlError;
use crate::phyloxml::property::{PropertyDescriptor, PropertyTarget};
use crate::phyloxml::tracker::EmissionTracker;
use crate::xml::XmlElement;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// =#========================================================================#=
// PHYLOXML WRITER
// =#========================================================================#=
/// Writer for [AttributedTree]s in PhyloXML format.
///
/// A write is a single pass: the document envelope is opened, the
/// `phylogeny` element is assembled (tree-level elements and properties
/// first, then the clade tree from the root), printed, and the envelope is
/// closed. Each pass uses its own [EmissionTracker], so a writer can be
/// reused and shared between threads.
///
/// # Example
/// ```
/// use phyloxml_writer::model::{AttributeColumn, AttributedTree};
/// use phyloxml_writer::phyloxml::PhyloXmlWriter;
///
/// let mut tree = AttributedTree::new();
/// let root = tree.add_root();
/// tree.add_child(root);
/// tree.vertex_data_mut().add(AttributeColumn::new("taxon", vec!["", "Takahe"]));
///
/// let writer = PhyloXmlWriter::new().with_node_name_column("taxon");
/// let xml = writer.write_to_string(&tree);
/// assert!(xml.contains("<name>Takahe</name>"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PhyloXmlWriter {
    config: WriterConfig,
}

// ============================================================================
// Configuration (pub)
// ============================================================================
impl PhyloXmlWriter {
    /// Creates a writer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer with the given settings.
    pub fn from_config(config: WriterConfig) -> Self {
        PhyloXmlWriter { config }
    }

    /// Sets the name of the edge column written as `branch_length`.
    pub fn with_edge_weight_column<S: Into<String>>(mut self, name: S) -> Self {
        self.config.edge_weight_column = name.into();
        self
    }

    /// Sets the name of the vertex column written as clade `name`.
    pub fn with_node_name_column<S: Into<String>>(mut self, name: S) -> Self {
        self.config.node_name_column = name.into();
        self
    }

    /// Sets the number of spaces per nesting level.
    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.config.indent_width = indent_width;
        self
    }

    /// Returns the settings of this writer.
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }
}

// ============================================================================
// Writing (pub)
// ============================================================================
impl PhyloXmlWriter {
    /// Writes `tree` as a complete PhyloXML document to `writer`.
    ///
    /// # Errors
    /// Returns [PhyloXmlError::Write] as soon as writing to `writer` fails;
    /// whatever was written before remains.
    pub fn write<W: Write>(&self, tree: &AttributedTree, mut writer: W) -> Result<(), PhyloXmlError> {
        debug!(
            "Writing PhyloXML for tree with {} vertices, {} vertex and {} edge columns",
            tree.num_vertices(),
            tree.vertex_data().len(),
            tree.edge_data().len()
        );

        writer.write_all(PHYLOXML_OPEN.as_bytes())?;
        writer.flush()?;

        let phylogeny = self.build_phylogeny(tree);
        phylogeny.print_xml(&mut writer, 1, self.config.indent_width)?;

        writer.write_all(PHYLOXML_CLOSE.as_bytes())?;
        writer.flush()?;

        debug!("Finished writing PhyloXML");
        Ok(())
    }

    /// Returns the PhyloXML document of `tree` as string.
    pub fn write_to_string(&self, tree: &AttributedTree) -> String {
        let mut buffer = Vec::new();
        self.write(tree, &mut buffer)
            .expect("writing to Vec<u8> cannot fail");
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Writes `tree` as PhyloXML document to a new file at `path`.
    ///
    /// # Errors
    /// Returns [PhyloXmlError::CreateFile] if the file cannot be created,
    /// [PhyloXmlError::Write] if writing fails.
    pub fn write_file<P: AsRef<Path>>(
        &self,
        tree: &AttributedTree,
        path: P,
    ) -> Result<(), PhyloXmlError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| PhyloXmlError::CreateFile {
            path: path.to_path_buf(),
            source,
        })?;
        self.write(tree, BufWriter::new(file))
    }

    /// Assembles the `phylogeny` element of `tree`, without the envelope.
    pub fn build_phylogeny(&self, tree: &AttributedTree) -> XmlElement {
        let mut tracker = EmissionTracker::new();

        let edge_weights = tree.edge_data().get(&self.config.edge_weight_column);
        if edge_weights.is_none() {
            debug!("No edge column '{}', omitting branch lengths", self.config.edge_weight_column);
        }
        let node_names = tree.vertex_data().get(&self.config.node_name_column);
        if node_names.is_none() {
            debug!("No vertex column '{}', omitting clade names", self.config.node_name_column);
        }

        let mut phylogeny = XmlElement::new(PHYLOGENY);
        phylogeny.set_attribute(ROOTED, "true");

        write_tree_level_elements(tree, &mut phylogeny, &mut tracker);
        write_tree_level_properties(tree, &mut phylogeny, &mut tracker);

        if tree.is_root_set() {
            CladeBuilder::new(tree, edge_weights, node_names).build(
                tree.root_index(),
                &mut phylogeny,
                &mut tracker,
            );
        } else {
            debug!("Tree has no root, writing phylogeny without clades");
        }

        phylogeny
    }
}

// ============================================================================
// Tree-level output (private)
// ============================================================================
/// Writes the optional `name`, `description` and `confidence` elements of the
/// phylogeny from the vertex columns `phylogeny.<element>`.
fn write_tree_level_elements(
    tree: &AttributedTree,
    phylogeny: &mut XmlElement,
    tracker: &mut EmissionTracker,
) {
    for &(element_name, attribute) in TREE_LEVEL_ELEMENTS {
        let column_name = format!("{TREE_LEVEL_PREFIX}{element_name}");
        let Some(column) = tree.vertex_data().get(&column_name) else {
            continue;
        };

        let mut element = XmlElement::new(element_name);
        element.set_character_data(column.string_at(0));
        if let Some((attribute, metadata_key)) = attribute {
            if let Some(value) = column.non_empty_metadata(metadata_key) {
                element.set_attribute(attribute, value);
            }
        }
        phylogeny.add_nested(element);

        tracker.mark(&column_name);
    }
}

/// Writes a tree-level `property` for each vertex column starting with
/// `phylogeny.property.`.
fn write_tree_level_properties(
    tree: &AttributedTree,
    phylogeny: &mut XmlElement,
    tracker: &mut EmissionTracker,
) {
    for column in tree.vertex_data() {
        if column.name().starts_with(TREE_PROPERTY_PREFIX) {
            let property = PropertyDescriptor::resolve(column, PropertyTarget::Tree, tracker);
            phylogeny.add_nested(property.to_element());
        }
    }
}
