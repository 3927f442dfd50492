//! Construction of the `clade` element tree.

use crate::model::column::TYPE_KEY;
use crate::model::{AttributeColumn, AttributedTree, ValueKind, VertexIndex};
use crate::phyloxml::defs::{
    BLUE, BRANCH_LENGTH, CLADE, COLOR, COLOR_COLUMN, CONFIDENCE, CONFIDENCE_COLUMN, GREEN, NAME,
    RED, TYPE,
};
use crate::phyloxml::property::{PropertyDescriptor, PropertyTarget};
use crate::phyloxml::tracker::EmissionTracker;
use crate::xml::XmlElement;
use log::{trace, warn};

/// Number of components a color column must have (red, green, blue).
const COLOR_COMPONENTS: usize = 3;

// =#========================================================================#=
// STRUCTURAL RULES
// =#========================================================================€=
/// Clade-level structures a column can be written as, instead of as generic
/// property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StructuralRule {
    /// `branch_length` attribute from the configured edge weight column
    BranchLength,
    /// `name` element from the configured node name column
    Name,
    /// `confidence` element from the "confidence" column
    Confidence,
    /// `color` element from the 3-component, unsigned byte "color" column
    Color,
}

/// Rules in the order their output appears within a clade.
const STRUCTURAL_RULES: [StructuralRule; 4] = [
    StructuralRule::BranchLength,
    StructuralRule::Name,
    StructuralRule::Confidence,
    StructuralRule::Color,
];

// =#========================================================================#=
// CLADE BUILDER
// =#========================================================================€=
/// Builds the `clade` element tree mirroring an [AttributedTree].
///
/// Columns feeding structural output are resolved once on construction.
/// The [EmissionTracker] of the current pass is threaded through every call.
pub(crate) struct CladeBuilder<'a> {
    tree: &'a AttributedTree,
    edge_weights: Option<&'a AttributeColumn>,
    node_names: Option<&'a AttributeColumn>,
    confidence: Option<&'a AttributeColumn>,
    color: Option<&'a AttributeColumn>,
}

impl<'a> CladeBuilder<'a> {
    /// Creates a builder for `tree` with the given branch length and name
    /// columns (either may be absent).
    pub(crate) fn new(
        tree: &'a AttributedTree,
        edge_weights: Option<&'a AttributeColumn>,
        node_names: Option<&'a AttributeColumn>,
    ) -> Self {
        CladeBuilder {
            tree,
            edge_weights,
            node_names,
            confidence: tree.vertex_data().get(CONFIDENCE_COLUMN),
            color: tree.vertex_data().get(COLOR_COLUMN).filter(|c| is_color_column(c)),
        }
    }

    /// Builds the clade of `vertex`, including all descendant clades,
    /// and appends it to `parent`.
    ///
    /// Clades are filled in pre-order using an explicit stack, then nested
    /// into their parents bottom-up, so tree depth does not grow the call
    /// stack.
    pub(crate) fn build(
        &self,
        vertex: VertexIndex,
        parent: &mut XmlElement,
        tracker: &mut EmissionTracker,
    ) {
        let mut clades: Vec<Option<XmlElement>> = vec![None; self.tree.num_vertices()];
        let mut pre_order = Vec::new();

        let mut stack = vec![vertex];
        while let Some(current) = stack.pop() {
            let mut clade = XmlElement::new(CLADE);
            for rule in STRUCTURAL_RULES {
                self.apply(rule, current, &mut clade, tracker);
            }
            self.write_properties(current, &mut clade, tracker);

            clades[current] = Some(clade);
            pre_order.push(current);
            stack.extend(self.tree.children(current).iter().rev());
        }

        // Children come after their parent in pre-order, so they are complete
        // when the parent is reached in reverse.
        for &current in pre_order.iter().rev() {
            let children: Vec<XmlElement> = self
                .tree
                .children(current)
                .iter()
                .filter_map(|&child| clades[child].take())
                .collect();
            if let Some(clade) = clades[current].as_mut() {
                for child in children {
                    clade.add_nested(child);
                }
            }
        }

        if let Some(clade) = clades[vertex].take() {
            parent.add_nested(clade);
        }
    }
}

/// Returns whether `column` can be written as `color` element: three
/// components of unsigned bytes. Other "color" columns become properties.
fn is_color_column(column: &AttributeColumn) -> bool {
    if column.num_components() != COLOR_COMPONENTS {
        warn!(
            "Column '{COLOR_COLUMN}' has {} components instead of {COLOR_COMPONENTS}, not written as color",
            column.num_components()
        );
        return false;
    }

    let kind = ValueKind::of(column.component(0, 0));
    if kind != ValueKind::UnsignedChar && kind != ValueKind::Unknown {
        warn!("Column '{COLOR_COLUMN}' holds {kind:?} instead of unsigned bytes, not written as color");
        return false;
    }
    true
}

// ============================================================================
// Structural output (private)
// ============================================================================
impl CladeBuilder<'_> {
    fn apply(
        &self,
        rule: StructuralRule,
        vertex: VertexIndex,
        clade: &mut XmlElement,
        tracker: &mut EmissionTracker,
    ) {
        match rule {
            StructuralRule::BranchLength => self.write_branch_length(vertex, clade, tracker),
            StructuralRule::Name => self.write_name(vertex, clade, tracker),
            StructuralRule::Confidence => self.write_confidence(vertex, clade, tracker),
            StructuralRule::Color => self.write_color(vertex, clade, tracker),
        }
    }

    fn write_branch_length(
        &self,
        vertex: VertexIndex,
        clade: &mut XmlElement,
        tracker: &mut EmissionTracker,
    ) {
        let Some(weights) = self.edge_weights else {
            return;
        };

        let weight = self
            .tree
            .parent(vertex)
            .and_then(|parent| self.tree.edge_between(parent, vertex))
            .and_then(|edge| weights.value_at(edge));
        if let Some(weight) = weight {
            clade.set_double_attribute(BRANCH_LENGTH, weight.to_f64());
        }

        consume(weights.name(), BRANCH_LENGTH, tracker);
    }

    fn write_name(&self, vertex: VertexIndex, clade: &mut XmlElement, tracker: &mut EmissionTracker) {
        let Some(names) = self.node_names else {
            return;
        };

        let name = names.string_at(vertex);
        if !name.is_empty() {
            let mut element = XmlElement::new(NAME);
            element.set_character_data(name);
            clade.add_nested(element);
        }

        consume(names.name(), NAME, tracker);
    }

    fn write_confidence(
        &self,
        vertex: VertexIndex,
        clade: &mut XmlElement,
        tracker: &mut EmissionTracker,
    ) {
        let Some(confidences) = self.confidence else {
            return;
        };

        let confidence = confidences.string_at(vertex);
        if !confidence.is_empty() {
            let mut element = XmlElement::new(CONFIDENCE);
            if let Some(kind) = confidences.non_empty_metadata(TYPE_KEY) {
                element.set_attribute(TYPE, kind);
            }
            element.set_character_data(confidence);
            clade.add_nested(element);
        }

        consume(CONFIDENCE_COLUMN, CONFIDENCE, tracker);
    }

    fn write_color(&self, vertex: VertexIndex, clade: &mut XmlElement, tracker: &mut EmissionTracker) {
        let Some(colors) = self.color else {
            return;
        };

        let channels: Option<Vec<XmlElement>> = [RED, GREEN, BLUE]
            .iter()
            .enumerate()
            .map(|(component, &channel)| {
                let value = colors.component(vertex, component)?;
                let mut element = XmlElement::new(channel);
                element.set_character_data(value.to_string());
                Some(element)
            })
            .collect();

        if let Some(channels) = channels {
            let mut element = XmlElement::new(COLOR);
            for channel in channels {
                element.add_nested(channel);
            }
            clade.add_nested(element);
        }

        consume(COLOR_COLUMN, COLOR, tracker);
    }
}

// ============================================================================
// Generic properties (private)
// ============================================================================
impl CladeBuilder<'_> {
    /// Writes every vertex column not yet represented as a `property` of
    /// this clade, in native column order.
    fn write_properties(
        &self,
        vertex: VertexIndex,
        clade: &mut XmlElement,
        tracker: &mut EmissionTracker,
    ) {
        for column in self.tree.vertex_data() {
            if is_same_column(self.node_names, column) || is_same_column(self.edge_weights, column) {
                continue;
            }
            if tracker.contains(column.name()) {
                continue;
            }

            let property =
                PropertyDescriptor::resolve(column, PropertyTarget::Vertex(vertex), tracker);
            clade.add_nested(property.to_element());
        }
    }
}

/// Returns whether `candidate` is the very column `configured` refers to.
fn is_same_column(configured: Option<&AttributeColumn>, candidate: &AttributeColumn) -> bool {
    configured.is_some_and(|c| std::ptr::eq(c, candidate))
}

/// Marks column `name` as written, as `structure`.
fn consume(name: &str, structure: &str, tracker: &mut EmissionTracker) {
    if tracker.mark(name) {
        trace!("Column '{name}' written as {structure}");
    }
}
