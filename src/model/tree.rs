//! Provides the attributed tree representation.
//!
//! Provides core data structures for representing rooted, ordered trees
//! whose vertices and edges carry attribute columns:
//! * [AttributedTree] - Main tree structure using the arena pattern
//! * [Vertex] - Single vertex with parent, ordered children and incoming edge
//! * [Edge] - Parent-to-child connection with its own index
//! * [VertexIndex] / [EdgeIndex] as types used to index vertices and edges

use crate::model::column_set::ColumnSet;

/// Index of a vertex in a tree (arena).
pub type VertexIndex = usize;

/// Index of an edge in a tree (arena).
pub type EdgeIndex = usize;

/// *During construction only*, index for unset root.
const NO_ROOT_SET_INDEX: VertexIndex = usize::MAX;

// =#========================================================================#=
// VERTEX & EDGE
// =#========================================================================€=
/// A vertex of an [AttributedTree].
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    index: VertexIndex,
    parent: Option<VertexIndex>,
    children: Vec<VertexIndex>,
    incoming_edge: Option<EdgeIndex>,
}

impl Vertex {
    /// Returns the index of this vertex.
    pub fn index(&self) -> VertexIndex {
        self.index
    }

    /// Returns the parent index, `None` for the root.
    pub fn parent(&self) -> Option<VertexIndex> {
        self.parent
    }

    /// Returns the children in insertion order.
    pub fn children(&self) -> &[VertexIndex] {
        &self.children
    }

    /// Returns the index of the edge from the parent, `None` for the root.
    pub fn incoming_edge(&self) -> Option<EdgeIndex> {
        self.incoming_edge
    }

    /// Returns whether this vertex has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns whether this vertex has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// A directed edge from a parent vertex to one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    index: EdgeIndex,
    source: VertexIndex,
    target: VertexIndex,
}

impl Edge {
    /// Returns the index of this edge.
    pub fn index(&self) -> EdgeIndex {
        self.index
    }

    /// Returns the parent end of this edge.
    pub fn source(&self) -> VertexIndex {
        self.source
    }

    /// Returns the child end of this edge.
    pub fn target(&self) -> VertexIndex {
        self.target
    }
}

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// A rooted, ordered tree represented using the arena pattern, with
/// attribute columns on vertices and on edges.
///
/// Vertices and edges are stored in contiguous vectors and referenced by
/// [VertexIndex] and [EdgeIndex]. Vertex attribute columns are indexed by
/// vertex index, edge attribute columns by edge index.
///
/// # Construction
/// Add the root first with [AttributedTree::add_root], then attach children
/// top-down with [AttributedTree::add_child]. Children are kept in the order
/// they are added. Attach columns via [AttributedTree::vertex_data_mut] and
/// [AttributedTree::edge_data_mut], then test validity with
/// [AttributedTree::is_valid].
///
/// # Example
/// ```
/// use phyloxml_writer::model::{AttributeColumn, AttributedTree};
///
/// let mut tree = AttributedTree::new();
/// let root = tree.add_root();
/// let (a, _) = tree.add_child(root);
/// let (b, _) = tree.add_child(root);
/// tree.vertex_data_mut()
///     .add(AttributeColumn::new("node name", vec!["", "A", "B"]));
/// tree.edge_data_mut()
///     .add(AttributeColumn::new("weight", vec![0.5, 1.5]));
///
/// assert!(tree.is_valid());
/// assert_eq!(tree.children(root), &[a, b]);
/// assert_eq!(tree.edge_between(root, b), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct AttributedTree {
    /// Vertices of this tree (arena pattern)
    vertices: Vec<Vertex>,

    /// Edges of this tree (arena pattern)
    edges: Vec<Edge>,

    /// Index of the root of this tree
    root_index: VertexIndex,

    /// Columns with one tuple per vertex
    vertex_data: ColumnSet,

    /// Columns with one tuple per edge
    edge_data: ColumnSet,
}

// ============================================================================
// New, Construction (pub)
// ============================================================================
impl AttributedTree {
    /// Creates a new empty tree.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new empty tree with room for `num_vertices` vertices.
    pub fn with_capacity(num_vertices: usize) -> Self {
        AttributedTree {
            vertices: Vec::with_capacity(num_vertices),
            edges: Vec::with_capacity(num_vertices.saturating_sub(1)),
            root_index: NO_ROOT_SET_INDEX,
            vertex_data: ColumnSet::new(),
            edge_data: ColumnSet::new(),
        }
    }

    /// Adds the root vertex, returning its index.
    ///
    /// # Panics
    /// Panics if a root has already been added.
    pub fn add_root(&mut self) -> VertexIndex {
        assert!(!self.is_root_set(), "root already set");
        let index = self.vertices.len();
        self.vertices.push(Vertex {
            index,
            parent: None,
            children: Vec::new(),
            incoming_edge: None,
        });
        self.root_index = index;
        index
    }

    /// Adds a new child below `parent`, as its last child.
    ///
    /// # Arguments
    /// * `parent` - Index of an existing vertex
    ///
    /// # Returns
    /// The index of the new vertex and the index of the edge connecting it
    /// to `parent`.
    ///
    /// # Panics
    /// Panics if `parent` is out of bounds.
    pub fn add_child(&mut self, parent: VertexIndex) -> (VertexIndex, EdgeIndex) {
        assert!(parent < self.vertices.len(), "parent {parent} out of bounds");
        let index = self.vertices.len();
        let edge_index = self.edges.len();

        self.edges.push(Edge {
            index: edge_index,
            source: parent,
            target: index,
        });
        self.vertices.push(Vertex {
            index,
            parent: Some(parent),
            children: Vec::new(),
            incoming_edge: Some(edge_index),
        });
        self.vertices[parent].children.push(index);

        (index, edge_index)
    }
}

impl Default for AttributedTree {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Getters / Navigation (pub)
// ============================================================================
impl AttributedTree {
    /// Returns whether the root of the tree has been set.
    pub fn is_root_set(&self) -> bool {
        self.root_index != NO_ROOT_SET_INDEX
    }

    /// Returns the index of the root.
    ///
    /// # Panics
    /// Panics if the root hasn't been set yet.
    pub fn root_index(&self) -> VertexIndex {
        assert!(self.is_root_set(), "root not set");
        self.root_index
    }

    /// Returns a reference to the root vertex.
    ///
    /// # Panics
    /// Panics if the root hasn't been set yet.
    pub fn root(&self) -> &Vertex {
        &self[self.root_index()]
    }

    /// Returns the parent of `vertex`, `None` for the root.
    pub fn parent(&self, vertex: VertexIndex) -> Option<VertexIndex> {
        self[vertex].parent
    }

    /// Returns the children of `vertex` in order.
    pub fn children(&self, vertex: VertexIndex) -> &[VertexIndex] {
        &self[vertex].children
    }

    /// Returns the edge from `parent` to `child`, `None` if they are not
    /// connected by an edge in this direction.
    pub fn edge_between(&self, parent: VertexIndex, child: VertexIndex) -> Option<EdgeIndex> {
        let vertex = self.vertices.get(child)?;
        if vertex.parent == Some(parent) {
            vertex.incoming_edge
        } else {
            None
        }
    }

    /// Returns the edge at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn edge(&self, index: EdgeIndex) -> &Edge {
        &self.edges[index]
    }

    /// Returns the number of vertices in this tree.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges in this tree.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of leaves in this tree.
    pub fn num_leaves(&self) -> usize {
        self.vertices.iter().filter(|v| v.is_leaf()).count()
    }

    /// Returns the vertex attribute columns.
    pub fn vertex_data(&self) -> &ColumnSet {
        &self.vertex_data
    }

    /// Returns the vertex attribute columns for modification.
    pub fn vertex_data_mut(&mut self) -> &mut ColumnSet {
        &mut self.vertex_data
    }

    /// Returns the edge attribute columns.
    pub fn edge_data(&self) -> &ColumnSet {
        &self.edge_data
    }

    /// Returns the edge attribute columns for modification.
    pub fn edge_data_mut(&mut self) -> &mut ColumnSet {
        &mut self.edge_data
    }
}

// ============================================================================
// Validation (pub)
// ============================================================================
impl AttributedTree {
    /// Validates the tree structure, index references and column lengths.
    ///
    /// Checks:
    /// - Root is set and is the only vertex without parent
    /// - All vertex and edge indices match their arena positions
    /// - Children point back to their parent, and appear only once
    /// - Each non-root vertex's incoming edge connects parent and vertex
    /// - Every vertex column has a tuple per vertex,
    ///   every edge column a tuple per edge
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        if !self.is_root_set() || self.root_index >= self.vertices.len() {
            return false;
        }

        let mut seen_as_child = vec![false; self.vertices.len()];
        for (index, vertex) in self.vertices.iter().enumerate() {
            if vertex.index != index {
                return false;
            }

            // Only the root lacks a parent
            if vertex.is_root() != (index == self.root_index) {
                return false;
            }

            for &child in &vertex.children {
                if child >= self.vertices.len() || seen_as_child[child] {
                    return false;
                }
                seen_as_child[child] = true;
                if self.vertices[child].parent != Some(index) {
                    return false;
                }
            }

            if let Some(parent) = vertex.parent {
                let Some(edge) = vertex.incoming_edge.and_then(|e| self.edges.get(e)) else {
                    return false;
                };
                if edge.source != parent || edge.target != index {
                    return false;
                }
            }
        }

        // Every non-root vertex must be some vertex's child
        if seen_as_child.iter().filter(|&&seen| seen).count() + 1 != self.vertices.len() {
            return false;
        }

        if self.edges.iter().enumerate().any(|(i, e)| e.index != i) {
            return false;
        }

        let vertex_columns_ok = self
            .vertex_data
            .iter()
            .all(|c| c.num_tuples() >= self.vertices.len());
        let edge_columns_ok = self
            .edge_data
            .iter()
            .all(|c| c.num_tuples() >= self.edges.len());

        vertex_columns_ok && edge_columns_ok
    }
}

impl std::ops::Index<VertexIndex> for AttributedTree {
    type Output = Vertex;

    fn index(&self, index: VertexIndex) -> &Self::Output {
        &self.vertices[index]
    }
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
impl AttributedTree {
    /// Returns an iterator over the tree in pre-order (parents before
    /// children, siblings in order).
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// Uses an explicit stack rather than recursion.
pub struct PreOrderIter<'a> {
    tree: &'a AttributedTree,
    stack: Vec<VertexIndex>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a AttributedTree) -> Self {
        let mut stack = Vec::new();
        if tree.is_root_set() {
            stack.push(tree.root_index);
        }
        PreOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let vertex = &self.tree[index];

        // Push children in reverse, so the first child is processed first
        self.stack.extend(vertex.children.iter().rev());

        Some(vertex)
    }
}
