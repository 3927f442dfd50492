//! Data model for attributed, rooted trees.
//!
//! # Tree representation
//! Trees are represented by [AttributedTree], which uses the arena pattern to
//! store [Vertex] and [Edge] entries, referenced by [VertexIndex] and
//! [EdgeIndex]. Trees are ordered (children keep insertion order) and need
//! not be binary.
//!
//! # Attributes
//! Vertices and edges each carry a [ColumnSet] of [AttributeColumn]s.
//! A column holds one tuple of [Value]s per vertex (or edge), whose
//! [ValueKind] is only known at read time, plus string metadata such as
//! `authority`, `applies_to`, `unit` or `type`.

pub mod column;
pub mod column_set;
pub mod tree;
pub mod value;

pub use column::AttributeColumn;
pub use column_set::ColumnSet;
pub use tree::{AttributedTree, Edge, EdgeIndex, Vertex, VertexIndex};
pub use value::{Value, ValueKind};
