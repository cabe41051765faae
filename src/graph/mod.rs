//! Import dependency graph.
//!
//! One vertex per document (resolved path), one directed edge per import
//! (A→B means "A imports B"). The graph is built once per analysis pass
//! from a fully-assembled [`Specification`] and is immutable afterwards.
//!
//! Self-edges are kept in the adjacency (the import analyzer reports them
//! as document-level errors); cycle enumeration and the topological order
//! stay well-defined in their presence.

mod spec_graph;

pub use spec_graph::SpecGraph;
