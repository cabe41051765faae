//! # litmus-base
//!
//! Core library for the Litmus specification compiler: document model,
//! import dependency graph, and cross-document semantic analysis.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! compiler  → driver glue (search → parse → assemble → analyze)
//!   ↓
//! analysis  → per-document and cross-document analyzers, batch orchestration
//!   ↓
//! report    → ProblemMapper diagnostics sink, duplication checking
//!   ↓
//! graph     → import dependency graph, cycles, topological order
//!   ↓
//! spec      → Specification (document set + name indices)
//!   ↓
//! ast       → Document data model (produced by the external parser)
//!   ↓
//! base      → Primitives (Location, path resolution)
//! ```

// ============================================================================
// MODULES (dependency order: base → ast → spec → graph → report → analysis → compiler)
// ============================================================================

/// Foundation types: Location, path normalization and import resolution
pub mod base;

/// Document data model: features, scenarios, test cases, UI elements, imports
pub mod ast;

/// Specification: the full document set plus specification-wide name indices
pub mod spec;

/// Import dependency graph: cycle enumeration, dependency-first traversal
pub mod graph;

/// Diagnostics: ProblemMapper, located exceptions, duplication checking
pub mod report;

/// Semantic analyzers and the batch orchestrator
pub mod analysis;

/// Compiler driver: search → parse → assemble → graph → analyze
pub mod compiler;

// Re-export foundation types
pub use base::Location;

// Re-export the most commonly needed items
pub use analysis::BatchSpecificationAnalyzer;
pub use compiler::{Compilation, CompileError, Compiler};
pub use graph::SpecGraph;
pub use report::{LocatedException, ProblemMapper};
pub use spec::{NameIndices, Specification};
