//! Semantic analyzers.
//!
//! Two analyzer families, composed as statically ordered lists:
//!
//! - [`document`]: per-document structural rules. No graph or
//!   specification access; safe to fan out with one task per document.
//! - [`spec`]: cross-document rules over the dependency graph and the
//!   specification-wide name indices; some require dependency-first
//!   order.
//!
//! [`BatchSpecificationAnalyzer`] runs both families in a fixed,
//! non-short-circuiting order.

mod batch;
pub mod collaborators;
pub mod document;
pub mod spec;

pub use batch::BatchSpecificationAnalyzer;
pub use collaborators::{
    AssumeExisting, BracketQueryParser, ConnectionChecker, FileChecker, FsFileChecker,
    NoopConnectionChecker, QueryParser,
};
