//! Diagnostics.
//!
//! Semantic violations are data, not `Err`: analyzers append
//! [`LocatedException`]s into a [`ProblemMapper`] keyed by document path
//! (or the generic key, for specification-wide rules) and always keep
//! going. The mapper accumulates for one analysis pass and is read-only
//! once the orchestrator returns.

pub mod duplication;
mod problems;

pub use problems::{LocatedException, ProblemKey, ProblemMapper, Problems};
