//! The assembled specification: every document plus specification-wide
//! name indices.

mod indices;
mod specification;

pub use indices::NameIndices;
pub use specification::Specification;
