//! Document data model.
//!
//! Plain data produced by the external parser, one [`Document`] per source
//! file. Analyzers only ever enrich these nodes in place (declared indices,
//! `generated` flags, resolved reference handles, `not_found` marks);
//! nodes are never deleted or structurally replaced.

mod database;
mod document;
mod feature;
mod test_case;
mod ui_element;

pub use database::{Constant, Database, DatabaseProperty, DatabasePropertyKind, Table};
pub use document::{Document, EventBlock, Import};
pub use feature::{Feature, Scenario, StateRef, Step, StepKind, Variant};
pub use test_case::{Tag, TestCase};
pub use ui_element::{
    NodeHandle, PropertyOperator, PropertyValue, ReferenceHandle, UiElement, UiProperty,
    UiPropertyKind, ValueKind,
};

use crate::base::Location;

/// A node that carries a name and a location.
///
/// Name identity is case-sensitive; use [`names_match`] wherever the
/// language compares names for a match (feature and tag references).
pub trait NamedNode {
    fn name(&self) -> &str;
    fn location(&self) -> &Location;
}

/// Case-insensitive name matching, as used for feature and tag references.
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_is_case_insensitive() {
        assert!(names_match("My Feature", "my feature"));
        assert!(!names_match("My Feature", "my other feature"));
    }
}
