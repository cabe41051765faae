use crate::ast::Document;
use crate::base::Location;
use crate::graph::SpecGraph;
use crate::report::{LocatedException, ProblemMapper};
use crate::spec::{NameIndices, Specification};

use super::SpecificationAnalyzer;

/// Before All and After All are singletons across the whole
/// specification. A second declaration anywhere yields one generic error
/// listing every declaration's location.
fn check_singleton_event(
    spec: &Specification,
    pick: impl Fn(&Document) -> Option<&Location>,
    label: &str,
    problems: &mut ProblemMapper,
) {
    let declarations: Vec<Location> = spec
        .documents()
        .iter()
        .filter_map(|doc| pick(doc).map(|location| location.clone().with_file(&doc.path)))
        .collect();

    if declarations.len() > 1 {
        let places = declarations
            .iter()
            .map(Location::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        problems.append_generic_error(LocatedException::new(
            format!("The {label} event can only be declared once, but was found in: {places}"),
            declarations[0].clone(),
        ));
    }
}

pub struct BeforeAllAnalyzer;

impl SpecificationAnalyzer for BeforeAllAnalyzer {
    fn analyze(
        &self,
        _graph: &SpecGraph,
        spec: &mut Specification,
        _indices: &NameIndices,
        problems: &mut ProblemMapper,
    ) {
        check_singleton_event(
            spec,
            |doc| doc.before_all.as_ref().map(|event| &event.location),
            "Before All",
            problems,
        );
    }
}

pub struct AfterAllAnalyzer;

impl SpecificationAnalyzer for AfterAllAnalyzer {
    fn analyze(
        &self,
        _graph: &SpecGraph,
        spec: &mut Specification,
        _indices: &NameIndices,
        problems: &mut ProblemMapper,
    ) {
        check_singleton_event(
            spec,
            |doc| doc.after_all.as_ref().map(|event| &event.location),
            "After All",
            problems,
        );
    }
}
