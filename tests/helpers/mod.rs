//! Shared builders for integration tests.

#![allow(dead_code)]

use litmus::analysis::{
    AssumeExisting, BatchSpecificationAnalyzer, BracketQueryParser, NoopConnectionChecker,
};
use litmus::ast::{Document, Feature, Import, Scenario, TestCase, Variant};
use litmus::base::Location;
use litmus::graph::SpecGraph;
use litmus::report::ProblemMapper;
use litmus::spec::Specification;

/// A document importing each target, with imports resolved.
pub fn importing(path: &str, targets: &[&str]) -> Document {
    let mut doc = Document::new(path);
    for (i, target) in targets.iter().enumerate() {
        doc.imports
            .push(Import::new(*target, Location::new(i as u32 + 1, 1)));
    }
    doc.resolve_imports();
    doc
}

/// A feature with one scenario per entry, each holding that many variants.
pub fn feature(name: &str, scenario_variants: &[usize]) -> Feature {
    let mut feature = Feature::new(name, Location::new(1, 1));
    for (i, &variants) in scenario_variants.iter().enumerate() {
        let mut scenario = Scenario::new(format!("Scenario {i}"), Location::new(i as u32 + 2, 1));
        for v in 0..variants {
            scenario
                .variants
                .push(Variant::new(format!("Variant {v}"), Location::new(10, 1)));
        }
        feature.scenarios.push(scenario);
    }
    feature
}

pub fn test_case(name: &str, line: u32) -> TestCase {
    TestCase::new(name, Location::new(line, 1))
}

pub fn build_spec(docs: Vec<Document>) -> Specification {
    let mut spec = Specification::new();
    for doc in docs {
        spec.add_document(doc);
    }
    spec
}

/// Run the full analyzer battery with in-memory collaborators.
pub fn analyze(spec: &mut Specification) -> (bool, ProblemMapper) {
    let graph = SpecGraph::build(spec);
    let mut problems = ProblemMapper::new();
    let success = BatchSpecificationAnalyzer::new(
        &AssumeExisting,
        &NoopConnectionChecker,
        &BracketQueryParser,
    )
    .analyze(&graph, spec, &mut problems);
    (success, problems)
}
