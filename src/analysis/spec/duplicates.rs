//! Specification-wide duplicate-name rules.
//!
//! Each kind (constants, tables, databases, features, global UI
//! elements) has a flat namespace across the whole specification; the
//! nodes are collected with their document paths attached so the
//! resulting generic errors list cross-file locations.

use smol_str::SmolStr;

use crate::ast::NamedNode;
use crate::base::Location;
use crate::graph::SpecGraph;
use crate::report::duplication::check_duplicated_named_nodes;
use crate::report::ProblemMapper;
use crate::spec::{NameIndices, Specification};

use super::SpecificationAnalyzer;

/// A name + file-qualified location pair lifted out of a document.
struct CollectedNode {
    name: SmolStr,
    location: Location,
}

impl NamedNode for CollectedNode {
    fn name(&self) -> &str {
        &self.name
    }
    fn location(&self) -> &Location {
        &self.location
    }
}

fn check_collected(nodes: Vec<CollectedNode>, label: &str, problems: &mut ProblemMapper) {
    let refs: Vec<&CollectedNode> = nodes.iter().collect();
    let mut errors = Vec::new();
    check_duplicated_named_nodes(&refs, &mut errors, label);
    for error in errors {
        problems.append_generic_error(error);
    }
}

fn collect<'a, N, I>(spec: &'a Specification, per_doc: impl Fn(&'a crate::ast::Document) -> I) -> Vec<CollectedNode>
where
    N: NamedNode + 'a,
    I: Iterator<Item = &'a N>,
{
    let mut nodes = Vec::new();
    for doc in spec.documents() {
        for node in per_doc(doc) {
            nodes.push(CollectedNode {
                name: SmolStr::new(node.name()),
                location: node.location().clone().with_file(&doc.path),
            });
        }
    }
    nodes
}

macro_rules! duplication_analyzer {
    ($analyzer:ident, $label:literal, $spec:ident => $iter:expr) => {
        pub struct $analyzer;

        impl SpecificationAnalyzer for $analyzer {
            fn analyze(
                &self,
                _graph: &SpecGraph,
                $spec: &mut Specification,
                _indices: &NameIndices,
                problems: &mut ProblemMapper,
            ) {
                check_collected($iter, $label, problems);
            }
        }
    };
}

duplication_analyzer!(ConstantDuplicationAnalyzer, "constant",
    spec => collect(spec, |doc| doc.constants.iter()));
duplication_analyzer!(TableDuplicationAnalyzer, "table",
    spec => collect(spec, |doc| doc.tables.iter()));
duplication_analyzer!(UiElementDuplicationAnalyzer, "global UI element",
    spec => collect(spec, |doc| doc.ui_elements.iter()));
duplication_analyzer!(FeatureDuplicationAnalyzer, "feature",
    spec => collect(spec, |doc| doc.feature.iter()));

/// Databases are only name-checked when they have a name; path-only
/// blocks cannot collide.
pub struct DatabaseDuplicationAnalyzer;

impl SpecificationAnalyzer for DatabaseDuplicationAnalyzer {
    fn analyze(
        &self,
        _graph: &SpecGraph,
        spec: &mut Specification,
        _indices: &NameIndices,
        problems: &mut ProblemMapper,
    ) {
        let mut nodes = Vec::new();
        for doc in spec.documents() {
            for db in &doc.databases {
                if let Some(name) = &db.name {
                    nodes.push(CollectedNode {
                        name: name.clone(),
                        location: db.location.clone().with_file(&doc.path),
                    });
                }
            }
        }
        check_collected(nodes, "database", problems);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Constant, Document, Feature};

    #[test]
    fn test_cross_file_duplicate_constant() {
        let mut doc_a = Document::new("/specs/a.litmus");
        doc_a
            .constants
            .push(Constant::new("pi", "3.14", Location::new(1, 1)));
        let mut doc_b = Document::new("/specs/b.litmus");
        doc_b
            .constants
            .push(Constant::new("pi", "3.1416", Location::new(7, 1)));

        let mut spec = Specification::new();
        spec.add_document(doc_a);
        spec.add_document(doc_b);
        let graph = SpecGraph::build(&spec);
        let indices = NameIndices::build(&spec);

        let mut problems = ProblemMapper::new();
        ConstantDuplicationAnalyzer.analyze(&graph, &mut spec, &indices, &mut problems);

        let errors = problems.generic_errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Duplicated constant \"pi\""));
        assert!(errors[0].message.contains("/specs/a.litmus"));
        assert!(errors[0].message.contains("/specs/b.litmus"));
    }

    #[test]
    fn test_duplicate_feature_names_across_documents() {
        let mut doc_a = Document::new("/specs/a.litmus");
        doc_a.feature = Some(Feature::new("Login", Location::new(1, 1)));
        let mut doc_b = Document::new("/specs/b.litmus");
        doc_b.feature = Some(Feature::new("Login", Location::new(1, 1)));

        let mut spec = Specification::new();
        spec.add_document(doc_a);
        spec.add_document(doc_b);
        let graph = SpecGraph::build(&spec);
        let indices = NameIndices::build(&spec);

        let mut problems = ProblemMapper::new();
        FeatureDuplicationAnalyzer.analyze(&graph, &mut spec, &indices, &mut problems);
        assert_eq!(problems.generic_errors().len(), 1);
    }

    #[test]
    fn test_unique_names_pass() {
        let mut doc = Document::new("/specs/a.litmus");
        doc.constants
            .push(Constant::new("pi", "3.14", Location::new(1, 1)));
        doc.constants
            .push(Constant::new("e", "2.71", Location::new(2, 1)));

        let mut spec = Specification::new();
        spec.add_document(doc);
        let graph = SpecGraph::build(&spec);
        let indices = NameIndices::build(&spec);

        let mut problems = ProblemMapper::new();
        ConstantDuplicationAnalyzer.analyze(&graph, &mut spec, &indices, &mut problems);
        assert!(problems.is_empty());
    }
}
