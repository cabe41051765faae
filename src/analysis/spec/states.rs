use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::trace;

use crate::ast::{Document, StateRef, Variant};
use crate::graph::SpecGraph;
use crate::report::{LocatedException, ProblemMapper};
use crate::spec::{NameIndices, Specification};

use super::SpecificationAnalyzer;

/// Verifies that every state a variant requires (preconditions and state
/// calls) is produced somewhere the document can see: by the document
/// itself or by any document reachable through its imports.
///
/// Runs in two phases. Phase one collects the produced-state sets of all
/// documents in parallel; phase two walks documents in dependency-first
/// order and checks requirements against the union of own and reachable
/// sets. Unresolved references are marked `not_found` in place and
/// reported once each.
pub struct StateAnalyzer;

fn produced_states(doc: &Document) -> FxHashSet<String> {
    let mut states = FxHashSet::default();
    if let Some(feature) = &doc.feature {
        for scenario in &feature.scenarios {
            for variant in &scenario.variants {
                for state in &variant.postconditions {
                    states.insert(state.name.to_lowercase());
                }
            }
        }
    }
    states
}

fn check_requirements(
    variant: &mut Variant,
    visible: &dyn Fn(&str) -> bool,
    errors: &mut Vec<LocatedException>,
) {
    let mut check = |state: &mut StateRef| {
        if !visible(&state.name.to_lowercase()) {
            state.not_found = true;
            errors.push(LocatedException::new(
                format!("State not found: \"{}\"", state.name),
                state.location.clone(),
            ));
        }
    };
    for state in &mut variant.preconditions {
        check(state);
    }
    for state in &mut variant.state_calls {
        check(state);
    }
}

impl SpecificationAnalyzer for StateAnalyzer {
    fn analyze(
        &self,
        graph: &SpecGraph,
        spec: &mut Specification,
        _indices: &NameIndices,
        problems: &mut ProblemMapper,
    ) {
        let produced: Vec<FxHashSet<String>> = spec
            .documents()
            .par_iter()
            .map(produced_states)
            .collect();
        trace!(
            "collected produced-state sets for {} documents",
            produced.len()
        );

        for idx in graph.scc_order() {
            let reachable = graph.reachable_from(idx);
            let visible = |name: &str| {
                produced[idx].contains(name)
                    || reachable.iter().any(|&dep| produced[dep].contains(name))
            };

            let doc = &mut spec.documents_mut()[idx];
            let path = doc.path.clone();
            let mut errors = Vec::new();
            if let Some(feature) = &mut doc.feature {
                for scenario in &mut feature.scenarios {
                    for variant in &mut scenario.variants {
                        check_requirements(variant, &visible, &mut errors);
                    }
                }
            }
            for error in errors {
                problems.append_document_error(&path, error);
            }
        }
    }
}
