use crate::ast::{Document, Scenario};
use crate::report::duplication::check_duplicated_named_nodes;
use crate::report::Problems;

use super::DocumentAnalyzer;

/// Duplicate scenario names within a document's feature.
pub struct ScenarioAnalyzer;

impl DocumentAnalyzer for ScenarioAnalyzer {
    fn analyze(&self, doc: &mut Document, problems: &mut Problems) {
        if let Some(feature) = &doc.feature {
            let scenarios: Vec<&Scenario> = feature.scenarios.iter().collect();
            check_duplicated_named_nodes(&scenarios, &mut problems.errors, "scenario");
        }
    }
}
