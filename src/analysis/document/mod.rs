//! Per-document analyzers.
//!
//! Each analyzer sees exactly one document and a private diagnostics
//! bucket, no graph and no specification, so the set is safe to run
//! concurrently across documents (pure fan-out/fan-in). Every analyzer
//! always runs; none short-circuits.

mod database;
mod import;
mod scenario;
mod step_order;
mod ui_element;

pub use database::DatabaseAnalyzer;
pub use import::ImportAnalyzer;
pub use scenario::ScenarioAnalyzer;
pub use step_order::StepOrderAnalyzer;
pub use ui_element::UiElementAnalyzer;

use crate::ast::Document;
use crate::report::Problems;

use super::collaborators::FileChecker;

/// A structural rule over one document.
pub trait DocumentAnalyzer: Sync {
    fn analyze(&self, doc: &mut Document, problems: &mut Problems);
}

/// The statically ordered per-document analyzer set.
pub struct DocumentAnalysis<'a> {
    analyzers: Vec<Box<dyn DocumentAnalyzer + 'a>>,
}

impl<'a> DocumentAnalysis<'a> {
    pub fn new(files: &'a dyn FileChecker) -> Self {
        Self {
            analyzers: vec![
                Box::new(ImportAnalyzer::new(files)),
                Box::new(ScenarioAnalyzer),
                Box::new(DatabaseAnalyzer),
                Box::new(UiElementAnalyzer),
                Box::new(StepOrderAnalyzer),
            ],
        }
    }

    /// Run every analyzer against one document, merging their errors
    /// into the given bucket.
    pub fn run(&self, doc: &mut Document, problems: &mut Problems) {
        for analyzer in &self.analyzers {
            analyzer.analyze(doc, problems);
        }
    }
}
