use std::path::PathBuf;

use rayon::prelude::*;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::graph::SpecGraph;
use crate::report::{ProblemKey, ProblemMapper, Problems};
use crate::spec::{NameIndices, Specification};

use super::collaborators::{ConnectionChecker, FileChecker, QueryParser};
use super::document::DocumentAnalysis;
use super::spec::{
    AfterAllAnalyzer, BeforeAllAnalyzer, ConstantDuplicationAnalyzer,
    DatabaseConnectivityAnalyzer, DatabaseDuplicationAnalyzer, FeatureDuplicationAnalyzer,
    ImportCycleAnalyzer, PropertyReferenceAnalyzer, SpecificationAnalyzer, StateAnalyzer,
    TableDuplicationAnalyzer, TestCaseBindingAnalyzer, UiElementDuplicationAnalyzer,
};

/// Fixed-order orchestration of the whole analyzer battery.
///
/// Per-document analyzers fan out first, one task per document with a
/// private diagnostics bucket, merged afterward. Cross-document
/// analyzers then run sequentially: cycles, global duplicates,
/// connectivity, references, states, test-case binding, singleton
/// events. Nothing short-circuits; an optional cancellation token is
/// honored between invocations.
pub struct BatchSpecificationAnalyzer<'a> {
    files: &'a dyn FileChecker,
    connections: &'a dyn ConnectionChecker,
    queries: &'a dyn QueryParser,
    cancel: Option<CancellationToken>,
}

impl<'a> BatchSpecificationAnalyzer<'a> {
    pub fn new(
        files: &'a dyn FileChecker,
        connections: &'a dyn ConnectionChecker,
        queries: &'a dyn QueryParser,
    ) -> Self {
        Self {
            files,
            connections,
            queries,
            cancel: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancellationToken::is_cancelled)
    }

    /// Run every analyzer. Returns true iff none of them appended an
    /// error. Problems collected before a cancellation are kept.
    pub fn analyze(
        &self,
        graph: &SpecGraph,
        spec: &mut Specification,
        problems: &mut ProblemMapper,
    ) -> bool {
        let before = problems.error_count();

        if !self.is_cancelled() {
            let analysis = DocumentAnalysis::new(self.files);
            let buckets: Vec<(PathBuf, Problems)> = spec
                .documents_mut()
                .par_iter_mut()
                .map(|doc| {
                    let mut bucket = Problems::default();
                    analysis.run(doc, &mut bucket);
                    (doc.path.clone(), bucket)
                })
                .collect();
            trace!("per-document analysis finished for {} documents", buckets.len());
            for (path, bucket) in buckets {
                problems.merge(ProblemKey::Document(path), bucket);
            }
        }

        let indices = NameIndices::build(spec);
        let analyzers: Vec<Box<dyn SpecificationAnalyzer + '_>> = vec![
            Box::new(ImportCycleAnalyzer),
            Box::new(ConstantDuplicationAnalyzer),
            Box::new(TableDuplicationAnalyzer),
            Box::new(DatabaseDuplicationAnalyzer),
            Box::new(UiElementDuplicationAnalyzer),
            Box::new(FeatureDuplicationAnalyzer),
            Box::new(DatabaseConnectivityAnalyzer::new(self.connections)),
            Box::new(PropertyReferenceAnalyzer::new(self.queries)),
            Box::new(StateAnalyzer),
            Box::new(TestCaseBindingAnalyzer),
            Box::new(BeforeAllAnalyzer),
            Box::new(AfterAllAnalyzer),
        ];
        for analyzer in &analyzers {
            if self.is_cancelled() {
                debug!("analysis cancelled, keeping problems collected so far");
                break;
            }
            analyzer.analyze(graph, spec, &indices, problems);
        }

        problems.error_count() == before
    }
}
