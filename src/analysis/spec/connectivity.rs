use tracing::debug;

use crate::analysis::collaborators::ConnectionChecker;
use crate::graph::SpecGraph;
use crate::report::{LocatedException, ProblemMapper};
use crate::spec::{NameIndices, Specification};

use super::SpecificationAnalyzer;

/// Attempts a connection for every declared database through the
/// injected checker. Failures are appended as additional errors and
/// never block other checks.
pub struct DatabaseConnectivityAnalyzer<'a> {
    checker: &'a dyn ConnectionChecker,
}

impl<'a> DatabaseConnectivityAnalyzer<'a> {
    pub fn new(checker: &'a dyn ConnectionChecker) -> Self {
        Self { checker }
    }
}

impl SpecificationAnalyzer for DatabaseConnectivityAnalyzer<'_> {
    fn analyze(
        &self,
        _graph: &SpecGraph,
        spec: &mut Specification,
        _indices: &NameIndices,
        problems: &mut ProblemMapper,
    ) {
        for doc in spec.documents() {
            for db in &doc.databases {
                if let Err(reason) = self.checker.check(db) {
                    debug!(
                        "connection check failed for database \"{}\": {reason}",
                        db.display_name()
                    );
                    problems.append_document_error(
                        &doc.path,
                        LocatedException::new(
                            format!(
                                "Could not connect to the database \"{}\": {reason}",
                                db.display_name()
                            ),
                            db.location.clone(),
                        ),
                    );
                }
            }
        }
    }
}
