//! Compiler driver.
//!
//! Thin glue over the analyzers: search source files, parse each into a
//! document, assemble the specification with resolved imports, build the
//! dependency graph, run the batch orchestrator and hand the diagnostics
//! to the listener. No semantic logic lives here beyond sequencing.

mod error;
mod sources;

pub use error::CompileError;
pub use sources::{
    CompileListener, DirSearcher, DocumentParser, SOURCE_EXTENSION, SourceSearcher,
};

use std::path::PathBuf;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::analysis::collaborators::{
    BracketQueryParser, ConnectionChecker, FileChecker, FsFileChecker, NoopConnectionChecker,
    QueryParser,
};
use crate::analysis::BatchSpecificationAnalyzer;
use crate::graph::SpecGraph;
use crate::report::ProblemMapper;
use crate::spec::Specification;

/// What to compile and how.
#[derive(Clone, Debug, Default)]
pub struct CompileOptions {
    pub source_dir: PathBuf,
    pub cancel: Option<CancellationToken>,
}

impl CompileOptions {
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            cancel: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

/// The outcome of one pass: the assembled model, its graph, every
/// diagnostic, and whether the pass was error-free.
pub struct Compilation {
    pub spec: Specification,
    pub graph: SpecGraph,
    pub problems: ProblemMapper,
    pub success: bool,
}

/// The driver. Collaborators default to the filesystem-backed
/// implementations; tests and embedders swap them out.
pub struct Compiler<'a> {
    parser: &'a dyn DocumentParser,
    searcher: &'a dyn SourceSearcher,
    files: &'a dyn FileChecker,
    connections: &'a dyn ConnectionChecker,
    queries: &'a dyn QueryParser,
}

impl<'a> Compiler<'a> {
    pub fn new(parser: &'a dyn DocumentParser) -> Self {
        Self {
            parser,
            searcher: &DirSearcher,
            files: &FsFileChecker,
            connections: &NoopConnectionChecker,
            queries: &BracketQueryParser,
        }
    }

    pub fn with_searcher(mut self, searcher: &'a dyn SourceSearcher) -> Self {
        self.searcher = searcher;
        self
    }

    pub fn with_file_checker(mut self, files: &'a dyn FileChecker) -> Self {
        self.files = files;
        self
    }

    pub fn with_connection_checker(mut self, connections: &'a dyn ConnectionChecker) -> Self {
        self.connections = connections;
        self
    }

    pub fn with_query_parser(mut self, queries: &'a dyn QueryParser) -> Self {
        self.queries = queries;
        self
    }

    /// Search, parse, assemble, analyze. Fatal failures abort with
    /// `Err`; semantic violations land in the returned problems.
    pub fn compile(
        &self,
        options: &CompileOptions,
        listener: &mut dyn CompileListener,
    ) -> Result<Compilation, CompileError> {
        let paths = self.searcher.search(&options.source_dir)?;
        debug!("compiling {} documents from {}", paths.len(), options.source_dir.display());

        let mut spec = Specification::new();
        for path in paths {
            let mut doc = self.parser.parse(&path)?;
            doc.resolve_imports();
            spec.add_document(doc);
        }

        let graph = SpecGraph::build(&spec);

        let mut batch =
            BatchSpecificationAnalyzer::new(self.files, self.connections, self.queries);
        if let Some(token) = &options.cancel {
            batch = batch.with_cancellation(token.clone());
        }
        let mut problems = ProblemMapper::new();
        let success = batch.analyze(&graph, &mut spec, &mut problems);

        listener.on_problems(&problems);
        Ok(Compilation {
            spec,
            graph,
            problems,
            success,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::collaborators::AssumeExisting;
    use crate::ast::{Document, Feature, Import};
    use crate::base::Location;
    use std::fs;
    use std::path::Path;

    /// Produces canned documents keyed by file name.
    struct StubParser;

    impl DocumentParser for StubParser {
        fn parse(&self, path: &Path) -> Result<Document, CompileError> {
            let mut doc = Document::new(path);
            match doc.file_name() {
                "feature.litmus" => {
                    doc.feature = Some(Feature::new("Stub", Location::new(1, 1)));
                }
                "importer.litmus" => {
                    doc.imports
                        .push(Import::new("feature.litmus", Location::new(1, 1)));
                }
                _ => {}
            }
            Ok(doc)
        }
    }

    #[derive(Default)]
    struct RecordingListener {
        notified: bool,
        errors: usize,
    }

    impl CompileListener for RecordingListener {
        fn on_problems(&mut self, problems: &ProblemMapper) {
            self.notified = true;
            self.errors = problems.error_count();
        }
    }

    #[test]
    fn test_compile_assembles_spec_and_graph() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("feature.litmus"), "").unwrap();
        fs::write(dir.path().join("importer.litmus"), "").unwrap();

        let compiler = Compiler::new(&StubParser).with_file_checker(&AssumeExisting);
        let mut listener = RecordingListener::default();
        let compilation = compiler
            .compile(&CompileOptions::new(dir.path()), &mut listener)
            .unwrap();

        assert!(compilation.success);
        assert!(listener.notified);
        assert_eq!(listener.errors, 0);
        assert_eq!(compilation.spec.len(), 2);
        assert_eq!(compilation.graph.vertex_count(), 2);
        assert_eq!(compilation.graph.edge_count(), 1);
    }

    #[test]
    fn test_missing_source_dir_is_fatal() {
        let compiler = Compiler::new(&StubParser);
        let mut listener = RecordingListener::default();
        let result = compiler.compile(
            &CompileOptions::new("/no/such/dir"),
            &mut listener,
        );
        assert!(matches!(result, Err(CompileError::SourceDirNotFound(_))));
        assert!(!listener.notified);
    }
}
