use std::path::Path;

use crate::base::Location;
use crate::graph::SpecGraph;
use crate::report::{LocatedException, ProblemMapper};
use crate::spec::{NameIndices, Specification};

use super::SpecificationAnalyzer;

/// Reports every elementary import cycle, filed under the first document
/// of the cycle.
///
/// The erroring import statement is found by scanning the *second*
/// document of the cycle for an import whose target file name matches
/// the first document's file name; `(1,1)` when no such import exists.
pub struct ImportCycleAnalyzer;

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
}

impl SpecificationAnalyzer for ImportCycleAnalyzer {
    fn analyze(
        &self,
        graph: &SpecGraph,
        spec: &mut Specification,
        _indices: &NameIndices,
        problems: &mut ProblemMapper,
    ) {
        for cycle in graph.cycles() {
            let first = &cycle[0];
            let second = &cycle[1 % cycle.len()];

            let location = spec
                .get(second)
                .and_then(|doc| {
                    doc.imports
                        .iter()
                        .find(|imp| imp.target_file_name() == file_name(first))
                })
                .map(|imp| imp.location.clone())
                .unwrap_or_else(|| Location::new(1, 1));

            let chain = cycle
                .iter()
                .chain(std::iter::once(first))
                .map(|p| format!("\"{}\"", p.display()))
                .collect::<Vec<_>>()
                .join(" => ");

            problems.append_document_error(
                first,
                LocatedException::new(format!("Cyclic import: {chain}"), location),
            );
        }
    }
}
