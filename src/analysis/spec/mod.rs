//! Cross-document analyzers.
//!
//! These operate over the full dependency graph and specification; the
//! state analyzer additionally relies on dependency-first traversal.
//! All of them file diagnostics and keep going; a failed rule never
//! blocks the rest.

mod connectivity;
mod cycle;
mod duplicates;
mod events;
mod references;
mod states;
mod test_binding;

pub use connectivity::DatabaseConnectivityAnalyzer;
pub use cycle::ImportCycleAnalyzer;
pub use duplicates::{
    ConstantDuplicationAnalyzer, DatabaseDuplicationAnalyzer, FeatureDuplicationAnalyzer,
    TableDuplicationAnalyzer, UiElementDuplicationAnalyzer,
};
pub use events::{AfterAllAnalyzer, BeforeAllAnalyzer};
pub use references::PropertyReferenceAnalyzer;
pub use states::StateAnalyzer;
pub use test_binding::TestCaseBindingAnalyzer;

use crate::graph::SpecGraph;
use crate::report::ProblemMapper;
use crate::spec::{NameIndices, Specification};

/// A rule over the whole specification.
pub trait SpecificationAnalyzer: Sync {
    fn analyze(
        &self,
        graph: &SpecGraph,
        spec: &mut Specification,
        indices: &NameIndices,
        problems: &mut ProblemMapper,
    );
}
