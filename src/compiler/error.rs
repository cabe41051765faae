use std::path::PathBuf;

use thiserror::Error;

/// Fatal compilation failures.
///
/// Everything semantic is a diagnostic in the [`crate::report::ProblemMapper`];
/// these are the conditions that abort a pass instead: collaborator I/O
/// and parse failures, and driver bugs.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("source directory not found: {0}")]
    SourceDirNotFound(PathBuf),

    #[error("internal error: {0}")]
    Internal(String),
}
