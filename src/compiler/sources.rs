use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use crate::ast::Document;
use crate::report::ProblemMapper;

use super::CompileError;

/// File extension of Litmus documents.
pub const SOURCE_EXTENSION: &str = "litmus";

/// Finds the source files of a compilation.
pub trait SourceSearcher {
    fn search(&self, dir: &Path) -> Result<Vec<PathBuf>, CompileError>;
}

/// Parses one source file into a document.
pub trait DocumentParser {
    fn parse(&self, path: &Path) -> Result<Document, CompileError>;
}

/// Receives the collected diagnostics at the end of a pass.
pub trait CompileListener {
    fn on_problems(&mut self, problems: &ProblemMapper);
}

/// Recursive directory search for `.litmus` files, in sorted order so a
/// compilation is deterministic across platforms.
pub struct DirSearcher;

impl SourceSearcher for DirSearcher {
    fn search(&self, dir: &Path) -> Result<Vec<PathBuf>, CompileError> {
        if !dir.is_dir() {
            return Err(CompileError::SourceDirNotFound(dir.to_path_buf()));
        }
        let mut paths = Vec::new();
        for entry in WalkDir::new(dir) {
            let entry = entry.map_err(|e| {
                CompileError::Io(e.into_io_error().unwrap_or_else(|| {
                    std::io::Error::other("walkdir loop detected")
                }))
            })?;
            let path = entry.path();
            if entry.file_type().is_file()
                && path.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION)
            {
                paths.push(path.to_path_buf());
            }
        }
        paths.sort();
        trace!("found {} source files under {}", paths.len(), dir.display());
        Ok(paths)
    }
}
