use std::fmt;
use std::path::{Path, PathBuf};

/// A position in a specification document.
///
/// Lines and columns are 1-indexed, matching what the external parser
/// reports. `file_path` is only set when the location travels outside its
/// own document (e.g. specification-wide duplicate listings).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Location {
    pub line: u32,
    pub column: u32,
    pub file_path: Option<PathBuf>,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Self {
            line,
            column,
            file_path: None,
        }
    }

    /// Attach a file path, keeping an already-present one.
    pub fn with_file(mut self, path: &Path) -> Self {
        if self.file_path.is_none() {
            self.file_path = Some(path.to_path_buf());
        }
        self
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.line, self.column)?;
        if let Some(path) = &self.file_path {
            write!(f, " {}", path.display())?;
        }
        Ok(())
    }
}
