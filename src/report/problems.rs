use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::base::Location;

/// A diagnostic message with an optional location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocatedException {
    pub message: String,
    pub location: Option<Location>,
}

impl LocatedException {
    pub fn new(message: impl Into<String>, location: Location) -> Self {
        Self {
            message: message.into(),
            location: Some(location),
        }
    }

    pub fn unlocated(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
        }
    }
}

impl fmt::Display for LocatedException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(loc) => write!(f, "{} {}", loc, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Diagnostics bucket for one key.
#[derive(Clone, Debug, Default)]
pub struct Problems {
    pub errors: Vec<LocatedException>,
    pub warnings: Vec<LocatedException>,
}

impl Problems {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Errors and warnings in presentation order: located items by
    /// `(line, column)`, then unlocated errors, then unlocated warnings.
    pub fn sorted(&self) -> Vec<&LocatedException> {
        let mut located: Vec<&LocatedException> = self
            .errors
            .iter()
            .chain(self.warnings.iter())
            .filter(|e| e.location.is_some())
            .collect();
        located.sort_by_key(|e| {
            let loc = e.location.as_ref().expect("filtered to located items");
            (loc.line, loc.column)
        });
        located.extend(self.errors.iter().filter(|e| e.location.is_none()));
        located.extend(self.warnings.iter().filter(|e| e.location.is_none()));
        located
    }
}

/// Key of a diagnostics bucket: a resolved document path, or the reserved
/// generic key for specification-wide diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProblemKey {
    Generic,
    Document(PathBuf),
}

/// Diagnostics sink for one analysis pass.
#[derive(Clone, Debug, Default)]
pub struct ProblemMapper {
    buckets: IndexMap<ProblemKey, Problems>,
}

impl ProblemMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_error(&mut self, key: ProblemKey, error: LocatedException) {
        self.buckets.entry(key).or_default().errors.push(error);
    }

    pub fn append_warning(&mut self, key: ProblemKey, warning: LocatedException) {
        self.buckets.entry(key).or_default().warnings.push(warning);
    }

    pub fn append_document_error(&mut self, path: &Path, error: LocatedException) {
        self.append_error(ProblemKey::Document(path.to_path_buf()), error);
    }

    pub fn append_generic_error(&mut self, error: LocatedException) {
        self.append_error(ProblemKey::Generic, error);
    }

    /// Merge a privately-collected bucket (fan-in after parallel
    /// per-document analysis).
    pub fn merge(&mut self, key: ProblemKey, mut problems: Problems) {
        if problems.is_empty() {
            return;
        }
        let bucket = self.buckets.entry(key).or_default();
        bucket.errors.append(&mut problems.errors);
        bucket.warnings.append(&mut problems.warnings);
    }

    pub fn get(&self, key: &ProblemKey) -> Option<&Problems> {
        self.buckets.get(key)
    }

    pub fn errors_for(&self, path: &Path) -> &[LocatedException] {
        self.buckets
            .get(&ProblemKey::Document(path.to_path_buf()))
            .map(|p| p.errors.as_slice())
            .unwrap_or_default()
    }

    pub fn generic_errors(&self) -> &[LocatedException] {
        self.buckets
            .get(&ProblemKey::Generic)
            .map(|p| p.errors.as_slice())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProblemKey, &Problems)> {
        self.buckets.iter()
    }

    pub fn error_count(&self) -> usize {
        self.buckets.values().map(|p| p.errors.len()).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.buckets.values().map(|p| p.warnings.len()).sum()
    }

    pub fn has_errors(&self) -> bool {
        self.buckets.values().any(|p| !p.errors.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(Problems::is_empty)
    }

    /// All error messages, for assertions and logs.
    pub fn all_error_messages(&self) -> Vec<&str> {
        self.buckets
            .values()
            .flat_map(|p| p.errors.iter().map(|e| e.message.as_str()))
            .collect()
    }
}
