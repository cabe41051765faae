use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::ast::Document;
use crate::base::normalize_path;

/// The full set of documents under analysis.
///
/// Documents are stored in insertion order; the by-path index gives O(1)
/// lookup by resolved path. The dependency graph built from a
/// specification assigns vertex indices identical to these document
/// indices.
#[derive(Clone, Debug, Default)]
pub struct Specification {
    docs: Vec<Document>,
    by_path: FxHashMap<PathBuf, usize>,
}

impl Specification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, normalizing its path. Replaces any document
    /// previously added under the same path.
    pub fn add_document(&mut self, mut doc: Document) {
        doc.path = normalize_path(&doc.path);
        match self.by_path.get(&doc.path) {
            Some(&idx) => self.docs[idx] = doc,
            None => {
                self.by_path.insert(doc.path.clone(), self.docs.len());
                self.docs.push(doc);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn documents(&self) -> &[Document] {
        &self.docs
    }

    pub fn documents_mut(&mut self) -> &mut [Document] {
        &mut self.docs
    }

    pub fn get(&self, path: &Path) -> Option<&Document> {
        self.by_path.get(path).map(|&idx| &self.docs[idx])
    }

    pub fn get_mut(&mut self, path: &Path) -> Option<&mut Document> {
        self.by_path.get(path).map(|&idx| &mut self.docs[idx])
    }

    pub fn index_of(&self, path: &Path) -> Option<usize> {
        self.by_path.get(path).copied()
    }
}
