use rustc_hash::FxHashMap;

use crate::ast::NodeHandle;

use super::Specification;

/// Specification-wide name indices, keyed by lower-cased name.
///
/// Built once, immutably, after every document is loaded and before any
/// cross-document analyzer runs. Values are index-based handles into the
/// owning [`Specification`], so holding an index never aliases document
/// data. On a duplicate name the first occurrence (document order, then
/// declaration order) wins; the duplication itself is reported by the
/// global duplicate analyzers.
#[derive(Clone, Debug, Default)]
pub struct NameIndices {
    constants: FxHashMap<String, NodeHandle>,
    tables: FxHashMap<String, NodeHandle>,
    databases: FxHashMap<String, NodeHandle>,
    ui_elements: FxHashMap<String, NodeHandle>,
    /// Feature name → document index.
    features: FxHashMap<String, usize>,
}

fn key(name: &str) -> String {
    name.to_lowercase()
}

impl NameIndices {
    pub fn build(spec: &Specification) -> Self {
        let mut indices = Self::default();
        for (doc_idx, doc) in spec.documents().iter().enumerate() {
            for (i, c) in doc.constants.iter().enumerate() {
                indices
                    .constants
                    .entry(key(&c.name))
                    .or_insert_with(|| NodeHandle::new(doc_idx, i));
            }
            for (i, t) in doc.tables.iter().enumerate() {
                indices
                    .tables
                    .entry(key(&t.name))
                    .or_insert_with(|| NodeHandle::new(doc_idx, i));
            }
            for (i, db) in doc.databases.iter().enumerate() {
                if let Some(name) = &db.name {
                    indices
                        .databases
                        .entry(key(name))
                        .or_insert_with(|| NodeHandle::new(doc_idx, i));
                }
            }
            for (i, el) in doc.ui_elements.iter().enumerate() {
                indices
                    .ui_elements
                    .entry(key(&el.name))
                    .or_insert_with(|| NodeHandle::new(doc_idx, i));
            }
            if let Some(feature) = &doc.feature {
                indices
                    .features
                    .entry(key(&feature.name))
                    .or_insert(doc_idx);
            }
        }
        indices
    }

    pub fn constant(&self, name: &str) -> Option<NodeHandle> {
        self.constants.get(&key(name)).copied()
    }

    pub fn table(&self, name: &str) -> Option<NodeHandle> {
        self.tables.get(&key(name)).copied()
    }

    pub fn database(&self, name: &str) -> Option<NodeHandle> {
        self.databases.get(&key(name)).copied()
    }

    pub fn ui_element(&self, name: &str) -> Option<NodeHandle> {
        self.ui_elements.get(&key(name)).copied()
    }

    pub fn feature_document(&self, name: &str) -> Option<usize> {
        self.features.get(&key(name)).copied()
    }
}
