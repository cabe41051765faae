use std::path::{Path, PathBuf};

use crate::base::{Location, resolve_import};

use super::database::{Constant, Database, Table};
use super::feature::Feature;
use super::test_case::TestCase;
use super::ui_element::UiElement;

/// One parsed specification file.
///
/// Identified by its resolved path. All collections preserve declaration
/// order. `ui_elements` here are document-global; feature-scoped elements
/// live on the [`Feature`].
#[derive(Clone, Debug, Default)]
pub struct Document {
    pub path: PathBuf,
    pub feature: Option<Feature>,
    pub test_cases: Vec<TestCase>,
    pub ui_elements: Vec<UiElement>,
    pub constants: Vec<Constant>,
    pub tables: Vec<Table>,
    pub databases: Vec<Database>,
    pub imports: Vec<Import>,
    pub before_all: Option<EventBlock>,
    pub after_all: Option<EventBlock>,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// File name component of the document path, for cycle messages.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    /// Resolve every raw import value against this document's directory.
    /// Called once during specification assembly, before the graph is built.
    pub fn resolve_imports(&mut self) {
        let importer = self.path.clone();
        for import in &mut self.imports {
            import.resolved_path = resolve_import(&importer, &import.value);
        }
    }
}

/// An import statement: the raw value as written plus its resolved path.
#[derive(Clone, Debug, Default)]
pub struct Import {
    pub value: String,
    pub resolved_path: PathBuf,
    pub location: Location,
}

impl Import {
    pub fn new(value: impl Into<String>, location: Location) -> Self {
        Self {
            value: value.into(),
            resolved_path: PathBuf::new(),
            location,
        }
    }

    /// File name component of the resolved target.
    pub fn target_file_name(&self) -> &str {
        self.resolved_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    pub fn resolves_to(&self, path: &Path) -> bool {
        self.resolved_path == path
    }
}

/// A Before All / After All event block.
#[derive(Clone, Debug, Default)]
pub struct EventBlock {
    pub location: Location,
}
