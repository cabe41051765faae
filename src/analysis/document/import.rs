use crate::ast::Document;
use crate::report::duplication::with_duplicated_property;
use crate::report::{LocatedException, Problems};

use super::DocumentAnalyzer;
use crate::analysis::collaborators::FileChecker;

/// Import well-formedness: duplicated targets, self-references, missing
/// files. All violations are reported; none stops the scan.
pub struct ImportAnalyzer<'a> {
    files: &'a dyn FileChecker,
}

impl<'a> ImportAnalyzer<'a> {
    pub fn new(files: &'a dyn FileChecker) -> Self {
        Self { files }
    }
}

impl DocumentAnalyzer for ImportAnalyzer<'_> {
    fn analyze(&self, doc: &mut Document, problems: &mut Problems) {
        for import in with_duplicated_property(&doc.imports, |i| i.resolved_path.clone()) {
            problems.errors.push(LocatedException::new(
                format!("Duplicated imported file \"{}\"", import.value),
                import.location.clone(),
            ));
        }

        for import in &doc.imports {
            if import.resolves_to(&doc.path) {
                problems.errors.push(LocatedException::new(
                    format!("Imported file is a self reference: \"{}\"", import.value),
                    import.location.clone(),
                ));
            }
            if !self.files.exists(&import.resolved_path) {
                problems.errors.push(LocatedException::new(
                    format!("Imported file not found: \"{}\"", import.value),
                    import.location.clone(),
                ));
            }
        }
    }
}
