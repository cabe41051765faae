use crate::ast::{DatabasePropertyKind, Document};
use crate::report::{LocatedException, Problems};

use super::DocumentAnalyzer;

/// Database block validity: a block needs at least one property, a
/// `type` property, and either a name or a `path` property. Each absence
/// is a distinct error.
pub struct DatabaseAnalyzer;

impl DocumentAnalyzer for DatabaseAnalyzer {
    fn analyze(&self, doc: &mut Document, problems: &mut Problems) {
        for db in &doc.databases {
            if db.properties.is_empty() {
                problems.errors.push(LocatedException::new(
                    format!("Database \"{}\" has no properties", db.display_name()),
                    db.location.clone(),
                ));
            }
            if db.property_of_kind(DatabasePropertyKind::Type).is_none() {
                problems.errors.push(LocatedException::new(
                    format!(
                        "Database \"{}\" is missing a property \"type\"",
                        db.display_name()
                    ),
                    db.location.clone(),
                ));
            }
            if db.name.is_none() && db.property_of_kind(DatabasePropertyKind::Path).is_none() {
                problems.errors.push(LocatedException::new(
                    "Database is missing a name or a property \"path\"".to_string(),
                    db.location.clone(),
                ));
            }
        }
    }
}
