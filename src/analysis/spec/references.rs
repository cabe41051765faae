use std::path::Path;

use crate::analysis::collaborators::QueryParser;
use crate::ast::{ReferenceHandle, UiElement, ValueKind};
use crate::graph::SpecGraph;
use crate::report::{LocatedException, ProblemMapper};
use crate::spec::{NameIndices, Specification};

use super::SpecificationAnalyzer;

/// Resolves UI element property values of kind `Constant`,
/// `UiElementRef` and `Query` against the specification-wide name
/// indices.
///
/// Query values are first decomposed by the injected parser into bare
/// names (candidate constants, tables or databases) and variable
/// references (candidate UI elements). Every unresolved symbol is one
/// error at the owning property; resolved symbols are recorded on the
/// property as reference handles, consumed downstream by generation.
pub struct PropertyReferenceAnalyzer<'a> {
    queries: &'a dyn QueryParser,
}

impl<'a> PropertyReferenceAnalyzer<'a> {
    pub fn new(queries: &'a dyn QueryParser) -> Self {
        Self { queries }
    }
}

impl SpecificationAnalyzer for PropertyReferenceAnalyzer<'_> {
    fn analyze(
        &self,
        _graph: &SpecGraph,
        spec: &mut Specification,
        indices: &NameIndices,
        problems: &mut ProblemMapper,
    ) {
        for doc in spec.documents_mut() {
            let path = doc.path.clone();
            let mut errors = Vec::new();

            for element in &mut doc.ui_elements {
                resolve_element(element, indices, self.queries, &path, &mut errors);
            }
            if let Some(feature) = &mut doc.feature {
                for element in &mut feature.ui_elements {
                    resolve_element(element, indices, self.queries, &path, &mut errors);
                }
            }

            for error in errors {
                problems.append_document_error(&path, error);
            }
        }
    }
}

fn resolve_element(
    element: &mut UiElement,
    indices: &NameIndices,
    queries: &dyn QueryParser,
    path: &Path,
    errors: &mut Vec<LocatedException>,
) {
    for property in &mut element.properties {
        let raw = property.value.raw.clone();
        let located = |message: String, property_location: &crate::base::Location| {
            LocatedException::new(message, property_location.clone().with_file(path))
        };

        match property.value.kind {
            ValueKind::Constant => match indices.constant(&raw) {
                Some(handle) => property.references.push(ReferenceHandle::Constant(handle)),
                None => errors.push(located(
                    format!("Referenced constant not found: \"{raw}\""),
                    &property.location,
                )),
            },
            ValueKind::UiElementRef => match indices.ui_element(&raw) {
                Some(handle) => property.references.push(ReferenceHandle::UiElement(handle)),
                None => errors.push(located(
                    format!("Referenced UI element not found: \"{raw}\""),
                    &property.location,
                )),
            },
            ValueKind::Query => {
                for name in queries.parse_names(&raw) {
                    if let Some(handle) = indices.constant(&name) {
                        property.references.push(ReferenceHandle::Constant(handle));
                    } else if let Some(handle) = indices.table(&name) {
                        property.references.push(ReferenceHandle::Table(handle));
                    } else if let Some(handle) = indices.database(&name) {
                        property.references.push(ReferenceHandle::Database(handle));
                    } else {
                        errors.push(located(
                            format!(
                                "Query references a non-existent constant, table or database: \"{name}\""
                            ),
                            &property.location,
                        ));
                    }
                }
                for variable in queries.parse_variables(&raw) {
                    match indices.ui_element(&variable) {
                        Some(handle) => {
                            property.references.push(ReferenceHandle::UiElement(handle));
                        }
                        None => errors.push(located(
                            format!("Query references a non-existent UI element: \"{variable}\""),
                            &property.location,
                        )),
                    }
                }
            }
            ValueKind::Literal | ValueKind::List => {}
        }
    }
}
