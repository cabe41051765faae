use indexmap::IndexMap;

use crate::ast::{Document, PropertyOperator, UiElement, UiProperty, UiPropertyKind};
use crate::report::duplication::check_duplicated_named_nodes;
use crate::report::{LocatedException, Problems};

use super::DocumentAnalyzer;

/// UI element well-formedness.
///
/// Reports duplicate names among feature-scoped and, separately,
/// document-global elements; per element, declaration-count limits,
/// incompatible property combinations and incompatible operator pairs.
/// Every violation message enumerates each offending declaration's
/// location.
pub struct UiElementAnalyzer;

impl DocumentAnalyzer for UiElementAnalyzer {
    fn analyze(&self, doc: &mut Document, problems: &mut Problems) {
        if let Some(feature) = &doc.feature {
            let local: Vec<&UiElement> = feature.ui_elements.iter().collect();
            check_duplicated_named_nodes(&local, &mut problems.errors, "UI element");
            for element in &feature.ui_elements {
                check_element(element, problems);
            }
        }

        let global: Vec<&UiElement> = doc.ui_elements.iter().collect();
        check_duplicated_named_nodes(&global, &mut problems.errors, "global UI element");
        for element in &doc.ui_elements {
            check_element(element, problems);
        }
    }
}

fn places(groups: &[&UiProperty]) -> String {
    groups
        .iter()
        .map(|p| p.location.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn check_element(element: &UiElement, problems: &mut Problems) {
    let mut by_kind: IndexMap<UiPropertyKind, Vec<&UiProperty>> = IndexMap::new();
    for property in &element.properties {
        by_kind.entry(property.kind).or_default().push(property);
    }

    for (kind, props) in &by_kind {
        let max = kind.max_declarations();
        if props.len() > max {
            let message = if max == 1 {
                format!(
                    "Property \"{}\" of \"{}\" declared more than once in: {}",
                    kind.keyword(),
                    element.name,
                    places(props)
                )
            } else {
                format!(
                    "Property \"{}\" of \"{}\" declared three or more times in: {}",
                    kind.keyword(),
                    element.name,
                    places(props)
                )
            };
            problems
                .errors
                .push(LocatedException::new(message, props[0].location.clone()));
        }

        // A computed property admits no second declaration of its kind.
        if props.len() > 1
            && props
                .iter()
                .any(|p| p.operator == PropertyOperator::ComputedBy)
        {
            problems.errors.push(LocatedException::new(
                format!(
                    "Property \"{}\" of \"{}\" is computed by an expression and cannot be redeclared in: {}",
                    kind.keyword(),
                    element.name,
                    places(props)
                ),
                props[0].location.clone(),
            ));
        }

        // Operator compatibility applies to kinds that legitimately allow
        // a second declaration; over-declared kinds are already reported.
        if max >= 2 && props.len() == 2 {
            let (a, b) = (props[0].operator, props[1].operator);
            if a != PropertyOperator::ComputedBy
                && b != PropertyOperator::ComputedBy
                && !a.compatible_with(b)
            {
                problems.errors.push(LocatedException::new(
                    format!(
                        "Incompatible operators \"{}\" and \"{}\" for property \"{}\" of \"{}\" in: {}",
                        a.keyword(),
                        b.keyword(),
                        kind.keyword(),
                        element.name,
                        places(props)
                    ),
                    props[0].location.clone(),
                ));
            }
        }
    }

    for (kind, props) in &by_kind {
        for other in kind.incompatible_with() {
            if let Some(other_props) = by_kind.get(other) {
                let mut all: Vec<&UiProperty> = props.clone();
                all.extend_from_slice(other_props);
                problems.errors.push(LocatedException::new(
                    format!(
                        "Incompatible properties \"{}\" and \"{}\" of \"{}\" in: {}",
                        kind.keyword(),
                        other.keyword(),
                        element.name,
                        places(&all)
                    ),
                    props[0].location.clone(),
                ));
            }
        }
    }
}
