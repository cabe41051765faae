use smol_str::SmolStr;

use crate::ast::{Document, TestCase, names_match};
use crate::graph::SpecGraph;
use crate::report::duplication::check_duplicated_nodes_with_key;
use crate::report::{LocatedException, ProblemMapper};
use crate::spec::{NameIndices, Specification};

use super::SpecificationAnalyzer;

/// Binds every test case to a feature and validates its tags.
///
/// Per document with test cases, exactly one governing branch applies:
/// the document's own feature; the single imported feature (implicit);
/// one of several imported features chosen by a mandatory `@feature`
/// tag; or no feature at all, which is an error. Tag rules (`@scenario`
/// and `@variant` index bounds, `@variant` requiring a preceding
/// `@scenario`, `@generated`) apply in every branch, and duplicated
/// test cases are detected afterwards under the composite key of
/// declared scenario index, declared variant index and name.
pub struct TestCaseBindingAnalyzer;

/// Name and per-scenario variant counts of a document's feature, taken
/// before any test case is mutated.
#[derive(Clone)]
struct FeatureShape {
    name: SmolStr,
    variant_counts: Vec<usize>,
}

fn feature_shape(doc: &Document) -> Option<FeatureShape> {
    doc.feature.as_ref().map(|feature| FeatureShape {
        name: feature.name.clone(),
        variant_counts: feature
            .scenarios
            .iter()
            .map(|scenario| scenario.variants.len())
            .collect(),
    })
}

fn positive_int(content: Option<&str>) -> Option<usize> {
    content
        .and_then(|c| c.trim().parse::<usize>().ok())
        .filter(|n| *n >= 1)
}

fn process_tags(
    test_case: &mut TestCase,
    bound: Option<&FeatureShape>,
    errors: &mut Vec<LocatedException>,
) {
    // Walk tags in declaration order so the preceding-@scenario rule
    // sees only tags written earlier.
    for i in 0..test_case.tags.len() {
        let tag = test_case.tags[i].clone();
        match tag.name.to_lowercase().as_str() {
            "generated" => test_case.generated = true,
            "feature" => {
                if let Some(content) = &tag.content {
                    test_case.declared_feature_name = Some(SmolStr::new(content.trim()));
                }
            }
            "scenario" => match positive_int(tag.content.as_deref()) {
                None => errors.push(LocatedException::new(
                    format!(
                        "The @scenario tag of the test case \"{}\" must contain a positive integer",
                        test_case.name
                    ),
                    tag.location.clone(),
                )),
                Some(index) => {
                    if let Some(shape) = bound {
                        if index > shape.variant_counts.len() {
                            errors.push(LocatedException::new(
                                format!(
                                    "The @scenario tag index {index} exceeds the {} scenario(s) of the feature \"{}\"",
                                    shape.variant_counts.len(),
                                    shape.name
                                ),
                                tag.location.clone(),
                            ));
                            continue;
                        }
                    }
                    test_case.declared_scenario_index = Some(index);
                }
            },
            "variant" => {
                let Some(scenario_index) = test_case.declared_scenario_index else {
                    errors.push(LocatedException::new(
                        format!(
                            "The @variant tag of the test case \"{}\" must be preceded by a @scenario tag",
                            test_case.name
                        ),
                        tag.location.clone(),
                    ));
                    continue;
                };
                match positive_int(tag.content.as_deref()) {
                    None => errors.push(LocatedException::new(
                        format!(
                            "The @variant tag of the test case \"{}\" must contain a positive integer",
                            test_case.name
                        ),
                        tag.location.clone(),
                    )),
                    Some(index) => {
                        let count = bound
                            .map(|shape| shape.variant_counts[scenario_index - 1]);
                        if let Some(count) = count {
                            if index > count {
                                errors.push(LocatedException::new(
                                    format!(
                                        "The @variant tag index {index} exceeds the {count} variant(s) of scenario {scenario_index}"
                                    ),
                                    tag.location.clone(),
                                ));
                                continue;
                            }
                        }
                        test_case.declared_variant_index = Some(index);
                    }
                }
            }
            _ => {}
        }
    }
}

fn composite_key(test_case: &TestCase) -> String {
    match (
        test_case.declared_scenario_index,
        test_case.declared_variant_index,
    ) {
        (None, None) => test_case.name.to_string(),
        (Some(s), None) => format!("{}, scenario {s}", test_case.name),
        (Some(s), Some(v)) => format!("{}, scenario {s}, variant {v}", test_case.name),
        (None, Some(v)) => format!("{}, variant {v}", test_case.name),
    }
}

impl SpecificationAnalyzer for TestCaseBindingAnalyzer {
    fn analyze(
        &self,
        _graph: &SpecGraph,
        spec: &mut Specification,
        _indices: &NameIndices,
        problems: &mut ProblemMapper,
    ) {
        let shapes: Vec<Option<FeatureShape>> =
            spec.documents().iter().map(feature_shape).collect();

        for idx in 0..spec.documents().len() {
            if spec.documents()[idx].test_cases.is_empty() {
                continue;
            }

            let imported: Vec<FeatureShape> = spec.documents()[idx]
                .imports
                .iter()
                .filter_map(|import| spec.index_of(&import.resolved_path))
                .filter_map(|target| shapes[target].clone())
                .collect();
            let local = shapes[idx].clone();

            let doc = &mut spec.documents_mut()[idx];
            let path = doc.path.clone();
            let mut errors = Vec::new();

            if local.is_none() && imported.is_empty() {
                errors.push(LocatedException::new(
                    "No imports or feature declared before the test cases".to_string(),
                    doc.test_cases[0].location.clone(),
                ));
                for test_case in &mut doc.test_cases {
                    process_tags(test_case, None, &mut errors);
                }
            } else {
                for test_case in &mut doc.test_cases {
                    let declared = test_case
                        .tags
                        .iter()
                        .find(|tag| tag.name.eq_ignore_ascii_case("feature"))
                        .cloned();

                    let bound: Option<&FeatureShape> = if let Some(local) = &local {
                        if let Some(tag) = &declared {
                            let content = tag.content.as_deref().unwrap_or_default().trim();
                            if !names_match(content, &local.name) {
                                errors.push(LocatedException::new(
                                    format!(
                                        "The feature \"{content}\" declared in the @feature tag does not match the feature \"{}\"",
                                        local.name
                                    ),
                                    tag.location.clone(),
                                ));
                            }
                        }
                        Some(local)
                    } else if imported.len() == 1 {
                        if let Some(tag) = &declared {
                            let content = tag.content.as_deref().unwrap_or_default().trim();
                            if !names_match(content, &imported[0].name) {
                                errors.push(LocatedException::new(
                                    format!(
                                        "The feature \"{content}\" declared in the @feature tag does not match the imported feature \"{}\"",
                                        imported[0].name
                                    ),
                                    tag.location.clone(),
                                ));
                            }
                        }
                        Some(&imported[0])
                    } else {
                        match &declared {
                            None => {
                                errors.push(LocatedException::new(
                                    format!(
                                        "The test case \"{}\" must declare a @feature tag to choose among the imported features",
                                        test_case.name
                                    ),
                                    test_case.location.clone(),
                                ));
                                None
                            }
                            Some(tag) => {
                                let content =
                                    tag.content.as_deref().unwrap_or_default().trim();
                                match imported
                                    .iter()
                                    .find(|shape| names_match(content, &shape.name))
                                {
                                    Some(shape) => Some(shape),
                                    None => {
                                        errors.push(LocatedException::new(
                                            format!(
                                                "The feature \"{content}\" declared in the @feature tag does not match any imported feature"
                                            ),
                                            tag.location.clone(),
                                        ));
                                        None
                                    }
                                }
                            }
                        }
                    };

                    process_tags(test_case, bound, &mut errors);
                }
            }

            let refs: Vec<&TestCase> = doc.test_cases.iter().collect();
            check_duplicated_nodes_with_key(&refs, &mut errors, "test case", composite_key);

            for error in errors {
                problems.append_document_error(&path, error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Feature, Import, Scenario, Tag, Variant};
    use crate::base::Location;
    use std::path::Path;

    fn feature(name: &str, scenario_variants: &[usize]) -> Feature {
        let mut feature = Feature::new(name, Location::new(1, 1));
        for (i, &variants) in scenario_variants.iter().enumerate() {
            let mut scenario = Scenario::new(format!("S{i}"), Location::new(i as u32 + 2, 1));
            for v in 0..variants {
                scenario
                    .variants
                    .push(Variant::new(format!("V{v}"), Location::new(10, 1)));
            }
            feature.scenarios.push(scenario);
        }
        feature
    }

    fn importing(path: &str, targets: &[&str]) -> Document {
        let mut doc = Document::new(path);
        for (i, target) in targets.iter().enumerate() {
            doc.imports
                .push(Import::new(*target, Location::new(i as u32 + 1, 1)));
        }
        doc.resolve_imports();
        doc
    }

    fn run(spec: &mut Specification) -> ProblemMapper {
        let graph = SpecGraph::build(spec);
        let indices = NameIndices::build(spec);
        let mut problems = ProblemMapper::new();
        TestCaseBindingAnalyzer.analyze(&graph, spec, &indices, &mut problems);
        problems
    }

    #[test]
    fn test_no_feature_and_no_imports_is_one_error() {
        let mut doc = Document::new("/specs/t.litmus");
        doc.test_cases
            .push(TestCase::new("TC 1", Location::new(1, 1)));
        doc.test_cases
            .push(TestCase::new("TC 2", Location::new(5, 1)));
        let mut spec = Specification::new();
        spec.add_document(doc);

        let problems = run(&mut spec);
        let errors = problems.errors_for(Path::new("/specs/t.litmus"));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("imports"));
    }

    #[test]
    fn test_single_imported_feature_binds_implicitly() {
        let mut producer = Document::new("/specs/a.litmus");
        producer.feature = Some(feature("My feature A", &[1]));
        let mut consumer = importing("/specs/c.litmus", &["a.litmus"]);
        consumer
            .test_cases
            .push(TestCase::new("TC 1", Location::new(3, 1)));

        let mut spec = Specification::new();
        spec.add_document(producer);
        spec.add_document(consumer);

        assert!(run(&mut spec).is_empty());
    }

    #[test]
    fn test_multiple_imported_features_require_a_feature_tag() {
        let mut a = Document::new("/specs/a.litmus");
        a.feature = Some(feature("My feature A", &[1]));
        let mut b = Document::new("/specs/b.litmus");
        b.feature = Some(feature("My feature B", &[1]));
        let e1 = Document::new("/specs/e1.litmus");

        let mut c = importing("/specs/c.litmus", &["a.litmus", "b.litmus", "e1.litmus"]);
        c.test_cases
            .push(TestCase::new("TC 1", Location::new(4, 1)));

        let mut spec = Specification::new();
        spec.add_document(a);
        spec.add_document(b);
        spec.add_document(e1);
        spec.add_document(c);

        let problems = run(&mut spec);
        let errors = problems.errors_for(Path::new("/specs/c.litmus"));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("tag"));
    }

    #[test]
    fn test_feature_tag_selects_among_imports_case_insensitively() {
        let mut a = Document::new("/specs/a.litmus");
        a.feature = Some(feature("My feature A", &[1]));
        let mut b = Document::new("/specs/b.litmus");
        b.feature = Some(feature("My feature B", &[1]));

        let mut c = importing("/specs/c.litmus", &["a.litmus", "b.litmus"]);
        c.test_cases.push(
            TestCase::new("TC 1", Location::new(4, 1)).with_tag(
                Tag::new("feature", Location::new(3, 1)).with_content("my FEATURE a"),
            ),
        );

        let mut spec = Specification::new();
        spec.add_document(a);
        spec.add_document(b);
        spec.add_document(c);

        assert!(run(&mut spec).is_empty());
        let tc = &spec.documents()[2].test_cases[0];
        assert_eq!(tc.declared_feature_name.as_deref(), Some("my FEATURE a"));
    }

    #[test]
    fn test_scenario_and_variant_indices_are_bounds_checked() {
        let mut doc = Document::new("/specs/f.litmus");
        doc.feature = Some(feature("F", &[2, 3]));
        doc.test_cases.push(
            TestCase::new("TC ok", Location::new(20, 1))
                .with_tag(Tag::new("scenario", Location::new(19, 1)).with_content("2"))
                .with_tag(Tag::new("variant", Location::new(19, 14)).with_content("3")),
        );
        doc.test_cases.push(
            TestCase::new("TC bad", Location::new(30, 1))
                .with_tag(Tag::new("scenario", Location::new(29, 1)).with_content("3")),
        );
        let mut spec = Specification::new();
        spec.add_document(doc);

        let problems = run(&mut spec);
        let errors = problems.errors_for(Path::new("/specs/f.litmus"));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("@scenario tag index 3"));

        let tc = &spec.documents()[0].test_cases[0];
        assert_eq!(tc.declared_scenario_index, Some(2));
        assert_eq!(tc.declared_variant_index, Some(3));
    }

    #[test]
    fn test_variant_without_scenario_is_an_error() {
        let mut doc = Document::new("/specs/f.litmus");
        doc.feature = Some(feature("F", &[1]));
        doc.test_cases.push(
            TestCase::new("TC 1", Location::new(3, 1))
                .with_tag(Tag::new("variant", Location::new(2, 1)).with_content("1")),
        );
        let mut spec = Specification::new();
        spec.add_document(doc);

        let problems = run(&mut spec);
        let errors = problems.errors_for(Path::new("/specs/f.litmus"));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("preceded by a @scenario"));
    }

    #[test]
    fn test_generated_tag_sets_flag() {
        let mut doc = Document::new("/specs/f.litmus");
        doc.feature = Some(feature("F", &[1]));
        doc.test_cases.push(
            TestCase::new("TC 1", Location::new(3, 1))
                .with_tag(Tag::new("generated", Location::new(2, 1))),
        );
        let mut spec = Specification::new();
        spec.add_document(doc);

        assert!(run(&mut spec).is_empty());
        assert!(spec.documents()[0].test_cases[0].generated);
    }

    #[test]
    fn test_duplicate_test_cases_use_the_composite_key() {
        let mut doc = Document::new("/specs/f.litmus");
        doc.feature = Some(feature("My feature F", &[1, 2]));
        doc.test_cases
            .push(TestCase::new("My F test case 1", Location::new(10, 1)));
        doc.test_cases
            .push(TestCase::new("My F test case 1", Location::new(20, 1)));
        // Same name bound to a different scenario index is not a duplicate.
        doc.test_cases.push(
            TestCase::new("My F test case 1", Location::new(30, 1))
                .with_tag(Tag::new("scenario", Location::new(29, 1)).with_content("2")),
        );
        let mut spec = Specification::new();
        spec.add_document(doc);

        let problems = run(&mut spec);
        let errors = problems.errors_for(Path::new("/specs/f.litmus"));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Duplicated test case"));
    }
}
