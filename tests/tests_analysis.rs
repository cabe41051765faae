//! Whole-battery analysis runs over multi-document specifications.

mod helpers;

use std::path::Path;

use litmus::ast::{Constant, Document, EventBlock, Scenario, StateRef, Variant};
use litmus::base::Location;

use helpers::{analyze, build_spec, feature, importing};

fn variant_with(
    preconditions: &[&str],
    postconditions: &[&str],
) -> Variant {
    let mut variant = Variant::new("V", Location::new(5, 1));
    for (i, name) in preconditions.iter().enumerate() {
        variant
            .preconditions
            .push(StateRef::new(*name, Location::new(6 + i as u32, 3)));
    }
    for (i, name) in postconditions.iter().enumerate() {
        variant
            .postconditions
            .push(StateRef::new(*name, Location::new(16 + i as u32, 3)));
    }
    variant
}

fn doc_with_variant(path: &str, variant: Variant) -> Document {
    let mut doc = Document::new(path);
    let mut scenario = Scenario::new("S", Location::new(2, 1));
    scenario.variants.push(variant);
    let mut f = feature("F", &[]);
    f.name = format!("Feature of {path}").into();
    f.scenarios.push(scenario);
    doc.feature = Some(f);
    doc
}

#[test]
fn test_state_from_non_imported_document_is_one_error() {
    let producer = doc_with_variant(
        "/specs/producer.litmus",
        variant_with(&[], &["user registered"]),
    );
    let consumer = doc_with_variant(
        "/specs/consumer.litmus",
        variant_with(&["user registered"], &[]),
    );

    let (success, problems) = analyze(&mut build_spec(vec![producer, consumer]));
    assert!(!success);
    let errors = problems.errors_for(Path::new("/specs/consumer.litmus"));
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("user registered"));
    // Located at the referencing step.
    assert_eq!(errors[0].location.as_ref().map(|l| (l.line, l.column)), Some((6, 3)));
}

#[test]
fn test_state_resolves_through_transitive_imports() {
    let producer = doc_with_variant(
        "/specs/producer.litmus",
        variant_with(&[], &["user registered"]),
    );
    let mut middle = importing("/specs/middle.litmus", &["producer.litmus"]);
    middle.feature = doc_with_variant("/specs/middle.litmus", variant_with(&[], &[])).feature;
    let mut consumer = doc_with_variant(
        "/specs/consumer.litmus",
        variant_with(&["User Registered"], &[]),
    );
    consumer.imports = importing("/specs/consumer.litmus", &["middle.litmus"]).imports;

    let (success, problems) =
        analyze(&mut build_spec(vec![producer, middle, consumer]));
    assert!(success, "unexpected problems: {:?}", problems.all_error_messages());
}

#[test]
fn test_global_duplicates_and_events_reported_generically() {
    let mut a = Document::new("/specs/a.litmus");
    a.constants
        .push(Constant::new("timeout", "30", Location::new(1, 1)));
    a.before_all = Some(EventBlock {
        location: Location::new(3, 1),
    });
    let mut b = Document::new("/specs/b.litmus");
    b.constants
        .push(Constant::new("timeout", "60", Location::new(1, 1)));
    b.before_all = Some(EventBlock {
        location: Location::new(8, 1),
    });

    let (success, problems) = analyze(&mut build_spec(vec![a, b]));
    assert!(!success);

    let messages: Vec<String> = problems
        .generic_errors()
        .iter()
        .map(|e| e.message.clone())
        .collect();
    assert_eq!(messages.len(), 2);
    assert!(messages.iter().any(|m| m.contains("Duplicated constant \"timeout\"")));
    assert!(messages.iter().any(|m| m.contains("Before All")));
}

#[test]
fn test_cycle_reporting_does_not_suppress_other_analyzers() {
    let mut a = importing("/specs/a.litmus", &["b.litmus"]);
    a.constants
        .push(Constant::new("pi", "3.14", Location::new(2, 1)));
    let mut b = importing("/specs/b.litmus", &["a.litmus"]);
    b.constants
        .push(Constant::new("pi", "3.14", Location::new(2, 1)));

    let (success, problems) = analyze(&mut build_spec(vec![a, b]));
    assert!(!success);

    let all = problems.all_error_messages();
    assert!(all.iter().any(|m| m.contains("Cyclic import")));
    assert!(all.iter().any(|m| m.contains("Duplicated constant")));
}
