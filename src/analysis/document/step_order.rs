use crate::ast::{Document, Step, StepKind};
use crate::report::{LocatedException, Problems};

use super::DocumentAnalyzer;

/// Given-step ordering within every sentence sequence (variant sentences
/// and scenario backgrounds).
///
/// Two rules per sequence:
/// - once a non-Given step appears, no further Given may follow;
/// - a Given carrying a state must not be preceded by a Given without
///   one, detected by comparing the running count of state-bearing
///   Givens against the Given's positional index.
pub struct StepOrderAnalyzer;

impl DocumentAnalyzer for StepOrderAnalyzer {
    fn analyze(&self, doc: &mut Document, problems: &mut Problems) {
        let Some(feature) = &doc.feature else { return };
        for scenario in &feature.scenarios {
            check_sequence(&scenario.background, problems);
            for variant in &scenario.variants {
                check_sequence(&variant.sentences, problems);
            }
        }
    }
}

fn check_sequence(steps: &[Step], problems: &mut Problems) {
    let mut last_kind: Option<StepKind> = None;
    let mut non_given_seen = false;
    let mut given_index = 0usize;
    let mut states_seen = 0usize;

    for step in steps {
        let kind = match (step.kind, last_kind) {
            (StepKind::And, Some(previous)) => previous,
            (kind, _) => kind,
        };
        last_kind = Some(kind);

        if kind != StepKind::Given {
            non_given_seen = true;
            continue;
        }

        if non_given_seen {
            problems.errors.push(LocatedException::new(
                "A Given step cannot be declared after a When, Then or Otherwise step",
                step.location.clone(),
            ));
        }

        if let Some(state) = &step.state {
            states_seen += 1;
            if states_seen <= given_index {
                problems.errors.push(LocatedException::new(
                    format!(
                        "The Given step with state \"{}\" must come before Given steps without a state",
                        state.name
                    ),
                    step.location.clone(),
                ));
            }
        }
        given_index += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::StateRef;
    use crate::base::Location;
    use rstest::rstest;

    fn step(kind: StepKind, line: u32) -> Step {
        Step::new(kind, "some sentence", Location::new(line, 1))
    }

    fn state_step(kind: StepKind, state: &str, line: u32) -> Step {
        step(kind, line).with_state(StateRef::new(state, Location::new(line, 7)))
    }

    fn errors_of(steps: Vec<Step>) -> Vec<String> {
        let mut problems = Problems::default();
        check_sequence(&steps, &mut problems);
        problems.errors.into_iter().map(|e| e.message).collect()
    }

    #[test]
    fn test_given_when_then_is_fine() {
        let errors = errors_of(vec![
            step(StepKind::Given, 1),
            step(StepKind::When, 2),
            step(StepKind::Then, 3),
        ]);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_given_after_when_is_an_error() {
        let errors = errors_of(vec![
            step(StepKind::Given, 1),
            step(StepKind::When, 2),
            step(StepKind::Given, 3),
        ]);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("cannot be declared after"));
    }

    #[test]
    fn test_and_continues_previous_kind() {
        // And after When is a When; And after the trailing Given is a
        // second misplaced Given.
        let errors = errors_of(vec![
            step(StepKind::Given, 1),
            step(StepKind::When, 2),
            step(StepKind::And, 3),
            step(StepKind::Given, 4),
            step(StepKind::And, 5),
        ]);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_state_first_ordering_holds() {
        let errors = errors_of(vec![
            state_step(StepKind::Given, "logged in", 1),
            step(StepKind::Given, 2),
            step(StepKind::When, 3),
        ]);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_state_after_plain_given_is_an_error() {
        let errors = errors_of(vec![
            step(StepKind::Given, 1),
            state_step(StepKind::Given, "logged in", 2),
        ]);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("logged in"));
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![StepKind::When, StepKind::Then], 0)]
    #[case(vec![StepKind::Then, StepKind::Given], 1)]
    #[case(vec![StepKind::Given, StepKind::Otherwise, StepKind::Given, StepKind::Given], 2)]
    fn test_misplaced_given_counts(#[case] kinds: Vec<StepKind>, #[case] expected: usize) {
        let steps = kinds
            .into_iter()
            .enumerate()
            .map(|(i, kind)| step(kind, i as u32 + 1))
            .collect();
        assert_eq!(errors_of(steps).len(), expected);
    }
}
