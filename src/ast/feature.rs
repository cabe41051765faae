use smol_str::SmolStr;

use crate::base::Location;

use super::NamedNode;
use super::ui_element::UiElement;

/// The feature declared by a document, with its scenarios and any
/// feature-scoped UI elements.
#[derive(Clone, Debug, Default)]
pub struct Feature {
    pub name: SmolStr,
    pub location: Location,
    pub scenarios: Vec<Scenario>,
    pub ui_elements: Vec<UiElement>,
}

impl Feature {
    pub fn new(name: impl Into<SmolStr>, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
            scenarios: Vec::new(),
            ui_elements: Vec::new(),
        }
    }
}

impl NamedNode for Feature {
    fn name(&self) -> &str {
        &self.name
    }
    fn location(&self) -> &Location {
        &self.location
    }
}

/// A scenario: ordered variants plus optional background sentences shared
/// by every variant.
#[derive(Clone, Debug, Default)]
pub struct Scenario {
    pub name: SmolStr,
    pub location: Location,
    pub variants: Vec<Variant>,
    pub background: Vec<Step>,
}

impl Scenario {
    pub fn new(name: impl Into<SmolStr>, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
            variants: Vec::new(),
            background: Vec::new(),
        }
    }
}

impl NamedNode for Scenario {
    fn name(&self) -> &str {
        &self.name
    }
    fn location(&self) -> &Location {
        &self.location
    }
}

/// A variant: the ordered sentences of one walk through a scenario, plus
/// the state references the parser extracted from them.
///
/// `preconditions` and `state_calls` name states the variant requires;
/// `postconditions` name states it produces. The state analyzer marks
/// unresolvable requirements `not_found` in place.
#[derive(Clone, Debug, Default)]
pub struct Variant {
    pub name: SmolStr,
    pub location: Location,
    pub sentences: Vec<Step>,
    pub preconditions: Vec<StateRef>,
    pub postconditions: Vec<StateRef>,
    pub state_calls: Vec<StateRef>,
}

impl Variant {
    pub fn new(name: impl Into<SmolStr>, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
            ..Self::default()
        }
    }
}

/// A named state reference attached to a step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateRef {
    pub name: SmolStr,
    pub location: Location,
    pub not_found: bool,
}

impl StateRef {
    pub fn new(name: impl Into<SmolStr>, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
            not_found: false,
        }
    }
}

/// Step keyword kinds. `And` continues the kind of the preceding step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepKind {
    Given,
    When,
    Then,
    And,
    Otherwise,
}

/// One sentence of a variant or background.
#[derive(Clone, Debug)]
pub struct Step {
    pub kind: StepKind,
    pub text: String,
    pub state: Option<StateRef>,
    pub location: Location,
}

impl Step {
    pub fn new(kind: StepKind, text: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            text: text.into(),
            state: None,
            location,
        }
    }

    pub fn with_state(mut self, state: StateRef) -> Self {
        self.state = Some(state);
        self
    }
}
