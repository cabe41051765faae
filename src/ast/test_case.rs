use smol_str::SmolStr;

use crate::base::Location;

use super::NamedNode;

/// A tag attached to a test case, e.g. `@scenario(2)` or `@generated`.
#[derive(Clone, Debug, Default)]
pub struct Tag {
    pub name: SmolStr,
    pub content: Option<String>,
    pub location: Location,
}

impl Tag {
    pub fn new(name: impl Into<SmolStr>, location: Location) -> Self {
        Self {
            name: name.into(),
            content: None,
            location,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// A declared test case.
///
/// The `declared_*` fields start empty and are filled in by the
/// test-case binding analyzer from the `@feature`/`@scenario`/`@variant`
/// tags (1-indexed, as written). `generated` is set by `@generated`.
#[derive(Clone, Debug, Default)]
pub struct TestCase {
    pub name: SmolStr,
    pub location: Location,
    pub tags: Vec<Tag>,
    pub declared_scenario_index: Option<usize>,
    pub declared_variant_index: Option<usize>,
    pub declared_feature_name: Option<SmolStr>,
    pub generated: bool,
}

impl TestCase {
    pub fn new(name: impl Into<SmolStr>, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
            ..Self::default()
        }
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }
}

impl NamedNode for TestCase {
    fn name(&self) -> &str {
        &self.name
    }
    fn location(&self) -> &Location {
        &self.location
    }
}
