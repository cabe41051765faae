use smol_str::SmolStr;

use crate::base::Location;

use super::NamedNode;

/// Kinds of UI element properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UiPropertyKind {
    Id,
    Type,
    Editable,
    DataType,
    Value,
    MinLength,
    MaxLength,
    MinValue,
    MaxValue,
    Format,
    Required,
    Locale,
}

impl UiPropertyKind {
    /// How many declarations of this kind a single element admits.
    ///
    /// `value` may be declared twice (complementary operators, e.g. an
    /// `in` set plus a `not in` set); everything else exactly once.
    pub fn max_declarations(self) -> usize {
        match self {
            UiPropertyKind::Value => 2,
            _ => 1,
        }
    }

    /// The keyword as written in specifications, for messages.
    pub fn keyword(self) -> &'static str {
        match self {
            UiPropertyKind::Id => "id",
            UiPropertyKind::Type => "type",
            UiPropertyKind::Editable => "editable",
            UiPropertyKind::DataType => "datatype",
            UiPropertyKind::Value => "value",
            UiPropertyKind::MinLength => "minlength",
            UiPropertyKind::MaxLength => "maxlength",
            UiPropertyKind::MinValue => "minvalue",
            UiPropertyKind::MaxValue => "maxvalue",
            UiPropertyKind::Format => "format",
            UiPropertyKind::Required => "required",
            UiPropertyKind::Locale => "locale",
        }
    }

    /// Kinds that cannot coexist with a declaration of this kind on the
    /// same element.
    pub fn incompatible_with(self) -> &'static [UiPropertyKind] {
        match self {
            UiPropertyKind::Value => &[
                UiPropertyKind::MinValue,
                UiPropertyKind::MaxValue,
                UiPropertyKind::MinLength,
                UiPropertyKind::MaxLength,
                UiPropertyKind::Format,
            ],
            _ => &[],
        }
    }
}

/// Operators connecting a property to its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyOperator {
    EqualTo,
    NotEqualTo,
    In,
    NotIn,
    ComputedBy,
}

impl PropertyOperator {
    pub fn keyword(self) -> &'static str {
        match self {
            PropertyOperator::EqualTo => "equal to",
            PropertyOperator::NotEqualTo => "not equal to",
            PropertyOperator::In => "in",
            PropertyOperator::NotIn => "not in",
            PropertyOperator::ComputedBy => "computed by",
        }
    }

    /// Whether two same-kind declarations may use this pair of operators.
    /// Only complementary pairs are accepted.
    pub fn compatible_with(self, other: PropertyOperator) -> bool {
        use PropertyOperator::*;
        matches!(
            (self, other),
            (EqualTo, NotEqualTo) | (NotEqualTo, EqualTo) | (In, NotIn) | (NotIn, In)
        )
    }
}

/// What a property value is, before resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    /// A literal number, string or date expression.
    Literal,
    /// A literal list of values.
    List,
    /// A reference to a named constant.
    Constant,
    /// A reference to another UI element.
    UiElementRef,
    /// A query over tables/databases, possibly referencing constants and
    /// UI elements.
    Query,
}

/// A property value: its kind plus the raw text the parser captured.
/// For `Constant` and `UiElementRef` the raw text is the referenced name.
#[derive(Clone, Debug)]
pub struct PropertyValue {
    pub kind: ValueKind,
    pub raw: String,
}

impl PropertyValue {
    pub fn new(kind: ValueKind, raw: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
        }
    }
}

/// An index-based handle to a node in the specification-wide arenas:
/// document index plus node index within that document's collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    pub doc: u32,
    pub node: u32,
}

impl NodeHandle {
    pub fn new(doc: usize, node: usize) -> Self {
        Self {
            doc: doc as u32,
            node: node as u32,
        }
    }
}

/// A resolved reference recorded on a property by the reference analyzer.
/// Handles index into the owning [`Specification`](crate::spec::Specification),
/// never alias the referenced node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReferenceHandle {
    Constant(NodeHandle),
    Table(NodeHandle),
    Database(NodeHandle),
    UiElement(NodeHandle),
}

/// One property declaration of a UI element.
#[derive(Clone, Debug)]
pub struct UiProperty {
    pub kind: UiPropertyKind,
    pub operator: PropertyOperator,
    pub value: PropertyValue,
    pub location: Location,
    /// Filled by the property reference analyzer.
    pub references: Vec<ReferenceHandle>,
}

impl UiProperty {
    pub fn new(
        kind: UiPropertyKind,
        operator: PropertyOperator,
        value: PropertyValue,
        location: Location,
    ) -> Self {
        Self {
            kind,
            operator,
            value,
            location,
            references: Vec::new(),
        }
    }
}

/// A UI element declaration, document-global or feature-scoped.
#[derive(Clone, Debug, Default)]
pub struct UiElement {
    pub name: SmolStr,
    pub location: Location,
    pub properties: Vec<UiProperty>,
}

impl UiElement {
    pub fn new(name: impl Into<SmolStr>, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
            properties: Vec::new(),
        }
    }

    pub fn with_property(mut self, property: UiProperty) -> Self {
        self.properties.push(property);
        self
    }
}

impl NamedNode for UiElement {
    fn name(&self) -> &str {
        &self.name
    }
    fn location(&self) -> &Location {
        &self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_is_twice_declarable() {
        assert_eq!(UiPropertyKind::Value.max_declarations(), 2);
        assert_eq!(UiPropertyKind::MinLength.max_declarations(), 1);
    }

    #[test]
    fn test_complementary_operators_are_compatible() {
        assert!(PropertyOperator::In.compatible_with(PropertyOperator::NotIn));
        assert!(PropertyOperator::EqualTo.compatible_with(PropertyOperator::NotEqualTo));
        assert!(!PropertyOperator::In.compatible_with(PropertyOperator::In));
        assert!(!PropertyOperator::ComputedBy.compatible_with(PropertyOperator::EqualTo));
    }

    #[test]
    fn test_value_incompatibilities() {
        assert!(
            UiPropertyKind::Value
                .incompatible_with()
                .contains(&UiPropertyKind::Format)
        );
        assert!(UiPropertyKind::Id.incompatible_with().is_empty());
    }
}
