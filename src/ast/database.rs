use smol_str::SmolStr;

use crate::base::Location;

use super::NamedNode;

/// A named constant declaration.
#[derive(Clone, Debug, Default)]
pub struct Constant {
    pub name: SmolStr,
    pub value: String,
    pub location: Location,
}

impl Constant {
    pub fn new(name: impl Into<SmolStr>, value: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            location,
        }
    }
}

impl NamedNode for Constant {
    fn name(&self) -> &str {
        &self.name
    }
    fn location(&self) -> &Location {
        &self.location
    }
}

/// A declared data table. Row content is irrelevant to semantic analysis;
/// only the name participates in resolution.
#[derive(Clone, Debug, Default)]
pub struct Table {
    pub name: SmolStr,
    pub location: Location,
}

impl Table {
    pub fn new(name: impl Into<SmolStr>, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

impl NamedNode for Table {
    fn name(&self) -> &str {
        &self.name
    }
    fn location(&self) -> &Location {
        &self.location
    }
}

/// Kinds of database block properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DatabasePropertyKind {
    Type,
    Path,
    Host,
    Port,
    Username,
    Password,
    Charset,
    Options,
}

impl DatabasePropertyKind {
    pub fn keyword(self) -> &'static str {
        match self {
            DatabasePropertyKind::Type => "type",
            DatabasePropertyKind::Path => "path",
            DatabasePropertyKind::Host => "host",
            DatabasePropertyKind::Port => "port",
            DatabasePropertyKind::Username => "username",
            DatabasePropertyKind::Password => "password",
            DatabasePropertyKind::Charset => "charset",
            DatabasePropertyKind::Options => "options",
        }
    }
}

/// One property of a database block.
#[derive(Clone, Debug)]
pub struct DatabaseProperty {
    pub kind: DatabasePropertyKind,
    pub value: String,
    pub location: Location,
}

impl DatabaseProperty {
    pub fn new(kind: DatabasePropertyKind, value: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            value: value.into(),
            location,
        }
    }
}

/// A database block. The name is optional: a block may instead identify
/// its target through a `path` property (validated by the database
/// analyzer).
#[derive(Clone, Debug, Default)]
pub struct Database {
    pub name: Option<SmolStr>,
    pub location: Location,
    pub properties: Vec<DatabaseProperty>,
}

impl Database {
    pub fn new(name: Option<SmolStr>, location: Location) -> Self {
        Self {
            name,
            location,
            properties: Vec::new(),
        }
    }

    pub fn with_property(mut self, property: DatabaseProperty) -> Self {
        self.properties.push(property);
        self
    }

    pub fn property_of_kind(&self, kind: DatabasePropertyKind) -> Option<&DatabaseProperty> {
        self.properties.iter().find(|p| p.kind == kind)
    }

    /// Display name for messages: the declared name or the `path` value.
    pub fn display_name(&self) -> &str {
        if let Some(name) = &self.name {
            return name;
        }
        self.property_of_kind(DatabasePropertyKind::Path)
            .map(|p| p.value.as_str())
            .unwrap_or("<unnamed>")
    }
}
