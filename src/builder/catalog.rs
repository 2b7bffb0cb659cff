use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kinds of component a user can drag from the palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Heading,
    Input,
    Dropdown,
    Button,
}

impl ComponentKind {
    pub const fn tag(self) -> &'static str {
        match self {
            ComponentKind::Heading => "heading",
            ComponentKind::Input => "input",
            ComponentKind::Dropdown => "dropdown",
            ComponentKind::Button => "button",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ComponentKind::Heading => "Heading",
            ComponentKind::Input => "Input Field",
            ComponentKind::Dropdown => "Dropdown",
            ComponentKind::Button => "Button",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown component type `{0}`")]
pub struct UnknownKind(pub String);

impl FromStr for ComponentKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATALOG
            .iter()
            .map(|entry| entry.kind)
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// One palette row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub kind: ComponentKind,
    pub label: &'static str,
}

impl CatalogEntry {
    const fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            label: kind.label(),
        }
    }
}

/// Palette contents, in display order.
pub const CATALOG: [CatalogEntry; 4] = [
    CatalogEntry::new(ComponentKind::Heading),
    CatalogEntry::new(ComponentKind::Input),
    CatalogEntry::new(ComponentKind::Dropdown),
    CatalogEntry::new(ComponentKind::Button),
];
