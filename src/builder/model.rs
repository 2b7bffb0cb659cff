use super::catalog::ComponentKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(pub u64);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Open property bag. Every field is optional; editor and preview fill in
/// their own defaults. Fields this crate does not know about are kept in
/// `extra` so they survive a load/save cycle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Properties {
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.color.is_none()
            && self.placeholder.is_none()
            && self.options.is_none()
            && self.extra.is_empty()
    }
}

/// A placed component on the canvas.
///
/// Serialized flat, e.g. `{"id":3,"type":"heading","text":"Hi"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentInstance {
    pub id: ComponentId,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    #[serde(flatten)]
    pub properties: Properties,
}

impl ComponentInstance {
    pub fn new(id: ComponentId, kind: ComponentKind) -> Self {
        Self {
            id,
            kind,
            properties: Properties::default(),
        }
    }
}
