//! Component documents: the finished output of one parse.

use serde::{Deserialize, Serialize};

use crate::container::{OrderedMap, SourceSet};
use crate::node::{TypeOrRef, Types};

/// A documentation-comment tag (`@default 1`, `@deprecated`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Tag {
    pub fn new(name: impl Into<String>, content: Option<String>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }
}

/// Documentation record of one property.
///
/// `default` implies `is_optional`; `sources` is present exactly when
/// `is_extended` is set. [`crate::decode`] rejects records that break either
/// rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prop {
    #[serde(rename = "type")]
    pub ty: TypeOrRef,
    pub is_optional: bool,
    pub is_bindable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<TypeOrRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub is_extended: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<SourceSet>,
}

impl Prop {
    /// A required, non-bindable, locally declared property of type `ty`.
    pub fn new(ty: TypeOrRef) -> Self {
        Self {
            ty,
            is_optional: false,
            is_bindable: false,
            default: None,
            description: None,
            tags: Vec::new(),
            is_extended: false,
            sources: None,
        }
    }
}

/// Public surface of one component.
///
/// `events` and `slots` are present only for the legacy component shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub is_legacy: bool,
    pub props: OrderedMap<Prop>,
    pub exports: OrderedMap<TypeOrRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<OrderedMap<TypeOrRef>>,
    /// Slot name to the props passed to that slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<OrderedMap<OrderedMap<Prop>>>,
    pub types: Types,
}

impl Component {
    pub fn new() -> Self {
        Self::default()
    }
}
