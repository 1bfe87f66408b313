//! Transport codec for component documents.
//!
//! `encode` turns a [`Component`] into a JSON-compatible tree and `decode`
//! reverses it. Ordered mappings and sets carry their own discriminator
//! (see [`crate::container`]), so decoding needs no table of field roles.
//! Decoding additionally checks the document invariants a well-formed
//! encoder upholds:
//!
//! - the top-level `props`, `exports` and `types` fields are present
//! - every reference names an entry of the `types` registry
//! - a prop with a `default` is optional, and `sources` is present exactly
//!   when the prop is extended

use docgraph_common::ErrorCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::container::{CONTAINER_MISMATCH, DUPLICATE_KEY, OrderedMap};
use crate::document::{Component, Prop};
use crate::visit::component_refs;

/// Top-level fields every encoded document carries.
pub const REQUIRED_ROLES: [&str; 3] = ["props", "exports", "types"];

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("malformed transport tree: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("transport tree is not a document object, found {found}")]
    NotADocument { found: &'static str },

    #[error("{0}")]
    ContainerMismatch(String),

    #[error("{0}")]
    DuplicateKey(String),

    #[error("document is missing the `{role}` field")]
    MissingRole { role: &'static str },

    #[error("reference `{name}` has no entry in the type registry")]
    DanglingReference { name: String },

    #[error("prop `{name}` {reason}")]
    InvalidProp { name: String, reason: &'static str },
}

impl CodecError {
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Malformed(_) | Self::NotADocument { .. } => ErrorCode::MalformedTransport,
            Self::ContainerMismatch(_) => ErrorCode::ContainerMismatch,
            Self::DuplicateKey(_) => ErrorCode::DuplicateKey,
            Self::MissingRole { .. } => ErrorCode::MissingRoleField,
            Self::DanglingReference { .. } => ErrorCode::DanglingReference,
            Self::InvalidProp { .. } => ErrorCode::InvalidProp,
        }
    }

    /// Sort a serde failure into the container errors raised by
    /// [`crate::container`], falling back to `Malformed`.
    fn classify(error: serde_json::Error) -> Self {
        let message = error.to_string();
        if message.contains(CONTAINER_MISMATCH) {
            Self::ContainerMismatch(message)
        } else if message.contains(DUPLICATE_KEY) {
            Self::DuplicateKey(message)
        } else {
            Self::Malformed(error)
        }
    }
}

/// Encode a document into its transport tree.
pub fn encode(component: &Component) -> Result<Value, CodecError> {
    serde_json::to_value(component).map_err(CodecError::Malformed)
}

/// Reconstruct a document from its transport tree.
pub fn decode(tree: &Value) -> Result<Component, CodecError> {
    let Some(object) = tree.as_object() else {
        return Err(CodecError::NotADocument {
            found: value_kind(tree),
        });
    };
    if let Some(role) = REQUIRED_ROLES
        .into_iter()
        .find(|role| !object.contains_key(*role))
    {
        return Err(CodecError::MissingRole { role });
    }

    let component = Component::deserialize(tree).map_err(CodecError::classify)?;
    validate(&component)?;
    debug!(
        props = component.props.len(),
        types = component.types.len(),
        "decoded component document"
    );
    Ok(component)
}

/// Encode and render as JSON text.
pub fn to_json_string(component: &Component, pretty: bool) -> Result<String, CodecError> {
    let tree = encode(component)?;
    let text = if pretty {
        serde_json::to_string_pretty(&tree)
    } else {
        serde_json::to_string(&tree)
    };
    text.map_err(CodecError::Malformed)
}

/// Parse JSON text and decode it.
pub fn from_json_str(text: &str) -> Result<Component, CodecError> {
    let tree: Value = serde_json::from_str(text).map_err(CodecError::Malformed)?;
    decode(&tree)
}

fn validate(component: &Component) -> Result<(), CodecError> {
    let mut dangling = None;
    component_refs(component, |name| {
        if dangling.is_none() && !component.types.contains(name.as_str()) {
            dangling = Some(name.to_string());
        }
    });
    if let Some(name) = dangling {
        return Err(CodecError::DanglingReference { name });
    }

    validate_props(&component.props)?;
    for slot in component.slots.iter().flat_map(|slots| slots.values()) {
        validate_props(slot)?;
    }
    Ok(())
}

fn validate_props(props: &OrderedMap<Prop>) -> Result<(), CodecError> {
    for (name, prop) in props {
        let reason = if prop.default.is_some() && !prop.is_optional {
            "has a default but is not optional"
        } else if prop.is_extended && prop.sources.is_none() {
            "is extended but lists no sources"
        } else if !prop.is_extended && prop.sources.is_some() {
            "lists sources but is not extended"
        } else {
            continue;
        };
        return Err(CodecError::InvalidProp {
            name: name.clone(),
            reason,
        });
    }
    Ok(())
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "tests/codec_unit_tests.rs"]
mod tests;
