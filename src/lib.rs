//! docgraph: type-graph extraction and serialization for component
//! documentation.
//!
//! A host compiler answers type queries through a [`TypeOracle`];
//! [`parse_component`] walks the component's props, exports, events and
//! slots through it and returns a [`Component`] document whose named and
//! recursive types live in a flat registry. [`encode`]/[`decode`] move the
//! document across a JSON boundary without losing map order or reference
//! identity.
//!
//! ```text
//! oracle + ComponentShape ──parse_component──▶ Component ──encode──▶ JSON
//!                                                   ▲                 │
//!                                                   └─────decode──────┘
//! ```

pub mod config;
pub mod key;
pub mod tracing_config;

pub use config::{ConfigError, ParseConfig};
pub use key::DocumentKey;

pub use docgraph_builder::{BuildError, BuildOptions, ComponentShape, TypeGraph};
pub use docgraph_cache::{ArtifactCache, ArtifactUpdate, CachedArtifact};
pub use docgraph_common::ErrorCode;
pub use docgraph_model::{
    CodecError, Component, Prop, TypeNode, TypeOrRef, TypeRef, Types, decode, encode,
    from_json_str, to_json_string,
};
pub use docgraph_oracle::{MemoryOracle, TypeOracle};

use tracing::debug;

/// Failure of [`parse_component`].
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Build(#[from] BuildError),
}

impl ParseError {
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Config(err) => err.code(),
            Self::Build(err) => err.code(),
        }
    }
}

/// Extract the documentation graph of one component.
///
/// Each call owns a fresh registry and namer; concurrent calls on different
/// threads share nothing but the oracle.
pub fn parse_component<O: TypeOracle>(
    oracle: &O,
    shape: &ComponentShape<O::Type, O::Symbol>,
    config: &ParseConfig,
) -> Result<Component, ParseError> {
    let _span = tracing::debug_span!("parse_component", file = %shape.file).entered();
    let options = config.resolve()?;
    let component = docgraph_builder::extract_component(oracle, shape, options)?;
    debug!(
        props = component.props.len(),
        exports = component.exports.len(),
        types = component.types.len(),
        "parsed component"
    );
    Ok(component)
}
