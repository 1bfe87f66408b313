//! Type oracle boundary.
//!
//! The extractor never resolves types itself. It queries an already-checked
//! program through [`TypeOracle`]: flags, properties, signatures, alias
//! identity, declaration sources and documentation of opaque type and
//! symbol handles.
//!
//! [`MemoryOracle`] is a complete arena-backed implementation used by tests
//! and by hosts that precompute the type information of a component.

pub mod flags;
pub mod kind;
pub mod memory;
pub mod oracle;

pub use flags::{ObjectFlags, TypeFlags};
pub use kind::TypeKind;
pub use memory::{MemoryOracle, PropertySpec, SymbolId, TypeId};
pub use oracle::{
    AliasInfo, ConditionalParts, DocTag, Documentation, Literal, Signature, TemplateParts,
    TypeOracle, TypeParameterInfo,
};
