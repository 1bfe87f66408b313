//! Documentation graph of a component's public surface.
//!
//! - [`TypeNode`]: closed sum type over type kinds
//! - [`TypeOrRef`]: an inline node or a [`TypeRef`] into the [`Types`] registry
//! - [`Component`]: props, exports, legacy events/slots and the registry
//! - [`codec`]: lossless transport to and from a JSON-compatible tree
//!
//! Every cycle of the conceptual type graph passes through at least one
//! `TypeRef`, so all values here are finite trees.

pub mod codec;
pub mod container;
pub mod document;
pub mod node;
pub mod visit;

pub use codec::{CodecError, decode, encode, from_json_str, to_json_string};
pub use container::{OrderedMap, SourceSet};
pub use document::{Component, Prop, Tag};
pub use node::{
    ArrayNode, ConditionalNode, ConstructibleNode, FnCall, FnParam, FunctionNode, IndexNode,
    IndexedAccessNode, InterfaceNode, IntersectionNode, LiteralValue, Member, StringMappingNode,
    SubstitutionNode, TemplateLiteralNode, TupleNode, TypeMeta, TypeNode, TypeOrRef,
    TypeParameterNode, TypeRef, Types, UnionNode,
};
