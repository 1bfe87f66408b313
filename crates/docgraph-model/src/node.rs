//! Type nodes of the documentation graph.
//!
//! `TypeNode` is a closed sum over every kind the builder emits. Structured
//! and instantiable kinds hold their operands as [`TypeOrRef`], so a node
//! either embeds a child inline or names it through a [`TypeRef`] into the
//! [`Types`] registry. Every cycle passes through at least one reference.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::container::{OrderedMap, SourceSet};

// =============================================================================
// References
// =============================================================================

/// Name of a node stored in the [`Types`] registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(String);

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for TypeRef {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A type position: either a node embedded in place or a registry reference.
///
/// On the wire a reference is a plain string and an inline node is an object
/// tagged by `kind`.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeOrRef {
    Ref(TypeRef),
    Inline(Box<TypeNode>),
}

impl TypeOrRef {
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Ref(TypeRef::new(name))
    }

    pub fn inline(node: TypeNode) -> Self {
        Self::Inline(Box::new(node))
    }

    pub fn as_reference(&self) -> Option<&TypeRef> {
        match self {
            Self::Ref(name) => Some(name),
            Self::Inline(_) => None,
        }
    }

    pub fn as_inline(&self) -> Option<&TypeNode> {
        match self {
            Self::Inline(node) => Some(node),
            Self::Ref(_) => None,
        }
    }

    pub fn is_ref(&self) -> bool {
        matches!(self, Self::Ref(_))
    }
}

impl From<TypeNode> for TypeOrRef {
    fn from(node: TypeNode) -> Self {
        Self::inline(node)
    }
}

impl From<TypeRef> for TypeOrRef {
    fn from(name: TypeRef) -> Self {
        Self::Ref(name)
    }
}

impl Serialize for TypeOrRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Ref(name) => serializer.serialize_str(name.as_str()),
            Self::Inline(node) => node.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for TypeOrRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TypeOrRefVisitor;

        impl<'de> Visitor<'de> for TypeOrRefVisitor {
            type Value = TypeOrRef;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a type reference string or a type node object")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<TypeOrRef, E> {
                Ok(TypeOrRef::reference(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<TypeOrRef, E> {
                Ok(TypeOrRef::reference(v))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<TypeOrRef, A::Error> {
                let node = TypeNode::deserialize(de::value::MapAccessDeserializer::new(map))?;
                Ok(TypeOrRef::inline(node))
            }
        }

        deserializer.deserialize_any(TypeOrRefVisitor)
    }
}

// =============================================================================
// Common metadata
// =============================================================================

/// Alias, name and provenance shared by aliasable kinds. Every field is
/// independently optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_type_args: Option<Vec<TypeOrRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<SourceSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_args: Option<Vec<TypeOrRef>>,
}

impl TypeMeta {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// =============================================================================
// Nodes
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TypeNode {
    Any,
    Unknown,
    Never,
    Null,
    Undefined,
    Void,
    Boolean,
    Number,
    String,
    #[serde(rename = "bigint")]
    BigInt,
    Symbol,
    Object,

    Literal(LiteralValue),

    Array(ArrayNode),
    Tuple(TupleNode),
    Function(FunctionNode),
    Constructible(ConstructibleNode),
    Interface(InterfaceNode),
    Intersection(IntersectionNode),
    Union(UnionNode),

    TypeParameter(TypeParameterNode),
    Index(IndexNode),
    IndexedAccess(IndexedAccessNode),
    Conditional(ConditionalNode),
    Substitution(SubstitutionNode),
    TemplateLiteral(TemplateLiteralNode),
    StringMapping(StringMappingNode),
}

/// Value of a literal type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "subkind", content = "value", rename_all = "lowercase")]
pub enum LiteralValue {
    String(String),
    Number(f64),
    /// Decimal digits without the `n` suffix.
    #[serde(rename = "bigint")]
    BigInt(String),
    Boolean(bool),
    /// Description of a `unique symbol`.
    Symbol(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayNode {
    pub element: TypeOrRef,
    pub is_readonly: bool,
    #[serde(flatten)]
    pub meta: TypeMeta,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TupleNode {
    pub elements: Vec<TypeOrRef>,
    pub is_readonly: bool,
    #[serde(flatten)]
    pub meta: TypeMeta,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FnParam {
    pub name: String,
    pub is_optional: bool,
    pub is_rest: bool,
    #[serde(rename = "type")]
    pub ty: TypeOrRef,
}

/// One call signature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FnCall {
    pub parameters: Vec<FnParam>,
    pub return_type: TypeOrRef,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionNode {
    pub calls: Vec<FnCall>,
    #[serde(flatten)]
    pub meta: TypeMeta,
}

/// A class constructor (`typeof Date`). The class name lives in `meta.name`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructibleNode {
    /// Parameter lists of the construct signatures.
    pub constructors: Vec<Vec<FnParam>>,
    #[serde(flatten)]
    pub meta: TypeMeta,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub is_optional: bool,
    pub is_readonly: bool,
    #[serde(rename = "type")]
    pub ty: TypeOrRef,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceNode {
    pub members: OrderedMap<Member>,
    #[serde(flatten)]
    pub meta: TypeMeta,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntersectionNode {
    pub types: Vec<TypeOrRef>,
    #[serde(flatten)]
    pub meta: TypeMeta,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnionNode {
    pub types: Vec<TypeOrRef>,
    /// The union without its `null`/`undefined`/`void` members, set only when
    /// nullable members were split off.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_nullable: Option<TypeOrRef>,
    #[serde(flatten)]
    pub meta: TypeMeta,
}

/// A type parameter. Carries no [`TypeMeta`]: parameters are never aliased.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeParameterNode {
    pub name: String,
    pub is_const: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<TypeOrRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<TypeOrRef>,
}

/// `keyof T`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexNode {
    #[serde(rename = "type")]
    pub ty: TypeOrRef,
    #[serde(flatten)]
    pub meta: TypeMeta,
}

/// `T[K]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedAccessNode {
    pub object: TypeOrRef,
    pub index: TypeOrRef,
    #[serde(flatten)]
    pub meta: TypeMeta,
}

/// `C extends E ? T : F`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalNode {
    pub check: TypeOrRef,
    pub extends: TypeOrRef,
    pub true_type: TypeOrRef,
    pub false_type: TypeOrRef,
    #[serde(flatten)]
    pub meta: TypeMeta,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstitutionNode {
    pub base: TypeOrRef,
    pub constraint: TypeOrRef,
    #[serde(flatten)]
    pub meta: TypeMeta,
}

/// `` `a${T}b` `` is texts `["a", "b"]` and types `[T]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateLiteralNode {
    pub texts: Vec<String>,
    pub types: Vec<TypeOrRef>,
    #[serde(flatten)]
    pub meta: TypeMeta,
}

/// `Uppercase<T>` and the other intrinsic string mappings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringMappingNode {
    pub intrinsic: String,
    #[serde(rename = "type")]
    pub ty: TypeOrRef,
    #[serde(flatten)]
    pub meta: TypeMeta,
}

impl TypeNode {
    /// Wire name of the node's kind.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Unknown => "unknown",
            Self::Never => "never",
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Void => "void",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::BigInt => "bigint",
            Self::Symbol => "symbol",
            Self::Object => "object",
            Self::Literal(_) => "literal",
            Self::Array(_) => "array",
            Self::Tuple(_) => "tuple",
            Self::Function(_) => "function",
            Self::Constructible(_) => "constructible",
            Self::Interface(_) => "interface",
            Self::Intersection(_) => "intersection",
            Self::Union(_) => "union",
            Self::TypeParameter(_) => "type-parameter",
            Self::Index(_) => "index",
            Self::IndexedAccess(_) => "indexed-access",
            Self::Conditional(_) => "conditional",
            Self::Substitution(_) => "substitution",
            Self::TemplateLiteral(_) => "template-literal",
            Self::StringMapping(_) => "string-mapping",
        }
    }

    pub fn meta(&self) -> Option<&TypeMeta> {
        match self {
            Self::Array(node) => Some(&node.meta),
            Self::Tuple(node) => Some(&node.meta),
            Self::Function(node) => Some(&node.meta),
            Self::Constructible(node) => Some(&node.meta),
            Self::Interface(node) => Some(&node.meta),
            Self::Intersection(node) => Some(&node.meta),
            Self::Union(node) => Some(&node.meta),
            Self::Index(node) => Some(&node.meta),
            Self::IndexedAccess(node) => Some(&node.meta),
            Self::Conditional(node) => Some(&node.meta),
            Self::Substitution(node) => Some(&node.meta),
            Self::TemplateLiteral(node) => Some(&node.meta),
            Self::StringMapping(node) => Some(&node.meta),
            _ => None,
        }
    }

    /// Metadata slot of aliasable kinds; `None` for base kinds, literals and
    /// type parameters.
    pub fn meta_mut(&mut self) -> Option<&mut TypeMeta> {
        match self {
            Self::Array(node) => Some(&mut node.meta),
            Self::Tuple(node) => Some(&mut node.meta),
            Self::Function(node) => Some(&mut node.meta),
            Self::Constructible(node) => Some(&mut node.meta),
            Self::Interface(node) => Some(&mut node.meta),
            Self::Intersection(node) => Some(&mut node.meta),
            Self::Union(node) => Some(&mut node.meta),
            Self::Index(node) => Some(&mut node.meta),
            Self::IndexedAccess(node) => Some(&mut node.meta),
            Self::Conditional(node) => Some(&mut node.meta),
            Self::Substitution(node) => Some(&mut node.meta),
            Self::TemplateLiteral(node) => Some(&mut node.meta),
            Self::StringMapping(node) => Some(&mut node.meta),
            _ => None,
        }
    }

    /// True for payload-free kinds.
    pub const fn is_base(&self) -> bool {
        matches!(
            self,
            Self::Any
                | Self::Unknown
                | Self::Never
                | Self::Null
                | Self::Undefined
                | Self::Void
                | Self::Boolean
                | Self::Number
                | Self::String
                | Self::BigInt
                | Self::Symbol
                | Self::Object
        )
    }

    pub fn as_union(&self) -> Option<&UnionNode> {
        match self {
            Self::Union(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceNode> {
        match self {
            Self::Interface(node) => Some(node),
            _ => None,
        }
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Registry of named nodes, in first-discovery order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Types(OrderedMap<TypeNode>);

impl Types {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&TypeNode> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Follow a reference into the registry, or return the inline node.
    pub fn resolve<'a>(&'a self, ty: &'a TypeOrRef) -> Option<&'a TypeNode> {
        match ty {
            TypeOrRef::Ref(name) => self.get(name.as_str()),
            TypeOrRef::Inline(node) => Some(node),
        }
    }

    /// Insert or replace `name`, keeping its original position.
    pub fn insert(&mut self, name: impl Into<String>, node: TypeNode) -> Option<TypeNode> {
        self.0.insert(name.into(), node)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeNode)> {
        self.0.iter().map(|(name, node)| (name.as_str(), node))
    }
}

impl FromIterator<(String, TypeNode)> for Types {
    fn from_iter<I: IntoIterator<Item = (String, TypeNode)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "tests/node_tests.rs"]
mod tests;
