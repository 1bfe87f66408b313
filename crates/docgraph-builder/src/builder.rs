//! Type graph builder.
//!
//! [`TypeGraph`] is the per-parse context: it owns the registry, the namer
//! memo and the depth guard, and borrows the oracle. `build` turns an oracle
//! type into either an inline [`TypeNode`] or a [`TypeRef`] into the
//! registry.
//!
//! Cycles are broken by reserving a registry slot before recursing into a
//! referenced type. A nested `build` of the same type finds the reserved
//! slot and returns the reference without descending again. The slot is
//! filled once the node is complete.

use docgraph_common::limits::{
    ANONYMOUS_LITERAL_MARKER, INTERNAL_SYMBOL_PREFIX, TYPES_REGISTRY_CAPACITY,
};
use docgraph_model::{
    ArrayNode, ConditionalNode, ConstructibleNode, FnCall, FnParam, FunctionNode, IndexNode,
    IndexedAccessNode, InterfaceNode, IntersectionNode, LiteralValue, Member, OrderedMap,
    SourceSet, StringMappingNode, SubstitutionNode, TemplateLiteralNode, TupleNode, TypeMeta,
    TypeNode, TypeOrRef, TypeParameterNode, Types,
};
use docgraph_oracle::{Literal, Signature, TypeKind, TypeOracle};
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::BuildError;
use crate::namer::ReferenceNamer;
use crate::options::BuildOptions;
use crate::recursion::DepthCounter;

/// Registry slot: `None` while the node is being built.
type Slot = Option<TypeNode>;

/// Per-parse builder context.
pub struct TypeGraph<'o, O: TypeOracle> {
    pub(crate) oracle: &'o O,
    options: BuildOptions,
    namer: ReferenceNamer<O::Type>,
    registry: IndexMap<String, Slot>,
    depth: DepthCounter,
}

impl<'o, O: TypeOracle> TypeGraph<'o, O> {
    pub fn new(oracle: &'o O, options: BuildOptions) -> Self {
        let depth = DepthCounter::new(options.max_depth);
        Self {
            oracle,
            options,
            namer: ReferenceNamer::new(),
            registry: IndexMap::with_capacity(TYPES_REGISTRY_CAPACITY),
            depth,
        }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    pub fn oracle(&self) -> &'o O {
        self.oracle
    }

    /// Number of registry entries, reserved slots included.
    pub fn registry_len(&self) -> usize {
        self.registry.len()
    }

    /// The registry name `ty` would be stored under, if it is referenced.
    pub fn name_of(&mut self, ty: O::Type) -> Result<String, BuildError> {
        self.namer.name_of(self.oracle, ty, &mut self.depth)
    }

    /// Convert `ty` into an inline node or a registry reference.
    pub fn build(&mut self, ty: O::Type) -> Result<TypeOrRef, BuildError> {
        if !self.depth.enter() {
            return Err(BuildError::DepthExceeded {
                max_depth: self.depth.max_depth(),
                display: self.oracle.type_to_string(ty),
            });
        }
        let result = self.build_entry(ty);
        self.depth.leave();
        result
    }

    /// Consume the context and return the finished registry.
    ///
    /// Fails if a slot was reserved but never filled, which only happens when
    /// an earlier `build` returned an error that the caller ignored.
    pub fn finish(self) -> Result<Types, BuildError> {
        let mut types = Types::new();
        for (name, slot) in self.registry {
            match slot {
                Some(node) => {
                    types.insert(name, node);
                }
                None => return Err(BuildError::UnresolvedReference { name }),
            }
        }
        debug!(
            types = types.len(),
            anonymous = self.namer.anonymous_count(),
            "type graph finished"
        );
        Ok(types)
    }

    fn build_entry(&mut self, ty: O::Type) -> Result<TypeOrRef, BuildError> {
        if !self.is_referenced(ty) {
            return self.build_node(ty).map(TypeOrRef::inline);
        }

        let name = self.name_of(ty)?;
        if let Some(slot) = self.registry.get(&name) {
            if slot.is_none() {
                debug!(name = %name, "cycle through reserved slot");
            }
            return Ok(TypeOrRef::reference(name));
        }

        debug!(name = %name, "reserving registry slot");
        self.registry.insert(name.clone(), None);
        let node = self.build_node(ty)?;
        self.registry.insert(name.clone(), Some(node));
        debug!(name = %name, "filled registry slot");
        Ok(TypeOrRef::reference(name))
    }

    /// A type is inlined only without alias, type arguments or a declared
    /// name other than the type-literal marker.
    fn is_referenced(&self, ty: O::Type) -> bool {
        if self.oracle.alias_of(ty).is_some() {
            return true;
        }
        if !self.oracle.type_arguments_of(ty).is_empty() {
            return true;
        }
        self.oracle
            .declared_name_of(ty)
            .is_some_and(|name| name != ANONYMOUS_LITERAL_MARKER)
    }

    /// Dispatch on kind, then attach alias/name/source metadata.
    fn build_node(&mut self, ty: O::Type) -> Result<TypeNode, BuildError> {
        let kind = self.oracle.kind_of(ty);
        trace!(?ty, %kind, "building node");

        let mut node = match kind {
            TypeKind::Any => TypeNode::Any,
            TypeKind::Unknown => TypeNode::Unknown,
            TypeKind::Never => TypeNode::Never,
            TypeKind::Null => TypeNode::Null,
            TypeKind::Undefined => TypeNode::Undefined,
            TypeKind::Void => TypeNode::Void,
            TypeKind::Boolean => TypeNode::Boolean,
            TypeKind::Number => TypeNode::Number,
            TypeKind::String => TypeNode::String,
            TypeKind::BigInt => TypeNode::BigInt,
            TypeKind::Symbol => TypeNode::Symbol,
            TypeKind::Object => TypeNode::Object,
            TypeKind::Literal => self.build_literal(ty, kind)?,
            TypeKind::Array => self.build_array(ty)?,
            TypeKind::Tuple => self.build_tuple(ty)?,
            TypeKind::Function => self.build_function(ty, kind)?,
            TypeKind::Constructible => self.build_constructible(ty, kind)?,
            TypeKind::Interface => self.build_interface(ty)?,
            TypeKind::Intersection => TypeNode::Intersection(IntersectionNode {
                types: self.build_all(&self.oracle.types_of(ty))?,
                meta: TypeMeta::default(),
            }),
            TypeKind::Union => TypeNode::Union(self.build_union(ty)?),
            TypeKind::TypeParameter => self.build_type_parameter(ty, kind)?,
            TypeKind::Index => {
                let operand = self.require(ty, kind, "index operand", O::index_operand_of)?;
                TypeNode::Index(IndexNode {
                    ty: self.build(operand)?,
                    meta: TypeMeta::default(),
                })
            }
            TypeKind::IndexedAccess => {
                let (object, index) =
                    self.require(ty, kind, "indexed access operands", O::indexed_access_of)?;
                TypeNode::IndexedAccess(IndexedAccessNode {
                    object: self.build(object)?,
                    index: self.build(index)?,
                    meta: TypeMeta::default(),
                })
            }
            TypeKind::Conditional => {
                let parts = self.require(ty, kind, "conditional branches", O::conditional_of)?;
                TypeNode::Conditional(ConditionalNode {
                    check: self.build(parts.check)?,
                    extends: self.build(parts.extends)?,
                    true_type: self.build(parts.true_type)?,
                    false_type: self.build(parts.false_type)?,
                    meta: TypeMeta::default(),
                })
            }
            TypeKind::Substitution => {
                let (base, constraint) =
                    self.require(ty, kind, "substitution operands", O::substitution_of)?;
                TypeNode::Substitution(SubstitutionNode {
                    base: self.build(base)?,
                    constraint: self.build(constraint)?,
                    meta: TypeMeta::default(),
                })
            }
            TypeKind::TemplateLiteral => {
                let parts = self.require(ty, kind, "template spans", O::template_literal_of)?;
                TypeNode::TemplateLiteral(TemplateLiteralNode {
                    texts: parts.texts,
                    types: self.build_all(&parts.types)?,
                    meta: TypeMeta::default(),
                })
            }
            TypeKind::StringMapping => {
                let (intrinsic, operand) =
                    self.require(ty, kind, "mapped operand", O::string_mapping_of)?;
                TypeNode::StringMapping(StringMappingNode {
                    intrinsic,
                    ty: self.build(operand)?,
                    meta: TypeMeta::default(),
                })
            }
            TypeKind::Unrecognized => {
                return Err(BuildError::UnsupportedTypeKind {
                    flags: format!("{:?}", self.oracle.flags(ty)),
                    display: self.oracle.type_to_string(ty),
                });
            }
        };

        if let Some(meta) = node.meta_mut() {
            *meta = self.common_meta(ty, kind)?;
        }
        Ok(node)
    }

    /// Alias identity, declared name, declaration sources and own type
    /// arguments, each independently optional.
    fn common_meta(&mut self, ty: O::Type, kind: TypeKind) -> Result<TypeMeta, BuildError> {
        let mut meta = TypeMeta::default();

        if let Some(alias) = self.oracle.alias_of(ty) {
            meta.alias = Some(alias.name);
            meta.alias_source = alias.source;
            if !alias.type_args.is_empty() {
                meta.alias_type_args = Some(self.build_all(&alias.type_args)?);
            }
        }

        meta.name = self
            .oracle
            .declared_name_of(ty)
            .filter(|name| !name.starts_with(INTERNAL_SYMBOL_PREFIX));

        let sources = self.oracle.declaration_sources_of(ty);
        if !sources.is_empty() {
            meta.sources = Some(sources.into_iter().collect::<SourceSet>());
        }

        // Arrays and tuples already carry their arguments as elements.
        if !matches!(kind, TypeKind::Array | TypeKind::Tuple) {
            let args = self.oracle.type_arguments_of(ty);
            if !args.is_empty() {
                meta.type_args = Some(self.build_all(&args)?);
            }
        }
        Ok(meta)
    }

    pub(crate) fn build_all(&mut self, types: &[O::Type]) -> Result<Vec<TypeOrRef>, BuildError> {
        types.iter().map(|&ty| self.build(ty)).collect()
    }

    fn require<T>(
        &self,
        ty: O::Type,
        kind: TypeKind,
        what: &'static str,
        query: impl FnOnce(&O, O::Type) -> Option<T>,
    ) -> Result<T, BuildError> {
        query(self.oracle, ty).ok_or_else(|| BuildError::MissingOracleData {
            kind,
            what,
            display: self.oracle.type_to_string(ty),
        })
    }

    // ------------------------------------------------------------------
    // Sub-builders
    // ------------------------------------------------------------------

    fn build_literal(&self, ty: O::Type, kind: TypeKind) -> Result<TypeNode, BuildError> {
        let value = match self.require(ty, kind, "literal value", O::literal_value_of)? {
            Literal::String(s) => LiteralValue::String(s),
            Literal::Number(n) => LiteralValue::Number(n),
            Literal::BigInt(digits) => LiteralValue::BigInt(digits),
            Literal::Boolean(b) => LiteralValue::Boolean(b),
            Literal::UniqueSymbol(description) => LiteralValue::Symbol(description),
        };
        Ok(TypeNode::Literal(value))
    }

    fn build_array(&mut self, ty: O::Type) -> Result<TypeNode, BuildError> {
        let Some(&element) = self.oracle.type_arguments_of(ty).first() else {
            return Err(BuildError::MissingTypeArgument {
                display: self.oracle.type_to_string(ty),
            });
        };
        Ok(TypeNode::Array(ArrayNode {
            element: self.build(element)?,
            is_readonly: self.oracle.is_readonly_array_like(ty),
            meta: TypeMeta::default(),
        }))
    }

    fn build_tuple(&mut self, ty: O::Type) -> Result<TypeNode, BuildError> {
        let elements = self.oracle.type_arguments_of(ty);
        Ok(TypeNode::Tuple(TupleNode {
            elements: self.build_all(&elements)?,
            is_readonly: self.oracle.is_readonly_array_like(ty),
            meta: TypeMeta::default(),
        }))
    }

    fn build_function(&mut self, ty: O::Type, kind: TypeKind) -> Result<TypeNode, BuildError> {
        let signatures = self.oracle.call_signatures_of(ty);
        if signatures.is_empty() {
            return Err(BuildError::MissingSignature {
                kind,
                signature: "call",
                display: self.oracle.type_to_string(ty),
            });
        }
        let mut calls = Vec::with_capacity(signatures.len());
        for signature in &signatures {
            calls.push(FnCall {
                parameters: self.build_parameters(signature)?,
                return_type: self.build(signature.return_type)?,
            });
        }
        Ok(TypeNode::Function(FunctionNode {
            calls,
            meta: TypeMeta::default(),
        }))
    }

    fn build_constructible(
        &mut self,
        ty: O::Type,
        kind: TypeKind,
    ) -> Result<TypeNode, BuildError> {
        let signatures = self.oracle.construct_signatures_of(ty);
        if signatures.is_empty() {
            return Err(BuildError::MissingSignature {
                kind,
                signature: "construct",
                display: self.oracle.type_to_string(ty),
            });
        }
        let mut constructors = Vec::with_capacity(signatures.len());
        for signature in &signatures {
            constructors.push(self.build_parameters(signature)?);
        }
        Ok(TypeNode::Constructible(ConstructibleNode {
            constructors,
            meta: TypeMeta::default(),
        }))
    }

    fn build_parameters(
        &mut self,
        signature: &Signature<O::Type, O::Symbol>,
    ) -> Result<Vec<FnParam>, BuildError> {
        let last = signature.parameters.len().checked_sub(1);
        let mut parameters = Vec::with_capacity(signature.parameters.len());
        for (i, &symbol) in signature.parameters.iter().enumerate() {
            parameters.push(FnParam {
                name: self.oracle.symbol_name(symbol),
                is_optional: self.oracle.is_optional(symbol),
                is_rest: signature.has_rest && Some(i) == last,
                ty: self.build(self.oracle.type_of_symbol(symbol))?,
            });
        }
        Ok(parameters)
    }

    fn build_interface(&mut self, ty: O::Type) -> Result<TypeNode, BuildError> {
        let properties = self.oracle.properties_of(ty);
        let mut members = OrderedMap::with_capacity(properties.len());
        for symbol in properties {
            let member = Member {
                is_optional: self.oracle.is_optional(symbol),
                is_readonly: self.oracle.is_readonly(symbol),
                ty: self.build(self.oracle.type_of_symbol(symbol))?,
            };
            members.insert(self.oracle.symbol_name(symbol), member);
        }
        Ok(TypeNode::Interface(InterfaceNode {
            members,
            meta: TypeMeta::default(),
        }))
    }

    fn build_type_parameter(
        &mut self,
        ty: O::Type,
        kind: TypeKind,
    ) -> Result<TypeNode, BuildError> {
        let info = self.require(ty, kind, "type parameter declaration", O::type_parameter_of)?;
        let constraint = info.constraint.map(|c| self.build(c)).transpose()?;
        let default = info.default.map(|d| self.build(d)).transpose()?;
        Ok(TypeNode::TypeParameter(TypeParameterNode {
            name: info.name,
            is_const: info.is_const,
            constraint,
            default,
        }))
    }
}

#[cfg(test)]
#[path = "tests/builder_tests.rs"]
mod tests;
