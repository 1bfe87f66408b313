//! Arena-backed in-memory oracle.
//!
//! `MemoryOracle` stores every type and symbol in a flat arena and hands out
//! `TypeId` / `SymbolId` indices. Handle identity is arena identity: two
//! calls to [`MemoryOracle::object_literal`] produce two distinct types even
//! when their members are identical, exactly like two independently declared
//! type literals in a checked program.
//!
//! Unions are the exception. A checker interns unions by member set, so
//! `union([a, b])` returns the existing union when one with the same members
//! was created before (alias included). Nested unions are flattened on
//! construction, which reproduces the distributed form a checker reports for
//! `Alias | undefined`.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::trace;

use crate::flags::{ObjectFlags, TypeFlags};
use crate::oracle::{
    AliasInfo, ConditionalParts, DocTag, Documentation, Literal, Signature, TemplateParts,
    TypeOracle, TypeParameterInfo,
};

const TYPE_LIST_INLINE: usize = 8;
const DISPLAY_DEPTH: u32 = 8;

type TypeListKey = SmallVec<[TypeId; TYPE_LIST_INLINE]>;

/// Handle of a type in a [`MemoryOracle`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const ANY: Self = Self(0);
    pub const UNKNOWN: Self = Self(1);
    pub const NEVER: Self = Self(2);
    pub const NULL: Self = Self(3);
    pub const UNDEFINED: Self = Self(4);
    pub const VOID: Self = Self(5);
    pub const STRING: Self = Self(6);
    pub const NUMBER: Self = Self(7);
    pub const BIGINT: Self = Self(8);
    pub const SYMBOL: Self = Self(9);
    pub const OBJECT: Self = Self(10);
    pub const FALSE: Self = Self(11);
    pub const TRUE: Self = Self(12);
    /// `boolean`, the interned union `false | true`.
    pub const BOOLEAN: Self = Self(13);

    /// First index handed out for user-created types.
    pub const FIRST_USER: u32 = 14;

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle of a symbol in a [`MemoryOracle`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub u32);

#[derive(Clone, Debug)]
enum TypeData {
    Intrinsic(&'static str),
    Literal(Literal),
    Union {
        members: Vec<TypeId>,
        non_nullable: TypeId,
    },
    Intersection(Vec<TypeId>),
    Object(Box<ObjectData>),
    TypeParameter(TypeParameterInfo<TypeId>),
    Index(TypeId),
    IndexedAccess(TypeId, TypeId),
    Conditional(ConditionalParts<TypeId>),
    Substitution(TypeId, TypeId),
    TemplateLiteral(TemplateParts<TypeId>),
    StringMapping(String, TypeId),
    /// Flags only; no sub-builder understands it.
    Opaque(&'static str),
}

#[derive(Clone, Debug, Default)]
struct ObjectData {
    name: Option<String>,
    qualified_name: Option<String>,
    properties: Vec<SymbolId>,
    calls: Vec<Signature<TypeId, SymbolId>>,
    constructs: Vec<Signature<TypeId, SymbolId>>,
    type_args: Vec<TypeId>,
    array_like: Option<ArrayLike>,
}

#[derive(Clone, Copy, Debug)]
struct ArrayLike {
    tuple: bool,
    readonly: bool,
}

#[derive(Clone, Debug)]
struct TypeEntry {
    flags: TypeFlags,
    object_flags: ObjectFlags,
    data: TypeData,
    alias: Option<AliasInfo<TypeId>>,
    sources: Vec<String>,
}

#[derive(Clone, Debug)]
struct SymbolEntry {
    name: String,
    ty: TypeId,
    optional: bool,
    readonly: bool,
    documentation: Documentation,
    sources: Vec<String>,
}

/// Description of a property or parameter symbol.
#[derive(Clone, Debug)]
pub struct PropertySpec {
    name: String,
    ty: TypeId,
    optional: bool,
    readonly: bool,
    documentation: Documentation,
    sources: Vec<String>,
}

impl PropertySpec {
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            readonly: false,
            documentation: Documentation::default(),
            sources: Vec::new(),
        }
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    #[must_use]
    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    #[must_use]
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.documentation.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn tag(mut self, name: impl Into<String>, content: Option<&str>) -> Self {
        self.documentation.tags.push(DocTag {
            name: name.into(),
            content: content.map(str::to_string),
        });
        self
    }

    #[must_use]
    pub fn source(mut self, path: impl Into<String>) -> Self {
        self.sources.push(path.into());
        self
    }
}

/// In-memory [`TypeOracle`].
#[derive(Clone, Debug)]
pub struct MemoryOracle {
    types: Vec<TypeEntry>,
    symbols: Vec<SymbolEntry>,
    unions: FxHashMap<TypeListKey, TypeId>,
}

impl Default for MemoryOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryOracle {
    pub fn new() -> Self {
        let mut oracle = Self {
            types: Vec::with_capacity(64),
            symbols: Vec::new(),
            unions: FxHashMap::default(),
        };
        oracle.register_intrinsics();
        oracle
    }

    fn register_intrinsics(&mut self) {
        let intrinsics: [(TypeFlags, &'static str); 11] = [
            (TypeFlags::ANY, "any"),
            (TypeFlags::UNKNOWN, "unknown"),
            (TypeFlags::NEVER, "never"),
            (TypeFlags::NULL, "null"),
            (TypeFlags::UNDEFINED, "undefined"),
            (TypeFlags::VOID, "void"),
            (TypeFlags::STRING, "string"),
            (TypeFlags::NUMBER, "number"),
            (TypeFlags::BIGINT, "bigint"),
            (TypeFlags::ES_SYMBOL, "symbol"),
            (TypeFlags::NON_PRIMITIVE, "object"),
        ];
        for (flags, name) in intrinsics {
            self.push(flags, TypeData::Intrinsic(name));
        }
        self.push(
            TypeFlags::BOOLEAN_LITERAL,
            TypeData::Literal(Literal::Boolean(false)),
        );
        self.push(
            TypeFlags::BOOLEAN_LITERAL,
            TypeData::Literal(Literal::Boolean(true)),
        );
        let boolean = self.push(
            TypeFlags::BOOLEAN | TypeFlags::UNION,
            TypeData::Union {
                members: vec![TypeId::FALSE, TypeId::TRUE],
                non_nullable: TypeId::BOOLEAN,
            },
        );
        debug_assert_eq!(boolean, TypeId::BOOLEAN);
        debug_assert_eq!(self.types.len() as u32, TypeId::FIRST_USER);
        self.unions
            .insert(union_key(&[TypeId::FALSE, TypeId::TRUE]), TypeId::BOOLEAN);
    }

    fn push(&mut self, flags: TypeFlags, data: TypeData) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(TypeEntry {
            flags,
            object_flags: ObjectFlags::empty(),
            data,
            alias: None,
            sources: Vec::new(),
        });
        id
    }

    fn push_object(&mut self, object_flags: ObjectFlags, object: ObjectData) -> TypeId {
        let id = self.push(TypeFlags::OBJECT, TypeData::Object(Box::new(object)));
        self.types[id.index()].object_flags = object_flags;
        id
    }

    fn entry(&self, ty: TypeId) -> &TypeEntry {
        &self.types[ty.index()]
    }

    fn symbol(&self, symbol: SymbolId) -> &SymbolEntry {
        &self.symbols[symbol.0 as usize]
    }

    fn object(&self, ty: TypeId) -> Option<&ObjectData> {
        match &self.entry(ty).data {
            TypeData::Object(object) => Some(object),
            _ => None,
        }
    }

    /// # Panics
    ///
    /// Panics if `ty` is not an object type; construction helpers only
    /// accept object handles created by this oracle.
    fn object_mut(&mut self, ty: TypeId) -> &mut ObjectData {
        match &mut self.types[ty.index()].data {
            TypeData::Object(object) => object,
            other => panic!("type {ty:?} is not an object type: {other:?}"),
        }
    }

    /// Number of types in the arena, intrinsics included.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    // ------------------------------------------------------------------
    // Symbols
    // ------------------------------------------------------------------

    /// Create a free-standing symbol (parameter, export, event, slot).
    pub fn symbol_from(&mut self, spec: PropertySpec) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(SymbolEntry {
            name: spec.name,
            ty: spec.ty,
            optional: spec.optional,
            readonly: spec.readonly,
            documentation: spec.documentation,
            sources: spec.sources,
        });
        id
    }

    /// Create a parameter symbol.
    pub fn parameter(&mut self, name: &str, ty: TypeId) -> SymbolId {
        self.symbol_from(PropertySpec::new(name, ty))
    }

    /// Append a property to an object type.
    ///
    /// Properties can be added after the object has been referenced, which is
    /// how recursive interfaces are assembled.
    pub fn add_property(&mut self, owner: TypeId, spec: PropertySpec) -> SymbolId {
        let symbol = self.symbol_from(spec);
        self.object_mut(owner).properties.push(symbol);
        symbol
    }

    // ------------------------------------------------------------------
    // Literals
    // ------------------------------------------------------------------

    pub fn literal_string(&mut self, value: &str) -> TypeId {
        self.push(
            TypeFlags::STRING_LITERAL,
            TypeData::Literal(Literal::String(value.to_string())),
        )
    }

    pub fn literal_number(&mut self, value: f64) -> TypeId {
        self.push(
            TypeFlags::NUMBER_LITERAL,
            TypeData::Literal(Literal::Number(value)),
        )
    }

    pub fn literal_bigint(&mut self, digits: &str) -> TypeId {
        self.push(
            TypeFlags::BIGINT_LITERAL,
            TypeData::Literal(Literal::BigInt(digits.to_string())),
        )
    }

    pub fn unique_symbol(&mut self, description: &str) -> TypeId {
        self.push(
            TypeFlags::UNIQUE_ES_SYMBOL,
            TypeData::Literal(Literal::UniqueSymbol(description.to_string())),
        )
    }

    // ------------------------------------------------------------------
    // Unions and intersections
    // ------------------------------------------------------------------

    /// Intern a union.
    ///
    /// Members that are unions themselves are flattened (aliases are lost,
    /// as in a checker) and duplicates are dropped, keeping first-occurrence
    /// order. A single remaining member is returned as is.
    pub fn union(&mut self, members: Vec<TypeId>) -> TypeId {
        let mut flat: Vec<TypeId> = Vec::with_capacity(members.len());
        for member in members {
            match &self.entry(member).data {
                TypeData::Union { members: inner, .. } => {
                    for &m in inner {
                        if !flat.contains(&m) {
                            flat.push(m);
                        }
                    }
                }
                _ => {
                    if !flat.contains(&member) {
                        flat.push(member);
                    }
                }
            }
        }

        match flat.len() {
            0 => return TypeId::NEVER,
            1 => return flat[0],
            _ => {}
        }

        let key = union_key(&flat);
        if let Some(&existing) = self.unions.get(&key) {
            trace!(?existing, "union interned");
            return existing;
        }

        let non_nullish: Vec<TypeId> = flat
            .iter()
            .copied()
            .filter(|&m| !self.entry(m).flags.is_nullish())
            .collect();
        let non_nullable = if non_nullish.len() == flat.len() {
            None
        } else {
            Some(self.union(non_nullish))
        };

        let is_enum = flat
            .iter()
            .all(|&m| self.entry(m).flags.contains(TypeFlags::ENUM_LITERAL));
        let mut flags = TypeFlags::UNION;
        if is_enum {
            flags |= TypeFlags::ENUM;
        }

        let id = self.push(
            flags,
            TypeData::Union {
                members: flat,
                non_nullable: TypeId::NEVER,
            },
        );
        if let TypeData::Union { non_nullable: slot, .. } = &mut self.types[id.index()].data {
            *slot = non_nullable.unwrap_or(id);
        }
        self.unions.insert(key, id);
        id
    }

    pub fn intersection(&mut self, members: Vec<TypeId>) -> TypeId {
        self.push(TypeFlags::INTERSECTION, TypeData::Intersection(members))
    }

    /// A union enum: one enum-literal member per `(name, value)`.
    pub fn enum_type(&mut self, name: &str, members: Vec<Literal>) -> TypeId {
        let literals: Vec<TypeId> = members
            .into_iter()
            .map(|value| {
                let flags = match value {
                    Literal::String(_) => TypeFlags::STRING_LITERAL,
                    _ => TypeFlags::NUMBER_LITERAL,
                };
                self.push(flags | TypeFlags::ENUM_LITERAL, TypeData::Literal(value))
            })
            .collect();
        let id = self.union(literals);
        self.alias(id, name, Vec::new());
        id
    }

    // ------------------------------------------------------------------
    // Object types
    // ------------------------------------------------------------------

    /// A named interface with no members yet.
    pub fn interface(&mut self, name: &str) -> TypeId {
        self.push_object(
            ObjectFlags::INTERFACE,
            ObjectData {
                name: Some(name.to_string()),
                ..ObjectData::default()
            },
        )
    }

    /// An instantiation of a generic interface, e.g. `Map<string, number>`.
    pub fn generic_instance(&mut self, name: &str, type_args: Vec<TypeId>) -> TypeId {
        self.push_object(
            ObjectFlags::INTERFACE | ObjectFlags::REFERENCE,
            ObjectData {
                name: Some(name.to_string()),
                type_args,
                ..ObjectData::default()
            },
        )
    }

    /// A type literal (`{ ... }`), reported with the `__type` symbol name.
    pub fn object_literal(&mut self) -> TypeId {
        self.push_object(
            ObjectFlags::ANONYMOUS,
            ObjectData {
                name: Some("__type".to_string()),
                ..ObjectData::default()
            },
        )
    }

    /// The type of an object literal expression, reported as `__object`.
    pub fn object_expression(&mut self) -> TypeId {
        self.push_object(
            ObjectFlags::ANONYMOUS | ObjectFlags::OBJECT_LITERAL,
            ObjectData {
                name: Some("__object".to_string()),
                ..ObjectData::default()
            },
        )
    }

    /// An anonymous instantiation of a generic shape (no alias, no name).
    pub fn instantiated_anonymous(&mut self, type_args: Vec<TypeId>) -> TypeId {
        self.push_object(
            ObjectFlags::ANONYMOUS | ObjectFlags::INSTANTIATED,
            ObjectData {
                type_args,
                ..ObjectData::default()
            },
        )
    }

    /// A function type literal with the given call signatures.
    pub fn function(&mut self, calls: Vec<Signature<TypeId, SymbolId>>) -> TypeId {
        self.push_object(
            ObjectFlags::ANONYMOUS,
            ObjectData {
                name: Some("__type".to_string()),
                calls,
                ..ObjectData::default()
            },
        )
    }

    /// The constructor type of a class (`typeof Name`).
    pub fn class(&mut self, name: &str, constructs: Vec<Signature<TypeId, SymbolId>>) -> TypeId {
        self.push_object(
            ObjectFlags::ANONYMOUS,
            ObjectData {
                name: Some(name.to_string()),
                constructs,
                ..ObjectData::default()
            },
        )
    }

    pub fn signature(
        parameters: Vec<SymbolId>,
        return_type: TypeId,
    ) -> Signature<TypeId, SymbolId> {
        Signature {
            parameters,
            return_type,
            has_rest: false,
        }
    }

    pub fn array(&mut self, element: TypeId) -> TypeId {
        self.array_like("Array", vec![element], false, false)
    }

    pub fn readonly_array(&mut self, element: TypeId) -> TypeId {
        self.array_like("ReadonlyArray", vec![element], false, true)
    }

    pub fn tuple(&mut self, elements: Vec<TypeId>) -> TypeId {
        self.array_like("__tuple", elements, true, false)
    }

    pub fn readonly_tuple(&mut self, elements: Vec<TypeId>) -> TypeId {
        self.array_like("__tuple", elements, true, true)
    }

    fn array_like(
        &mut self,
        name: &str,
        type_args: Vec<TypeId>,
        tuple: bool,
        readonly: bool,
    ) -> TypeId {
        let mut object_flags = ObjectFlags::REFERENCE;
        if tuple {
            object_flags |= ObjectFlags::TUPLE;
        }
        self.push_object(
            object_flags,
            ObjectData {
                name: Some(name.to_string()),
                type_args,
                array_like: Some(ArrayLike { tuple, readonly }),
                ..ObjectData::default()
            },
        )
    }

    // ------------------------------------------------------------------
    // Instantiable types
    // ------------------------------------------------------------------

    pub fn type_parameter(&mut self, name: &str) -> TypeId {
        self.type_parameter_with(TypeParameterInfo {
            name: name.to_string(),
            is_const: false,
            constraint: None,
            default: None,
        })
    }

    pub fn type_parameter_with(&mut self, info: TypeParameterInfo<TypeId>) -> TypeId {
        self.push(TypeFlags::TYPE_PARAMETER, TypeData::TypeParameter(info))
    }

    pub fn index(&mut self, operand: TypeId) -> TypeId {
        self.push(TypeFlags::INDEX, TypeData::Index(operand))
    }

    pub fn indexed_access(&mut self, object: TypeId, index: TypeId) -> TypeId {
        self.push(TypeFlags::INDEXED_ACCESS, TypeData::IndexedAccess(object, index))
    }

    pub fn conditional(&mut self, parts: ConditionalParts<TypeId>) -> TypeId {
        self.push(TypeFlags::CONDITIONAL, TypeData::Conditional(parts))
    }

    pub fn substitution(&mut self, base: TypeId, constraint: TypeId) -> TypeId {
        self.push(TypeFlags::SUBSTITUTION, TypeData::Substitution(base, constraint))
    }

    pub fn template_literal(&mut self, texts: Vec<&str>, types: Vec<TypeId>) -> TypeId {
        debug_assert_eq!(texts.len(), types.len() + 1);
        self.push(
            TypeFlags::TEMPLATE_LITERAL,
            TypeData::TemplateLiteral(TemplateParts {
                texts: texts.into_iter().map(str::to_string).collect(),
                types,
            }),
        )
    }

    pub fn string_mapping(&mut self, intrinsic: &str, operand: TypeId) -> TypeId {
        self.push(
            TypeFlags::STRING_MAPPING,
            TypeData::StringMapping(intrinsic.to_string(), operand),
        )
    }

    /// A type that carries only `flags`, for exercising unsupported shapes.
    pub fn opaque(&mut self, flags: TypeFlags, display: &'static str) -> TypeId {
        self.push(flags, TypeData::Opaque(display))
    }

    // ------------------------------------------------------------------
    // Metadata
    // ------------------------------------------------------------------

    /// Attach an alias identity (`type name<args> = ty`).
    pub fn alias(&mut self, ty: TypeId, name: &str, type_args: Vec<TypeId>) {
        self.types[ty.index()].alias = Some(AliasInfo {
            name: name.to_string(),
            qualified_name: name.to_string(),
            type_args,
            source: None,
        });
    }

    /// Set the file declaring the alias of `ty`.
    pub fn set_alias_source(&mut self, ty: TypeId, path: &str) {
        if let Some(alias) = &mut self.types[ty.index()].alias {
            alias.source = Some(path.to_string());
        }
    }

    /// Override the fully-qualified name of the alias, or of the type's own
    /// symbol when it has no alias.
    pub fn set_qualified_name(&mut self, ty: TypeId, qualified: &str) {
        let entry = &mut self.types[ty.index()];
        if let Some(alias) = &mut entry.alias {
            alias.qualified_name = qualified.to_string();
        } else if let TypeData::Object(object) = &mut entry.data {
            object.qualified_name = Some(qualified.to_string());
        }
    }

    pub fn add_type_source(&mut self, ty: TypeId, path: &str) {
        self.types[ty.index()].sources.push(path.to_string());
    }

    pub fn add_object_flags(&mut self, ty: TypeId, flags: ObjectFlags) {
        self.types[ty.index()].object_flags |= flags;
    }

    /// Append a call signature to an object type.
    pub fn add_call_signature(&mut self, ty: TypeId, signature: Signature<TypeId, SymbolId>) {
        self.object_mut(ty).calls.push(signature);
    }

    // ------------------------------------------------------------------
    // Display
    // ------------------------------------------------------------------

    fn display(&self, ty: TypeId, depth: u32) -> String {
        if depth > DISPLAY_DEPTH {
            return "...".to_string();
        }
        let entry = self.entry(ty);
        if let Some(alias) = &entry.alias {
            return with_args(
                &alias.name,
                alias.type_args.iter().map(|&t| self.display(t, depth + 1)),
            );
        }
        match &entry.data {
            TypeData::Intrinsic(name) | TypeData::Opaque(name) => (*name).to_string(),
            TypeData::Literal(literal) => display_literal(literal),
            TypeData::Union { members, .. } if ty == TypeId::BOOLEAN || members.is_empty() => {
                "boolean".to_string()
            }
            TypeData::Union { members, .. } => self.join(members, " | ", depth),
            TypeData::Intersection(members) => self.join(members, " & ", depth),
            TypeData::Object(object) => self.display_object(object, depth),
            TypeData::TypeParameter(info) => info.name.clone(),
            TypeData::Index(operand) => format!("keyof {}", self.display(*operand, depth + 1)),
            TypeData::IndexedAccess(object, index) => format!(
                "{}[{}]",
                self.display(*object, depth + 1),
                self.display(*index, depth + 1)
            ),
            TypeData::Conditional(parts) => format!(
                "{} extends {} ? {} : {}",
                self.display(parts.check, depth + 1),
                self.display(parts.extends, depth + 1),
                self.display(parts.true_type, depth + 1),
                self.display(parts.false_type, depth + 1)
            ),
            TypeData::Substitution(base, _) => self.display(*base, depth + 1),
            TypeData::TemplateLiteral(parts) => {
                let mut out = String::from("`");
                for (i, text) in parts.texts.iter().enumerate() {
                    out.push_str(text);
                    if let Some(&t) = parts.types.get(i) {
                        out.push_str("${");
                        out.push_str(&self.display(t, depth + 1));
                        out.push('}');
                    }
                }
                out.push('`');
                out
            }
            TypeData::StringMapping(name, operand) => {
                format!("{name}<{}>", self.display(*operand, depth + 1))
            }
        }
    }

    fn display_object(&self, object: &ObjectData, depth: u32) -> String {
        if let Some(array_like) = object.array_like {
            let prefix = if array_like.readonly { "readonly " } else { "" };
            if array_like.tuple {
                return format!("{prefix}[{}]", self.join(&object.type_args, ", ", depth));
            }
            let element = object
                .type_args
                .first()
                .map(|&t| self.display(t, depth + 1))
                .unwrap_or_else(|| "unknown".to_string());
            return format!("{prefix}{element}[]");
        }
        match object.name.as_deref() {
            Some(name) if !name.starts_with("__") => with_args(
                name,
                object.type_args.iter().map(|&t| self.display(t, depth + 1)),
            ),
            _ => {
                let members: Vec<String> = object
                    .properties
                    .iter()
                    .map(|&p| {
                        let symbol = self.symbol(p);
                        let optional = if symbol.optional { "?" } else { "" };
                        let ty = self.display(symbol.ty, depth + 1);
                        format!("{}{optional}: {ty};", symbol.name)
                    })
                    .collect();
                if members.is_empty() {
                    "{}".to_string()
                } else {
                    format!("{{ {} }}", members.join(" "))
                }
            }
        }
    }

    fn join(&self, members: &[TypeId], separator: &str, depth: u32) -> String {
        members
            .iter()
            .map(|&m| self.display(m, depth + 1))
            .collect::<Vec<_>>()
            .join(separator)
    }
}

fn union_key(members: &[TypeId]) -> TypeListKey {
    let mut key: TypeListKey = members.iter().copied().collect();
    key.sort_unstable();
    key
}

fn with_args(name: &str, args: impl Iterator<Item = String>) -> String {
    let args: Vec<String> = args.collect();
    if args.is_empty() {
        name.to_string()
    } else {
        format!("{name}<{}>", args.join(", "))
    }
}

fn display_literal(literal: &Literal) -> String {
    match literal {
        Literal::String(s) => format!("{s:?}"),
        Literal::Number(n) => n.to_string(),
        Literal::BigInt(digits) => format!("{digits}n"),
        Literal::Boolean(b) => b.to_string(),
        Literal::UniqueSymbol(description) => format!("typeof {description}"),
    }
}

impl TypeOracle for MemoryOracle {
    type Type = TypeId;
    type Symbol = SymbolId;

    fn flags(&self, ty: TypeId) -> TypeFlags {
        self.entry(ty).flags
    }

    fn object_flags(&self, ty: TypeId) -> ObjectFlags {
        self.entry(ty).object_flags
    }

    fn type_to_string(&self, ty: TypeId) -> String {
        self.display(ty, 0)
    }

    fn properties_of(&self, ty: TypeId) -> Vec<SymbolId> {
        self.object(ty)
            .map(|object| object.properties.clone())
            .unwrap_or_default()
    }

    fn call_signatures_of(&self, ty: TypeId) -> Vec<Signature<TypeId, SymbolId>> {
        self.object(ty)
            .map(|object| object.calls.clone())
            .unwrap_or_default()
    }

    fn construct_signatures_of(&self, ty: TypeId) -> Vec<Signature<TypeId, SymbolId>> {
        self.object(ty)
            .map(|object| object.constructs.clone())
            .unwrap_or_default()
    }

    fn alias_of(&self, ty: TypeId) -> Option<AliasInfo<TypeId>> {
        self.entry(ty).alias.clone()
    }

    fn declared_name_of(&self, ty: TypeId) -> Option<String> {
        self.object(ty).and_then(|object| object.name.clone())
    }

    fn qualified_name_of(&self, ty: TypeId) -> Option<String> {
        let object = self.object(ty)?;
        object.qualified_name.clone().or_else(|| object.name.clone())
    }

    fn type_arguments_of(&self, ty: TypeId) -> Vec<TypeId> {
        self.object(ty)
            .map(|object| object.type_args.clone())
            .unwrap_or_default()
    }

    fn is_array_type(&self, ty: TypeId) -> bool {
        self.object(ty)
            .and_then(|object| object.array_like)
            .is_some_and(|array_like| !array_like.tuple)
    }

    fn is_tuple_type(&self, ty: TypeId) -> bool {
        self.object(ty)
            .and_then(|object| object.array_like)
            .is_some_and(|array_like| array_like.tuple)
    }

    fn is_readonly_array_like(&self, ty: TypeId) -> bool {
        self.object(ty)
            .and_then(|object| object.array_like)
            .is_some_and(|array_like| array_like.readonly)
    }

    fn declaration_sources_of(&self, ty: TypeId) -> Vec<String> {
        self.entry(ty).sources.clone()
    }

    fn symbol_declaration_sources_of(&self, symbol: SymbolId) -> Vec<String> {
        self.symbol(symbol).sources.clone()
    }

    fn documentation_of(&self, symbol: SymbolId) -> Documentation {
        self.symbol(symbol).documentation.clone()
    }

    fn symbol_name(&self, symbol: SymbolId) -> String {
        self.symbol(symbol).name.clone()
    }

    fn type_of_symbol(&self, symbol: SymbolId) -> TypeId {
        self.symbol(symbol).ty
    }

    fn is_optional(&self, symbol: SymbolId) -> bool {
        self.symbol(symbol).optional
    }

    fn is_readonly(&self, symbol: SymbolId) -> bool {
        self.symbol(symbol).readonly
    }

    fn types_of(&self, ty: TypeId) -> Vec<TypeId> {
        match &self.entry(ty).data {
            TypeData::Union { members, .. } | TypeData::Intersection(members) => members.clone(),
            _ => Vec::new(),
        }
    }

    fn non_nullable_of(&self, ty: TypeId) -> TypeId {
        match &self.entry(ty).data {
            TypeData::Union { non_nullable, .. } => *non_nullable,
            _ if self.entry(ty).flags.is_nullish() => TypeId::NEVER,
            _ => ty,
        }
    }

    fn literal_value_of(&self, ty: TypeId) -> Option<Literal> {
        match &self.entry(ty).data {
            TypeData::Literal(literal) => Some(literal.clone()),
            _ => None,
        }
    }

    fn type_parameter_of(&self, ty: TypeId) -> Option<TypeParameterInfo<TypeId>> {
        match &self.entry(ty).data {
            TypeData::TypeParameter(info) => Some(info.clone()),
            _ => None,
        }
    }

    fn index_operand_of(&self, ty: TypeId) -> Option<TypeId> {
        match &self.entry(ty).data {
            TypeData::Index(operand) => Some(*operand),
            _ => None,
        }
    }

    fn indexed_access_of(&self, ty: TypeId) -> Option<(TypeId, TypeId)> {
        match &self.entry(ty).data {
            TypeData::IndexedAccess(object, index) => Some((*object, *index)),
            _ => None,
        }
    }

    fn conditional_of(&self, ty: TypeId) -> Option<ConditionalParts<TypeId>> {
        match &self.entry(ty).data {
            TypeData::Conditional(parts) => Some(*parts),
            _ => None,
        }
    }

    fn substitution_of(&self, ty: TypeId) -> Option<(TypeId, TypeId)> {
        match &self.entry(ty).data {
            TypeData::Substitution(base, constraint) => Some((*base, *constraint)),
            _ => None,
        }
    }

    fn template_literal_of(&self, ty: TypeId) -> Option<TemplateParts<TypeId>> {
        match &self.entry(ty).data {
            TypeData::TemplateLiteral(parts) => Some(parts.clone()),
            _ => None,
        }
    }

    fn string_mapping_of(&self, ty: TypeId) -> Option<(String, TypeId)> {
        match &self.entry(ty).data {
            TypeData::StringMapping(name, operand) => Some((name.clone(), *operand)),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "tests/memory_tests.rs"]
mod tests;
