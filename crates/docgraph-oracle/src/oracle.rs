//! The query interface the builder consumes.

use std::fmt::Debug;
use std::hash::Hash;

use crate::flags::{ObjectFlags, TypeFlags};
use crate::kind::TypeKind;

/// A literal value carried by a literal type.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    String(String),
    Number(f64),
    /// Decimal digits without the `n` suffix.
    BigInt(String),
    Boolean(bool),
    /// Description of a `unique symbol`.
    UniqueSymbol(String),
}

/// Alias identity of a type (`type Name<Args> = ...`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliasInfo<T> {
    /// Name as written at the declaration.
    pub name: String,
    /// Fully-qualified name, e.g. `"/src/Button.svelte".Props`.
    pub qualified_name: String,
    pub type_args: Vec<T>,
    /// File declaring the alias, if known.
    pub source: Option<String>,
}

/// One call or construct signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature<T, S> {
    pub parameters: Vec<S>,
    pub return_type: T,
    /// The last parameter is a rest parameter.
    pub has_rest: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeParameterInfo<T> {
    pub name: String,
    pub is_const: bool,
    pub constraint: Option<T>,
    pub default: Option<T>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConditionalParts<T> {
    pub check: T,
    pub extends: T,
    pub true_type: T,
    pub false_type: T,
}

/// `` `a${T}b${U}c` `` is texts `["a", "b", "c"]` and types `[T, U]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateParts<T> {
    pub texts: Vec<String>,
    pub types: Vec<T>,
}

/// A documentation-comment tag, e.g. `@default 1`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocTag {
    pub name: String,
    pub content: Option<String>,
}

/// Documentation comment attached to a symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Documentation {
    pub text: Option<String>,
    pub tags: Vec<DocTag>,
}

impl Documentation {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.tags.is_empty()
    }
}

/// Read-only view of a checked program.
///
/// All queries are synchronous and free of side effects from the caller's
/// point of view. `Type` and `Symbol` are opaque handles whose equality is
/// handle identity: two handles compare equal only if they denote the same
/// type object of the program.
///
/// Queries for kind-specific operands return `None` when the type is not of
/// that kind; the builder treats a missing operand for a reported kind as a
/// fatal shape error.
pub trait TypeOracle {
    type Type: Copy + Eq + Hash + Debug;
    type Symbol: Copy + Eq + Hash + Debug;

    fn flags(&self, ty: Self::Type) -> TypeFlags;

    fn object_flags(&self, ty: Self::Type) -> ObjectFlags;

    /// Canonical string form (`string`, `"a"`, `T`, `1n`, ...).
    fn type_to_string(&self, ty: Self::Type) -> String;

    fn properties_of(&self, ty: Self::Type) -> Vec<Self::Symbol>;

    fn call_signatures_of(&self, ty: Self::Type) -> Vec<Signature<Self::Type, Self::Symbol>>;

    fn construct_signatures_of(&self, ty: Self::Type)
    -> Vec<Signature<Self::Type, Self::Symbol>>;

    fn alias_of(&self, ty: Self::Type) -> Option<AliasInfo<Self::Type>>;

    /// Name of the type's own symbol. Type literals report `__type`.
    fn declared_name_of(&self, ty: Self::Type) -> Option<String>;

    /// Fully-qualified name of the type's own symbol.
    fn qualified_name_of(&self, ty: Self::Type) -> Option<String> {
        self.declared_name_of(ty)
    }

    /// Type arguments of a generic instantiation (`Array<string>` → `[string]`,
    /// tuples → element types). Empty for everything else.
    fn type_arguments_of(&self, ty: Self::Type) -> Vec<Self::Type>;

    fn is_array_type(&self, ty: Self::Type) -> bool;

    fn is_tuple_type(&self, ty: Self::Type) -> bool;

    /// `readonly T[]`, `ReadonlyArray<T>` or `readonly [..]`.
    fn is_readonly_array_like(&self, ty: Self::Type) -> bool;

    /// Files declaring the type's own symbol.
    fn declaration_sources_of(&self, ty: Self::Type) -> Vec<String>;

    /// Files declaring a symbol (all merged declarations).
    fn symbol_declaration_sources_of(&self, symbol: Self::Symbol) -> Vec<String>;

    fn documentation_of(&self, symbol: Self::Symbol) -> Documentation;

    fn symbol_name(&self, symbol: Self::Symbol) -> String;

    fn type_of_symbol(&self, symbol: Self::Symbol) -> Self::Type;

    fn is_optional(&self, symbol: Self::Symbol) -> bool;

    fn is_readonly(&self, symbol: Self::Symbol) -> bool;

    /// Members of a union or intersection, in checker order.
    fn types_of(&self, ty: Self::Type) -> Vec<Self::Type>;

    /// The type with `null`, `undefined` and `void` removed.
    fn non_nullable_of(&self, ty: Self::Type) -> Self::Type;

    fn literal_value_of(&self, ty: Self::Type) -> Option<Literal>;

    fn type_parameter_of(&self, ty: Self::Type) -> Option<TypeParameterInfo<Self::Type>>;

    /// Operand of `keyof T`.
    fn index_operand_of(&self, ty: Self::Type) -> Option<Self::Type>;

    /// `(object, index)` of `T[K]`.
    fn indexed_access_of(&self, ty: Self::Type) -> Option<(Self::Type, Self::Type)>;

    fn conditional_of(&self, ty: Self::Type) -> Option<ConditionalParts<Self::Type>>;

    /// `(base, constraint)` of a substitution type.
    fn substitution_of(&self, ty: Self::Type) -> Option<(Self::Type, Self::Type)>;

    fn template_literal_of(&self, ty: Self::Type) -> Option<TemplateParts<Self::Type>>;

    /// `(intrinsic name, operand)` of `Uppercase<T>` and friends.
    fn string_mapping_of(&self, ty: Self::Type) -> Option<(String, Self::Type)>;

    /// Classify `ty` for the builder's dispatcher.
    ///
    /// Flags are tested in priority order: `boolean` is itself a union of
    /// `true | false` and must win over the union flag, and literal flags win
    /// over enum flags because enum members are literal types.
    fn kind_of(&self, ty: Self::Type) -> TypeKind {
        let flags = self.flags(ty);
        if let Some(kind) = TypeKind::from_flags(flags) {
            return kind;
        }
        if !flags.intersects(TypeFlags::OBJECT) {
            return TypeKind::Unrecognized;
        }
        if self.is_array_type(ty) {
            return TypeKind::Array;
        }
        if self.is_tuple_type(ty) {
            return TypeKind::Tuple;
        }
        let has_calls = !self.call_signatures_of(ty).is_empty();
        if has_calls && self.properties_of(ty).is_empty() {
            return TypeKind::Function;
        }
        if !self.construct_signatures_of(ty).is_empty() {
            return TypeKind::Constructible;
        }
        TypeKind::Interface
    }
}
