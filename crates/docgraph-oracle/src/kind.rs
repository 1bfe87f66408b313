//! Kind classification used by the builder's dispatcher.

use crate::flags::TypeFlags;

/// What the builder should construct for a type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    // Base kinds
    Any,
    Unknown,
    Never,
    Null,
    Undefined,
    Void,
    Boolean,
    Number,
    String,
    BigInt,
    Symbol,
    /// `object` (non-primitive).
    Object,

    Literal,

    // Structured kinds
    Array,
    Tuple,
    Function,
    Constructible,
    Interface,
    Intersection,
    Union,

    // Instantiable kinds
    TypeParameter,
    Index,
    IndexedAccess,
    Conditional,
    Substitution,
    TemplateLiteral,
    StringMapping,

    /// Flag combination the dispatcher has no sub-builder for.
    Unrecognized,
}

impl TypeKind {
    /// Classify from flags alone.
    ///
    /// Returns `None` for object types, which need signature and shape
    /// queries to tell arrays, tuples, functions and interfaces apart.
    pub fn from_flags(flags: TypeFlags) -> Option<Self> {
        const ORDER: &[(TypeFlags, TypeKind)] = &[
            (TypeFlags::ANY, TypeKind::Any),
            (TypeFlags::UNKNOWN, TypeKind::Unknown),
            (TypeFlags::NEVER, TypeKind::Never),
            (TypeFlags::NULL, TypeKind::Null),
            (TypeFlags::UNDEFINED, TypeKind::Undefined),
            (TypeFlags::VOID, TypeKind::Void),
            (TypeFlags::BOOLEAN, TypeKind::Boolean),
            (TypeFlags::LITERAL, TypeKind::Literal),
            (TypeFlags::UNIQUE_ES_SYMBOL, TypeKind::Literal),
            (TypeFlags::STRING, TypeKind::String),
            (TypeFlags::NUMBER, TypeKind::Number),
            (TypeFlags::BIGINT, TypeKind::BigInt),
            (TypeFlags::ES_SYMBOL, TypeKind::Symbol),
            (TypeFlags::NON_PRIMITIVE, TypeKind::Object),
            (TypeFlags::UNION, TypeKind::Union),
            (TypeFlags::INTERSECTION, TypeKind::Intersection),
            // Non-union enums (computed members) are plain numbers.
            (TypeFlags::ENUM, TypeKind::Number),
            (TypeFlags::TYPE_PARAMETER, TypeKind::TypeParameter),
            (TypeFlags::INDEX, TypeKind::Index),
            (TypeFlags::INDEXED_ACCESS, TypeKind::IndexedAccess),
            (TypeFlags::CONDITIONAL, TypeKind::Conditional),
            (TypeFlags::SUBSTITUTION, TypeKind::Substitution),
            (TypeFlags::TEMPLATE_LITERAL, TypeKind::TemplateLiteral),
            (TypeFlags::STRING_MAPPING, TypeKind::StringMapping),
        ];

        ORDER
            .iter()
            .find(|(mask, _)| flags.intersects(*mask))
            .map(|&(_, kind)| kind)
    }

    /// Kinds that carry no payload beyond their tag.
    pub const fn is_base(self) -> bool {
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

    pub const fn as_str(self) -> &'static str {
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
            Self::Literal => "literal",
            Self::Array => "array",
            Self::Tuple => "tuple",
            Self::Function => "function",
            Self::Constructible => "constructible",
            Self::Interface => "interface",
            Self::Intersection => "intersection",
            Self::Union => "union",
            Self::TypeParameter => "type-parameter",
            Self::Index => "index",
            Self::IndexedAccess => "indexed-access",
            Self::Conditional => "conditional",
            Self::Substitution => "substitution",
            Self::TemplateLiteral => "template-literal",
            Self::StringMapping => "string-mapping",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
