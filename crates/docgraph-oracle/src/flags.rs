//! Type and object flags reported by the oracle.
//!
//! The bit layout follows the host checker so adapters can pass raw flag
//! words through without translation.

use bitflags::bitflags;

bitflags! {
    /// Primary classification of a type.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u32 {
        const ANY = 1 << 0;
        const UNKNOWN = 1 << 1;
        const STRING = 1 << 2;
        const NUMBER = 1 << 3;
        const BOOLEAN = 1 << 4;
        const ENUM = 1 << 5;
        const BIGINT = 1 << 6;
        const STRING_LITERAL = 1 << 7;
        const NUMBER_LITERAL = 1 << 8;
        const BOOLEAN_LITERAL = 1 << 9;
        const ENUM_LITERAL = 1 << 10;
        const BIGINT_LITERAL = 1 << 11;
        const ES_SYMBOL = 1 << 12;
        const UNIQUE_ES_SYMBOL = 1 << 13;
        const VOID = 1 << 14;
        const UNDEFINED = 1 << 15;
        const NULL = 1 << 16;
        const NEVER = 1 << 17;
        const TYPE_PARAMETER = 1 << 18;
        const OBJECT = 1 << 19;
        const UNION = 1 << 20;
        const INTERSECTION = 1 << 21;
        const INDEX = 1 << 22;
        const INDEXED_ACCESS = 1 << 23;
        const CONDITIONAL = 1 << 24;
        const SUBSTITUTION = 1 << 25;
        const NON_PRIMITIVE = 1 << 26;
        const TEMPLATE_LITERAL = 1 << 27;
        const STRING_MAPPING = 1 << 28;

        const LITERAL = Self::STRING_LITERAL.bits()
            | Self::NUMBER_LITERAL.bits()
            | Self::BIGINT_LITERAL.bits()
            | Self::BOOLEAN_LITERAL.bits();
        const UNIT = Self::LITERAL.bits()
            | Self::UNIQUE_ES_SYMBOL.bits()
            | Self::NULLABLE.bits()
            | Self::VOID.bits();
        const NULLABLE = Self::UNDEFINED.bits() | Self::NULL.bits();
        const STRING_LIKE = Self::STRING.bits()
            | Self::STRING_LITERAL.bits()
            | Self::TEMPLATE_LITERAL.bits()
            | Self::STRING_MAPPING.bits();
        const NUMBER_LIKE = Self::NUMBER.bits() | Self::NUMBER_LITERAL.bits() | Self::ENUM.bits();
        const BIGINT_LIKE = Self::BIGINT.bits() | Self::BIGINT_LITERAL.bits();
        const BOOLEAN_LIKE = Self::BOOLEAN.bits() | Self::BOOLEAN_LITERAL.bits();
        const ENUM_LIKE = Self::ENUM.bits() | Self::ENUM_LITERAL.bits();
        const ES_SYMBOL_LIKE = Self::ES_SYMBOL.bits() | Self::UNIQUE_ES_SYMBOL.bits();
        const VOID_LIKE = Self::VOID.bits() | Self::UNDEFINED.bits();
        const UNION_OR_INTERSECTION = Self::UNION.bits() | Self::INTERSECTION.bits();
        const INSTANTIABLE = Self::TYPE_PARAMETER.bits()
            | Self::INDEX.bits()
            | Self::INDEXED_ACCESS.bits()
            | Self::CONDITIONAL.bits()
            | Self::SUBSTITUTION.bits()
            | Self::TEMPLATE_LITERAL.bits()
            | Self::STRING_MAPPING.bits();
    }
}

impl TypeFlags {
    /// Members the nullable re-assembly step strips from a union.
    pub const NULLISH_MEMBER: Self = Self::NULL.union(Self::UNDEFINED).union(Self::VOID);

    /// Kinds whose canonical string form is already a unique name.
    pub const SAFE_TO_NAME: Self = Self::ANY
        .union(Self::UNKNOWN)
        .union(Self::STRING_LIKE)
        .union(Self::NUMBER_LIKE)
        .union(Self::BIGINT_LIKE)
        .union(Self::BOOLEAN_LIKE)
        .union(Self::ENUM_LIKE)
        .union(Self::VOID_LIKE)
        .union(Self::NULL)
        .union(Self::ES_SYMBOL_LIKE)
        .union(Self::TYPE_PARAMETER)
        .union(Self::NEVER);

    /// `null`, `undefined` or `void`.
    #[inline]
    pub fn is_nullish(self) -> bool {
        self.intersects(Self::NULLISH_MEMBER)
    }
}

bitflags! {
    /// Secondary classification of object types.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ObjectFlags: u32 {
        const CLASS = 1 << 0;
        const INTERFACE = 1 << 1;
        /// Instantiation of a generic class or interface (`Array<T>`, tuples).
        const REFERENCE = 1 << 2;
        const TUPLE = 1 << 3;
        const ANONYMOUS = 1 << 4;
        const MAPPED = 1 << 5;
        const INSTANTIATED = 1 << 6;
        const OBJECT_LITERAL = 1 << 7;
        const EVOLVING_ARRAY = 1 << 8;
        const REVERSE_MAPPED = 1 << 10;
        const JSX_ATTRIBUTES = 1 << 11;

        const CLASS_OR_INTERFACE = Self::CLASS.bits() | Self::INTERFACE.bits();
    }
}
