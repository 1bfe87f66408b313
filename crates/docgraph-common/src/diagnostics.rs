//! Stable error identifiers.
//!
//! Each fatal condition of the extractor maps to one `ErrorCode`. The string
//! form and the numeric code never change once published, so tooling can key
//! documentation and suppression lists on them.

/// Location of the error reference, relative to the repository root.
pub const ERROR_REFERENCE: &str = "docs/errors.md";

/// Stable identifier of a fatal extractor error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Builder: unrecoverable shape errors
    UnsupportedTypeKind,
    MissingSignature,
    MissingTypeArgument,
    MissingOracleData,
    DepthExceeded,
    UnresolvedReference,

    // Codec: input contract violations
    MalformedTransport,
    ContainerMismatch,
    DuplicateKey,
    DanglingReference,
    MissingRoleField,
    InvalidProp,

    // Configuration
    InvalidConfig,
}

impl ErrorCode {
    pub const ALL: [Self; 13] = [
        Self::UnsupportedTypeKind,
        Self::MissingSignature,
        Self::MissingTypeArgument,
        Self::MissingOracleData,
        Self::DepthExceeded,
        Self::UnresolvedReference,
        Self::MalformedTransport,
        Self::ContainerMismatch,
        Self::DuplicateKey,
        Self::DanglingReference,
        Self::MissingRoleField,
        Self::InvalidProp,
        Self::InvalidConfig,
    ];

    /// Kebab-case identifier, e.g. `unsupported-type-kind`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnsupportedTypeKind => "unsupported-type-kind",
            Self::MissingSignature => "missing-signature",
            Self::MissingTypeArgument => "missing-type-argument",
            Self::MissingOracleData => "missing-oracle-data",
            Self::DepthExceeded => "depth-exceeded",
            Self::UnresolvedReference => "unresolved-reference",
            Self::MalformedTransport => "malformed-transport",
            Self::ContainerMismatch => "container-mismatch",
            Self::DuplicateKey => "duplicate-key",
            Self::DanglingReference => "dangling-reference",
            Self::MissingRoleField => "missing-role-field",
            Self::InvalidProp => "invalid-prop",
            Self::InvalidConfig => "invalid-config",
        }
    }

    /// Numeric code. Builder errors are 1xxx, codec errors 2xxx, config 3xxx.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::UnsupportedTypeKind => 1001,
            Self::MissingSignature => 1002,
            Self::MissingTypeArgument => 1003,
            Self::MissingOracleData => 1004,
            Self::DepthExceeded => 1005,
            Self::UnresolvedReference => 1006,
            Self::MalformedTransport => 2001,
            Self::ContainerMismatch => 2002,
            Self::DuplicateKey => 2003,
            Self::DanglingReference => 2004,
            Self::MissingRoleField => 2005,
            Self::InvalidProp => 2006,
            Self::InvalidConfig => 3001,
        }
    }

    /// Link to the reference entry of this error.
    #[must_use]
    pub fn docs_url(self) -> String {
        format!("{ERROR_REFERENCE}#{}", self.as_str())
    }

    /// Look up a code by its kebab-case identifier.
    #[must_use]
    pub fn from_str_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == id)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DG{}", self.code())
    }
}
