use docgraph_common::ErrorCode;
use docgraph_oracle::TypeKind;

/// Fatal shape error. Aborts the parse.
///
/// `display` fields hold the oracle's canonical string form of the offending
/// type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("unsupported type shape `{display}` (flags {flags})")]
    UnsupportedTypeKind { flags: String, display: String },

    #[error("{kind} type `{display}` has no {signature} signature")]
    MissingSignature {
        kind: TypeKind,
        signature: &'static str,
        display: String,
    },

    #[error("array type `{display}` has no element type argument")]
    MissingTypeArgument { display: String },

    #[error("oracle reported {kind} for `{display}` but returned no {what}")]
    MissingOracleData {
        kind: TypeKind,
        what: &'static str,
        display: String,
    },

    #[error("type `{display}` nests deeper than {max_depth} levels")]
    DepthExceeded { max_depth: u32, display: String },

    #[error("registry entry `{name}` was reserved but never built")]
    UnresolvedReference { name: String },
}

impl BuildError {
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedTypeKind { .. } => ErrorCode::UnsupportedTypeKind,
            Self::MissingSignature { .. } => ErrorCode::MissingSignature,
            Self::MissingTypeArgument { .. } => ErrorCode::MissingTypeArgument,
            Self::MissingOracleData { .. } => ErrorCode::MissingOracleData,
            Self::DepthExceeded { .. } => ErrorCode::DepthExceeded,
            Self::UnresolvedReference { .. } => ErrorCode::UnresolvedReference,
        }
    }
}
