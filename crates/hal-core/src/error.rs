//! Error types for HAL documents and rendering.

use thiserror::Error;

/// Top-level result type for HAL operations.
pub type Result<T> = std::result::Result<T, HalError>;

/// Top-level error type for HAL.
///
/// Every variant carries a stable code (see [`HalError::code`]) so callers
/// can match on the failure kind without parsing message text.
#[derive(Debug, Error)]
pub enum HalError {
    /// A link was constructed without an `href`, or with an empty one.
    #[error("HAL_ERR_INVALIDLINK")]
    InvalidLink,

    #[error("invalid value for link property '{property}': expected {expected}")]
    InvalidProperty {
        property: String,
        expected: &'static str,
    },

    #[error("unsupported render format: {0}")]
    UnsupportedFormat(String),

    #[error("manifest error: {0}")]
    Manifest(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl HalError {
    /// Stable machine-readable code for this error kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidLink => "HAL_ERR_INVALIDLINK",
            Self::InvalidProperty { .. } => "HAL_ERR_INVALIDPROPERTY",
            Self::UnsupportedFormat(_) => "HAL_ERR_UNSUPPORTEDFORMAT",
            Self::Manifest(_) => "HAL_ERR_MANIFEST",
            Self::Io(_) => "HAL_ERR_IO",
            Self::Serialization(_) => "HAL_ERR_SERIALIZATION",
        }
    }
}

impl From<serde_json::Error> for HalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
