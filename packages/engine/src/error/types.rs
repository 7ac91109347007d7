//! Field filtering error types

use crate::config::ConfigurationError;

/// Result type for field filtering operations
pub type FieldsResult<T> = Result<T, FieldsError>;

/// Coarse classification of a [`FieldsError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input document could not be decoded
    InvalidDocument,
    /// Output document could not be encoded
    Serialization,
    /// Path list rejected by strict compilation
    InvalidPath,
    /// Configuration failed validation
    Configuration,
}

/// Main field filtering error type
#[derive(Debug, thiserror::Error)]
pub enum FieldsError {
    #[error("Failed to decode document: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode document: {source}")]
    Render {
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Too many paths: {count} exceeds limit of {limit}")]
    TooManyPaths { count: usize, limit: usize },

    #[error(transparent)]
    Config(#[from] ConfigurationError),
}

impl FieldsError {
    /// Creates a document decoding error
    #[must_use]
    pub fn parse(source: serde_json::Error) -> Self {
        Self::Parse { source }
    }

    /// Creates a document encoding error
    #[must_use]
    pub fn render(source: serde_json::Error) -> Self {
        Self::Render { source }
    }

    /// Creates an invalid path error
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Classify this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse { .. } => ErrorKind::InvalidDocument,
            Self::Render { .. } => ErrorKind::Serialization,
            Self::InvalidPath { .. } | Self::TooManyPaths { .. } => ErrorKind::InvalidPath,
            Self::Config(_) => ErrorKind::Configuration,
        }
    }

    /// Whether the error was caused by caller-supplied input rather than encoding
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidDocument | ErrorKind::InvalidPath
        )
    }
}
