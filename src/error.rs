//! Error types for document transformation
//!
//! Selector and element level problems are not errors: they are collected as
//! [`Diagnostic`](crate::inliner::Diagnostic) values during an inlining pass.
//! The variants here cover the document layer around the engine (asset
//! lookup, configuration, serialization).

use thiserror::Error;

/// Result type alias for inliner operations
pub type InlinerResult<T> = Result<T, InlinerError>;

/// Error types for document transformation
#[derive(Debug, Error)]
pub enum InlinerError {
    /// No asset provider could produce the referenced stylesheet
    #[error("Could not find stylesheet \"{name}\" (tried: {tried})")]
    CssNotFound { name: String, tried: String },

    /// A stylesheet reference resolved outside the provider's root directory
    #[error("Refusing to read \"{0}\" outside of the asset root")]
    InsecurePath(String),

    /// URL options do not form a usable base URL
    #[error("Invalid URL options: {0}")]
    InvalidUrlOptions(String),

    /// Serializing the transformed DOM failed
    #[error("Failed to serialize document: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InlinerError {
    /// Check if the error was caused by a missing or unreadable stylesheet
    #[must_use]
    pub fn is_asset_error(&self) -> bool {
        matches!(
            self,
            InlinerError::CssNotFound { .. } | InlinerError::InsecurePath(_) | InlinerError::Io(_)
        )
    }
}
