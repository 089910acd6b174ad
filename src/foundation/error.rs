/// Convenience result type used across mediafit.
pub type MediafitResult<T> = Result<T, MediafitError>;

/// Top-level error taxonomy used by crate APIs.
///
/// A resolution that finds no rendition is not an error; it is `None` from
/// [`RenditionResolver::resolve`](crate::RenditionResolver::resolve). Errors
/// here cover malformed inputs and catalog handling only.
#[derive(thiserror::Error, Debug)]
pub enum MediafitError {
    /// Invalid caller-provided format or request data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown or conflicting entry in a format catalog.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MediafitError {
    /// Build a [`MediafitError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MediafitError::Catalog`] value.
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Build a [`MediafitError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
