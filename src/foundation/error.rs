/// Convenience result type used across the crate.
pub type PixmixResult<T> = Result<T, PixmixError>;

/// Errors raised at construction boundaries.
///
/// Render operations never fail: out-of-range coordinates are clipped and
/// degenerate spans are no-ops. Only setup (buffer geometry, mask addressing,
/// operator names, image interop) can report an error.
#[derive(thiserror::Error, Debug)]
pub enum PixmixError {
    /// Geometry or addressing that violates a buffer/mask invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown or mismatched pixel/operator format.
    #[error("format error: {0}")]
    Format(String),

    /// Error bubbled up from a collaborator.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PixmixError {
    /// Build a [`PixmixError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PixmixError::Format`].
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
