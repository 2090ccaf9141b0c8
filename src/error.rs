//! Error type shared by every canvas operation.

use thiserror::Error;

/// Errors raised by location and layer operations.
///
/// Both kinds are raised before any mutation takes place, so a failed call
/// leaves its receiver exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CanvasError {
    /// A size, coordinate, vector, or fill character violates its shape.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// The footprint of an insertion or merge needs more columns than the
    /// screen provides.
    #[error("location off screen: needs {columns} columns, screen has {max_width}")]
    OffScreen { columns: usize, max_width: usize },
}

impl CanvasError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CanvasError>;
