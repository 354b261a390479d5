//! Layout error types.

use thiserror::Error;

/// Result type alias for layout planning operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Errors raised when the store configuration cannot be satisfied by the
/// hardware discovered on the host.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("no solid-state media found")]
    NoSolidStateMedia,

    #[error("no rotational media found")]
    NoRotationalMedia,

    #[error("metadata offload requires hdds >= ssds, got hdds({hdds}) < ssds({ssds})")]
    OffloadRatio { hdds: usize, ssds: usize },
}
