//! Errors in the library.
use thiserror::Error;

/// Errors raised by [`EpisodeBuffer`](crate::EpisodeBuffer) and [`Episode`](crate::Episode).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EpisodeBufferError {
    /// Invalid construction parameter, e.g., zero capacity.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The sequences of an episode disagree in length or state dimension.
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Sampling was requested from a buffer without episodes.
    #[error("Cannot sample from an empty episode buffer")]
    EmptyBuffer,
}
