//! Graph error types

use thiserror::Error;

/// Contract violations raised by the point store, animations and plots.
///
/// None of these are runtime conditions worth retrying; they report a caller
/// referencing state it never created or passing inconsistent arguments.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A point index was referenced before a point was created for it
    #[error("no graph point exists for index {index}")]
    MissingPoint { index: usize },

    /// The values slice does not line up with the requested indices
    #[error("expected {indices} values to match the requested indices, got {values}")]
    ArityMismatch { indices: usize, values: usize },

    /// Negative or non-finite duration/delay
    #[error("invalid animation timing: duration {duration}s, delay {delay}s")]
    InvalidDuration { duration: f32, delay: f32 },

    /// Frame delta cap that is zero, negative or non-finite
    #[error("invalid frame delta cap: {max_delta}s")]
    InvalidFrameDelta { max_delta: f32 },
}

/// Result type for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
