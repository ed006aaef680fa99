//! Error types for the playback core

use thiserror::Error;
use verse_core::PlaybackState;

/// Playback errors
///
/// Every failure in the playback core is a normal, reportable outcome;
/// there is no fatal internal error. Nothing is retried internally --
/// retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No source has been successfully loaded yet
    #[error("No source loaded")]
    NoSourceLoaded,

    /// The locator could not be resolved to a playable source
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// Operation is not valid in the current playback state
    #[error("Invalid state for {operation}: {state:?}")]
    InvalidState {
        /// Operation that was attempted
        operation: &'static str,
        /// State the engine was in at the time
        state: PlaybackState,
    },

    /// Index, position, or volume outside its valid bounds
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// The queue has no tracks to sequence
    #[error("Queue is empty")]
    EmptyQueue,
}

impl PlaybackError {
    /// Create an out-of-range error
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_state_names_operation() {
        let err = PlaybackError::InvalidState {
            operation: "pause",
            state: PlaybackState::Stopped,
        };
        assert_eq!(err.to_string(), "Invalid state for pause: Stopped");
    }

    #[test]
    fn source_unavailable_carries_locator() {
        let err = PlaybackError::SourceUnavailable("/gone.mp3".to_string());
        assert!(err.to_string().contains("/gone.mp3"));
    }
}
