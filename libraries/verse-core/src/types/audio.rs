//! Playback-facing audio types

use serde::{Deserialize, Serialize};

/// Playback state of the engine
///
/// The engine holds exactly one of these at any time; transitions are
/// driven by the control operations and by the background driver
/// reaching end-of-track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Nothing playing; position is 0
    #[default]
    Stopped,

    /// Currently playing; the driver advances position
    Playing,

    /// Paused mid-track; position is retained
    Paused,
}

/// Sequencing mode of the queue
///
/// A property of the sequencer, not of any individual playlist. Mode
/// changes take effect on the next `next`/`previous` resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayMode {
    /// Play in order, stop at the end of the queue
    #[default]
    Ordered,

    /// Play in order, wrap around at both ends
    RepeatAll,

    /// Loop the current track (re-loading is the caller's job)
    RepeatOne,

    /// Pick a uniformly random track on every advance
    Shuffle,
}

/// Metadata snapshot of the currently loaded audio source.
///
/// Populated when a source is loaded; empty/stale before any
/// successful load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioInfo {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Duration in milliseconds (0 if unknown)
    pub duration_ms: u64,

    /// Container/codec format tag (e.g. "mp3", "flac")
    pub format: String,
}
