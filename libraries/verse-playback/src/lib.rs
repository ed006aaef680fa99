//! Verse Player - Playback Core
//!
//! Playback engine and queue sequencing for Verse Player.
//!
//! This crate provides:
//! - A thread-safe [`PlayerEngine`] driving one loaded audio source:
//!   load/play/pause/stop/seek/volume, position reporting, and
//!   end-of-track detection on a background driver thread
//! - A [`QueueSequencer`] resolving next/previous track under four
//!   play modes (ordered, repeat-all, repeat-one, shuffle)
//! - Change notifications via registered callbacks (state-changed,
//!   position-changed, track-ended, queue-changed)
//!
//! # Architecture
//!
//! The engine and the sequencer are independent leaves: neither calls
//! the other. The coordinating layer (the request-handling surface,
//! not part of this crate) asks the sequencer which track is current,
//! hands its locator to the engine's `load`, and on the track-ended
//! notification asks the sequencer for the next track. That keeps
//! each component independently testable.
//!
//! Decoding and device output live behind the [`SourceResolver`]
//! seam; this crate drives them as a black box and never parses audio
//! itself.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use verse_playback::{EngineConfig, PlayerEngine, Result, SourceResolver};
//! use verse_core::AudioInfo;
//!
//! struct StubResolver;
//!
//! impl SourceResolver for StubResolver {
//!     fn resolve(&self, _locator: &str) -> Result<AudioInfo> {
//!         Ok(AudioInfo {
//!             title: "Sample Track".to_string(),
//!             duration_ms: 180_000,
//!             ..AudioInfo::default()
//!         })
//!     }
//! }
//!
//! let engine = PlayerEngine::new(Box::new(StubResolver), EngineConfig::default());
//! engine.load("/music/song.mp3")?;
//! engine.play()?;
//! engine.pause()?;
//! engine.stop()?;
//! # Ok::<(), verse_playback::PlaybackError>(())
//! ```
//!
//! # Example: Queue Sequencing
//!
//! ```rust
//! use verse_core::{PlayMode, Track};
//! use verse_playback::QueueSequencer;
//!
//! let mut sequencer = QueueSequencer::new();
//! sequencer.add_track(Track::new("a", "First", "/music/a.mp3"));
//! sequencer.add_track(Track::new("b", "Second", "/music/b.mp3"));
//!
//! sequencer.set_play_mode(PlayMode::RepeatAll);
//! assert!(sequencer.next());
//! assert_eq!(sequencer.current_index(), Some(0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod engine;
mod error;
mod events;
mod sequencer;
mod source;
pub mod types;

// Public exports
pub use engine::PlayerEngine;
pub use error::{PlaybackError, Result};
pub use events::{PositionCallback, QueueCallback, StateCallback, TrackEndedCallback};
pub use sequencer::QueueSequencer;
pub use source::SourceResolver;
pub use types::EngineConfig;
