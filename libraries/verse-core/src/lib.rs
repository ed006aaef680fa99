//! Verse Player Core
//!
//! Platform-agnostic core types, traits, and error handling for Verse
//! Player.
//!
//! This crate provides the foundational building blocks shared by the
//! playback core and its collaborators (request layer, storage,
//! content providers):
//! - **Domain Types**: `Track`, `Playlist`, `PlaybackState`,
//!   `PlayMode`, `AudioInfo`
//! - **Provider Interface**: `MediaProvider` and `ProviderRegistry`
//! - **Error Handling**: unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use verse_core::types::{Playlist, Track};
//!
//! let mut playlist = Playlist::default();
//! let mut track = Track::new("t1", "My Favorite Song", "/music/song.mp3");
//! track.artist = "Some Artist".to_string();
//!
//! playlist.tracks.push(track);
//! playlist.touch();
//!
//! assert_eq!(playlist.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod registry;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use registry::ProviderRegistry;
pub use traits::MediaProvider;
pub use types::{AudioInfo, PlayMode, PlaybackState, Playlist, Track};
