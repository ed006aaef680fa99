//! Domain types for Verse Player

mod audio;
mod playlist;
mod track;

pub use audio::{AudioInfo, PlayMode, PlaybackState};
pub use playlist::{Playlist, DEFAULT_PLAYLIST_ID, DEFAULT_PLAYLIST_NAME};
pub use track::Track;
