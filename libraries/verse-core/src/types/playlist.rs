//! Playlist domain type

use crate::types::Track;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of the default playlist every player starts with
pub const DEFAULT_PLAYLIST_ID: &str = "default";

/// Display name of the default playlist
pub const DEFAULT_PLAYLIST_NAME: &str = "Default Playlist";

/// A named, ordered sequence of tracks.
///
/// Playlists live only in memory inside the playback core; the storage
/// collaborator serializes snapshots of this type in whatever format it
/// chooses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: String,

    /// Playlist display name
    pub name: String,

    /// Ordered track sequence (duplicate track ids permitted)
    pub tracks: Vec<Track>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            tracks: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh the last-modified timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Number of tracks in the playlist
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the playlist has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYLIST_ID, DEFAULT_PLAYLIST_NAME)
    }
}
