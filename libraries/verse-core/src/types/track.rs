//! Track domain type

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single audio track as supplied by a content provider.
///
/// Tracks are plain values: they are copied freely between the queue,
/// the request layer, and storage snapshots, and carry no shared
/// mutable identity. Duplicate ids inside a playlist are permitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Source locator: local file path or network URL
    pub locator: String,

    /// Track duration in milliseconds (0 until resolved by a load)
    pub duration_ms: u64,

    /// Origin tag: which provider the track came from
    pub provider: String,

    /// Cover art locator, when the provider supplies one
    pub cover_url: Option<String>,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        locator: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            locator: locator.into(),
            ..Self::default()
        }
    }

    /// Get the track duration as a `Duration`, `None` while unknown
    pub fn duration(&self) -> Option<Duration> {
        if self.duration_ms > 0 {
            Some(Duration::from_millis(self.duration_ms))
        } else {
            None
        }
    }
}
