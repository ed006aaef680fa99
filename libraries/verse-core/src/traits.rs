//! Core traits for Verse Player

use crate::error::Result;
use crate::types::Track;

/// Content provider capability interface
///
/// A provider is any source of tracks: a local library scanner, a
/// streaming service client, a remote catalog. The playback core never
/// depends on a concrete provider, only on this trait, so the set of
/// providers can be a static registry or loaded dynamically without
/// touching the engine or the sequencer.
///
/// All methods are synchronous from the caller's point of view;
/// implementations that talk to the network are expected to block and
/// be invoked from a context that tolerates it.
pub trait MediaProvider: Send + Sync {
    /// Provider name, unique within a registry
    fn name(&self) -> &str;

    /// Provider version string
    fn version(&self) -> &str;

    /// Human-readable description
    fn description(&self) -> &str;

    /// Search for tracks matching a query
    ///
    /// # Errors
    /// Returns an error if the provider cannot service the search
    fn search(&self, query: &str, limit: usize) -> Result<Vec<Track>>;

    /// List tracks from a named catalog category (new releases, top
    /// charts, ...), with offset/limit paging
    ///
    /// # Errors
    /// Returns an error if the category is unknown or the provider
    /// cannot service the request
    fn catalog(&self, category: &str, offset: usize, limit: usize) -> Result<Vec<Track>>;

    /// Resolve a playable locator (file path or URL) for a track id
    ///
    /// # Errors
    /// Returns an error if the track is unknown or no longer playable
    fn resolve_play_url(&self, track_id: &str) -> Result<String>;
}
