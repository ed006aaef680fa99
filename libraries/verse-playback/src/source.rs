//! Decode/output collaborator seam
//!
//! The engine treats actual decoding and hardware output as a black
//! box it drives through load/play/pause/stop/seek primitives. The
//! only call that crosses the seam in this crate is metadata
//! resolution at load time, expressed by `SourceResolver`.

use crate::error::Result;
use verse_core::AudioInfo;

/// Resolves a source locator into audio metadata.
///
/// Implemented by the platform's decode backend (or by an in-memory
/// fake in tests) and injected into the engine at construction.
/// Resolution may block its caller (e.g. probing a network stream) --
/// the engine calls it outside its internal lock, so a slow resolve
/// never stalls the background driver.
pub trait SourceResolver: Send + Sync {
    /// Resolve metadata for the given locator
    ///
    /// # Errors
    /// Returns [`crate::PlaybackError::SourceUnavailable`] if the
    /// locator cannot be resolved to a playable source.
    fn resolve(&self, locator: &str) -> Result<AudioInfo>;
}
