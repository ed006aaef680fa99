//! Queue sequencer
//!
//! Maintains the active playlist and a cursor into it, and resolves
//! next/previous track under the four play modes. Single-ownership by
//! design: it is accessed from one logical owner (the coordinating
//! layer) at a time and takes `&mut self` for every mutation. The
//! engine and the sequencer never call each other -- the coordinating
//! layer asks the sequencer which track is current and hands its
//! locator to the engine.

use crate::events::QueueCallback;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;
use verse_core::{PlayMode, Playlist, Track};

/// Sequencer over the active playlist.
///
/// The cursor is either `None` (unset: empty queue or never
/// positioned) or a valid index into the playlist; every operation
/// preserves that invariant.
pub struct QueueSequencer {
    playlist: Playlist,
    cursor: Option<usize>,
    mode: PlayMode,
    rng: StdRng,
    queue_changed: Option<QueueCallback>,
}

impl QueueSequencer {
    /// Create a sequencer with the default playlist and an
    /// entropy-seeded shuffle source
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a sequencer with a deterministic shuffle source, for
    /// reproducible tests
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            playlist: Playlist::default(),
            cursor: None,
            mode: PlayMode::default(),
            rng,
            queue_changed: None,
        }
    }

    /// Append a track to the end of the queue
    pub fn add_track(&mut self, track: Track) {
        debug!(track_id = %track.id, "track added to queue");
        self.playlist.tracks.push(track);
        self.playlist.touch();
        self.notify();
    }

    /// Remove the track at `index`.
    ///
    /// A no-op for out-of-range indices. If the cursor now points past
    /// the new end it is clamped to the last index, or cleared when
    /// the queue became empty.
    pub fn remove_track(&mut self, index: usize) {
        if index >= self.playlist.len() {
            return;
        }

        self.playlist.tracks.remove(index);
        self.playlist.touch();

        let len = self.playlist.len();
        self.cursor = match self.cursor {
            Some(_) if len == 0 => None,
            Some(cursor) if cursor >= len => Some(len - 1),
            other => other,
        };

        self.notify();
    }

    /// Remove all tracks and clear the cursor
    pub fn clear(&mut self) {
        self.playlist.tracks.clear();
        self.playlist.touch();
        self.cursor = None;
        debug!("queue cleared");
        self.notify();
    }

    /// Position the cursor explicitly.
    ///
    /// Silently ignored when out of range. Cursor movement alone is
    /// not a structural change, so no queue-changed notification is
    /// emitted.
    pub fn set_cursor(&mut self, index: usize) {
        if index < self.playlist.len() {
            self.cursor = Some(index);
        }
    }

    /// Advance the cursor to the next track.
    ///
    /// Returns `false` with the cursor unchanged when the queue is
    /// empty. In `Shuffle` mode the cursor lands on a uniformly random
    /// valid index (repeats permitted). In the ordered modes the
    /// cursor advances by one; past the last index, `RepeatAll` wraps
    /// to 0, while `Ordered` and `RepeatOne` clamp to the last index
    /// and return `false`. Single-track looping under `RepeatOne` is
    /// the caller's job: it re-loads the current track instead of
    /// calling this.
    pub fn next(&mut self) -> bool {
        let len = self.playlist.len();
        if len == 0 {
            return false;
        }

        if self.mode == PlayMode::Shuffle {
            self.cursor = Some(self.rng.gen_range(0..len));
            return true;
        }

        let candidate = self.cursor.map_or(0, |cursor| cursor + 1);
        if candidate >= len {
            if self.mode == PlayMode::RepeatAll {
                self.cursor = Some(0);
                true
            } else {
                self.cursor = Some(len - 1);
                false
            }
        } else {
            self.cursor = Some(candidate);
            true
        }
    }

    /// Retreat the cursor to the previous track.
    ///
    /// Returns `false` with the cursor unchanged when the queue is
    /// empty. Before the first index, `RepeatAll` wraps to the last
    /// index; the other modes clamp to 0 and return `false`.
    pub fn previous(&mut self) -> bool {
        let len = self.playlist.len();
        if len == 0 {
            return false;
        }

        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                true
            }
            _ => {
                if self.mode == PlayMode::RepeatAll {
                    self.cursor = Some(len - 1);
                    true
                } else {
                    self.cursor = Some(0);
                    false
                }
            }
        }
    }

    /// Current play mode
    pub fn play_mode(&self) -> PlayMode {
        self.mode
    }

    /// Change the play mode.
    ///
    /// Affects only future `next`/`previous` calls, never
    /// retroactively.
    pub fn set_play_mode(&mut self, mode: PlayMode) {
        debug!(?mode, "play mode changed");
        self.mode = mode;
    }

    /// Full snapshot of the active playlist
    pub fn playlist(&self) -> Playlist {
        self.playlist.clone()
    }

    /// Current cursor, `None` when unset
    pub fn current_index(&self) -> Option<usize> {
        self.cursor
    }

    /// Track under the cursor, if any
    pub fn current_track(&self) -> Option<&Track> {
        self.cursor.and_then(|cursor| self.playlist.tracks.get(cursor))
    }

    /// Number of tracks in the queue
    pub fn track_count(&self) -> usize {
        self.playlist.len()
    }

    /// Track at `index`, `None` when out of range
    pub fn track_at(&self, index: usize) -> Option<&Track> {
        self.playlist.tracks.get(index)
    }

    /// Register the queue-changed handler, replacing any prior one.
    ///
    /// Invoked synchronously with the full updated playlist snapshot
    /// after every structural mutation (add, remove, clear).
    pub fn on_queue_changed(&mut self, callback: impl Fn(&Playlist) + Send + 'static) {
        self.queue_changed = Some(Box::new(callback) as QueueCallback);
    }

    fn notify(&self) {
        if let Some(callback) = &self.queue_changed {
            callback(&self.playlist);
        }
    }
}

impl Default for QueueSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for QueueSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueueSequencer")
            .field("tracks", &self.playlist.len())
            .field("cursor", &self.cursor)
            .field("mode", &self.mode)
            .finish()
    }
}
