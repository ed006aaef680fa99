//! Notification callbacks
//!
//! The playback core reports changes through registered handlers: at
//! most one handler per notification kind is active at a time, and
//! re-registering replaces the prior one.
//!
//! Handlers run synchronously on whichever context triggered the
//! change -- control calls invoke them inline, the background driver
//! invokes them from its own thread. A handler may be called while the
//! engine's internal lock is held, so it must not block and must not
//! call back into the engine.

use verse_core::{PlaybackState, Playlist};

/// Handler for playback state transitions
pub type StateCallback = Box<dyn Fn(PlaybackState) + Send + 'static>;

/// Handler for position updates, in milliseconds
pub type PositionCallback = Box<dyn Fn(u64) + Send + 'static>;

/// Handler for the driver reaching end-of-track
pub type TrackEndedCallback = Box<dyn Fn() + Send + 'static>;

/// Handler for structural queue changes, given the full updated
/// playlist snapshot
pub type QueueCallback = Box<dyn Fn(&Playlist) + Send + 'static>;

/// Registered engine handlers, one slot per notification kind
#[derive(Default)]
pub(crate) struct EngineCallbacks {
    pub(crate) state_changed: Option<StateCallback>,
    pub(crate) position_changed: Option<PositionCallback>,
    pub(crate) track_ended: Option<TrackEndedCallback>,
}

impl EngineCallbacks {
    pub(crate) fn emit_state(&self, state: PlaybackState) {
        if let Some(callback) = &self.state_changed {
            callback(state);
        }
    }

    pub(crate) fn emit_position(&self, position_ms: u64) {
        if let Some(callback) = &self.position_changed {
            callback(position_ms);
        }
    }

    pub(crate) fn emit_track_ended(&self) {
        if let Some(callback) = &self.track_ended {
            callback();
        }
    }
}
