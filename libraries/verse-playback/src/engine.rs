//! Playback engine
//!
//! Owns one active audio source and drives a background driver thread
//! that advances position while playing and detects end-of-track. All
//! control operations and queries are safe to call concurrently with
//! each other and with the driver: every piece of engine state lives
//! behind a single mutex, and the driver holds it only for the brief
//! check-and-advance of each tick.

use crate::error::{PlaybackError, Result};
use crate::events::{EngineCallbacks, PositionCallback, StateCallback, TrackEndedCallback};
use crate::source::SourceResolver;
use crate::types::EngineConfig;
use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::debug;
use verse_core::{AudioInfo, PlaybackState};

/// Mutable engine state, guarded by the single engine lock
struct Inner {
    state: PlaybackState,
    locator: Option<String>,
    position_ms: u64,
    volume: u8,
    info: AudioInfo,
    /// Latched once the driver has emitted track-ended for the
    /// current load; cleared by the next successful `load`
    end_emitted: bool,
    shutdown: bool,
    callbacks: EngineCallbacks,
}

struct Shared {
    inner: Mutex<Inner>,
    wake: Condvar,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap()
    }
}

/// Playback engine for a single audio source.
///
/// The engine is reusable across many loads: `Stopped` is the initial
/// state but not a terminal one. Metadata resolution is delegated to
/// the injected [`SourceResolver`]; actual decoding and device output
/// live behind that seam and are not modeled here.
///
/// Dropping the engine signals the driver thread, wakes it if
/// suspended, and joins it; no notification fires after teardown
/// begins.
pub struct PlayerEngine {
    resolver: Box<dyn SourceResolver>,
    shared: Arc<Shared>,
    driver: Option<JoinHandle<()>>,
}

impl PlayerEngine {
    /// Create an engine and spawn its background driver thread
    pub fn new(resolver: Box<dyn SourceResolver>, config: EngineConfig) -> Self {
        let shared = Arc::new(Shared {
            inner: Mutex::new(Inner {
                state: PlaybackState::Stopped,
                locator: None,
                position_ms: 0,
                volume: config.volume.min(100),
                info: AudioInfo::default(),
                end_emitted: false,
                shutdown: false,
                callbacks: EngineCallbacks::default(),
            }),
            wake: Condvar::new(),
        });

        let driver_shared = Arc::clone(&shared);
        let tick = config.tick;
        let driver = thread::Builder::new()
            .name("verse-playback-driver".to_string())
            .spawn(move || drive(&driver_shared, tick))
            .expect("spawn playback driver thread");

        Self {
            resolver,
            shared,
            driver: Some(driver),
        }
    }

    /// Load an audio source.
    ///
    /// Valid in any state. Resolution runs outside the engine lock, so
    /// a slow resolver blocks only its caller, never the driver. On
    /// success the position resets to 0, the state becomes `Stopped`,
    /// the metadata snapshot is replaced, and any pending end-of-track
    /// latch is cleared. On failure the engine keeps its previous
    /// source and state untouched.
    pub fn load(&self, locator: &str) -> Result<()> {
        let info = self.resolver.resolve(locator)?;

        let mut inner = self.shared.lock();
        let previous = inner.state;
        inner.locator = Some(locator.to_string());
        inner.info = info;
        inner.position_ms = 0;
        inner.state = PlaybackState::Stopped;
        inner.end_emitted = false;

        debug!(locator, duration_ms = inner.info.duration_ms, "source loaded");
        if previous != PlaybackState::Stopped {
            inner.callbacks.emit_state(PlaybackState::Stopped);
        }
        Ok(())
    }

    /// Start or resume playback.
    ///
    /// Fails with `NoSourceLoaded` if nothing was successfully loaded.
    /// A no-op when already playing. Wakes the driver.
    pub fn play(&self) -> Result<()> {
        let mut inner = self.shared.lock();
        if inner.locator.is_none() {
            return Err(PlaybackError::NoSourceLoaded);
        }
        if inner.state == PlaybackState::Playing {
            return Ok(());
        }

        inner.state = PlaybackState::Playing;
        debug!("playback started");
        inner.callbacks.emit_state(PlaybackState::Playing);
        drop(inner);
        self.shared.wake.notify_all();
        Ok(())
    }

    /// Pause playback.
    ///
    /// Valid only while `Playing`; fails with `InvalidState`
    /// otherwise. Position is retained.
    pub fn pause(&self) -> Result<()> {
        let mut inner = self.shared.lock();
        if inner.state != PlaybackState::Playing {
            return Err(PlaybackError::InvalidState {
                operation: "pause",
                state: inner.state,
            });
        }

        inner.state = PlaybackState::Paused;
        debug!(position_ms = inner.position_ms, "playback paused");
        inner.callbacks.emit_state(PlaybackState::Paused);
        Ok(())
    }

    /// Stop playback and reset position to 0.
    ///
    /// Valid in any state. Idempotent, but always emits a
    /// state-changed notification: stop always resets position.
    pub fn stop(&self) -> Result<()> {
        let mut inner = self.shared.lock();
        inner.state = PlaybackState::Stopped;
        inner.position_ms = 0;
        debug!("playback stopped");
        inner.callbacks.emit_state(PlaybackState::Stopped);
        Ok(())
    }

    /// Seek to a position in milliseconds.
    ///
    /// Rejects negative positions, and positions past the duration
    /// when the duration is known. Does not change playback state.
    pub fn seek(&self, position_ms: i64) -> Result<()> {
        let mut inner = self.shared.lock();
        let duration = inner.info.duration_ms;
        if position_ms < 0 || (duration > 0 && position_ms as u64 > duration) {
            return Err(PlaybackError::out_of_range(format!(
                "seek position {position_ms}ms outside 0..={duration}ms"
            )));
        }

        inner.position_ms = position_ms as u64;
        inner.callbacks.emit_position(inner.position_ms);
        Ok(())
    }

    /// Set the volume level, 0-100.
    ///
    /// Does not affect playback state or position.
    pub fn set_volume(&self, level: i32) -> Result<()> {
        if !(0..=100).contains(&level) {
            return Err(PlaybackError::out_of_range(format!(
                "volume {level} outside 0..=100"
            )));
        }

        let mut inner = self.shared.lock();
        inner.volume = level as u8;
        Ok(())
    }

    /// Current volume level, 0-100
    pub fn volume(&self) -> u8 {
        self.shared.lock().volume
    }

    /// Current position in milliseconds
    pub fn position_ms(&self) -> u64 {
        self.shared.lock().position_ms
    }

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        self.shared.lock().state
    }

    /// Metadata snapshot of the loaded source (empty before any
    /// successful load)
    pub fn audio_info(&self) -> AudioInfo {
        self.shared.lock().info.clone()
    }

    /// Register the state-changed handler, replacing any prior one.
    ///
    /// Runs on the calling or driver context and may hold the engine
    /// lock; it must not block or call back into the engine.
    pub fn on_state_changed(&self, callback: impl Fn(PlaybackState) + Send + 'static) {
        self.shared.lock().callbacks.state_changed = Some(Box::new(callback) as StateCallback);
    }

    /// Register the position-changed handler, replacing any prior one
    pub fn on_position_changed(&self, callback: impl Fn(u64) + Send + 'static) {
        self.shared.lock().callbacks.position_changed =
            Some(Box::new(callback) as PositionCallback);
    }

    /// Register the track-ended handler, replacing any prior one
    pub fn on_track_ended(&self, callback: impl Fn() + Send + 'static) {
        self.shared.lock().callbacks.track_ended = Some(Box::new(callback) as TrackEndedCallback);
    }
}

impl Drop for PlayerEngine {
    fn drop(&mut self) {
        {
            let mut inner = self.shared.lock();
            inner.shutdown = true;
            // No notification may fire once teardown begins
            inner.callbacks = EngineCallbacks::default();
        }
        self.shared.wake.notify_all();
        if let Some(driver) = self.driver.take() {
            let _ = driver.join();
        }
    }
}

impl std::fmt::Debug for PlayerEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.shared.lock();
        f.debug_struct("PlayerEngine")
            .field("state", &inner.state)
            .field("locator", &inner.locator)
            .field("position_ms", &inner.position_ms)
            .field("volume", &inner.volume)
            .finish()
    }
}

/// Background driver loop.
///
/// Suspends on the condvar whenever the state is not `Playing`, so a
/// stopped or paused engine consumes no CPU. While playing it sleeps
/// one tick with the lock released, then reacquires it, re-checks the
/// state (a control call may have raced the sleep), advances position,
/// and handles end-of-track. The transition to `Stopped` at
/// end-of-track and its notifications happen atomically under the
/// lock, so a racing `stop()` can never produce a second, conflicting
/// notification.
fn drive(shared: &Shared, tick: Duration) {
    let step = tick.as_millis() as u64;
    let mut inner = shared.lock();
    loop {
        while inner.state != PlaybackState::Playing && !inner.shutdown {
            inner = shared.wake.wait(inner).unwrap();
        }
        if inner.shutdown {
            return;
        }

        // Sleep without the lock so control calls are never starved
        // for longer than one tick.
        drop(inner);
        thread::sleep(tick);
        inner = shared.lock();

        if inner.shutdown {
            return;
        }
        if inner.state != PlaybackState::Playing {
            continue;
        }

        inner.position_ms = inner.position_ms.saturating_add(step);
        let duration = inner.info.duration_ms;

        if duration > 0 && inner.position_ms >= duration {
            // Freeze position at the end rather than resetting, so a
            // final position query still reports the full duration.
            inner.position_ms = duration;
            inner.state = PlaybackState::Stopped;
            debug!(duration_ms = duration, "end of track reached");
            inner.callbacks.emit_position(duration);
            inner.callbacks.emit_state(PlaybackState::Stopped);
            if !inner.end_emitted {
                inner.end_emitted = true;
                inner.callbacks.emit_track_ended();
            }
        } else {
            let position = inner.position_ms;
            inner.callbacks.emit_position(position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedResolver {
        duration_ms: u64,
    }

    impl SourceResolver for FixedResolver {
        fn resolve(&self, locator: &str) -> Result<AudioInfo> {
            if locator.is_empty() {
                return Err(PlaybackError::SourceUnavailable(locator.to_string()));
            }
            Ok(AudioInfo {
                title: "Sample Track".to_string(),
                artist: "Unknown Artist".to_string(),
                album: String::new(),
                duration_ms: self.duration_ms,
                format: "mp3".to_string(),
            })
        }
    }

    fn engine(duration_ms: u64) -> PlayerEngine {
        PlayerEngine::new(
            Box::new(FixedResolver { duration_ms }),
            EngineConfig::default(),
        )
    }

    #[test]
    fn starts_stopped_with_configured_volume() {
        let engine = engine(180_000);
        assert_eq!(engine.state(), PlaybackState::Stopped);
        assert_eq!(engine.volume(), 50);
        assert_eq!(engine.position_ms(), 0);
    }

    #[test]
    fn play_without_load_fails() {
        let engine = engine(180_000);
        assert!(matches!(engine.play(), Err(PlaybackError::NoSourceLoaded)));
        assert_eq!(engine.state(), PlaybackState::Stopped);
    }

    #[test]
    fn pause_from_stopped_is_invalid() {
        let engine = engine(180_000);
        engine.load("/music/a.mp3").unwrap();
        assert!(matches!(
            engine.pause(),
            Err(PlaybackError::InvalidState { .. })
        ));
    }

    #[test]
    fn failed_load_keeps_previous_source() {
        let engine = engine(180_000);
        engine.load("/music/a.mp3").unwrap();
        engine.play().unwrap();

        assert!(matches!(
            engine.load(""),
            Err(PlaybackError::SourceUnavailable(_))
        ));
        // Previous source and state untouched
        assert_eq!(engine.state(), PlaybackState::Playing);
        assert_eq!(engine.audio_info().duration_ms, 180_000);
    }

    #[test]
    fn volume_bounds() {
        let engine = engine(180_000);
        assert!(engine.set_volume(-1).is_err());
        assert!(engine.set_volume(101).is_err());
        assert_eq!(engine.volume(), 50);

        engine.set_volume(0).unwrap();
        assert_eq!(engine.volume(), 0);
        engine.set_volume(100).unwrap();
        assert_eq!(engine.volume(), 100);
    }

    #[test]
    fn seek_bounds_when_duration_known() {
        let engine = engine(180_000);
        engine.load("/music/a.mp3").unwrap();

        assert!(engine.seek(-1).is_err());
        assert!(engine.seek(180_001).is_err());
        assert_eq!(engine.position_ms(), 0);

        engine.seek(180_000).unwrap();
        assert_eq!(engine.position_ms(), 180_000);
    }

    #[test]
    fn seek_unbounded_when_duration_unknown() {
        let engine = engine(0);
        engine.load("/stream/live").unwrap();
        engine.seek(999_999).unwrap();
        assert_eq!(engine.position_ms(), 999_999);
    }
}
