//! Cue playback system for the focus-session timer.
//!
//! This module provides the audio half of the notification dispatcher:
//!
//! - Three mutually exclusive cues, one per transition kind
//! - Rewind-then-play retriggering (a cue restarts, never queues)
//! - A global enable flag gating all playback
//! - Graceful degradation when audio is unavailable
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │    CuePlayer     │ ← Capability interface
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │  RodioCuePlayer  │────▶│  System Sounds   │
//! │  (one sink slot  │     │  (/System/...)   │
//! │   per cue)       │     ├──────────────────┤
//! │                  │────▶│ Embedded Samples │
//! └──────────────────┘     │  (per-cue)       │
//!                          └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use focus_timer::sound::create_cue_player;
//! use focus_timer::types::CueKind;
//!
//! // Always succeeds; falls back to a silent player without a device
//! let player = create_cue_player(true);
//!
//! if let Err(e) = player.play_cue(CueKind::FocusComplete) {
//!     eprintln!("Could not play cue: {}", e);
//! }
//! ```

mod embedded;
mod error;
mod player;
mod source;

pub use embedded::{
    cue_data, BREAK_COMPLETE_CUE_DATA, FOCUS_COMPLETE_CUE_DATA, MILESTONE_CUE_DATA,
};
pub use error::SoundError;
pub use player::{try_create_player, RodioCuePlayer};
pub use source::{discover_system_sounds, resolve_cue_source, SoundSource};

use std::sync::Arc;

use tracing::debug;

use crate::types::CueKind;

/// Capability interface for cue playback.
///
/// Implementations decide how a cue sounds; callers only choose which cue
/// to trigger and whether the global flag allows playback. Failures are
/// reported to the caller, which logs and swallows them.
pub trait CuePlayer {
    /// Plays the cue from the beginning, stopping any in-flight playback of
    /// the same cue. A disabled player succeeds without playing.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails.
    fn play_cue(&self, cue: CueKind) -> Result<(), SoundError>;

    /// Sets the global playback flag.
    fn set_enabled(&self, enabled: bool);

    /// Returns the global playback flag.
    fn is_enabled(&self) -> bool;
}

impl CuePlayer for RodioCuePlayer {
    fn play_cue(&self, cue: CueKind) -> Result<(), SoundError> {
        RodioCuePlayer::play_cue(self, cue)
    }

    fn set_enabled(&self, enabled: bool) {
        RodioCuePlayer::set_enabled(self, enabled);
    }

    fn is_enabled(&self) -> bool {
        RodioCuePlayer::is_enabled(self)
    }
}

/// Cue player for hosts without an audio device.
///
/// Playback is a no-op, but the enable flag still behaves normally so the
/// sound toggle and status reporting keep working.
#[derive(Debug)]
pub struct SilentCuePlayer {
    enabled: std::sync::atomic::AtomicBool,
}

impl SilentCuePlayer {
    /// Creates a silent player with the given initial flag.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: std::sync::atomic::AtomicBool::new(enabled),
        }
    }
}

impl CuePlayer for SilentCuePlayer {
    fn play_cue(&self, cue: CueKind) -> Result<(), SoundError> {
        debug!("No audio device, dropping cue {}", cue.as_str());
        Ok(())
    }

    fn set_enabled(&self, enabled: bool) {
        self.enabled
            .store(enabled, std::sync::atomic::Ordering::Relaxed);
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(std::sync::atomic::Ordering::Relaxed)
    }
}

/// Creates the best available cue player.
///
/// Prefers the rodio-backed player; if no audio device exists, a silent
/// player is returned so the rest of the system runs unchanged.
#[must_use]
pub fn create_cue_player(enabled: bool) -> Arc<dyn CuePlayer> {
    match try_create_player(enabled) {
        Some(player) => player,
        None => Arc::new(SilentCuePlayer::new(enabled)),
    }
}

/// Mock cue player for testing.
#[derive(Debug)]
pub struct MockCuePlayer {
    play_calls: std::sync::Mutex<Vec<CueKind>>,
    enabled: std::sync::atomic::AtomicBool,
    should_fail: std::sync::atomic::AtomicBool,
}

impl Default for MockCuePlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCuePlayer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            play_calls: std::sync::Mutex::new(Vec::new()),
            enabled: std::sync::atomic::AtomicBool::new(true),
            should_fail: std::sync::atomic::AtomicBool::new(false),
        }
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail
            .store(should_fail, std::sync::atomic::Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_calls.lock().unwrap().len()
    }

    #[must_use]
    pub fn get_play_calls(&self) -> Vec<CueKind> {
        self.play_calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.play_calls.lock().unwrap().clear();
    }
}

impl CuePlayer for MockCuePlayer {
    fn play_cue(&self, cue: CueKind) -> Result<(), SoundError> {
        if self.should_fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        if !self.enabled.load(std::sync::atomic::Ordering::SeqCst) {
            return Ok(());
        }
        self.play_calls.lock().unwrap().push(cue);
        Ok(())
    }

    fn set_enabled(&self, enabled: bool) {
        self.enabled
            .store(enabled, std::sync::atomic::Ordering::SeqCst);
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_exports() {
        // Verify the public construction paths are accessible
        let _: fn(bool) -> Result<RodioCuePlayer, SoundError> = RodioCuePlayer::new;
        let _: fn(CueKind) -> SoundSource = resolve_cue_source;
        let _: fn() -> Vec<SoundSource> = discover_system_sounds;
        let _: fn(CueKind) -> &'static [u8] = cue_data;
    }

    #[test]
    fn test_create_cue_player_always_succeeds() {
        let player = create_cue_player(true);
        assert!(player.is_enabled());
    }

    #[test]
    fn test_silent_player_flag_behavior() {
        let player = SilentCuePlayer::new(true);
        assert!(player.is_enabled());

        player.set_enabled(false);
        assert!(!player.is_enabled());

        // Playback is a no-op either way
        assert!(player.play_cue(CueKind::Milestone).is_ok());
    }

    #[test]
    fn test_mock_records_cues_in_order() {
        let player = MockCuePlayer::new();

        player.play_cue(CueKind::FocusComplete).unwrap();
        player.play_cue(CueKind::Milestone).unwrap();

        assert_eq!(player.play_count(), 2);
        assert_eq!(
            player.get_play_calls(),
            vec![CueKind::FocusComplete, CueKind::Milestone]
        );
    }

    #[test]
    fn test_mock_disabled_swallows_cues() {
        let player = MockCuePlayer::new();
        player.set_enabled(false);

        player.play_cue(CueKind::BreakComplete).unwrap();

        assert_eq!(player.play_count(), 0);
    }

    #[test]
    fn test_mock_failure_mode() {
        let player = MockCuePlayer::new();
        player.set_should_fail(true);

        assert!(player.play_cue(CueKind::FocusComplete).is_err());
        assert_eq!(player.play_count(), 0);
    }

    #[test]
    fn test_mock_clear_calls() {
        let player = MockCuePlayer::new();
        player.play_cue(CueKind::FocusComplete).unwrap();

        player.clear_calls();

        assert_eq!(player.play_count(), 0);
    }
}
