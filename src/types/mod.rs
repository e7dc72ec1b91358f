//! Core data types for the focus-session timer.
//!
//! This module defines the data structures used for:
//! - Timer configuration with validation
//! - The phase state machine (focus/break, cadence, expiry transitions)
//! - Transition events consumed by the notification dispatcher
//! - IPC request/response serialization

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of completed focus sessions per long-break cycle.
///
/// The break after the Nth completed focus session is long iff
/// `N % SESSIONS_PER_CYCLE == 0`.
pub const SESSIONS_PER_CYCLE: u32 = 4;

/// Largest configurable duration in minutes.
///
/// Bounded so that `minutes * 60` always fits in a `u32`; the CLI caps
/// durations far lower, but raw IPC requests reach the engine directly.
pub const MAX_MINUTES: u32 = u32::MAX / 60;

// ============================================================================
// TimerError
// ============================================================================

/// Errors surfaced to callers of timer operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// A configured duration was zero or beyond the representable range.
    #[error("時間は1分以上{}分以下の整数で指定してください", MAX_MINUTES)]
    InvalidDuration,
}

// ============================================================================
// TimerConfig
// ============================================================================

/// Configurable phase durations, in minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerConfig {
    /// Focus session duration in minutes
    pub focus_minutes: u32,
    /// Short break duration in minutes
    pub short_break_minutes: u32,
    /// Long break duration in minutes
    pub long_break_minutes: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
        }
    }
}

impl TimerConfig {
    /// Creates a new configuration with the specified focus duration.
    #[must_use]
    pub fn with_focus_minutes(mut self, minutes: u32) -> Self {
        self.focus_minutes = minutes;
        self
    }

    /// Creates a new configuration with the specified short break duration.
    #[must_use]
    pub fn with_short_break_minutes(mut self, minutes: u32) -> Self {
        self.short_break_minutes = minutes;
        self
    }

    /// Creates a new configuration with the specified long break duration.
    #[must_use]
    pub fn with_long_break_minutes(mut self, minutes: u32) -> Self {
        self.long_break_minutes = minutes;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::InvalidDuration`] if any duration is zero or
    /// exceeds [`MAX_MINUTES`].
    pub fn validate(&self) -> Result<(), TimerError> {
        let in_range = |minutes: u32| (1..=MAX_MINUTES).contains(&minutes);
        if !in_range(self.focus_minutes)
            || !in_range(self.short_break_minutes)
            || !in_range(self.long_break_minutes)
        {
            return Err(TimerError::InvalidDuration);
        }
        Ok(())
    }
}

// ============================================================================
// TimerEvent
// ============================================================================

/// A phase-transition event emitted by the state machine.
///
/// Exactly one event is produced per expiry. Focus completions carry the
/// post-increment session count and whether it landed on a long-break
/// milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// A focus session ran to zero and a break began.
    FocusCompleted {
        /// Session count after this completion
        sessions_completed: u32,
        /// True on every `SESSIONS_PER_CYCLE`-th completion
        milestone: bool,
    },
    /// A break ran to zero and a focus session began.
    BreakCompleted,
}

// ============================================================================
// CueKind
// ============================================================================

/// The three mutually exclusive audio cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CueKind {
    /// A regular focus session completed
    FocusComplete,
    /// A break completed
    BreakComplete,
    /// A focus session completed on the long-break milestone
    Milestone,
}

impl CueKind {
    /// All cue kinds, in a fixed order.
    pub const ALL: [CueKind; 3] = [
        CueKind::FocusComplete,
        CueKind::BreakComplete,
        CueKind::Milestone,
    ];

    /// Returns the string representation of the cue.
    pub fn as_str(&self) -> &'static str {
        match self {
            CueKind::FocusComplete => "focus_complete",
            CueKind::BreakComplete => "break_complete",
            CueKind::Milestone => "milestone",
        }
    }
}

impl From<TimerEvent> for CueKind {
    fn from(event: TimerEvent) -> Self {
        match event {
            TimerEvent::FocusCompleted {
                milestone: true, ..
            } => CueKind::Milestone,
            TimerEvent::FocusCompleted { .. } => CueKind::FocusComplete,
            TimerEvent::BreakCompleted => CueKind::BreakComplete,
        }
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// The complete timer state machine.
///
/// The state is memory-only and lives for the daemon's lifetime. A fresh
/// state begins in the focus phase, inactive, with the full focus duration
/// remaining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    /// Seconds left in the current phase
    pub remaining_seconds: u32,
    /// Whether the countdown is running
    pub is_active: bool,
    /// Whether the current phase is a break
    pub is_break: bool,
    /// Completed focus sessions (never incremented by breaks)
    pub sessions_completed: u32,
    /// Phase durations
    pub config: TimerConfig,
}

impl TimerState {
    /// Creates a new state in the focus phase, paused at the full duration.
    #[must_use]
    pub fn new(config: TimerConfig) -> Self {
        let remaining_seconds = config.focus_minutes * 60;
        Self {
            remaining_seconds,
            is_active: false,
            is_break: false,
            sessions_completed: 0,
            config,
        }
    }

    /// Flips the running flag. Always succeeds.
    pub fn toggle(&mut self) {
        self.is_active = !self.is_active;
    }

    /// Stops the countdown and restores the current phase's full duration.
    ///
    /// The phase and the session count are preserved; resetting during a
    /// break rewinds that break, it does not jump back to focus.
    pub fn reset(&mut self) {
        self.is_active = false;
        self.remaining_seconds = self.current_phase_duration_seconds();
    }

    /// Advances the countdown by one second.
    ///
    /// Only decrements while active with time remaining; a paused or
    /// already-expired timer is left untouched. Returns true when this tick
    /// brought the countdown to zero, in which case the caller must evaluate
    /// the expiry exactly once.
    pub fn tick(&mut self) -> bool {
        if !self.is_active || self.remaining_seconds == 0 {
            return false;
        }
        self.remaining_seconds -= 1;
        self.remaining_seconds == 0
    }

    /// Performs the single transition for an expired countdown.
    ///
    /// Focus expiry increments the session count and starts the break whose
    /// length the post-increment count selects; break expiry starts the next
    /// focus session and never touches the count. Either way the new phase
    /// begins paused at its full duration.
    pub fn evaluate_expiry(&mut self) -> TimerEvent {
        let event = if self.is_break {
            TimerEvent::BreakCompleted
        } else {
            self.sessions_completed += 1;
            TimerEvent::FocusCompleted {
                sessions_completed: self.sessions_completed,
                milestone: self.sessions_completed % SESSIONS_PER_CYCLE == 0,
            }
        };
        self.is_break = !self.is_break;
        self.remaining_seconds = self.current_phase_duration_seconds();
        self.is_active = false;
        event
    }

    /// Replaces the configuration and reseeds the current phase.
    ///
    /// The remaining time is set to the new full duration of the current
    /// phase, whether that truncates or extends it. The running flag, the
    /// phase, and the session count are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::InvalidDuration`] if any duration is zero or
    /// exceeds [`MAX_MINUTES`]; the state is left untouched on failure.
    pub fn apply_custom_durations(
        &mut self,
        focus_minutes: u32,
        short_break_minutes: u32,
        long_break_minutes: u32,
    ) -> Result<(), TimerError> {
        let config = TimerConfig {
            focus_minutes,
            short_break_minutes,
            long_break_minutes,
        };
        config.validate()?;
        self.config = config;
        self.remaining_seconds = self.current_phase_duration_seconds();
        Ok(())
    }

    /// Returns true if the current break is a long one.
    ///
    /// The session count does not change during a break, so the length of
    /// the break in progress is always derivable from the live count.
    #[must_use]
    pub fn is_long_break(&self) -> bool {
        self.sessions_completed > 0 && self.sessions_completed % SESSIONS_PER_CYCLE == 0
    }

    /// Returns the full duration of the current phase, in seconds.
    #[must_use]
    pub fn current_phase_duration_seconds(&self) -> u32 {
        let minutes = if self.is_break {
            if self.is_long_break() {
                self.config.long_break_minutes
            } else {
                self.config.short_break_minutes
            }
        } else {
            self.config.focus_minutes
        };
        minutes * 60
    }

    /// Fraction of the current phase already elapsed, in `[0, 1]`.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        let full = self.current_phase_duration_seconds();
        f64::from(full - self.remaining_seconds) / f64::from(full)
    }

    /// Focus sessions left until the next long break, in `[1, SESSIONS_PER_CYCLE]`.
    #[must_use]
    pub fn sessions_until_long_break(&self) -> u32 {
        SESSIONS_PER_CYCLE - self.sessions_completed % SESSIONS_PER_CYCLE
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(TimerConfig::default())
    }
}

// ============================================================================
// IPC Types
// ============================================================================

/// IPC request from client to daemon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum IpcRequest {
    /// Flip the running flag
    Toggle,
    /// Rewind the current phase to its full duration
    Reset,
    /// Apply custom durations
    Config {
        /// Focus duration in minutes
        #[serde(rename = "focusMinutes")]
        focus_minutes: u32,
        /// Short break duration in minutes
        #[serde(rename = "shortBreakMinutes")]
        short_break_minutes: u32,
        /// Long break duration in minutes
        #[serde(rename = "longBreakMinutes")]
        long_break_minutes: u32,
    },
    /// Flip the sound enable flag
    Sound,
    /// Play one cue for auditioning
    TestSound {
        /// Which cue to play
        cue: CueKind,
    },
    /// Query the current snapshot
    Status,
}

/// Read-only snapshot of the timer, as exposed over IPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    /// Seconds left in the current phase
    #[serde(rename = "remainingSeconds")]
    pub remaining_seconds: u32,
    /// Whether the countdown is running
    #[serde(rename = "isActive")]
    pub is_active: bool,
    /// Whether the current phase is a break
    #[serde(rename = "isBreak")]
    pub is_break: bool,
    /// Completed focus sessions
    #[serde(rename = "sessionsCompleted")]
    pub sessions_completed: u32,
    /// Focus duration in minutes
    #[serde(rename = "focusMinutes")]
    pub focus_minutes: u32,
    /// Short break duration in minutes
    #[serde(rename = "shortBreakMinutes")]
    pub short_break_minutes: u32,
    /// Long break duration in minutes
    #[serde(rename = "longBreakMinutes")]
    pub long_break_minutes: u32,
    /// Whether cue playback is enabled
    #[serde(rename = "soundEnabled")]
    pub sound_enabled: bool,
}

impl TimerSnapshot {
    /// Creates a snapshot from the timer state and the sound flag.
    #[must_use]
    pub fn from_state(state: &TimerState, sound_enabled: bool) -> Self {
        Self {
            remaining_seconds: state.remaining_seconds,
            is_active: state.is_active,
            is_break: state.is_break,
            sessions_completed: state.sessions_completed,
            focus_minutes: state.config.focus_minutes,
            short_break_minutes: state.config.short_break_minutes,
            long_break_minutes: state.config.long_break_minutes,
            sound_enabled,
        }
    }

    /// Focus sessions left until the next long break.
    #[must_use]
    pub fn sessions_until_long_break(&self) -> u32 {
        SESSIONS_PER_CYCLE - self.sessions_completed % SESSIONS_PER_CYCLE
    }

    /// Returns true if the current break is a long one.
    ///
    /// Uses the same cadence rule as [`TimerState::is_long_break`], so the
    /// display and the engine agree on the break length.
    #[must_use]
    pub fn is_long_break(&self) -> bool {
        self.sessions_completed > 0 && self.sessions_completed % SESSIONS_PER_CYCLE == 0
    }
}

/// IPC response from daemon to client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcResponse {
    /// Response status ("success" or "error")
    pub status: String,
    /// Human-readable message
    pub message: String,
    /// Snapshot after the command was applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<TimerSnapshot>,
}

impl IpcResponse {
    /// Creates a success response.
    pub fn success(message: impl Into<String>, data: Option<TimerSnapshot>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            data,
        }
    }

    /// Creates an error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            data: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
