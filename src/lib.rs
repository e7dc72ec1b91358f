//! Focus Timer Library
//!
//! This library provides the core functionality for the focus-session
//! timer CLI. It includes:
//! - Timer state machine with the long-break cadence (every 4th session)
//! - Notification dispatcher mapping transitions to cues and notifications
//! - IPC server/client for daemon-CLI communication
//! - CLI command parsing and display utilities
//! - Sound playback for transition cues
//! - Native macOS notification system (macOS only)

pub mod cli;
pub mod daemon;
pub mod sound;
pub mod types;

// macOS-specific notification system
#[cfg(target_os = "macos")]
pub mod notification;

// Re-export commonly used types for convenience
pub use types::{
    CueKind, IpcRequest, IpcResponse, TimerConfig, TimerError, TimerEvent, TimerSnapshot,
    TimerState, MAX_MINUTES, SESSIONS_PER_CYCLE,
};

// Re-export daemon types
pub use daemon::{
    spawn_ticker, MockNotifier, NoopNotifier, NotificationDispatcher, Notifier, TickerGuard,
    TimerEngine,
};

// Re-export notification types on macOS
#[cfg(target_os = "macos")]
pub use notification::{NotificationError, NotificationManager};

// Re-export sound types
pub use sound::{
    create_cue_player, discover_system_sounds, CuePlayer, MockCuePlayer, RodioCuePlayer,
    SilentCuePlayer, SoundError, SoundSource,
};
