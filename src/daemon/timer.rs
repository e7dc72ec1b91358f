//! Timer engine for the focus-session daemon.
//!
//! This module provides the engine layer over the state machine:
//! - Command surface used by the IPC request handler
//! - Per-second tick step with exactly one transition event per expiry
//! - A ticker task owned by a guard that stops it on drop

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, warn};

use crate::types::{TimerConfig, TimerError, TimerEvent, TimerState};

// ============================================================================
// TimerEngine
// ============================================================================

/// Timer engine that owns the state machine and emits transition events.
pub struct TimerEngine {
    /// Current timer state
    state: TimerState,
    /// Event sender channel
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl TimerEngine {
    /// Creates a new engine with the given configuration and event channel.
    pub fn new(config: TimerConfig, event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self {
            state: TimerState::new(config),
            event_tx,
        }
    }

    /// Advances the countdown by one second.
    ///
    /// Called once per ticker fire. When the tick expires the phase, the
    /// single transition is evaluated and its event is emitted. A closed
    /// event channel is logged and ignored so the countdown never stalls.
    pub fn step(&mut self) {
        if self.state.tick() {
            let event = self.state.evaluate_expiry();
            debug!("Phase transition: {:?}", event);

            if self.event_tx.send(event).is_err() {
                warn!("Dispatcher channel closed, transition event dropped");
            }
        }
    }

    /// Flips the running flag. Always succeeds.
    pub fn toggle(&mut self) {
        self.state.toggle();
        debug!("Timer active: {}", self.state.is_active);
    }

    /// Stops the countdown and rewinds the current phase to its full duration.
    pub fn reset(&mut self) {
        self.state.reset();
        debug!(
            "Timer reset, {} seconds remaining",
            self.state.remaining_seconds
        );
    }

    /// Applies new durations and reseeds the current phase.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::InvalidDuration`] if any duration is zero or
    /// out of range; the state is unchanged on failure.
    pub fn apply_custom_durations(
        &mut self,
        focus_minutes: u32,
        short_break_minutes: u32,
        long_break_minutes: u32,
    ) -> Result<(), TimerError> {
        self.state
            .apply_custom_durations(focus_minutes, short_break_minutes, long_break_minutes)?;
        debug!(
            "Durations updated: focus={} short={} long={}",
            focus_minutes, short_break_minutes, long_break_minutes
        );
        Ok(())
    }

    /// Returns a reference to the current timer state.
    pub fn get_state(&self) -> &TimerState {
        &self.state
    }

    /// Returns a mutable reference to the timer state (for testing).
    #[cfg(test)]
    pub fn get_state_mut(&mut self) -> &mut TimerState {
        &mut self.state
    }
}

// ============================================================================
// Ticker
// ============================================================================

/// Owner of the periodic tick task.
///
/// The guard aborts the task when dropped, so holding it for the daemon's
/// scope guarantees the ticker stops on every exit path.
pub struct TickerGuard {
    handle: JoinHandle<()>,
}

impl Drop for TickerGuard {
    fn drop(&mut self) {
        self.handle.abort();
        debug!("Ticker task stopped");
    }
}

/// Spawns the 1-second ticker driving the shared engine.
///
/// Late ticks are skipped rather than compensated: a stalled host never
/// produces a burst of catch-up decrements.
pub fn spawn_ticker(engine: Arc<Mutex<TimerEngine>>) -> TickerGuard {
    let handle = tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            engine.lock().await.step();
        }
    });

    TickerGuard { handle }
}

// ============================================================================
// Tests
// ============================================================================
