//! Notification dispatcher.
//!
//! Reacts to transition events by playing exactly one audio cue and raising
//! at most one system notification. Pure reaction: nothing here feeds back
//! into the timer, and every failure is swallowed after logging.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use crate::sound::CuePlayer;
use crate::types::{CueKind, TimerEvent};

// ============================================================================
// Notifier
// ============================================================================

/// Capability interface for system notifications.
///
/// `can_notify` reflects the live permission state; `notify` raises the
/// notification for one transition event. Permission is requested once at
/// notifier construction, never here.
#[allow(async_fn_in_trait)]
pub trait Notifier {
    /// Returns true if system notifications are currently permitted.
    async fn can_notify(&self) -> bool;

    /// Raises the system notification for a transition event.
    ///
    /// # Errors
    ///
    /// Returns an error if delivery fails.
    async fn notify(&self, event: &TimerEvent) -> Result<()>;
}

/// Notifier for platforms without a system notification center.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    async fn can_notify(&self) -> bool {
        false
    }

    async fn notify(&self, _event: &TimerEvent) -> Result<()> {
        Ok(())
    }
}

// ============================================================================
// NotificationDispatcher
// ============================================================================

/// Maps transition events to cues and system notifications.
pub struct NotificationDispatcher<N: Notifier> {
    /// Audio cue playback
    player: Arc<dyn CuePlayer>,
    /// System notification delivery, when the platform provides one
    notifier: Option<N>,
}

impl<N: Notifier> NotificationDispatcher<N> {
    /// Creates a dispatcher over the given player and optional notifier.
    pub fn new(player: Arc<dyn CuePlayer>, notifier: Option<N>) -> Self {
        Self { player, notifier }
    }

    /// Handles one transition event.
    ///
    /// Plays the event's cue (subject to the player's enable flag) and, when
    /// permission is granted, raises the matching system notification. Cue
    /// and notification are gated independently; a failure of either is
    /// logged and dropped.
    pub async fn dispatch(&self, event: TimerEvent) {
        let cue = CueKind::from(event);
        debug!("Dispatching {:?} as cue {}", event, cue.as_str());

        if let Err(e) = self.player.play_cue(cue) {
            warn!("Cue playback failed: {}", e);
        }

        let Some(notifier) = &self.notifier else {
            return;
        };

        if !notifier.can_notify().await {
            debug!("System notifications not permitted, skipping");
            return;
        }

        if let Err(e) = notifier.notify(&event).await {
            warn!("Failed to deliver system notification: {}", e);
        }
    }
}

// ============================================================================
// MockNotifier
// ============================================================================

/// Mock notifier for testing.
#[derive(Debug)]
pub struct MockNotifier {
    permitted: std::sync::atomic::AtomicBool,
    should_fail: std::sync::atomic::AtomicBool,
    notifications: std::sync::Mutex<Vec<TimerEvent>>,
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MockNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            permitted: std::sync::atomic::AtomicBool::new(true),
            should_fail: std::sync::atomic::AtomicBool::new(false),
            notifications: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn set_permitted(&self, permitted: bool) {
        self.permitted
            .store(permitted, std::sync::atomic::Ordering::SeqCst);
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail
            .store(should_fail, std::sync::atomic::Ordering::SeqCst);
    }

    #[must_use]
    pub fn notification_count(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }

    #[must_use]
    pub fn get_notifications(&self) -> Vec<TimerEvent> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Notifier for &MockNotifier {
    async fn can_notify(&self) -> bool {
        self.permitted.load(std::sync::atomic::Ordering::SeqCst)
    }

    async fn notify(&self, event: &TimerEvent) -> Result<()> {
        if self.should_fail.load(std::sync::atomic::Ordering::SeqCst) {
            anyhow::bail!("mock notification failure");
        }
        self.notifications.lock().unwrap().push(*event);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sound::MockCuePlayer;

    fn focus_event(sessions: u32) -> TimerEvent {
        TimerEvent::FocusCompleted {
            sessions_completed: sessions,
            milestone: sessions % 4 == 0,
        }
    }

    #[tokio::test]
    async fn test_dispatch_plays_focus_complete_cue() {
        let player = Arc::new(MockCuePlayer::new());
        let notifier = MockNotifier::new();
        let dispatcher = NotificationDispatcher::new(
            Arc::clone(&player) as Arc<dyn CuePlayer>,
            Some(&notifier),
        );

        dispatcher.dispatch(focus_event(1)).await;

        assert_eq!(player.get_play_calls(), vec![CueKind::FocusComplete]);
        assert_eq!(notifier.get_notifications(), vec![focus_event(1)]);
    }

    #[tokio::test]
    async fn test_dispatch_plays_milestone_cue_on_fourth_session() {
        let player = Arc::new(MockCuePlayer::new());
        let notifier = MockNotifier::new();
        let dispatcher = NotificationDispatcher::new(
            Arc::clone(&player) as Arc<dyn CuePlayer>,
            Some(&notifier),
        );

        dispatcher.dispatch(focus_event(4)).await;

        assert_eq!(player.get_play_calls(), vec![CueKind::Milestone]);
    }

    #[tokio::test]
    async fn test_dispatch_plays_break_complete_cue() {
        let player = Arc::new(MockCuePlayer::new());
        let notifier = MockNotifier::new();
        let dispatcher = NotificationDispatcher::new(
            Arc::clone(&player) as Arc<dyn CuePlayer>,
            Some(&notifier),
        );

        dispatcher.dispatch(TimerEvent::BreakCompleted).await;

        assert_eq!(player.get_play_calls(), vec![CueKind::BreakComplete]);
    }

    #[tokio::test]
    async fn test_dispatch_exactly_one_cue_per_event() {
        let player = Arc::new(MockCuePlayer::new());
        let notifier = MockNotifier::new();
        let dispatcher = NotificationDispatcher::new(
            Arc::clone(&player) as Arc<dyn CuePlayer>,
            Some(&notifier),
        );

        dispatcher.dispatch(focus_event(1)).await;
        dispatcher.dispatch(TimerEvent::BreakCompleted).await;
        dispatcher.dispatch(focus_event(2)).await;

        assert_eq!(
            player.get_play_calls(),
            vec![
                CueKind::FocusComplete,
                CueKind::BreakComplete,
                CueKind::FocusComplete,
            ]
        );
        assert_eq!(notifier.notification_count(), 3);
    }

    #[tokio::test]
    async fn test_dispatch_swallows_playback_failure() {
        let player = Arc::new(MockCuePlayer::new());
        player.set_should_fail(true);
        let notifier = MockNotifier::new();
        let dispatcher = NotificationDispatcher::new(
            Arc::clone(&player) as Arc<dyn CuePlayer>,
            Some(&notifier),
        );

        dispatcher.dispatch(focus_event(1)).await;

        // The notification still goes out despite the failed cue
        assert_eq!(notifier.notification_count(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_swallows_notification_failure() {
        let player = Arc::new(MockCuePlayer::new());
        let notifier = MockNotifier::new();
        notifier.set_should_fail(true);
        let dispatcher = NotificationDispatcher::new(
            Arc::clone(&player) as Arc<dyn CuePlayer>,
            Some(&notifier),
        );

        dispatcher.dispatch(focus_event(1)).await;

        assert_eq!(player.play_count(), 1);
        assert_eq!(notifier.notification_count(), 0);
    }

    #[tokio::test]
    async fn test_dispatch_without_permission_still_plays_cue() {
        let player = Arc::new(MockCuePlayer::new());
        let notifier = MockNotifier::new();
        notifier.set_permitted(false);
        let dispatcher = NotificationDispatcher::new(
            Arc::clone(&player) as Arc<dyn CuePlayer>,
            Some(&notifier),
        );

        dispatcher.dispatch(focus_event(1)).await;

        assert_eq!(player.play_count(), 1);
        assert_eq!(notifier.notification_count(), 0);
    }

    #[tokio::test]
    async fn test_dispatch_without_notifier_plays_cue_only() {
        let player = Arc::new(MockCuePlayer::new());
        let dispatcher: NotificationDispatcher<NoopNotifier> =
            NotificationDispatcher::new(Arc::clone(&player) as Arc<dyn CuePlayer>, None);

        dispatcher.dispatch(TimerEvent::BreakCompleted).await;

        assert_eq!(player.play_count(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_disabled_player_skips_cue_keeps_notification() {
        let player = Arc::new(MockCuePlayer::new());
        player.set_enabled(false);
        let notifier = MockNotifier::new();
        let dispatcher = NotificationDispatcher::new(
            Arc::clone(&player) as Arc<dyn CuePlayer>,
            Some(&notifier),
        );

        dispatcher.dispatch(focus_event(1)).await;

        assert_eq!(player.play_count(), 0);
        assert_eq!(notifier.notification_count(), 1);
    }

    #[tokio::test]
    async fn test_noop_notifier_never_permits() {
        let notifier = NoopNotifier;
        assert!(!notifier.can_notify().await);
        assert!(notifier.notify(&TimerEvent::BreakCompleted).await.is_ok());
    }
}
