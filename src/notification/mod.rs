//! macOS notification system integration.
//!
//! Native system notifications via `objc2-user-notifications`:
//!
//! - Passive, one-shot authorization request at initialization
//! - Live permission check before every delivery
//! - Per-transition notification content
//!
//! A denied or undecided permission never fails the daemon; the dispatcher
//! checks [`crate::daemon::Notifier::can_notify`] per event and skips
//! delivery when it is false.
//!
//! # Requirements
//!
//! - macOS 10.14+
//! - The binary must be code-signed for notifications to work properly
//!
//! For development, use ad-hoc signing:
//! ```bash
//! codesign --force --deep --sign - target/release/focus-timer
//! ```

mod center;
mod content;
pub mod error;
mod request;

use anyhow::Result;
use objc2::MainThreadMarker;
use tracing::{info, warn};

pub use self::content::{
    create_break_complete_content, create_focus_complete_content, create_milestone_content,
    NotificationContentBuilder,
};
pub use self::error::NotificationError;

use self::center::NotificationCenter;
use self::request::create_notification_request;

use crate::daemon::Notifier;
use crate::types::TimerEvent;

/// System notification delivery through UNUserNotificationCenter.
///
/// Construction requests authorization exactly once; the outcome is only
/// logged. Whether a notification actually goes out is decided per event
/// by the live permission state.
pub struct NotificationManager {
    _private: (),
}

impl NotificationManager {
    /// Creates a new notification manager.
    ///
    /// Requests notification authorization from the user. A denial is
    /// logged, not returned as an error; audio cues are unaffected.
    ///
    /// # Errors
    ///
    /// Returns an error if not running on the main thread.
    pub async fn new() -> Result<Self, NotificationError> {
        MainThreadMarker::new().ok_or_else(|| {
            NotificationError::InitializationFailed(
                "通知システムはメインスレッドで初期化する必要があります".to_string(),
            )
        })?;

        match NotificationCenter::request_authorization().await {
            Ok(true) => info!("通知が許可されています"),
            Ok(false) => {
                warn!("通知許可が拒否されています。システム通知は表示されません。");
                info!("システム環境設定 > 通知 で許可してください。");
            }
            Err(e) => warn!("通知許可のリクエストに失敗しました: {}", e),
        }

        Ok(Self { _private: () })
    }

    /// Creates a notification manager with fallback behavior.
    ///
    /// Returns `None` if initialization fails (with error logged), allowing
    /// the daemon to continue with audio cues only.
    pub async fn new_with_fallback() -> Option<Self> {
        match Self::new().await {
            Ok(manager) => Some(manager),
            Err(e) => {
                warn!("通知システムの初期化に失敗しました: {}", e);
                None
            }
        }
    }
}

impl Notifier for NotificationManager {
    async fn can_notify(&self) -> bool {
        NotificationCenter::is_authorized().await.unwrap_or(false)
    }

    async fn notify(&self, event: &TimerEvent) -> Result<()> {
        let content = match event {
            TimerEvent::FocusCompleted {
                sessions_completed,
                milestone: true,
            } => create_milestone_content(*sessions_completed),
            TimerEvent::FocusCompleted {
                sessions_completed, ..
            } => create_focus_complete_content(*sessions_completed),
            TimerEvent::BreakCompleted => create_break_complete_content(),
        };

        let request = create_notification_request(&content);
        NotificationCenter::add_notification_request(&request).await?;
        Ok(())
    }
}
