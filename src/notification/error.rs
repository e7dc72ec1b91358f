//! Notification system error types.

use thiserror::Error;

/// Errors that can occur in the notification system.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// Failed to request notification authorization from the system.
    #[error("通知許可の取得に失敗しました: {0}")]
    AuthorizationFailed(String),

    /// Failed to deliver a notification.
    #[error("通知の送信に失敗しました: {0}")]
    SendFailed(String),

    /// Failed to initialize the notification system.
    #[error("通知システムの初期化に失敗しました: {0}")]
    InitializationFailed(String),
}

impl NotificationError {
    /// Returns true if this error is related to permissions.
    #[must_use]
    pub fn is_permission_error(&self) -> bool {
        matches!(self, Self::AuthorizationFailed(_))
    }
}
