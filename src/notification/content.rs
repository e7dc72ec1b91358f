//! Notification content construction.
//!
//! One content constructor per transition kind. The copy differs between
//! focus completion and break completion so the two stay distinguishable
//! in Notification Center.

use objc2::rc::Retained;
use objc2_foundation::NSString;
use objc2_user_notifications::{UNMutableNotificationContent, UNNotificationSound};

/// Builder for constructing notification content.
pub struct NotificationContentBuilder {
    content: Retained<UNMutableNotificationContent>,
}

impl NotificationContentBuilder {
    /// Creates a new notification content builder.
    #[must_use]
    pub fn new() -> Self {
        let content = unsafe { UNMutableNotificationContent::new() };
        Self { content }
    }

    /// Sets the notification title.
    #[must_use]
    pub fn title(self, title: &str) -> Self {
        let title = NSString::from_str(title);
        unsafe {
            self.content.setTitle(&title);
        }
        self
    }

    /// Sets the notification subtitle.
    #[must_use]
    pub fn subtitle(self, subtitle: &str) -> Self {
        let subtitle = NSString::from_str(subtitle);
        unsafe {
            self.content.setSubtitle(&subtitle);
        }
        self
    }

    /// Sets the notification body text.
    #[must_use]
    pub fn body(self, body: &str) -> Self {
        let body = NSString::from_str(body);
        unsafe {
            self.content.setBody(&body);
        }
        self
    }

    /// Sets the default system sound.
    #[must_use]
    pub fn default_sound(self) -> Self {
        let sound = unsafe { UNNotificationSound::defaultSound() };
        unsafe {
            self.content.setSound(Some(&sound));
        }
        self
    }

    /// Builds and returns the notification content.
    #[must_use]
    pub fn build(self) -> Retained<UNMutableNotificationContent> {
        self.content
    }
}

impl Default for NotificationContentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates notification content for a regular focus session completion.
#[must_use]
pub fn create_focus_complete_content(
    sessions_completed: u32,
) -> Retained<UNMutableNotificationContent> {
    NotificationContentBuilder::new()
        .title("🍅 フォーカスタイマー")
        .subtitle(&format!("セッション {} 完了", sessions_completed))
        .body("集中セッションが終了しました。休憩してください。")
        .default_sound()
        .build()
}

/// Creates notification content for a milestone focus session completion.
///
/// Raised on every 4th completed session, when a long break begins.
#[must_use]
pub fn create_milestone_content(
    sessions_completed: u32,
) -> Retained<UNMutableNotificationContent> {
    NotificationContentBuilder::new()
        .title("🎉 フォーカスタイマー")
        .subtitle(&format!("セッション {} 完了", sessions_completed))
        .body("おつかれさまです！長い休憩を取りましょう。")
        .default_sound()
        .build()
}

/// Creates notification content for a break completion.
#[must_use]
pub fn create_break_complete_content() -> Retained<UNMutableNotificationContent> {
    NotificationContentBuilder::new()
        .title("☕ フォーカスタイマー")
        .body("休憩時間が終了しました。次のセッションを開始してください。")
        .default_sound()
        .build()
}
