//! Notification request creation.

use objc2::rc::Retained;
use objc2_foundation::NSString;
use objc2_user_notifications::{UNMutableNotificationContent, UNNotificationRequest};
use uuid::Uuid;

/// Wraps content in a request with a fresh identifier and no trigger, so it
/// is delivered immediately.
#[must_use]
pub fn create_notification_request(
    content: &UNMutableNotificationContent,
) -> Retained<UNNotificationRequest> {
    let identifier = NSString::from_str(&Uuid::new_v4().to_string());

    UNNotificationRequest::requestWithIdentifier_content_trigger(&identifier, content, None)
}
