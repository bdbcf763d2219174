//! Rendering a submission into a Telegram notification.

use crate::domain::Submission;
use chrono::{DateTime, Utc};
use std::fmt;

/// Timestamp layout of the receipt line.
pub const RECEIVED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Formatted text of one notification, rendered with Telegram's HTML mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage(String);

impl NotificationMessage {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NotificationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render a sanitized submission.
///
/// The phone line is left out entirely when there is no phone. Output is
/// fully determined by the arguments.
pub fn format_notification(
    submission: &Submission,
    received_at: DateTime<Utc>,
    site_name: &str,
) -> NotificationMessage {
    let phone_line = submission
        .phone
        .as_ref()
        .map(|phone| format!("\n📞 <b>Phone:</b> {}", escape(phone.as_str())))
        .unwrap_or_default();

    let text = format!(
        "🔥 <b>New Contact Form Submission - {site}</b>\n\
         \n\
         👤 <b>Name:</b> {name}\n\
         📧 <b>Email:</b> {email}{phone_line}\n\
         \n\
         💬 <b>Message:</b>\n\
         {message}\n\
         \n\
         ---\n\
         <i>Received at: {received}</i>",
        site = escape(site_name),
        name = escape(&submission.name),
        email = escape(&submission.email),
        phone_line = phone_line,
        message = escape(&submission.message),
        received = received_at.format(RECEIVED_AT_FORMAT),
    );

    NotificationMessage(text)
}

/// Telegram's HTML mode rejects a bare `&`. Angle brackets never reach
/// this point.
fn escape(value: &str) -> String {
    value.replace('&', "&amp;")
}
