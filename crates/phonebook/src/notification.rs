//! Transient banner shown after each mutation.

use chrono::{DateTime, TimeDelta, Utc};

/// How long a banner stays visible.
pub const NOTIFICATION_TTL: TimeDelta = TimeDelta::seconds(4);

/// Banner styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The request went through.
    Success,
    /// The request failed or the data was stale.
    Error,
}

/// A message with an expiry instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    message: String,
    severity: Severity,
    expires_at: DateTime<Utc>,
}

impl Notification {
    pub(crate) fn new(message: impl Into<String>, severity: Severity, now: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            severity,
            expires_at: now + NOTIFICATION_TTL,
        }
    }

    /// Banner text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Banner styling.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Whether the banner should be hidden at `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
