use chrono::{DateTime, Duration, Utc};

/// How long a success notice stays visible, in seconds
pub const DISPLAY_WINDOW_SECS: i64 = 3;

/// A transient confirmation shown after a successful submission
#[derive(Debug, Clone)]
pub struct SuccessNotice {
    message: String,
    expires_at: DateTime<Utc>,
}

impl SuccessNotice {
    /// Arm a notice for a submitted batch of `count` activities
    pub fn for_count(count: usize) -> Self {
        Self {
            message: format!("{} activities logged!", count),
            expires_at: Utc::now() + Duration::seconds(DISPLAY_WINDOW_SECS),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the display window has elapsed
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}
