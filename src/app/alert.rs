use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
    Warning,
    Info,
}

#[derive(Clone, Debug)]
pub struct Alert {
    pub message: String,
    pub severity: Severity,
    pub expires_at: Instant,
}

/// Holds at most one alert; showing a new one replaces the old.
#[derive(Debug)]
pub struct AlertBoard {
    ttl: Duration,
    current: Option<Alert>,
}

impl AlertBoard {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, current: None }
    }

    pub fn show(&mut self, message: impl Into<String>, severity: Severity) {
        self.show_at(message, severity, Instant::now());
    }

    pub fn show_at(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.current = Some(Alert {
            message: message.into(),
            severity,
            expires_at: now + self.ttl,
        });
    }

    pub fn visible(&self, now: Instant) -> Option<&Alert> {
        self.current.as_ref().filter(|alert| now < alert.expires_at)
    }

    pub fn prune(&mut self, now: Instant) {
        if self.visible(now).is_none() {
            self.current = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_alert_replaces_previous() {
        let mut board = AlertBoard::new(Duration::from_secs(5));
        let now = Instant::now();
        board.show_at("Processing your vote...", Severity::Info, now);
        board.show_at("Network error. Please try again.", Severity::Danger, now);

        let alert = board.visible(now).unwrap();
        assert_eq!(alert.severity, Severity::Danger);
        assert_eq!(alert.message, "Network error. Please try again.");
    }

    #[test]
    fn alert_expires_after_ttl() {
        let mut board = AlertBoard::new(Duration::from_secs(5));
        let now = Instant::now();
        board.show_at("Logged out successfully", Severity::Info, now);

        assert!(board.visible(now + Duration::from_secs(4)).is_some());
        assert!(board.visible(now + Duration::from_secs(5)).is_none());

        board.prune(now + Duration::from_secs(6));
        assert!(board.current.is_none());
    }
}
