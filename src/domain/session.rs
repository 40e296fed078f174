// Session state and refresh settings chosen by the user
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const MIN_REFRESH_SECS: u64 = 5;
pub const MAX_REFRESH_SECS: u64 = 60;
pub const DEFAULT_REFRESH_SECS: u64 = 10;

/// Per-session counter, advanced once per refresh cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub refresh_count: u64,
}

impl SessionState {
    pub fn new(refresh_count: u64) -> Self {
        Self { refresh_count }
    }

    /// State for the cycle after this one.
    pub fn advanced(self) -> Self {
        Self {
            refresh_count: self.refresh_count.saturating_add(1),
        }
    }
}

/// Refresh delay, always within 5..=60 seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RefreshInterval(u64);

impl RefreshInterval {
    pub fn from_secs(secs: u64) -> Self {
        Self(secs.clamp(MIN_REFRESH_SECS, MAX_REFRESH_SECS))
    }

    pub fn secs(&self) -> u64 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl Default for RefreshInterval {
    fn default() -> Self {
        Self(DEFAULT_REFRESH_SECS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RefreshMode {
    /// Auto-refresh disabled; the page renders once.
    Idle,
    /// Re-run every panel after each interval.
    Cycling(RefreshInterval),
}

impl RefreshMode {
    pub fn new(auto_refresh: bool, interval: RefreshInterval) -> Self {
        if auto_refresh {
            RefreshMode::Cycling(interval)
        } else {
            RefreshMode::Idle
        }
    }

    pub fn interval(&self) -> Option<RefreshInterval> {
        match self {
            RefreshMode::Cycling(interval) => Some(*interval),
            RefreshMode::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_is_clamped() {
        assert_eq!(RefreshInterval::from_secs(1).secs(), 5);
        assert_eq!(RefreshInterval::from_secs(10).secs(), 10);
        assert_eq!(RefreshInterval::from_secs(600).secs(), 60);
        assert_eq!(RefreshInterval::default().secs(), 10);
    }

    #[test]
    fn test_session_advances_by_one() {
        let session = SessionState::default();
        assert_eq!(session.advanced().refresh_count, 1);
        assert_eq!(session.advanced().advanced().refresh_count, 2);
        assert_eq!(SessionState::new(u64::MAX).advanced().refresh_count, u64::MAX);
    }

    #[test]
    fn test_refresh_mode() {
        let interval = RefreshInterval::from_secs(15);
        assert_eq!(RefreshMode::new(false, interval), RefreshMode::Idle);
        assert_eq!(RefreshMode::new(false, interval).interval(), None);
        assert_eq!(RefreshMode::new(true, interval).interval(), Some(interval));
    }
}
