//! Time source used for default timestamps.
//!
//! Rendering is a pure function of the record and template except for the
//! timestamp filled in when a record has none. That one value comes from a
//! [`Clock`] so callers (and tests) decide what "now" is.

use chrono::{SecondsFormat, Utc};

/// Provides the current time as an ISO-8601 string.
pub trait Clock: Send + Sync {
    /// Current UTC time, e.g. `2025-01-15T10:30:00.123456Z`.
    fn now_iso(&self) -> String;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_iso(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
    }
}

/// A clock frozen at a fixed timestamp.
#[derive(Debug, Clone)]
pub struct FixedClock(String);

impl FixedClock {
    /// Create a clock that always reports `timestamp`.
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self(timestamp.into())
    }
}

impl Clock for FixedClock {
    fn now_iso(&self) -> String {
        self.0.clone()
    }
}
