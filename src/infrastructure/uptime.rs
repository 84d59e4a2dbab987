use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Elapsed process uptime
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UptimeInfo {
    pub seconds: u64,
    pub human: String,
}

/// Process start time, captured once at initialization
#[derive(Debug, Clone, Copy)]
pub struct UptimeTracker {
    started_at: DateTime<Utc>,
    started: Instant,
}

impl UptimeTracker {
    pub fn start() -> Self {
        Self {
            started_at: Utc::now(),
            started: Instant::now(),
        }
    }

    /// Wall-clock start time (UTC)
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Whole seconds since start, measured on the monotonic clock
    pub fn seconds(&self) -> u64 {
        self.started.elapsed().as_secs()
    }

    pub fn elapsed(&self) -> UptimeInfo {
        let seconds = self.seconds();
        UptimeInfo {
            seconds,
            human: humanize(seconds),
        }
    }
}

/// Format seconds as `"<H> hours, <M> minutes"`
pub fn humanize(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{} hours, {} minutes", hours, minutes)
}
