use crate::infrastructure::uptime::UptimeTracker;

/// Application state shared across all handlers
///
/// Everything in here is fixed at startup; handlers only read it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Process start time for uptime reporting
    pub uptime: UptimeTracker,
}

impl AppState {
    pub fn new() -> Self {
        let uptime = UptimeTracker::start();
        tracing::debug!("Process start recorded at {}", uptime.started_at());

        Self { uptime }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
