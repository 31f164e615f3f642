use crate::utils::time::format_datetime_full;

/// One tracking session.
///
/// A row in `tracking_entries`: created by `start_tracking` with no stop
/// time, completed exactly once by `stop_tracking`, never deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingEntry {
    pub id: i64,
    pub project_name: String,
    pub start_time: i64, // Unix seconds
    pub stop_time: Option<i64>,
    pub elapsed_seconds: Option<i64>,
}

impl TrackingEntry {
    /// A session is active while it has no stop time.
    pub fn is_active(&self) -> bool {
        self.stop_time.is_none()
    }

    /// Elapsed seconds of this session as of `now`.
    ///
    /// Active sessions are measured live against `now`; completed sessions
    /// return their stored duration. Never negative.
    pub fn current_elapsed(&self, now: i64) -> i64 {
        if self.is_active() {
            (now - self.start_time).max(0)
        } else {
            self.elapsed_seconds.unwrap_or(0)
        }
    }

    pub fn formatted_start(&self) -> String {
        format_datetime_full(self.start_time)
    }

    /// Formatted stop time, or a marker for a still-running session.
    pub fn formatted_stop(&self) -> String {
        match self.stop_time {
            Some(ts) => format_datetime_full(ts),
            None => "Active".to_string(),
        }
    }
}
