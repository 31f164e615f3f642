use super::action::Action;
use crate::utils::time::format_datetime_full;

/// Immutable audit record of a single Start or Stop event.
///
/// Rows in `transactions` are append-only; nothing updates or deletes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: i64,
    pub action: Action,
    pub timestamp: i64, // Unix seconds
    pub project_name: String,
}

impl Transaction {
    pub fn formatted_timestamp(&self) -> String {
        format_datetime_full(self.timestamp)
    }
}
