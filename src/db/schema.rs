//! Schema DDL for the two durable tables.
//!
//! `transactions` is the append-only audit log; `tracking_entries` is the
//! mutable session table. Everything here is idempotent so it can run on
//! every store open (there is no migration engine).

use crate::errors::AppResult;
use rusqlite::Connection;

const CREATE_TRANSACTIONS: &str = r#"
    CREATE TABLE IF NOT EXISTS transactions (
        id           INTEGER PRIMARY KEY AUTOINCREMENT,
        action       TEXT NOT NULL CHECK(action IN ('Start', 'Stop')),
        timestamp    INTEGER NOT NULL,
        project_name TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_transactions_project
        ON transactions(project_name);

    CREATE INDEX IF NOT EXISTS idx_transactions_timestamp
        ON transactions(timestamp DESC);
"#;

const CREATE_TRACKING_ENTRIES: &str = r#"
    CREATE TABLE IF NOT EXISTS tracking_entries (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        project_name    TEXT NOT NULL,
        start_time      INTEGER NOT NULL,
        stop_time       INTEGER,
        elapsed_seconds INTEGER,
        CHECK(stop_time IS NULL OR stop_time >= start_time)
    );

    CREATE INDEX IF NOT EXISTS idx_tracking_entries_project
        ON tracking_entries(project_name);

    -- Partial index: "find the active entry" stays cheap no matter how
    -- large the session history grows.
    CREATE INDEX IF NOT EXISTS idx_tracking_entries_active
        ON tracking_entries(stop_time) WHERE stop_time IS NULL;
"#;

/// Create tables and indexes if they do not exist yet.
pub fn create_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(CREATE_TRANSACTIONS)?;
    conn.execute_batch(CREATE_TRACKING_ENTRIES)?;
    Ok(())
}
