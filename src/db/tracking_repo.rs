//! Repository for the `tracking_entries` table.
//!
//! Free functions over a `&Connection` so the service can run them inside a
//! single rusqlite transaction where atomicity matters. No function here
//! enforces the single-active-session rule; that is the service's job. What
//! this layer does enforce is detection: rows that break the per-entry
//! invariant, or more than one active row, surface as `AppError::Corruption`
//! instead of being silently papered over.

use crate::errors::{AppError, AppResult};
use crate::models::tracking_entry::TrackingEntry;
use rusqlite::{Connection, Row, params};
use std::collections::BTreeMap;

fn map_entry_row(row: &Row) -> rusqlite::Result<TrackingEntry> {
    Ok(TrackingEntry {
        id: row.get("id")?,
        project_name: row.get("project_name")?,
        start_time: row.get("start_time")?,
        stop_time: row.get("stop_time")?,
        elapsed_seconds: row.get("elapsed_seconds")?,
    })
}

/// Per-row consistency check: elapsed must be present exactly when the stop
/// time is, and must equal `stop_time - start_time`.
fn check_entry(entry: TrackingEntry) -> AppResult<TrackingEntry> {
    match (entry.stop_time, entry.elapsed_seconds) {
        (None, None) => Ok(entry),
        (Some(stop), Some(elapsed)) if elapsed == stop - entry.start_time => Ok(entry),
        _ => Err(AppError::Corruption(format!(
            "entry {} has elapsed/stop inconsistent with its start time",
            entry.id
        ))),
    }
}

/// Insert a new entry (started but not stopped). Returns the assigned id.
pub fn insert_entry(conn: &Connection, project_name: &str, start_time: i64) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO tracking_entries (project_name, start_time, stop_time, elapsed_seconds)
         VALUES (?1, ?2, NULL, NULL)",
        params![project_name, start_time],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Fill stop time and elapsed on an existing entry.
/// The caller guarantees the row exists and is still active.
pub fn update_entry(conn: &Connection, id: i64, stop_time: i64, elapsed: i64) -> AppResult<()> {
    conn.execute(
        "UPDATE tracking_entries
         SET stop_time = ?1, elapsed_seconds = ?2
         WHERE id = ?3",
        params![stop_time, elapsed, id],
    )?;
    Ok(())
}

/// The single active entry, if any.
///
/// The store should never hold more than one row with a NULL stop time; if
/// it somehow does, that is corruption and is reported as such rather than
/// returning an arbitrary row.
pub fn get_active_entry(conn: &Connection) -> AppResult<Option<TrackingEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, project_name, start_time, stop_time, elapsed_seconds
         FROM tracking_entries
         WHERE stop_time IS NULL
         LIMIT 2",
    )?;

    let rows = stmt.query_map([], map_entry_row)?;

    let mut active = Vec::new();
    for r in rows {
        active.push(check_entry(r?)?);
    }

    match active.len() {
        0 => Ok(None),
        1 => Ok(active.pop()),
        _ => Err(AppError::Corruption(
            "more than one active tracking entry found".to_string(),
        )),
    }
}

pub fn get_entry_by_id(conn: &Connection, id: i64) -> AppResult<Option<TrackingEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, project_name, start_time, stop_time, elapsed_seconds
         FROM tracking_entries
         WHERE id = ?1",
    )?;

    let mut rows = stmt.query_map([id], map_entry_row)?;
    match rows.next() {
        Some(r) => Ok(Some(check_entry(r?)?)),
        None => Ok(None),
    }
}

/// All entries for one project, most recent first.
pub fn get_entries_by_project(conn: &Connection, project_name: &str) -> AppResult<Vec<TrackingEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, project_name, start_time, stop_time, elapsed_seconds
         FROM tracking_entries
         WHERE project_name = ?1
         ORDER BY start_time DESC",
    )?;

    let rows = stmt.query_map([project_name], map_entry_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(check_entry(r?)?);
    }
    Ok(out)
}

/// All entries, most recent first. `completed_only` drops the active row.
pub fn get_all_entries(conn: &Connection, completed_only: bool) -> AppResult<Vec<TrackingEntry>> {
    let sql = if completed_only {
        "SELECT id, project_name, start_time, stop_time, elapsed_seconds
         FROM tracking_entries
         WHERE stop_time IS NOT NULL
         ORDER BY start_time DESC"
    } else {
        "SELECT id, project_name, start_time, stop_time, elapsed_seconds
         FROM tracking_entries
         ORDER BY start_time DESC"
    };

    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map([], map_entry_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(check_entry(r?)?);
    }
    Ok(out)
}

/// Total elapsed seconds per project over completed entries only.
/// The live time of an active session is the service's business.
pub fn get_project_totals(conn: &Connection) -> AppResult<BTreeMap<String, i64>> {
    let mut stmt = conn.prepare_cached(
        "SELECT project_name, SUM(elapsed_seconds) AS total
         FROM tracking_entries
         WHERE stop_time IS NOT NULL
         GROUP BY project_name",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>("project_name")?,
            row.get::<_, Option<i64>>("total")?.unwrap_or(0),
        ))
    })?;

    let mut totals = BTreeMap::new();
    for r in rows {
        let (project, total) = r?;
        totals.insert(project, total);
    }
    Ok(totals)
}
