//! Repository for the append-only `transactions` audit log.
//! Inserts and queries only; there is deliberately no update or delete.

use crate::errors::AppResult;
use crate::models::action::Action;
use crate::models::transaction::Transaction;
use rusqlite::{Connection, Row, params};

fn map_transaction_row(row: &Row) -> rusqlite::Result<Transaction> {
    let action_str: String = row.get("action")?;
    let action = Action::from_db_str(&action_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            format!("invalid action: {}", action_str).into(),
        )
    })?;

    Ok(Transaction {
        id: row.get("id")?,
        action,
        timestamp: row.get("timestamp")?,
        project_name: row.get("project_name")?,
    })
}

/// Append one audit record. Returns the assigned id.
pub fn insert_transaction(
    conn: &Connection,
    action: Action,
    timestamp: i64,
    project_name: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO transactions (action, timestamp, project_name)
         VALUES (?1, ?2, ?3)",
        params![action.to_db_str(), timestamp, project_name],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All audit records for one project, most recent first.
pub fn get_transactions_by_project(
    conn: &Connection,
    project_name: &str,
) -> AppResult<Vec<Transaction>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, action, timestamp, project_name
         FROM transactions
         WHERE project_name = ?1
         ORDER BY timestamp DESC",
    )?;

    let rows = stmt.query_map([project_name], map_transaction_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Most recent audit records across all projects, capped at `limit`.
pub fn get_recent_transactions(conn: &Connection, limit: usize) -> AppResult<Vec<Transaction>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, action, timestamp, project_name
         FROM transactions
         ORDER BY timestamp DESC
         LIMIT ?1",
    )?;

    let rows = stmt.query_map([limit as i64], map_transaction_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// The most recent audit record for a project, if any.
pub fn get_last_transaction_for_project(
    conn: &Connection,
    project_name: &str,
) -> AppResult<Option<Transaction>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, action, timestamp, project_name
         FROM transactions
         WHERE project_name = ?1
         ORDER BY timestamp DESC
         LIMIT 1",
    )?;

    let mut rows = stmt.query_map([project_name], map_transaction_row)?;
    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}
