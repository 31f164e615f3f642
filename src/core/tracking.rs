//! The tracking state machine.
//!
//! Whole-system states: Idle (no active entry) and Tracking (exactly one
//! active entry). This service is the only writer path to the store and the
//! enforcement point for the single-active-session invariant. Each start and
//! stop writes its audit transaction and its entry change in one rusqlite
//! transaction, so a crash mid-operation cannot leave the two tables
//! inconsistent with each other.

use crate::core::clock::Clock;
use crate::db::pool::DbPool;
use crate::db::{tracking_repo, transaction_repo};
use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::models::tracking_entry::TrackingEntry;
use crate::models::transaction::Transaction;
use std::collections::BTreeMap;

/// Result of a start request. A refusal is an answer, not an error:
/// callers must match on the outcome before treating an entry as valid.
#[derive(Debug)]
pub enum StartOutcome {
    Started(TrackingEntry),
    /// A session is already running; carries that session.
    AlreadyTracking(TrackingEntry),
}

/// Result of a stop request.
#[derive(Debug)]
pub enum StopOutcome {
    Stopped(TrackingEntry),
    NotTracking,
}

pub struct TrackingService<C: Clock> {
    pool: DbPool,
    clock: C,
}

impl<C: Clock> TrackingService<C> {
    pub fn new(pool: DbPool, clock: C) -> Self {
        Self { pool, clock }
    }

    pub fn now(&self) -> i64 {
        self.clock.now()
    }

    /// Start tracking `project_name`.
    ///
    /// Refused with `AlreadyTracking` when a session is running; in that
    /// case nothing is written. Otherwise the Start transaction and the new
    /// entry are committed atomically with the same timestamp.
    pub fn start_tracking(&mut self, project_name: &str) -> AppResult<StartOutcome> {
        let project_name = project_name.trim();
        if project_name.is_empty() {
            return Err(AppError::InvalidProject(
                "project name must not be empty".to_string(),
            ));
        }

        if let Some(active) = tracking_repo::get_active_entry(&self.pool.conn)? {
            return Ok(StartOutcome::AlreadyTracking(active));
        }

        let now = self.clock.now();

        let tx = self.pool.conn.transaction()?;
        transaction_repo::insert_transaction(&tx, Action::Start, now, project_name)?;
        let entry_id = tracking_repo::insert_entry(&tx, project_name, now)?;
        tx.commit()?;

        let entry = tracking_repo::get_entry_by_id(&self.pool.conn, entry_id)?.ok_or_else(|| {
            AppError::Corruption(format!("entry {} missing right after insert", entry_id))
        })?;

        Ok(StartOutcome::Started(entry))
    }

    /// Stop the active session.
    ///
    /// Refused with `NotTracking` when nothing is running. The stop time is
    /// clamped to the start time if the wall clock moved backward, so
    /// elapsed is never negative and the store constraint holds.
    pub fn stop_tracking(&mut self) -> AppResult<StopOutcome> {
        let Some(active) = tracking_repo::get_active_entry(&self.pool.conn)? else {
            return Ok(StopOutcome::NotTracking);
        };

        let now = self.clock.now();
        let stop_time = now.max(active.start_time);
        let elapsed = stop_time - active.start_time;

        let tx = self.pool.conn.transaction()?;
        transaction_repo::insert_transaction(&tx, Action::Stop, stop_time, &active.project_name)?;
        tracking_repo::update_entry(&tx, active.id, stop_time, elapsed)?;
        tx.commit()?;

        let entry = tracking_repo::get_entry_by_id(&self.pool.conn, active.id)?.ok_or_else(|| {
            AppError::Corruption(format!("entry {} missing right after update", active.id))
        })?;

        Ok(StopOutcome::Stopped(entry))
    }

    /// The active session, if any. Pure read.
    pub fn get_current_status(&self) -> AppResult<Option<TrackingEntry>> {
        tracking_repo::get_active_entry(&self.pool.conn)
    }

    /// Total tracked seconds per project.
    ///
    /// Completed totals come from the store; the active session (if any)
    /// contributes its live elapsed time. Recomputed on every call.
    pub fn get_summary_report(&self) -> AppResult<BTreeMap<String, i64>> {
        let mut totals = tracking_repo::get_project_totals(&self.pool.conn)?;

        if let Some(active) = tracking_repo::get_active_entry(&self.pool.conn)? {
            let live = active.current_elapsed(self.clock.now());
            *totals.entry(active.project_name.clone()).or_insert(0) += live;
        }

        Ok(totals)
    }

    /// Individual sessions, most recent first, optionally filtered to one
    /// project. Active entries carry live `current_elapsed` semantics.
    pub fn get_detail_report(&self, project_name: Option<&str>) -> AppResult<Vec<TrackingEntry>> {
        match project_name {
            Some(p) => tracking_repo::get_entries_by_project(&self.pool.conn, p),
            None => tracking_repo::get_all_entries(&self.pool.conn, false),
        }
    }

    // Read-only audit-trail views for the shell; the UI never talks to the
    // store directly.

    pub fn recent_transactions(&self, limit: usize) -> AppResult<Vec<Transaction>> {
        transaction_repo::get_recent_transactions(&self.pool.conn, limit)
    }

    pub fn transactions_for_project(&self, project_name: &str) -> AppResult<Vec<Transaction>> {
        transaction_repo::get_transactions_by_project(&self.pool.conn, project_name)
    }

    pub fn last_transaction_for_project(
        &self,
        project_name: &str,
    ) -> AppResult<Option<Transaction>> {
        transaction_repo::get_last_transaction_for_project(&self.pool.conn, project_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Deterministic clock shared between the test and the service.
    #[derive(Clone)]
    struct ManualClock(Rc<Cell<i64>>);

    impl ManualClock {
        fn at(t: i64) -> Self {
            ManualClock(Rc::new(Cell::new(t)))
        }

        fn set(&self, t: i64) {
            self.0.set(t);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> i64 {
            self.0.get()
        }
    }

    fn service_at(t: i64) -> (TrackingService<ManualClock>, ManualClock) {
        let pool = DbPool::open_in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        let clock = ManualClock::at(t);
        (TrackingService::new(pool, clock.clone()), clock)
    }

    fn count(svc: &TrackingService<ManualClock>, table: &str) -> i64 {
        svc.pool
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| r.get(0))
            .unwrap()
    }

    #[test]
    fn start_then_status_round_trip() {
        let (mut svc, _) = service_at(1000);

        match svc.start_tracking("P").unwrap() {
            StartOutcome::Started(e) => {
                assert_eq!(e.project_name, "P");
                assert!(e.is_active());
                assert_eq!(e.start_time, 1000);
            }
            other => panic!("expected Started, got {:?}", other),
        }

        let status = svc.get_current_status().unwrap().unwrap();
        assert_eq!(status.project_name, "P");
        assert!(status.is_active());
    }

    #[test]
    fn second_start_is_refused_and_store_unchanged() {
        let (mut svc, _) = service_at(1000);

        svc.start_tracking("Work").unwrap();
        let entries_before = count(&svc, "tracking_entries");
        let txns_before = count(&svc, "transactions");

        match svc.start_tracking("Other").unwrap() {
            StartOutcome::AlreadyTracking(active) => {
                assert_eq!(active.project_name, "Work");
            }
            other => panic!("expected AlreadyTracking, got {:?}", other),
        }

        // Refusal must not write anything.
        assert_eq!(count(&svc, "tracking_entries"), entries_before);
        assert_eq!(count(&svc, "transactions"), txns_before);
    }

    #[test]
    fn stop_without_start_is_refused_with_no_records() {
        let (mut svc, _) = service_at(1000);

        assert!(matches!(
            svc.stop_tracking().unwrap(),
            StopOutcome::NotTracking
        ));
        assert_eq!(count(&svc, "tracking_entries"), 0);
        assert_eq!(count(&svc, "transactions"), 0);
    }

    #[test]
    fn stop_fixes_elapsed_exactly() {
        let (mut svc, clock) = service_at(1000);

        svc.start_tracking("Work").unwrap();
        clock.set(1010);

        match svc.stop_tracking().unwrap() {
            StopOutcome::Stopped(e) => {
                assert_eq!(e.stop_time, Some(1010));
                assert_eq!(e.elapsed_seconds, Some(10));
                assert!(!e.is_active());
            }
            other => panic!("expected Stopped, got {:?}", other),
        }

        assert!(svc.get_current_status().unwrap().is_none());
    }

    #[test]
    fn backward_clock_clamps_elapsed_to_zero() {
        let (mut svc, clock) = service_at(1000);

        svc.start_tracking("Work").unwrap();
        clock.set(900);

        match svc.stop_tracking().unwrap() {
            StopOutcome::Stopped(e) => {
                assert_eq!(e.stop_time, Some(1000));
                assert_eq!(e.elapsed_seconds, Some(0));
            }
            other => panic!("expected Stopped, got {:?}", other),
        }
    }

    #[test]
    fn start_and_stop_share_one_timestamp_with_audit_log() {
        let (mut svc, clock) = service_at(1000);

        svc.start_tracking("Work").unwrap();
        clock.set(1030);
        svc.stop_tracking().unwrap();

        let txns = svc.transactions_for_project("Work").unwrap();
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].action, Action::Stop);
        assert_eq!(txns[0].timestamp, 1030);
        assert_eq!(txns[1].action, Action::Start);
        assert_eq!(txns[1].timestamp, 1000);

        let last = svc.last_transaction_for_project("Work").unwrap().unwrap();
        assert_eq!(last.action, Action::Stop);
    }

    #[test]
    fn blank_project_name_is_rejected() {
        let (mut svc, _) = service_at(1000);

        let err = svc.start_tracking("   ").unwrap_err();
        assert!(matches!(err, AppError::InvalidProject(_)));
        assert_eq!(count(&svc, "tracking_entries"), 0);
    }

    #[test]
    fn summary_aggregates_completed_totals() {
        let (mut svc, clock) = service_at(0);

        for (project, len) in [("A", 100), ("A", 50), ("B", 30)] {
            let t0 = clock.0.get();
            svc.start_tracking(project).unwrap();
            clock.set(t0 + len);
            svc.stop_tracking().unwrap();
        }

        let summary = svc.get_summary_report().unwrap();
        assert_eq!(summary.get("A"), Some(&150));
        assert_eq!(summary.get("B"), Some(&30));
        assert_eq!(summary.len(), 2);
    }

    #[test]
    fn summary_includes_live_session() {
        let (mut svc, clock) = service_at(0);

        svc.start_tracking("A").unwrap();
        clock.set(100);
        svc.stop_tracking().unwrap();

        clock.set(200);
        svc.start_tracking("C").unwrap();
        clock.set(210);

        let summary = svc.get_summary_report().unwrap();
        assert_eq!(summary.get("A"), Some(&100));
        assert_eq!(summary.get("C"), Some(&10));
    }

    #[test]
    fn summary_adds_live_time_to_existing_project_total() {
        let (mut svc, clock) = service_at(0);

        svc.start_tracking("A").unwrap();
        clock.set(100);
        svc.stop_tracking().unwrap();

        clock.set(200);
        svc.start_tracking("A").unwrap();
        clock.set(225);

        let summary = svc.get_summary_report().unwrap();
        assert_eq!(summary.get("A"), Some(&125));
    }

    #[test]
    fn detail_report_filters_by_project() {
        let (mut svc, clock) = service_at(0);

        svc.start_tracking("A").unwrap();
        clock.set(10);
        svc.stop_tracking().unwrap();
        clock.set(20);
        svc.start_tracking("B").unwrap();
        clock.set(30);
        svc.stop_tracking().unwrap();

        let all = svc.get_detail_report(None).unwrap();
        assert_eq!(all.len(), 2);
        // Most recent first
        assert_eq!(all[0].project_name, "B");

        let only_a = svc.get_detail_report(Some("A")).unwrap();
        assert_eq!(only_a.len(), 1);
        assert_eq!(only_a[0].project_name, "A");
    }

    #[test]
    fn corrupt_store_with_two_active_rows_is_reported() {
        let (mut svc, _) = service_at(1000);

        // Write around the service to fabricate the unreachable state.
        tracking_repo::insert_entry(&svc.pool.conn, "A", 1000).unwrap();
        tracking_repo::insert_entry(&svc.pool.conn, "B", 1001).unwrap();

        let err = svc.start_tracking("C").unwrap_err();
        assert!(matches!(err, AppError::Corruption(_)));
    }

    // The end-to-end scenario from the design discussion: start, live
    // status, stop, restart, refused second start.
    #[test]
    fn full_tracking_scenario() {
        let (mut svc, clock) = service_at(1000);

        svc.start_tracking("Work").unwrap();

        clock.set(1010);
        let status = svc.get_current_status().unwrap().unwrap();
        assert_eq!(status.project_name, "Work");
        assert_eq!(status.current_elapsed(clock.now()), 10);

        match svc.stop_tracking().unwrap() {
            StopOutcome::Stopped(e) => {
                assert_eq!(e.stop_time, Some(1010));
                assert_eq!(e.elapsed_seconds, Some(10));
            }
            other => panic!("expected Stopped, got {:?}", other),
        }

        clock.set(2000);
        svc.start_tracking("Work").unwrap();

        match svc.start_tracking("Other").unwrap() {
            StartOutcome::AlreadyTracking(active) => {
                assert_eq!(active.project_name, "Work");
            }
            other => panic!("expected AlreadyTracking, got {:?}", other),
        }

        // No entry for "Other" may exist.
        assert!(svc.get_detail_report(Some("Other")).unwrap().is_empty());
    }
}
