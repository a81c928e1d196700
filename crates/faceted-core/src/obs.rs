//! Observability counters.
//!
//! Process-local accounting for query execution and lookup memoization.
//! Counters are thread-local: each request thread observes its own
//! activity, and tests never race each other.

use serde::Serialize;
use std::cell::RefCell;

thread_local! {
    static STATE: RefCell<Counters> = RefCell::new(Counters::default());
}

///
/// Counters
///
/// Snapshot of the activity counters. Saturating throughout; counters are
/// diagnostics, not invariants.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Counters {
    pub queries_executed: u64,
    pub rows_scanned: u64,
    pub facet_rows_scanned: u64,
    pub memo_hits: u64,
    pub memo_misses: u64,
}

///
/// ObsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum ObsEvent {
    QueryExecuted {
        rows_scanned: u64,
        facet_rows_scanned: u64,
    },
    MemoHit,
    MemoMiss,
}

/// Record one event into the thread-local counter state.
pub fn record(event: ObsEvent) {
    STATE.with(|state| {
        let mut counters = state.borrow_mut();
        match event {
            ObsEvent::QueryExecuted {
                rows_scanned,
                facet_rows_scanned,
            } => {
                counters.queries_executed = counters.queries_executed.saturating_add(1);
                counters.rows_scanned = counters.rows_scanned.saturating_add(rows_scanned);
                counters.facet_rows_scanned = counters
                    .facet_rows_scanned
                    .saturating_add(facet_rows_scanned);
            }
            ObsEvent::MemoHit => {
                counters.memo_hits = counters.memo_hits.saturating_add(1);
            }
            ObsEvent::MemoMiss => {
                counters.memo_misses = counters.memo_misses.saturating_add(1);
            }
        }
    });
}

/// Snapshot the current counter state.
#[must_use]
pub fn snapshot() -> Counters {
    STATE.with(|state| *state.borrow())
}

/// Reset all counters.
pub fn reset() {
    STATE.with(|state| {
        *state.borrow_mut() = Counters::default();
    });
}

///
/// TESTS
///
