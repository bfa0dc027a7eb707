//! Shared server state
//!
//! Dictionary and catalog are immutable after startup; the session store and
//! the per-day memo are the only mutable pieces. The clock is injected so
//! handler behavior is a function of a controllable date in tests.

use super::session::{MemoryStore, SessionStore};
use crate::core::{Puzzle, Session, UtcDay};
use crate::game;
use crate::wordlists::Dictionary;
use std::sync::{Mutex, PoisonError};

/// Memoized per-day facts, recomputed on date rollover
#[derive(Debug, Clone, Copy)]
struct DailyCache {
    day: UtcDay,
    puzzle: Puzzle,
    total_possible: usize,
}

/// State shared by all request handlers
pub struct AppState {
    dictionary: Dictionary,
    catalog: Vec<Puzzle>,
    store: Box<dyn SessionStore>,
    clock: fn() -> UtcDay,
    daily: Mutex<Option<DailyCache>>,
}

impl AppState {
    /// Production state: in-memory sessions, system clock
    ///
    /// # Panics
    /// Panics if `catalog` is empty; the embedded catalog is checked
    /// non-empty at build time.
    #[must_use]
    pub fn new(dictionary: Dictionary, catalog: Vec<Puzzle>) -> Self {
        Self::with_parts(
            dictionary,
            catalog,
            Box::new(MemoryStore::default()),
            UtcDay::today,
        )
    }

    /// State with an injected session store and clock (used by tests)
    #[must_use]
    pub fn with_parts(
        dictionary: Dictionary,
        catalog: Vec<Puzzle>,
        store: Box<dyn SessionStore>,
        clock: fn() -> UtcDay,
    ) -> Self {
        assert!(!catalog.is_empty(), "puzzle catalog must not be empty");
        Self {
            dictionary,
            catalog,
            store,
            clock,
            daily: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    /// Today's date, puzzle, and total possible valid words
    ///
    /// The valid-word scan runs once per day per process; subsequent calls
    /// hit the memo until the UTC date rolls over.
    #[must_use]
    pub fn daily(&self) -> (UtcDay, Puzzle, usize) {
        let today = (self.clock)();
        let mut memo = self.daily.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(cache) = memo.as_ref() {
            if cache.day == today {
                return (cache.day, cache.puzzle, cache.total_possible);
            }
        }

        let puzzle = *game::puzzle_for(today, &self.catalog);
        let total_possible = game::valid_words(&puzzle, &self.dictionary).len();
        *memo = Some(DailyCache {
            day: today,
            puzzle,
            total_possible,
        });
        (today, puzzle, total_possible)
    }

    /// The client's session for the given date key, reset on date rollover
    #[must_use]
    pub fn session_for(&self, key: &str, date_key: &str) -> Session {
        match self.store.get(key) {
            Some(session) if session.is_for(date_key) => session,
            _ => Session::new(date_key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists;

    fn test_state(clock: fn() -> UtcDay) -> AppState {
        AppState::with_parts(
            Dictionary::embedded(),
            wordlists::catalog().unwrap(),
            Box::new(MemoryStore::default()),
            clock,
        )
    }

    #[test]
    fn daily_is_stable_within_a_day() {
        let state = test_state(|| UtcDay::from_ymd(2025, 1, 1));
        let first = state.daily();
        let second = state.daily();
        assert_eq!(first.1, second.1);
        assert_eq!(first.2, second.2);
        assert!(first.2 > 0);
    }

    #[test]
    fn session_reset_on_date_mismatch() {
        let state = test_state(|| UtcDay::from_ymd(2025, 1, 1));

        let mut stale = Session::new("2024-12-31");
        stale.record("mama");
        state.store().put("key", stale);

        let session = state.session_for("key", "2025-01-01");
        assert!(session.is_for("2025-01-01"));
        assert_eq!(session.found_count(), 0);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn session_kept_when_date_matches() {
        let state = test_state(|| UtcDay::from_ymd(2025, 1, 1));

        let mut current = Session::new("2025-01-01");
        current.record("mama");
        state.store().put("key", current.clone());

        assert_eq!(state.session_for("key", "2025-01-01"), current);
    }

    #[test]
    fn unknown_key_gets_fresh_session() {
        let state = test_state(|| UtcDay::from_ymd(2025, 1, 1));
        let session = state.session_for("nobody", "2025-01-01");
        assert_eq!(session.found_count(), 0);
    }
}
