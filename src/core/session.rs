//! Per-player daily session state
//!
//! A session holds the words a player has found today and their score. It is
//! keyed by date: when the stored date no longer matches the current UTC day
//! the session is discarded and a fresh one started (no archiving).

/// One player's state for a single puzzle day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    date: String,
    found_words: Vec<String>,
    score: u32,
}

impl Session {
    /// Start a fresh session for the given date key (`YYYY-MM-DD`)
    #[must_use]
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            found_words: Vec::new(),
            score: 0,
        }
    }

    /// Whether this session belongs to the given date key
    #[must_use]
    pub fn is_for(&self, date_key: &str) -> bool {
        self.date == date_key
    }

    /// The date key this session was created for
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Whether the word has already been found this session
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.found_words.iter().any(|w| w == word)
    }

    /// Record a newly found word and award `word.len()` points
    ///
    /// Returns the score delta. Callers check [`Session::contains`] first;
    /// recording preserves submission order.
    pub fn record(&mut self, word: &str) -> u32 {
        let points = word.len() as u32;
        self.found_words.push(word.to_string());
        self.score += points;
        points
    }

    /// Found words in submission order
    #[must_use]
    pub fn found_words(&self) -> &[String] {
        &self.found_words
    }

    /// Number of words found so far
    #[inline]
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found_words.len()
    }

    /// Cumulative score
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_is_empty() {
        let session = Session::new("2025-01-01");
        assert!(session.is_for("2025-01-01"));
        assert_eq!(session.found_count(), 0);
        assert_eq!(session.score(), 0);
        assert!(session.found_words().is_empty());
    }

    #[test]
    fn record_awards_word_length() {
        let mut session = Session::new("2025-01-01");
        assert_eq!(session.record("mama"), 4);
        assert_eq!(session.record("kitabu"), 6);
        assert_eq!(session.score(), 10);
        assert_eq!(session.found_count(), 2);
    }

    #[test]
    fn record_preserves_submission_order() {
        let mut session = Session::new("2025-01-01");
        session.record("kaka");
        session.record("mama");
        session.record("baba");
        assert_eq!(session.found_words(), ["kaka", "mama", "baba"]);
    }

    #[test]
    fn contains_finds_recorded_words() {
        let mut session = Session::new("2025-01-01");
        session.record("mama");
        assert!(session.contains("mama"));
        assert!(!session.contains("kaka"));
    }

    #[test]
    fn date_mismatch() {
        let session = Session::new("2025-01-01");
        assert!(!session.is_for("2025-01-02"));
    }
}
