//! Word validation and submission
//!
//! A submission runs through an ordered list of checks; the first failure
//! short-circuits with a specific user-facing rejection. The duplicate check
//! runs before everything else so a repeated valid word gets the "already
//! found" message instead of being re-scored or called invalid.

use crate::core::{Puzzle, Session};
use crate::wordlists::Dictionary;

/// Minimum accepted word length
pub const MIN_WORD_LEN: usize = 4;

/// Why a submitted word was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The word was already found this session
    AlreadyFound,
    /// Shorter than [`MIN_WORD_LEN`]
    TooShort,
    /// Missing the puzzle's center letter
    MissingCenter { center: u8 },
    /// Uses a letter outside the puzzle's alphabet
    InvalidLetters,
    /// Not in the dictionary
    NotAWord,
}

impl Rejection {
    /// The Kiswahili message shown to the player
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::AlreadyFound => "✗ Tayari umeandika neno hili!".to_string(),
            Self::TooShort => "✗ Neno liwe na herufi 4 au zaidi!".to_string(),
            Self::MissingCenter { center } => {
                format!(
                    "✗ Lazima utumie herufi \"{}\"!",
                    (*center as char).to_ascii_uppercase()
                )
            }
            Self::InvalidLetters => "✗ Tumia herufi zilizopo tu!".to_string(),
            Self::NotAWord => "✗ Neno si sahihi!".to_string(),
        }
    }
}

/// A successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// Points awarded (the word's length)
    pub points: u32,
}

impl Accepted {
    /// The Kiswahili success message shown to the player
    #[must_use]
    pub fn message(&self) -> String {
        format!("✓ Vizuri! +{} alama", self.points)
    }
}

/// All dictionary words solvable under this puzzle
///
/// A word qualifies when it is at least [`MIN_WORD_LEN`] letters, contains
/// the center letter, and uses only puzzle letters. The result is used for
/// the "total possible" count and never sent to the client as a list. Linear
/// scan over the dictionary; the server memoizes the count per day.
#[must_use]
pub fn valid_words<'a>(puzzle: &Puzzle, dictionary: &'a Dictionary) -> Vec<&'a str> {
    let letters = puzzle.letters();
    dictionary
        .iter()
        .filter(|word| {
            word.len() >= MIN_WORD_LEN && puzzle.has_center(word) && letters.contains_word(word)
        })
        .collect()
}

/// Validate a candidate word without mutating the session
///
/// # Errors
/// Returns the first failing check as a [`Rejection`].
pub fn check(
    word: &str,
    session: &Session,
    puzzle: &Puzzle,
    dictionary: &Dictionary,
) -> Result<(), Rejection> {
    // Duplicates first, so a repeated valid word is never re-scored
    if session.contains(word) {
        return Err(Rejection::AlreadyFound);
    }
    if word.len() < MIN_WORD_LEN {
        return Err(Rejection::TooShort);
    }
    if !puzzle.has_center(word) {
        return Err(Rejection::MissingCenter {
            center: puzzle.center(),
        });
    }
    if !puzzle.letters().contains_word(word) {
        return Err(Rejection::InvalidLetters);
    }
    if !dictionary.contains(word) {
        return Err(Rejection::NotAWord);
    }
    Ok(())
}

/// Validate a candidate word and, if accepted, record it in the session
///
/// Expects `word` already lowercased by the caller. On success the word is
/// appended to the session's found words (submission order preserved) and
/// the score grows by the word length.
///
/// # Errors
/// Returns the first failing check as a [`Rejection`]; the session is
/// untouched on rejection.
pub fn submit(
    word: &str,
    session: &mut Session,
    puzzle: &Puzzle,
    dictionary: &Dictionary,
) -> Result<Accepted, Rejection> {
    check(word, session, puzzle, dictionary)?;
    let points = session.record(word);
    Ok(Accepted { points })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle() -> Puzzle {
        Puzzle::parse("a", "mcekbh").unwrap()
    }

    fn dictionary() -> Dictionary {
        Dictionary::embedded()
    }

    #[test]
    fn valid_words_meet_all_three_conditions() {
        let dict = dictionary();
        let valid = valid_words(&puzzle(), &dict);

        assert!(valid.contains(&"mama"));
        assert!(valid.contains(&"kaka"));
        assert!(!valid.is_empty());

        let letters = puzzle().letters();
        for word in &valid {
            assert!(word.len() >= MIN_WORD_LEN);
            assert!(word.contains('a'));
            assert!(letters.contains_word(word));
        }
    }

    #[test]
    fn every_qualifying_dictionary_word_is_valid() {
        let dict = dictionary();
        let puzzle = puzzle();
        let letters = puzzle.letters();
        let valid = valid_words(&puzzle, &dict);

        for word in dict.iter() {
            let qualifies = word.len() >= MIN_WORD_LEN
                && puzzle.has_center(word)
                && letters.contains_word(word);
            assert_eq!(valid.contains(&word), qualifies, "mismatch for {word}");
        }
    }

    #[test]
    fn valid_words_excludes_short_center_words() {
        let dict = Dictionary::from_words(["ama", "mama"]);
        let valid = valid_words(&puzzle(), &dict);
        assert_eq!(valid, ["mama"]);
    }

    #[test]
    fn submit_accepts_and_scores() {
        let dict = dictionary();
        let mut session = Session::new("2025-01-01");

        let accepted = submit("mama", &mut session, &puzzle(), &dict).unwrap();
        assert_eq!(accepted.points, 4);
        assert!(accepted.message().contains("+4"));
        assert_eq!(session.found_count(), 1);
        assert_eq!(session.score(), 4);
        assert_eq!(session.found_words(), ["mama"]);
    }

    #[test]
    fn duplicate_submission_rejected_without_rescoring() {
        let dict = dictionary();
        let mut session = Session::new("2025-01-01");

        submit("mama", &mut session, &puzzle(), &dict).unwrap();
        let err = submit("mama", &mut session, &puzzle(), &dict).unwrap_err();

        assert_eq!(err, Rejection::AlreadyFound);
        assert!(err.message().contains("Tayari"));
        assert_eq!(session.score(), 4);
        assert_eq!(session.found_count(), 1);
    }

    #[test]
    fn short_word_rejected_regardless_of_letters() {
        let dict = dictionary();
        let mut session = Session::new("2025-01-01");

        // "ama" uses only puzzle letters, but is 3 characters
        let err = submit("ama", &mut session, &puzzle(), &dict).unwrap_err();
        assert_eq!(err, Rejection::TooShort);
        assert_eq!(session.found_count(), 0);
    }

    #[test]
    fn empty_word_rejected_as_too_short() {
        let dict = dictionary();
        let mut session = Session::new("2025-01-01");
        assert_eq!(
            submit("", &mut session, &puzzle(), &dict).unwrap_err(),
            Rejection::TooShort
        );
    }

    #[test]
    fn missing_center_rejected_with_letter_in_message() {
        let dict = dictionary();
        let mut session = Session::new("2025-01-01");

        // "cheche" is a dictionary word using only outer letters
        let err = submit("cheche", &mut session, &puzzle(), &dict).unwrap_err();
        assert_eq!(err, Rejection::MissingCenter { center: b'a' });
        assert!(err.message().contains("\"A\""));
    }

    #[test]
    fn foreign_letters_rejected_even_for_dictionary_words() {
        let dict = dictionary();
        let mut session = Session::new("2025-01-01");

        // "maji" is in the dictionary, but j is not a puzzle letter
        let err = submit("maji", &mut session, &puzzle(), &dict).unwrap_err();
        assert_eq!(err, Rejection::InvalidLetters);
    }

    #[test]
    fn unknown_word_rejected_last() {
        let dict = dictionary();
        let mut session = Session::new("2025-01-01");

        // Uses only puzzle letters and the center but is not a word
        let err = submit("makacha", &mut session, &puzzle(), &dict).unwrap_err();
        assert_eq!(err, Rejection::NotAWord);
    }

    #[test]
    fn check_order_duplicate_beats_everything() {
        let dict = dictionary();
        let mut session = Session::new("2025-01-01");
        submit("mama", &mut session, &puzzle(), &dict).unwrap();

        // A found word stays "already found" even though it would also pass
        assert_eq!(
            check("mama", &session, &puzzle(), &dict).unwrap_err(),
            Rejection::AlreadyFound
        );
    }

    #[test]
    fn check_does_not_mutate() {
        let dict = dictionary();
        let session = Session::new("2025-01-01");
        check("mama", &session, &puzzle(), &dict).unwrap();
        assert_eq!(session.found_count(), 0);
    }
}
