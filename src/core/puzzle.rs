//! Daily puzzle representation
//!
//! A Puzzle is a center letter plus six outer letters defining the allowed
//! alphabet for a day's words.

use std::fmt;

/// A set of ASCII lowercase letters backed by a 26-bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// Add a letter to the set
    ///
    /// # Panics
    /// Panics if `letter` is not ASCII lowercase.
    pub fn insert(&mut self, letter: u8) {
        assert!(letter.is_ascii_lowercase());
        self.0 |= 1 << (letter - b'a');
    }

    /// Check whether a byte is a letter in the set
    ///
    /// Anything outside `a..=z` is never a member.
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & (1 << (letter - b'a')) != 0
    }

    /// Check whether every character of `word` is a letter in the set
    #[must_use]
    pub fn contains_word(self, word: &str) -> bool {
        !word.is_empty() && word.bytes().all(|b| self.contains(b))
    }
}

/// A puzzle: one center letter and six distinct outer letters
///
/// Letters are stored as ASCII lowercase bytes. Construction enforces the
/// catalog invariants: outer letters are distinct and none equals the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    center: u8,
    outer: [u8; 6],
}

/// Error type for invalid puzzle definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    InvalidCenter(String),
    InvalidOuterCount(usize),
    NotALetter(char),
    DuplicateLetter(char),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCenter(s) => write!(f, "Center must be a single letter, got {s:?}"),
            Self::InvalidOuterCount(n) => {
                write!(f, "Puzzle must have exactly 6 outer letters, got {n}")
            }
            Self::NotALetter(c) => write!(f, "Invalid puzzle letter {c:?}"),
            Self::DuplicateLetter(c) => write!(f, "Puzzle letter {c:?} appears twice"),
        }
    }
}

impl std::error::Error for PuzzleError {}

impl Puzzle {
    /// Parse a puzzle from a catalog entry: center letter plus outer letters
    ///
    /// Input is case-insensitive; letters are normalized to lowercase.
    ///
    /// # Errors
    /// Returns `PuzzleError` if the center is not a single ASCII letter, the
    /// outer string is not exactly 6 ASCII letters, or any letter repeats
    /// (including an outer letter equal to the center).
    pub fn parse(center: &str, outer: &str) -> Result<Self, PuzzleError> {
        let center = parse_letter_str(center)
            .ok_or_else(|| PuzzleError::InvalidCenter(center.to_string()))?;

        if outer.chars().count() != 6 {
            return Err(PuzzleError::InvalidOuterCount(outer.chars().count()));
        }

        let mut letters = [0u8; 6];
        for (slot, c) in letters.iter_mut().zip(outer.chars()) {
            let lower = c.to_ascii_lowercase();
            if !lower.is_ascii_lowercase() {
                return Err(PuzzleError::NotALetter(c));
            }
            *slot = lower as u8;
        }

        // Distinctness across all seven letters
        let mut seen = LetterSet::default();
        seen.insert(center);
        for &b in &letters {
            if seen.contains(b) {
                return Err(PuzzleError::DuplicateLetter(b as char));
            }
            seen.insert(b);
        }

        Ok(Self {
            center,
            outer: letters,
        })
    }

    /// The center letter (ASCII lowercase)
    #[inline]
    #[must_use]
    pub const fn center(&self) -> u8 {
        self.center
    }

    /// The six outer letters (ASCII lowercase)
    #[inline]
    #[must_use]
    pub const fn outer(&self) -> &[u8; 6] {
        &self.outer
    }

    /// The full allowed alphabet: center plus outer letters
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        let mut set = LetterSet::default();
        set.insert(self.center);
        for &b in &self.outer {
            set.insert(b);
        }
        set
    }

    /// Check whether `word` contains the center letter
    #[must_use]
    pub fn has_center(&self, word: &str) -> bool {
        word.bytes().any(|b| b == self.center)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", (self.center as char).to_ascii_uppercase())?;
        for &b in &self.outer {
            write!(f, " {}", (b as char).to_ascii_uppercase())?;
        }
        Ok(())
    }
}

fn parse_letter_str(s: &str) -> Option<u8> {
    let mut chars = s.chars();
    let c = chars.next()?.to_ascii_lowercase();
    if chars.next().is_some() || !c.is_ascii_lowercase() {
        return None;
    }
    Some(c as u8)
}
