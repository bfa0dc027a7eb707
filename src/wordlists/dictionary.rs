//! The fixed dictionary of accepted words

use rustc_hash::FxHashSet;

/// An immutable set of accepted words with a stable iteration order
///
/// Keeps the original list order for deterministic valid-word scans and an
/// `FxHashSet` index for O(1) membership checks on submission.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from a word list, dropping duplicates
    ///
    /// Words are normalized to lowercase.
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ordered = Vec::new();
        let mut index = FxHashSet::default();
        for word in words {
            let word = word.as_ref().to_lowercase();
            if index.insert(word.clone()) {
                ordered.push(word);
            }
        }
        Self {
            words: ordered,
            index,
        }
    }

    /// The embedded Kiswahili dictionary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(super::WORDS.iter().copied())
    }

    /// Membership check (expects a lowercase word)
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Words in original list order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
