//! Dictionary of playable words
//!
//! Provides the embedded word list compiled into the binary and a
//! membership set that is read-only after construction, so it can be shared
//! by reference between any number of games and threads.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::DictionaryError;

use rustc_hash::FxHashSet;

/// Set of lowercase words with their load order preserved
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    lookup: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Entries are trimmed and lowercased. Blank entries and entries with
    /// characters other than ASCII letters are skipped; repeats keep their
    /// first position.
    ///
    /// # Examples
    /// ```
    /// use wordsmush::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["Cat", "bat", "cat", "o'clock"]);
    /// assert_eq!(dictionary.words(), &["cat", "bat"]);
    /// assert!(dictionary.contains("CAT"));
    /// ```
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();
        for entry in entries {
            let word = entry.as_ref().trim().to_ascii_lowercase();
            if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
                continue;
            }
            if dictionary.lookup.insert(word.clone()) {
                dictionary.words.push(word);
            }
        }
        dictionary
    }

    /// The word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        loader::words_from_slice(WORDS)
    }

    /// Case-insensitive exact membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.lookup.contains(&word.to_ascii_lowercase())
        } else {
            self.lookup.contains(word)
        }
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

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
