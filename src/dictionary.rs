//! The dictionary index: every dictionary word grouped by its [`Occurrence`].
//!
//! Built once from a word list and read-only afterwards, so a single index can be shared
//! by any number of concurrent searches (`DictionaryIndex` is `Send + Sync`).
//!
//! ```
//! use anagrams::dictionary::DictionaryIndex;
//!
//! let index = DictionaryIndex::build(["ate", "eat", "tea", "tee"]);
//! assert_eq!(index.word_anagrams("Eta"), ["ate", "eat", "tea"]);
//! assert!(index.word_anagrams("xyz").is_empty());
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use once_cell::sync::OnceCell;

use crate::occurrence::{word_occurrences, Occurrence};

/// Immutable mapping from an occurrence to the dictionary words that have it.
///
/// Words keep the spelling they had in the source list (e.g. `Sean`); only the key is
/// case-folded. Within one key, words appear in insertion order and only once.
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    by_occurrence: HashMap<Occurrence, Vec<String>>,
    word_count: usize,
}

impl DictionaryIndex {
    /// Group `words` by occurrence.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_occurrence: HashMap<Occurrence, Vec<String>> = HashMap::new();
        let mut word_count = 0;

        for word in words {
            let word = word.as_ref();
            let bucket = by_occurrence.entry(word_occurrences(word)).or_default();
            if !bucket.iter().any(|w| w == word) {
                bucket.push(word.to_string());
                word_count += 1;
            }
        }

        debug!(
            "Built dictionary index: {} words under {} occurrence keys",
            word_count,
            by_occurrence.len()
        );

        let index = Self { by_occurrence, word_count };
        debug_assert!(index.is_consistent(), "every word must be stored under its own occurrence");
        index
    }

    /// Words whose occurrence is exactly `occurrence`; empty when there are none.
    #[must_use]
    pub fn lookup(&self, occurrence: &Occurrence) -> &[String] {
        self.by_occurrence.get(occurrence).map_or(&[], Vec::as_slice)
    }

    /// Every dictionary word that is an anagram of `word`, including `word` itself when
    /// the dictionary has it.
    #[must_use]
    pub fn word_anagrams(&self, word: &str) -> &[String] {
        self.lookup(&word_occurrences(word))
    }

    /// Number of distinct occurrence keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_occurrence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_occurrence.is_empty()
    }

    /// Number of distinct words stored.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Exact-spelling membership test.
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.word_anagrams(word).iter().any(|w| w == word)
    }

    fn is_consistent(&self) -> bool {
        self.by_occurrence
            .iter()
            .all(|(key, words)| words.iter().all(|w| word_occurrences(w) == *key))
    }
}

/// Holds a [`DictionaryIndex`] that is built at most once.
///
/// The owner decides where it lives (a local, a struct field, a `static`). Whichever caller reaches
/// [`SharedIndex::get_or_build`] first builds the index; concurrent callers block until
/// it is ready and then all receive the same `Arc`.
#[derive(Debug, Default)]
pub struct SharedIndex {
    cell: OnceCell<Arc<DictionaryIndex>>,
}

impl SharedIndex {
    #[must_use]
    pub const fn new() -> Self {
        Self { cell: OnceCell::new() }
    }

    /// Return the index, building it from `words()` if this is the first call.
    pub fn get_or_build<F, I, S>(&self, words: F) -> Arc<DictionaryIndex>
    where
        F: FnOnce() -> I,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Arc::clone(self.cell.get_or_init(|| Arc::new(DictionaryIndex::build(words()))))
    }

    /// The index, if it has already been built.
    #[must_use]
    pub fn get(&self) -> Option<Arc<DictionaryIndex>> {
        self.cell.get().map(Arc::clone)
    }
}
