//! The occurrence model: the canonical letter-multiset form of a word or sentence.
//!
//! An [`Occurrence`] is a list of `(letter, count)` pairs sorted by letter, with every
//! count positive. Two words are anagrams of each other exactly when their occurrences
//! are equal, which makes `Occurrence` the key of the dictionary index.
//!
//! Letters are case-folded ASCII; anything else in the input is ignored.
//!
//! ```
//! use anagrams::occurrence::{subtract, word_occurrences, Occurrence};
//!
//! let occ = word_occurrences("Robert");
//! assert_eq!(occ, Occurrence::from_pairs([('b', 1), ('e', 1), ('o', 1), ('r', 2), ('t', 1)]));
//!
//! let rest = subtract(&occ, &word_occurrences("bet"));
//! assert_eq!(rest.to_string(), "[o:1, r:2]");
//! ```

use std::fmt;
use std::fmt::{Display, Formatter};

use crate::letter::{letter_at, Letter, ALPHABET_SIZE};

/// Sorted `(letter, count)` pairs; letters are distinct lowercase ASCII and counts are positive.
///
/// The only ways to build one go through a canonicalising constructor, so any two
/// values that describe the same multiset compare (and hash) equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Occurrence(Vec<(char, usize)>);

impl Occurrence {
    /// The empty occurrence (no letters at all).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an occurrence from arbitrary pairs.
    ///
    /// Letters are case-folded, repeated letters are merged, and zero counts and
    /// non-letters are dropped, so the result is always canonical.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, usize)>,
    {
        let mut counts = [0usize; ALPHABET_SIZE];
        for (c, n) in pairs {
            if let Some(i) = c.letter_index() {
                counts[i] = counts[i].saturating_add(n);
            }
        }
        Self::from_counts(&counts)
    }

    /// Wrap pairs that are already canonical (sorted, distinct, positive).
    pub(crate) fn from_canonical(pairs: Vec<(char, usize)>) -> Self {
        debug_assert!(
            pairs.windows(2).all(|w| w[0].0 < w[1].0),
            "occurrence pairs must be strictly increasing by letter: {pairs:?}"
        );
        debug_assert!(
            pairs.iter().all(|&(c, n)| n > 0 && c.is_ascii_lowercase()),
            "occurrence pairs must be lowercase letters with positive counts: {pairs:?}"
        );
        Self(pairs)
    }

    fn from_counts(counts: &[usize; ALPHABET_SIZE]) -> Self {
        let pairs = counts
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n > 0)
            .map(|(i, &n)| (letter_at(i), n))
            .collect();
        Self::from_canonical(pairs)
    }

    fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut counts = [0usize; ALPHABET_SIZE];
        for i in chars.into_iter().filter_map(|c| c.letter_index()) {
            counts[i] += 1;
        }
        Self::from_counts(&counts)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Total number of letters, counting repeats.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.0.iter().map(|&(_, n)| n).sum()
    }

    /// How many times `letter` occurs (case-insensitive); zero when absent.
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        let Some(letter) = letter.to_letter() else {
            return 0;
        };
        self.0
            .binary_search_by_key(&letter, |&(c, _)| c)
            .map_or(0, |i| self.0[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn as_pairs(&self) -> &[(char, usize)] {
        &self.0
    }

    /// True when every letter of `self` occurs in `other` at least as often.
    #[must_use]
    pub fn is_subset_of(&self, other: &Occurrence) -> bool {
        self.iter().all(|(c, n)| other.count(c) >= n)
    }
}

impl FromIterator<(char, usize)> for Occurrence {
    fn from_iter<T: IntoIterator<Item = (char, usize)>>(iter: T) -> Self {
        Self::from_pairs(iter)
    }
}

impl Display for Occurrence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self.iter().map(|(c, n)| format!("{c}:{n}")).collect();
        write!(f, "[{}]", pairs.join(", "))
    }
}

/// Occurrence of a single word.
#[must_use]
pub fn word_occurrences(word: &str) -> Occurrence {
    Occurrence::from_chars(word.chars())
}

/// Occurrence of a whole sentence; word boundaries don't matter.
#[must_use]
pub fn sentence_occurrences<S: AsRef<str>>(sentence: &[S]) -> Occurrence {
    Occurrence::from_chars(sentence.iter().flat_map(|w| w.as_ref().chars()))
}

/// Remove `y` from `x`, dropping letters whose count reaches zero.
///
/// `y` must be a sub-multiset of `x` (see [`Occurrence::is_subset_of`]). That is checked
/// in debug builds only; in release builds an over-subtracted letter is simply dropped.
#[must_use]
pub fn subtract(x: &Occurrence, y: &Occurrence) -> Occurrence {
    debug_assert!(y.is_subset_of(x), "subtract: {y} is not a sub-multiset of {x}");

    let pairs = x
        .iter()
        .filter_map(|(c, n)| {
            let remaining = n.saturating_sub(y.count(c));
            (remaining > 0).then_some((c, remaining))
        })
        .collect();

    Occurrence::from_canonical(pairs)
}
