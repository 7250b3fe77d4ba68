//! The sentence search: every way to spell a sentence's letters with dictionary words.
//!
//! [`sentence_anagrams`] returns a lazy iterator. Each call to `next` does only the work
//! needed to find one more sentence, so callers can stop at any time (`take(n)`) without
//! paying for the rest of the search space, which grows exponentially with the number of
//! distinct letters.
//!
//! [`solve_sentence`] is a bounded driver on top of the iterator: it collects results
//! until it has enough, the search is exhausted, or a wall-clock budget runs out.
//!
//! # Examples
//!
//! ## Lazy enumeration
//!
//! ```
//! use anagrams::dictionary::DictionaryIndex;
//! use anagrams::solver::sentence_anagrams;
//!
//! let index = DictionaryIndex::build(["yes", "man", "men", "say", "my", "as", "en"]);
//! let first: Vec<Vec<&str>> = sentence_anagrams(&index, &["Yes", "man"]).take(3).collect();
//! assert_eq!(first.len(), 3);
//! ```
//!
//! ## Bounded search with status
//!
//! ```
//! use std::time::Duration;
//! use anagrams::dictionary::DictionaryIndex;
//! use anagrams::solver::{self, SolveStatus};
//!
//! let index = DictionaryIndex::build(["Linux", "rulez"]);
//! let result = solver::solve_sentence(&index, &["Linux", "rulez"], 10, Duration::from_secs(5))?;
//!
//! assert_eq!(result.status, SolveStatus::SearchExhausted);
//! for sentence in &result.sentences {
//!     println!("{}", solver::sentence_to_string(sentence));
//! }
//! # Ok::<(), anagrams::errors::AnagramError>(())
//! ```

use std::iter::FusedIterator;
use std::time::Duration;

use instant::Instant;
use log::{debug, info};

use crate::combinations::Combinations;
use crate::dictionary::DictionaryIndex;
use crate::errors::AnagramError;
use crate::occurrence::{sentence_occurrences, subtract, Occurrence};

/// An anagram sentence; the words borrow from the dictionary index.
pub type Sentence<'a> = Vec<&'a str>;

/// All anagram sentences of `sentence`, lazily.
///
/// Every yielded sentence uses only dictionary words, and its letters are exactly the
/// letters of `sentence`. Every such sentence (in every word order) is yielded once.
/// The empty sentence has exactly one anagram: the empty sentence.
pub fn sentence_anagrams<'a, S: AsRef<str>>(index: &'a DictionaryIndex, sentence: &[S]) -> SentenceAnagrams<'a> {
    anagrams_of(index, sentence_occurrences(sentence))
}

/// All anagram sentences whose combined occurrence is `occurrence`, lazily.
#[must_use]
pub fn anagrams_of(index: &DictionaryIndex, occurrence: Occurrence) -> SentenceAnagrams<'_> {
    SentenceAnagrams::new(index, occurrence)
}

/// One level of the depth-first search: the letters still to be covered and a cursor
/// over the (sub-multiset, word) choices for the next word.
#[derive(Debug)]
struct Frame {
    remaining: Occurrence,
    /// Sub-multisets of `remaining` not yet tried, produced on demand.
    subsets: Combinations,
    /// The sub-multiset whose words are being placed; it spells at least one word.
    candidate: Option<Occurrence>,
    word_idx: usize,
    /// `remaining - candidate`, computed on first use.
    rest: Option<Occurrence>,
}

impl Frame {
    fn new(remaining: Occurrence) -> Self {
        debug_assert!(!remaining.is_empty(), "frames are only opened for letters still to cover");
        let subsets = Combinations::new(&remaining);
        Self { remaining, subsets, candidate: None, word_idx: 0, rest: None }
    }

    /// The next word to place at this level, with the letters it leaves over.
    fn advance<'a>(&mut self, index: &'a DictionaryIndex) -> Option<(&'a str, Occurrence)> {
        loop {
            if let Some(candidate) = &self.candidate {
                if let Some(word) = index.lookup(candidate).get(self.word_idx) {
                    self.word_idx += 1;
                    let remaining = &self.remaining;
                    let rest = self.rest.get_or_insert_with(|| subtract(remaining, candidate));
                    return Some((word.as_str(), rest.clone()));
                }
            }

            // The empty sub-multiset is never a candidate: it would leave `remaining`
            // unchanged and recurse forever if the index held a word with no letters.
            self.candidate = self
                .subsets
                .find(|s| !s.is_empty() && !index.lookup(s).is_empty());
            self.word_idx = 0;
            self.rest = None;
            self.candidate.as_ref()?;
        }
    }
}

/// Lazy iterator over anagram sentences; see [`sentence_anagrams`].
///
/// Implemented as an explicit stack of [`Frame`]s rather than recursion, so the search
/// can be suspended between results. `path` holds the words chosen so far, one per
/// frame below the top.
#[derive(Debug)]
pub struct SentenceAnagrams<'a> {
    index: &'a DictionaryIndex,
    stack: Vec<Frame>,
    path: Vec<&'a str>,
    /// The target had no letters: yield the empty sentence once.
    pending_empty: bool,
}

impl<'a> SentenceAnagrams<'a> {
    fn new(index: &'a DictionaryIndex, occurrence: Occurrence) -> Self {
        let pending_empty = occurrence.is_empty();
        let stack = if pending_empty { Vec::new() } else { vec![Frame::new(occurrence)] };
        Self { index, stack, path: Vec::new(), pending_empty }
    }
}

impl<'a> Iterator for SentenceAnagrams<'a> {
    type Item = Sentence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending_empty {
            self.pending_empty = false;
            return Some(Vec::new());
        }

        loop {
            debug_assert_eq!(
                self.path.len() + 1,
                self.stack.len().max(1),
                "one chosen word per frame below the top"
            );

            let frame = self.stack.last_mut()?;
            match frame.advance(self.index) {
                None => {
                    // This level is exhausted; backtrack the word that opened it.
                    self.stack.pop();
                    self.path.pop();
                }
                Some((word, rest)) if rest.is_empty() => {
                    let mut sentence = Vec::with_capacity(self.path.len() + 1);
                    sentence.extend_from_slice(&self.path);
                    sentence.push(word);
                    return Some(sentence);
                }
                Some((word, rest)) => {
                    self.path.push(word);
                    self.stack.push(Frame::new(rest));
                }
            }
        }
    }
}

impl FusedIterator for SentenceAnagrams<'_> {}

/// Status of a bounded search.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveStatus {
    /// Every anagram sentence was produced.
    SearchExhausted,

    /// Stopped because the requested number of results was found.
    FoundEnough,

    /// Stopped because the time budget expired. Contains the elapsed time.
    TimedOut { elapsed: Duration },
}

/// Result of [`solve_sentence`] (even if it stopped early).
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Sentences found, in search order.
    pub sentences: Vec<Vec<String>>,
    /// Why the search stopped.
    pub status: SolveStatus,
    /// The letters that every sentence spells.
    pub occurrence: Occurrence,
}

impl SolveResult {
    #[must_use]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl IntoIterator for SolveResult {
    type Item = Vec<String>;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.into_iter()
    }
}

/// Simple helper to enforce a wall-clock time limit.
struct TimeBudget {
    start: Instant,
    limit: Duration,
}

impl TimeBudget {
    fn new(limit: Duration) -> Self {
        Self { start: Instant::now(), limit }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn expired(&self) -> bool {
        self.start.elapsed() >= self.limit
    }
}

/// Collect anagram sentences of `sentence`, up to `num_results_requested`.
///
/// The time budget is checked between results, so a single very long gap between two
/// results can overrun it.
///
/// # Errors
/// Returns [`AnagramError::InvalidResultCount`] if `num_results_requested` is zero.
pub fn solve_sentence<S: AsRef<str>>(
    index: &DictionaryIndex,
    sentence: &[S],
    num_results_requested: usize,
    time_budget: Duration,
) -> Result<SolveResult, AnagramError> {
    if num_results_requested == 0 {
        return Err(AnagramError::InvalidResultCount);
    }

    let occurrence = sentence_occurrences(sentence);
    debug!("Searching anagrams of {occurrence} ({} letters)", occurrence.letter_count());

    let budget = TimeBudget::new(time_budget);
    let mut anagrams = anagrams_of(index, occurrence.clone());
    let mut sentences: Vec<Vec<String>> = Vec::with_capacity(num_results_requested.min(1000));

    let status = loop {
        if sentences.len() >= num_results_requested {
            break SolveStatus::FoundEnough;
        }
        if budget.expired() {
            break SolveStatus::TimedOut { elapsed: budget.elapsed() };
        }
        match anagrams.next() {
            Some(found) => {
                debug_assert_eq!(
                    sentence_occurrences(&found),
                    occurrence,
                    "anagram sentence must use exactly the input letters"
                );
                sentences.push(found.into_iter().map(str::to_string).collect());
            }
            None => break SolveStatus::SearchExhausted,
        }
    };

    info!("Found {} anagram sentences ({status:?}) in {:.3}s", sentences.len(), budget.elapsed().as_secs_f64());

    Ok(SolveResult { sentences, status, occurrence })
}

/// Join a sentence's words with a bullet; the empty sentence renders as `∅`.
pub fn sentence_to_string<S: AsRef<str>>(sentence: &[S]) -> String {
    if sentence.is_empty() {
        return "∅".to_string();
    }
    sentence.iter().map(|w| w.as_ref()).collect::<Vec<&str>>().join(" • ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occurrence::word_occurrences;
    use std::collections::HashSet;

    const YES_MAN_WORDS: [&str; 9] = ["en", "as", "my", "man", "yes", "men", "say", "sane", "Sean"];

    fn owned(sentences: Vec<Sentence<'_>>) -> HashSet<Vec<String>> {
        sentences
            .into_iter()
            .map(|s| s.into_iter().map(str::to_string).collect())
            .collect()
    }

    fn set_of(expected: &[&[&str]]) -> HashSet<Vec<String>> {
        expected
            .iter()
            .map(|s| s.iter().map(|w| w.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_empty_sentence_has_one_anagram() {
        let index = DictionaryIndex::build(YES_MAN_WORDS);
        let empty: [&str; 0] = [];
        let results: Vec<Sentence> = sentence_anagrams(&index, &empty).collect();
        assert_eq!(results, vec![Vec::<&str>::new()]);
    }

    #[test]
    fn test_no_letters_is_the_empty_sentence() {
        let index = DictionaryIndex::build(YES_MAN_WORDS);
        let results: Vec<Sentence> = sentence_anagrams(&index, &["", "123", "--"]).collect();
        assert_eq!(results, vec![Vec::<&str>::new()]);
    }

    #[test]
    fn test_yes_man() {
        let index = DictionaryIndex::build(YES_MAN_WORDS);
        let results: Vec<Sentence> = sentence_anagrams(&index, &["Yes", "man"]).collect();
        assert_eq!(results.len(), 14);

        let expected = set_of(&[
            &["en", "as", "my"],
            &["en", "my", "as"],
            &["man", "yes"],
            &["men", "say"],
            &["as", "en", "my"],
            &["as", "my", "en"],
            &["sane", "my"],
            &["Sean", "my"],
            &["my", "en", "as"],
            &["my", "as", "en"],
            &["my", "sane"],
            &["my", "Sean"],
            &["say", "men"],
            &["yes", "man"],
        ]);
        assert_eq!(owned(results), expected);
    }

    #[test]
    fn test_no_duplicate_sentences() {
        let index = DictionaryIndex::build(YES_MAN_WORDS);
        let results: Vec<Sentence> = sentence_anagrams(&index, &["Yes", "man"]).collect();
        let unique: HashSet<&Sentence> = results.iter().collect();
        assert_eq!(unique.len(), results.len());
    }

    #[test]
    fn test_mass_conservation() {
        let index = DictionaryIndex::build(YES_MAN_WORDS);
        let target = sentence_occurrences(&["Yes", "man"]);
        for sentence in sentence_anagrams(&index, &["Yes", "man"]) {
            assert_eq!(sentence_occurrences(&sentence), target, "{sentence:?}");
            assert!(sentence.iter().all(|w| index.contains_word(w)), "{sentence:?}");
        }
    }

    #[test]
    fn test_no_anagrams() {
        let index = DictionaryIndex::build(YES_MAN_WORDS);
        assert_eq!(sentence_anagrams(&index, &["xyzzy"]).count(), 0);
        // letters partly covered are not enough
        assert_eq!(sentence_anagrams(&index, &["mayq"]).count(), 0);
    }

    #[test]
    fn test_repeated_word() {
        let index = DictionaryIndex::build(["ab", "ba", "a", "b"]);
        let results = owned(sentence_anagrams(&index, &["abab"]).collect());
        assert!(results.contains(&vec!["ab".to_string(), "ab".to_string()]));
        assert!(results.contains(&vec!["a".to_string(), "b".to_string(), "a".to_string(), "b".to_string()]));
        for sentence in &results {
            assert_eq!(sentence_occurrences(sentence), word_occurrences("abab"));
        }
    }

    #[test]
    fn test_terminates_with_letterless_dictionary_words() {
        let index = DictionaryIndex::build(["", "--", "'", "a"]);
        assert!(!index.lookup(&Occurrence::empty()).is_empty());

        let results: Vec<Sentence> = sentence_anagrams(&index, &["a"]).collect();
        assert_eq!(results, vec![vec!["a"]]);

        let results: Vec<Sentence> = sentence_anagrams(&index, &["aa"]).collect();
        assert_eq!(results, vec![vec!["a", "a"]]);
    }

    #[test]
    fn test_lazy_take_first() {
        // Many results exist; taking one must not require enumerating the rest.
        let words: Vec<String> = ('a'..='p').map(|c| c.to_string()).collect();
        let index = DictionaryIndex::build(&words);
        let sentence = ["abcdefghijklmnop"];
        let first: Vec<Sentence> = sentence_anagrams(&index, &sentence).take(1).collect();
        assert_eq!(first.len(), 1);
        assert_eq!(sentence_occurrences(&first[0]), word_occurrences(sentence[0]));
    }

    #[test]
    fn test_first_result_for_many_distinct_letters() {
        // 2^24 sub-multisets at the top level; the first sentence must not wait for them.
        let words: Vec<String> = ('a'..='x').map(|c| c.to_string()).collect();
        let index = DictionaryIndex::build(&words);
        let sentence = ["abcdefghijklmnopqrstuvwx"];

        let started = Instant::now();
        let first = sentence_anagrams(&index, &sentence).next();
        let elapsed = started.elapsed();

        let first = first.unwrap();
        assert_eq!(first.len(), 24);
        assert_eq!(sentence_occurrences(&first), word_occurrences(sentence[0]));
        assert!(elapsed < Duration::from_secs(1), "first result took {elapsed:?}");
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let index = DictionaryIndex::build(["ab"]);
        let mut it = sentence_anagrams(&index, &["ba"]);
        assert_eq!(it.next(), Some(vec!["ab"]));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_solve_sentence_found_enough() {
        let index = DictionaryIndex::build(YES_MAN_WORDS);
        let result = solve_sentence(&index, &["Yes", "man"], 5, Duration::from_secs(30)).unwrap();
        assert_eq!(result.len(), 5);
        assert_eq!(result.status, SolveStatus::FoundEnough);
        assert_eq!(result.occurrence, word_occurrences("yesman"));
    }

    #[test]
    fn test_solve_sentence_exhausted() {
        let index = DictionaryIndex::build(YES_MAN_WORDS);
        let result = solve_sentence(&index, &["Yes", "man"], 100, Duration::from_secs(30)).unwrap();
        assert_eq!(result.len(), 14);
        assert_eq!(result.status, SolveStatus::SearchExhausted);
    }

    #[test]
    fn test_solve_sentence_zero_budget_times_out() {
        let index = DictionaryIndex::build(YES_MAN_WORDS);
        let result = solve_sentence(&index, &["Yes", "man"], 100, Duration::ZERO).unwrap();
        assert!(result.is_empty());
        assert!(matches!(result.status, SolveStatus::TimedOut { .. }));
    }

    #[test]
    fn test_solve_sentence_zero_results_is_error() {
        let index = DictionaryIndex::build(YES_MAN_WORDS);
        let err = solve_sentence(&index, &["Yes"], 0, Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, AnagramError::InvalidResultCount));
    }

    #[test]
    fn test_solve_result_into_iter() {
        let index = DictionaryIndex::build(["tea", "eat"]);
        let result = solve_sentence(&index, &["ate"], 10, Duration::from_secs(5)).unwrap();
        let words: Vec<Vec<String>> = result.into_iter().collect();
        assert_eq!(words, vec![vec!["tea".to_string()], vec!["eat".to_string()]]);
    }

    #[test]
    fn test_sentence_to_string() {
        assert_eq!(sentence_to_string(&["Linux", "rulez"]), "Linux • rulez");
        assert_eq!(sentence_to_string(&["tea"]), "tea");
        let empty: [&str; 0] = [];
        assert_eq!(sentence_to_string(&empty), "∅");
    }
}
