//! Power-multiset enumeration: every sub-multiset of an [`Occurrence`].
//!
//! For `[(c1, n1), ..., (ck, nk)]` each letter independently contributes a count in
//! `0..=ni`, so there are exactly `∏(ni + 1)` sub-multisets, always including the
//! empty occurrence and the input itself.

use std::iter::FusedIterator;

use crate::occurrence::Occurrence;

/// All sub-multisets of `occurrence`, without duplicates.
///
/// Collects [`Combinations`], so the empty occurrence always comes first and the order
/// is deterministic.
#[must_use]
pub fn combinations(occurrence: &Occurrence) -> Vec<Occurrence> {
    let subsets: Vec<Occurrence> = Combinations::new(occurrence).collect();

    debug_assert_eq!(
        subsets.len(),
        combination_count(occurrence),
        "sub-multiset count must be the product of (count + 1)"
    );
    subsets
}

/// Lazy enumeration of every sub-multiset of an occurrence.
///
/// Works like an odometer with one digit per letter, digit `i` running over
/// `0..=count_i`; the first letter turns fastest. Only the current digits are held, so
/// producing the next sub-multiset costs `O(distinct letters)` however many remain.
#[derive(Debug, Clone)]
pub struct Combinations {
    letters: Vec<(char, usize)>,
    digits: Vec<usize>,
    exhausted: bool,
}

impl Combinations {
    #[must_use]
    pub fn new(occurrence: &Occurrence) -> Self {
        Self {
            letters: occurrence.as_pairs().to_vec(),
            digits: vec![0; occurrence.len()],
            exhausted: false,
        }
    }

    fn current(&self) -> Occurrence {
        let pairs = self
            .letters
            .iter()
            .zip(&self.digits)
            .filter(|&(_, &k)| k > 0)
            .map(|(&(letter, _), &k)| (letter, k))
            .collect();
        Occurrence::from_canonical(pairs)
    }

    /// Step the odometer; false once every digit has wrapped back to zero.
    fn turn(&mut self) -> bool {
        for (digit, &(_, max)) in self.digits.iter_mut().zip(&self.letters) {
            if *digit < max {
                *digit += 1;
                return true;
            }
            *digit = 0;
        }
        false
    }
}

impl Iterator for Combinations {
    type Item = Occurrence;

    fn next(&mut self) -> Option<Occurrence> {
        if self.exhausted {
            return None;
        }
        let subset = self.current();
        self.exhausted = !self.turn();
        Some(subset)
    }
}

impl FusedIterator for Combinations {}

/// `∏(count + 1)` over the letters of `occurrence`, saturating at `usize::MAX`.
#[must_use]
pub fn combination_count(occurrence: &Occurrence) -> usize {
    occurrence
        .iter()
        .fold(1usize, |acc, (_, n)| acc.saturating_mul(n.saturating_add(1)))
}
