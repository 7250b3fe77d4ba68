#[cfg(test)]
use std::ops::RangeInclusive;

// Character-set constants
pub(crate) const ALPHABET_SIZE: usize = 26;
#[cfg(test)]
pub(crate) const LOWERCASE_ALPHABET: RangeInclusive<char> = 'a'..='z';
#[cfg(test)]
pub(crate) const UPPERCASE_ALPHABET: RangeInclusive<char> = 'A'..='Z';

/// Letter classification used by the occurrence model.
///
/// Only ASCII letters take part in anagram matching; everything else
/// (digits, punctuation, whitespace, non-ASCII) is ignored.
pub(crate) trait Letter {
    fn is_letter(&self) -> bool;
    /// Case-folded letter, or `None` for characters that aren't letters.
    fn to_letter(&self) -> Option<char>;
    /// Position in the alphabet (`'a'` → 0), or `None` for non-letters.
    fn letter_index(&self) -> Option<usize>;
}

impl Letter for char {
    fn is_letter(&self) -> bool {
        self.is_ascii_alphabetic()
    }

    fn to_letter(&self) -> Option<char> {
        self.is_letter().then(|| self.to_ascii_lowercase())
    }

    fn letter_index(&self) -> Option<usize> {
        self.to_letter().map(|c| (c as u8 - b'a') as usize)
    }
}

/// Inverse of [`Letter::letter_index`].
///
/// # Panics
/// Panics if `index >= ALPHABET_SIZE`; callers only pass indices produced by `letter_index`.
#[inline]
pub(crate) fn letter_at(index: usize) -> char {
    assert!(index < ALPHABET_SIZE, "letter index {index} out of range");
    (b'a' + index as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_letter() {
        assert!('a'.is_letter());
        assert!('Z'.is_letter());
        assert!(!'1'.is_letter());
        assert!(!'\''.is_letter());
        assert!(!' '.is_letter());
        assert!(!'é'.is_letter()); // non-ASCII is out of scope
    }

    #[test]
    fn test_to_letter_folds_case() {
        assert_eq!('R'.to_letter(), Some('r'));
        assert_eq!('r'.to_letter(), Some('r'));
        assert_eq!('-'.to_letter(), None);
    }

    #[test]
    fn test_letter_index_round_trip() {
        for (i, c) in LOWERCASE_ALPHABET.enumerate() {
            assert_eq!(c.letter_index(), Some(i));
            assert_eq!(letter_at(i), c);
        }
        for (i, c) in UPPERCASE_ALPHABET.enumerate() {
            assert_eq!(c.letter_index(), Some(i));
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_letter_at_out_of_range() {
        letter_at(ALPHABET_SIZE);
    }

    #[test]
    fn test_alphabet_constants() {
        assert_eq!(ALPHABET_SIZE, 26);
        assert_eq!(LOWERCASE_ALPHABET.count(), ALPHABET_SIZE);
    }
}
