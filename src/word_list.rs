//! `word_list`: load and preprocess the dictionary the anagram index is built from.
//!
//! The dictionary is read either from a file or from an in-memory string (the latter is
//! what the WebAssembly build uses, since browsers can't read arbitrary paths).
//!
//! The parsing logic:
//! - One word per line; surrounding whitespace is trimmed.
//! - Blank lines and lines starting with `#` are skipped.
//! - Lines without a single ASCII letter are skipped (they could never match anything).
//! - Spelling is preserved: `Sean` stays `Sean`, because results show dictionary words
//!   exactly as listed. Matching is case-insensitive regardless.
//! - Exact duplicates are removed and the list is sorted by length, then alphabetically.

use log::{debug, info};

use crate::errors::AnagramError;
use crate::letter::Letter;

/// A processed, ready-to-index dictionary.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    /// Example: `["as", "en", "my", "man", "Sean", ...]`
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a dictionary from an in-memory string.
    ///
    /// This is **WASM-safe** because it doesn't touch the filesystem.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let mut skipped = 0usize;
        let mut words: Vec<String> = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() || line.starts_with('#') {
                    None
                } else if line.chars().any(|c| c.is_letter()) {
                    Some(line.to_string())
                } else {
                    skipped += 1;
                    None
                }
            })
            .collect();

        if skipped > 0 {
            debug!("Skipped {skipped} dictionary lines without letters");
        }

        // `dedup` only removes adjacent duplicates, so sort alphabetically first
        words.sort();
        words.dedup();

        words.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

        WordList { words }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Returns [`AnagramError::DictionaryLoad`] if the file can't be read and
    /// [`AnagramError::EmptyDictionary`] if it holds no words.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<WordList, AnagramError> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|source| AnagramError::DictionaryLoad {
            path: path_ref.display().to_string(),
            source,
        })?;

        let word_list = Self::parse_from_str(&data);
        if word_list.is_empty() {
            return Err(AnagramError::EmptyDictionary { path: path_ref.display().to_string() });
        }

        info!("Loaded {} dictionary words from '{}'", word_list.len(), path_ref.display());
        Ok(word_list)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
