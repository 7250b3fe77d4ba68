//! Error types with error codes and helpful messages.
//!
//! The search engine itself never fails: an occurrence with no dictionary words simply
//! produces no results. Errors come from the edges of the system: loading the word
//! list, validating request parameters, and writing output.
//!
//! # Error Codes
//!
//! - A001: `DictionaryLoad` (Dictionary file could not be read)
//! - A002: `EmptyDictionary` (Dictionary file has no usable words)
//! - A003: `InvalidResultCount` (Zero results requested)
//! - A004: `Output` (Writing results failed)
//!
//! # Examples
//!
//! ```
//! use anagrams::errors::AnagramError;
//!
//! let err = AnagramError::EmptyDictionary { path: "words.txt".to_string() };
//! assert_eq!(err.code(), "A002");
//! println!("{}", err.display_detailed());
//! ```

use std::io;

/// Every error the crate reports.
#[derive(Debug, thiserror::Error)]
pub enum AnagramError {
    #[error("failed to read dictionary from '{path}': {source}")]
    DictionaryLoad {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("dictionary '{path}' contains no words")]
    EmptyDictionary { path: String },

    #[error("number of results requested must be positive")]
    InvalidResultCount,

    #[error("failed to write results: {0}")]
    Output(#[from] io::Error),
}

impl AnagramError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            AnagramError::DictionaryLoad { .. } => "A001",
            AnagramError::EmptyDictionary { .. } => "A002",
            AnagramError::InvalidResultCount => "A003",
            AnagramError::Output(_) => "A004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            AnagramError::DictionaryLoad { .. } => "Dictionary file could not be read",
            AnagramError::EmptyDictionary { .. } => "Dictionary file has no usable words",
            AnagramError::InvalidResultCount => "Zero results requested",
            AnagramError::Output(_) => "Writing results failed",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            AnagramError::DictionaryLoad { .. } => "The word list could not be opened or is not valid UTF-8. The dictionary index cannot be built without it, so nothing can be searched.",
            AnagramError::EmptyDictionary { .. } => "The word list was read, but after skipping blank lines, comments and lines without letters nothing was left to index.",
            AnagramError::InvalidResultCount => "A bounded search was asked for zero results. Request at least one.",
            AnagramError::Output(_) => "A result could not be written to the output stream (for example, a closed pipe).",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            AnagramError::DictionaryLoad { .. } => Some("Check the path passed with --dictionary; the file must be UTF-8 text with one word per line"),
            AnagramError::EmptyDictionary { .. } => Some("Each non-comment line of the dictionary should hold one word, e.g. 'listen'"),
            AnagramError::InvalidResultCount => Some("Pass a positive count, e.g. '-n 10'"),
            AnagramError::Output(_) => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<AnagramError> {
        vec![
            AnagramError::DictionaryLoad {
                path: "missing.txt".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            },
            AnagramError::EmptyDictionary { path: "empty.txt".to_string() },
            AnagramError::InvalidResultCount,
            AnagramError::Output(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed")),
        ]
    }

    #[test]
    fn test_error_codes_and_help() {
        let err = AnagramError::InvalidResultCount;
        assert_eq!(err.code(), "A003");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("A003"));
        assert!(detailed.contains("-n 10"));
    }

    /// Test that all `AnagramError` variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();
        for err in all_variants() {
            let code = err.code();
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }
        assert_eq!(codes.len(), 4);
    }

    /// Test that all error codes follow the format A0XX
    #[test]
    fn test_error_code_format() {
        for err in all_variants() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (A0XX)", code);
            assert!(code.starts_with("A0"), "Error code '{}' should start with 'A0'", code);
            assert!(code[1..].parse::<u16>().is_ok(), "Error code '{}' should end with a number", code);
        }
    }

    #[test]
    fn test_descriptions_and_details_are_substantial() {
        for err in all_variants() {
            assert!(!err.description().is_empty());
            assert!(err.details().len() > err.description().len(), "details for {:?} should say more than the description", err);
            if let Some(help) = err.help() {
                assert_ne!(help, err.to_string(), "help should add information beyond the message");
            }
        }
    }

    #[test]
    fn test_display_detailed_without_help() {
        let err = AnagramError::Output(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.display_detailed(), "failed to write results: pipe closed (A004)");
    }

    #[test]
    fn test_dictionary_load_keeps_source() {
        use std::error::Error;
        let err = AnagramError::DictionaryLoad {
            path: "missing.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("missing.txt"));
        assert!(err.source().is_some());
        assert!(err.display_detailed().contains("--dictionary"));
    }
}
