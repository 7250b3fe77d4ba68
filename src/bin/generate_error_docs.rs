//! Generate error code documentation from the source of truth (the error enum).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from `AnagramError` via its `code()`, `description()`, `details()`,
//! and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;
use std::io;

use anagrams::errors::AnagramError;

/// One example of every `AnagramError` variant, in code order.
fn all_error_variants() -> Vec<AnagramError> {
    vec![
        AnagramError::DictionaryLoad {
            path: "data/linuxwords.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory (os error 2)"),
        },
        AnagramError::EmptyDictionary { path: "data/empty.txt".to_string() },
        AnagramError::InvalidResultCount,
        AnagramError::Output(io::Error::new(io::ErrorKind::BrokenPipe, "Broken pipe (os error 32)")),
    ]
}

/// Render the whole reference as Markdown.
// NB: writing to a String never fails, so `let _ =` just drops the Ok(())
fn render_docs() -> String {
    let mut doc = String::new();
    let errors = all_error_variants();
    let first = errors.first().map_or("", AnagramError::code);
    let last = errors.last().map_or("", AnagramError::code);

    let _ = writeln!(doc, "# Error Code Reference\n");
    let _ = writeln!(doc, "**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");
    let _ = writeln!(doc, "## Table of Contents\n");
    let _ = writeln!(doc, "- [Errors ({first}–{last})](#errors)");
    let _ = writeln!(doc, "- [How to Use Error Codes](#how-to-use-error-codes)\n");

    let _ = writeln!(doc, "## Errors\n");
    let _ = writeln!(doc, "The search itself never fails; these come from loading the dictionary, request validation, and output.\n");

    for error in &errors {
        let _ = writeln!(doc, "### {}: {}\n", error.code(), error.description());
        let _ = writeln!(doc, "**Details:** {}\n", error.details());

        if let Some(help_text) = error.help() {
            let _ = writeln!(doc, "**How to fix:**");
            let _ = writeln!(doc, "```\n{help_text}\n```\n");
        }

        let _ = writeln!(doc, "**Example error message:**");
        let _ = writeln!(doc, "```\n{error}\n```\n");

        let _ = writeln!(doc, "**Detailed format:**");
        let _ = writeln!(doc, "```\n{}\n```\n", error.display_detailed());

        let _ = writeln!(doc, "---\n");
    }

    let _ = writeln!(doc, "\n## How to Use Error Codes\n");
    let _ = writeln!(doc, "When you see an error like:\n");
    let _ = writeln!(doc, "```\n{}\n```\n", AnagramError::InvalidResultCount.display_detailed());
    let _ = writeln!(doc, "1. Note the error code (e.g., `{}`)", AnagramError::InvalidResultCount.code());
    let _ = writeln!(doc, "2. Look it up in this document for detailed explanation");
    let _ = writeln!(doc, "3. Follow the suggested resolution steps");

    doc
}

fn main() {
    print!("{}", render_docs());
}
