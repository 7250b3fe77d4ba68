use std::time::Duration;

use crate::dictionary::{DictionaryIndex, SharedIndex};
use crate::errors::AnagramError;
use crate::log::init_logger;
use crate::solver::{solve_sentence, SolveStatus};
use crate::word_list::WordList;
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Browser searches get a shorter budget than the CLI.
const WASM_TIME_BUDGET: Duration = Duration::from_secs(10);

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "A003", "WASM001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<AnagramError> for WasmError {
    fn from(e: AnagramError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn serialization_error(what: &str, e: &serde_wasm_bindgen::Error) -> WasmError {
    WasmError {
        code: "WASM002".to_string(),
        message: format!("serialization failed: {e}"),
        description: format!("Failed to serialize {what}"),
        details: format!("The {what} could not be converted to JavaScript format."),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
}

/// Index built by the first `load_dictionary` call.
static DICTIONARY: SharedIndex = SharedIndex::new();

/// Initialize logging and the panic hook.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

/// Build the dictionary index from newline-separated text, once per page load.
///
/// Later calls keep the first index and just report its size.
#[wasm_bindgen]
pub fn load_dictionary(text: &str) -> usize {
    let index = DICTIONARY.get_or_build(|| WordList::parse_from_str(text).words);
    index.word_count()
}

#[derive(serde::Serialize)]
struct WasmSolveResult {
    sentences: Vec<Vec<String>>,
    status: String,
    occurrence: String,
}

/// JS entry: (sentence: string, num_results_requested: number)
/// returns `{ sentences: string[][], status, occurrence }` using the loaded dictionary.
#[wasm_bindgen]
pub fn sentence_anagrams_wasm(sentence: &str, num_results_requested: usize) -> Result<JsValue, JsValue> {
    let index = loaded_index()?;
    let words: Vec<&str> = sentence.split_whitespace().collect();

    let result = solve_sentence(&index, &words, num_results_requested, WASM_TIME_BUDGET)
        .map_err(WasmError::from)?;

    let status = match result.status {
        SolveStatus::FoundEnough => "found_enough".to_string(),
        SolveStatus::SearchExhausted => "search_exhausted".to_string(),
        SolveStatus::TimedOut { .. } => "timed_out".to_string(),
    };

    let wasm_result = WasmSolveResult {
        occurrence: result.occurrence.to_string(),
        sentences: result.sentences,
        status,
    };

    to_value(&wasm_result).map_err(|e| serialization_error("solver result", &e).into())
}

/// JS entry: (word: string) returns string[] of single-word anagrams.
#[wasm_bindgen]
pub fn word_anagrams_wasm(word: &str) -> Result<JsValue, JsValue> {
    let index = loaded_index()?;
    to_value(index.word_anagrams(word)).map_err(|e| serialization_error("word list", &e).into())
}

/// Parse a newline-separated dictionary string into its cleaned word list.
#[wasm_bindgen]
pub fn parse_word_list(text: &str) -> Result<JsValue, JsValue> {
    let word_list = WordList::parse_from_str(text);
    to_value(&word_list.words).map_err(|e| serialization_error("word list", &e).into())
}

fn loaded_index() -> Result<std::sync::Arc<DictionaryIndex>, WasmError> {
    DICTIONARY.get().ok_or_else(|| WasmError {
        code: "WASM001".to_string(),
        message: "no dictionary loaded".to_string(),
        description: "Dictionary not loaded".to_string(),
        details: "Searches need a dictionary index; none has been built yet.".to_string(),
        help: Some("Call load_dictionary(text) once before searching".to_string()),
    })
}
