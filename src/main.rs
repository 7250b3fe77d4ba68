use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;

use anagrams::dictionary::DictionaryIndex;
use anagrams::errors::AnagramError;
use anagrams::solver::{self, SolveStatus};
use anagrams::word_list::WordList;

/// Find every dictionary word or sentence that is an anagram of the input
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// The words to rearrange (e.g., "Linux rulez" or Linux rulez)
    #[arg(required = true)]
    words: Vec<String>,

    /// Path to the dictionary file (one word per line). The default is a small bundled
    /// sample; point this at a full word list (e.g. linuxwords) for real searches
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/linuxwords.txt")
    )]
    dictionary: String,

    /// Maximum number of sentences to print
    #[arg(short = 'n', long, default_value_t = 100)]
    num_results: usize,

    /// Print single-word anagrams of the joined input instead of sentences
    #[arg(short, long)]
    word: bool,

    /// Time budget for the sentence search, in seconds
    #[arg(short, long, default_value_t = 30)]
    timeout: u64,
}

/// Entry point of the anagram CLI.
///
/// Delegates to [`try_main`], printing any error with its code and help text
/// before exiting with code 1.
fn main() -> ExitCode {
    anagrams::log::init_logger(anagrams::log::debug_requested());

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.display_detailed());
            ExitCode::FAILURE
        }
    }
}

/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the dictionary and build the index.
/// 3. Search (words or sentences) and print each result on stdout.
/// 4. Print status and timings on stderr.
fn try_main() -> Result<(), AnagramError> {
    let cli = Cli::parse();

    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.dictionary)?;
    let index = DictionaryIndex::build(&word_list.words);
    let load_secs = t_load.elapsed().as_secs_f64();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.word {
        let joined = cli.words.concat();
        let anagrams = index.word_anagrams(&joined);
        for word in anagrams {
            writeln!(out, "{word}")?;
        }
        out.flush()?;
        eprintln!(
            "Loaded {} words in {:.3}s; {} single-word anagrams of '{}'.",
            index.word_count(),
            load_secs,
            anagrams.len(),
            joined
        );
        return Ok(());
    }

    let t_solve = Instant::now();
    let result = solver::solve_sentence(
        &index,
        &cli.words,
        cli.num_results,
        Duration::from_secs(cli.timeout),
    )?;
    let solve_secs = t_solve.elapsed().as_secs_f64();

    for sentence in &result.sentences {
        writeln!(out, "{}", solver::sentence_to_string(sentence))?;
    }
    out.flush()?;

    match result.status {
        SolveStatus::TimedOut { elapsed } => {
            eprintln!("⚠️  Timed out after {:.1}s; some sentences may not have been returned", elapsed.as_secs_f64());
        }
        SolveStatus::FoundEnough => {
            eprintln!("✓ Stopped after finding {}/{} requested sentences", result.len(), cli.num_results);
        }
        SolveStatus::SearchExhausted => {
            eprintln!("✓ Search exhausted (no more sentences)");
        }
    }

    eprintln!(
        "Loaded {} words in {:.3}s; searched {} in {:.3}s ({} sentences).",
        index.word_count(),
        load_secs,
        result.occurrence,
        solve_secs,
        result.len()
    );

    Ok(())
}
