//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for a handful of sentences on *your* machine.
//! - Loads the dictionary and builds the index once, then runs each sentence several
//!   times and reports the median.
//! - Always requests the same number of results per sentence, to keep comparisons simple.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print a few sentences:          `cargo run --bin bench_local --release -- -p 5`
//!
//! NOTES
//! -----
//! - Not statistically rigorous. Use the same machine and `--release` for comparable numbers.
//! - I/O (printing) is kept outside the timed section.
//! - One warm-up run per sentence is done (not included in timing).

use clap::Parser;
use std::hint::black_box;
use std::time::{Duration, Instant};

use anagrams::dictionary::DictionaryIndex;
use anagrams::errors::AnagramError;
use anagrams::solver;
use anagrams::word_list::WordList;

/// Simple local benchmark runner: build the index once, time several sentences.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the dictionary file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/linuxwords.txt")
    )]
    dictionary: String,

    /// Number of repeats per sentence (median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print up to this many sentences per case (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

/// The fixed number of results we request per sentence.
const NUM_RESULTS: usize = 1000;

/// Per-run budget; generous, since the point is to measure.
const TIME_BUDGET: Duration = Duration::from_secs(60);

const MAX_SENTENCE_LEN: usize = 32;

/// Edit/add sentences here.
const CASES: &[&[&str]] = &[
    &["Yes", "man"],
    &["Linux", "rulez"],
    &["I", "love", "you"],
    &["Rust", "is", "fun"],
    &["dormitory"],
    &["the", "eyes"],
];

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() -> Result<(), AnagramError> {
    let cli = Cli::parse();

    eprintln!("Loading dictionary from: {}", cli.dictionary);
    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.dictionary)?;
    let index = DictionaryIndex::build(&word_list.words);
    eprintln!(
        "Indexed {} words under {} keys in {:.3}s",
        index.word_count(),
        index.len(),
        t_load.elapsed().as_secs_f64()
    );

    let mut summary: Vec<(String, f64, usize)> = Vec::with_capacity(CASES.len());

    for (idx, &case) in CASES.iter().enumerate() {
        let name = case.join(" ");
        eprintln!("\n[{:02}] {}", idx + 1, name);

        let _warmup = solver::solve_sentence(&index, case, NUM_RESULTS, TIME_BUDGET)?;

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last_sentences: Vec<Vec<String>> = Vec::new();

        for rep in 0..cli.num_repeats {
            let t_solve = Instant::now();
            let result = solver::solve_sentence(&index, black_box(case), NUM_RESULTS, TIME_BUDGET)?;
            let solve_secs = t_solve.elapsed().as_secs_f64();

            let _keep = black_box(result.len());
            times.push(solve_secs);
            last_sentences = result.sentences;

            eprintln!(
                "  run {:>2}/{:>2}: {:.3}s ({} {})",
                rep + 1,
                cli.num_repeats,
                solve_secs,
                last_sentences.len(),
                pluralizer(last_sentences.len(), "sentence".into(), None)
            );
        }

        let med = median(times);

        if cli.print_limit > 0 {
            for sentence in last_sentences.iter().take(cli.print_limit) {
                println!("{}", solver::sentence_to_string(sentence));
            }
        }

        eprintln!("  → median {:.3}s over {} run(s)", med, cli.num_repeats);
        summary.push((name, med, last_sentences.len()));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<MAX_SENTENCE_LEN$} | {:>10} | {:>11}", "sentence", "median (s)", "# sentences");
    eprintln!("{:-<MAX_SENTENCE_LEN$}-+-{:-<10}-+-{:-<11}", "", "", "");
    for (name, med, count) in &summary {
        let display = if name.len() > MAX_SENTENCE_LEN {
            format!("{}…", name.chars().take(MAX_SENTENCE_LEN - 1).collect::<String>())
        } else {
            name.clone()
        };
        eprintln!("{display:<MAX_SENTENCE_LEN$} | {med:>10.3} | {count:>11}");
    }

    Ok(())
}

fn pluralizer(count: usize, singular: String, plural: Option<String>) -> String {
    if count == 1 {
        singular
    } else {
        plural.unwrap_or_else(|| singular + "s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralizer() {
        assert_eq!(pluralizer(0, "sentence".into(), None), "sentences");
        assert_eq!(pluralizer(1, "sentence".into(), None), "sentence");
        assert_eq!(pluralizer(2, "sentence".into(), None), "sentences");
        assert_eq!(pluralizer(1, "radius".into(), Some("radii".into())), "radius");
        assert_eq!(pluralizer(3, "radius".into(), Some("radii".into())), "radii");
    }

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), 2.5);
    }
}
