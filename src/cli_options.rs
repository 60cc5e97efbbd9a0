/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Wordsearch.

Wordsearch is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordsearch is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordsearch. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options and generate a puzzle.
//!
//! # Examples
//!
//! Hide ten words from `words.txt` in a 15x15 grid, print the grid, and save it as
//! `word_search.png`:
//!
//! ```
//! $ wordsearch
//! ```
//!
//! Hide three given words in a small grid, with the words in lower case so that they are easy to
//! spot, and always produce the same puzzle:
//!
//! ```
//! $ wordsearch -s 6 --word cat --word dog --word bird --cheat --seed 42 --no-image
//! ```
//!
//! Keep a trace of the placement attempts and save the answer key:
//!
//! ```
//! $ wordsearch --trace log.txt --json puzzle.json
//! ```

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};

use wordsearch::config::{
    COPYRIGHT_NOTICE, DEFAULT_ALPHABET, DEFAULT_GRID_SIZE, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_NUM_WORDS, DEFAULT_PNG_FILE, DEFAULT_WORDS_FILE, PuzzleConfig,
};
use wordsearch::generator::selector::WordSource;
use wordsearch::generator::trace::{FileTrace, LogTrace};
use wordsearch::puzzle::Puzzle;
use wordsearch::saver::puzzle::SaverPuzzle;

/// Generate word search puzzles.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Number of words to hide
    #[arg(short = 'n', long, default_value_t = DEFAULT_NUM_WORDS)]
    count: usize,

    /// Number of cells on each edge of the grid
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,

    /// File with the candidate words, one per line
    #[arg(short, long, default_value = DEFAULT_WORDS_FILE)]
    words_file: PathBuf,

    /// Word to hide, instead of reading the word file (repeat for several words)
    #[arg(long = "word", value_name = "WORD")]
    words: Vec<String>,

    /// Number of attempts before giving up on a word
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Letters used to fill the remaining cells
    #[arg(long, default_value = DEFAULT_ALPHABET)]
    alphabet: String,

    /// Write the hidden words in lower case
    #[arg(short, long, default_value_t = false)]
    cheat: bool,

    /// Seed for the random generator, to reproduce a puzzle
    #[arg(long)]
    seed: Option<u64>,

    /// PNG file to create
    #[arg(short, long, default_value = DEFAULT_PNG_FILE)]
    output: PathBuf,

    /// Do not create the PNG file
    #[arg(long, default_value_t = false)]
    no_image: bool,

    /// Save the puzzle and its answer key in this JSON file
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Append a trace of the placement attempts to this file
    #[arg(long, value_name = "FILE")]
    trace: Option<PathBuf>,

    /// Print the words in placement order instead of a random order
    #[arg(long, default_value_t = false)]
    ordered: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

impl Args {
    /// Build the puzzle configuration from the options.
    fn puzzle_config(&self) -> PuzzleConfig {
        PuzzleConfig {
            grid_size: self.size,
            num_words: self.count,
            max_attempts: self.attempts,
            reveal: self.cheat,
            ..PuzzleConfig::default()
        }
        .with_alphabet(&self.alphabet)
    }

    /// Words given on the command line take precedence over the word file.
    fn word_source(&self) -> WordSource {
        if self.words.is_empty() {
            WordSource::File(self.words_file.clone())
        } else {
            WordSource::List(self.words.clone())
        }
    }
}

/// Parse the command-line options, generate the puzzle, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    match run(&args) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config: PuzzleConfig = args.puzzle_config();
    config.validate()?;
    let source: WordSource = args.word_source();
    let mut rng: StdRng = match args.seed {
        Some(seed) => {
            debug!("Random seed = {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let puzzle: Puzzle = match &args.trace {
        Some(path) => {
            let mut trace: FileTrace = FileTrace::new(path)?;
            let puzzle: Puzzle = Puzzle::generate(&config, &source, &mut rng, &mut trace)?;
            trace.finish()?;
            puzzle
        }
        None => Puzzle::generate(&config, &source, &mut rng, &mut LogTrace)?,
    };

    //
    // Print the grid and the words to find
    //
    let words: Vec<&str> = if args.ordered {
        puzzle.find_list()
    } else {
        puzzle.shuffled_find_list(&mut rng)
    };
    print!("{}", puzzle.to_text(&words));
    if !puzzle.dropped().is_empty() {
        let dropped: Vec<String> = puzzle
            .dropped()
            .iter()
            .map(|d| format!("{} ({})", d.word, d.reason))
            .collect();
        eprintln!("Words not placed: {}", dropped.join(", "));
    }

    if let Some(path) = &args.json {
        SaverPuzzle::new(path.clone()).save_puzzle(&puzzle)?;
        println!("Answer key saved as {}", path.display());
    }

    if !args.no_image {
        save_image(&puzzle, &args.output)?;
    }
    Ok(())
}

#[cfg(feature = "png")]
fn save_image(puzzle: &Puzzle, path: &Path) -> Result<(), Box<dyn Error>> {
    wordsearch::draw::Draw::new(puzzle).save_png(path)?;
    println!("Game saved successfully as {}", path.display());
    Ok(())
}

#[cfg(not(feature = "png"))]
fn save_image(_puzzle: &Puzzle, path: &Path) -> Result<(), Box<dyn Error>> {
    log::warn!("Built without PNG support: {path:?} not created (use --no-image to silence)");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use wordsearch::config::ConfigError;

    #[test]
    fn command_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["wordsearch"]).unwrap();
        assert_eq!(args.puzzle_config(), PuzzleConfig::default());
        assert_eq!(
            args.word_source(),
            WordSource::File(PathBuf::from(DEFAULT_WORDS_FILE))
        );
        assert_eq!(args.output, PathBuf::from(DEFAULT_PNG_FILE));
        assert_eq!(args.seed, None);
    }

    #[test]
    fn options_override_defaults() {
        let args = Args::try_parse_from([
            "wordsearch",
            "-n",
            "4",
            "-s",
            "8",
            "-a",
            "50",
            "--alphabet",
            "xyz",
            "--cheat",
            "--word",
            "cat",
            "--word",
            "dog",
            "--seed",
            "7",
        ])
        .unwrap();
        let config = args.puzzle_config();
        assert_eq!(config.num_words, 4);
        assert_eq!(config.grid_size, 8);
        assert_eq!(config.max_attempts, 50);
        assert_eq!(config.alphabet, vec!['X', 'Y', 'Z']);
        assert!(config.reveal);
        assert_eq!(
            args.word_source(),
            WordSource::List(vec!["cat".to_string(), "dog".to_string()])
        );
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn invalid_options_leave_the_trace_file_alone() {
        let path = std::env::temp_dir().join(format!(
            "wordsearch-invalid-trace-{}.txt",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        let args = Args::try_parse_from([
            "wordsearch",
            "-s",
            "0",
            "--no-image",
            "--trace",
            path.to_str().unwrap(),
        ])
        .unwrap();

        let err = run(&args).unwrap_err();
        assert_eq!(err.to_string(), ConfigError::ZeroGridSize.to_string());
        assert!(!path.exists());
    }
}
