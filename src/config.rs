/*
config.rs

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

//! Default settings and puzzle configuration.
//!
//! The constants provide the values used when the command line does not override them.
//! A [`PuzzleConfig`] object gathers the settings for one generation and must be validated with
//! [`PuzzleConfig::validate`] before use: no amount of retrying can place a word in a grid that
//! has no cells, so such settings are rejected up front.

use thiserror::Error;

pub const COPYRIGHT_NOTICE: &str = "Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Number of cells on each edge of the grid.
pub const DEFAULT_GRID_SIZE: usize = 15;

/// Number of words to select from the word source.
pub const DEFAULT_NUM_WORDS: usize = 10;

/// Number of (start, direction set) retries before a word is abandoned.
pub const DEFAULT_MAX_ATTEMPTS: usize = 200;

/// Word list read when no other file is given.
pub const DEFAULT_WORDS_FILE: &str = "words.txt";

/// Image written after the generation.
pub const DEFAULT_PNG_FILE: &str = "word_search.png";

/// Letters used to fill the cells that no word covers.
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The grid has no cells.
    #[error("the grid size must be at least 1")]
    ZeroGridSize,

    /// No word requested.
    #[error("the number of words must be at least 1")]
    NoWords,

    /// The placer would never try a single position.
    #[error("the maximum number of attempts must be at least 1")]
    ZeroAttempts,

    /// No filler letter available.
    #[error("the filler alphabet is empty")]
    EmptyAlphabet,

    /// Filler letters must be letters.
    #[error("the filler alphabet contains {0:?}, which is not a letter")]
    InvalidAlphabet(char),
}

/// Settings for generating one puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Number of cells on each edge of the square grid.
    pub grid_size: usize,

    /// Number of words to select from the word source.
    pub num_words: usize,

    /// Attempt ceiling per word.
    pub max_attempts: usize,

    /// Filler letters, upper case.
    pub alphabet: Vec<char>,

    /// Write the placed words in lower case so that they stand out ("cheat" mode).
    pub reveal: bool,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            num_words: DEFAULT_NUM_WORDS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            alphabet: DEFAULT_ALPHABET.chars().collect(),
            reveal: false,
        }
    }
}

impl PuzzleConfig {
    /// Replace the filler alphabet.
    ///
    /// The letters are converted to upper case and duplicates are removed, so that each letter
    /// keeps the same probability of being drawn.
    pub fn with_alphabet(mut self, alphabet: &str) -> Self {
        let mut letters: Vec<char> = Vec::with_capacity(alphabet.len());
        for c in alphabet.chars().flat_map(char::to_uppercase) {
            if !letters.contains(&c) {
                letters.push(c);
            }
        }
        self.alphabet = letters;
        self
    }

    /// Verify that a puzzle can be generated with these settings.
    ///
    /// # Errors
    ///
    /// Return the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if self.num_words == 0 {
            return Err(ConfigError::NoWords);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if let Some(c) = self.alphabet.iter().find(|c| !c.is_alphabetic()) {
            return Err(ConfigError::InvalidAlphabet(*c));
        }
        Ok(())
    }
}
