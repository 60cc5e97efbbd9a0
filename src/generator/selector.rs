/*
selector.rs

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

//! Select the words to hide.
//!
//! The candidate words come from a [`WordSource`].
//! When the source is missing or provides no usable word, [`DEFAULT_WORDS`] is used instead, so
//! that a puzzle can always be generated.

use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::word::Word;

/// Words used when the word source is not available.
pub const DEFAULT_WORDS: [&str; 6] = ["PYTHON", "CODE", "SEARCH", "GRID", "PILLOW", "IMAGE"];

/// Where to get the candidate words from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// [`DEFAULT_WORDS`].
    Default,

    /// Text file with one word per line.
    File(PathBuf),

    /// Words given directly.
    List(Vec<String>),
}

impl WordSource {
    /// Return the raw entries of the source.
    ///
    /// A file that cannot be read gives no entry.
    fn entries(&self) -> Vec<String> {
        match self {
            WordSource::Default => Vec::new(),
            WordSource::List(list) => list.clone(),
            WordSource::File(path) => match fs::read_to_string(path) {
                Ok(content) => content.lines().map(String::from).collect(),
                Err(error) => {
                    match error.kind() {
                        ErrorKind::NotFound => warn!("Word file {path:?} not found"),
                        _ => warn!("Cannot read the word file {path:?}: {error}"),
                    }
                    Vec::new()
                }
            },
        }
    }
}

/// Convert raw entries to words.
///
/// Blank entries are discarded, and so are the entries that contain anything other than
/// letters.
/// Entries that are identical once converted to upper case are kept only once, at the position
/// of their first occurrence.
pub fn normalize<I, S>(entries: I) -> Vec<Word>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: HashSet<String> = HashSet::new();
    entries
        .into_iter()
        .filter_map(|e| {
            let entry: &str = e.as_ref();
            if entry.trim().is_empty() {
                return None;
            }
            let word: Option<Word> = Word::new(entry);
            if word.is_none() {
                warn!("{:?} is not a word (letters only): skipped", entry.trim());
            }
            word
        })
        .filter(|w| seen.insert(w.as_str().to_string()))
        .collect()
}

/// Sort the words by decreasing length. Words of the same length keep their relative order.
///
/// Placing the longer words first, while the grid is still mostly empty, reduces the number of
/// dropped words.
fn sort_longest_first(words: &mut [Word]) {
    words.sort_by_key(|w| std::cmp::Reverse(w.len()));
}

/// Select up to `count` words from the source.
///
/// The candidates are shuffled before keeping the first `count` words, so that successive runs
/// over the same source select different subsets.
/// The default words are not shuffled: the first `count` of them are returned.
pub fn select<R: Rng + ?Sized>(count: usize, source: &WordSource, rng: &mut R) -> Vec<Word> {
    let mut words: Vec<Word> = normalize(source.entries());

    if words.is_empty() {
        if *source != WordSource::Default {
            warn!("No word available from the source: using the default words");
        }
        words = normalize(DEFAULT_WORDS);
    } else {
        words.shuffle(rng);
    }

    words.truncate(count);
    sort_longest_first(&mut words);
    debug!("{} word(s) selected", words.len());
    words
}
