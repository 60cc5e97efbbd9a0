/*
puzzle.rs

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

//! Generated puzzle.
//!
//! A [`Puzzle`] object is the read-only result of a generation: the filled grid and the words
//! to find.
//! It is rendered as text by its [`std::fmt::Display`] implementation, saved as JSON by
//! [`crate::saver::puzzle`], and drawn as an image by the `draw` module.

use log::info;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

use crate::config::{ConfigError, PuzzleConfig};
use crate::generator::grid::Grid;
use crate::generator::placement::{DroppedWord, PlacedWord};
use crate::generator::placer::{GridPlacer, Layout};
use crate::generator::selector::{self, WordSource};
use crate::generator::trace::PlacementTrace;

/// Heading of the list of words to find.
pub const FIND_LIST_HEADING: &str = "FIND THESE WORDS:";

/// Puzzle object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Filled grid.
    grid: Grid,

    /// Words hidden in the grid, in placement order.
    placed: Vec<PlacedWord>,

    /// Selected words that could not be placed.
    dropped: Vec<DroppedWord>,
}

impl Puzzle {
    /// Select the words from the source, place them, and fill the grid.
    ///
    /// # Errors
    ///
    /// Return an error if the configuration cannot produce a puzzle.
    /// Words that cannot be placed are not an error: they are listed by [`Puzzle::dropped`].
    pub fn generate<R: Rng + ?Sized>(
        config: &PuzzleConfig,
        source: &WordSource,
        rng: &mut R,
        trace: &mut dyn PlacementTrace,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let words = selector::select(config.num_words, source, rng);
        let layout: Layout = GridPlacer::new(config).place_all(&words, rng, trace);
        info!(
            "Puzzle generated: {} of {} selected word(s) hidden",
            layout.placed.len(),
            words.len()
        );
        Ok(Self::from(layout))
    }

    /// Return a reference to the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Words hidden in the grid, in placement order.
    pub fn placed(&self) -> &[PlacedWord] {
        &self.placed
    }

    /// Words that could not be placed.
    pub fn dropped(&self) -> &[DroppedWord] {
        &self.dropped
    }

    /// Words to find, in placement order.
    pub fn find_list(&self) -> Vec<&str> {
        self.placed.iter().map(|p| p.word.as_str()).collect()
    }

    /// Words to find, in a random order, so that the list does not reveal the placement order
    /// (which is by decreasing length).
    pub fn shuffled_find_list<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&str> {
        let mut words: Vec<&str> = self.find_list();
        words.shuffle(rng);
        words
    }

    /// Text rendering of the puzzle with the given word list.
    pub fn to_text(&self, words: &[&str]) -> String {
        format!("{}\n{FIND_LIST_HEADING}\n{}\n", self.grid, words.join(", "))
    }
}

impl From<Layout> for Puzzle {
    fn from(layout: Layout) -> Self {
        Self {
            grid: layout.grid,
            placed: layout.placed,
            dropped: layout.dropped,
        }
    }
}

/// Display the grid, one row per line with tab separated cells, followed by the words to find in
/// placement order.
impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_text(&self.find_list()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::trace::NoTrace;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_config() -> PuzzleConfig {
        PuzzleConfig {
            grid_size: 5,
            num_words: 2,
            ..PuzzleConfig::default()
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = PuzzleConfig {
            grid_size: 0,
            ..PuzzleConfig::default()
        };
        let res = Puzzle::generate(
            &config,
            &WordSource::Default,
            &mut StdRng::seed_from_u64(1),
            &mut NoTrace,
        );
        assert_eq!(res, Err(ConfigError::ZeroGridSize));
    }

    #[test]
    fn text_rendering() {
        let source = WordSource::List(vec!["cat".into(), "dog".into()]);
        let puzzle = Puzzle::generate(
            &small_config(),
            &source,
            &mut StdRng::seed_from_u64(9),
            &mut NoTrace,
        )
        .unwrap();

        let text = puzzle.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5 + 3);
        for row in &lines[..5] {
            assert_eq!(row.split('\t').count(), 5);
        }
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], FIND_LIST_HEADING);
        assert_eq!(lines[7], puzzle.find_list().join(", "));
    }

    #[test]
    fn shuffled_list_has_the_same_words() {
        let puzzle = Puzzle::generate(
            &PuzzleConfig::default(),
            &WordSource::Default,
            &mut StdRng::seed_from_u64(10),
            &mut NoTrace,
        )
        .unwrap();
        let mut shuffled = puzzle.shuffled_find_list(&mut StdRng::seed_from_u64(11));
        let mut ordered = puzzle.find_list();
        shuffled.sort_unstable();
        ordered.sort_unstable();
        assert_eq!(shuffled, ordered);
    }
}
