/*
placer.rs

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

//! Place words in the grid.
//!
//! For each word, the [`GridPlacer`] object picks a random start cell, then tries the eight
//! directions from that cell in a random order.
//! The first direction where the word fits, and where every cell on the path is empty or already
//! holds the same letter, is used.
//! If no direction works, another start cell is picked, up to the attempt ceiling.
//! After the ceiling, the word is dropped for good.
//!
//! When all the words are processed, the cells that are still empty get random letters.

use log::{Level, debug, info, log_enabled, warn};
use rand::Rng;

use super::coord::Coord;
use super::direction::Direction;
use super::grid::Grid;
use super::placement::{self, DropReason, DroppedWord, PlacedWord};
use super::trace::PlacementTrace;
use super::word::Word;
use crate::config::PuzzleConfig;

/// Result of placing one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// The word is in the grid. The second field is the number of attempts it took.
    Placed(PlacedWord, usize),

    /// The word has been abandoned.
    Dropped(DroppedWord),
}

/// Result of checking a path in the grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum PathCheck {
    /// Every cell is empty or holds the same letter.
    Valid,

    /// A cell holds another letter.
    Conflict {
        coord: Coord,
        found: char,
        expected: char,
    },
}

/// Final grid with the placed and the dropped words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Grid, with all the cells filled.
    pub grid: Grid,

    /// Placed words, in placement order.
    pub placed: Vec<PlacedWord>,

    /// Words that could not be placed, in processing order.
    pub dropped: Vec<DroppedWord>,
}

/// [`GridPlacer`] object.
#[derive(Debug, Clone)]
pub struct GridPlacer {
    /// Grid being filled.
    grid: Grid,

    /// Attempt ceiling per word.
    max_attempts: usize,

    /// Write the placed words in lower case.
    reveal: bool,

    /// Filler letters.
    alphabet: Vec<char>,

    /// Placed words, in placement order.
    placed: Vec<PlacedWord>,

    /// Abandoned words.
    dropped: Vec<DroppedWord>,
}

impl GridPlacer {
    /// Create the object with an empty grid.
    ///
    /// The configuration must have been validated with [`PuzzleConfig::validate`].
    pub fn new(config: &PuzzleConfig) -> Self {
        Self {
            grid: Grid::new(config.grid_size),
            max_attempts: config.max_attempts,
            reveal: config.reveal,
            alphabet: config.alphabet.clone(),
            placed: Vec::new(),
            dropped: Vec::new(),
        }
    }

    /// Return a reference to the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Return the words placed so far.
    pub fn placed(&self) -> &[PlacedWord] {
        &self.placed
    }

    /// Place all the words in order, fill the remaining cells, and return the final layout.
    pub fn place_all<R: Rng + ?Sized>(
        mut self,
        words: &[Word],
        rng: &mut R,
        trace: &mut dyn PlacementTrace,
    ) -> Layout {
        trace.words_selected(words);
        for word in words {
            self.place_word(word, rng, trace);
        }
        self.fill(rng);

        info!(
            "{} word(s) placed out of {} in a {size}x{size} grid",
            self.placed.len(),
            words.len(),
            size = self.grid.size()
        );
        if log_enabled!(Level::Debug) {
            self.grid.debug();
        }

        Layout {
            grid: self.grid,
            placed: self.placed,
            dropped: self.dropped,
        }
    }

    /// Try to place a word, up to the attempt ceiling.
    pub fn place_word<R: Rng + ?Sized>(
        &mut self,
        word: &Word,
        rng: &mut R,
        trace: &mut dyn PlacementTrace,
    ) -> PlaceOutcome {
        trace.word_started(word);
        let size: usize = self.grid.size();

        // No start cell can hold such a word, so do not spend the attempts
        if word.len() > size {
            warn!("{word} has more letters than the grid size ({size}): dropped");
            return self.drop_word(word, DropReason::TooLong, 0, trace);
        }

        for attempt in 1..=self.max_attempts {
            let start: Coord = Coord::new(rng.random_range(0..size), rng.random_range(0..size));
            trace.attempt(word, attempt, start);

            for direction in Direction::shuffled(rng) {
                let Some(coords) = placement::coordinates(word, start, direction, size) else {
                    trace.out_of_bounds(word, direction);
                    continue;
                };
                match self.check_path(word, &coords) {
                    PathCheck::Valid => {
                        let placed: PlacedWord = self.commit(word, direction, coords);
                        trace.placed(&placed, attempt);
                        return PlaceOutcome::Placed(placed, attempt);
                    }
                    PathCheck::Conflict {
                        coord,
                        found,
                        expected,
                    } => trace.conflict(word, direction, coord, found, expected),
                }
            }
        }

        warn!(
            "Cannot find a position for {word} after {} attempts: dropped",
            self.max_attempts
        );
        self.drop_word(word, DropReason::AttemptsExhausted, self.max_attempts, trace)
    }

    /// Verify that every cell on the path is empty or holds the letter to place.
    fn check_path(&self, word: &Word, coords: &[Coord]) -> PathCheck {
        for (coord, letter) in coords.iter().zip(word.letters()) {
            if !self.grid.accepts(*coord, letter) {
                return PathCheck::Conflict {
                    coord: *coord,
                    found: self.grid.get(*coord).unwrap_or(' '),
                    expected: letter,
                };
            }
        }
        PathCheck::Valid
    }

    /// Write the word to the grid and record it.
    fn commit(&mut self, word: &Word, direction: Direction, coords: Vec<Coord>) -> PlacedWord {
        for (coord, letter) in coords.iter().zip(word.letters()) {
            let letter: char = if self.reveal {
                letter.to_lowercase().next().unwrap_or(letter)
            } else {
                letter
            };
            self.grid.set(*coord, letter);
        }
        let placed: PlacedWord = PlacedWord {
            word: word.clone(),
            direction,
            coords,
        };
        self.placed.push(placed.clone());
        placed
    }

    fn drop_word(
        &mut self,
        word: &Word,
        reason: DropReason,
        attempts: usize,
        trace: &mut dyn PlacementTrace,
    ) -> PlaceOutcome {
        let dropped: DroppedWord = DroppedWord {
            word: word.clone(),
            reason,
            attempts,
        };
        trace.dropped(&dropped);
        self.dropped.push(dropped.clone());
        PlaceOutcome::Dropped(dropped)
    }

    /// Fill the empty cells with random letters from the alphabet.
    pub fn fill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let empty: Vec<Coord> = self.grid.empty_cells();
        debug!("Filling {} empty cell(s)", empty.len());
        for coord in empty {
            let letter: char = self.alphabet[rng.random_range(0..self.alphabet.len())];
            self.grid.set(coord, letter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Count the trace events.
    #[derive(Default)]
    struct CountingTrace {
        started: usize,
        attempts: usize,
        out_of_bounds: usize,
        conflicts: usize,
        placed: usize,
        dropped: usize,
    }

    impl PlacementTrace for CountingTrace {
        fn word_started(&mut self, _word: &Word) {
            self.started += 1;
        }
        fn attempt(&mut self, _word: &Word, _attempt: usize, _start: Coord) {
            self.attempts += 1;
        }
        fn out_of_bounds(&mut self, _word: &Word, _direction: Direction) {
            self.out_of_bounds += 1;
        }
        fn conflict(&mut self, _w: &Word, _d: Direction, _c: Coord, _f: char, _e: char) {
            self.conflicts += 1;
        }
        fn placed(&mut self, _placed: &PlacedWord, _attempts: usize) {
            self.placed += 1;
        }
        fn dropped(&mut self, _dropped: &DroppedWord) {
            self.dropped += 1;
        }
    }

    fn config(grid_size: usize, max_attempts: usize) -> PuzzleConfig {
        PuzzleConfig {
            grid_size,
            max_attempts,
            ..PuzzleConfig::default()
        }
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().filter_map(|w| Word::new(w)).collect()
    }

    #[test]
    fn single_cell_grid() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut placer = GridPlacer::new(&config(1, 10));
        let outcome = placer.place_word(
            &Word::new("a").unwrap(),
            &mut rng,
            &mut CountingTrace::default(),
        );
        match outcome {
            PlaceOutcome::Placed(placed, attempts) => {
                assert_eq!(placed.coords, vec![Coord::new(0, 0)]);
                assert_eq!(attempts, 1);
            }
            PlaceOutcome::Dropped(d) => panic!("unexpected drop: {d:?}"),
        }
        assert_eq!(placer.grid().get(Coord::new(0, 0)), Some('A'));
    }

    #[test]
    fn too_long_word_is_dropped_without_attempts() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut trace = CountingTrace::default();
        let mut placer = GridPlacer::new(&config(3, 50));
        let outcome = placer.place_word(&Word::new("ABCD").unwrap(), &mut rng, &mut trace);
        assert_eq!(
            outcome,
            PlaceOutcome::Dropped(DroppedWord {
                word: Word::new("ABCD").unwrap(),
                reason: DropReason::TooLong,
                attempts: 0,
            })
        );
        assert_eq!(trace.attempts, 0);
        assert_eq!(trace.dropped, 1);
        assert!(placer.placed().is_empty());
    }

    #[test]
    fn conflicting_word_exhausts_attempts() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut trace = CountingTrace::default();
        let layout =
            GridPlacer::new(&config(1, 25)).place_all(&words(&["A", "B"]), &mut rng, &mut trace);

        assert_eq!(layout.placed.len(), 1);
        assert_eq!(layout.placed[0].word.as_str(), "A");
        assert_eq!(layout.dropped.len(), 1);
        assert_eq!(layout.dropped[0].word.as_str(), "B");
        assert_eq!(layout.dropped[0].reason, DropReason::AttemptsExhausted);
        assert_eq!(layout.dropped[0].attempts, 25);

        // A single letter never leaves the grid, so each attempt tries all eight directions
        assert_eq!(trace.started, 2);
        assert_eq!(trace.attempts, 1 + 25);
        assert_eq!(trace.out_of_bounds, 0);
        assert_eq!(trace.conflicts, 25 * 8);
        assert_eq!(layout.grid.get(Coord::new(0, 0)), Some('A'));
    }

    #[test]
    fn matching_letters_can_be_shared() {
        let mut rng = StdRng::seed_from_u64(4);
        let layout = GridPlacer::new(&config(1, 5)).place_all(
            &words(&["A", "A"]),
            &mut rng,
            &mut CountingTrace::default(),
        );
        assert_eq!(layout.placed.len(), 2);
        assert!(layout.dropped.is_empty());
    }

    #[test]
    fn reveal_mode_writes_lower_case_and_still_shares_letters() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut cfg = config(1, 5);
        cfg.reveal = true;
        let layout = GridPlacer::new(&cfg).place_all(
            &words(&["A", "A"]),
            &mut rng,
            &mut CountingTrace::default(),
        );
        assert_eq!(layout.placed.len(), 2);
        assert_eq!(layout.grid.get(Coord::new(0, 0)), Some('a'));
    }

    #[test]
    fn full_length_word_spans_the_grid() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut trace = CountingTrace::default();
        let layout =
            GridPlacer::new(&config(4, 200)).place_all(&words(&["ROAD"]), &mut rng, &mut trace);
        assert_eq!(layout.placed.len(), 1);

        let placed = &layout.placed[0];
        let (first, last) = (placed.coords[0], placed.coords[3]);
        // Both ends are on the border of the grid
        for c in [first, last] {
            assert!(c.x == 0 || c.x == 3 || c.y == 0 || c.y == 3);
        }
        let (dx, dy) = placed.direction.vector();
        assert_eq!(last.x as isize - first.x as isize, 3 * dx);
        assert_eq!(last.y as isize - first.y as isize, 3 * dy);
        for (coord, letter) in placed.cells() {
            assert_eq!(layout.grid.get(coord), Some(letter));
        }
    }

    #[test]
    fn out_of_bounds_directions_are_skipped() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut trace = CountingTrace::default();
        let layout =
            GridPlacer::new(&config(2, 200)).place_all(&words(&["AB"]), &mut rng, &mut trace);
        assert_eq!(layout.placed.len(), 1);
        // From any cell of a 2x2 grid, three directions fit a two-letter word and five leave
        // the grid. The grid is empty, so the first attempt always succeeds.
        assert_eq!(trace.attempts, 1);
        assert!(trace.out_of_bounds <= 5);
        assert_eq!(trace.conflicts, 0);
    }

    #[test]
    fn fill_uses_the_alphabet() {
        let mut rng = StdRng::seed_from_u64(8);
        let cfg = config(6, 200).with_alphabet("z");
        let layout = GridPlacer::new(&cfg).place_all(
            &words(&["CAT", "DOG"]),
            &mut rng,
            &mut CountingTrace::default(),
        );

        assert!(layout.grid.is_full());
        let on_path: Vec<Coord> = layout.placed.iter().flat_map(|p| p.coords.clone()).collect();
        for row in 0..6 {
            for col in 0..6 {
                let coord = Coord::new(col, row);
                if !on_path.contains(&coord) {
                    assert_eq!(layout.grid.get(coord), Some('Z'));
                }
            }
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let list = words(&["PYTHON", "SEARCH", "PILLOW", "IMAGE", "CODE", "GRID"]);
        let a = GridPlacer::new(&config(8, 200)).place_all(
            &list,
            &mut StdRng::seed_from_u64(42),
            &mut CountingTrace::default(),
        );
        let b = GridPlacer::new(&config(8, 200)).place_all(
            &list,
            &mut StdRng::seed_from_u64(42),
            &mut CountingTrace::default(),
        );
        assert_eq!(a, b);
    }
}
