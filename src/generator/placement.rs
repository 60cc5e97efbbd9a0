/*
placement.rs

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

//! Word placements and the record of placed and dropped words.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::coord::Coord;
use super::direction::Direction;
use super::word::Word;

/// Compute the coordinates of the letters of a word that starts at `start` and runs in the given
/// direction.
///
/// Return None if a letter falls outside a grid of `size` cells per edge.
pub fn coordinates(
    word: &Word,
    start: Coord,
    direction: Direction,
    size: usize,
) -> Option<Vec<Coord>> {
    (0..word.len())
        .map(|i| start.step(direction, i, size))
        .collect()
}

/// Word that has been placed in the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    /// The word.
    pub word: Word,

    /// Direction in which the word runs.
    pub direction: Direction,

    /// Coordinates of the letters, in the order of the letters.
    pub coords: Vec<Coord>,
}

impl PlacedWord {
    /// Coordinates of the first letter.
    pub fn start(&self) -> Coord {
        self.coords[0]
    }

    /// Iterate over the letters and their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.coords.iter().copied().zip(self.word.letters())
    }
}

/// Why a word has not been placed.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// The word has more letters than the grid has cells on an edge.
    TooLong,

    /// No valid position found before the attempt ceiling.
    AttemptsExhausted,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DropReason::TooLong => write!(f, "longer than the grid"),
            DropReason::AttemptsExhausted => write!(f, "no position found"),
        }
    }
}

/// Word that could not be placed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DroppedWord {
    /// The word.
    pub word: Word,

    /// Why the word has been dropped.
    pub reason: DropReason,

    /// Number of attempts spent on the word.
    pub attempts: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_follow_direction() {
        let word = Word::new("CAT").unwrap();
        assert_eq!(
            coordinates(&word, Coord::new(4, 0), Direction::DownLeft, 5),
            Some(vec![Coord::new(4, 0), Coord::new(3, 1), Coord::new(2, 2)])
        );
        assert_eq!(
            coordinates(&word, Coord::new(1, 3), Direction::BottomToTop, 5),
            Some(vec![Coord::new(1, 3), Coord::new(1, 2), Coord::new(1, 1)])
        );
    }

    #[test]
    fn coordinates_outside_grid() {
        let word = Word::new("CAT").unwrap();
        assert_eq!(
            coordinates(&word, Coord::new(3, 0), Direction::LeftToRight, 5),
            None
        );
        assert_eq!(
            coordinates(&word, Coord::new(1, 1), Direction::UpLeft, 5),
            None
        );
    }

    #[test]
    fn full_length_word_needs_an_edge_start() {
        let word = Word::new("ABCDE").unwrap();
        assert!(coordinates(&word, Coord::new(0, 2), Direction::LeftToRight, 5).is_some());
        assert!(coordinates(&word, Coord::new(1, 2), Direction::LeftToRight, 5).is_none());
        assert!(coordinates(&word, Coord::new(4, 4), Direction::UpLeft, 5).is_some());
        assert!(coordinates(&word, Coord::new(4, 3), Direction::UpLeft, 5).is_none());
    }

    #[test]
    fn placed_word_cells() {
        let word = Word::new("DOG").unwrap();
        let coords = coordinates(&word, Coord::new(0, 0), Direction::TopToBottom, 3).unwrap();
        let placed = PlacedWord {
            word,
            direction: Direction::TopToBottom,
            coords,
        };
        assert_eq!(placed.start(), Coord::new(0, 0));
        assert_eq!(
            placed.cells().collect::<Vec<_>>(),
            vec![
                (Coord::new(0, 0), 'D'),
                (Coord::new(0, 1), 'O'),
                (Coord::new(0, 2), 'G')
            ]
        );
    }
}
