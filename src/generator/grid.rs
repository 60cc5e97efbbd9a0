/*
grid.rs

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

//! Square grid of letters.
//!
//! A cell is either empty or holds a letter.
//! Once a cell holds a letter, only the same letter can be written to it again (possibly in
//! another case, when words are revealed in lower case).

use log::debug;
use std::fmt;

use super::coord::Coord;

/// Whether two letters are the same, ignoring the case.
pub fn same_letter(a: char, b: char) -> bool {
    a == b || a.to_uppercase().eq(b.to_uppercase())
}

/// Grid object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Number of cells on each edge.
    size: usize,

    /// Cells, row by row.
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an empty grid of `size` x `size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Number of cells on each edge.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.x < self.size && coord.y < self.size {
            Some(coord.y * self.size + coord.x)
        } else {
            None
        }
    }

    /// Return the letter in the cell, or None if the cell is empty or outside the grid.
    pub fn get(&self, coord: Coord) -> Option<char> {
        self.index(coord).and_then(|i| self.cells[i])
    }

    /// Whether `letter` can be written to the cell: the cell is empty or already holds that
    /// letter.
    pub fn accepts(&self, coord: Coord, letter: char) -> bool {
        match self.index(coord) {
            Some(i) => match self.cells[i] {
                Some(current) => same_letter(current, letter),
                None => true,
            },
            None => false,
        }
    }

    /// Write a letter to a cell.
    ///
    /// Overwriting a letter with a different one is a bug in the caller.
    pub fn set(&mut self, coord: Coord, letter: char) {
        let i: usize = self
            .index(coord)
            .expect("Bug: coordinates outside the grid");
        debug_assert!(
            self.cells[i].is_none_or(|current| same_letter(current, letter)),
            "Bug: overwriting {:?} with {letter:?} at {coord}",
            self.cells[i]
        );
        self.cells[i] = Some(letter);
    }

    /// Coordinates of the empty cells, row by row.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| Coord::new(i % self.size, i / self.size))
            .collect()
    }

    /// Whether all the cells hold a letter.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Iterate over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        // `chunks` panics on a zero chunk size
        self.cells.chunks(self.size.max(1))
    }

    /// Return the row as a string. Empty cells are represented by a dot.
    pub fn row_string(row: &[Option<char>], separator: &str) -> String {
        row.iter()
            .map(|c| c.unwrap_or('.').to_string())
            .collect::<Vec<String>>()
            .join(separator)
    }

    /// Print the grid in the debug log.
    pub fn debug(&self) {
        for row in self.rows() {
            debug!("{}", Self::row_string(row, " "));
        }
    }
}

/// Display the grid row by row, with the cells separated by a tab.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", Self::row_string(row, "\t"))?;
        }
        Ok(())
    }
}
