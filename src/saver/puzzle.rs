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

//! Save a generated puzzle and its answer key in JSON format.
//!
//! The saved object is a serialization of the [`Puzzle`] object by using [`serde`]:
//!
//! ```json
//! {
//!   "size": 5,
//!   "rows": ["CATXQ", "..."],
//!   "words": [{"word": "CAT", "direction": "lr", "coords": [{"x": 0, "y": 0}, ...]}],
//!   "dropped": []
//! }
//! ```

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::generator::grid::Grid;
use crate::puzzle::Puzzle;

/// Serialize a [`Puzzle`] object.
impl Serialize for Puzzle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // `4` is the number of fields to serialize
        let mut state = serializer.serialize_struct("Puzzle", 4)?;

        // The rows are saved as strings, which is easier to read than an array of cells
        let rows: Vec<String> = self
            .grid()
            .rows()
            .map(|row| Grid::row_string(row, ""))
            .collect();
        let dropped: Vec<&str> = self.dropped().iter().map(|d| d.word.as_str()).collect();

        state.serialize_field("size", &self.grid().size())?;
        state.serialize_field("rows", &rows)?;
        state.serialize_field("words", self.placed())?;
        state.serialize_field("dropped", &dropped)?;
        state.end()
    }
}

/// Object to save a puzzle.
pub struct SaverPuzzle {
    /// Path to the JSON file.
    save_file: PathBuf,
}

impl SaverPuzzle {
    /// Create a [`SaverPuzzle`] object for the given file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Puzzle file: {save_file:?}");
        Self { save_file }
    }

    /// Save the provided [`Puzzle`] object.
    pub fn save_puzzle(&self, puzzle: &Puzzle) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, puzzle)?;
        writer.flush()?;
        Ok(())
    }
}
