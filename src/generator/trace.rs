/*
trace.rs

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

//! Diagnostic trace of the placement algorithm.
//!
//! The placer reports every attempt, every direction it tries, and every conflict to a
//! [`PlacementTrace`] object.
//! The trace is purely observational: the placer never reads anything back from it.
//!
//! * [`NoTrace`] discards everything.
//! * [`LogTrace`] forwards the events to the [`log`] facade.
//! * [`FileTrace`] appends the events to a text file.

use chrono::Local;
use log::{Level, debug, log_enabled, trace};
use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::coord::Coord;
use super::direction::Direction;
use super::placement::{DroppedWord, PlacedWord};
use super::word::Word;

/// Width of the session header in a trace file.
const HEADER_WIDTH: usize = 100;

/// Receiver of the placement events. All the methods do nothing by default.
pub trait PlacementTrace {
    /// The list of words to place has been selected.
    fn words_selected(&mut self, _words: &[Word]) {}

    /// The placer starts looking for a position for the word.
    fn word_started(&mut self, _word: &Word) {}

    /// New attempt from a random start cell.
    fn attempt(&mut self, _word: &Word, _attempt: usize, _start: Coord) {}

    /// The word does not fit in the grid in that direction from the current start cell.
    fn out_of_bounds(&mut self, _word: &Word, _direction: Direction) {}

    /// A cell on the path holds another letter.
    fn conflict(
        &mut self,
        _word: &Word,
        _direction: Direction,
        _coord: Coord,
        _found: char,
        _expected: char,
    ) {
    }

    /// The word has been written to the grid.
    fn placed(&mut self, _placed: &PlacedWord, _attempts: usize) {}

    /// The word has been abandoned.
    fn dropped(&mut self, _dropped: &DroppedWord) {}
}

/// Trace that discards all the events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl PlacementTrace for NoTrace {}

/// Trace that forwards the events to the log.
///
/// Attempts and directions are logged at the trace level, the other events at the debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTrace;

impl PlacementTrace for LogTrace {
    fn words_selected(&mut self, words: &[Word]) {
        if log_enabled!(Level::Debug) {
            let w: Vec<&str> = words.iter().map(Word::as_str).collect();
            debug!("Words to add: {w:?}");
        }
    }

    fn word_started(&mut self, word: &Word) {
        debug!("Searching a position for {word}");
    }

    fn attempt(&mut self, word: &Word, attempt: usize, start: Coord) {
        trace!("    {word}: attempt {attempt} from {start}");
    }

    fn out_of_bounds(&mut self, word: &Word, direction: Direction) {
        trace!("        {word}: {direction} leaves the grid");
    }

    fn conflict(
        &mut self,
        word: &Word,
        direction: Direction,
        coord: Coord,
        found: char,
        expected: char,
    ) {
        trace!("        {word}: {direction} conflicts at {coord} ({found} instead of {expected})");
    }

    fn placed(&mut self, placed: &PlacedWord, attempts: usize) {
        debug!(
            "    {} placed at {} running {} after {attempts} attempt(s)",
            placed.word,
            placed.start(),
            placed.direction
        );
    }

    fn dropped(&mut self, dropped: &DroppedWord) {
        debug!(
            "    {} dropped after {} attempt(s): {}",
            dropped.word, dropped.attempts, dropped.reason
        );
    }
}

/// Trace that appends the events to a text file.
///
/// Write errors do not interrupt the generation. The first one is kept and returned by
/// [`FileTrace::finish`].
pub struct FileTrace {
    writer: BufWriter<File>,
    error: Option<io::Error>,
}

impl FileTrace {
    /// Open the trace file in append mode and write a session header with the current date.
    pub fn new(path: &Path) -> Result<Self, Box<dyn Error>> {
        let file: File = OpenOptions::new().create(true).append(true).open(path)?;
        debug!("Trace file: {path:?}");
        let mut writer: BufWriter<File> = BufWriter::new(file);
        let header: String = Local::now()
            .format("%a %b %e %H:%M:%S %Y")
            .to_string()
            .to_uppercase();
        writeln!(writer, "{:^width$}", header, width = HEADER_WIDTH)?;
        Ok(Self {
            writer,
            error: None,
        })
    }

    fn write(&mut self, line: std::fmt::Arguments) {
        if self.error.is_none() {
            let res: io::Result<()> = self
                .writer
                .write_fmt(line)
                .and_then(|()| self.writer.write_all(b"\n"));
            if let Err(e) = res {
                self.error = Some(e);
            }
        }
    }

    /// Flush the file.
    ///
    /// # Errors
    ///
    /// Return the first error that occurred while writing the trace.
    pub fn finish(mut self) -> Result<(), Box<dyn Error>> {
        if let Some(e) = self.error.take() {
            return Err(Box::new(e));
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl PlacementTrace for FileTrace {
    fn words_selected(&mut self, words: &[Word]) {
        let w: Vec<&str> = words.iter().map(Word::as_str).collect();
        self.write(format_args!("Words to add: {w:?}\n"));
    }

    fn word_started(&mut self, word: &Word) {
        self.write(format_args!(
            "Searching for a suitable position for \"{word}\" in the grid..."
        ));
    }

    fn attempt(&mut self, _word: &Word, attempt: usize, start: Coord) {
        self.write(format_args!("\tAttempt {attempt}: start at {start}"));
    }

    fn out_of_bounds(&mut self, _word: &Word, direction: Direction) {
        self.write(format_args!(
            "\t\t{}: outside the grid",
            direction.code().to_uppercase()
        ));
    }

    fn conflict(
        &mut self,
        _word: &Word,
        direction: Direction,
        coord: Coord,
        found: char,
        expected: char,
    ) {
        self.write(format_args!(
            "\t\t{}: {coord} holds {found}, {expected} required",
            direction.code().to_uppercase()
        ));
    }

    fn placed(&mut self, placed: &PlacedWord, attempts: usize) {
        let coords: Vec<String> = placed.coords.iter().map(Coord::to_string).collect();
        self.write(format_args!(
            "\tCoordinates chosen: [{}]",
            coords.join(", ")
        ));
        self.write(format_args!(
            "--> Successfully found a place to put the word {} in the grid after {attempts} attempt(s)!\n",
            placed.word
        ));
    }

    fn dropped(&mut self, dropped: &DroppedWord) {
        self.write(format_args!(
            "--> Failed to find suitable position for the word {} ({}, {} attempt(s))\n",
            dropped.word, dropped.reason, dropped.attempts
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::placement::DropReason;
    use std::fs;

    #[test]
    fn file_trace_appends_events() {
        let path = std::env::temp_dir().join(format!(
            "wordsearch-trace-{}.txt",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        let word = Word::new("cat").unwrap();
        for _ in 0..2 {
            let mut trace = FileTrace::new(&path).unwrap();
            trace.word_started(&word);
            trace.conflict(&word, Direction::LeftToRight, Coord::new(1, 0), 'X', 'A');
            trace.dropped(&DroppedWord {
                word: word.clone(),
                reason: DropReason::AttemptsExhausted,
                attempts: 3,
            });
            trace.finish().unwrap();
        }

        let content = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(content.matches("\"CAT\" in the grid").count(), 2);
        assert!(content.contains("LR: (1, 0) holds X, A required"));
        assert!(content.contains("Failed to find suitable position for the word CAT"));
    }
}
