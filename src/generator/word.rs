/*
word.rs

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

//! Words to hide in the grid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Word, stored in upper case.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a [`Word`] object from a raw entry.
    ///
    /// Surrounding white spaces are removed and the word is converted to upper case.
    /// Return None if nothing is left or if the entry contains anything other than letters.
    pub fn new(raw: &str) -> Option<Self> {
        let text: &str = raw.trim();
        if text.is_empty() || !text.chars().all(char::is_alphabetic) {
            None
        } else {
            Some(Self {
                text: text.to_uppercase(),
            })
        }
    }

    /// Return the word as a string slice.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Iterate over the letters of the word.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }

    /// Number of letters (not bytes) in the word.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Always false: a [`Word`] object has at least one letter.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
