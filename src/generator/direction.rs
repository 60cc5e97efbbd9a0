/*
direction.rs

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

//! Directions in which a word can run through the grid.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{FromRepr, IntoStaticStr};

/// Unit vector `(dx, dy)` of each direction, indexed by the enum discriminant.
/// `x` grows to the right and `y` grows downward.
const VECTORS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

/// Word direction.
///
/// The short name of each variant (`lr`, `tb`, ...) is used in traces and in the JSON export.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr, IntoStaticStr,
)]
#[repr(u8)]
pub enum Direction {
    #[serde(rename = "lr")]
    #[strum(serialize = "lr")]
    LeftToRight,

    #[serde(rename = "rl")]
    #[strum(serialize = "rl")]
    RightToLeft,

    #[serde(rename = "tb")]
    #[strum(serialize = "tb")]
    TopToBottom,

    #[serde(rename = "bt")]
    #[strum(serialize = "bt")]
    BottomToTop,

    #[serde(rename = "tr")]
    #[strum(serialize = "tr")]
    DownRight,

    #[serde(rename = "tl")]
    #[strum(serialize = "tl")]
    DownLeft,

    #[serde(rename = "br")]
    #[strum(serialize = "br")]
    UpRight,

    #[serde(rename = "bl")]
    #[strum(serialize = "bl")]
    UpLeft,
}

impl Direction {
    /// All the directions, in declaration order.
    pub fn all() -> impl Iterator<Item = Direction> {
        (0..VECTORS.len() as u8).filter_map(Direction::from_repr)
    }

    /// All the directions in a random order.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Vec<Direction> {
        let mut directions: Vec<Direction> = Self::all().collect();
        directions.shuffle(rng);
        directions
    }

    /// Unit vector `(dx, dy)` of the direction.
    pub fn vector(self) -> (isize, isize) {
        VECTORS[self as usize]
    }

    /// Short name of the direction.
    pub fn code(self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
