/*
coord.rs

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

//! Cell coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::direction::Direction;

/// Position of a cell. The top left corner is `(0, 0)`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column.
    pub x: usize,

    /// Row.
    pub y: usize,
}

impl Coord {
    /// Create a [`Coord`] object.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Return the coordinates `distance` steps away in the given direction, or None if they fall
    /// outside a grid of `size` cells per edge.
    pub fn step(self, direction: Direction, distance: usize, size: usize) -> Option<Self> {
        let (dx, dy) = direction.vector();
        let distance: isize = isize::try_from(distance).ok()?;
        let x: usize = self.x.checked_add_signed(dx.checked_mul(distance)?)?;
        let y: usize = self.y.checked_add_signed(dy.checked_mul(distance)?)?;
        if x < size && y < size {
            Some(Self { x, y })
        } else {
            None
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_inside() {
        let c = Coord::new(2, 2);
        assert_eq!(c.step(Direction::LeftToRight, 2, 5), Some(Coord::new(4, 2)));
        assert_eq!(c.step(Direction::UpLeft, 2, 5), Some(Coord::new(0, 0)));
        assert_eq!(c.step(Direction::DownLeft, 1, 5), Some(Coord::new(1, 3)));
        assert_eq!(c.step(Direction::TopToBottom, 0, 5), Some(c));
    }

    #[test]
    fn step_outside() {
        let c = Coord::new(0, 4);
        assert_eq!(c.step(Direction::RightToLeft, 1, 5), None);
        assert_eq!(c.step(Direction::TopToBottom, 1, 5), None);
        assert_eq!(c.step(Direction::UpRight, 5, 5), None);
    }
}
