/*
lib.rs

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

//! Generate word search puzzles.
//!
//! Words are hidden in a square grid, in any of the eight directions, and the remaining cells are
//! filled with random letters.
//! See the [`generator`] module for the placement algorithm and [`puzzle::Puzzle`] for the
//! result.

pub mod config;
#[cfg(feature = "png")]
pub mod draw;
pub mod generator;
pub mod puzzle;
pub mod saver;
