/*
generator.rs

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

//! Select words and place them in a grid.
//!
//! A puzzle is generated in two steps:
//!
//! * The words to hide are chosen by [`selector::select`] from a [`selector::WordSource`].
//!   The function returns the longest words first.
//!
//! * The words are placed one after the other by a [`placer::GridPlacer`] object.
//!   Each word is written along one of the eight [`direction::Direction`] values.
//!   Two words can cross only on a cell where they have the same letter.
//!   A word that cannot be placed after a fixed number of attempts is dropped, so the puzzle may
//!   contain fewer words than requested.
//!   The [`placer::GridPlacer::place_all`] method returns a [`placer::Layout`] object with the
//!   filled [`grid::Grid`], the [`placement::PlacedWord`] records, and the dropped words.
//!
//! All the random choices are made with the generator given by the caller, so a seeded generator
//! produces the same puzzle every time.
//! The placer reports what it does to a [`trace::PlacementTrace`] object.

pub mod coord;
pub mod direction;
pub mod grid;
pub mod placement;
pub mod placer;
pub mod selector;
pub mod trace;
pub mod word;
