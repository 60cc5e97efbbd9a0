/*
draw.rs

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

//! Draw the puzzle with Cairo and save it as a PNG image.
//!
//! The image shows the grid, one letter per cell, followed by a separator line and the list of
//! the words to find, [`WORDS_PER_ROW`] words per line.

use cairo::{
    Context, FontExtents, FontSlant, FontWeight, Format, ImageSurface, Result, TextExtents,
};
use log::{Level, debug, log_enabled};
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::puzzle::{FIND_LIST_HEADING, Puzzle};

/// Size of a grid cell in pixels.
const CELL_SIZE: f64 = 40.0;

/// Margin around the grid.
const MARGIN: f64 = 50.0;

/// Number of words on each line of the word list.
pub const WORDS_PER_ROW: usize = 3;

/// Height of a line in the word list.
const WORD_LINE_HEIGHT: f64 = 25.0;

const GRID_FONT_SIZE: f64 = 24.0;
const LIST_FONT_SIZE: f64 = 18.0;
const FONT_FAMILY: &str = "Sans";

/// Draw object that renders a puzzle.
#[derive(Debug)]
pub struct Draw<'a> {
    /// Puzzle to draw.
    puzzle: &'a Puzzle,

    /// Width of the image in pixels.
    width: i32,

    /// Height of the image in pixels.
    height: i32,

    /// Vertical position of the line that separates the grid from the word list.
    separator_y: f64,
}

impl<'a> Draw<'a> {
    /// Create a [`Draw`] object and compute the image size.
    pub fn new(puzzle: &'a Puzzle) -> Self {
        let grid_pixel_size: f64 = puzzle.grid().size() as f64 * CELL_SIZE;

        // Room for the heading and for the word lines
        let num_rows_words: usize = puzzle.placed().len() / WORDS_PER_ROW + 1;
        let word_list_height: f64 = num_rows_words as f64 * 30.0 + 40.0;

        let width: f64 = grid_pixel_size + MARGIN * 2.0;
        let height: f64 = grid_pixel_size + MARGIN * 2.0 + word_list_height;

        if log_enabled!(Level::Debug) {
            debug!("Image parameters:");
            debug!("         width = {width}");
            debug!("        height = {height}");
            debug!("    word lines = {num_rows_words}");
        }

        Self {
            puzzle,
            width: width as i32,
            height: height as i32,
            separator_y: grid_pixel_size + MARGIN + 10.0,
        }
    }

    /// Size of the image in pixels.
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Draw a letter centered in the given cell.
    fn draw_letter(&self, letter: char, x: usize, y: usize, ctx: &Context) -> Result<()> {
        let text: String = letter.to_string();
        let font_extends: FontExtents = ctx.font_extents()?;
        let text_extends: TextExtents = ctx.text_extents(&text)?;
        let center_x: f64 = MARGIN + (x as f64 + 0.5) * CELL_SIZE;
        let center_y: f64 = MARGIN + (y as f64 + 0.5) * CELL_SIZE;
        let text_height: f64 = font_extends.ascent() + font_extends.descent();

        ctx.move_to(
            center_x - text_extends.x_advance() / 2.0,
            center_y + text_height / 2.0 - font_extends.descent(),
        );
        ctx.show_text(&text)
    }

    /// Draw the grid letters.
    fn draw_grid(&self, ctx: &Context) -> Result<()> {
        ctx.save()?;
        ctx.select_font_face(FONT_FAMILY, FontSlant::Normal, FontWeight::Normal);
        ctx.set_font_size(GRID_FONT_SIZE);
        ctx.set_source_rgb(0.0, 0.0, 0.0);
        for (y, row) in self.puzzle.grid().rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(letter) = cell {
                    self.draw_letter(*letter, x, y, ctx)?;
                }
            }
        }
        ctx.restore()
    }

    /// Draw the separator line and the list of words.
    fn draw_word_list(&self, ctx: &Context) -> Result<()> {
        ctx.save()?;

        ctx.set_source_rgb(0.5, 0.5, 0.5);
        ctx.set_line_width(2.0);
        ctx.move_to(MARGIN, self.separator_y);
        ctx.line_to(self.width as f64 - MARGIN, self.separator_y);
        ctx.stroke()?;

        ctx.select_font_face(FONT_FAMILY, FontSlant::Normal, FontWeight::Bold);
        ctx.set_font_size(LIST_FONT_SIZE);
        ctx.set_source_rgb(0.0, 0.0, 0.0);
        ctx.move_to(MARGIN, self.separator_y + 10.0 + LIST_FONT_SIZE);
        ctx.show_text(FIND_LIST_HEADING)?;

        ctx.select_font_face(FONT_FAMILY, FontSlant::Normal, FontWeight::Normal);
        ctx.set_source_rgb(0.0, 0.0, 1.0);
        let start_y: f64 = self.separator_y + 40.0 + LIST_FONT_SIZE;
        let col_width: f64 = (self.width as f64 - MARGIN * 2.0) / WORDS_PER_ROW as f64;
        for (i, word) in self.puzzle.find_list().iter().enumerate() {
            let row: usize = i / WORDS_PER_ROW;
            let col: usize = i % WORDS_PER_ROW;
            ctx.move_to(
                MARGIN + col as f64 * col_width,
                start_y + row as f64 * WORD_LINE_HEIGHT,
            );
            ctx.show_text(&format!("• {word}"))?;
        }

        ctx.restore()
    }

    /// Render the puzzle on a new surface.
    pub fn surface(&self) -> Result<ImageSurface> {
        let surface: ImageSurface = ImageSurface::create(Format::Rgb24, self.width, self.height)?;
        let ctx: Context = Context::new(&surface)?;

        ctx.set_source_rgb(1.0, 1.0, 1.0);
        ctx.paint()?;
        self.draw_grid(&ctx)?;
        self.draw_word_list(&ctx)?;
        drop(ctx);

        surface.flush();
        Ok(surface)
    }

    /// Render the puzzle and save it as a PNG file.
    pub fn save_png(&self, path: &Path) -> std::result::Result<(), Box<dyn Error>> {
        let surface: ImageSurface = self.surface()?;
        let file: File = File::create(path)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);
        surface.write_to_png(&mut writer)?;
        writer.flush()?;
        debug!("Image saved in {path:?}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PuzzleConfig;
    use crate::generator::selector::WordSource;
    use crate::generator::trace::NoTrace;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Read;

    fn puzzle() -> Puzzle {
        Puzzle::generate(
            &PuzzleConfig::default(),
            &WordSource::Default,
            &mut StdRng::seed_from_u64(5),
            &mut NoTrace,
        )
        .unwrap()
    }

    #[test]
    fn image_size_follows_grid_and_word_list() {
        let puzzle = puzzle();
        let draw = Draw::new(&puzzle);
        let rows = puzzle.placed().len() / WORDS_PER_ROW + 1;
        assert_eq!(
            draw.size(),
            (15 * 40 + 100, 15 * 40 + 100 + rows as i32 * 30 + 40)
        );
    }

    #[test]
    fn writes_a_png_file() {
        let puzzle = puzzle();
        let path = std::env::temp_dir().join(format!("wordsearch-{}.png", std::process::id()));
        Draw::new(&puzzle).save_png(&path).unwrap();

        let mut signature = [0u8; 8];
        File::open(&path).unwrap().read_exact(&mut signature).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(signature, [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }
}
