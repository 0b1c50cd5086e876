//! Character-grid surface
//!
//! Maps the playfield onto a fixed grid of terminal cells. A cell is painted
//! by a sprite when the cell's center lies inside the sprite's rect and the
//! sprite pixel there is not colour-keyed. Sprites that paint no cell that
//! way still paint the cell under their center.

use std::ops::Range;

use glam::Vec2;

use super::{Color, GLYPH_ADVANCE, Image, Surface, Text};
use crate::sim::{Playfield, Rect};

/// Default grid for a 640x480 playfield (8x16 px per cell)
pub const DEFAULT_COLS: usize = 80;
pub const DEFAULT_ROWS: usize = 30;

/// One terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::WHITE,
            bg: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Canvas {
    cols: usize,
    rows: usize,
    /// Playfield units per cell
    cell_size: Vec2,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(cols: usize, rows: usize, field_size: Vec2) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            cell_size: Vec2::new(field_size.x / cols as f32, field_size.y / rows as f32),
            cells: vec![Cell::default(); cols * rows],
        }
    }

    pub fn for_playfield(playfield: &Playfield) -> Self {
        Self::new(
            DEFAULT_COLS,
            DEFAULT_ROWS,
            Vec2::new(playfield.width, playfield.height),
        )
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        if col < self.cols && row < self.rows {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        let start = (row.min(self.rows - 1)) * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Characters of one row
    pub fn row_text(&self, row: usize) -> String {
        self.row(row).iter().map(|c| c.ch).collect()
    }

    /// Cell coordinates under a playfield point
    pub fn cell_at(&self, point: Vec2) -> Option<(usize, usize)> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let col = (point.x / self.cell_size.x) as usize;
        let row = (point.y / self.cell_size.y) as usize;
        (col < self.cols && row < self.rows).then_some((col, row))
    }

    fn paint(&mut self, col: usize, row: usize, color: Color) {
        if let Some(cell) = self.cell_mut(col, row) {
            cell.ch = ' ';
            cell.bg = color;
        }
    }

    fn cell_mut(&mut self, col: usize, row: usize) -> Option<&mut Cell> {
        if col < self.cols && row < self.rows {
            self.cells.get_mut(row * self.cols + col)
        } else {
            None
        }
    }
}

/// Indices of the cells whose centers fall within `[lo, hi]`
fn covered(lo: f32, hi: f32, cell: f32, count: usize) -> Range<usize> {
    let first = (lo / cell - 0.5).ceil().max(0.0) as usize;
    let last = (hi / cell - 0.5).floor();
    if last < 0.0 {
        return 0..0;
    }
    let end = (last as usize + 1).min(count);
    first.min(end)..end
}

impl Surface for Canvas {
    fn fill(&mut self, color: Color) {
        for cell in &mut self.cells {
            *cell = Cell {
                ch: ' ',
                fg: Color::WHITE,
                bg: color,
            };
        }
    }

    fn blit_image(&mut self, image: &Image, dest: &Rect) {
        let cols = covered(dest.left(), dest.right(), self.cell_size.x, self.cols);
        let rows = covered(dest.top(), dest.bottom(), self.cell_size.y, self.rows);

        let mut painted = false;
        for row in rows {
            for col in cols.clone() {
                // Keyed pixels under the cell center leave the cell alone
                let center = (Vec2::new(col as f32, row as f32) + 0.5) * self.cell_size;
                let uv = (center - dest.top_left()) / dest.size();
                if image.is_opaque_at(uv.x, uv.y) {
                    self.paint(col, row, image.color);
                    painted = true;
                }
            }
        }

        // Small sprites still show up as one cell
        if !painted && image.is_opaque_at(0.5, 0.5) {
            if let Some((col, row)) = self.cell_at(dest.center) {
                self.paint(col, row, image.color);
            }
        }
    }

    fn blit_text(&mut self, text: &Text) {
        if text.rect.center.y < 0.0 {
            return;
        }
        let row = (text.rect.center.y / self.cell_size.y) as usize;
        let step = ((text.size * GLYPH_ADVANCE / self.cell_size.x).round() as usize).max(1);
        let start = (text.rect.left() / self.cell_size.x).round();

        for (i, ch) in text.content.chars().enumerate() {
            let col = start + (i * step) as f32;
            if col < 0.0 {
                continue;
            }
            if let Some(cell) = self.cell_mut(col as usize, row) {
                cell.ch = ch;
                cell.fg = text.color;
            }
        }
    }
}
