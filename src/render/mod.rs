// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of idef0-ascii and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rasterization into a fixed-size character grid.
//!
//! [`Canvas`] is the mutable drawing surface; [`render_diagram`] draws a laid-out diagram
//! and its routes onto one and hands back the finished, immutable [`Grid`].

use std::fmt;

use thiserror::Error;

use crate::geometry::{GridPoint, GridRect};

mod activity;
mod text;

pub use activity::{render_diagram, RenderError};

pub const CORNER: char = '+';
pub const HORIZONTAL: char = '-';
pub const VERTICAL: char = '|';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("canvas area overflow: {width}*{height}")]
    AreaOverflow { width: i32, height: i32 },

    #[error("out of bounds: (r{row}, c{col}) for {width}x{height} canvas")]
    OutOfBounds { row: i32, col: i32, width: i32, height: i32 },
}

/// A fixed-size, bounds-checked character surface.
///
/// Structural writes ([`Canvas::set`], [`Canvas::stroke`], [`Canvas::draw_rect`]) outside
/// the surface are errors. Text ([`Canvas::write_str`]) clips silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    /// Creates a canvas filled with spaces.
    pub fn new(width: i32, height: i32) -> Result<Self, CanvasError> {
        let overflow = CanvasError::AreaOverflow { width, height };
        let (Ok(w), Ok(h)) = (usize::try_from(width), usize::try_from(height)) else {
            return Err(overflow);
        };
        let len = w.checked_mul(h).ok_or(overflow)?;
        Ok(Self { width: w, height: h, cells: vec![' '; len] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, point: GridPoint) -> Result<char, CanvasError> {
        Ok(self.cells[self.index_of(point)?])
    }

    /// Writes `ch` at `point`, replacing whatever was there.
    pub fn set(&mut self, point: GridPoint, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(point)?;
        self.cells[idx] = ch;
        Ok(())
    }

    /// Writes a line glyph; a straight glyph never replaces a [`CORNER`].
    pub fn stroke(&mut self, point: GridPoint, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(point)?;
        if ch != CORNER && self.cells[idx] == CORNER {
            return Ok(());
        }
        self.cells[idx] = ch;
        Ok(())
    }

    /// Writes `text` left to right from `origin`, dropping cells outside the canvas.
    pub fn write_str(&mut self, origin: GridPoint, text: &str) {
        let Ok(row) = usize::try_from(origin.row) else {
            return;
        };
        if row >= self.height {
            return;
        }
        for (offset, ch) in text.chars().enumerate() {
            let col = i64::from(origin.col) + offset as i64;
            let Ok(col) = usize::try_from(col) else {
                continue;
            };
            if col >= self.width {
                break;
            }
            self.cells[row * self.width + col] = ch;
        }
    }

    /// Draws the outline of `rect`: `+` corners, `-` top and bottom, `|` sides.
    pub fn draw_rect(&mut self, rect: GridRect) -> Result<(), CanvasError> {
        // Check both far corners first so a failed draw leaves the canvas untouched.
        self.index_of(GridPoint::new(rect.top, rect.left))?;
        self.index_of(GridPoint::new(rect.bottom, rect.right))?;

        for col in rect.left + 1..rect.right {
            self.set(GridPoint::new(rect.top, col), HORIZONTAL)?;
            self.set(GridPoint::new(rect.bottom, col), HORIZONTAL)?;
        }
        for row in rect.top + 1..rect.bottom {
            self.set(GridPoint::new(row, rect.left), VERTICAL)?;
            self.set(GridPoint::new(row, rect.right), VERTICAL)?;
        }
        for (row, col) in [
            (rect.top, rect.left),
            (rect.top, rect.right),
            (rect.bottom, rect.left),
            (rect.bottom, rect.right),
        ] {
            self.set(GridPoint::new(row, col), CORNER)?;
        }
        Ok(())
    }

    pub fn finish(self) -> Grid {
        Grid { width: self.width, height: self.height, cells: self.cells }
    }

    fn index_of(&self, point: GridPoint) -> Result<usize, CanvasError> {
        let out_of_bounds = || CanvasError::OutOfBounds {
            row: point.row,
            col: point.col,
            width: self.width as i32,
            height: self.height as i32,
        };
        let row = usize::try_from(point.row).map_err(|_| out_of_bounds())?;
        let col = usize::try_from(point.col).map_err(|_| out_of_bounds())?;
        if row >= self.height || col >= self.width {
            return Err(out_of_bounds());
        }
        Ok(row * self.width + col)
    }
}

/// A finished rendering: `height` rows of `width` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Grid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells.get(row * self.width + col).copied()
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        // `max(1)` keeps `chunks` happy for zero-width grids, which have no cells anyway.
        self.cells.chunks(self.width.max(1))
    }

    pub fn row_string(&self, row: usize) -> Option<String> {
        self.rows().nth(row).map(|cells| cells.iter().collect())
    }

    /// Like `Display`, without trailing blanks on each row or trailing empty rows.
    pub fn to_trimmed_string(&self) -> String {
        let mut lines = self
            .rows()
            .map(|cells| cells.iter().collect::<String>().trim_end_matches(' ').to_owned())
            .collect::<Vec<_>>();
        while matches!(lines.last(), Some(line) if line.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for (row, cells) in self.rows().enumerate() {
            if row > 0 {
                f.write_char('\n')?;
            }
            for &ch in cells {
                f.write_char(ch)?;
            }
        }
        Ok(())
    }
}
