// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of idef0-ascii and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Integer grid primitives shared by layout, routing and rendering.
//!
//! Two coordinate systems meet here:
//! - [`GridPoint`] is a character cell: `row` grows downward, `col` grows to the right.
//! - [`RoutePoint`] is what the routing service speaks: `x` equals the column, `y` grows
//!   upward and is `diagram_height - row`.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridPoint {
    pub row: i32,
    pub col: i32,
}

impl GridPoint {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Moves `steps` cells in `direction`.
    pub fn step(self, direction: Direction, steps: i32) -> Self {
        let (dr, dc) = direction.delta();
        Self { row: self.row + dr * steps, col: self.col + dc * steps }
    }

    /// Converts into the routing service's upward `y` convention.
    pub fn to_route(self, diagram_height: i32) -> RoutePoint {
        RoutePoint { x: self.col, y: diagram_height - self.row }
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(r{}, c{})", self.row, self.col)
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RoutePoint {
    pub x: i32,
    pub y: i32,
}

impl RoutePoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn to_grid(self, diagram_height: i32) -> GridPoint {
        GridPoint { row: diagram_height - self.y, col: self.x }
    }

    pub(crate) fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

impl fmt::Display for RoutePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Inclusive cell rectangle in grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRect {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl GridRect {
    /// Rectangle of `width × height` cells whose centre cell is `center`.
    ///
    /// For even sizes the centre sits one cell right/below the geometric middle, so
    /// `left = center.col - width / 2` and `right = left + width - 1`.
    pub fn centered(center: GridPoint, width: i32, height: i32) -> Self {
        let left = center.col - width / 2;
        let top = center.row - height / 2;
        Self { top, left, bottom: top + height - 1, right: left + width - 1 }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top + 1
    }

    pub fn contains(&self, p: GridPoint) -> bool {
        p.row >= self.top && p.row <= self.bottom && p.col >= self.left && p.col <= self.right
    }

    pub fn to_route(self, diagram_height: i32) -> RouteRect {
        RouteRect {
            min_x: self.left,
            max_x: self.right,
            min_y: diagram_height - self.bottom,
            max_y: diagram_height - self.top,
        }
    }
}

/// Inclusive rectangle in routing coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRect {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl RouteRect {
    pub fn contains(&self, p: RoutePoint) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(d_row, d_col)` in grid coordinates.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    pub const fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Classifies the grid segment `from -> to`.
    ///
    /// Returns `None` for zero-length and diagonal segments.
    pub fn classify(from: GridPoint, to: GridPoint) -> Option<Self> {
        match (to.row - from.row, to.col - from.col) {
            (0, 0) => None,
            (0, dc) if dc > 0 => Some(Self::Right),
            (0, _) => Some(Self::Left),
            (dr, 0) if dr > 0 => Some(Self::Down),
            (_, 0) => Some(Self::Up),
            _ => None,
        }
    }
}
