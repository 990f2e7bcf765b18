/*
geometry.rs

Copyright 2025 Hervé Quatremain

This file is part of Untangle.

Untangle is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Untangle is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Untangle. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Points in the scene coordinate system.
//!
//! Nodes of the puzzle graph are stored as [`Point`] objects. Their coordinates are `f64` values
//! bounded by the board (see [`crate::config::Board`]).

use serde::Serialize;

/// 2D point. Also used as the position of a puzzle node.
#[derive(Serialize, Debug, Default, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a [`Point`] object.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Square of the distance to the other point.
    pub fn distance_squared(&self, other: &Point) -> f64 {
        let dx: f64 = self.x - other.x;
        let dy: f64 = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Return the point translated by the given offset.
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Return the point clamped to the `[min_x, max_x] × [min_y, max_y]` rectangle.
    ///
    /// If a range is empty (`max < min`), then the coordinate is set to the lower bound.
    pub fn clamp(&self, min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            x: self.x.min(max_x).max(min_x),
            y: self.y.min(max_y).max(min_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);
        assert_eq!(a.distance_squared(&b), 25.0);
        assert_eq!(b.distance_squared(&a), 25.0);
    }

    #[test]
    fn clamp_inside_and_outside() {
        let p = Point::new(50.0, 50.0);
        assert_eq!(p.clamp(0.0, 100.0, 0.0, 100.0), p);
        assert_eq!(
            Point::new(-5.0, 300.0).clamp(10.0, 90.0, 20.0, 80.0),
            Point::new(10.0, 80.0)
        );
    }

    #[test]
    fn clamp_empty_range() {
        assert_eq!(
            Point::new(7.0, 7.0).clamp(60.0, 40.0, 60.0, 40.0),
            Point::new(60.0, 60.0)
        );
    }
}
