/*
generator.rs

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

//! Generate random puzzles and detect edge crossings.
//!
//! A [`puzzle::Puzzle`] object stores the node positions and the graph edges.
//! You create a random puzzle by creating a [`puzzle::PuzzleGenerator`] object and by using its
//! [`puzzle::PuzzleGenerator::generate`] method, which takes the random number generator to use.
//! Tests pass a seeded generator to get reproducible puzzles.
//!
//! The [`intersect`] module provides the crossing predicates. They are called once after the
//! generation, to verify that the puzzle is not already solved, and then after every node move.

pub mod difficulty;
pub mod edges;
pub mod geometry;
pub mod intersect;
pub mod puzzle;
