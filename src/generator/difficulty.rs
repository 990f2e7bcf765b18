/*
difficulty.rs

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

//! Puzzle difficulty levels.
//!
//! The difficulty only controls the number of nodes. The number of chords and the placement
//! rules are the same for all the levels.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;
use strum_macros::FromRepr;

/// Puzzle difficulty level.
#[derive(
    Serialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(i32)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl Difficulty {
    /// Range of the number of nodes for puzzles at this level.
    pub fn node_range(&self) -> RangeInclusive<usize> {
        match self {
            Difficulty::Easy => 5..=7,
            Difficulty::Medium => 8..=12,
            Difficulty::Hard => 13..=18,
        }
    }

    /// Return all the difficulty levels, from the easiest to the hardest.
    pub fn all() -> Vec<Difficulty> {
        (0..).map_while(Difficulty::from_repr).collect()
    }
}
