/*
config.rs

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

//! Board configuration and game constants.
//!
//! The [`Board`] object describes the work area in which the nodes are placed. The default values
//! can be overridden by a JSON file:
//!
//! ```json
//! {
//!   "width": 1920.0,
//!   "height": 1080.0,
//!   "padding": 60.0,
//!   "header_offset": 60.0,
//!   "placement_retries": 20
//! }
//! ```
//!
//! Missing fields take their default value.

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

/// Default width of the board.
pub const DEFAULT_WIDTH: f64 = 1280.0;

/// Default height of the board.
pub const DEFAULT_HEIGHT: f64 = 800.0;

/// Margin between the board borders and the nodes.
pub const PADDING: f64 = 60.0;

/// Extra vertical margin used at generation time, to keep the header and footer areas free.
pub const HEADER_OFFSET: f64 = 60.0;

/// Distance from the node center under which a pointer grabs the node.
pub const HIT_RADIUS: f64 = 32.0;

/// Number of chords to add to the cycle, relative to the number of nodes.
pub const CHORD_RATIO: f64 = 0.6;

/// Maximum number of attempts to add chords, relative to the number of nodes.
pub const CHORD_ATTEMPTS_FACTOR: usize = 10;

/// Maximum number of random placements to try to get a tangled puzzle.
pub const PLACEMENT_RETRIES: usize = 20;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The padding is negative.
    NegativePadding,

    /// The header offset is negative.
    NegativeHeaderOffset,

    /// The board has no room left for the nodes once the margins are removed.
    BoardTooSmall,

    /// At least one placement must be tried.
    NoPlacement,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::NegativePadding => write!(f, "the padding must not be negative"),
            ConfigError::NegativeHeaderOffset => {
                write!(f, "the header offset must not be negative")
            }
            ConfigError::BoardTooSmall => write!(f, "the board is too small for its margins"),
            ConfigError::NoPlacement => write!(f, "the placement retries must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

/// Work area in which the puzzle nodes live.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Board {
    /// Board width in scene coordinates.
    pub width: f64,

    /// Board height in scene coordinates.
    pub height: f64,

    /// Margin on all sides of the board.
    pub padding: f64,

    /// Additional vertical margin, at the top and at the bottom, for the initial placement only.
    pub header_offset: f64,

    /// Maximum number of random placements to try when generating a puzzle.
    pub placement_retries: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Board {
    /// Create a [`Board`] object with the default margins.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding: PADDING,
            header_offset: HEADER_OFFSET,
            placement_retries: PLACEMENT_RETRIES,
        }
    }

    /// Retrieve the [`Board`] object from a JSON file.
    ///
    /// Return the default board if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        debug!("Board configuration file: {path:?}");
        let file: File = match File::open(path) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(Self::default()),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let board: Board = serde_json::from_reader(reader)?;
        board.validate()?;
        Ok(board)
    }

    /// Verify that the board can hold nodes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.padding < 0.0 {
            return Err(ConfigError::NegativePadding);
        }
        if self.header_offset < 0.0 {
            return Err(ConfigError::NegativeHeaderOffset);
        }
        if self.placement_retries == 0 {
            return Err(ConfigError::NoPlacement);
        }
        let (min_x, max_x, min_y, max_y) = self.placement_area();
        if !(max_x > min_x && max_y > min_y) {
            return Err(ConfigError::BoardTooSmall);
        }
        Ok(())
    }

    /// Area used for the initial random placement, as `(min_x, max_x, min_y, max_y)`.
    pub fn placement_area(&self) -> (f64, f64, f64, f64) {
        (
            self.padding,
            self.width - self.padding,
            self.padding + self.header_offset,
            self.height - self.padding - self.header_offset,
        )
    }

    /// Area in which the player can drag the nodes, as `(min_x, max_x, min_y, max_y)`.
    pub fn drag_area(&self) -> (f64, f64, f64, f64) {
        (
            self.padding,
            self.width - self.padding,
            self.padding,
            self.height - self.padding,
        )
    }
}
