/*
lib.rs

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

//! Untangle puzzle engine.
//!
//! The player gets a graph whose edges cross each other, and must move the nodes until no edges
//! cross anymore.
//!
//! * [`generator`] builds random puzzles and detects edge crossings.
//! * [`game`] tracks a game in progress: levels, moves, drags, and the solved status.
//! * [`config`] describes the board and the game constants.
//! * [`cli_options`] is the command-line front end.

pub mod cli_options;
pub mod config;
pub mod game;
pub mod generator;
