/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! A [`Game`] object owns the puzzle being played and applies the player moves to it.
//! The crossing count is refreshed after every node move, and the puzzle is declared solved as
//! soon as the count drops to zero.
//!
//! The life cycle of a puzzle is [`GameState::Generated`] → [`GameState::Playing`] →
//! [`GameState::Solved`]. Starting a new level resets the state to [`GameState::Generated`].

use log::{debug, info};
use rand::Rng;
use std::fmt;
use std::time::{Duration, Instant};

use crate::config::{Board, HIT_RADIUS};
use crate::generator::difficulty::Difficulty;
use crate::generator::geometry::Point;
use crate::generator::puzzle::{GeneratorError, Puzzle, PuzzleGenerator};

/// Status of the game.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    /// No puzzle has been generated yet.
    Idle,

    /// A new puzzle is ready, but the player has not touched it yet.
    Generated,

    /// The player moved at least one node.
    Playing,

    /// No more crossings. Nothing can be moved until the next level.
    Solved,
}

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GameError {
    /// No level has been started.
    NotStarted,

    /// The puzzle is already solved.
    Solved,

    /// The node does not exist.
    UnknownNode(usize),

    /// There is no node under the pointer.
    NoNodeUnderPointer,

    /// No node is being dragged.
    NoDrag,

    /// The puzzle cannot be generated.
    Generator(GeneratorError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::NotStarted => write!(f, "no level started"),
            GameError::Solved => write!(f, "the puzzle is already solved"),
            GameError::UnknownNode(i) => write!(f, "unknown node {i}"),
            GameError::NoNodeUnderPointer => write!(f, "no node under the pointer"),
            GameError::NoDrag => write!(f, "no node is being dragged"),
            GameError::Generator(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<GeneratorError> for GameError {
    fn from(error: GeneratorError) -> Self {
        GameError::Generator(error)
    }
}

/// Node being dragged, and the distance between the pointer and the node center.
#[derive(Debug, Copy, Clone)]
struct Drag {
    node: usize,
    offset_x: f64,
    offset_y: f64,
}

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct Game {
    /// Difficulty of the current and next levels.
    pub difficulty: Difficulty,

    /// Level number, starting at 1.
    pub level: usize,

    /// Number of completed drags (or programmatic moves) in the current level.
    pub moves: usize,

    /// Work area.
    board: Board,

    /// Puzzle being played.
    puzzle: Puzzle,

    /// Status of the game.
    state: GameState,

    /// Number of crossings, refreshed after every move.
    crossings: usize,

    /// Node that the player is dragging.
    drag: Option<Drag>,

    /// Time when the level started. Used to compute the level duration.
    start_time: Instant,
}

impl Game {
    /// Create a [`Game`] object. No puzzle is generated until [`Game::start`] is called.
    pub fn new(board: &Board) -> Self {
        Self {
            difficulty: Difficulty::default(),
            level: 1,
            moves: 0,
            board: *board,
            puzzle: Puzzle::default(),
            state: GameState::Idle,
            crossings: 0,
            drag: None,
            start_time: Instant::now(),
        }
    }

    /// Start a new game at the given difficulty, from the first level.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<(), GameError> {
        self.difficulty = difficulty;
        self.level = 1;
        self.start_level(rng)
    }

    /// Go to the next level, whether the current one is solved or skipped.
    pub fn next_level<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.level += 1;
        self.start_level(rng)
    }

    /// Generate a new puzzle for the current level.
    ///
    /// The number of nodes is chosen at random in the range of the difficulty level.
    pub fn start_level<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let num_nodes: usize = rng.random_range(self.difficulty.node_range());
        let mut generator: PuzzleGenerator = PuzzleGenerator::new(num_nodes, &self.board)?;
        self.set_puzzle(generator.generate(rng));
        info!(
            "Level {} ({}): {} nodes, {} edges, {} crossings",
            self.level,
            self.difficulty,
            self.puzzle.num_nodes(),
            self.puzzle.edges().len(),
            self.crossings
        );
        Ok(())
    }

    /// Replace the puzzle being played.
    pub fn set_puzzle(&mut self, puzzle: Puzzle) {
        self.puzzle = puzzle;
        self.crossings = self.puzzle.count_crossings();
        self.moves = 0;
        self.drag = None;
        self.state = GameState::Generated;
        self.start_time = Instant::now();
    }

    /// Return the puzzle being played.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Return the status of the game.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Number of crossings after the last move.
    pub fn crossings(&self) -> usize {
        self.crossings
    }

    /// Whether the puzzle is solved.
    pub fn is_solved(&self) -> bool {
        self.state == GameState::Solved
    }

    /// Node being dragged.
    pub fn dragged_node(&self) -> Option<usize> {
        self.drag.map(|d| d.node)
    }

    /// Return the node under the pointer, if any.
    ///
    /// When nodes overlap, the node with the highest index wins because it is drawn on top.
    pub fn node_at(&self, pointer: Point) -> Option<usize> {
        self.puzzle
            .nodes()
            .iter()
            .rposition(|n| n.distance_squared(&pointer) <= HIT_RADIUS * HIT_RADIUS)
    }

    /// Verify that the nodes can be moved.
    fn check_movable(&self) -> Result<(), GameError> {
        match self.state {
            GameState::Idle => Err(GameError::NotStarted),
            GameState::Solved => Err(GameError::Solved),
            GameState::Generated | GameState::Playing => Ok(()),
        }
    }

    /// Grab the node under the pointer and return its index.
    pub fn begin_drag(&mut self, pointer: Point) -> Result<usize, GameError> {
        self.check_movable()?;
        let node: usize = self
            .node_at(pointer)
            .ok_or(GameError::NoNodeUnderPointer)?;
        let position: Point = self.puzzle.node(node).ok_or(GameError::UnknownNode(node))?;
        self.drag = Some(Drag {
            node,
            offset_x: position.x - pointer.x,
            offset_y: position.y - pointer.y,
        });
        if self.state == GameState::Generated {
            debug!("First interaction, the game is now in progress");
            self.state = GameState::Playing;
        }
        Ok(node)
    }

    /// Move the dragged node with the pointer and return the new number of crossings.
    pub fn drag_to(&mut self, pointer: Point) -> Result<usize, GameError> {
        let drag: Drag = self.drag.ok_or(GameError::NoDrag)?;
        self.check_movable()?;
        self.place(drag.node, pointer.offset(drag.offset_x, drag.offset_y));
        Ok(self.refresh())
    }

    /// Release the dragged node, count the move, and return the new number of crossings.
    pub fn end_drag(&mut self) -> Result<usize, GameError> {
        self.drag.take().ok_or(GameError::NoDrag)?;
        self.moves += 1;
        Ok(self.refresh())
    }

    /// Move a node without going through the pointer, and return the new number of crossings.
    ///
    /// The move counts as one player move.
    pub fn move_node(&mut self, index: usize, position: Point) -> Result<usize, GameError> {
        self.check_movable()?;
        if index >= self.puzzle.num_nodes() {
            return Err(GameError::UnknownNode(index));
        }
        self.state = GameState::Playing;
        self.place(index, position);
        self.moves += 1;
        Ok(self.refresh())
    }

    /// Set the node position, clamped to the board.
    fn place(&mut self, index: usize, position: Point) {
        let (min_x, max_x, min_y, max_y) = self.board.drag_area();
        self.puzzle
            .set_node(index, position.clamp(min_x, max_x, min_y, max_y));
    }

    /// Recount the crossings and detect the end of the game.
    fn refresh(&mut self) -> usize {
        self.crossings = self.puzzle.count_crossings();
        if self.crossings == 0 && self.state == GameState::Playing {
            info!(
                "Level {} solved in {} moves ({:?})",
                self.level,
                self.moves,
                self.get_duration()
            );
            self.state = GameState::Solved;
        }
        self.crossings
    }

    /// Crossed status of every edge, for drawing.
    pub fn crossed_edges(&self) -> Vec<bool> {
        self.puzzle.crossed_edges()
    }

    /// For every node, whether one of its edges is crossed.
    pub fn unsafe_nodes(&self) -> Vec<bool> {
        self.puzzle.unsafe_nodes()
    }

    /// Return the level duration.
    pub fn get_duration(&self) -> Duration {
        self.start_time.elapsed()
    }
}
