/*
puzzle.rs

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

//! Puzzle representation and random puzzle generation.
//!
//! A puzzle is a graph built from a cycle going through all the nodes, plus some chords.
//! The cycle guarantees that the graph is connected and that every node has at least two edges.
//! The nodes are then placed at random positions until the layout has at least one crossing.

use log::{debug, warn};
use rand::Rng;
use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;
use std::time::Instant;

use super::edges::Edges;
use super::geometry::Point;
use super::intersect;
use crate::config::{Board, CHORD_ATTEMPTS_FACTOR, CHORD_RATIO, ConfigError};

/// Smallest graph for which the cycle has neither loops nor duplicated edges.
pub const MIN_NODES: usize = 3;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GeneratorError {
    /// Not enough nodes to build a cycle.
    TooFewNodes(usize),

    /// An edge refers to a node that does not exist, or connects a node to itself.
    InvalidEdge(usize, usize),

    /// The board cannot hold the nodes.
    Board(ConfigError),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GeneratorError::TooFewNodes(n) => {
                write!(f, "a puzzle needs at least {MIN_NODES} nodes, got {n}")
            }
            GeneratorError::InvalidEdge(a, b) => write!(f, "invalid edge {a}-{b}"),
            GeneratorError::Board(e) => write!(f, "invalid board: {e}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

impl From<ConfigError> for GeneratorError {
    fn from(error: ConfigError) -> Self {
        GeneratorError::Board(error)
    }
}

/// Node positions and graph topology of a puzzle.
///
/// The topology never changes once the puzzle is built. Only the node positions move.
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
pub struct Puzzle {
    /// Node positions, indexed by node ID.
    nodes: Vec<Point>,

    /// Edges between the nodes.
    edges: Edges,
}

impl Puzzle {
    /// Create a [`Puzzle`] object from node positions and edges.
    ///
    /// # Errors
    ///
    /// The method returns an error if an edge refers to an unknown node or is a loop.
    pub fn new(nodes: Vec<Point>, edges: Edges) -> Result<Self, GeneratorError> {
        if let Some(e) = edges
            .iter()
            .find(|e| e.a == e.b || e.a >= nodes.len() || e.b >= nodes.len())
        {
            return Err(GeneratorError::InvalidEdge(e.a, e.b));
        }
        Ok(Self { nodes, edges })
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Node positions.
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    /// Graph edges.
    pub fn edges(&self) -> &Edges {
        &self.edges
    }

    /// Position of the given node.
    pub fn node(&self, index: usize) -> Option<Point> {
        self.nodes.get(index).copied()
    }

    /// Move a node. The position is not clamped.
    ///
    /// Return `false` if the node does not exist.
    pub fn set_node(&mut self, index: usize, position: Point) -> bool {
        match self.nodes.get_mut(index) {
            Some(node) => {
                *node = position;
                true
            }
            None => false,
        }
    }

    /// Number of edge pairs that cross.
    pub fn count_crossings(&self) -> usize {
        intersect::count_crossings(&self.edges, &self.nodes)
    }

    /// Whether the given edge crosses another edge.
    pub fn is_edge_crossed(&self, index: usize) -> bool {
        intersect::is_edge_crossed(index, &self.edges, &self.nodes)
    }

    /// Crossed status of every edge.
    pub fn crossed_edges(&self) -> Vec<bool> {
        intersect::crossed_edges(&self.edges, &self.nodes)
    }

    /// For every node, whether at least one of its edges is crossed.
    pub fn unsafe_nodes(&self) -> Vec<bool> {
        let mut unsafe_nodes: Vec<bool> = vec![false; self.nodes.len()];
        for (e, crossed) in self.edges.iter().zip(self.crossed_edges()) {
            if crossed {
                unsafe_nodes[e.a] = true;
                unsafe_nodes[e.b] = true;
            }
        }
        unsafe_nodes
    }

    /// Place the nodes on a regular polygon, in node order.
    ///
    /// With this layout the cycle edges form the polygon border and never cross each other.
    pub fn arrange_on_circle(&mut self, center: Point, radius: f64) {
        let n: f64 = self.nodes.len() as f64;
        for (i, node) in self.nodes.iter_mut().enumerate() {
            let angle: f64 = 2.0 * PI * i as f64 / n;
            *node = center.offset(radius * angle.cos(), radius * angle.sin());
        }
    }
}

/// [`PuzzleGenerator`] object.
///
/// The object keeps some statistics about the last generated puzzle.
pub struct PuzzleGenerator {
    /// Number of nodes in the generated puzzles.
    pub num_nodes: usize,

    /// Number of chords added to the cycle during the last generation.
    pub chords_added: usize,

    /// Number of attempts it took to add the chords.
    pub chord_attempts: usize,

    /// Number of random placements it took to get a tangled layout.
    pub placement_attempts: usize,

    /// Number of crossings in the last generated puzzle.
    pub crossings: usize,

    /// Duration in seconds of the last generation.
    pub duration: f32,

    /// Work area.
    board: Board,
}

impl PuzzleGenerator {
    /// Create the object.
    ///
    /// # Errors
    ///
    /// The method returns an error if the number of nodes is lower than [`MIN_NODES`], or if the
    /// board is not valid.
    pub fn new(num_nodes: usize, board: &Board) -> Result<Self, GeneratorError> {
        if num_nodes < MIN_NODES {
            return Err(GeneratorError::TooFewNodes(num_nodes));
        }
        board.validate()?;
        Ok(Self {
            num_nodes,
            chords_added: 0,
            chord_attempts: 0,
            placement_attempts: 0,
            crossings: 0,
            duration: 0.0,
            board: *board,
        })
    }

    /// Maximum number of edges of the generated puzzles: the cycle plus the chords.
    pub fn max_edges(&self) -> usize {
        self.num_nodes + Self::target_chords(self.num_nodes)
    }

    /// Number of chords to try to add for the given number of nodes.
    fn target_chords(num_nodes: usize) -> usize {
        (num_nodes as f64 * CHORD_RATIO).floor() as usize
    }

    /// Whether the last generated puzzle starts with crossings.
    pub fn is_tangled(&self) -> bool {
        self.crossings > 0
    }

    /// Generate and return a random puzzle.
    ///
    /// The generation never fails. If no chord can be added in the allowed number of attempts, the
    /// puzzle has fewer chords. If no placement produces a crossing, the puzzle is returned
    /// already solved; [`PuzzleGenerator::is_tangled`] reports that case.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Puzzle {
        let start: Instant = Instant::now();

        let edges: Edges = self.build_edges(rng);
        if log::log_enabled!(log::Level::Debug) {
            edges.debug();
        }

        let mut nodes: Vec<Point> = vec![Point::default(); self.num_nodes];
        self.placement_attempts = 0;
        loop {
            self.place_nodes(&mut nodes, rng);
            self.placement_attempts += 1;
            self.crossings = intersect::count_crossings(&edges, &nodes);
            if self.crossings > 0 || self.placement_attempts >= self.board.placement_retries {
                break;
            }
        }
        self.duration = start.elapsed().as_secs_f32();

        debug!(
            "Nodes = {}  Edges = {}  Crossings = {}  Placements = {}  Duration = {}",
            self.num_nodes,
            edges.len(),
            self.crossings,
            self.placement_attempts,
            self.duration
        );
        if self.crossings == 0 {
            warn!(
                "No crossing after {} placements, the puzzle starts solved",
                self.placement_attempts
            );
        }
        Puzzle { nodes, edges }
    }

    /// Build the cycle and add random chords.
    fn build_edges<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Edges {
        let n: usize = self.num_nodes;
        let target: usize = self.max_edges();
        let max_attempts: usize = n * CHORD_ATTEMPTS_FACTOR;
        let mut edges: Edges = Edges::cycle(n);

        self.chords_added = 0;
        self.chord_attempts = 0;

        // With three nodes, all the node pairs are already in the cycle
        if n < 4 {
            return edges;
        }

        while edges.len() < target && self.chord_attempts < max_attempts {
            self.chord_attempts += 1;
            // Skipping at least one node avoids the cycle neighbors
            let a: usize = rng.random_range(0..n);
            let b: usize = (a + rng.random_range(2..=n - 2)) % n;
            if edges.push(a, b) {
                self.chords_added += 1;
            }
        }
        debug!(
            "Chords = {}/{}  Attempts = {}",
            self.chords_added,
            target - n,
            self.chord_attempts
        );
        edges
    }

    /// Give every node a random position inside the placement area of the board.
    fn place_nodes<R: Rng + ?Sized>(&self, nodes: &mut [Point], rng: &mut R) {
        let (min_x, max_x, min_y, max_y) = self.board.placement_area();
        for node in nodes.iter_mut() {
            node.x = min_x + rng.random::<f64>() * (max_x - min_x);
            node.y = min_y + rng.random::<f64>() * (max_y - min_y);
        }
    }
}

/// Generate a random puzzle with the given number of nodes.
pub fn generate_puzzle<R: Rng + ?Sized>(
    num_nodes: usize,
    board: &Board,
    rng: &mut R,
) -> Result<Puzzle, GeneratorError> {
    Ok(PuzzleGenerator::new(num_nodes, board)?.generate(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::edges::Edge;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    /// Random source that always returns zero, so that every chord draw is `0-2`.
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    #[test]
    fn too_few_nodes() {
        let board = Board::default();
        assert_eq!(
            PuzzleGenerator::new(2, &board).err(),
            Some(GeneratorError::TooFewNodes(2))
        );
    }

    #[test]
    fn invalid_board() {
        let board = Board::new(50.0, 50.0);
        assert_eq!(
            PuzzleGenerator::new(8, &board).err(),
            Some(GeneratorError::Board(ConfigError::BoardTooSmall))
        );
    }

    #[test]
    fn triangle_has_no_chords() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut generator = PuzzleGenerator::new(3, &Board::default()).unwrap();
        let puzzle = generator.generate(&mut rng);
        assert_eq!(puzzle.edges().len(), 3);
        assert_eq!(generator.chords_added, 0);
        // A triangle never has crossings, so all the placements are used
        assert_eq!(puzzle.count_crossings(), 0);
        assert_eq!(generator.placement_attempts, Board::default().placement_retries);
        assert!(!generator.is_tangled());
    }

    #[test]
    fn square_gets_both_diagonals() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut generator = PuzzleGenerator::new(4, &Board::default()).unwrap();
        let puzzle = generator.generate(&mut rng);
        // floor(4 * 0.6) = 2 chords, and only the two diagonals are possible
        assert_eq!(generator.chords_added, 2);
        assert!(puzzle.edges().contains(0, 2));
        assert!(puzzle.edges().contains(1, 3));
        assert!(generator.chord_attempts <= 40);
    }

    #[test]
    fn nodes_inside_placement_area() {
        let board = Board::default();
        let (min_x, max_x, min_y, max_y) = board.placement_area();
        let mut rng = StdRng::seed_from_u64(11);
        let puzzle = generate_puzzle(15, &board, &mut rng).unwrap();
        for node in puzzle.nodes() {
            assert!(node.x >= min_x && node.x <= max_x);
            assert!(node.y >= min_y && node.y <= max_y);
        }
    }

    #[test]
    fn same_seed_same_puzzle() {
        let board = Board::default();
        let a = generate_puzzle(10, &board, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = generate_puzzle(10, &board, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn chord_attempts_exhausted() {
        let n: usize = 8;
        let mut generator = PuzzleGenerator::new(n, &Board::default()).unwrap();
        let puzzle = generator.generate(&mut ZeroRng);
        let edges = puzzle.edges();

        // Only the first draw adds a chord, all the others are duplicates
        assert_eq!(generator.chord_attempts, n * CHORD_ATTEMPTS_FACTOR);
        assert_eq!(generator.chords_added, 1);
        assert!(generator.chords_added < (n as f64 * CHORD_RATIO).floor() as usize);
        assert_eq!(edges.len(), n + generator.chords_added);
        assert!(edges.contains(0, 2));
        for (i, e) in edges.iter().enumerate() {
            assert_ne!(e.a, e.b);
            for other in &edges.as_slice()[i + 1..] {
                assert!(!other.connects(e.a, e.b));
            }
        }

        // All the nodes end up at the same corner: no crossing, every placement is used
        assert_eq!(generator.placement_attempts, Board::default().placement_retries);
        assert!(!generator.is_tangled());
    }

    #[test]
    fn single_placement_is_accepted() {
        let mut board = Board::default();
        board.placement_retries = 1;
        let mut rng = StdRng::seed_from_u64(5);
        let mut generator = PuzzleGenerator::new(3, &board).unwrap();
        generator.generate(&mut rng);
        assert_eq!(generator.placement_attempts, 1);
    }

    #[test]
    fn puzzle_rejects_bad_edges() {
        let nodes = vec![Point::default(); 3];
        let mut edges = Edges::cycle(3);
        assert!(Puzzle::new(nodes.clone(), edges.clone()).is_ok());
        edges.push(0, 7);
        assert_eq!(
            Puzzle::new(nodes, edges).err(),
            Some(GeneratorError::InvalidEdge(0, 7))
        );
    }

    #[test]
    fn unsafe_nodes_follow_crossed_edges() {
        // Bow tie: edges 1-2 and 3-0 cross
        let nodes = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
        ];
        let mut puzzle = Puzzle::new(nodes, Edges::cycle(4)).unwrap();
        assert_eq!(puzzle.unsafe_nodes(), vec![true; 4]);

        let mut edges = Edges::cycle(4);
        edges.push(0, 2);
        puzzle = Puzzle::new(puzzle.nodes().to_vec(), edges).unwrap();
        assert_eq!(puzzle.edges().get(4), Some(&Edge::new(0, 2)));
        assert_eq!(puzzle.crossed_edges(), vec![false, true, false, true, false]);
    }

    #[test]
    fn circle_layout_untangles_the_cycle() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut puzzle = generate_puzzle(8, &Board::default(), &mut rng).unwrap();
        let mut cycle_only = Puzzle::new(puzzle.nodes().to_vec(), Edges::cycle(8)).unwrap();
        cycle_only.arrange_on_circle(Point::new(640.0, 400.0), 250.0);
        assert_eq!(cycle_only.count_crossings(), 0);

        puzzle.arrange_on_circle(Point::new(640.0, 400.0), 250.0);
        for (i, node) in puzzle.nodes().iter().enumerate() {
            let d = node.distance_squared(&Point::new(640.0, 400.0));
            assert!((d - 250.0 * 250.0).abs() < 1e-6, "node {i} not on the circle");
        }
    }
}
