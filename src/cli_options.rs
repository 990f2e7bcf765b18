/*
cli_options.rs

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

//! Process command-line options.
//!
//! In command-line mode, Untangle generates random puzzles and prints them, either as text or
//! as JSON for other tools. Developers use the summary to verify how often the generator gives
//! up and returns a puzzle that is already solved.
//!
//! # Examples
//!
//! List the difficulty levels:
//!
//! ```text
//! $ untangle --ls
//! easy     5-7 nodes
//! medium   8-12 nodes
//! hard     13-18 nodes
//! ```
//!
//! Generate 1000 hard puzzles from a fixed seed and print some statistics:
//!
//! ```text
//! $ untangle -f hard -c 1000 -s 42 --summary
//! ```

use clap::Parser;
use log::{debug, error};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::env;
use std::path::PathBuf;

use crate::config::Board;
use crate::generator::difficulty::Difficulty;
use crate::generator::puzzle::{Puzzle, PuzzleGenerator};

/// Generate random untangle puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// List the difficulty levels
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Difficulty level, which gives the range for the number of nodes
    #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Number of nodes, instead of a random number for the difficulty level
    #[arg(short, long)]
    nodes: Option<usize>,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Seed for the random number generator
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file with the board dimensions and margins
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the puzzles in JSON format
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Print some statistics after generating the puzzles
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Generated puzzle and its generation statistics, as printed in JSON format.
#[derive(Serialize)]
struct PuzzleReport<'a> {
    seed: u64,
    index: usize,
    chords: usize,
    placements: usize,
    crossings: usize,
    crossed_edges: Vec<bool>,
    puzzle: &'a Puzzle,
}

/// Statistics over all the generated puzzles.
#[derive(Default)]
struct Summary {
    puzzles: usize,
    tangled: usize,
    crossings: usize,
    edges: usize,
    placements: usize,
    total: f32,
    max: f32,
}

impl Summary {
    fn add(&mut self, generator: &PuzzleGenerator, puzzle: &Puzzle) {
        self.puzzles += 1;
        if generator.is_tangled() {
            self.tangled += 1;
        }
        self.crossings += generator.crossings;
        self.edges += puzzle.edges().len();
        self.placements += generator.placement_attempts;
        self.total += generator.duration;
        if generator.duration > self.max {
            self.max = generator.duration;
        }
    }

    fn print(&self) {
        let n: f32 = self.puzzles.max(1) as f32;
        println!(
            "
           puzzles = {}
           tangled = {} ({:.1}%)
  average crossings = {:.2}
      average edges = {:.2}
 average placements = {:.2}
         total time = {}s
       average time = {}s
           max time = {}s",
            self.puzzles,
            self.tangled,
            100.0 * self.tangled as f32 / n,
            self.crossings as f32 / n,
            self.edges as f32 / n,
            self.placements as f32 / n,
            self.total,
            self.total / n,
            self.max
        );
    }
}

/// Print a puzzle as text.
fn print_puzzle(index: usize, generator: &PuzzleGenerator, puzzle: &Puzzle) {
    println!(
        "Puzzle {index}: {} nodes, {} edges, {} crossings ({} placements)",
        puzzle.num_nodes(),
        puzzle.edges().len(),
        generator.crossings,
        generator.placement_attempts
    );
    for (i, node) in puzzle.nodes().iter().enumerate() {
        println!("  node {i:>2}  ({:.1}, {:.1})", node.x, node.y);
    }
    for (e, crossed) in puzzle.edges().iter().zip(puzzle.crossed_edges()) {
        let mark: &str = if crossed { " crossed" } else { "" };
        println!("  edge {:>2}-{:<2}{mark}", e.a, e.b);
    }
}

/// Parse and process command-line options. Return the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // List the difficulty levels
    //
    if args.ls {
        for difficulty in Difficulty::all() {
            let range = difficulty.node_range();
            println!(
                "{:<8} {}-{} nodes",
                difficulty.to_string().to_lowercase(),
                range.start(),
                range.end()
            );
        }
        return 0;
    }

    let board: Board = match &args.config {
        Some(path) => match Board::load(path) {
            Ok(b) => b,
            Err(e) => {
                error!("Cannot load {path:?}: {e}");
                eprintln!("Error: {}: {e}", path.display());
                return 1;
            }
        },
        None => Board::default(),
    };

    // Without a seed, draw one so that the run can be reproduced from the output
    let seed: u64 = args.seed.unwrap_or_else(|| rand::rng().random());
    debug!("Seed = {seed}");
    let mut rng: StdRng = StdRng::seed_from_u64(seed);

    let mut summary: Summary = Summary::default();
    for i in 0..args.count {
        let num_nodes: usize = match args.nodes {
            Some(n) => n,
            None => rng.random_range(args.difficulty.node_range()),
        };
        let mut generator: PuzzleGenerator = match PuzzleGenerator::new(num_nodes, &board) {
            Ok(g) => g,
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        };
        let puzzle: Puzzle = generator.generate(&mut rng);
        summary.add(&generator, &puzzle);

        if args.json {
            let report: PuzzleReport = PuzzleReport {
                seed,
                index: i,
                chords: generator.chords_added,
                placements: generator.placement_attempts,
                crossings: generator.crossings,
                crossed_edges: puzzle.crossed_edges(),
                puzzle: &puzzle,
            };
            match serde_json::to_string(&report) {
                Ok(s) => println!("{s}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    return 1;
                }
            }
        } else {
            print_puzzle(i, &generator, &puzzle);
        }
    }

    if args.summary {
        summary.print();
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_generation_options() {
        let args = Args::parse_from(["untangle", "-f", "hard", "-c", "5", "-s", "7", "--json"]);
        assert_eq!(args.difficulty, Difficulty::Hard);
        assert_eq!(args.count, 5);
        assert_eq!(args.seed, Some(7));
        assert!(args.json);
        assert!(!args.summary);
        assert_eq!(args.nodes, None);
    }

    #[test]
    fn summary_counts_tangled_puzzles() {
        let board = Board::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut summary = Summary::default();
        for n in [3, 10] {
            let mut generator = PuzzleGenerator::new(n, &board).unwrap();
            let puzzle = generator.generate(&mut rng);
            summary.add(&generator, &puzzle);
        }
        assert_eq!(summary.puzzles, 2);
        // A triangle can never be tangled
        assert!(summary.tangled <= 1);
        assert!(summary.placements >= board.placement_retries);
    }

    #[test]
    fn json_report() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut generator = PuzzleGenerator::new(6, &Board::default()).unwrap();
        let puzzle = generator.generate(&mut rng);
        let report = PuzzleReport {
            seed: 3,
            index: 0,
            chords: generator.chords_added,
            placements: generator.placement_attempts,
            crossings: generator.crossings,
            crossed_edges: puzzle.crossed_edges(),
            puzzle: &puzzle,
        };
        let value: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["seed"], 3);
        assert_eq!(value["puzzle"]["nodes"].as_array().unwrap().len(), 6);
        assert_eq!(
            value["puzzle"]["edges"].as_array().unwrap().len(),
            puzzle.edges().len()
        );
        assert!(value["puzzle"]["nodes"][0]["x"].is_f64());
    }
}
