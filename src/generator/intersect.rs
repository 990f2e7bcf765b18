/*
intersect.rs

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

//! Detect crossings between the edges of the puzzle graph.
//!
//! All the functions are pure: they read the current node positions and never store anything.
//! The crossing state is recomputed each time it is needed, which is cheap enough for the puzzle
//! sizes (at most a few dozen edges).
//!
//! Two simplifications shape the puzzle and must be kept:
//!
//! * Parallel, collinear, and degenerate (zero-length) segments never cross.
//! * Two edges that share a node never cross, whatever their geometry.

use super::edges::{Edge, Edges};
use super::geometry::Point;

/// Whether the segment `p1`-`p2` crosses the segment `p3`-`p4`.
///
/// The intersection point must lie strictly inside both segments: touching at an endpoint is not
/// a crossing.
pub fn segments_intersect(p1: &Point, p2: &Point, p3: &Point, p4: &Point) -> bool {
    let det: f64 = (p2.x - p1.x) * (p4.y - p3.y) - (p4.x - p3.x) * (p2.y - p1.y);
    if det == 0.0 {
        return false;
    }
    let lambda: f64 = ((p4.y - p3.y) * (p4.x - p1.x) + (p3.x - p4.x) * (p4.y - p1.y)) / det;
    let gamma: f64 = ((p1.y - p2.y) * (p4.x - p1.x) + (p2.x - p1.x) * (p4.y - p1.y)) / det;
    (0.0 < lambda && lambda < 1.0) && (0.0 < gamma && gamma < 1.0)
}

/// Whether the two edges cross, given the node positions.
pub fn edges_intersect(e1: &Edge, e2: &Edge, nodes: &[Point]) -> bool {
    if e1.shares_endpoint(e2) {
        return false;
    }
    segments_intersect(&nodes[e1.a], &nodes[e1.b], &nodes[e2.a], &nodes[e2.b])
}

/// Number of edge pairs that cross. The puzzle is solved when this is zero.
pub fn count_crossings(edges: &Edges, nodes: &[Point]) -> usize {
    let edges: &[Edge] = edges.as_slice();
    let mut count: usize = 0;
    for (i, e1) in edges.iter().enumerate() {
        count += edges[i + 1..]
            .iter()
            .filter(|e2| edges_intersect(e1, e2, nodes))
            .count();
    }
    count
}

/// Whether the edge at the given index crosses at least one other edge.
///
/// Return `false` for an index that does not exist.
pub fn is_edge_crossed(index: usize, edges: &Edges, nodes: &[Point]) -> bool {
    match edges.get(index) {
        Some(e1) => edges
            .iter()
            .enumerate()
            .any(|(j, e2)| j != index && edges_intersect(e1, e2, nodes)),
        None => false,
    }
}

/// Crossed status of every edge, in edge order.
///
/// Equivalent to calling [`is_edge_crossed`] for each edge, but each pair is tested once.
pub fn crossed_edges(edges: &Edges, nodes: &[Point]) -> Vec<bool> {
    let edges: &[Edge] = edges.as_slice();
    let mut crossed: Vec<bool> = vec![false; edges.len()];
    for (i, e1) in edges.iter().enumerate() {
        for (j, e2) in edges.iter().enumerate().skip(i + 1) {
            if edges_intersect(e1, e2, nodes) {
                crossed[i] = true;
                crossed[j] = true;
            }
        }
    }
    crossed
}
