/*
edges.rs

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

//! Edges between nodes in the puzzle graph.

use log::debug;
use serde::Serialize;

/// Undirected edge between two distinct nodes.
///
/// The edge `(a, b)` and the edge `(b, a)` are the same edge.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    /// Create an [`Edge`] object.
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Whether the two edges have a node in common.
    pub fn shares_endpoint(&self, other: &Edge) -> bool {
        self.a == other.a || self.a == other.b || self.b == other.a || self.b == other.b
    }

    /// Whether the edge connects the two given nodes, in any order.
    pub fn connects(&self, v1: usize, v2: usize) -> bool {
        (self.a == v1 && self.b == v2) || (self.a == v2 && self.b == v1)
    }

    /// Whether the edge is incident to the given node.
    pub fn is_incident(&self, vertex: usize) -> bool {
        self.a == vertex || self.b == vertex
    }
}

/// Represent the edges of the puzzle graph.
///
/// The edge order is stable: edges are indexed by their insertion position, and the index is
/// what the presentation layer uses to query the crossed status of an edge.
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
#[serde(transparent)]
pub struct Edges {
    edges: Vec<Edge>,
}

impl Edges {
    /// Create the object that stores all the edges.
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Create the object with room for the given number of edges.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
        }
    }

    /// Create the edges of the cycle `0-1-...-(n-1)-0`.
    pub fn cycle(num_nodes: usize) -> Self {
        let mut edges: Edges = Self::with_capacity(num_nodes);
        for i in 0..num_nodes {
            edges.push(i, (i + 1) % num_nodes);
        }
        edges
    }

    /// Add an edge between the two given nodes.
    ///
    /// Return `false`, and do not add the edge, if it would be a loop or if the two nodes are
    /// already connected.
    pub fn push(&mut self, v1: usize, v2: usize) -> bool {
        if v1 == v2 || self.contains(v1, v2) {
            return false;
        }
        self.edges.push(Edge::new(v1, v2));
        true
    }

    /// Whether an edge connects the two given nodes, in any order.
    pub fn contains(&self, v1: usize, v2: usize) -> bool {
        self.edges.iter().any(|e| e.connects(v1, v2))
    }

    /// Return the edge at the given index.
    pub fn get(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether there are no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Return the edges as a slice.
    pub fn as_slice(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterate over the edges.
    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    /// Number of edges incident to the given node.
    pub fn degree(&self, vertex: usize) -> usize {
        self.edges.iter().filter(|e| e.is_incident(vertex)).count()
    }

    /// Print the edges.
    pub fn debug(&self) {
        for (i, e) in self.edges.iter().enumerate() {
            debug!("{i:>3} --> {}-{}", e.a, e.b);
        }
    }
}

impl<'a> IntoIterator for &'a Edges {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
