// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Structural queries over a [`Graph`]: degree, loops, parallel edges and
//! completeness.
use rustc_hash::FxHashSet;

use crate::graph::Graph;
use crate::record::Vertex;

impl Graph {
    /// Unordered vertex pairs with no edge in either direction.
    ///
    /// Each pair is reported once as `(i, j)` with `i` before `j` in vertex
    /// order. A vertex is never paired with itself.
    pub fn non_adjacent_pairs(&self) -> Vec<(Vertex, Vertex)> {
        let mut out = Vec::new();
        for (i, x) in self.vertices.iter().enumerate() {
            for y in &self.vertices[i + 1..] {
                if !self.has_edge_between(x.as_str(), y.as_str()) {
                    out.push((x.clone(), y.clone()));
                }
            }
        }
        out
    }

    /// Returns `true` if any edge starts and ends at the same vertex.
    pub fn has_loop(&self) -> bool {
        self.edges.iter().any(crate::Edge::is_loop)
    }

    /// Returns `true` if two or more edges share the same ordered endpoint pair.
    ///
    /// `A-B` and `B-A` are not parallel.
    pub fn has_parallel_edges(&self) -> bool {
        let mut seen: FxHashSet<(&str, &str)> = FxHashSet::default();
        self.edges
            .iter()
            .any(|e| !seen.insert((e.endpoint_a.as_str(), e.endpoint_b.as_str())))
    }

    /// Number of edges with `v` as an endpoint. A loop at `v` counts once.
    pub fn degree(&self, v: &str) -> usize {
        self.edges.iter().filter(|e| e.touches(v)).count()
    }

    /// Names of the edges touching `v`, in insertion order.
    pub fn edges_incident_to(&self, v: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.touches(v))
            .map(|e| e.name.as_str())
            .collect()
    }

    /// Returns `true` if every pair of distinct vertices is joined by an edge
    /// and there are exactly `n·(n-1)/2` edges.
    ///
    /// Graphs with zero or one vertex are complete. Two vertices need their
    /// single edge.
    pub fn is_complete(&self) -> bool {
        let n = self.vertices.len();
        if n <= 1 {
            return true;
        }
        if self.edges.len() != n * (n - 1) / 2 {
            return false;
        }
        self.vertices.iter().enumerate().all(|(i, x)| {
            self.vertices[i + 1..]
                .iter()
                .all(|y| self.has_edge_between(x.as_str(), y.as_str()))
        })
    }
}
