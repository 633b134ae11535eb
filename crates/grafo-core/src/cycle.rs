// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Cycle search.
use tracing::{debug, instrument};

use crate::graph::Graph;
use crate::reachability::Adjacency;
use crate::record::Edge;

/// A closed walk through distinct edges, in traversal order.
///
/// The first edge leaves the root vertex and the last edge returns to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Cycle<'g> {
    edges: Vec<&'g Edge>,
}

impl<'g> Cycle<'g> {
    /// Edges of the cycle in traversal order.
    pub fn edges(&self) -> &[&'g Edge] {
        &self.edges
    }

    /// Edge names in traversal order.
    pub fn edge_names(&self) -> Vec<&'g str> {
        self.edges.iter().map(|e| e.name.as_str()).collect()
    }

    /// Number of edges in the cycle.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the cycle holds no edges.
    ///
    /// Never the case for a cycle returned by [`Graph::find_cycle`]: a loop
    /// yields one edge and every other cycle at least two.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns `true` if the edge named `name` is part of the cycle.
    pub fn contains(&self, name: &str) -> bool {
        self.edges.iter().any(|e| e.name == name)
    }
}

impl Graph {
    /// Finds one cycle, or `None` if the graph is a forest.
    ///
    /// Vertices are examined in insertion order. At each vertex `v` a loop is
    /// reported immediately as a one-edge cycle. Otherwise every pair of
    /// incident edges `(v, s)`, `(v, t)` (in edge insertion order) is tried:
    /// parallel edges (`s == t`) close a two-edge cycle, else a fewest-hop path
    /// from `s` to `t` that avoids `v` closes the cycle. The result is the
    /// first hit under that order, not necessarily the shortest cycle.
    #[instrument(level = "debug", skip_all, fields(vertices = self.vertex_count(), edges = self.edge_count()))]
    pub fn find_cycle(&self) -> Option<Cycle<'_>> {
        let adj = Adjacency::build(self);
        for (root, vertex) in self.vertices.iter().enumerate() {
            let incident = adj.neighbours(root);
            if let Some(&(ei, _)) = incident.iter().find(|&&(_, w)| w == root) {
                debug!(%vertex, edge = %self.edges[ei].name, "loop closes a cycle");
                return Some(self.cycle_from(vec![ei]));
            }
            if incident.len() < 2 {
                continue;
            }
            for (i, &(first, start)) in incident.iter().enumerate() {
                for &(last, end) in &incident[i + 1..] {
                    if start == end {
                        debug!(%vertex, "parallel edges close a cycle");
                        return Some(self.cycle_from(vec![first, last]));
                    }
                    if let Some(path) = adj.shortest_path(start, end, Some(root)) {
                        let mut walk = Vec::with_capacity(path.len() + 2);
                        walk.push(first);
                        walk.extend(path);
                        walk.push(last);
                        debug!(%vertex, len = walk.len(), "cycle found");
                        return Some(self.cycle_from(walk));
                    }
                }
            }
        }
        None
    }

    /// Returns `true` if [`Graph::find_cycle`] finds anything.
    pub fn has_cycle(&self) -> bool {
        self.find_cycle().is_some()
    }

    fn cycle_from(&self, indices: Vec<usize>) -> Cycle<'_> {
        Cycle {
            edges: indices.into_iter().map(|ei| &self.edges[ei]).collect(),
        }
    }
}
