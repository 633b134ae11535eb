// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Reachability over the undirected view of a [`Graph`].
//!
//! All traversals use explicit work lists plus a visited set, so depth is
//! bounded by heap, not by the call stack. Neighbours are always visited in
//! edge insertion order, which keeps every result deterministic.
use std::collections::VecDeque;

use crate::graph::Graph;
use crate::record::{Edge, Vertex};

/// Undirected adjacency lists indexed by vertex position.
///
/// Each entry is `(edge index, neighbour index)`. A loop appears once in its
/// vertex's list with itself as the neighbour.
#[derive(Debug)]
pub(crate) struct Adjacency {
    lists: Vec<Vec<(usize, usize)>>,
}

impl Adjacency {
    pub(crate) fn build(graph: &Graph) -> Self {
        let mut lists = vec![Vec::new(); graph.vertex_count()];
        for (ei, &(a, b)) in graph.edge_ends.iter().enumerate() {
            lists[a].push((ei, b));
            if a != b {
                lists[b].push((ei, a));
            }
        }
        Self { lists }
    }

    pub(crate) fn neighbours(&self, v: usize) -> &[(usize, usize)] {
        self.lists.get(v).map(Vec::as_slice).unwrap_or_default()
    }

    /// Breadth-first search for an edge path `from -> to` that never enters
    /// `excluded`. Returns the edge indices in walk order.
    pub(crate) fn shortest_path(
        &self,
        from: usize,
        to: usize,
        excluded: Option<usize>,
    ) -> Option<Vec<usize>> {
        if from == to {
            return Some(Vec::new());
        }
        let mut pred: Vec<Option<(usize, usize)>> = vec![None; self.lists.len()];
        let mut seen = vec![false; self.lists.len()];
        seen[from] = true;
        if let Some(x) = excluded {
            seen[x] = true;
        }
        let mut queue = VecDeque::from([from]);
        while let Some(v) = queue.pop_front() {
            for &(ei, w) in self.neighbours(v) {
                if seen[w] {
                    continue;
                }
                seen[w] = true;
                pred[w] = Some((ei, v));
                if w == to {
                    let mut path = Vec::new();
                    let mut cur = to;
                    while let Some((ei, prev)) = pred[cur] {
                        path.push(ei);
                        cur = prev;
                    }
                    path.reverse();
                    return Some(path);
                }
                queue.push_back(w);
            }
        }
        None
    }

    /// Marks every vertex reachable from `root`.
    fn reach(&self, root: usize) -> Vec<bool> {
        let mut visited = vec![false; self.lists.len()];
        visited[root] = true;
        let mut stack = vec![root];
        while let Some(v) = stack.pop() {
            for &(_, w) in self.neighbours(v) {
                if !visited[w] {
                    visited[w] = true;
                    stack.push(w);
                }
            }
        }
        visited
    }
}

impl Graph {
    /// Returns `true` if `y` can be reached from `x` along edges taken in
    /// either direction.
    ///
    /// A vertex reaches itself. Unknown vertices reach nothing.
    pub fn path_exists(&self, x: &str, y: &str) -> bool {
        let (Some(from), Some(to)) = (self.vertex_position(x), self.vertex_position(y)) else {
            return false;
        };
        if from == to {
            return true;
        }
        let adj = Adjacency::build(self);
        let mut visited = vec![false; self.vertex_count()];
        visited[from] = true;
        let mut stack = vec![from];
        while let Some(v) = stack.pop() {
            for &(_, w) in adj.neighbours(v) {
                if w == to {
                    return true;
                }
                if !visited[w] {
                    visited[w] = true;
                    stack.push(w);
                }
            }
        }
        false
    }

    /// Returns `true` if every vertex is reachable from the first one.
    ///
    /// Graphs with zero or one vertex are connected.
    pub fn is_connected(&self) -> bool {
        if self.vertex_count() <= 1 {
            return true;
        }
        Adjacency::build(self).reach(0).into_iter().all(|seen| seen)
    }

    /// Edges of a fewest-hop path from `x` to `y`, or `None` if `y` is
    /// unreachable. The path from a vertex to itself is empty.
    pub fn find_path(&self, x: &str, y: &str) -> Option<Vec<&Edge>> {
        let from = self.vertex_position(x)?;
        let to = self.vertex_position(y)?;
        let path = Adjacency::build(self).shortest_path(from, to, None)?;
        Some(path.into_iter().map(|ei| &self.edges[ei]).collect())
    }

    /// First simple path with exactly `len` edges, as its `len + 1` vertices.
    ///
    /// Start vertices are tried in insertion order and neighbours in edge
    /// insertion order; `None` if no such path exists. A simple path has at
    /// most `vertex_count() - 1` edges, so longer requests fail immediately.
    pub fn find_path_of_length(&self, len: usize) -> Option<Vec<&Vertex>> {
        let n = self.vertex_count();
        if len >= n {
            return None;
        }
        let adj = Adjacency::build(self);
        for start in 0..n {
            let mut on_path = vec![false; n];
            on_path[start] = true;
            let mut path = vec![start];
            let mut cursors = vec![0_usize];
            while let Some(&v) = path.last() {
                if path.len() == len + 1 {
                    return Some(path.iter().map(|&i| &self.vertices[i]).collect());
                }
                let depth = path.len() - 1;
                let next = adj.neighbours(v).get(cursors[depth]).map(|&(_, w)| w);
                match next {
                    Some(w) => {
                        cursors[depth] += 1;
                        if !on_path[w] {
                            on_path[w] = true;
                            path.push(w);
                            cursors.push(0);
                        }
                    }
                    None => {
                        on_path[v] = false;
                        path.pop();
                        cursors.pop();
                    }
                }
            }
        }
        None
    }
}
