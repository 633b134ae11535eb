// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Minimum spanning trees.
//!
//! Both builders read the caller's [`Graph`] and keep their bookkeeping in
//! private working state; the graph is never mutated, on success or failure.
//! Edges are treated as undirected. Ties in weight are broken by edge
//! insertion order, so the selected edge set is deterministic.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::Graph;
use crate::record::Edge;

mod kruskal;
mod prim;
mod union_find;

/// Strategy used to build a spanning tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MstAlgorithm {
    /// Global cheapest-edge selection with union-find merging.
    #[default]
    Kruskal,
    /// Single tree grown from the first vertex.
    Prim,
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kruskal => f.write_str("kruskal"),
            Self::Prim => f.write_str("prim"),
        }
    }
}

/// Error returned when parsing an unknown [`MstAlgorithm`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown spanning-tree algorithm: {0}")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for MstAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kruskal" => Ok(Self::Kruskal),
            "prim" => Ok(Self::Prim),
            _ => Err(UnknownAlgorithm(s.to_owned())),
        }
    }
}

/// Edges selected by a spanning-tree builder, in selection order.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<'g> {
    algorithm: MstAlgorithm,
    edges: Vec<&'g Edge>,
    total_weight: f64,
}

impl<'g> SpanningTree<'g> {
    fn from_indices(graph: &'g Graph, algorithm: MstAlgorithm, indices: &[usize]) -> Self {
        let edges: Vec<&'g Edge> = indices.iter().map(|&ei| &graph.edges[ei]).collect();
        let total_weight = edges.iter().map(|e| e.weight).sum();
        Self {
            algorithm,
            edges,
            total_weight,
        }
    }

    /// Builder that produced this tree.
    pub fn algorithm(&self) -> MstAlgorithm {
        self.algorithm
    }

    /// Selected edges in the order they were chosen.
    pub fn edges(&self) -> &[&'g Edge] {
        &self.edges
    }

    /// Selected edge names in the order they were chosen.
    pub fn edge_names(&self) -> Vec<&'g str> {
        self.edges.iter().map(|e| e.name.as_str()).collect()
    }

    /// Sum of the selected edge weights.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Number of selected edges (`vertex_count - 1` for a non-empty graph).
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` for graphs with at most one vertex.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns `true` if the edge named `name` was selected.
    pub fn contains(&self, name: &str) -> bool {
        self.edges.iter().any(|e| e.name == name)
    }
}

impl Graph {
    /// Minimum spanning tree via Kruskal's algorithm.
    ///
    /// Fails with [`GraphError::DisconnectedGraph`] if the graph has more than
    /// one component.
    pub fn kruskal(&self) -> Result<SpanningTree<'_>, GraphError> {
        kruskal::build(self)
            .map(|sel| SpanningTree::from_indices(self, MstAlgorithm::Kruskal, &sel))
    }

    /// Minimum spanning tree via Prim's algorithm, seeded at the first vertex.
    ///
    /// Fails with [`GraphError::DisconnectedGraph`] if the graph has more than
    /// one component.
    pub fn prim(&self) -> Result<SpanningTree<'_>, GraphError> {
        prim::build(self).map(|sel| SpanningTree::from_indices(self, MstAlgorithm::Prim, &sel))
    }

    /// Minimum spanning tree built with `algorithm`.
    pub fn minimum_spanning_tree(
        &self,
        algorithm: MstAlgorithm,
    ) -> Result<SpanningTree<'_>, GraphError> {
        match algorithm {
            MstAlgorithm::Kruskal => self.kruskal(),
            MstAlgorithm::Prim => self.prim(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_names_round_trip_through_from_str() {
        assert_eq!("Prim".parse::<MstAlgorithm>(), Ok(MstAlgorithm::Prim));
        assert_eq!(MstAlgorithm::Kruskal.to_string(), "kruskal");
        assert_eq!(
            "boruvka".parse::<MstAlgorithm>(),
            Err(UnknownAlgorithm("boruvka".into()))
        );
    }

    #[test]
    fn empty_and_single_vertex_graphs_have_empty_trees() {
        for g in [Graph::new(), Graph::with_vertices(["A"]).expect("A")] {
            for algo in [MstAlgorithm::Kruskal, MstAlgorithm::Prim] {
                let tree = g.minimum_spanning_tree(algo).expect("tree");
                assert!(tree.is_empty());
                assert_eq!(tree.algorithm(), algo);
            }
        }
    }
}
