// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use tracing::{debug, instrument, trace};

use super::union_find::UnionFind;
use crate::error::GraphError;
use crate::graph::Graph;

/// Selects edge indices for a minimum spanning tree.
///
/// Edges are visited cheapest first; the sort is stable so equal weights keep
/// insertion order. An edge is taken iff it joins two different components.
#[instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub(super) fn build(graph: &Graph) -> Result<Vec<usize>, GraphError> {
    let n = graph.vertex_count();
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut order: Vec<usize> = (0..graph.edges.len()).collect();
    order.sort_by(|&x, &y| graph.edges[x].weight.total_cmp(&graph.edges[y].weight));

    let mut components = UnionFind::new(n);
    let mut selected = Vec::with_capacity(n - 1);
    for ei in order {
        if selected.len() == n - 1 {
            break;
        }
        let (a, b) = graph.edge_ends[ei];
        let edge = &graph.edges[ei];
        if components.union(a, b) {
            trace!(edge = %edge.name, weight = edge.weight, "selected");
            selected.push(ei);
        } else {
            trace!(edge = %edge.name, "skipped: would close a cycle");
        }
    }

    if selected.len() < n - 1 {
        let spanned = components.size_of(0);
        debug!(spanned, total = n, "no spanning tree");
        return Err(GraphError::DisconnectedGraph { spanned, total: n });
    }
    Ok(selected)
}
