// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use std::cmp::Ordering;

use tracing::{debug, instrument, trace};

use crate::error::GraphError;
use crate::graph::Graph;

/// Best crossing edge seen during one scan.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    edge: usize,
    reaches: usize,
    at_frontier: bool,
}

/// Grows one tree from vertex 0 and returns the selected edge indices.
///
/// Each step takes the cheapest unconsumed edge with exactly one endpoint in
/// the tree. Among equal weights an edge touching the frontier (the vertex
/// added last) wins, then insertion order. Edges whose endpoints are both in
/// the tree are consumed as they are met and never scanned again.
#[instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub(super) fn build(graph: &Graph) -> Result<Vec<usize>, GraphError> {
    let n = graph.vertex_count();
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut in_tree = vec![false; n];
    let mut consumed = vec![false; graph.edges.len()];
    in_tree[0] = true;
    let mut spanned = 1;
    let mut frontier = 0;
    let mut selected = Vec::with_capacity(n - 1);

    while spanned < n {
        let mut best: Option<Candidate> = None;
        for (ei, &(a, b)) in graph.edge_ends.iter().enumerate() {
            if consumed[ei] {
                continue;
            }
            let reaches = match (in_tree[a], in_tree[b]) {
                (true, false) => b,
                (false, true) => a,
                (true, true) => {
                    consumed[ei] = true;
                    continue;
                }
                (false, false) => continue,
            };
            let at_frontier = a == frontier || b == frontier;
            let better = best.is_none_or(|cur| {
                match graph.edges[ei]
                    .weight
                    .total_cmp(&graph.edges[cur.edge].weight)
                {
                    Ordering::Less => true,
                    Ordering::Equal => at_frontier && !cur.at_frontier,
                    Ordering::Greater => false,
                }
            });
            if better {
                best = Some(Candidate {
                    edge: ei,
                    reaches,
                    at_frontier,
                });
            }
        }

        let Some(pick) = best else {
            debug!(spanned, total = n, "no edge leaves the tree");
            return Err(GraphError::DisconnectedGraph { spanned, total: n });
        };
        trace!(
            edge = %graph.edges[pick.edge].name,
            weight = graph.edges[pick.edge].weight,
            from_frontier = pick.at_frontier,
            "selected"
        );
        consumed[pick.edge] = true;
        in_tree[pick.reaches] = true;
        frontier = pick.reaches;
        spanned += 1;
        selected.push(pick.edge);
    }
    Ok(selected)
}
