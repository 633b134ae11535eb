// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Text rendering for graphs and query results.

use comfy_table::Table;
use grafo_core::{Edge, Graph};

/// Two lines: vertices joined by `", "`, then edge descriptors joined by `", "`.
pub fn plain(graph: &Graph) -> String {
    let vertices: Vec<&str> = graph.vertices().iter().map(|v| v.as_str()).collect();
    let edges: Vec<String> = graph.edges().iter().map(Edge::descriptor).collect();
    format!("{}\n{}\n", vertices.join(", "), edges.join(", "))
}

/// Property/value table describing the graph's structure.
pub fn summary(graph: &Graph, hash: &[u8]) -> Table {
    let yes_no = |b: bool| if b { "yes" } else { "no" }.to_owned();
    let mut table = Table::new();
    table.set_header(vec!["property", "value"]);
    table.add_row(vec!["vertices".to_owned(), graph.vertex_count().to_string()]);
    table.add_row(vec!["edges".to_owned(), graph.edge_count().to_string()]);
    table.add_row(vec!["loops".to_owned(), yes_no(graph.has_loop())]);
    table.add_row(vec![
        "parallel edges".to_owned(),
        yes_no(graph.has_parallel_edges()),
    ]);
    table.add_row(vec!["complete".to_owned(), yes_no(graph.is_complete())]);
    table.add_row(vec!["connected".to_owned(), yes_no(graph.is_connected())]);
    table.add_row(vec!["cycle".to_owned(), yes_no(graph.has_cycle())]);
    table.add_row(vec!["hash".to_owned(), hex::encode(hash)]);
    table
}

/// One row per edge: name, endpoints, weight.
pub fn edges<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["edge", "endpoints", "weight"]);
    for e in edges {
        table.add_row(vec![e.name.clone(), e.descriptor(), e.weight.to_string()]);
    }
    table
}
