// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]
use grafo_core::Graph;

fn build(vertices: &[&str], edges: &[(&str, &str, &str)]) -> Graph {
    let mut g = Graph::with_vertices(vertices.iter().copied()).unwrap();
    for &(name, a, b) in edges {
        g.add_edge(name, a, b, 1.0).unwrap();
    }
    g
}

#[test]
fn chain_is_connected_until_the_bridge_is_missing() {
    let connected = build(&["A", "B", "C"], &[("ab", "A", "B"), ("bc", "B", "C")]);
    assert!(connected.is_connected());

    let split = build(&["A", "B", "C"], &[("ab", "A", "B")]);
    assert!(!split.is_connected());
    assert!(split.path_exists("B", "A"));
    assert!(!split.path_exists("A", "C"));
}

#[test]
fn trivial_graphs_are_connected() {
    assert!(Graph::new().is_connected());
    assert!(build(&["A"], &[]).is_connected());
    assert!(!build(&["A", "B"], &[]).is_connected());
}

#[test]
fn triangle_cycle_contains_every_edge() {
    let g = build(
        &["A", "B", "C"],
        &[("ab", "A", "B"), ("bc", "B", "C"), ("ca", "C", "A")],
    );
    let cycle = g.find_cycle().unwrap();
    assert_eq!(cycle.len(), 3);
    for name in ["ab", "bc", "ca"] {
        assert!(cycle.contains(name));
    }

    let tree = build(&["A", "B", "C"], &[("ab", "A", "B"), ("bc", "B", "C")]);
    assert!(tree.find_cycle().is_none());
}

#[test]
fn cycle_result_is_a_closed_walk() {
    let g = build(
        &["A", "B", "C", "D", "E"],
        &[
            ("ab", "A", "B"),
            ("bc", "B", "C"),
            ("cd", "C", "D"),
            ("de", "D", "E"),
            ("eb", "E", "B"),
        ],
    );
    let cycle = g.find_cycle().unwrap();
    let edges = cycle.edges();
    // every consecutive pair of edges shares a vertex, and so do last and first
    for (i, e) in edges.iter().enumerate() {
        let next = edges[(i + 1) % edges.len()];
        let shares = e.touches(next.endpoint_a.as_str()) || e.touches(next.endpoint_b.as_str());
        assert!(shares, "{} and {} are not adjacent", e.name, next.name);
    }
    assert!(!cycle.contains("ab"));
}

#[test]
fn completeness_tracks_every_pair() {
    let full = build(
        &["A", "B", "C"],
        &[("ab", "A", "B"), ("bc", "B", "C"), ("ca", "C", "A")],
    );
    assert!(full.is_complete());
    assert!(full.non_adjacent_pairs().is_empty());

    let missing = build(&["A", "B", "C"], &[("ab", "A", "B"), ("bc", "B", "C")]);
    assert!(!missing.is_complete());
    let owned = missing.non_adjacent_pairs();
    let pairs: Vec<(&str, &str)> = owned.iter().map(|(x, y)| (x.as_str(), y.as_str())).collect();
    assert_eq!(pairs, vec![("A", "C")]);

    // parallel edges inflate the count even when every pair is covered
    let padded = build(
        &["A", "B", "C"],
        &[("ab", "A", "B"), ("bc", "B", "C"), ("ca", "C", "A"), ("ba", "B", "A")],
    );
    assert!(!padded.is_complete());
}

#[test]
fn incident_edges_and_walks() {
    let g = build(
        &["J", "C", "E", "P"],
        &[("a1", "J", "C"), ("a2", "C", "E"), ("a3", "P", "C")],
    );
    assert_eq!(g.edges_incident_to("C"), vec!["a1", "a2", "a3"]);
    let walk: Vec<&str> = g
        .find_path_of_length(2)
        .unwrap()
        .into_iter()
        .map(|v| v.as_str())
        .collect();
    assert_eq!(walk, vec!["J", "C", "E"]);
    assert!(g.find_path_of_length(3).is_none());
}
