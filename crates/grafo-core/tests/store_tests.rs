// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]
use grafo_core::{EdgeRejection, Graph, GraphError, VertexRejection};
use proptest::prelude::*;

fn vertex_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_]{1,6}"
}

proptest! {
    #[test]
    fn added_vertex_is_present_and_cannot_be_added_twice(name in vertex_name()) {
        let mut g = Graph::new();
        prop_assert!(g.add_vertex(name.clone()).is_ok());
        prop_assert!(g.has_vertex(&name));
        let err = g.add_vertex(name.clone()).unwrap_err();
        prop_assert_eq!(
            err,
            GraphError::InvalidVertex { name, reason: VertexRejection::Duplicate }
        );
        prop_assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn degrees_sum_to_twice_the_edge_count_without_loops(
        n in 2_usize..10,
        raw in prop::collection::vec((0_usize..10, 0_usize..10), 0..30),
    ) {
        let names: Vec<String> = (0..n).map(|i| format!("v{i}")).collect();
        let mut g = Graph::with_vertices(names.iter().cloned()).unwrap();
        for (k, (a, b)) in raw.into_iter().enumerate() {
            let (a, b) = (a % n, b % n);
            if a == b {
                continue;
            }
            g.add_edge(format!("e{k}"), &names[a], &names[b], 1.0).unwrap();
        }
        prop_assert!(!g.has_loop());
        let total: usize = names.iter().map(|v| g.degree(v)).sum();
        prop_assert_eq!(total, 2 * g.edge_count());
    }
}

#[test]
fn separator_in_vertex_is_rejected() {
    let mut g = Graph::new();
    let err = g.add_vertex("A-B").unwrap_err();
    assert_eq!(
        err,
        GraphError::InvalidVertex {
            name: "A-B".into(),
            reason: VertexRejection::ContainsSeparator
        }
    );
    assert_eq!(g.vertex_count(), 0);
}

#[test]
fn failed_edge_insert_leaves_store_untouched() {
    let mut g = Graph::with_vertices(["A", "B"]).unwrap();
    g.add_edge("ab", "A", "B", 1.0).unwrap();
    let before = g.snapshot();

    let err = g.add_edge("bc", "B", "C", 1.0).unwrap_err();
    assert_eq!(
        err,
        GraphError::InvalidEdge {
            name: "bc".into(),
            reason: EdgeRejection::UnknownEndpoint("C".into())
        }
    );
    assert!(g.add_edge("ab", "B", "A", 1.0).is_err());
    assert!(g.add_edge_descriptor("ba", "BA", 1.0).is_err());
    assert_eq!(g.snapshot(), before);
}

#[test]
fn edge_descriptor_predicate_follows_stored_direction() {
    let mut g = Graph::with_vertices(["J", "C", "E"]).unwrap();
    g.add_edge_descriptor("a1", "J-C", 1.0).unwrap();
    g.add_edge_descriptor("a2", "C-E", 1.0).unwrap();
    assert!(g.has_edge("J-C"));
    assert!(g.has_edge("C-E"));
    assert!(!g.has_edge("C-J"));
    assert!(!g.has_edge("J-E"));
    assert!(!g.has_edge("J"));
    assert!(g.has_edge_named("a2"));
    assert_eq!(g.edge("a1").map(|e| e.descriptor()), Some("J-C".to_owned()));
}
