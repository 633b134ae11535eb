// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! grafo-core: small validated in-memory graph toolkit.
//!
//! A [`Graph`] owns an ordered vertex set and a named, weighted edge
//! collection. On top of it sit structural queries (degree, loops, parallel
//! edges, completeness), reachability, cycle search and two minimum spanning
//! tree builders (Kruskal and Prim). Every query borrows the graph immutably;
//! nothing here performs I/O.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::use_self
)]

mod cycle;
mod error;
mod graph;
mod mst;
mod queries;
mod reachability;
mod record;
mod snapshot;

/// Cycle search result.
pub use cycle::Cycle;
/// Error and rejection-reason types.
pub use error::{EdgeRejection, GraphError, VertexRejection};
/// The graph store.
pub use graph::Graph;
/// Spanning-tree builders and their result type.
pub use mst::{MstAlgorithm, SpanningTree, UnknownAlgorithm};
/// Vertex and edge records.
pub use record::{split_descriptor, Edge, Vertex, DEFAULT_WEIGHT, EDGE_SEPARATOR};
/// Snapshot view and canonical hashing.
pub use snapshot::{GraphSnapshot, Hash32, SnapshotError};
