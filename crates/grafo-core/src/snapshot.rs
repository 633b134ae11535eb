// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Read-only snapshot of a graph for display and interchange.
//!
//! The snapshot keeps store order. Its canonical form sorts vertices by name
//! and edges by name before CBOR encoding, so two graphs holding the same
//! elements hash identically regardless of insertion order.
use ciborium::ser::into_writer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::GraphError;
use crate::graph::Graph;
use crate::record::{Edge, Vertex};

/// BLAKE3 digest of a snapshot's canonical form.
pub type Hash32 = [u8; 32];

/// Errors from canonical encoding.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// CBOR serialization failed.
    #[error("canonical encoding failed: {0}")]
    Encode(String),
}

/// Owned copy of a graph's vertices and edges in store order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Vertices in insertion order.
    pub vertices: Vec<Vertex>,
    /// Edges in insertion order.
    #[serde(default)]
    pub edges: Vec<Edge>,
}

#[derive(Serialize)]
struct CanonicalGraph<'a> {
    vertices: Vec<&'a Vertex>,
    edges: Vec<&'a Edge>,
}

impl GraphSnapshot {
    /// Canonical CBOR bytes (vertices and edges sorted by name).
    pub fn to_canonical_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        let mut vertices: Vec<&Vertex> = self.vertices.iter().collect();
        vertices.sort();
        let mut edges: Vec<&Edge> = self.edges.iter().collect();
        edges.sort_by(|x, y| x.name.cmp(&y.name));
        let mut bytes = Vec::new();
        into_writer(&CanonicalGraph { vertices, edges }, &mut bytes)
            .map_err(|e| SnapshotError::Encode(e.to_string()))?;
        Ok(bytes)
    }

    /// BLAKE3 hash of the canonical form.
    pub fn compute_hash(&self) -> Result<Hash32, SnapshotError> {
        Ok(blake3::hash(&self.to_canonical_bytes()?).into())
    }
}

impl Graph {
    /// Copies the current vertices and edges out of the store.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            vertices: self.vertices.clone(),
            edges: self.edges.clone(),
        }
    }
}

impl TryFrom<GraphSnapshot> for Graph {
    type Error = GraphError;

    fn try_from(snapshot: GraphSnapshot) -> Result<Self, Self::Error> {
        Self::from_parts(snapshot.vertices, snapshot.edges)
    }
}
