// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Validated in-memory graph store.
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{EdgeRejection, GraphError, VertexRejection};
use crate::record::{split_descriptor, Edge, Vertex};

/// Vertex set plus named edge collection.
///
/// Both collections keep insertion order; the traversals and spanning-tree
/// builders rely on it for deterministic tie-breaking. There is no removal:
/// the store only grows through validated insertions.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Vertices in insertion order.
    pub(crate) vertices: Vec<Vertex>,
    /// Reverse index of vertex name -> position in `vertices`.
    pub(crate) vertex_index: FxHashMap<String, usize>,
    /// Edges in insertion order.
    pub(crate) edges: Vec<Edge>,
    /// Reverse index of edge name -> position in `edges`.
    pub(crate) edge_index: FxHashMap<String, usize>,
    /// Vertex positions of each edge's endpoints, parallel to `edges`.
    pub(crate) edge_ends: Vec<(usize, usize)>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from an initial vertex list and edge list.
    ///
    /// Every element is validated in order; the first invalid vertex or edge
    /// fails the whole construction.
    pub fn from_parts<V, E>(vertices: V, edges: E) -> Result<Self, GraphError>
    where
        V: IntoIterator,
        V::Item: Into<String>,
        E: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::new();
        for v in vertices {
            graph.add_vertex(v)?;
        }
        for e in edges {
            graph.insert_edge(e)?;
        }
        Ok(graph)
    }

    /// Builds an edgeless graph from a vertex list.
    pub fn with_vertices<V>(vertices: V) -> Result<Self, GraphError>
    where
        V: IntoIterator,
        V::Item: Into<String>,
    {
        Self::from_parts(vertices, Vec::<Edge>::new())
    }

    /// Inserts a new vertex.
    ///
    /// Fails with [`GraphError::InvalidVertex`] if `name` is empty, contains
    /// the separator, or is already present.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> Result<(), GraphError> {
        let vertex = Vertex::new(name)?;
        if self.vertex_index.contains_key(vertex.as_str()) {
            debug!(vertex = %vertex, "rejecting duplicate vertex");
            return Err(GraphError::vertex(vertex, VertexRejection::Duplicate));
        }
        self.vertex_index
            .insert(vertex.as_str().to_owned(), self.vertices.len());
        self.vertices.push(vertex);
        Ok(())
    }

    /// Inserts a named edge between two existing vertices.
    ///
    /// Loops and parallel edges are accepted. Fails with
    /// [`GraphError::InvalidEdge`] if an endpoint is unknown, the name is taken,
    /// or the weight is not finite.
    pub fn add_edge(
        &mut self,
        name: impl Into<String>,
        endpoint_a: &str,
        endpoint_b: &str,
        weight: f64,
    ) -> Result<(), GraphError> {
        let name = name.into();
        let a = self.resolve_endpoint(&name, endpoint_a)?;
        let b = self.resolve_endpoint(&name, endpoint_b)?;
        self.insert_edge(Edge::new(name, a, b, weight))
    }

    /// Inserts an edge from its `"A-B"` descriptor.
    pub fn add_edge_descriptor(
        &mut self,
        name: impl Into<String>,
        descriptor: &str,
        weight: f64,
    ) -> Result<(), GraphError> {
        let name = name.into();
        let Some((a, b)) = split_descriptor(descriptor) else {
            return Err(GraphError::edge(
                name,
                EdgeRejection::MalformedDescriptor(descriptor.to_owned()),
            ));
        };
        self.add_edge(name, a, b, weight)
    }

    /// Inserts a prebuilt edge record after validating it against the store.
    pub fn insert_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        if self.edge_index.contains_key(&edge.name) {
            debug!(edge = %edge.name, "rejecting duplicate edge name");
            return Err(GraphError::edge(edge.name, EdgeRejection::DuplicateName));
        }
        let a = self.endpoint_position(&edge.name, &edge.endpoint_a)?;
        let b = self.endpoint_position(&edge.name, &edge.endpoint_b)?;
        if !edge.weight.is_finite() {
            return Err(GraphError::edge(edge.name, EdgeRejection::NonFiniteWeight));
        }
        self.edge_index.insert(edge.name.clone(), self.edges.len());
        self.edge_ends.push((a, b));
        self.edges.push(edge);
        Ok(())
    }

    fn endpoint_position(&self, edge_name: &str, endpoint: &Vertex) -> Result<usize, GraphError> {
        self.vertex_position(endpoint.as_str()).ok_or_else(|| {
            GraphError::edge(
                edge_name,
                EdgeRejection::UnknownEndpoint(endpoint.to_string()),
            )
        })
    }

    fn resolve_endpoint(&self, edge_name: &str, endpoint: &str) -> Result<Vertex, GraphError> {
        self.vertex(endpoint).cloned().ok_or_else(|| {
            GraphError::edge(
                edge_name,
                EdgeRejection::UnknownEndpoint(endpoint.to_owned()),
            )
        })
    }

    /// Returns `true` if `name` is a vertex of the graph.
    pub fn has_vertex(&self, name: &str) -> bool {
        self.vertex_index.contains_key(name)
    }

    /// Looks up a vertex by name.
    pub fn vertex(&self, name: &str) -> Option<&Vertex> {
        self.vertex_index.get(name).map(|&i| &self.vertices[i])
    }

    /// Returns `true` if some edge has exactly the ordered endpoint pair
    /// encoded by `descriptor` (`"A-B"`).
    ///
    /// Malformed descriptors and descriptors naming unknown vertices yield
    /// `false`.
    pub fn has_edge(&self, descriptor: &str) -> bool {
        let Some((a, b)) = split_descriptor(descriptor) else {
            return false;
        };
        if !self.has_vertex(a) || !self.has_vertex(b) {
            return false;
        }
        self.edges
            .iter()
            .any(|e| e.endpoint_a.as_str() == a && e.endpoint_b.as_str() == b)
    }

    /// Returns `true` if an edge named `name` exists.
    pub fn has_edge_named(&self, name: &str) -> bool {
        self.edge_index.contains_key(name)
    }

    /// Returns `true` if some edge joins `x` and `y` in either direction.
    pub fn has_edge_between(&self, x: &str, y: &str) -> bool {
        self.edges.iter().any(|e| e.joins(x, y))
    }

    /// Looks up an edge by name.
    pub fn edge(&self, name: &str) -> Option<&Edge> {
        self.edge_index.get(name).map(|&i| &self.edges[i])
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Position of `name` in insertion order.
    pub(crate) fn vertex_position(&self, name: &str) -> Option<usize> {
        self.vertex_index.get(name).copied()
    }
}
