// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, VertexRejection};

/// Character joining the two endpoints in an edge descriptor (`"A-B"`).
pub const EDGE_SEPARATOR: char = '-';

/// Weight given to edges that do not carry one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Validated vertex identifier.
///
/// Non-empty and free of [`EDGE_SEPARATOR`]. Deserialization runs the same
/// validation as [`Vertex::new`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Vertex(String);

impl Vertex {
    /// Validates `name` and wraps it.
    pub fn new(name: impl Into<String>) -> Result<Self, GraphError> {
        let name = name.into();
        if name.is_empty() {
            return Err(GraphError::vertex(name, VertexRejection::Empty));
        }
        if name.contains(EDGE_SEPARATOR) {
            return Err(GraphError::vertex(name, VertexRejection::ContainsSeparator));
        }
        Ok(Self(name))
    }

    /// Borrow the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Vertex {
    type Error = GraphError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Vertex> for String {
    fn from(v: Vertex) -> Self {
        v.0
    }
}

impl AsRef<str> for Vertex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Vertex {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

/// Named, weighted connection between two vertices.
///
/// The endpoint order is kept: loop and parallel-edge detection are
/// direction-sensitive, while reachability and spanning trees treat the
/// edge as undirected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique edge name within a graph.
    pub name: String,
    /// First endpoint.
    pub endpoint_a: Vertex,
    /// Second endpoint.
    pub endpoint_b: Vertex,
    /// Edge weight; [`DEFAULT_WEIGHT`] when omitted.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl Edge {
    /// Builds an edge record. Nothing is validated until the edge is inserted.
    pub fn new(
        name: impl Into<String>,
        endpoint_a: Vertex,
        endpoint_b: Vertex,
        weight: f64,
    ) -> Self {
        Self {
            name: name.into(),
            endpoint_a,
            endpoint_b,
            weight,
        }
    }

    /// Builds an edge with [`DEFAULT_WEIGHT`].
    pub fn unweighted(name: impl Into<String>, endpoint_a: Vertex, endpoint_b: Vertex) -> Self {
        Self::new(name, endpoint_a, endpoint_b, DEFAULT_WEIGHT)
    }

    /// Returns `true` if both endpoints are the same vertex.
    pub fn is_loop(&self) -> bool {
        self.endpoint_a == self.endpoint_b
    }

    /// Returns `true` if `v` is either endpoint.
    pub fn touches(&self, v: &str) -> bool {
        self.endpoint_a.as_str() == v || self.endpoint_b.as_str() == v
    }

    /// Returns `true` if the edge joins `x` and `y` in either direction.
    pub fn joins(&self, x: &str, y: &str) -> bool {
        (self.endpoint_a.as_str() == x && self.endpoint_b.as_str() == y)
            || (self.endpoint_a.as_str() == y && self.endpoint_b.as_str() == x)
    }

    /// The endpoint opposite `v`, or `None` if `v` is not an endpoint.
    pub fn opposite(&self, v: &str) -> Option<&Vertex> {
        if self.endpoint_a.as_str() == v {
            Some(&self.endpoint_b)
        } else if self.endpoint_b.as_str() == v {
            Some(&self.endpoint_a)
        } else {
            None
        }
    }

    /// `"A-B"` descriptor for the endpoint pair.
    pub fn descriptor(&self) -> String {
        format!("{}{EDGE_SEPARATOR}{}", self.endpoint_a, self.endpoint_b)
    }
}

/// Splits an `"A-B"` descriptor into its two sides.
///
/// Requires exactly one separator that is neither the first nor the last
/// character. Vertex existence is checked by the caller.
pub fn split_descriptor(descriptor: &str) -> Option<(&str, &str)> {
    if descriptor.matches(EDGE_SEPARATOR).count() != 1 {
        return None;
    }
    let (a, b) = descriptor.split_once(EDGE_SEPARATOR)?;
    if a.is_empty() || b.is_empty() {
        return None;
    }
    Some((a, b))
}
