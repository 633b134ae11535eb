// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error types returned by the graph store and the spanning-tree builders.
use thiserror::Error;

/// Why a vertex identifier was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VertexRejection {
    /// The identifier is the empty string.
    #[error("identifier is empty")]
    Empty,
    /// The identifier contains the edge separator character.
    #[error("identifier contains the edge separator")]
    ContainsSeparator,
    /// A vertex with the same identifier is already present.
    #[error("vertex already exists")]
    Duplicate,
}

/// Why an edge was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EdgeRejection {
    /// The `a-b` descriptor does not have exactly one inner separator.
    #[error("malformed endpoint descriptor {0:?}")]
    MalformedDescriptor(String),
    /// An edge with the same name is already present.
    #[error("edge name already used")]
    DuplicateName,
    /// One of the endpoints is not a vertex of the graph.
    #[error("unknown endpoint {0:?}")]
    UnknownEndpoint(String),
    /// The weight is NaN or infinite.
    #[error("weight is not finite")]
    NonFiniteWeight,
}

/// Errors produced by [`crate::Graph`] mutation and by the MST builders.
///
/// Failed insertions leave the graph exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex could not be created or inserted.
    #[error("invalid vertex {name:?}: {reason}")]
    InvalidVertex {
        /// Offending identifier.
        name: String,
        /// Rejection reason.
        reason: VertexRejection,
    },
    /// An edge could not be inserted.
    #[error("invalid edge {name:?}: {reason}")]
    InvalidEdge {
        /// Offending edge name.
        name: String,
        /// Rejection reason.
        reason: EdgeRejection,
    },
    /// No spanning tree exists because the graph has more than one component.
    #[error("graph is disconnected: spanned {spanned} of {total} vertices")]
    DisconnectedGraph {
        /// Vertices reached by the tree before the builder ran out of edges.
        spanned: usize,
        /// Total vertex count of the graph.
        total: usize,
    },
}

impl GraphError {
    pub(crate) fn vertex(name: impl Into<String>, reason: VertexRejection) -> Self {
        Self::InvalidVertex {
            name: name.into(),
            reason,
        }
    }

    pub(crate) fn edge(name: impl Into<String>, reason: EdgeRejection) -> Self {
        Self::InvalidEdge {
            name: name.into(),
            reason,
        }
    }
}
