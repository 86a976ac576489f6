/*!
# Errors

Every failure in this crate is synchronous and immediate. Operations on a [`Graph`](crate::repr::Graph)
and algorithm entry points return [`Result`], carrying one of the [`GraphError`] variants below.
Offending vertex labels are stored rendered (via `Display`) so that the error type stays
independent of the label type.
*/

use std::fmt::Display;

use thiserror::Error;

/// Shorthand for results in this crate
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex `{0}` is not in the graph")]
    UnknownVertex(String),
    #[error("vertex `{0}` already exists in the graph")]
    DuplicateVertex(String),
    #[error("edge from `{0}` to `{1}` already exists")]
    DuplicateEdge(String, String),
    #[error("no edge exists from `{0}` to `{1}`")]
    NoSuchEdge(String, String),
    #[error("self-loop at `{0}` is not supported")]
    SelfLoop(String),
    #[error("graph is not weighted")]
    NotWeighted,
    #[error("graph is not undirected")]
    NotUndirected,
    #[error("graph is not connected")]
    NotConnected,
    #[error("graph has no vertices")]
    EmptyGraph,
    #[error("line {line}: {reason}")]
    Format { line: usize, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub(crate) fn unknown_vertex<Q: Display + ?Sized>(label: &Q) -> Self {
        Self::UnknownVertex(label.to_string())
    }

    pub(crate) fn duplicate_edge<A: Display + ?Sized, B: Display + ?Sized>(u: &A, v: &B) -> Self {
        Self::DuplicateEdge(u.to_string(), v.to_string())
    }

    pub(crate) fn no_such_edge<A: Display + ?Sized, B: Display + ?Sized>(u: &A, v: &B) -> Self {
        Self::NoSuchEdge(u.to_string(), v.to_string())
    }
}
