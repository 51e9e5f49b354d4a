//! Errors raised by the algorithms of this crate.
//!
//! Input/Output uses [`std::io::Error`] instead, see [`crate::io`].

use thiserror::Error;

use crate::node::*;

/// Failures surfaced synchronously by graph algorithms and adapters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A search was requested from a node that is not part of the graph
    #[error("source node {vertex} is out of range for a graph with {number_of_nodes} nodes")]
    SourceOutOfRange {
        vertex: Node,
        number_of_nodes: NumNodes,
    },

    /// A directed acyclic graph was requested, but the digraph contains the given cycle
    #[error("digraph has at least one cycle: {cycle:?}")]
    HasCycle { cycle: Vec<Node> },

    /// A labeled graph received more distinct labels than it has nodes
    #[error("cannot assign more than {capacity} labels to nodes")]
    CapacityExceeded { capacity: NumNodes },
}
