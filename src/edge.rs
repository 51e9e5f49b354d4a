use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
};

use crate::Node;

/// An edge is defined by two nodes/endpoints.
/// It is up to the user whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// An undirected edge carrying a floating point weight.
///
/// The edge remembers the order its endpoints were given in: [`WeightedEdge::either`]
/// always returns the first endpoint and [`WeightedEdge::other`] the opposite one.
#[derive(Copy, Clone, PartialEq)]
pub struct WeightedEdge {
    a: Node,
    b: Node,
    weight: f64,
}

impl WeightedEdge {
    /// Creates the edge `a - b` with the given weight
    pub const fn new(a: Node, b: Node, weight: f64) -> Self {
        Self { a, b, weight }
    }

    /// Returns one endpoint of the edge (the first one given on construction)
    pub fn either(&self) -> Node {
        self.a
    }

    /// Returns the endpoint opposite of `v`.
    /// If `v` is not an endpoint at all, the first endpoint is returned.
    pub fn other(&self, v: Node) -> Node {
        if self.a == v { self.b } else { self.a }
    }

    /// Weight of the edge
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Both endpoints in the order they were given
    pub fn endpoints(&self) -> (Node, Node) {
        (self.a, self.b)
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }

    /// Drops the weight
    pub fn unweighted(&self) -> Edge {
        Edge(self.a, self.b)
    }

    /// Returns *true* if this edge is strictly lighter than `other`
    pub fn is_lighter_than(&self, other: &WeightedEdge) -> bool {
        self.weight < other.weight
    }

    /// Total order on edges: by weight first (using [`f64::total_cmp`]) and by the
    /// normalized endpoint pair on ties, so that equal weights still order deterministically.
    pub fn total_cmp(&self, other: &WeightedEdge) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.unweighted().normalized().cmp(&other.unweighted().normalized()))
    }
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} {:.5}", self.a, self.b, self.weight)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<(Node, Node, f64)> for WeightedEdge {
    fn from(value: (Node, Node, f64)) -> Self {
        WeightedEdge::new(value.0, value.1, value.2)
    }
}

impl From<&WeightedEdge> for WeightedEdge {
    fn from(value: &WeightedEdge) -> Self {
        *value
    }
}
