use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Marker for the direction of a graph
pub trait GraphDir {
    /// *true* if every edge is stored only at its source
    const IS_DIRECTED: bool;
}

/// Edges point from their first to their second endpoint
#[derive(Debug, Clone, Copy, Default)]
pub struct Directed;

/// Edges are stored at both endpoints
#[derive(Debug, Clone, Copy, Default)]
pub struct Undirected;

impl GraphDir for Directed {
    const IS_DIRECTED: bool = true;
}

impl GraphDir for Undirected {
    const IS_DIRECTED: bool = false;
}

/// Associates a graph representation with its direction.
/// Algorithms that only make sense for one kind of graph bound on `GraphType<Dir = ..>`.
pub trait GraphType {
    type Dir: GraphDir;

    /// Returns *true* if the graph is directed
    fn is_directed(&self) -> bool {
        Self::Dir::IS_DIRECTED
    }

    /// Returns *true* if the graph is undirected
    fn is_undirected(&self) -> bool {
        !Self::Dir::IS_DIRECTED
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    /// The range does not borrow self and may be used alongside mutable borrows.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        node_bitset(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// Undirected edges are counted once, self-loops included.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// Parallel edges show up multiple times, an undirected self-loop shows up twice.
    /// ** Panics if `u >= n` **
    ///
    /// Note that for directed graphs, these are the out-neighbors.
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns the minimum degree in the graph
    fn min_degree(&self) -> NumNodes {
        self.degrees().min().unwrap_or(0)
    }

    /// Returns the sum of all degrees divided by the number of nodes, or `0.0` for the empty graph
    fn average_degree(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.degrees().map(|d| d as f64).sum::<f64>() / self.len() as f64
    }

    /// Returns a distribution sorted by degree
    fn degree_distribution(&self) -> Vec<(NumNodes, NumNodes)> {
        self.degrees()
            .counts()
            .into_iter()
            .map(|(d, n)| (d, n as NumNodes))
            .sorted_by_key(|(d, _)| *d)
            .collect_vec()
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u).map(move |v| Edge(u, v))
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges.
/// Parallel edges and self-loops are accepted and kept.
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge *(u,v)* to the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node);

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over Edges
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}

/// Directed graphs that can produce their transpose
pub trait GraphReverse: GraphType<Dir = Directed> + Sized {
    /// Returns a new graph with every edge `u -> v` replaced by `v -> u`.
    /// The original graph is left untouched.
    fn reverse(&self) -> Self;
}
