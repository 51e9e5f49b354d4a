/*!
# Graph Representations

- [`Graph`]: undirected graph; every edge is stored at both endpoints
- [`Digraph`]: directed graph storing out-neighbors only
- [`WeightGraph`]: undirected graph whose edges carry an `f64` weight

`Graph` and `Digraph` are backed by an [`AdjStorage`] that is either a list per node
(`new`, keeps insertion order and parallel edges) or a bit matrix (`new_matrix`).
Algorithms only talk to the traits in [`crate::ops`] and never see the backing.
*/

use std::fmt::Display;

use crate::{ops::*, *};

mod directed;
mod storage;
mod undirected;
mod weighted;

pub use directed::*;
pub use storage::*;
pub use undirected::*;
pub use weighted::*;

pub(crate) mod macros {
    macro_rules! impl_common_graph_ops {
        ($struct:ident => $adj:ident, $directed:ident) => {
            impl GraphType for $struct {
                type Dir = $directed;
            }

            impl GraphNodeOrder for $struct {
                fn number_of_nodes(&self) -> NumNodes {
                    self.$adj.number_of_nodes()
                }
            }

            impl GraphEdgeOrder for $struct {
                fn number_of_edges(&self) -> NumEdges {
                    self.num_edges
                }
            }

            impl AdjacencyList for $struct {
                fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
                    self.$adj.neighbors(u)
                }

                fn degree_of(&self, u: Node) -> NumNodes {
                    self.$adj.degree(u)
                }
            }

            impl GraphNew for $struct {
                fn new(n: NumNodes) -> Self {
                    Self {
                        $adj: AdjStorage::list(n),
                        num_edges: 0,
                    }
                }
            }

            impl $struct {
                /// Creates an empty graph with n singleton nodes backed by an adjacency matrix
                pub fn new_matrix(n: NumNodes) -> Self {
                    Self {
                        $adj: AdjStorage::matrix(n),
                        num_edges: 0,
                    }
                }

                /// Read access to the backing storage
                pub fn storage(&self) -> &AdjStorage {
                    &self.$adj
                }

                fn assert_in_range(&self, u: Node, v: Node) {
                    let n = self.number_of_nodes();
                    assert!(
                        u < n && v < n,
                        "edge ({u},{v}) is out of range for a graph with {n} nodes"
                    );
                }
            }
        };
    }

    pub(super) use impl_common_graph_ops;
}

/// Writes the `"{n} vertices, {m} edges"` header line shared by all graph printouts
fn write_header<G: GraphNodeOrder + GraphEdgeOrder>(
    graph: &G,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(
        f,
        "{} vertices, {} edges",
        graph.number_of_nodes(),
        graph.number_of_edges()
    )
}
