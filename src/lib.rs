/*!
`idxgraph` is a small graph algorithms library for graphs whose vertices are **dense indices**:
nodes are numbered `0` to `n - 1` and never removed.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)` and, for weighted graphs,
[`WeightedEdge`] carrying an `f64` weight.

See the [`repr`] module for the graph types:

- [`Graph`](crate::repr::Graph): undirected, parallel edges and self-loops allowed
- [`Digraph`](crate::repr::Digraph): directed
- [`WeightGraph`](crate::repr::WeightGraph): undirected with weighted edges

`Graph` and `Digraph` are backed by adjacency lists by default, or by an adjacency matrix
when created with `new_matrix`. The backing never changes the answer of an algorithm
(apart from the matrix collapsing parallel edges).

# Design

Algorithms are either configurable structs (e.g. [`PathFinder`](crate::algo::PathFinder),
[`LazyPrim`](crate::mst::LazyPrim)) or traits implemented on the graphs themselves
(`graph.bfs(s)`, `digraph.strongly_connected_components()`, `weight_graph.kruskal_mst()`).
Results are immutable snapshots; no algorithm modifies its input graph.

Every depth-first search in this crate uses an explicit stack, so deep graphs do not overflow
the call stack.

# Usage

- [`prelude`] includes nodes, edges, basic graph operations, all graph types and [`GraphError`](crate::error::GraphError),
- [`algo`] includes traversals, path finders, cycle detection, orderings, components and transitive closure,
- [`mst`] includes Kruskal's and (lazy) Prim's minimum spanning tree algorithms,
- [`union_find`] includes the disjoint-set structure used by Kruskal,
- [`io`] includes reading and writing graphs as edge lists,
- [`labeled`] includes wrappers whose vertices are addressed by arbitrary hashable keys.

In most use-cases, `use idxgraph::{prelude::*, algo::*};` suffices for your needs.

```
use idxgraph::{prelude::*, algo::*};

let g = Digraph::from_edges(4, [(0, 1), (1, 3), (0, 2), (3, 2)]);
assert_eq!(topological_sort(&g), Ok(vec![0, 1, 3, 2]));
assert_eq!(PathFinder::breadth_first(&g, 0).unwrap().path_to(2), vec![0, 2]);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod labeled;
pub mod mst;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod union_find;

pub use edge::*;
pub use node::*;

/// `idxgraph::prelude` includes definitions for nodes and edges, all basic graph operation traits,
/// all graph types as well as the error type.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
