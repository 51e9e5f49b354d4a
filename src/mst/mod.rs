/*!
# Minimum Spanning Trees

Two builders share the [`MstBuilder`] interface and return a [`SpanningTree`]:

- [`Kruskal`] scans all edges by increasing weight and keeps every edge that joins two
  different trees of a [`UnionFind`](crate::union_find::UnionFind). On a disconnected
  graph the result is a minimum spanning forest.
- [`LazyPrim`] grows a single tree from a seed node, keeping stale edges in its queue
  until they are popped. On a disconnected graph only the seed's component is spanned.

Both pop edges from a min-heap ordered by [`WeightedEdge::total_cmp`], and equal edges
by the order they were pushed, so the results are deterministic.

```
use idxgraph::{prelude::*, mst::*};

let g = WeightGraph::from_edges(3, [(0, 1, 0.5), (1, 2, 0.25), (0, 2, 1.0)]);

let tree = g.kruskal_mst();
assert_eq!(tree.len(), 2);
assert_eq!(tree.weight(), 0.75);
assert_eq!(LazyPrim::new().seed(2).build(&g).weight(), 0.75);
```
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::prelude::*;

mod kruskal;
mod prim;

pub use kruskal::*;
pub use prim::*;

/// The accepted edges of a minimum spanning tree (or forest) in acceptance order,
/// together with their total weight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpanningTree {
    edges: Vec<WeightedEdge>,
    weight: f64,
}

impl SpanningTree {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
            weight: 0.0,
        }
    }

    pub(crate) fn push(&mut self, edge: WeightedEdge) {
        self.weight += edge.weight();
        self.edges.push(edge);
    }

    /// Accepted edges in the order the builder accepted them
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Sum of all accepted weights
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Number of accepted edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn into_edges(self) -> Vec<WeightedEdge> {
        self.edges
    }
}

/// Algorithms computing a minimum spanning tree of a weighted graph
pub trait MstBuilder {
    /// Computes the tree; the graph is not modified
    fn build(&self, graph: &WeightGraph) -> SpanningTree;
}

/// Minimum spanning trees as methods on weighted graphs, using default builders
pub trait MinimumSpanningTree {
    /// See [`Kruskal`]
    fn kruskal_mst(&self) -> SpanningTree;

    /// See [`LazyPrim`]; grows the tree from node `0`
    fn lazy_prim_mst(&self) -> SpanningTree;
}

impl MinimumSpanningTree for WeightGraph {
    fn kruskal_mst(&self) -> SpanningTree {
        Kruskal.build(self)
    }

    fn lazy_prim_mst(&self) -> SpanningTree {
        LazyPrim::new().build(self)
    }
}

/// An edge inside an [`EdgeQueue`]; `seq` is the push counter used as last tie-breaker
#[derive(Debug, Clone, Copy)]
struct QueuedEdge {
    edge: WeightedEdge,
    seq: usize,
}

impl PartialEq for QueuedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for QueuedEdge {}

impl PartialOrd for QueuedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueuedEdge {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.edge
            .total_cmp(&other.edge)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-priority queue of weighted edges
#[derive(Debug, Default)]
struct EdgeQueue {
    heap: BinaryHeap<Reverse<QueuedEdge>>,
    pushed: usize,
}

impl EdgeQueue {
    fn push(&mut self, edge: WeightedEdge) {
        self.heap.push(Reverse(QueuedEdge {
            edge,
            seq: self.pushed,
        }));
        self.pushed += 1;
    }

    /// Removes and returns the lightest edge
    fn pop(&mut self) -> Option<WeightedEdge> {
        self.heap.pop().map(|Reverse(queued)| queued.edge)
    }
}

impl FromIterator<WeightedEdge> for EdgeQueue {
    fn from_iter<I: IntoIterator<Item = WeightedEdge>>(iter: I) -> Self {
        let mut queue = Self::default();
        for edge in iter {
            queue.push(edge);
        }
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algo::*, testing::*};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn queue_pops_lightest_first() {
        let mut queue: EdgeQueue = [
            WeightedEdge::new(0, 1, 0.5),
            WeightedEdge::new(3, 2, 0.1),
            WeightedEdge::new(2, 1, 0.5),
            WeightedEdge::new(1, 2, 0.5),
        ]
        .into_iter()
        .collect();

        assert_eq!(queue.pop().map(|e| e.endpoints()), Some((3, 2)));
        assert_eq!(queue.pop().map(|e| e.endpoints()), Some((0, 1)));
        // same weight and endpoint pair: push order decides
        assert_eq!(queue.pop().map(|e| e.endpoints()), Some((2, 1)));
        assert_eq!(queue.pop().map(|e| e.endpoints()), Some((1, 2)));
        assert!(queue.pop().is_none());
    }

    #[test]
    fn spanning_tree_accumulates() {
        let mut tree = SpanningTree::with_capacity(2);
        assert!(tree.is_empty());

        tree.push(WeightedEdge::new(0, 1, 0.25));
        tree.push(WeightedEdge::new(1, 2, 0.5));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.weight(), 0.75);
        assert_eq!(tree.into_edges()[1].endpoints(), (1, 2));
    }

    #[test]
    fn builders_agree_on_random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(23);

        for n in [2, 10, 50] {
            for extra in [0, n, 4 * n] {
                for _ in 0..5 {
                    let graph = random_connected_weight_graph(rng, n, extra);

                    let kruskal = graph.kruskal_mst();
                    let prim = graph.lazy_prim_mst();

                    assert_eq!(kruskal.len(), n as usize - 1);
                    assert_eq!(prim.len(), n as usize - 1);
                    assert!((kruskal.weight() - prim.weight()).abs() < 1e-9);

                    // the accepted edges span the graph
                    let forest = Graph::from_edges(
                        n,
                        kruskal.edges().iter().map(|e| e.unweighted()),
                    );
                    assert!(forest.is_connected());
                    assert!(!forest.has_undirected_cycle());
                }
            }
        }
    }
}
