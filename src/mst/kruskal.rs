use tracing::debug;

use super::*;
use crate::union_find::UnionFind;

/// Kruskal's algorithm.
///
/// Stops as soon as `n - 1` edges were accepted or the edges are exhausted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Kruskal;

impl MstBuilder for Kruskal {
    fn build(&self, graph: &WeightGraph) -> SpanningTree {
        let target = graph.len().saturating_sub(1);
        let mut tree = SpanningTree::with_capacity(target);

        let mut queue: EdgeQueue = graph.edges().collect();
        let mut forest = UnionFind::new(graph.number_of_nodes());

        while tree.len() < target {
            let Some(edge) = queue.pop() else {
                break;
            };

            let (u, v) = edge.endpoints();
            if forest.union(u, v) {
                tree.push(edge);
            }
        }

        debug!(
            nodes = graph.number_of_nodes(),
            edges = tree.len(),
            weight = tree.weight(),
            "kruskal spanning tree"
        );
        tree
    }
}
