use tracing::debug;

use super::*;

/// Lazy version of Prim's algorithm.
///
/// The tree is grown from `seed`. Edges whose endpoints are both in the tree by the time
/// they are popped are discarded instead of being removed from the queue eagerly.
///
/// ** `build` panics if the graph has nodes and `seed >= n`; `try_build` returns an error instead **
#[derive(Debug, Clone, Copy, Default)]
pub struct LazyPrim {
    seed: Node,
}

impl LazyPrim {
    /// Grows the tree from node `0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the node the tree is grown from
    pub fn set_seed(&mut self, seed: Node) {
        self.seed = seed;
    }

    /// Sets the node the tree is grown from
    pub fn seed(mut self, seed: Node) -> Self {
        self.set_seed(seed);
        self
    }

    /// Same as [`MstBuilder::build`], but reports an out-of-range seed as
    /// [`GraphError::SourceOutOfRange`] instead of panicking
    pub fn try_build(&self, graph: &WeightGraph) -> Result<SpanningTree, GraphError> {
        if graph.is_empty() {
            return Ok(SpanningTree::default());
        }
        if self.seed >= graph.number_of_nodes() {
            return Err(GraphError::SourceOutOfRange {
                vertex: self.seed,
                number_of_nodes: graph.number_of_nodes(),
            });
        }
        Ok(self.grow(graph))
    }

    /// ** Panics if `seed >= n` **
    fn grow(&self, graph: &WeightGraph) -> SpanningTree {
        let mut tree = SpanningTree::with_capacity(graph.len() - 1);
        let mut marked = graph.vertex_bitset_unset();
        let mut queue = EdgeQueue::default();

        let visit = |v: Node, marked: &mut NodeBitSet, queue: &mut EdgeQueue| {
            marked.set(v as usize, true);
            for edge in graph.edges_of(v) {
                if !marked[edge.other(v) as usize] {
                    queue.push(*edge);
                }
            }
        };

        visit(self.seed, &mut marked, &mut queue);
        while let Some(edge) = queue.pop() {
            let u = edge.either();
            let v = edge.other(u);
            match (marked[u as usize], marked[v as usize]) {
                (true, true) => continue,
                (false, _) => {
                    tree.push(edge);
                    visit(u, &mut marked, &mut queue);
                }
                (true, false) => {
                    tree.push(edge);
                    visit(v, &mut marked, &mut queue);
                }
            }
        }

        debug!(
            nodes = graph.number_of_nodes(),
            seed = self.seed,
            edges = tree.len(),
            weight = tree.weight(),
            "lazy prim spanning tree"
        );
        tree
    }
}

impl MstBuilder for LazyPrim {
    fn build(&self, graph: &WeightGraph) -> SpanningTree {
        match self.try_build(graph) {
            Ok(tree) => tree,
            Err(err) => panic!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;

    #[test]
    fn tiny_ewg_tree() {
        let tree = tiny_ewg().lazy_prim_mst();

        assert_eq!(tree.len(), 7);
        assert!((tree.weight() - 1.81).abs() < 1e-9);
        assert_eq!(
            tree.edges().iter().map(|e| e.endpoints()).collect_vec(),
            vec![(0, 7), (1, 7), (0, 2), (2, 3), (5, 7), (4, 5), (6, 2)]
        );
    }

    #[test]
    fn every_seed_gives_the_same_weight() {
        let graph = tiny_ewg();
        let mut prim = LazyPrim::new();

        for seed in graph.vertices() {
            prim.set_seed(seed);
            let tree = prim.build(&graph);
            assert_eq!(tree.len(), 7);
            assert!((tree.weight() - 1.81).abs() < 1e-9);
        }
    }

    #[test]
    fn only_the_seed_component() {
        let graph = WeightGraph::from_edges(5, [(0, 1, 0.5), (1, 2, 0.25), (3, 4, 1.5)]);

        let tree = LazyPrim::new().seed(4).build(&graph);
        assert_eq!(tree.edges().iter().map(|e| e.endpoints()).collect_vec(), vec![(3, 4)]);

        let tree = LazyPrim::new().build(&graph);
        assert_eq!(tree.len(), 2);
        assert!((tree.weight() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn trivial_graphs() {
        assert!(WeightGraph::new(0).lazy_prim_mst().is_empty());
        assert!(LazyPrim::new().seed(5).build(&WeightGraph::new(0)).is_empty());
        assert!(WeightGraph::from_edges(1, [(0, 0, 1.0)]).lazy_prim_mst().is_empty());
    }

    #[test]
    fn try_build_reports_bad_seed() {
        let graph = tiny_ewg();

        assert_eq!(
            LazyPrim::new().seed(8).try_build(&graph),
            Err(GraphError::SourceOutOfRange {
                vertex: 8,
                number_of_nodes: 8
            })
        );
        assert_eq!(
            LazyPrim::new().seed(8).try_build(&WeightGraph::new(0)),
            Ok(SpanningTree::default())
        );
        assert_eq!(LazyPrim::new().seed(3).try_build(&graph), Ok(LazyPrim::new().seed(3).build(&graph)));
    }

    #[test]
    #[should_panic]
    fn seed_out_of_range() {
        LazyPrim::new().seed(8).build(&tiny_ewg());
    }
}
