use super::*;

/// All-pairs reachability of a directed graph, answered by one depth-first
/// [`PathFinder`] per node.
#[derive(Debug, Clone)]
pub struct TransitiveClosure {
    paths: Vec<PathFinder>,
}

impl TransitiveClosure {
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacencyList + GraphType<Dir = Directed>,
    {
        let paths = graph
            .vertices()
            .map(|u| PathFinder::new_unchecked(graph, u, Search::DepthFirst))
            .collect();
        Self { paths }
    }

    /// Returns *true* if there is a directed path from `u` to `v`.
    /// Every node reaches itself.
    /// ** Panics if `u >= n || v >= n` **
    pub fn reachable(&self, u: Node, v: Node) -> bool {
        self.paths[u as usize].has_path_to(v)
    }

    /// Depth-first paths out of `u`
    /// ** Panics if `u >= n` **
    pub fn paths_from(&self, u: Node) -> &PathFinder {
        &self.paths[u as usize]
    }
}
