use super::*;

/// Strategy used by a [`PathFinder`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Search {
    /// Tremaux order; paths exist iff reported but need not be shortest
    #[default]
    DepthFirst,
    /// Paths are shortest in number of edges
    BreadthFirst,
}

/// Single-source reachability together with one path per reachable node.
///
/// The finder owns its arrays and does not borrow the graph after construction.
#[derive(Debug, Clone)]
pub struct PathFinder {
    source: Node,
    search: Search,
    marked: NodeBitSet,
    edge_to: Vec<Node>,
}

impl PathFinder {
    /// Searches `graph` from `source` using the given strategy.
    /// Fails if `source` is not a node of `graph`.
    pub fn new<G>(graph: &G, source: Node, search: Search) -> Result<Self, GraphError>
    where
        G: AdjacencyList,
    {
        if source >= graph.number_of_nodes() {
            return Err(GraphError::SourceOutOfRange {
                vertex: source,
                number_of_nodes: graph.number_of_nodes(),
            });
        }
        Ok(Self::new_unchecked(graph, source, search))
    }

    /// Same as `PathFinder::new(graph, source, Search::DepthFirst)`
    pub fn depth_first<G>(graph: &G, source: Node) -> Result<Self, GraphError>
    where
        G: AdjacencyList,
    {
        Self::new(graph, source, Search::DepthFirst)
    }

    /// Same as `PathFinder::new(graph, source, Search::BreadthFirst)`
    pub fn breadth_first<G>(graph: &G, source: Node) -> Result<Self, GraphError>
    where
        G: AdjacencyList,
    {
        Self::new(graph, source, Search::BreadthFirst)
    }

    /// ** Panics if `source >= n` **
    pub(crate) fn new_unchecked<G>(graph: &G, source: Node, search: Search) -> Self
    where
        G: AdjacencyList,
    {
        let mut edge_to = vec![INVALID_NODE; graph.len()];

        let marked = match search {
            Search::DepthFirst => {
                let mut walk = graph.depth_first_walk();
                walk.explore(source, |event| {
                    if let DfsEvent::TreeEdge(u, v) = event {
                        edge_to[v as usize] = u;
                    }
                });
                walk.into_marked()
            }
            Search::BreadthFirst => {
                let mut bfs = graph.bfs(source);
                for (u, v) in bfs.by_ref().skip(1) {
                    edge_to[v as usize] = u;
                }
                bfs.into_visited()
            }
        };

        Self {
            source,
            search,
            marked,
            edge_to,
        }
    }

    /// The node all paths start at
    pub fn source(&self) -> Node {
        self.source
    }

    /// The strategy the paths were computed with
    pub fn search(&self) -> Search {
        self.search
    }

    /// Returns *true* if there is a path from the source to `target`.
    /// ** Panics if `target >= n` **
    pub fn has_path_to(&self, target: Node) -> bool {
        self.marked[target as usize]
    }

    /// Returns the nodes of a path from the source to `target`, both included.
    /// The path is `[source]` if `target` is the source and empty if `target` is unreachable.
    /// ** Panics if `target >= n` **
    pub fn path_to(&self, target: Node) -> Vec<Node> {
        if !self.has_path_to(target) {
            return Vec::new();
        }

        let mut path = vec![target];
        let mut node = target;
        while node != self.source {
            node = self.edge_to[node as usize];
            path.push(node);
        }
        path.reverse();
        path
    }

    /// Number of edges on [`PathFinder::path_to`], or `None` if `target` is unreachable
    /// ** Panics if `target >= n` **
    pub fn distance_to(&self, target: Node) -> Option<NumNodes> {
        if !self.has_path_to(target) {
            return None;
        }

        let mut distance = 0;
        let mut node = target;
        while node != self.source {
            node = self.edge_to[node as usize];
            distance += 1;
        }
        Some(distance)
    }

    /// Iterator over all nodes reachable from the source, in increasing order
    pub fn reachable(&self) -> impl Iterator<Item = Node> + '_ {
        self.marked.iter_ones().map(|u| u as Node)
    }
}
