use super::*;

/// An undirected graph whose edges carry an `f64` weight.
///
/// Every edge is stored in the incidence list of both endpoints but counted once.
#[derive(Clone, Debug)]
pub struct WeightGraph {
    adj: Vec<Vec<WeightedEdge>>,
    num_edges: NumEdges,
}

impl GraphType for WeightGraph {
    type Dir = Undirected;
}

impl GraphNodeOrder for WeightGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.adj.len() as NumNodes
    }
}

impl GraphEdgeOrder for WeightGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for WeightGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.adj[u as usize].iter().map(move |e| e.other(u))
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.adj[u as usize].len() as NumNodes
    }
}

impl GraphNew for WeightGraph {
    fn new(n: NumNodes) -> Self {
        Self {
            adj: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }
}

impl WeightGraph {
    /// Create a graph from a number of nodes and a collection of weighted edges
    pub fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }

    /// Adds the edge to the incidence lists of both endpoints.
    /// ** Panics if an endpoint is `>= n` **
    pub fn add_edge(&mut self, edge: impl Into<WeightedEdge>) {
        let edge = edge.into();
        let (a, b) = edge.endpoints();
        let n = self.number_of_nodes();
        assert!(
            a < n && b < n,
            "edge ({a},{b}) is out of range for a graph with {n} nodes"
        );

        self.adj[a as usize].push(edge);
        self.adj[b as usize].push(edge);
        self.num_edges += 1;
    }

    /// Adds all edges in the collection
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    /// Edges incident to `u` in insertion order
    /// ** Panics if `u >= n` **
    pub fn edges_of(&self, u: Node) -> &[WeightedEdge] {
        &self.adj[u as usize]
    }

    /// Returns every edge once: the copy stored at `v` is reported iff `other(v) > v`.
    /// Self-loops are never reported.
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices().flat_map(move |v| {
            self.adj[v as usize]
                .iter()
                .filter(move |e| e.other(v) > v)
                .copied()
        })
    }

    /// Returns every stored edge exactly once, self-loops included.
    /// A self-loop is stored twice at its node; only the first copy is reported.
    pub fn unique_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices().flat_map(move |v| {
            let mut odd_loop = false;
            self.adj[v as usize].iter().filter_map(move |e| {
                if e.is_loop() {
                    odd_loop = !odd_loop;
                    odd_loop.then_some(*e)
                } else {
                    (e.other(v) > v).then_some(*e)
                }
            })
        })
    }

    /// Sum of the weights of all edges reported by [`WeightGraph::edges`]
    pub fn total_weight(&self) -> f64 {
        self.edges().map(|e| e.weight()).sum()
    }
}

impl Display for WeightGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_header(self, f)?;
        for edge in self.unique_edges() {
            writeln!(f, "{edge}")?;
        }
        Ok(())
    }
}
