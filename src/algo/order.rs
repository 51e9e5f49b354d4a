use tracing::trace;

use super::*;

/// Preorder, postorder and reverse postorder of one depth-first sweep that
/// starts a new search from every undiscovered node in increasing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthFirstOrder {
    pre: Vec<Node>,
    post: Vec<Node>,
    reverse_post: Vec<Node>,
}

impl DepthFirstOrder {
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacencyList,
    {
        let mut pre = Vec::with_capacity(graph.len());
        let mut post = Vec::with_capacity(graph.len());

        let mut walk = graph.depth_first_walk();
        for root in graph.vertices() {
            walk.explore(root, |event| match event {
                DfsEvent::Discover(u) => pre.push(u),
                DfsEvent::Finish(u) => post.push(u),
                _ => {}
            });
        }

        let mut reverse_post = post.clone();
        reverse_post.reverse();

        Self {
            pre,
            post,
            reverse_post,
        }
    }

    /// Nodes in the order they were discovered
    pub fn pre(&self) -> &[Node] {
        &self.pre
    }

    /// Nodes in the order they were finished
    pub fn post(&self) -> &[Node] {
        &self.post
    }

    /// Reverse of [`DepthFirstOrder::post`]
    pub fn reverse_post(&self) -> &[Node] {
        &self.reverse_post
    }
}

/// A directed graph that is known to be acyclic.
///
/// The digraph is owned and only exposed immutably, so it stays acyclic for the
/// lifetime of the `Dag`.
#[derive(Debug, Clone)]
pub struct Dag {
    graph: Digraph,
}

impl Dag {
    /// Takes ownership of `graph` if it is acyclic.
    /// Otherwise returns [`GraphError::HasCycle`] carrying a witness cycle.
    pub fn new(graph: Digraph) -> Result<Self, GraphError> {
        let cycle = directed_cycle(&graph);
        if !cycle.is_empty() {
            trace!(?cycle, "digraph is not acyclic");
            return Err(GraphError::HasCycle { cycle });
        }
        Ok(Self { graph })
    }

    /// Topological order: every edge `u -> v` has `u` before `v`.
    /// Computed as the reverse postorder of a depth-first sweep.
    pub fn sort(&self) -> Vec<Node> {
        DepthFirstOrder::new(&self.graph).reverse_post
    }

    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    pub fn into_inner(self) -> Digraph {
        self.graph
    }
}

impl TryFrom<Digraph> for Dag {
    type Error = GraphError;

    fn try_from(graph: Digraph) -> Result<Self, Self::Error> {
        Self::new(graph)
    }
}

/// Returns a topological order of `graph`, or the witness cycle if there is none
pub fn topological_sort<G>(graph: &G) -> Result<Vec<Node>, GraphError>
where
    G: AdjacencyList + GraphType<Dir = Directed>,
{
    let cycle = directed_cycle(graph);
    if !cycle.is_empty() {
        return Err(GraphError::HasCycle { cycle });
    }
    Ok(DepthFirstOrder::new(graph).reverse_post)
}
