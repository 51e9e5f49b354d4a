/*!
Connected components of undirected graphs and strongly connected components of
directed graphs. Both label every node with a dense component id in `0..count`,
assigned in the order in which the components were first entered.
*/

use itertools::Itertools;
use tracing::debug;

use super::*;

/// Runs one depth-first search per undiscovered root, taken from `roots` in order,
/// and labels every node with the index of the search that discovered it.
fn label_by_search<G, I>(graph: &G, roots: I) -> (Vec<NumNodes>, NumNodes)
where
    G: AdjacencyList,
    I: IntoIterator<Item = Node>,
{
    let mut id = vec![INVALID_NODE; graph.len()];
    let mut count = 0;

    let mut walk = graph.depth_first_walk();
    for root in roots {
        if walk.is_marked(root) {
            continue;
        }
        walk.explore(root, |event| {
            if let DfsEvent::Discover(u) = event {
                id[u as usize] = count;
            }
        });
        count += 1;
    }

    (id, count)
}

/// Groups the nodes by their component id
fn group_by_id(id: &[NumNodes], count: NumNodes) -> Vec<Vec<Node>> {
    let mut components = vec![Vec::new(); count as usize];
    for (u, &c) in id.iter().enumerate() {
        components[c as usize].push(u as Node);
    }
    components
}

/// Connected components of an undirected graph
#[derive(Debug, Clone)]
pub struct ConnectedComponents {
    id: Vec<NumNodes>,
    count: NumNodes,
}

impl ConnectedComponents {
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacencyList + GraphType<Dir = Undirected>,
    {
        let (id, count) = label_by_search(graph, graph.vertices());
        Self { id, count }
    }

    /// Returns *true* if `u` and `v` are in the same component
    /// ** Panics if `u >= n || v >= n` **
    pub fn connected(&self, u: Node, v: Node) -> bool {
        self.id[u as usize] == self.id[v as usize]
    }

    /// Number of components
    pub fn count(&self) -> NumNodes {
        self.count
    }

    /// Component id of `u`
    /// ** Panics if `u >= n` **
    pub fn id(&self, u: Node) -> NumNodes {
        self.id[u as usize]
    }

    /// Members of component `id` in increasing order
    pub fn component(&self, id: NumNodes) -> Vec<Node> {
        self.id
            .iter()
            .positions(|&c| c == id)
            .map(|u| u as Node)
            .collect_vec()
    }

    /// All components, indexed by id, members in increasing order
    pub fn components(&self) -> Vec<Vec<Node>> {
        group_by_id(&self.id, self.count)
    }
}

/// Strongly connected components of a directed graph (Kosaraju-Sharir).
///
/// The nodes are first ordered by the reverse postorder of the reversed graph. Searching
/// the original graph from roots in that order then discovers exactly one strongly
/// connected component per search.
#[derive(Debug, Clone)]
pub struct StronglyConnectedComponents {
    id: Vec<NumNodes>,
    count: NumNodes,
}

impl StronglyConnectedComponents {
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacencyList + GraphReverse,
    {
        let order = DepthFirstOrder::new(&graph.reverse());
        let (id, count) = label_by_search(graph, order.reverse_post().iter().copied());

        debug!(
            nodes = graph.number_of_nodes(),
            components = count,
            "computed strongly connected components"
        );

        Self { id, count }
    }

    /// Returns *true* if `u` and `v` can reach each other
    /// ** Panics if `u >= n || v >= n` **
    pub fn strongly_connected(&self, u: Node, v: Node) -> bool {
        self.id[u as usize] == self.id[v as usize]
    }

    /// Number of strongly connected components
    pub fn count(&self) -> NumNodes {
        self.count
    }

    /// Component id of `u`
    /// ** Panics if `u >= n` **
    pub fn id(&self, u: Node) -> NumNodes {
        self.id[u as usize]
    }

    /// All components, indexed by id, members in increasing order
    pub fn components(&self) -> Vec<Vec<Node>> {
        group_by_id(&self.id, self.count)
    }
}

/// Component queries as methods on graphs
pub trait Connectivity: AdjacencyList + GraphType {
    /// See [`ConnectedComponents`]
    fn connected_components(&self) -> ConnectedComponents
    where
        Self: GraphType<Dir = Undirected>,
    {
        ConnectedComponents::new(self)
    }

    /// Returns *true* if the undirected graph has at most one component
    fn is_connected(&self) -> bool
    where
        Self: GraphType<Dir = Undirected>,
    {
        ConnectedComponents::new(self).count() <= 1
    }

    /// See [`StronglyConnectedComponents`]
    fn strongly_connected_components(&self) -> StronglyConnectedComponents
    where
        Self: GraphReverse,
    {
        StronglyConnectedComponents::new(self)
    }
}

impl<G> Connectivity for G where G: AdjacencyList + GraphType {}
