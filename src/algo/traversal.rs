/*!
Graph traversal primitives that every other algorithm in this crate builds on.

This module provides:
- [`DepthFirstWalk`]: an explicit-stack depth-first search that reports
  [`DfsEvent`]s (discover, tree edge, revisit, finish) to a callback.
  The visited-state persists across roots, so sweeping all nodes is a loop
  over [`DepthFirstWalk::explore`].
- [`Bfs`]: a lazy breadth-first iterator yielding `(predecessor, node)` pairs.
- A high-level [`Traversal`] trait exposing both directly on graphs.

The depth-first walk never recurses; its depth is bounded by heap memory only.
*/

use super::*;
use std::{collections::VecDeque, ops::ControlFlow};

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// The root of a search is reported as `(root, root)`.
pub type PredecessorOfNode = (Node, Node);

/// Events reported by a [`DepthFirstWalk`] in the order they happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent {
    /// The node was reached for the first time
    Discover(Node),
    /// The edge `(u, v)` is about to be followed to the undiscovered node `v`.
    /// Reported right before `Discover(v)`.
    TreeEdge(Node, Node),
    /// The edge `(u, v)` leads to the already discovered node `v`
    Revisit(Node, Node),
    /// All edges of the node have been scanned
    Finish(Node),
}

/// Depth-first search in Tremaux order: a newly discovered neighbor is explored
/// completely before the remaining neighbors of its parent are scanned.
///
/// The set of discovered nodes is shared by all calls to [`DepthFirstWalk::visit`]
/// and [`DepthFirstWalk::explore`], so repeated calls never report a node twice.
pub struct DepthFirstWalk<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    marked: NodeBitSet,
}

impl<'a, G> DepthFirstWalk<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a walk over `graph` with no node discovered yet
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            marked: graph.vertex_bitset_unset(),
        }
    }

    /// Runs the search from `root` and reports every event to `callback`.
    /// The search stops as soon as the callback returns `ControlFlow::Break`,
    /// in which case `Break` is returned.
    ///
    /// If `root` was already discovered, nothing is reported.
    /// ** Panics if `root >= n` **
    pub fn visit<F>(&mut self, root: Node, mut callback: F) -> ControlFlow<()>
    where
        F: FnMut(DfsEvent) -> ControlFlow<()>,
    {
        if self.marked.replace(root as usize, true) {
            return ControlFlow::Continue(());
        }

        let graph = self.graph;
        callback(DfsEvent::Discover(root))?;

        let mut stack = vec![(root, graph.neighbors_of(root))];
        while let Some((u, neighbors)) = stack.last_mut() {
            let u = *u;
            match neighbors.next() {
                Some(v) if self.marked.replace(v as usize, true) => {
                    callback(DfsEvent::Revisit(u, v))?;
                }
                Some(v) => {
                    callback(DfsEvent::TreeEdge(u, v))?;
                    callback(DfsEvent::Discover(v))?;
                    stack.push((v, graph.neighbors_of(v)));
                }
                None => {
                    stack.pop();
                    callback(DfsEvent::Finish(u))?;
                }
            }
        }

        ControlFlow::Continue(())
    }

    /// Same as [`DepthFirstWalk::visit`] for callbacks that never stop the search
    pub fn explore<F>(&mut self, root: Node, mut callback: F)
    where
        F: FnMut(DfsEvent),
    {
        let _ = self.visit(root, |event| {
            callback(event);
            ControlFlow::Continue(())
        });
    }

    /// Returns *true* if `u` was discovered by any previous search
    pub fn is_marked(&self, u: Node) -> bool {
        self.marked[u as usize]
    }

    /// Consumes the walk and returns the set of discovered nodes
    pub fn into_marked(self) -> NodeBitSet {
        self.marked
    }
}

/// Breadth-first iterator yielding `(predecessor, node)` pairs.
///
/// Nodes are marked when they are enqueued, so each reachable node is yielded exactly
/// once and its predecessor lies on a shortest path (in number of edges) from the start.
pub struct Bfs<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<PredecessorOfNode>,
}

impl<'a, G> Bfs<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new BFS starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set(start as usize, true);
        Self {
            graph,
            visited,
            queue: VecDeque::from([(start, start)]),
        }
    }

    /// Returns *true* if `u` was enqueued so far
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited[u as usize]
    }

    /// Consumes the iterator and returns the set of enqueued nodes
    pub fn into_visited(self) -> NodeBitSet {
        self.visited
    }
}

impl<G> Iterator for Bfs<'_, G>
where
    G: AdjacencyList,
{
    type Item = PredecessorOfNode;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.queue.pop_front()?;
        let u = popped.1;

        for v in self.graph.neighbors_of(u) {
            if !self.visited.replace(v as usize, true) {
                self.queue.push_back((u, v));
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.queue.len() + self.graph.len() - self.visited.count_ones()),
        )
    }
}

/// Provides convenient traversal methods directly on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator over `(predecessor, node)` pairs reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use idxgraph::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(3, [(0, 1), (1, 2)]);
    ///
    /// let order: Vec<_> = g.bfs(0).map(|(_, u)| u).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: Node) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }

    /// Returns a fresh depth-first walk over the graph
    fn depth_first_walk(&self) -> DepthFirstWalk<'_, Self> {
        DepthFirstWalk::new(self)
    }

    /// Computes depth-first paths from `source`, see [`PathFinder::depth_first`]
    fn dfs_paths(&self, source: Node) -> Result<PathFinder, GraphError> {
        PathFinder::depth_first(self, source)
    }

    /// Computes breadth-first (shortest) paths from `source`, see [`PathFinder::breadth_first`]
    ///
    /// # Examples
    /// ```
    /// use idxgraph::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (0, 3)]);
    ///
    /// let paths = g.bfs_paths(0).unwrap();
    /// assert_eq!(paths.path_to(3), vec![0, 3]);
    /// assert!(g.bfs_paths(4).is_err());
    /// ```
    fn bfs_paths(&self, source: Node) -> Result<PathFinder, GraphError> {
        PathFinder::breadth_first(self, source)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = Graph::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        let order = graph.bfs(1).map(|(_, u)| u).collect_vec();
        assert_eq!(order, vec![1, 2, 0, 4, 5, 3]);

        let digraph = Digraph::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);
        let order = digraph.bfs(5).map(|(_, u)| u).collect_vec();
        assert_eq!(order, vec![5, 4, 3]);
    }

    #[test]
    fn bfs_with_predecessor() {
        let graph = Graph::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        let pairs = graph.bfs(1).collect_vec();
        assert_eq!(pairs, vec![(1, 1), (1, 2), (1, 0), (2, 4), (0, 5), (4, 3)]);
    }

    #[test]
    fn dfs_events_in_tremaux_order() {
        // 0 - 1 - 2
        //  \     /
        //    3 -
        let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);

        let mut events = Vec::new();
        graph.depth_first_walk().explore(0, |e| events.push(e));

        use DfsEvent::*;
        assert_eq!(
            events,
            vec![
                Discover(0),
                TreeEdge(0, 1),
                Discover(1),
                Revisit(1, 0),
                TreeEdge(1, 2),
                Discover(2),
                Revisit(2, 1),
                TreeEdge(2, 3),
                Discover(3),
                Revisit(3, 2),
                Revisit(3, 0),
                Finish(3),
                Finish(2),
                Finish(1),
                Revisit(0, 3),
                Finish(0),
            ]
        );
    }

    #[test]
    fn dfs_walk_remembers_roots() {
        let graph = three_component_graph();
        let mut walk = graph.depth_first_walk();

        let mut discovered = Vec::new();
        for u in graph.vertices() {
            let mut count = 0;
            walk.explore(u, |e| {
                if matches!(e, DfsEvent::Discover(_)) {
                    count += 1;
                }
            });
            discovered.push(count);
        }

        assert_eq!(discovered, vec![7, 0, 0, 0, 0, 0, 0, 2, 0, 4, 0, 0, 0]);
        assert!(walk.is_marked(12));
        assert_eq!(walk.into_marked().count_ones(), 13);
    }

    #[test]
    fn dfs_walk_can_stop_early() {
        let graph = Digraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        let mut walk = graph.depth_first_walk();

        let mut finished = Vec::new();
        let flow = walk.visit(0, |e| match e {
            DfsEvent::Discover(2) => ControlFlow::Break(()),
            DfsEvent::Finish(u) => {
                finished.push(u);
                ControlFlow::Continue(())
            }
            _ => ControlFlow::Continue(()),
        });

        assert!(flow.is_break());
        assert!(finished.is_empty());
        assert!(!walk.is_marked(3));
    }

    #[test]
    fn deep_paths_do_not_overflow() {
        let n = 200_000;
        let graph = Digraph::from_edges(n, (1..n).map(|u| (u - 1, u)));

        let mut last = None;
        graph.depth_first_walk().explore(0, |e| {
            if let DfsEvent::Finish(u) = e {
                last = Some(u);
            }
        });
        assert_eq!(last, Some(0));
    }
}
