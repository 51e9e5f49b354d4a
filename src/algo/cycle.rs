/*!
Cycle detection and closely related structural checks.

- [`directed_cycle`] returns a witness cycle of a directed graph (or nothing if it is acyclic).
- [`has_undirected_cycle`], [`is_bipartite`] and [`has_euler_tour`] answer yes/no questions
  about undirected graphs.

All of them are also available as methods via the [`Cycles`] trait.
*/

use std::ops::ControlFlow;

use super::*;

/// Returns a directed cycle of `graph` as the sequence of its nodes, with the first node
/// repeated at the end, or an empty vector if `graph` is acyclic.
///
/// Nodes are searched as roots in increasing order and the first back edge found by the
/// depth-first search closes the reported cycle.
///
/// # Examples
/// ```
/// use idxgraph::{prelude::*, algo::*};
///
/// let g = Digraph::from_edges(4, [(0, 1), (1, 3), (0, 2), (3, 2), (2, 0)]);
/// assert_eq!(directed_cycle(&g), vec![2, 0, 1, 3, 2]);
/// ```
pub fn directed_cycle<G>(graph: &G) -> Vec<Node>
where
    G: AdjacencyList + GraphType<Dir = Directed>,
{
    let mut on_stack = graph.vertex_bitset_unset();
    let mut edge_to = vec![INVALID_NODE; graph.len()];
    let mut cycle = Vec::new();

    let mut walk = graph.depth_first_walk();
    for root in graph.vertices() {
        let flow = walk.visit(root, |event| {
            match event {
                DfsEvent::Discover(u) => on_stack.set(u as usize, true),
                DfsEvent::Finish(u) => on_stack.set(u as usize, false),
                DfsEvent::TreeEdge(u, v) => edge_to[v as usize] = u,
                DfsEvent::Revisit(u, v) if on_stack[v as usize] => {
                    let mut x = u;
                    while x != v {
                        cycle.push(x);
                        x = edge_to[x as usize];
                    }
                    cycle.push(v);
                    cycle.push(u);
                    return ControlFlow::Break(());
                }
                DfsEvent::Revisit(..) => {}
            }
            ControlFlow::Continue(())
        });

        if flow.is_break() {
            cycle.reverse();
            break;
        }
    }

    cycle
}

/// Returns *true* if the undirected graph contains a cycle.
/// Self-loops and parallel edges count as cycles.
pub fn has_undirected_cycle<G>(graph: &G) -> bool
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    let mut parent = vec![INVALID_NODE; graph.len()];
    // each tree edge shows up once more from the child's side; only that copy is skipped
    let mut skipped_parent = graph.vertex_bitset_unset();

    let mut walk = graph.depth_first_walk();
    graph.vertices().any(|root| {
        walk.visit(root, |event| match event {
            DfsEvent::TreeEdge(u, v) => {
                parent[v as usize] = u;
                ControlFlow::Continue(())
            }
            DfsEvent::Revisit(u, v)
                if parent[u as usize] == v && !skipped_parent.replace(u as usize, true) =>
            {
                ControlFlow::Continue(())
            }
            DfsEvent::Revisit(..) => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        })
        .is_break()
    })
}

/// Returns *true* if the nodes of the undirected graph can be colored with two colors
/// such that no edge connects nodes of the same color.
pub fn is_bipartite<G>(graph: &G) -> bool
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    let mut color = graph.vertex_bitset_unset();

    let mut walk = graph.depth_first_walk();
    graph.vertices().all(|root| {
        walk.visit(root, |event| match event {
            DfsEvent::TreeEdge(u, v) => {
                let c = !color[u as usize];
                color.set(v as usize, c);
                ControlFlow::Continue(())
            }
            DfsEvent::Revisit(u, v) if color[u as usize] == color[v as usize] => {
                ControlFlow::Break(())
            }
            _ => ControlFlow::Continue(()),
        })
        .is_continue()
    })
}

/// Returns *true* if every node of the undirected graph has even degree
pub fn has_euler_tour<G>(graph: &G) -> bool
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    graph.degrees().all(|d| d % 2 == 0)
}

/// Cycle related queries as methods on graphs
pub trait Cycles: AdjacencyList + GraphType {
    /// See [`directed_cycle`]
    fn directed_cycle(&self) -> Vec<Node>
    where
        Self: GraphType<Dir = Directed>,
    {
        directed_cycle(self)
    }

    /// Returns *true* if the directed graph has a cycle
    fn has_directed_cycle(&self) -> bool
    where
        Self: GraphType<Dir = Directed>,
    {
        !directed_cycle(self).is_empty()
    }

    /// Returns *true* if the directed graph has no cycle
    fn is_acyclic(&self) -> bool
    where
        Self: GraphType<Dir = Directed>,
    {
        directed_cycle(self).is_empty()
    }

    /// See [`has_undirected_cycle`]
    fn has_undirected_cycle(&self) -> bool
    where
        Self: GraphType<Dir = Undirected>,
    {
        has_undirected_cycle(self)
    }

    /// See [`is_bipartite`]
    fn is_bipartite(&self) -> bool
    where
        Self: GraphType<Dir = Undirected>,
    {
        is_bipartite(self)
    }

    /// See [`has_euler_tour`]
    fn has_euler_tour(&self) -> bool
    where
        Self: GraphType<Dir = Undirected>,
    {
        has_euler_tour(self)
    }
}

impl<G> Cycles for G where G: AdjacencyList + GraphType {}
