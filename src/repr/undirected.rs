use crate::repr::macros::impl_common_graph_ops;

use super::*;

/// An undirected graph representation.
///
/// Adding the edge `{u, v}` stores `v` as neighbor of `u` and `u` as neighbor of `v`.
/// A self-loop `{u, u}` therefore shows up twice in the neighborhood of `u` (list backing)
/// but is counted only once in `number_of_edges`.
#[derive(Clone, Debug)]
pub struct Graph {
    adj: AdjStorage,
    num_edges: NumEdges,
}

impl_common_graph_ops!(Graph => adj, Undirected);

impl GraphEdgeEditing for Graph {
    fn add_edge(&mut self, u: Node, v: Node) {
        self.assert_in_range(u, v);
        self.adj.push(u, v);
        self.adj.push(v, u);
        self.num_edges += 1;
    }
}

impl Graph {
    /// Returns every stored edge exactly once as `Edge(u, v)` with `u <= v`.
    /// Parallel edges are reported once per copy (list backing).
    pub fn unique_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| {
            let mut odd_loop = false;
            self.neighbors_of(u).filter_map(move |v| {
                if v == u {
                    // a loop is stored twice in the list backing and once in the matrix backing
                    odd_loop = !odd_loop;
                    odd_loop.then_some(Edge(u, u))
                } else {
                    (u < v).then_some(Edge(u, v))
                }
            })
        })
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_header(self, f)?;
        for Edge(u, v) in self.unique_edges() {
            writeln!(f, "{u}-{v}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::testing::*;

    test_graph_store!(list, Graph::new, true, false);
    test_graph_store!(matrix, Graph::new_matrix, true, true);

    #[test]
    fn edges_are_stored_at_both_endpoints() {
        let graph = Graph::from_edges(4, [(0, 1), (0, 2), (2, 3)]);

        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![1, 2]);
        assert_eq!(graph.neighbors_of(2).collect_vec(), vec![0, 3]);
        assert_eq!(graph.neighbors_of(3).collect_vec(), vec![2]);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.average_degree(), 1.5);
    }

    #[test]
    fn self_loops_and_parallel_edges() {
        let mut graph = Graph::new(3);
        graph.add_edge(1, 1);
        graph.add_edge(0, 2);
        graph.add_edge(2, 0);

        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![1, 1]);
        assert_eq!(graph.degree_of(1), 2);
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![2, 2]);
        assert_eq!(
            graph.unique_edges().collect_vec(),
            vec![Edge(0, 2), Edge(0, 2), Edge(1, 1)]
        );
    }

    #[test]
    fn matrix_counts_every_insertion() {
        let mut graph = Graph::new_matrix(3);
        graph.add_edge(0, 2);
        graph.add_edge(2, 0);
        graph.add_edge(1, 1);

        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![2]);
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![1]);
        assert_eq!(
            graph.unique_edges().collect_vec(),
            vec![Edge(0, 2), Edge(1, 1)]
        );
    }

    #[test]
    fn degree_statistics() {
        let graph = three_component_graph();

        assert_eq!(graph.max_degree(), 4);
        assert_eq!(graph.min_degree(), 1);
        assert!((graph.average_degree() - 2.0 * 13.0 / 13.0).abs() < 1e-12);
        assert_eq!(Graph::new(0).average_degree(), 0.0);
        assert_eq!(Graph::new(0).max_degree(), 0);
    }

    #[test]
    #[should_panic]
    fn add_edge_out_of_range() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 3);
    }
}
