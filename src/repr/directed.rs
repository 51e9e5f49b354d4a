use crate::repr::macros::impl_common_graph_ops;

use super::*;

/// A directed graph representation storing out-neighbors only.
#[derive(Clone, Debug)]
pub struct Digraph {
    out_nbs: AdjStorage,
    num_edges: NumEdges,
}

impl_common_graph_ops!(Digraph => out_nbs, Directed);

impl GraphEdgeEditing for Digraph {
    fn add_edge(&mut self, u: Node, v: Node) {
        self.assert_in_range(u, v);
        self.out_nbs.push(u, v);
        self.num_edges += 1;
    }
}

impl GraphReverse for Digraph {
    fn reverse(&self) -> Self {
        let mut out_nbs = self.out_nbs.empty_like();
        for u in self.vertices() {
            for v in self.neighbors_of(u) {
                out_nbs.push(v, u);
            }
        }

        Self {
            out_nbs,
            num_edges: self.num_edges,
        }
    }
}

impl Digraph {
    /// Returns the in-degree of every node, indexed by node
    pub fn in_degrees(&self) -> Vec<NumNodes> {
        let mut in_degrees = vec![0; self.len()];
        for u in self.vertices() {
            for v in self.neighbors_of(u) {
                in_degrees[v as usize] += 1;
            }
        }
        in_degrees
    }
}

impl Display for Digraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_header(self, f)?;
        for u in self.vertices() {
            for v in self.neighbors_of(u) {
                writeln!(f, "{u}->{v}")?;
            }
        }
        Ok(())
    }
}
