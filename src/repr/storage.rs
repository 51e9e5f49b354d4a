use itertools::Either;

use super::*;

/// Backing storage shared by [`Graph`] and [`Digraph`].
///
/// - `List` keeps one neighbor vector per node in insertion order, including parallel edges.
/// - `Matrix` keeps one bit row per node. Neighbors are reported in ascending order and
///   parallel edges collapse into a single entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdjStorage {
    List(Vec<Vec<Node>>),
    Matrix(Vec<NodeBitSet>),
}

impl AdjStorage {
    /// Adjacency lists for `n` nodes without any neighbors
    pub fn list(n: NumNodes) -> Self {
        Self::List(vec![Vec::new(); n as usize])
    }

    /// Adjacency matrix for `n` nodes without any neighbors
    pub fn matrix(n: NumNodes) -> Self {
        Self::Matrix(vec![node_bitset(n); n as usize])
    }

    /// Empty storage of the same kind and size as `self`
    pub fn empty_like(&self) -> Self {
        match self {
            Self::List(_) => Self::list(self.number_of_nodes()),
            Self::Matrix(_) => Self::matrix(self.number_of_nodes()),
        }
    }

    /// Returns *true* if this is the bit-row backing
    pub fn is_matrix(&self) -> bool {
        matches!(self, Self::Matrix(_))
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        match self {
            Self::List(nbs) => nbs.len() as NumNodes,
            Self::Matrix(rows) => rows.len() as NumNodes,
        }
    }

    /// Stores `v` as neighbor of `u`
    /// ** Panics if `u >= n || v >= n` **
    pub fn push(&mut self, u: Node, v: Node) {
        match self {
            Self::List(nbs) => nbs[u as usize].push(v),
            Self::Matrix(rows) => rows[u as usize].set(v as usize, true),
        }
    }

    /// Neighbors of `u`
    /// ** Panics if `u >= n` **
    pub fn neighbors(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        match self {
            Self::List(nbs) => Either::Left(nbs[u as usize].iter().copied()),
            Self::Matrix(rows) => Either::Right(rows[u as usize].iter_ones().map(|v| v as Node)),
        }
    }

    /// Number of stored neighbors of `u`
    /// ** Panics if `u >= n` **
    pub fn degree(&self, u: Node) -> NumNodes {
        match self {
            Self::List(nbs) => nbs[u as usize].len() as NumNodes,
            Self::Matrix(rows) => rows[u as usize].count_ones() as NumNodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn list_keeps_insertion_order_and_multiplicity() {
        let mut adj = AdjStorage::list(4);
        adj.push(0, 3);
        adj.push(0, 1);
        adj.push(0, 3);

        assert_eq!(adj.neighbors(0).collect_vec(), vec![3, 1, 3]);
        assert_eq!(adj.degree(0), 3);
        assert_eq!(adj.degree(1), 0);
    }

    #[test]
    fn matrix_is_sorted_and_collapses() {
        let mut adj = AdjStorage::matrix(4);
        adj.push(0, 3);
        adj.push(0, 1);
        adj.push(0, 3);

        assert_eq!(adj.neighbors(0).collect_vec(), vec![1, 3]);
        assert_eq!(adj.degree(0), 2);
        assert!(adj.is_matrix());
        assert!(adj.empty_like().is_matrix());
        assert_eq!(adj.empty_like().number_of_nodes(), 4);
    }

    #[test]
    #[should_panic]
    fn push_out_of_range() {
        let mut adj = AdjStorage::list(2);
        adj.push(2, 0);
    }
}
