/*!
# Union-Find

Disjoint sets over the elements `0..n`, merged by size (weighted quick-union).
`find` walks parent pointers without compressing them and takes `&self`.
Union by size keeps every tree at logarithmic height.
*/

use crate::node::*;

/// Weighted quick-union over the elements `0..n`
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<Node>,
    size: Vec<NumNodes>,
    count: NumNodes,
}

impl UnionFind {
    /// Creates `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n as usize],
            count: n,
        }
    }

    /// Returns the root of the set containing `p`
    /// ** Panics if `p >= n` **
    pub fn find(&self, mut p: Node) -> Node {
        while self.parent[p as usize] != p {
            p = self.parent[p as usize];
        }
        p
    }

    /// Merges the sets containing `p` and `q` and returns *true* if they were disjoint.
    /// The root of the smaller set is attached below the root of the larger one;
    /// on ties the root of `q` goes below the root of `p`.
    /// ** Panics if `p >= n || q >= n` **
    pub fn union(&mut self, p: Node, q: Node) -> bool {
        let p_root = self.find(p);
        let q_root = self.find(q);
        if p_root == q_root {
            return false;
        }

        let (root, child) = if self.size[p_root as usize] < self.size[q_root as usize] {
            (q_root, p_root)
        } else {
            (p_root, q_root)
        };
        self.parent[child as usize] = root;
        self.size[root as usize] += self.size[child as usize];
        self.count -= 1;
        true
    }

    /// Returns *true* if `p` and `q` are in the same set
    /// ** Panics if `p >= n || q >= n` **
    pub fn connected(&self, p: Node, q: Node) -> bool {
        self.find(p) == self.find(q)
    }

    /// Number of disjoint sets
    pub fn count(&self) -> NumNodes {
        self.count
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of elements in the set containing `p`
    /// ** Panics if `p >= n` **
    pub fn size_of_set(&self, p: Node) -> NumNodes {
        self.size[self.find(p) as usize]
    }
}
