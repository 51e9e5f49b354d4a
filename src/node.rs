/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
Nodes are dense ids: a graph with `n` nodes has exactly the nodes `0..n` and there
is no separate vertex object.
*/

use bitvec::vec::BitVec;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid.
/// Used as the "no predecessor" marker in `edge_to`-style arrays.
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitVec;

/// Returns a NodeBitSet with one unset bit per node in `0..n`
pub fn node_bitset(n: NumNodes) -> NodeBitSet {
    BitVec::repeat(false, n as usize)
}
