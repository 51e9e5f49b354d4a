/*!
# Labeled graphs

Wrappers around [`Graph`], [`Digraph`] and [`WeightGraph`] whose vertices are addressed by
arbitrary hashable keys. Each unseen key gets the next dense id (in arrival order) when it
first appears in `add_edge`; all algorithms of this crate can then run on [`graph()`](LabeledGraph::graph)
and their results can be translated back with [`vertex`](LabeledGraph::vertex).

The capacity `n` passed to `new` is the number of nodes of the wrapped graph. Ids of nodes that
never received a key are valid in the wrapped graph but map to no key.

```
use idxgraph::{prelude::*, labeled::*};

let mut jobs = LabeledDigraph::new(3);
jobs.add_edge("compile", "link").unwrap();
jobs.add_edge("fetch", "compile").unwrap();

assert_eq!(jobs.topological_order().unwrap(), vec![&"fetch", &"compile", &"link"]);
assert!(jobs.add_edge("test", "deploy").is_err());
```
*/

use std::hash::Hash;

use fxhash::FxHashMap;

use crate::{algo::*, prelude::*};

/// Bijection between keys and the dense ids `0..len`
#[derive(Debug, Clone)]
struct Labels<K> {
    ids: FxHashMap<K, Node>,
    keys: Vec<K>,
    capacity: NumNodes,
}

impl<K: Hash + Eq + Clone> Labels<K> {
    fn new(capacity: NumNodes) -> Self {
        Self {
            ids: FxHashMap::with_capacity_and_hasher(capacity as usize, Default::default()),
            keys: Vec::with_capacity(capacity as usize),
            capacity,
        }
    }

    fn id_of(&self, key: &K) -> Option<Node> {
        self.ids.get(key).copied()
    }

    fn key(&self, id: Node) -> Option<&K> {
        self.keys.get(id as usize)
    }

    fn len(&self) -> NumNodes {
        self.keys.len() as NumNodes
    }

    fn insert(&mut self, key: K) -> Node {
        let id = self.len();
        self.ids.insert(key.clone(), id);
        self.keys.push(key);
        id
    }

    /// Returns the ids of both keys, assigning new ids where needed.
    /// Nothing is assigned if the keys would not fit.
    fn assign_pair(&mut self, a: K, b: K) -> Result<(Node, Node), GraphError> {
        let unseen_a = !self.ids.contains_key(&a);
        let unseen_b = a != b && !self.ids.contains_key(&b);
        if self.len() + unseen_a as NumNodes + unseen_b as NumNodes > self.capacity {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let u = match self.id_of(&a) {
            Some(u) => u,
            None => self.insert(a),
        };
        let v = match self.id_of(&b) {
            Some(v) => v,
            None => self.insert(b),
        };
        Ok((u, v))
    }

    fn keys_of<'a>(&'a self, ids: impl IntoIterator<Item = Node> + 'a) -> impl Iterator<Item = &'a K> + 'a {
        ids.into_iter().filter_map(move |id| self.key(id))
    }
}

/// Shared key lookups of all labeled wrappers
macro_rules! impl_labeled_lookups {
    ($struct:ident => $inner:ident) => {
        impl<K: Hash + Eq + Clone> $struct<K> {
            /// Creates a wrapper around a graph with `n` nodes that accepts up to `n` keys
            pub fn new(n: NumNodes) -> Self {
                Self {
                    labels: Labels::new(n),
                    graph: $inner::new(n),
                }
            }

            /// Dense id of `key`, if it was seen in an edge before
            pub fn id_of(&self, key: &K) -> Option<Node> {
                self.labels.id_of(key)
            }

            /// Key of the dense id `id`, if one was assigned
            pub fn vertex(&self, id: Node) -> Option<&K> {
                self.labels.key(id)
            }

            /// Number of keys assigned so far
            pub fn number_of_labels(&self) -> NumNodes {
                self.labels.len()
            }

            /// The wrapped integer-indexed graph
            pub fn graph(&self) -> &$inner {
                &self.graph
            }

            pub fn into_inner(self) -> $inner {
                self.graph
            }

            /// Keys adjacent to `key`; empty if `key` is unknown
            pub fn neighbors_of<'a>(&'a self, key: &K) -> impl Iterator<Item = &'a K> + 'a {
                self.labels
                    .id_of(key)
                    .into_iter()
                    .flat_map(move |u| self.labels.keys_of(self.graph.neighbors_of(u)))
            }
        }
    };
}

/// Undirected graph over keys of type `K`
#[derive(Debug, Clone)]
pub struct LabeledGraph<K> {
    labels: Labels<K>,
    graph: Graph,
}

impl_labeled_lookups!(LabeledGraph => Graph);

impl<K: Hash + Eq + Clone> LabeledGraph<K> {
    /// Adds the undirected edge `{a, b}`.
    ///
    /// # Errors
    /// Fails with [`GraphError::CapacityExceeded`] if the new keys would not fit.
    /// In that case the graph is unchanged.
    pub fn add_edge(&mut self, a: K, b: K) -> Result<(), GraphError> {
        let (u, v) = self.labels.assign_pair(a, b)?;
        self.graph.add_edge(u, v);
        Ok(())
    }
}

/// Directed graph over keys of type `K`
#[derive(Debug, Clone)]
pub struct LabeledDigraph<K> {
    labels: Labels<K>,
    graph: Digraph,
}

impl_labeled_lookups!(LabeledDigraph => Digraph);

impl<K: Hash + Eq + Clone> LabeledDigraph<K> {
    /// Adds the edge `a -> b`.
    ///
    /// # Errors
    /// Fails with [`GraphError::CapacityExceeded`] if the new keys would not fit.
    /// In that case the graph is unchanged.
    pub fn add_edge(&mut self, a: K, b: K) -> Result<(), GraphError> {
        let (u, v) = self.labels.assign_pair(a, b)?;
        self.graph.add_edge(u, v);
        Ok(())
    }

    /// Same keys and ids, every edge flipped
    pub fn reverse(&self) -> Self {
        Self {
            labels: self.labels.clone(),
            graph: self.graph.reverse(),
        }
    }

    /// Keys in topological order; nodes without a key are skipped.
    ///
    /// # Errors
    /// Returns [`GraphError::HasCycle`] with the dense ids of a cycle,
    /// see [`LabeledDigraph::vertex`] to translate them.
    pub fn topological_order(&self) -> Result<Vec<&K>, GraphError> {
        let order = topological_sort(&self.graph)?;
        Ok(self.labels.keys_of(order).collect())
    }

    /// Keys of a directed cycle with the first key repeated at the end, or empty if acyclic
    pub fn directed_cycle(&self) -> Vec<&K> {
        self.labels.keys_of(directed_cycle(&self.graph)).collect()
    }
}

/// Edge-weighted undirected graph over keys of type `K`
#[derive(Debug, Clone)]
pub struct LabeledWeightGraph<K> {
    labels: Labels<K>,
    graph: WeightGraph,
}

impl_labeled_lookups!(LabeledWeightGraph => WeightGraph);

impl<K: Hash + Eq + Clone> LabeledWeightGraph<K> {
    /// Adds the edge `{a, b}` with the given weight.
    ///
    /// # Errors
    /// Fails with [`GraphError::CapacityExceeded`] if the new keys would not fit.
    /// In that case the graph is unchanged.
    pub fn add_edge(&mut self, a: K, b: K, weight: f64) -> Result<(), GraphError> {
        let (u, v) = self.labels.assign_pair(a, b)?;
        self.graph.add_edge(WeightedEdge::new(u, v, weight));
        Ok(())
    }

    /// Keys of both endpoints of an edge of the wrapped graph
    pub fn endpoints_of(&self, edge: &WeightedEdge) -> Option<(&K, &K)> {
        let (u, v) = edge.endpoints();
        Some((self.labels.key(u)?, self.labels.key(v)?))
    }
}
