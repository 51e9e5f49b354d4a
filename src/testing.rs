//! Shared fixtures and test macros. Every fixture function builds a fresh instance.

use itertools::Itertools;
use rand::Rng;

use crate::{ops::*, repr::*, *};

pub(crate) const TINY_DG_EDGES: [(Node, Node); 22] = [
    (4, 2),
    (2, 3),
    (3, 2),
    (6, 0),
    (0, 1),
    (2, 0),
    (11, 12),
    (12, 9),
    (9, 10),
    (9, 11),
    (7, 9),
    (10, 12),
    (11, 4),
    (4, 3),
    (3, 5),
    (6, 8),
    (8, 6),
    (5, 4),
    (0, 5),
    (6, 4),
    (6, 9),
    (7, 6),
];

/// Edge-list text of [`tiny_dg`]
pub(crate) const TINY_DG_TEXT: &str = "13
22
 4  2
 2  3
 3  2
 6  0
 0  1
 2  0
11 12
12  9
 9 10
 9 11
 7  9
10 12
11  4
 4  3
 3  5
 6  8
 8  6
 5  4
 0  5
 6  4
 6  9
 7  6
";

/// Directed graph on 13 nodes with the five strongly connected components
/// `{1}`, `{0,2,3,4,5}`, `{9,10,11,12}`, `{6,8}` and `{7}`
pub(crate) fn tiny_dg() -> Digraph {
    Digraph::from_edges(13, TINY_DG_EDGES)
}

pub(crate) const TINY_EWG_EDGES: [(Node, Node, f64); 16] = [
    (4, 5, 0.35),
    (4, 7, 0.37),
    (5, 7, 0.28),
    (0, 7, 0.16),
    (1, 5, 0.32),
    (0, 4, 0.38),
    (2, 3, 0.17),
    (1, 7, 0.19),
    (0, 2, 0.26),
    (1, 2, 0.36),
    (1, 3, 0.29),
    (2, 7, 0.34),
    (6, 2, 0.40),
    (3, 6, 0.52),
    (6, 0, 0.58),
    (6, 4, 0.93),
];

/// Edge-list text of [`tiny_ewg`]
pub(crate) const TINY_EWG_TEXT: &str = "8
16
4 5 0.35
4 7 0.37
5 7 0.28
0 7 0.16
1 5 0.32
0 4 0.38
2 3 0.17
1 7 0.19
0 2 0.26
1 2 0.36
1 3 0.29
2 7 0.34
6 2 0.40
3 6 0.52
6 0 0.58
6 4 0.93
";

/// Connected weighted graph on 8 nodes whose minimum spanning tree weighs 1.81
pub(crate) fn tiny_ewg() -> WeightGraph {
    WeightGraph::from_edges(8, TINY_EWG_EDGES)
}

/// Undirected graph on 13 nodes with components `{0..=6}`, `{7,8}` and `{9..=12}`
pub(crate) fn three_component_graph() -> Graph {
    Graph::from_edges(
        13,
        [
            (0, 1),
            (0, 2),
            (0, 6),
            (0, 5),
            (6, 4),
            (4, 3),
            (4, 5),
            (5, 3),
            (7, 8),
            (9, 10),
            (9, 12),
            (9, 11),
            (11, 12),
        ],
    )
}

/// `0->1, 1->3, 0->2, 3->2`
pub(crate) fn small_dag() -> Digraph {
    Digraph::from_edges(4, [(0, 1), (1, 3), (0, 2), (3, 2)])
}

/// [`small_dag`] plus `2->0`
pub(crate) fn small_cyclic_digraph() -> Digraph {
    Digraph::from_edges(4, [(0, 1), (1, 3), (0, 2), (3, 2), (2, 0)])
}

/// Unions over 10 elements that leave two sets
pub(crate) const TINY_UF_PAIRS: [(Node, Node); 8] = [
    (4, 3),
    (3, 8),
    (6, 5),
    (9, 4),
    (2, 1),
    (5, 0),
    (7, 2),
    (6, 1),
];

/// Creates a list of `m` random edges for nodes `0..n` (loops and duplicates possible)
pub(crate) fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<Edge> {
    (0..m)
        .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
        .collect_vec()
}

pub(crate) fn random_graph<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Graph {
    Graph::from_edges(n, random_edges(rng, n, m))
}

pub(crate) fn random_digraph<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Digraph {
    Digraph::from_edges(n, random_edges(rng, n, m))
}

/// Random connected weighted graph: a random tree plus `extra` random edges.
/// Weights are drawn from `[0, 1)`.
pub(crate) fn random_connected_weight_graph<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    extra: NumEdges,
) -> WeightGraph {
    let mut graph = WeightGraph::new(n);
    for v in 1..n {
        let u = rng.random_range(0..v);
        graph.add_edge((u, v, rng.random::<f64>()));
    }
    for _ in 0..extra {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        graph.add_edge((u, v, rng.random::<f64>()));
    }
    graph
}

/// Floyd-Warshall hop distances; `None` if unreachable
pub(crate) fn all_pairs_distances<G: AdjacencyList>(graph: &G) -> Vec<Vec<Option<NumNodes>>> {
    let n = graph.len();
    let mut dist = vec![vec![None; n]; n];
    for u in graph.vertices() {
        dist[u as usize][u as usize] = Some(0);
        for v in graph.neighbors_of(u) {
            if u != v {
                dist[u as usize][v as usize] = Some(1);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(ik) = dist[i][k] else {
                continue;
            };
            for j in 0..n {
                if let Some(kj) = dist[k][j] {
                    let through = ik + kj;
                    if dist[i][j].is_none_or(|d| d > through) {
                        dist[i][j] = Some(through);
                    }
                }
            }
        }
    }

    dist
}

/// Every graph store should keep node count, count insertions and report neighbors consistently
macro_rules! test_graph_store {
    ($env:ident, $ctor:path, $undirected:literal, $matrix:literal) => {
        mod $env {
            use crate::{ops::*, repr::*, testing::random_edges, *};
            use itertools::Itertools;
            use rand::SeedableRng;
            use rand_pcg::Pcg64Mcg;

            #[test]
            fn graph_new() {
                for n in 0..50 {
                    let graph = $ctor(n);

                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.is_empty(), n == 0);
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                    assert!(graph.vertices().all(|u| graph.degree_of(u) == 0));
                }
            }

            #[test]
            fn adjacency_list() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10 as NumNodes, 20, 50] {
                    for m_ub in [n * 2, n * 5, n * 10] {
                        for _ in 0..10 {
                            let mut edges = random_edges(rng, n, m_ub as NumEdges)
                                .into_iter()
                                .filter(|e| !e.is_loop())
                                .map(|e| if $undirected { e.normalized() } else { e })
                                .collect_vec();
                            edges.sort_unstable();
                            edges.dedup();

                            let mut adj_matrix = vec![node_bitset(n); n as usize];
                            let mut graph = $ctor(n);
                            for &Edge(u, v) in &edges {
                                adj_matrix[u as usize].set(v as usize, true);
                                if $undirected {
                                    adj_matrix[v as usize].set(u as usize, true);
                                }
                                graph.add_edge(u, v);
                            }

                            assert_eq!(graph.number_of_nodes(), n);
                            assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                            assert_eq!(graph.storage().is_matrix(), $matrix);

                            for u in 0..n {
                                let mut nbs = node_bitset(n);
                                for v in graph.neighbors_of(u) {
                                    nbs.set(v as usize, true);
                                }
                                assert_eq!(nbs, adj_matrix[u as usize]);
                                assert_eq!(
                                    graph.degree_of(u) as usize,
                                    adj_matrix[u as usize].count_ones()
                                );
                                assert_eq!(
                                    graph.neighbors_of(u).collect_vec(),
                                    graph.neighbors_of(u).collect_vec()
                                );
                            }
                        }
                    }
                }
            }

            #[test]
            fn counts_every_insertion() {
                let rng = &mut Pcg64Mcg::seed_from_u64(5);

                for n in [1 as NumNodes, 7, 30] {
                    let edges = random_edges(rng, n, 4 * n);
                    let mut graph = $ctor(n);
                    for (i, &Edge(u, v)) in edges.iter().enumerate() {
                        graph.add_edge(u, v);
                        assert_eq!(graph.number_of_edges(), i as NumEdges + 1);
                        assert_eq!(graph.number_of_nodes(), n);
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_store;
