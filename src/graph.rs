//! Immutable weighted undirected graph model.

use crate::error::{CutResult, MaxCutError};

/// A weighted undirected edge between two distinct vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// First endpoint (zero-based).
    pub u: usize,
    /// Second endpoint (zero-based).
    pub v: usize,
    /// Edge weight. May be negative.
    pub w: i64,
}

/// A weighted undirected graph, immutable once built.
///
/// Vertices are zero-based indices in `[0, n)`. Each undirected edge is
/// stored once in the edge list and as two directed half-edges in the
/// adjacency structure, so `sum(|adj[v]|) == 2 * |edges|` always holds.
/// Parallel edges are permitted and contribute independently to adjacency
/// and cut weight; no dedup is performed.
///
/// Built once by a caller (typically a file loader producing 0-indexed
/// `(u, v, w)` triples) and then shared read-only across any number of
/// concurrent heuristic invocations.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    n: usize,
    edges: Vec<Edge>,
    adj: Vec<Vec<(usize, i64)>>,
}

impl Graph {
    /// Creates an empty graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            edges: Vec::new(),
            adj: vec![Vec::new(); n],
        }
    }

    /// Builds a graph from a vertex count and an edge iterator.
    ///
    /// This is the loader-facing constructor: the loader is responsible for
    /// any index-base conversion (e.g. 1-indexed file formats).
    ///
    /// # Panics
    ///
    /// Panics if any endpoint is outside `[0, n)` or a self-loop is given,
    /// as [`add_edge`](Self::add_edge) does.
    pub fn from_edges<I>(n: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        let mut g = Self::new(n);
        for (u, v, w) in edges {
            g.add_edge(u, v, w);
        }
        g
    }

    /// Appends an undirected edge, updating both endpoints' adjacency. O(1).
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is outside `[0, n)` or `u == v`.
    pub fn add_edge(&mut self, u: usize, v: usize, w: i64) {
        assert!(u < self.n && v < self.n, "edge endpoint out of range");
        assert_ne!(u, v, "self-loops are not allowed");
        self.edges.push(Edge { u, v, w });
        self.adj[u].push((v, w));
        self.adj[v].push((u, w));
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// `(neighbor, weight)` pairs adjacent to `v`, in edge-insertion order.
    pub fn neighbors(&self, v: usize) -> &[(usize, i64)] {
        &self.adj[v]
    }

    /// Sum of all edge weights. Upper bound on any cut weight for graphs
    /// with non-negative weights.
    pub fn total_weight(&self) -> i64 {
        self.edges.iter().map(|e| e.w).sum()
    }

    /// Returns the maximum-weight edge, O(E).
    ///
    /// Ties are broken toward the earliest edge in insertion order, so
    /// repeated calls are deterministic.
    ///
    /// # Errors
    ///
    /// [`MaxCutError::EmptyGraph`] if the graph has no edges.
    pub fn heaviest_edge(&self) -> CutResult<Edge> {
        self.edges
            .iter()
            .copied()
            .reduce(|best, e| if e.w > best.w { e } else { best })
            .ok_or(MaxCutError::EmptyGraph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_is_symmetric_closure() {
        let g = Graph::from_edges(4, [(0, 1, 10), (0, 2, 1), (1, 3, 1), (2, 3, 10)]);

        let half_edges: usize = (0..4).map(|v| g.neighbors(v).len()).sum();
        assert_eq!(half_edges, 2 * g.edge_count());
        assert_eq!(g.neighbors(0), &[(1, 10), (2, 1)]);
        assert_eq!(g.neighbors(3), &[(1, 1), (2, 10)]);
    }

    #[test]
    fn test_heaviest_edge_first_max_wins() {
        let g = Graph::from_edges(4, [(0, 1, 10), (0, 2, 1), (2, 3, 10)]);

        // (0,1,10) and (2,3,10) tie; insertion order decides.
        for _ in 0..3 {
            let e = g.heaviest_edge().unwrap();
            assert_eq!((e.u, e.v, e.w), (0, 1, 10));
        }
    }

    #[test]
    fn test_heaviest_edge_empty_graph() {
        let g = Graph::new(3);
        assert_eq!(g.heaviest_edge(), Err(MaxCutError::EmptyGraph));
    }

    #[test]
    fn test_parallel_edges_sum_into_adjacency() {
        let g = Graph::from_edges(2, [(0, 1, 3), (0, 1, 4)]);

        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors(0), &[(1, 3), (1, 4)]);
        assert_eq!(g.total_weight(), 7);
    }

    #[test]
    #[should_panic(expected = "self-loops")]
    fn test_self_loop_rejected() {
        let mut g = Graph::new(2);
        g.add_edge(1, 1, 5);
    }

    #[test]
    fn test_total_weight_with_negative_edges() {
        let g = Graph::from_edges(3, [(0, 1, 5), (1, 2, -2)]);
        assert_eq!(g.total_weight(), 3);
    }
}
