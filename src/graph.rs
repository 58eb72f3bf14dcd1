//! Immutable adjacency representation of an undirected graph, plus the
//! saturation and conflict queries the six colouring strategies share.
//!
//! A [`Graph`] is built once (via [`GraphBuilder`]) and then only read from;
//! nothing in this crate mutates a graph's adjacency after construction.

use std::collections::BTreeSet;

use bit_set::BitSet;

use crate::error::{GraphColorError, Result};

/// 0-based vertex index. The on-disk DIMACS format is 1-indexed; translation
/// happens at load time (see `crate::dimacs`), never here.
pub type VertexId = usize;

/// An undirected, loopless, simple graph with vertices `0..n`.
///
/// Invariants (enforced exclusively by [`GraphBuilder::build`]):
/// no self-loops; edges are symmetric (`v` neighbours `u` iff `u` neighbours
/// `v`); no duplicate neighbours; every neighbour index lies in `[0, n)`.
#[derive(Debug, Clone)]
pub struct Graph {
    n: usize,
    m: usize,
    adj: Vec<Vec<VertexId>>,
    adj_set: Vec<BitSet>,
}

impl Graph {
    /// Number of vertices.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of (deduplicated) edges.
    pub fn m(&self) -> usize {
        self.m
    }

    /// Degree of vertex `v`.
    pub fn degree(&self, v: VertexId) -> usize {
        self.adj[v].len()
    }

    /// Iterates over the neighbours of `v`, in the order they were inserted.
    pub fn neighbours(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adj[v].iter().copied()
    }

    /// The largest degree over all vertices (Δ). Zero for a graph with no
    /// vertices.
    pub fn max_degree(&self) -> usize {
        self.adj.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether `u` and `v` are adjacent. O(1) via the per-vertex bitset.
    pub fn are_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.adj_set[u].contains(v)
    }

    /// All edges as `(u, v)` with `u < v`, each listed once.
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut res = Vec::with_capacity(self.m);
        for u in 0..self.n {
            for &v in &self.adj[u] {
                if u < v {
                    res.push((u, v));
                }
            }
        }
        res
    }
}

/// Accumulates edges and produces a validated [`Graph`].
///
/// Self-loops are silently dropped (mirroring the DIMACS reader's treatment
/// of `e v v` lines); duplicate edges are silently deduplicated. An edge
/// naming a vertex outside `[0, n)` is the one condition this type rejects.
#[derive(Debug)]
pub struct GraphBuilder {
    n: usize,
    edges: BTreeSet<(VertexId, VertexId)>,
}

impl GraphBuilder {
    /// Starts a builder for a graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            edges: BTreeSet::new(),
        }
    }

    /// Adds an undirected edge between `u` and `v`.
    ///
    /// Self-loops (`u == v`) are ignored. Returns
    /// [`GraphColorError::MalformedGraph`] if either endpoint is `>= n`.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        if u >= self.n || v >= self.n {
            return Err(GraphColorError::MalformedGraph(format!(
                "edge ({u}, {v}) references a vertex outside [0, {})",
                self.n
            )));
        }
        if u == v {
            return Ok(());
        }
        let key = if u < v { (u, v) } else { (v, u) };
        self.edges.insert(key);
        Ok(())
    }

    /// Consumes the builder, producing a [`Graph`] whose invariants hold by
    /// construction.
    pub fn build(self) -> Graph {
        let n = self.n;
        let mut adj = vec![Vec::new(); n];
        for &(u, v) in &self.edges {
            adj[u].push(v);
            adj[v].push(u);
        }
        let mut adj_set = vec![BitSet::new(); n];
        for (v, neigh) in adj.iter().enumerate() {
            for &w in neigh {
                adj_set[v].insert(w);
            }
        }
        Graph {
            n,
            m: self.edges.len(),
            adj,
            adj_set,
        }
    }
}
