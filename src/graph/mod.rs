//! Graphs stored as adjacency lists, either directed or undirected.
//!
//! Every vertex that appears in a neighbor list is also a key of the adjacency map (it is
//! created on the first edge that mentions it). In an undirected graph each edge is stored
//! in both directions and every mutation keeps the two sides in sync. Parallel edges are
//! allowed; nothing is deduplicated on insertion.
//!
//! Vertices keep their insertion order, which makes [Graph::vertices], rendering and the
//! traversals deterministic.

pub mod breadth;
pub mod depth;

pub use breadth::BreadthFirstIterator;
pub use depth::DepthFirstIterator;

use core::fmt;
use indexmap::IndexMap;
use itertools::Itertools;
use std::{collections::HashSet, hash::Hash};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct Graph<V> {
    directed: bool,
    adjacency: IndexMap<V, Vec<V>>,
}

/// Same direction mode and the same neighbor lists. Vertex insertion order is ignored.
impl<V: Eq + Hash> PartialEq for Graph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.directed == other.directed && self.adjacency == other.adjacency
    }
}

impl<V: Eq + Hash> Eq for Graph<V> {}

impl<V> Graph<V> {
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn clear(&mut self) {
        self.adjacency.clear();
    }
}

impl<V> Graph<V>
where
    V: Eq + Hash,
{
    pub fn new(directed: bool) -> Self {
        Graph {
            directed,
            adjacency: IndexMap::new(),
        }
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Neighbors in insertion order, `None` for an unknown vertex
    pub fn neighbors(&self, vertex: &V) -> Option<&[V]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.neighbors(from).is_some_and(|neighbors| neighbors.contains(to))
    }

    /// Lazy breadth-first traversal. Yields nothing for an unknown start vertex.
    pub fn iter_breadth(&self, start: &V) -> BreadthFirstIterator<'_, V> {
        BreadthFirstIterator::new(self, start)
    }

    /// Lazy depth-first traversal. Yields nothing for an unknown start vertex.
    pub fn iter_depth(&self, start: &V) -> DepthFirstIterator<'_, V> {
        DepthFirstIterator::new(self, start)
    }
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone,
{
    /// Adds an isolated vertex. No-op if it already exists.
    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Connects `from` to `to`, creating missing vertices. Undirected graphs also get the
    /// reverse direction. Parallel edges are kept.
    pub fn add_edge(&mut self, from: V, to: V) {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());
        if !self.directed {
            self.push_neighbor(&to, from.clone());
        }
        self.push_neighbor(&from, to);
    }

    /// Removes one occurrence of the edge (both directions when undirected).
    /// Unknown vertices or edges are ignored.
    pub fn remove_edge(&mut self, from: &V, to: &V) {
        if !(self.contains_vertex(from) && self.contains_vertex(to)) {
            debug!(vertices = self.vertex_count(), "remove_edge on an unknown vertex");
            return;
        }
        self.remove_neighbor(from, to);
        if !self.directed {
            self.remove_neighbor(to, from);
        }
    }

    /// Drops the vertex together with every edge that touches it.
    /// Returns whether the vertex existed.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.adjacency.shift_remove(vertex).is_none() {
            return false;
        }
        self.adjacency
            .values_mut()
            .for_each(|neighbors| neighbors.retain(|neighbor| neighbor != vertex));
        true
    }

    /// All vertices in insertion order
    pub fn vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    /// Edge list. In an undirected graph a pair `(u, v)` is skipped when `(v, u)` has already
    /// been listed, so each connection shows up once; a directed graph lists every pair.
    pub fn edges(&self) -> Vec<(V, V)> {
        let mut listed = HashSet::new();
        let mut edges = vec![];
        for (vertex, neighbors) in &self.adjacency {
            for neighbor in neighbors {
                if self.directed || !listed.contains(&(neighbor, vertex)) {
                    listed.insert((vertex, neighbor));
                    edges.push((vertex.clone(), neighbor.clone()));
                }
            }
        }
        edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Breadth-first order of all vertices reachable from `start`. O(V + E).
    ///
    /// Empty if `start` is not in the graph (a present start always yields at least itself).
    pub fn bfs(&self, start: &V) -> Vec<V> {
        if !self.contains_vertex(start) {
            warn!(vertices = self.vertex_count(), "breadth-first search from an unknown vertex");
        }
        self.iter_breadth(start).cloned().collect()
    }

    /// Depth-first order of all vertices reachable from `start`, identical to the recursive
    /// definition. O(V + E).
    ///
    /// Empty if `start` is not in the graph.
    pub fn dfs(&self, start: &V) -> Vec<V> {
        if !self.contains_vertex(start) {
            warn!(vertices = self.vertex_count(), "depth-first search from an unknown vertex");
        }
        self.iter_depth(start).cloned().collect()
    }

    fn push_neighbor(&mut self, vertex: &V, neighbor: V) {
        if let Some(neighbors) = self.adjacency.get_mut(vertex) {
            neighbors.push(neighbor);
        }
    }

    fn remove_neighbor(&mut self, vertex: &V, neighbor: &V) {
        if let Some(neighbors) = self.adjacency.get_mut(vertex) {
            if let Some(position) = neighbors.iter().position(|n| n == neighbor) {
                neighbors.remove(position);
            }
        }
    }
}

impl<V> Graph<V>
where
    V: fmt::Display,
{
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// One line per vertex with its neighbors, e.g. `A: B -> C`.
impl<V> fmt::Display for Graph<V>
where
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.adjacency.is_empty() {
            return write!(f, "Empty graph");
        }
        let lines = self.adjacency.iter().map(|(vertex, neighbors)| {
            if neighbors.is_empty() {
                format!("{vertex}: no neighbors")
            } else {
                format!("{vertex}: {}", neighbors.iter().join(" -> "))
            }
        });
        write!(f, "{}", lines.format("\n"))
    }
}

impl<V> Default for Graph<V>
where
    V: Eq + Hash,
{
    /// An undirected, empty graph
    fn default() -> Self {
        Self::new(false)
    }
}
