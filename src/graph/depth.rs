//! Depth-first graph traversal with an explicit stack.
//!
//! The stack holds one neighbor iterator per vertex on the current path, which reproduces the
//! visiting order of the recursive definition ("visit, then recurse into each unvisited
//! neighbor in turn") without growing the call stack.

use super::Graph;
use std::{collections::HashSet, hash::Hash};

pub struct DepthFirstIterator<'a, V> {
    graph: &'a Graph<V>,
    stack: Vec<std::slice::Iter<'a, V>>,
    visited: HashSet<&'a V>,
    start: Option<&'a V>,
}

impl<'a, V> DepthFirstIterator<'a, V>
where
    V: Eq + Hash,
{
    pub fn new(graph: &'a Graph<V>, start: &V) -> Self {
        let start = graph.adjacency.get_key_value(start).map(|(vertex, _)| vertex);
        DepthFirstIterator {
            graph,
            stack: Vec::with_capacity(graph.vertex_count()),
            visited: HashSet::with_capacity(graph.vertex_count()),
            start,
        }
    }

    fn visit(&mut self, vertex: &'a V) -> &'a V {
        self.visited.insert(vertex);
        self.stack.push(self.graph.neighbors(vertex).unwrap_or_default().iter());
        vertex
    }
}

impl<'a, V> Iterator for DepthFirstIterator<'a, V>
where
    V: Eq + Hash,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            return Some(self.visit(start));
        }
        while let Some(neighbors) = self.stack.last_mut() {
            match neighbors.find(|neighbor| !self.visited.contains(neighbor)) {
                Some(neighbor) => return Some(self.visit(neighbor)),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}
