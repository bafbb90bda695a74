//! Breadth-first graph traversal

use super::Graph;
use crate::Queue;
use std::{collections::HashSet, hash::Hash};

/// Visits every vertex reachable from the start exactly once, in discovery order.
///
/// A vertex is marked as visited when it is *enqueued*, so it cannot enter the queue twice.
pub struct BreadthFirstIterator<'a, V> {
    graph: &'a Graph<V>,
    queue: Queue<&'a V>,
    visited: HashSet<&'a V>,
}

impl<'a, V> BreadthFirstIterator<'a, V>
where
    V: Eq + Hash,
{
    pub fn new(graph: &'a Graph<V>, start: &V) -> Self {
        let mut queue = Queue::new();
        let mut visited = HashSet::new();
        if let Some((start, _)) = graph.adjacency.get_key_value(start) {
            queue.enqueue(start);
            visited.insert(start);
        }
        BreadthFirstIterator { graph, queue, visited }
    }
}

impl<'a, V> Iterator for BreadthFirstIterator<'a, V>
where
    V: Eq + Hash,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.queue.dequeue()?;
        for neighbor in self.graph.neighbors(vertex).unwrap_or_default() {
            if self.visited.insert(neighbor) {
                self.queue.enqueue(neighbor);
            }
        }
        Some(vertex)
    }
}
