//! Singly linked list whose nodes are stored in an [Arena].
//!
//! Each node refers to its successor by handle, the list keeps only the handle of the head.
//! There is no tail pointer, so appending walks the chain (O(n)) while prepending is O(1).

use crate::{
    arena::{Arena, ArenaIndex},
    Nodelike,
};
use core::fmt;
use itertools::Itertools;
use tracing::{debug, trace};

/// A link in the chain
#[derive(Debug)]
pub struct ListNode<T> {
    data: T,
    next: Option<ArenaIndex>,
}

impl<T> ListNode<T> {
    /// Handle of the following node
    pub fn next(&self) -> Option<ArenaIndex> {
        self.next
    }
}

impl<T> Nodelike<T> for ListNode<T> {
    fn is_leaf(&self) -> bool {
        self.next.is_none()
    }

    fn get(&self) -> &T {
        &self.data
    }
}

#[derive(Debug)]
pub struct LinkedList<T> {
    nodes: Arena<ListNode<T>>,
    head: Option<ArenaIndex>,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            nodes: Arena::new(),
            head: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<ArenaIndex> {
        self.head
    }

    /// Attaches a node after the current last one. Walks the whole chain.
    pub fn append(&mut self, data: T) -> ArenaIndex {
        let new = self.nodes.alloc(ListNode { data, next: None });
        match self.last() {
            Some(last) => self.nodes[last].next = Some(new),
            None => self.head = Some(new),
        }
        new
    }

    pub fn prepend(&mut self, data: T) -> ArenaIndex {
        let new = self.nodes.alloc(ListNode { data, next: self.head });
        self.head = Some(new);
        new
    }

    /// Splices a new node in right after `node`.
    ///
    /// Nothing happens for `None` or for a handle whose node has since been deleted.
    pub fn insert_after(&mut self, node: Option<ArenaIndex>, data: T) -> Option<ArenaIndex> {
        let previous = node?;
        let Some(next) = self.nodes.get(previous).map(|n| n.next) else {
            debug!(%previous, "insert_after on a node that is no longer in the list");
            return None;
        };
        let new = self.nodes.alloc(ListNode { data, next });
        self.nodes[previous].next = Some(new);
        Some(new)
    }

    /// Handle of the node at `position` (0-indexed), `None` past the end.
    pub fn node_at_position(&self, position: usize) -> Option<ArenaIndex> {
        self.handles().nth(position)
    }

    pub fn node(&self, handle: ArenaIndex) -> Option<&ListNode<T>> {
        self.nodes.get(handle)
    }

    pub fn value_at(&self, position: usize) -> Option<&T> {
        self.node_at_position(position).map(|handle| self.nodes[handle].get())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            current: self.head,
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
    }

    fn handles(&self) -> impl Iterator<Item = ArenaIndex> + '_ {
        std::iter::successors(self.head, move |handle| self.nodes[*handle].next)
    }

    fn last(&self) -> Option<ArenaIndex> {
        self.handles().last()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Unlinks the first node holding `key`. Returns whether a node was removed; a missing key
    /// leaves the list untouched.
    pub fn delete_node(&mut self, key: &T) -> bool {
        let mut previous: Option<ArenaIndex> = None;
        let mut current = self.head;
        while let Some(handle) = current {
            let node = &self.nodes[handle];
            if node.data == *key {
                let next = node.next;
                match previous {
                    Some(previous) => self.nodes[previous].next = next,
                    None => self.head = next,
                }
                trace!(%handle, "unlinked node");
                // The handle was just followed, so releasing it cannot fail
                return self.nodes.release(handle).is_ok();
            }
            previous = current;
            current = node.next;
        }
        false
    }

    pub fn contains(&self, key: &T) -> bool {
        self.iter().any(|data| data == key)
    }
}

impl<T: fmt::Display> LinkedList<T> {
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "Empty list")
        } else {
            write!(f, "{}", self.iter().join(" -> "))
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    /// Appends in order. Keeps track of the tail while extending instead of walking for each item.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.last();
        for data in iter {
            let new = self.nodes.alloc(ListNode { data, next: None });
            match tail {
                Some(last) => self.nodes[last].next = Some(new),
                None => self.head = Some(new),
            }
            tail = Some(new);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

/// Iterator over the data from head to tail
pub struct Iter<'a, T> {
    nodes: &'a Arena<ListNode<T>>,
    current: Option<ArenaIndex>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.current?)?;
        self.current = node.next;
        Some(&node.data)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use test_log;

    #[test_log::test]
    fn test_append_prepend() {
        let mut list = LinkedList::new();
        list.append(1);
        list.append(2);
        list.append(3);
        list.prepend(0);
        assert_eq!(list.iter().copied().collect_vec(), &[0, 1, 2, 3]);
        assert_eq!(list.len(), 4);
        assert_eq!(list.value_at(0), Some(&0));
        assert_eq!(list.value_at(3), Some(&3));
        assert_eq!(list.value_at(4), None);
        assert_eq!(list.render(), "0 -> 1 -> 2 -> 3");
    }

    #[test_log::test]
    fn test_insert_after() {
        let mut list: LinkedList<f64> = [1.0, 2.0, 3.0].into_iter().collect();
        let first = list.node_at_position(0);
        let new = list.insert_after(first, 1.5);
        assert!(new.is_some());
        assert_eq!(list.render(), "1 -> 1.5 -> 2 -> 3");

        // Inserting after the last node extends the list
        let last = list.node_at_position(3);
        list.insert_after(last, 4.0);
        assert_eq!(list.value_at(4), Some(&4.0));
        assert!(list.node(list.node_at_position(4).unwrap()).unwrap().is_leaf());

        // A null reference does nothing
        assert_eq!(list.insert_after(None, 9.0), None);
        assert_eq!(list.len(), 5);
    }

    #[test_log::test]
    fn test_insert_after_deleted_node() {
        let mut list: LinkedList<i64> = (1..=3).collect();
        let second = list.node_at_position(1);
        assert!(list.delete_node(&2));
        assert_eq!(list.insert_after(second, 7), None);
        // Reusing the freed slot does not revive the old handle
        list.append(4);
        assert_eq!(list.insert_after(second, 7), None);
        assert_eq!(list.iter().copied().collect_vec(), &[1, 3, 4]);
    }

    #[test_log::test]
    fn test_delete_node() {
        let mut list: LinkedList<i64> = [1, 2, 3, 2].into_iter().collect();

        // Head
        assert!(list.delete_node(&1));
        assert_eq!(list.iter().copied().collect_vec(), &[2, 3, 2]);
        // First match only
        assert!(list.delete_node(&2));
        assert_eq!(list.iter().copied().collect_vec(), &[3, 2]);
        // Tail
        assert!(list.delete_node(&2));
        assert_eq!(list.iter().copied().collect_vec(), &[3]);
        // Missing key
        assert!(!list.delete_node(&42));
        assert_eq!(list.len(), 1);

        assert!(list.delete_node(&3));
        assert!(list.is_empty());
        assert_eq!(list.render(), "Empty list");
        assert!(!list.delete_node(&3));
    }

    #[test]
    fn test_positions() {
        let list: LinkedList<&str> = ["a", "b", "c"].into_iter().collect();
        let handle = list.node_at_position(1).unwrap();
        let node = list.node(handle).unwrap();
        assert_eq!(node.get(), &"b");
        assert_eq!(list.node(node.next().unwrap()).map(|n| *n.get()), Some("c"));
        assert_eq!(list.node_at_position(3), None);
        assert_eq!(LinkedList::<i64>::new().node_at_position(0), None);
    }

    #[test]
    fn test_clear() {
        let mut list: LinkedList<i64> = (0..10).collect();
        let stale = list.head();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.insert_after(stale, 1), None);
        list.append(5);
        assert_eq!(list.render(), "5");
    }
}
