//! Iterators that traverse a [BinaryTree] depth-first (pre-, in- and postorder) or breadth-first.
//!
//! Depth-first traversal keeps an explicit stack of pending frames instead of recursing, so the
//! auxiliary memory is O(height) and deep trees cannot overflow the call stack.

use super::{BinaryTree, TreeNode};
use crate::{arena::ArenaIndex, Order, Queue};

/// Work item on the depth-first stack
#[derive(Debug, Clone, Copy)]
enum Frame {
    /// Children of this node have not been scheduled yet
    Expand(ArenaIndex),
    /// The node is due to be yielded
    Emit(ArenaIndex),
}

/// Iterator for a depth-first traversal in one of [Order::Preorder], [Order::Inorder] or
/// [Order::Postorder].
pub struct DepthFirstIterator<'a, T> {
    tree: &'a BinaryTree<T>,
    order: Order,
    stack: Vec<Frame>,
}

impl<'a, T> DepthFirstIterator<'a, T> {
    pub fn new(tree: &'a BinaryTree<T>, order: Order) -> Self {
        let mut stack = Vec::with_capacity(tree.len().max(1).ilog2() as usize + 2);
        stack.extend(tree.root.map(Frame::Expand));
        DepthFirstIterator { tree, order, stack }
    }
}

impl<'a, T> Iterator for DepthFirstIterator<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Emit(index) => return Some(&self.tree.nodes[index]),
                Frame::Expand(index) => {
                    let node = &self.tree.nodes[index];
                    let left = node.left.map(Frame::Expand);
                    let right = node.right.map(Frame::Expand);
                    let this = Some(Frame::Emit(index));
                    // Pushed in reverse of the visiting order
                    let frames = match self.order {
                        Order::Preorder => [right, left, this],
                        Order::Inorder => [right, this, left],
                        Order::Postorder | Order::LevelOrder => [this, right, left],
                    };
                    self.stack.extend(frames.into_iter().flatten());
                }
            }
        }
        None
    }
}

/// Iterator for a breadth-first (level order) traversal, left to right within a level.
pub struct BreadthFirstIterator<'a, T> {
    tree: &'a BinaryTree<T>,
    queue: Queue<ArenaIndex>,
}

impl<'a, T> BreadthFirstIterator<'a, T> {
    pub fn new(tree: &'a BinaryTree<T>) -> Self {
        let mut queue = Queue::new();
        if let Some(root) = tree.root {
            queue.enqueue(root);
        }
        BreadthFirstIterator { tree, queue }
    }
}

impl<'a, T> Iterator for BreadthFirstIterator<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.tree.nodes[self.queue.dequeue()?];
        node.children().for_each(|child| self.queue.enqueue(child));
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use crate::{BinaryTree, Nodelike, Order};
    use itertools::Itertools;
    use test_log;

    #[test_log::test]
    fn test_orders() {
        // Layout of the tree
        //       1
        //     /   \
        //    2     3
        //   / \   /
        //  4   5 6
        let tree: BinaryTree<i64> = (1..=6).collect();

        let collect = |order| tree.nodes_in(order).map(|n| *n.get()).collect_vec();
        assert_eq!(collect(Order::Preorder), &[1, 2, 4, 5, 3, 6]);
        assert_eq!(collect(Order::Inorder), &[4, 2, 5, 1, 6, 3]);
        assert_eq!(collect(Order::Postorder), &[4, 5, 2, 6, 3, 1]);
        assert_eq!(collect(Order::LevelOrder), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_empty() {
        let tree = BinaryTree::<i64>::new();
        assert_eq!(tree.nodes_in(Order::Inorder).count(), 0);
        assert_eq!(tree.nodes_in(Order::LevelOrder).count(), 0);
    }
}
