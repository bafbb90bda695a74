//! A binary tree kept in *complete* shape: every level is full except possibly the last, which
//! is filled from the left.
//!
//! This is **not** a search tree. Values are placed by position, not by ordering, so both
//! [BinaryTree::insert] and [BinaryTree::search] scan breadth-first and cost O(n). An O(log n)
//! bound only holds for a balanced binary *search* tree.
//!
//! Nodes are stored in an [Arena] and link to their children by [ArenaIndex].

pub mod iterator;

use crate::{
    arena::{Arena, ArenaIndex},
    Nodelike, Order,
};
use core::fmt;
use itertools::Itertools;
pub use iterator::{BreadthFirstIterator, DepthFirstIterator};
use tracing::{debug, trace};

/// A node with at most two children
#[derive(Debug)]
pub struct TreeNode<T> {
    data: T,
    /// Index in the arena allocation
    index: ArenaIndex,
    left: Option<ArenaIndex>,
    right: Option<ArenaIndex>,
}

impl<T> TreeNode<T> {
    pub fn index(&self) -> ArenaIndex {
        self.index
    }

    pub fn left(&self) -> Option<ArenaIndex> {
        self.left
    }

    pub fn right(&self) -> Option<ArenaIndex> {
        self.right
    }

    /// Existing children, left first
    pub fn children(&self) -> impl Iterator<Item = ArenaIndex> {
        self.left.into_iter().chain(self.right)
    }
}

impl<T> Nodelike<T> for TreeNode<T> {
    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn get(&self) -> &T {
        &self.data
    }
}

impl<T> fmt::Display for TreeNode<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Arena index {}, left: {:?}, right: {:?}, data: {}",
            self.index, self.left, self.right, self.data
        )
    }
}

#[derive(Debug)]
pub struct BinaryTree<T> {
    /// Memory allocated area for nodes
    nodes: Arena<TreeNode<T>>,
    root: Option<ArenaIndex>,
}

impl<T> BinaryTree<T> {
    pub fn new() -> Self {
        BinaryTree {
            nodes: Arena::new(),
            root: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        BinaryTree {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.nodes.get(self.root?)
    }

    pub fn node(&self, index: ArenaIndex) -> Option<&TreeNode<T>> {
        self.nodes.get(index)
    }

    /// Places `data` in the first free child slot found breadth-first: the left slot of the
    /// first node missing its left child, else the right slot of the first node missing its
    /// right child. This fills the tree level by level, left to right. O(n).
    pub fn insert(&mut self, data: T) -> ArenaIndex {
        if self.root.is_none() {
            let index = self.alloc(data);
            self.root = Some(index);
            return index;
        }

        let (parent, is_left) = BreadthFirstIterator::new(self)
            .find_map(|node| match (node.left, node.right) {
                (None, _) => Some((node.index, true)),
                (Some(_), None) => Some((node.index, false)),
                _ => None,
            })
            .expect("Internal error. A finite tree always has a free child slot!");

        let index = self.alloc(data);
        let parent_node = &mut self.nodes[parent];
        if is_left {
            parent_node.left = Some(index);
        } else {
            parent_node.right = Some(index);
        }
        trace!(%parent, %index, is_left, "inserted node");
        index
    }

    pub fn inorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter(Order::Inorder).cloned().collect()
    }

    pub fn preorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter(Order::Preorder).cloned().collect()
    }

    pub fn postorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter(Order::Postorder).cloned().collect()
    }

    pub fn level_order_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter(Order::LevelOrder).cloned().collect()
    }

    /// Node visitation in the requested order
    pub fn nodes_in(&self, order: Order) -> Box<dyn Iterator<Item = &TreeNode<T>> + '_> {
        match order {
            Order::LevelOrder => Box::new(BreadthFirstIterator::new(self)),
            _ => Box::new(DepthFirstIterator::new(self, order)),
        }
    }

    pub fn iter(&self, order: Order) -> impl Iterator<Item = &T> {
        self.nodes_in(order).map(|node| node.get())
    }

    /// Values grouped by depth, root level first
    pub fn levels(&self) -> Vec<Vec<&T>> {
        let mut levels: Vec<Vec<&T>> = vec![];
        let mut current = self.root.into_iter().collect_vec();
        while !current.is_empty() {
            levels.push(current.iter().map(|index| self.nodes[*index].get()).collect());
            current = current
                .iter()
                .flat_map(|index| self.nodes[*index].children())
                .collect();
        }
        levels
    }

    /// Number of levels; 0 for an empty tree
    pub fn height(&self) -> usize {
        self.levels().len()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    fn alloc(&mut self, data: T) -> ArenaIndex {
        self.nodes.alloc_with(|index| TreeNode {
            data,
            index,
            left: None,
            right: None,
        })
    }

    /// The node whose `left` or `right` is `child`
    fn parent_of(&self, child: ArenaIndex) -> Option<ArenaIndex> {
        BreadthFirstIterator::new(self)
            .find(|node| node.left == Some(child) || node.right == Some(child))
            .map(|node| node.index)
    }
}

impl<T: PartialEq> BinaryTree<T> {
    /// Breadth-first membership test. O(n) for any shape.
    pub fn search(&self, data: &T) -> bool {
        self.find(data).is_some()
    }

    /// Handle of the first node holding `data` in level order
    pub fn find(&self, data: &T) -> Option<ArenaIndex> {
        BreadthFirstIterator::new(self)
            .find(|node| node.data == *data)
            .map(|node| node.index)
    }

    /// Removes one occurrence of `data`, returning whether it was present.
    ///
    /// The deepest, rightmost node is detached and its value moves into the node being deleted,
    /// so the tree stays complete.
    pub fn delete(&mut self, data: &T) -> bool {
        let Some(target) = self.find(data) else {
            debug!("value to delete is not in the tree");
            return false;
        };
        let Some(deepest) = BreadthFirstIterator::new(self).last().map(|node| node.index) else {
            return false;
        };

        match self.parent_of(deepest) {
            Some(parent) => {
                let parent = &mut self.nodes[parent];
                if parent.right == Some(deepest) {
                    parent.right = None;
                } else {
                    parent.left = None;
                }
            }
            None => self.root = None,
        }

        let Ok(detached) = self.nodes.release(deepest) else {
            return false;
        };
        if target != deepest {
            self.nodes[target].data = detached.data;
        }
        trace!(%target, %deepest, "deleted node");
        true
    }
}

impl<T: fmt::Display> BinaryTree<T> {
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// One line per level. Each label is preceded by `2^(height - level)` spaces, so upper levels
/// are indented further.
impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty tree");
        }
        let levels = self.levels();
        let height = levels.len();
        let lines = levels.iter().enumerate().map(|(depth, labels)| {
            let indent = " ".repeat(2usize.saturating_pow((height - depth - 1) as u32));
            labels.iter().map(|label| format!("{indent}{label}")).join("")
        });
        write!(f, "{}", lines.format("\n"))
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for BinaryTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|data| {
            self.insert(data);
        });
    }
}

impl<T> FromIterator<T> for BinaryTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinaryTree::new();
        tree.extend(iter);
        tree
    }
}
