//! Definition of the interfaces shared by the node-based containers

/// Order of iteration over a [BinaryTree](crate::BinaryTree)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Left, self, right
    Inorder,
    /// Self, left, right
    Preorder,
    /// Left, right, self
    Postorder,
    /// Breadth-first, level by level and left to right
    LevelOrder,
}

/// Container that holds data in a node-based structure.
pub trait Nodelike<Load> {
    /// True if no further node hangs off this one
    fn is_leaf(&self) -> bool;
    fn get(&self) -> &Load;
}
