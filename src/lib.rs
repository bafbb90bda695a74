//! ## About
//!
//! This crate contains classic data structures and their canonical algorithms, written to be read
//! and experimented with. It is the engine behind interactive learning front ends: those own one
//! structure at a time, call its operations and print what comes back.
//!
//! * Sequences: [DynamicSequence], [Stack] (LIFO) and [Queue] (FIFO)
//! * Node-based containers: [LinkedList], [BinaryTree] (complete shape, level-order insertion)
//!   and [Graph] (adjacency lists, directed or undirected)
//! * Traversals: breadth- and depth-first search on graphs, pre-/in-/postorder and level order on
//!   trees
//! * [Complexity demonstrations](complexity): binary and linear search, merge and bubble sort,
//!   recursive Fibonacci
//!
//! Linked nodes are [arena allocated](https://en.wikipedia.org/wiki/Region-based_memory_management)
//! and refer to each other by [ArenaIndex]. All traversals use explicit stacks or queues, so deep
//! structures cannot overflow the call stack.
//!
//! Expected absence (popping an empty stack, deleting a missing key, searching from an unknown
//! vertex) is reported with `Option` or `bool`. Only structural misuse, such as an index outside
//! of a [DynamicSequence], yields a [PrimerError].
//!
//! Every structure implements [std::fmt::Display] and has a `render` method, both of which are
//! defined for the empty case too.
//!
//! ## Logging
//!
//! The crate emits [tracing](https://docs.rs/tracing) events but never installs a subscriber.
//!
//! ## Naming conventions
//! * Traits – adjectives or capabilities (e.g., [Nodelike])
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms with the exception of getters and factories, which
//!             use substantives (i.e., omit a `get_` prefix) much like the standard library.

pub mod arena;
pub mod complexity;
pub mod config;
pub mod errors;
pub mod graph;
pub mod linked_list;
pub mod queue;
pub mod sequence;
pub mod stack;
pub mod traversal;
pub mod tree;
pub mod value;

pub use arena::{Arena, ArenaIndex};
pub use complexity::{Complexity, ComplexityDemo, Timed};
pub use config::DemoConfig;
pub use errors::PrimerError;
pub use graph::Graph;
pub use linked_list::{LinkedList, ListNode};
pub use queue::Queue;
pub use sequence::DynamicSequence;
pub use stack::Stack;
pub use traversal::{
    Nodelike, Order,
    Order::{Inorder, LevelOrder, Postorder, Preorder},
};
pub use tree::{BinaryTree, TreeNode};
pub use value::Value;
