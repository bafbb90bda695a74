//! [Arena memory allocated](https://en.wikipedia.org/wiki/Region-based_memory_management)
//! node storage for the pointer-chased structures ([LinkedList](crate::LinkedList) and
//! [BinaryTree](crate::BinaryTree)).
//!
//! Nodes live in a single `Vec` and refer to each other by [ArenaIndex]. Released slots are
//! put on a free list and reused by later allocations. Every slot carries a generation that is
//! bumped on release, so an old handle never resolves to the node that later reuses its slot.

use crate::PrimerError;
use core::fmt;

/// Stable handle to a node in an [Arena].
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct ArenaIndex {
    slot: usize,
    generation: u32,
}

impl ArenaIndex {
    /// Position in the arena's backing storage
    pub fn slot(&self) -> usize {
        self.slot
    }
}

impl fmt::Display for ArenaIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.slot, self.generation)
    }
}

#[derive(Debug)]
enum Slot<Node> {
    Occupied { generation: u32, node: Node },
    Vacant { generation: u32 },
}

impl<Node> Slot<Node> {
    fn generation(&self) -> u32 {
        match self {
            Slot::Occupied { generation, .. } | Slot::Vacant { generation } => *generation,
        }
    }
}

/// Slot storage with an explicit free list.
#[derive(Debug)]
pub struct Arena<Node> {
    slots: Vec<Slot<Node>>,
    free: Vec<usize>,
    len: usize,
}

impl<Node> Arena<Node> {
    pub fn new() -> Self {
        Arena {
            slots: vec![],
            free: vec![],
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            free: vec![],
            len: 0,
        }
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores a node, reusing a released slot when one is available.
    pub fn alloc(&mut self, node: Node) -> ArenaIndex {
        self.len += 1;
        if let Some(slot) = self.free.pop() {
            let generation = self.slots[slot].generation();
            self.slots[slot] = Slot::Occupied { generation, node };
            ArenaIndex { slot, generation }
        } else {
            let slot = self.slots.len();
            self.slots.push(Slot::Occupied { generation: 0, node });
            ArenaIndex { slot, generation: 0 }
        }
    }

    /// Like [Arena::alloc] for nodes that store their own handle.
    pub fn alloc_with(&mut self, build: impl FnOnce(ArenaIndex) -> Node) -> ArenaIndex {
        let index = match self.free.last() {
            Some(&slot) => ArenaIndex {
                slot,
                generation: self.slots[slot].generation(),
            },
            None => ArenaIndex {
                slot: self.slots.len(),
                generation: 0,
            },
        };
        let allocated = self.alloc(build(index));
        debug_assert_eq!(allocated, index);
        allocated
    }

    /// Releases the node behind `index` and hands it back to the caller.
    pub fn release(&mut self, index: ArenaIndex) -> Result<Node, PrimerError> {
        self.check(index)?;
        let vacant = Slot::Vacant {
            generation: index.generation.wrapping_add(1),
        };
        match std::mem::replace(&mut self.slots[index.slot], vacant) {
            Slot::Occupied { node, .. } => {
                self.free.push(index.slot);
                self.len -= 1;
                Ok(node)
            }
            // `check` guarantees the slot was occupied
            Slot::Vacant { .. } => Err(PrimerError::StaleHandle {
                slot: index.slot,
                generation: index.generation,
            }),
        }
    }

    /// Checked access that tells a stale handle apart from an unknown slot
    pub fn try_get(&self, index: ArenaIndex) -> Result<&Node, PrimerError> {
        match self.slots.get(index.slot) {
            None => Err(PrimerError::ReferenceOutOfBound(index.slot)),
            Some(Slot::Occupied { generation, node }) if *generation == index.generation => Ok(node),
            Some(_) => Err(PrimerError::StaleHandle {
                slot: index.slot,
                generation: index.generation,
            }),
        }
    }

    pub fn get(&self, index: ArenaIndex) -> Option<&Node> {
        self.try_get(index).ok()
    }

    pub fn get_mut(&mut self, index: ArenaIndex) -> Option<&mut Node> {
        match self.slots.get_mut(index.slot) {
            Some(Slot::Occupied { generation, node }) if *generation == index.generation => Some(node),
            _ => None,
        }
    }

    pub fn contains(&self, index: ArenaIndex) -> bool {
        self.get(index).is_some()
    }

    /// Drops all nodes. Generations survive so that old handles stay invalid.
    pub fn clear(&mut self) {
        self.free.clear();
        for (slot, entry) in self.slots.iter_mut().enumerate() {
            if matches!(entry, Slot::Occupied { .. }) {
                *entry = Slot::Vacant {
                    generation: entry.generation().wrapping_add(1),
                };
            }
            self.free.push(slot);
        }
        self.len = 0;
    }

    fn check(&self, index: ArenaIndex) -> Result<(), PrimerError> {
        self.try_get(index).map(|_| ())
    }
}

impl<Node> Default for Arena<Node> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Node> std::ops::Index<ArenaIndex> for Arena<Node> {
    type Output = Node;

    /// Panics on a stale handle. Only used internally on handles the container just followed.
    fn index(&self, index: ArenaIndex) -> &Self::Output {
        match self.try_get(index) {
            Ok(node) => node,
            Err(err) => panic!("Internal error. {err}"),
        }
    }
}

impl<Node> std::ops::IndexMut<ArenaIndex> for Arena<Node> {
    fn index_mut(&mut self, index: ArenaIndex) -> &mut Self::Output {
        match self.get_mut(index) {
            Some(node) => node,
            None => panic!("Internal error. Stale arena handle {index}"),
        }
    }
}
