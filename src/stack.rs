//! Last-in-first-out stack on top of a [DynamicSequence]. The end of the sequence is the top.

use crate::DynamicSequence;
use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: DynamicSequence<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack {
            items: DynamicSequence::new(),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.append(item);
    }

    /// Removes the most recently pushed item. `None` on an empty stack.
    pub fn pop(&mut self) -> Option<T> {
        self.items.remove_last()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items from the top down to the bottom
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().rev()
    }
}

impl<T: fmt::Display> Stack<T> {
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// One line per item, top first and numbered from `size` down to 1.
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty stack");
        }
        for (position, item) in (1..=self.size()).rev().zip(self.iter()) {
            if position != self.size() {
                writeln!(f)?;
            }
            write!(f, "{position}. {item}")?;
        }
        Ok(())
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}
