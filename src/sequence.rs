//! A resizable, indexable sequence. Backs the [Stack](crate::Stack) and the data sets of the
//! [complexity demonstrations](crate::complexity).

use crate::{PrimerError, Value};
use core::fmt;
use itertools::Itertools;
use std::{convert::Infallible, str::FromStr};
use tracing::trace;

/// Ordered collection with index access (O(1)), append (O(1) amortized) and positional
/// insert/remove (O(n)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicSequence<T> {
    items: Vec<T>,
}

impl<T> DynamicSequence<T> {
    pub fn new() -> Self {
        DynamicSequence { items: vec![] }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        DynamicSequence {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&T, PrimerError> {
        let len = self.len();
        self.items.get(index).ok_or(PrimerError::IndexOutOfRange { index, len })
    }

    /// Overwrites the element at `index` and returns the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, PrimerError> {
        let len = self.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(PrimerError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, value))
    }

    pub fn append(&mut self, value: T) {
        self.items.push(value);
    }

    /// Inserts at `index` in `[0, len]`, shifting everything after it.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), PrimerError> {
        let len = self.len();
        if index > len {
            return Err(PrimerError::IndexOutOfRange { index, len });
        }
        trace!(index, len, "shifting {} elements", len - index);
        self.items.insert(index, value);
        Ok(())
    }

    pub fn remove_last(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn remove_at(&mut self, index: usize) -> Result<T, PrimerError> {
        let len = self.len();
        if index >= len {
            return Err(PrimerError::IndexOutOfRange { index, len });
        }
        Ok(self.items.remove(index))
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: PartialEq> DynamicSequence<T> {
    /// Index of the first element equal to `value`
    pub fn find(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }
}

impl<T: Clone> DynamicSequence<T> {
    /// Copies `[start, end)` into a new sequence.
    ///
    /// Negative bounds count from the end and out-of-range bounds are clamped, so this never
    /// fails. An empty sequence is returned when `start` lies at or after `end`.
    pub fn slice(&self, start: isize, end: isize) -> DynamicSequence<T> {
        let start = clamp_index(start, self.len());
        let end = clamp_index(end, self.len());
        if start >= end {
            return DynamicSequence::new();
        }
        self.items[start..end].to_vec().into()
    }
}

/// Resolves a possibly negative bound into `[0, len]`
fn clamp_index(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        (index as usize).min(len)
    }
}

impl<T: fmt::Display> DynamicSequence<T> {
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.items.iter().join(", "))
    }
}

impl<T> Default for DynamicSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for DynamicSequence<T> {
    fn from(items: Vec<T>) -> Self {
        DynamicSequence { items }
    }
}

impl<T> FromIterator<T> for DynamicSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        DynamicSequence {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for DynamicSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter)
    }
}

impl<T> IntoIterator for DynamicSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynamicSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Reads a whitespace separated line such as `"1 2 three"`.
impl FromStr for DynamicSequence<Value> {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse::<Value>).collect()
    }
}
