// PosList - poslist
// Module: ChainedList - Owned singly-linked positional list
// SW-REQ-ID: REQ_LIST_003
//
// Copyright (c) 2025 The PosList Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Chained positional list built from owned heap nodes.
//!
//! `ChainedList<T>` links `Box`ed nodes in a single direction. Each node
//! owns its successor, so the borrow checker alone guarantees the chain has
//! no aliases.
//!
//! # Characteristics
//!
//! - **Unbounded**: Grows one node per entry, no capacity to size up front
//! - **Positional walk**: Reaching position `p` costs O(p)
//! - **Head editing is O(1)**: Position 1 never walks the chain
//! - **Iterative teardown**: `clear` and `Drop` unlink front to back

use crate::prelude::*;
use crate::traits::{
    position_error,
    valid_entry_position,
    valid_insert_position,
};

/// One link in the chain.
struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// A positional list backed by owned singly-linked nodes.
///
/// # Invariants
///
/// 1. `len` equals the number of reachable nodes
/// 2. The node at position `p` is `p - 1` hops from `head`
///
/// # Examples
///
/// ```
/// use poslist::prelude::*;
///
/// let mut list = ChainedList::new();
/// assert!(list.insert(1, 10));
/// assert!(list.insert(1, 20));
///
/// assert_eq!(list.get(1)?, 20);
/// assert_eq!(list.get(2)?, 10);
/// # Ok::<(), poslist::Error>(())
/// ```
pub struct ChainedList<T> {
    /// First node of the chain, `None` when empty
    head: Option<Box<Node<T>>>,

    /// Number of entries currently stored
    len: usize,
}

impl<T> ChainedList<T> {
    /// Creates a new empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Walks the chain to the node at `position`.
    ///
    /// Callers must have validated `position` against `len` first.
    fn node_at(&self, position: usize) -> Option<&Node<T>> {
        debug_assert!(valid_entry_position(position, self.len));

        let mut current = self.head.as_deref();
        for _ in 1..position {
            current = current.and_then(|node| node.next.as_deref());
        }
        current
    }

    /// Mutable variant of [`Self::node_at`].
    fn node_at_mut(&mut self, position: usize) -> Option<&mut Node<T>> {
        debug_assert!(valid_entry_position(position, self.len));

        let mut current = self.head.as_deref_mut();
        for _ in 1..position {
            current = current.and_then(|node| node.next.as_deref_mut());
        }
        current
    }

    /// Unlinks every node front to back.
    ///
    /// Teardown is iterative so a long chain cannot overflow the stack with
    /// recursive drops.
    fn unlink_all(&mut self) {
        while let Some(node) = self.head.take() {
            self.head = node.next;
        }
        self.len = 0;
    }
}

impl<T: Clone> PositionalList<T> for ChainedList<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn insert(&mut self, position: usize, value: T) -> bool {
        if !valid_insert_position(position, self.len) {
            return false;
        }

        if position == 1 {
            let node = Box::new(Node {
                value,
                next: self.head.take(),
            });
            self.head = Some(node);
        } else {
            let Some(prev) = self.node_at_mut(position - 1) else {
                return false;
            };
            let node = Box::new(Node {
                value,
                next: prev.next.take(),
            });
            prev.next = Some(node);
        }

        self.len += 1;
        true
    }

    fn remove(&mut self, position: usize) -> bool {
        if !valid_entry_position(position, self.len) {
            return false;
        }

        if position == 1 {
            let Some(node) = self.head.take() else {
                return false;
            };
            self.head = node.next;
        } else {
            let Some(prev) = self.node_at_mut(position - 1) else {
                return false;
            };
            let Some(target) = prev.next.take() else {
                return false;
            };
            prev.next = target.next;
        }

        self.len -= 1;
        true
    }

    fn clear(&mut self) {
        self.unlink_all();
    }

    fn get(&self, position: usize) -> Result<T> {
        if !valid_entry_position(position, self.len) {
            return Err(position_error(self.len));
        }

        match self.node_at(position) {
            Some(node) => Ok(node.value.clone()),
            None => Err(position_error(self.len)),
        }
    }

    fn set(&mut self, position: usize, value: T) -> Result<()> {
        if !valid_entry_position(position, self.len) {
            return Err(position_error(self.len));
        }

        match self.node_at_mut(position) {
            Some(node) => {
                node.value = value;
                Ok(())
            },
            None => Err(position_error(self.len)),
        }
    }
}

// RAII: Automatic cleanup on drop
impl<T> Drop for ChainedList<T> {
    fn drop(&mut self) {
        self.unlink_all();
    }
}

// Default: empty list
impl<T> Default for ChainedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// Clone implementation (requires T: Clone)
impl<T: Clone> Clone for ChainedList<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        let mut tail = &mut copy.head;
        let mut current = self.head.as_deref();

        while let Some(node) = current {
            let link = tail.insert(Box::new(Node {
                value: node.value.clone(),
                next: None,
            }));
            tail = &mut link.next;
            current = node.next.as_deref();
            copy.len += 1;
        }
        copy
    }
}

impl<T: PartialEq> PartialEq for ChainedList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }

        let mut left = self.head.as_deref();
        let mut right = other.head.as_deref();
        while let (Some(a), Some(b)) = (left, right) {
            if a.value != b.value {
                return false;
            }
            left = a.next.as_deref();
            right = b.next.as_deref();
        }
        true
    }
}

impl<T: Eq> Eq for ChainedList<T> {}

impl<T: fmt::Debug> fmt::Debug for ChainedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_list();
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            entries.entry(&node.value);
            current = node.next.as_deref();
        }
        entries.finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
