// PosList - poslist
// Module: SharedChainedList - Shared-node positional list
// SW-REQ-ID: REQ_LIST_004
//
// Copyright (c) 2025 The PosList Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Chained positional list built from reference-counted nodes.
//!
//! `SharedChainedList<T>` stores its chain as `Rc<RefCell<_>>` links, the
//! shape used when nodes must be handed to cursors or auxiliary structures.
//! This crate keeps every handle internal: the public surface is exactly the
//! [`PositionalList`] contract, and aliasing never leaks to callers.
//!
//! # Characteristics
//!
//! - **Shared ownership**: Links are `Rc` handles, cloned while walking
//! - **Interior mutability**: Node edits go through `RefCell` borrows
//! - **Single-threaded**: `Rc` makes the list neither `Send` nor `Sync`
//! - **Iterative teardown**: `clear` and `Drop` unlink front to back
//!
//! Each list operation holds at most one `RefCell` borrow at a time, so the
//! contract methods cannot panic on re-borrowing.

use crate::prelude::*;
use crate::traits::{
    position_error,
    valid_entry_position,
    valid_insert_position,
};

/// Shared handle to one node, `None` at the end of the chain.
type Link<T> = Option<Rc<RefCell<SharedNode<T>>>>;

/// One link in the chain.
struct SharedNode<T> {
    value: T,
    next: Link<T>,
}

/// A positional list backed by reference-counted singly-linked nodes.
///
/// # Invariants
///
/// 1. `len` equals the number of reachable nodes
/// 2. The node at position `p` is `p - 1` hops from `head`
/// 3. No node handle escapes the list
///
/// # Examples
///
/// ```
/// use poslist::prelude::*;
///
/// let mut list = SharedChainedList::new();
/// assert!(list.insert(1, "b"));
/// assert!(list.insert(1, "a"));
///
/// assert_eq!(list.get(1)?, "a");
/// assert_eq!(list.get(2)?, "b");
/// # Ok::<(), poslist::Error>(())
/// ```
pub struct SharedChainedList<T> {
    /// First node of the chain, `None` when empty
    head: Link<T>,

    /// Number of entries currently stored
    len: usize,
}

impl<T> SharedChainedList<T> {
    /// Creates a new empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Walks the chain and returns a handle to the node at `position`.
    ///
    /// Callers must have validated `position` against `len` first. Each hop
    /// borrows one node briefly; no borrow is held across hops.
    fn node_at(&self, position: usize) -> Link<T> {
        debug_assert!(valid_entry_position(position, self.len));

        let mut current = self.head.clone();
        for _ in 1..position {
            current = current.and_then(|node| node.borrow().next.clone());
        }
        current
    }

    /// Unlinks every node front to back.
    ///
    /// Teardown is iterative so a long chain cannot overflow the stack with
    /// recursive drops.
    fn unlink_all(&mut self) {
        while let Some(node) = self.head.take() {
            self.head = node.borrow_mut().next.take();
        }
        self.len = 0;
    }
}

impl<T: Clone> PositionalList<T> for SharedChainedList<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn insert(&mut self, position: usize, value: T) -> bool {
        if !valid_insert_position(position, self.len) {
            return false;
        }

        if position == 1 {
            let node = Rc::new(RefCell::new(SharedNode {
                value,
                next: self.head.take(),
            }));
            self.head = Some(node);
        } else {
            let Some(prev) = self.node_at(position - 1) else {
                return false;
            };
            let mut prev_node = prev.borrow_mut();
            let node = Rc::new(RefCell::new(SharedNode {
                value,
                next: prev_node.next.take(),
            }));
            prev_node.next = Some(node);
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
            self.head = node.borrow_mut().next.take();
        } else {
            let Some(prev) = self.node_at(position - 1) else {
                return false;
            };
            let mut prev_node = prev.borrow_mut();
            let Some(target) = prev_node.next.take() else {
                return false;
            };
            // Distinct nodes, so the two borrows cannot collide.
            prev_node.next = target.borrow_mut().next.take();
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
            Some(node) => Ok(node.borrow().value.clone()),
            None => Err(position_error(self.len)),
        }
    }

    fn set(&mut self, position: usize, value: T) -> Result<()> {
        if !valid_entry_position(position, self.len) {
            return Err(position_error(self.len));
        }

        match self.node_at(position) {
            Some(node) => {
                node.borrow_mut().value = value;
                Ok(())
            },
            None => Err(position_error(self.len)),
        }
    }
}

// RAII: Automatic cleanup on drop
impl<T> Drop for SharedChainedList<T> {
    fn drop(&mut self) {
        self.unlink_all();
    }
}

// Default: empty list
impl<T> Default for SharedChainedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// Clone implementation (requires T: Clone)
impl<T: Clone> Clone for SharedChainedList<T> {
    fn clone(&self) -> Self {
        // Collect values front to back, then relink back to front so the
        // copy owns a fresh chain instead of sharing nodes.
        let mut values = Vec::new();
        let mut current = self.head.clone();
        while let Some(node) = current {
            let node_ref = node.borrow();
            values.push(node_ref.value.clone());
            current = node_ref.next.clone();
        }

        let mut copy = Self::new();
        while let Some(value) = values.pop() {
            let node = Rc::new(RefCell::new(SharedNode {
                value,
                next: copy.head.take(),
            }));
            copy.head = Some(node);
            copy.len += 1;
        }
        copy
    }
}

impl<T: PartialEq> PartialEq for SharedChainedList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }

        let mut left = self.head.clone();
        let mut right = other.head.clone();
        while let (Some(a), Some(b)) = (left, right) {
            let a_node = a.borrow();
            let b_node = b.borrow();
            if a_node.value != b_node.value {
                return false;
            }
            left = a_node.next.clone();
            right = b_node.next.clone();
        }
        true
    }
}

impl<T: Eq> Eq for SharedChainedList<T> {}

impl<T: fmt::Debug> fmt::Debug for SharedChainedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_list();
        let mut current = self.head.clone();
        while let Some(node) = current {
            let node_ref = node.borrow();
            entries.entry(&node_ref.value);
            current = node_ref.next.clone();
        }
        entries.finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
