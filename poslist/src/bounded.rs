// PosList - poslist
// Module: BoundedList - Inline-storage positional list
// SW-REQ-ID: REQ_LIST_002, REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 The PosList Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

// Allow unsafe code for MaybeUninit operations (documented and verified via KANI)
#![allow(unsafe_code)]

//! Bounded positional list with inline storage and compile-time capacity.
//!
//! `BoundedList<T, N>` keeps all entries in an inline array. No heap
//! allocation takes place at any point, which makes the type usable on
//! targets without an allocator.
//!
//! # Characteristics
//!
//! - **Zero allocation**: All memory is inline `[MaybeUninit<T>; N]`
//! - **Contiguous storage**: Entry at position `p` lives in slot `p - 1`
//! - **Shift-based editing**: `insert` and `remove` move trailing entries
//! - **RAII cleanup**: Automatic Drop implementation
//! - **Capacity floor**: Instantiations below [`MIN_CAPACITY`] fail the build

use core::fmt;
use core::marker::PhantomData;
use core::mem::MaybeUninit;

use poslist_error::{capacity_exceeded_error, Error, Result};

use crate::traits::{
    position_error,
    valid_entry_position,
    valid_insert_position,
    PositionalList,
};

/// Smallest capacity a [`BoundedList`] may be instantiated with.
///
/// The floor exists so undersized fixed backings are rejected while the
/// program is being built rather than once it runs. The check fires the
/// first time a given `N` is used.
pub const MIN_CAPACITY: usize = 64;

/// A positional list with compile-time capacity and inline storage.
///
/// # Invariants
///
/// 1. `len <= N` always holds
/// 2. Slots `0..len` are initialized, slots `len..N` are not
/// 3. The entry at position `p` occupies slot `p - 1`
///
/// # Examples
///
/// ```
/// use poslist::prelude::*;
///
/// let mut list = BoundedList::<u32, 64>::new();
/// assert!(list.insert(1, 10));
/// assert!(list.insert(2, 20));
///
/// assert_eq!(list.get(1)?, 10);
/// assert_eq!(list.get(2)?, 20);
/// assert_eq!(list.len(), 2);
/// # Ok::<(), poslist::Error>(())
/// ```
pub struct BoundedList<T, const N: usize> {
    /// Inline storage for entries
    data: [MaybeUninit<T>; N],

    /// Number of entries currently stored
    /// Invariant: len <= N
    len: usize,

    /// Marker for drop checker
    _marker: PhantomData<T>,
}

impl<T, const N: usize> BoundedList<T, N> {
    /// Capacity contract for this instantiation.
    const CAPACITY_OK: () = assert!(
        N >= MIN_CAPACITY,
        "BoundedList capacity must be at least MIN_CAPACITY"
    );

    /// Creates a new empty list.
    ///
    /// Referencing this constructor with `N < MIN_CAPACITY` fails the build.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        let () = Self::CAPACITY_OK;

        Self {
            data: unsafe { MaybeUninit::uninit().assume_init() },
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the compile-time capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns `true` if the list is full.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// View of the initialized prefix.
    fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are initialized and contiguous
        unsafe { core::slice::from_raw_parts(self.data.as_ptr().cast::<T>(), self.len) }
    }

    /// Drops every initialized entry and resets the length.
    fn drop_entries(&mut self) {
        let mut slot = 0;
        while slot < self.len {
            // SAFETY: slot < len, so the entry is initialized
            unsafe {
                self.data[slot].assume_init_drop();
            }
            slot += 1;
        }
        self.len = 0;
    }
}

impl<T: Clone, const N: usize> PositionalList<T> for BoundedList<T, N> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn insert(&mut self, position: usize, value: T) -> bool {
        let can_insert = valid_insert_position(position, self.len) && self.len < N;
        if !can_insert {
            return false;
        }

        let index = position - 1;

        // Shift from the high end down so no entry is overwritten before it
        // has been moved.
        let mut slot = self.len;
        while slot > index {
            // SAFETY: slot - 1 < len, so the source is initialized; slot <=
            // len < N is in bounds and holds no live value.
            let moved = unsafe { self.data[slot - 1].assume_init_read() };
            self.data[slot].write(moved);
            slot -= 1;
        }

        self.data[index].write(value);
        self.len += 1;
        true
    }

    fn remove(&mut self, position: usize) -> bool {
        if !valid_entry_position(position, self.len) {
            return false;
        }

        let index = position - 1;
        // SAFETY: index < len, so the entry is initialized
        unsafe {
            self.data[index].assume_init_drop();
        }

        // Shift the tail one slot toward the head.
        let mut slot = index;
        while slot + 1 < self.len {
            // SAFETY: slot + 1 < len, so the source is initialized; the value
            // previously at slot has been dropped or moved out.
            let moved = unsafe { self.data[slot + 1].assume_init_read() };
            self.data[slot].write(moved);
            slot += 1;
        }

        self.len -= 1;
        true
    }

    fn clear(&mut self) {
        self.drop_entries();
    }

    fn get(&self, position: usize) -> Result<T> {
        if !valid_entry_position(position, self.len) {
            return Err(position_error(self.len));
        }

        // SAFETY: position - 1 < len, so the entry is initialized
        Ok(unsafe { self.data[position - 1].assume_init_ref() }.clone())
    }

    fn set(&mut self, position: usize, value: T) -> Result<()> {
        if !valid_entry_position(position, self.len) {
            return Err(position_error(self.len));
        }

        // SAFETY: position - 1 < len, so the entry is initialized and
        // assigning through the reference drops the replaced value.
        *unsafe { self.data[position - 1].assume_init_mut() } = value;
        Ok(())
    }
}

// RAII: Automatic cleanup on drop
impl<T, const N: usize> Drop for BoundedList<T, N> {
    fn drop(&mut self) {
        self.drop_entries();
    }
}

// Default: empty list
impl<T, const N: usize> Default for BoundedList<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// Clone implementation (requires T: Clone)
impl<T: Clone, const N: usize> Clone for BoundedList<T, N> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        for value in self.as_slice() {
            copy.data[copy.len].write(value.clone());
            copy.len += 1;
        }
        copy
    }
}

impl<T: PartialEq, const N: usize> PartialEq for BoundedList<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for BoundedList<T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for BoundedList<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Builds a list from a slice, cloning every entry in order.
impl<T: Clone, const N: usize> TryFrom<&[T]> for BoundedList<T, N> {
    type Error = Error;

    /// # Errors
    ///
    /// Returns a `CAPACITY_EXCEEDED` error when the slice holds more entries
    /// than the list can store.
    fn try_from(values: &[T]) -> Result<Self> {
        if values.len() > N {
            return Err(capacity_exceeded_error("slice exceeds list capacity"));
        }

        let mut list = Self::new();
        for value in values {
            list.data[list.len].write(value.clone());
            list.len += 1;
        }
        Ok(list)
    }
}

// ============================================================================
// KANI Formal Verification
// ============================================================================

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    fn verify_fresh_list_empty() {
        let list: BoundedList<u8, 64> = BoundedList::new();

        assert!(list.is_empty());
        assert!(list.len() == 0);
        assert!(list.capacity() == 64);
        assert!(!list.is_full());
    }

    #[kani::proof]
    fn verify_insert_length_bounds() {
        let mut list: BoundedList<u8, 64> = BoundedList::new();

        // Position 0 and positions past len + 1 are rejected
        assert!(!list.insert(0, 1));
        assert!(!list.insert(2, 1));
        assert!(list.len() == 0);

        assert!(list.insert(1, 10));
        assert!(list.insert(2, 20));
        assert!(list.len() == 2);
    }

    #[kani::proof]
    fn verify_entry_round_trip() {
        let mut list: BoundedList<u8, 64> = BoundedList::new();
        let value: u8 = kani::any();

        assert!(list.insert(1, value));
        assert!(list.get(1).unwrap() == value);

        let replacement: u8 = kani::any();
        list.set(1, replacement).unwrap();
        assert!(list.get(1).unwrap() == replacement);
    }

    #[kani::proof]
    fn verify_remove_restores_length() {
        let mut list: BoundedList<u8, 64> = BoundedList::new();

        assert!(!list.remove(1)); // Empty list
        assert!(list.insert(1, 10));
        assert!(list.insert(2, 20));
        assert!(list.remove(1));
        assert!(list.len() == 1);
        assert!(list.get(1).unwrap() == 20);
    }
}

// ============================================================================
// Tests
// ============================================================================
