// PosList - poslist
// Module: PositionalList Contract
// SW-REQ-ID: REQ_LIST_001
//
// Copyright (c) 2025 The PosList Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The positional list contract shared by every backing.
//!
//! A positional list stores entries addressed by 1-based position. Position
//! `1` is the head of the list and position `len()` the last entry. The
//! contract deliberately stays small: construction, capacity concerns, and
//! iteration are left to the individual backings.

use poslist_error::{
    empty_list_error,
    position_out_of_range_error,
    Error,
    Result,
};

/// Contract for 1-based positional lists.
///
/// A list holding `n` entries exposes positions `1..=n`; `insert`
/// additionally accepts position `n + 1` to append. Every backing behaves
/// identically through this trait, so generic code and
/// `dyn PositionalList<T>` objects can swap backings freely.
///
/// Entries are read by value, which is why `T: Clone` is part of the
/// contract. Backings that hand out shared nodes could not return plain
/// references without leaking their interior mutability scheme.
pub trait PositionalList<T: Clone> {
    /// Returns the number of entries currently stored.
    #[must_use]
    fn len(&self) -> usize;

    /// Returns `true` when the list holds no entries.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `value` at `position`, shifting later entries one position
    /// toward the tail.
    ///
    /// Valid positions are `1..=len() + 1`, where `len() + 1` appends.
    /// Returns `false` and leaves the list unchanged when the position is
    /// invalid or a fixed-capacity backing is already full.
    #[must_use]
    fn insert(&mut self, position: usize, value: T) -> bool;

    /// Removes the entry at `position`, shifting later entries one position
    /// toward the head.
    ///
    /// Valid positions are `1..=len()`. Returns `false` and leaves the list
    /// unchanged when the position is invalid.
    #[must_use]
    fn remove(&mut self, position: usize) -> bool;

    /// Removes every entry, leaving the list empty and reusable.
    fn clear(&mut self);

    /// Returns a copy of the entry at `position`.
    ///
    /// # Errors
    ///
    /// Returns an [`EMPTY_LIST_ACCESS`](poslist_error::codes::EMPTY_LIST_ACCESS)
    /// error when the list is empty, and a
    /// [`POSITION_OUT_OF_RANGE`](poslist_error::codes::POSITION_OUT_OF_RANGE)
    /// error when `position` is outside `1..=len()`.
    fn get(&self, position: usize) -> Result<T>;

    /// Replaces the entry at `position` with `value`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`get`](Self::get); on error the list is unchanged.
    fn set(&mut self, position: usize, value: T) -> Result<()>;
}

/// Returns `true` when `position` addresses an existing entry.
#[inline]
pub(crate) const fn valid_entry_position(position: usize, len: usize) -> bool {
    position >= 1 && position <= len
}

/// Returns `true` when `position` is a valid insertion point.
#[inline]
pub(crate) const fn valid_insert_position(position: usize, len: usize) -> bool {
    // position - 1 cannot underflow thanks to the short-circuit
    position >= 1 && position - 1 <= len
}

/// Error for an entry access outside the valid range.
///
/// An empty list reports `EMPTY_LIST_ACCESS` so callers can tell "nothing to
/// read" apart from "wrong position".
#[inline]
pub(crate) const fn position_error(len: usize) -> Error {
    if len == 0 {
        empty_list_error("list is empty")
    } else {
        position_out_of_range_error("position out of range")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use poslist_error::codes;

    use super::*;
    use crate::bounded::BoundedList;

    #[test]
    fn test_entry_position_bounds() {
        assert!(!valid_entry_position(0, 3));
        assert!(valid_entry_position(1, 3));
        assert!(valid_entry_position(3, 3));
        assert!(!valid_entry_position(4, 3));
        assert!(!valid_entry_position(1, 0));
    }

    #[test]
    fn test_insert_position_bounds() {
        assert!(!valid_insert_position(0, 3));
        assert!(valid_insert_position(1, 0));
        assert!(valid_insert_position(4, 3));
        assert!(!valid_insert_position(5, 3));
    }

    #[test]
    fn test_position_error_distinguishes_empty() {
        assert_eq!(position_error(0).code, codes::EMPTY_LIST_ACCESS);
        assert_eq!(position_error(3).code, codes::POSITION_OUT_OF_RANGE);
    }

    #[test]
    fn test_contract_is_object_safe() {
        let mut list = BoundedList::<u8, 64>::new();
        let dynamic: &mut dyn PositionalList<u8> = &mut list;

        assert!(dynamic.insert(1, 7));
        assert_eq!(dynamic.len(), 1);
        assert!(!dynamic.is_empty());
    }
}
