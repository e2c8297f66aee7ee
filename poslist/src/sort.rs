// PosList - poslist
// Module: Insertion Sort over the List Contract
// SW-REQ-ID: REQ_LIST_005
//
// Copyright (c) 2025 The PosList Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Sorting for positional lists.
//!
//! The sort is written purely against the [`PositionalList`] contract, so it
//! runs unchanged on every backing. It never reads a backing's internals and
//! never assumes anything about positional access cost beyond the contract.

use poslist_error::Result;

use crate::traits::PositionalList;

/// Sorts `list` into ascending order with a stable insertion sort.
///
/// The algorithm only uses `is_empty`, `len`, `get`, and `set`, so any
/// [`PositionalList`] backing works, including `dyn` objects. Entries that
/// compare equal keep their relative order.
///
/// Worst case cost is O(n^2) contract calls; each call additionally pays the
/// backing's own positional access cost.
///
/// # Errors
///
/// Propagates access errors from the backing. All positions are derived
/// from `len()`, so an error can only surface if the backing breaks the
/// contract mid-sort.
///
/// # Examples
///
/// ```
/// use poslist::prelude::*;
///
/// let mut list = BoundedList::<u32, 64>::try_from(&[3, 1, 2][..])?;
/// insertion_sort(&mut list)?;
///
/// assert_eq!(list.get(1)?, 1);
/// assert_eq!(list.get(2)?, 2);
/// assert_eq!(list.get(3)?, 3);
/// # Ok::<(), poslist::Error>(())
/// ```
pub fn insertion_sort<T, L>(list: &mut L) -> Result<()>
where
    T: Clone + Ord,
    L: PositionalList<T> + ?Sized,
{
    if list.is_empty() {
        return Ok(());
    }

    let n = list.len();
    for unsorted in 2..=n {
        let key = list.get(unsorted)?;

        // Shift strictly greater sorted entries one position toward the
        // tail until the slot for `key` opens. Stopping at the first entry
        // `<= key` keeps equal entries in their original order.
        let mut slot = unsorted;
        while slot > 1 {
            let prior = list.get(slot - 1)?;
            if prior <= key {
                break;
            }
            list.set(slot, prior)?;
            slot -= 1;
        }
        list.set(slot, key)?;
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounded::BoundedList;

    fn entries(list: &impl PositionalList<u32>) -> Vec<u32> {
        (1..=list.len())
            .map(|position| list.get(position))
            .collect::<Result<Vec<_>>>()
            .unwrap_or_default()
    }

    #[test]
    fn test_sort_empty_list() -> Result<()> {
        let mut list = BoundedList::<u32, 64>::new();
        insertion_sort(&mut list)?;
        assert!(list.is_empty());
        Ok(())
    }

    #[test]
    fn test_sort_single_entry() -> Result<()> {
        let mut list = BoundedList::<u32, 64>::try_from(&[7][..])?;
        insertion_sort(&mut list)?;
        assert_eq!(entries(&list), [7]);
        Ok(())
    }

    #[test]
    fn test_sort_reversed_input() -> Result<()> {
        let mut list = BoundedList::<u32, 64>::try_from(&[5, 4, 3, 2, 1][..])?;
        insertion_sort(&mut list)?;
        assert_eq!(entries(&list), [1, 2, 3, 4, 5]);
        Ok(())
    }

    #[test]
    fn test_sort_already_sorted_input() -> Result<()> {
        let mut list = BoundedList::<u32, 64>::try_from(&[1, 2, 3][..])?;
        insertion_sort(&mut list)?;
        assert_eq!(entries(&list), [1, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_sort_with_duplicates() -> Result<()> {
        let mut list = BoundedList::<u32, 64>::try_from(&[2, 1, 2, 1, 3][..])?;
        insertion_sort(&mut list)?;
        assert_eq!(entries(&list), [1, 1, 2, 2, 3]);
        Ok(())
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_sort_chained_backing() -> Result<()> {
        use crate::chained::ChainedList;

        let mut list = ChainedList::new();
        for value in [9u32, 1, 8, 2, 7] {
            assert!(list.insert(1, value));
        }

        insertion_sort(&mut list)?;

        assert_eq!(list.get(1)?, 1);
        assert_eq!(list.get(2)?, 2);
        assert_eq!(list.get(3)?, 7);
        assert_eq!(list.get(4)?, 8);
        assert_eq!(list.get(5)?, 9);
        Ok(())
    }

    #[test]
    fn test_sort_through_dyn_object() -> Result<()> {
        let mut list = BoundedList::<u32, 64>::try_from(&[3, 1, 2][..])?;
        let dynamic: &mut dyn PositionalList<u32> = &mut list;

        insertion_sort(dynamic)?;

        assert_eq!(entries(&list), [1, 2, 3]);
        Ok(())
    }

    /// Ordered by `key` alone; `tag` records the input order.
    #[derive(Clone, Debug)]
    struct Track {
        key: u32,
        tag: u32,
    }

    impl PartialEq for Track {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Track {}

    impl PartialOrd for Track {
        fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Track {
        fn cmp(&self, other: &Self) -> core::cmp::Ordering {
            self.key.cmp(&other.key)
        }
    }

    #[test]
    fn test_sort_is_stable() -> Result<()> {
        let mut list = BoundedList::<Track, 64>::new();
        for (position, (key, tag)) in [(2, 0), (1, 1), (2, 2), (1, 3)].iter().enumerate() {
            assert!(list.insert(position + 1, Track { key: *key, tag: *tag }));
        }

        insertion_sort(&mut list)?;

        let tags: Vec<u32> = (1..=list.len())
            .map(|position| list.get(position).map(|track| track.tag))
            .collect::<Result<Vec<_>>>()?;
        assert_eq!(tags, [1, 3, 0, 2]);
        Ok(())
    }
}
