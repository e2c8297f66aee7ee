// PosList - poslist
// Module: PosList Library Root
// SW-REQ-ID: REQ_LIST_001
//
// Copyright (c) 2025 The PosList Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Positional list abstract data type for the PosList project.
//!
//! This crate provides one list contract with three interchangeable
//! backings, ensuring value semantics and consistent error handling across
//! all of them. It supports three configurations:
//! - `std`: Full standard library support
//! - `no_std` + `alloc`: No standard library but with allocation
//! - `no_std` without `alloc`: Only the inline-storage backing
//!
//! # Feature Flags
//!
//! - `std`: Enables standard library support (implies `alloc`)
//! - `alloc`: Enables the heap-backed lists for `no_std` environments
//!
//! # Backings
//!
//! | Type | Storage | Availability |
//! |------|---------|--------------|
//! | [`BoundedList`] | inline array, fixed capacity | always |
//! | [`ChainedList`] | owned heap nodes | `alloc` |
//! | [`SharedChainedList`] | reference-counted heap nodes | `alloc` |
//!
//! All three implement [`PositionalList`]. Positions are 1-based; position
//! `1` is always the head of the list. Generic code written against the
//! contract runs on any backing:
//!
//! ```
//! use poslist::prelude::*;
//!
//! fn rotate_front<T: Clone>(list: &mut dyn PositionalList<T>) -> bool {
//!     match list.get(1) {
//!         Ok(front) => list.remove(1) && list.insert(list.len() + 1, front),
//!         Err(_) => false,
//!     }
//! }
//!
//! let mut list = ChainedList::new();
//! assert!(list.insert(1, 2));
//! assert!(list.insert(1, 1));
//! assert!(rotate_front(&mut list));
//! assert_eq!(list.get(1)?, 2);
//! # Ok::<(), poslist::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Core library is always available
extern crate core;

#[cfg(feature = "std")]
extern crate std;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
extern crate alloc;

// Prelude module for consistent imports across std and no_std environments
pub mod prelude;

// Re-export common types from prelude
pub use prelude::*;
// Re-export error related types for convenience
pub use poslist_error::{codes, Error, ErrorCategory, ErrorSource, Result};

// Core modules - always available in all configurations
/// Inline-storage bounded list
pub mod bounded;
/// Sorting over the list contract
pub mod sort;
/// The positional list contract
pub mod traits;

// Modules that require allocation
#[cfg(feature = "alloc")]
/// Owned singly-linked list
pub mod chained;
#[cfg(feature = "alloc")]
/// Reference-counted singly-linked list
pub mod shared;

// Re-export the most important types - core types always available
pub use bounded::{BoundedList, MIN_CAPACITY};
#[cfg(feature = "alloc")]
pub use chained::ChainedList;
#[cfg(feature = "alloc")]
pub use shared::SharedChainedList;
pub use sort::insertion_sort;
pub use traits::PositionalList;
