// PosList - poslist
// Module: PosList Prelude
// SW-REQ-ID: REQ_LIST_001
//
// Copyright (c) 2025 The PosList Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for poslist
//!
//! This module provides a unified set of imports for both std and `no_std`
//! environments. Importing it brings the list contract, every available
//! backing, and the error vocabulary into scope with one line:
//!
//! ```
//! use poslist::prelude::*;
//!
//! let mut list = BoundedList::<u32, 64>::new();
//! assert!(list.insert(1, 42));
//! ```

// Core imports for both std and no_std environments
pub use core::{
    cell::RefCell,
    cmp::{
        Eq,
        Ord,
        PartialEq,
        PartialOrd,
    },
    convert::{
        TryFrom,
        TryInto,
    },
    fmt,
    fmt::{
        Debug,
        Display,
    },
};

// Heap types used by the chained backings
#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use alloc::{
    boxed::Box,
    rc::Rc,
    vec,
    vec::Vec,
};
#[cfg(feature = "std")]
pub use std::{
    boxed::Box,
    rc::Rc,
    vec,
    vec::Vec,
};

// Re-export everything from the error crate's prelude
pub use poslist_error::prelude::*;

// Re-export the list contract and the backings
pub use crate::bounded::{
    BoundedList,
    MIN_CAPACITY,
};
#[cfg(feature = "alloc")]
pub use crate::chained::ChainedList;
#[cfg(feature = "alloc")]
pub use crate::shared::SharedChainedList;
pub use crate::sort::insertion_sort;
pub use crate::traits::PositionalList;
