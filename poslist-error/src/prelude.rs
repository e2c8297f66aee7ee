// PosList - poslist-error
// Module: PosList Error Prelude
// SW-REQ-ID: REQ_ERR_001
//
// Copyright (c) 2025 The PosList Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for poslist-error
//!
//! This module provides a unified set of imports for both std and `no_std`
//! environments. It re-exports commonly used types and traits to ensure
//! consistency across all crates in the PosList project and simplify imports
//! in individual modules.

// Core imports for both std and no_std environments
pub use core::{
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
    str,
};

// Re-export helper functions for creating errors
pub use crate::helpers::*;
// Re-export error types from this crate
pub use crate::{
    codes,
    Error,
    ErrorCategory,
    ErrorSource,
    Result,
};
