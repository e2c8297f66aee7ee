// PosList - poslist-error
// Module: PosList Error Codes
// SW-REQ-ID: REQ_ERR_001
//
// Copyright (c) 2025 The PosList Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for PosList
//!
//! Codes are grouped by category: validation codes occupy the 1000 range
//! and capacity codes the 2000 range.

/// Position outside the valid range for the attempted operation
pub const POSITION_OUT_OF_RANGE: u16 = 1000;
/// Read or write attempted on an empty list
pub const EMPTY_LIST_ACCESS: u16 = 1001;

// Capacity error codes (2000-2999)
/// Fixed-capacity list cannot hold the requested number of entries
pub const CAPACITY_EXCEEDED: u16 = 2000;
