// PosList - poslist-error
// Module: PosList Error Helpers
// SW-REQ-ID: REQ_ERR_001
//
// Copyright (c) 2025 The PosList Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error helper functions for common error patterns.
//!
//! This module provides helper functions for creating the errors reported by
//! list operations, so call sites name the condition instead of assembling
//! category and code by hand.

use crate::{codes, Error, ErrorCategory};

/// Create a position out of range error
#[must_use]
pub const fn position_out_of_range_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Validation, codes::POSITION_OUT_OF_RANGE, message)
}

/// Create an empty list access error
#[must_use]
pub const fn empty_list_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Validation, codes::EMPTY_LIST_ACCESS, message)
}

/// Create a capacity exceeded error
#[must_use]
pub const fn capacity_exceeded_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Capacity, codes::CAPACITY_EXCEEDED, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_match_factories() {
        let helper = position_out_of_range_error("position out of range");
        assert_eq!(helper.code, codes::POSITION_OUT_OF_RANGE);
        assert_eq!(helper.category, ErrorCategory::Validation);

        let helper = empty_list_error("list is empty");
        assert_eq!(helper.code, codes::EMPTY_LIST_ACCESS);
        assert_eq!(helper.category, ErrorCategory::Validation);

        let helper = capacity_exceeded_error("list is full");
        assert_eq!(helper.code, codes::CAPACITY_EXCEEDED);
        assert_eq!(helper.category, ErrorCategory::Capacity);
    }
}
