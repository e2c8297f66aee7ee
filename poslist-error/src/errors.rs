// PosList - poslist-error
// Module: PosList Error Types
// SW-REQ-ID: REQ_ERR_001
//
// Copyright (c) 2025 The PosList Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Unified error handling for PosList
//!
//! This module provides the error type shared by every list backing in the
//! PosList workspace. Errors are plain `Copy` values carrying a category, a
//! stable numeric code, and a static message, so they work unchanged in
//! `no_std` builds.

use core::fmt;

use crate::codes;

/// `Error` categories for PosList operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Invalid argument errors (positions outside the valid range)
    Validation = 1,
    /// Capacity errors (fixed-size backing cannot grow)
    Capacity   = 2,
}

/// Base trait for all error types - `no_std` version
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// PosList `Error` type
///
/// This is the main error type for the positional list crates.
/// It provides categorized errors with error codes and static messages.
#[derive(Debug, Copy, Clone)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Create a position out of range error
    #[must_use]
    pub const fn position_out_of_range(message: &'static str) -> Self {
        Self::new(
            ErrorCategory::Validation,
            codes::POSITION_OUT_OF_RANGE,
            message,
        )
    }

    /// Create an empty list access error
    #[must_use]
    pub const fn empty_list_access(message: &'static str) -> Self {
        Self::new(ErrorCategory::Validation, codes::EMPTY_LIST_ACCESS, message)
    }

    /// Create a capacity exceeded error
    #[must_use]
    pub const fn capacity_exceeded(message: &'static str) -> Self {
        Self::new(ErrorCategory::Capacity, codes::CAPACITY_EXCEEDED, message)
    }

    /// Check if this is a validation error
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        self.category == ErrorCategory::Validation
    }

    /// Check if this is a capacity error
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        self.category == ErrorCategory::Capacity
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::{
        format,
        string::String,
    };

    use super::*;

    #[test]
    fn test_error_new_preserves_fields() {
        let error = Error::new(
            ErrorCategory::Validation,
            codes::POSITION_OUT_OF_RANGE,
            "position out of range",
        );
        assert_eq!(error.category, ErrorCategory::Validation);
        assert_eq!(error.code, codes::POSITION_OUT_OF_RANGE);
        assert_eq!(error.message, "position out of range");
    }

    #[test]
    fn test_factory_categories() {
        assert!(Error::position_out_of_range("p").is_validation_error());
        assert!(Error::empty_list_access("e").is_validation_error());
        assert!(Error::capacity_exceeded("c").is_capacity_error());
        assert!(!Error::capacity_exceeded("c").is_validation_error());
    }

    #[test]
    fn test_factory_codes_are_stable() {
        assert_eq!(
            Error::position_out_of_range("p").code,
            codes::POSITION_OUT_OF_RANGE
        );
        assert_eq!(Error::empty_list_access("e").code, codes::EMPTY_LIST_ACCESS);
        assert_eq!(Error::capacity_exceeded("c").code, codes::CAPACITY_EXCEEDED);
    }

    #[test]
    fn test_display_format() {
        let error = Error::position_out_of_range("position out of range");
        let shown: String = format!("{error}");
        assert_eq!(shown, "[Validation][E03E8] position out of range");

        let error = Error::empty_list_access("list is empty");
        assert_eq!(format!("{error}"), "[Validation][E03E9] list is empty");

        let error = Error::capacity_exceeded("list is full");
        assert_eq!(format!("{error}"), "[Capacity][E07D0] list is full");
    }

    #[test]
    fn test_error_source_round_trip() {
        let error = Error::capacity_exceeded("list is full");
        let source: &dyn ErrorSource = &error;
        assert_eq!(source.code(), codes::CAPACITY_EXCEEDED);
        assert_eq!(source.message(), "list is full");
        assert_eq!(source.category(), ErrorCategory::Capacity);
    }
}
