// PosList - poslist-error
// Module: PosList Error Handling
// SW-REQ-ID: REQ_ERR_001
//
// Copyright (c) 2025 The PosList Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! PosList error handling library
//!
//! This library provides the error handling system shared by the PosList
//! crates. It includes the error type, stable error codes, and helper
//! functions for creating and inspecting errors.
//!
//! # Error Categories
//!
//! Errors are organized into categories, each with its own range of error
//! codes:
//!
//! ## Validation Errors (1000-1999)
//! - Position outside the valid range for an operation
//! - Read or write access on an empty list
//!
//! ## Capacity Errors (2000-2999)
//! - Fixed-capacity backing cannot hold the requested entries
//!
//! # Usage
//!
//! The library provides both the low-level error type and high-level helper
//! functions:
//!
//! ```
//! use poslist_error::{helpers, Error, ErrorCategory};
//!
//! // Using the low-level constructor
//! let error = Error::new(
//!     ErrorCategory::Validation,
//!     poslist_error::codes::POSITION_OUT_OF_RANGE,
//!     "position out of range",
//! );
//! assert!(error.is_validation_error());
//!
//! // Using helper functions for common errors
//! let empty = helpers::empty_list_error("list is empty");
//! assert_eq!(empty.code, poslist_error::codes::EMPTY_LIST_ACCESS);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)] // Rule 2
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![deny(clippy::nursery)]
#![allow(clippy::cargo)]
#![warn(clippy::pedantic)]
#![warn(clippy::missing_panics_doc)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

// Standard library support
#[cfg(feature = "std")]
extern crate std;

/// Error codes for PosList
pub mod codes;
/// Error and error handling types
pub mod errors;

// Modules
pub mod helpers;
pub mod prelude;

// Include verification module conditionally
#[cfg(any(doc, kani))]
pub mod verify;

// Re-export key types
pub use errors::{Error, ErrorCategory, ErrorSource};
pub use helpers::*;

/// A specialized `Result` type for PosList operations.
///
/// This type alias uses `poslist_error::Error` as the error type and is
/// suitable for `no_std` environments.
pub type Result<T> = core::result::Result<T, Error>;
