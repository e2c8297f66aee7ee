// PosList - poslist-error
// Module: Formal Verification
// SW-REQ-ID: REQ_ERR_001
//
// Copyright (c) 2025 The PosList Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Formal verification for the error handling system using Kani.
//!
//! This module contains proofs that verify core properties of the error
//! type. These proofs only run with `cargo kani`.

#[cfg(kani)]
mod proofs {
    use crate::{codes, Error, ErrorCategory, Result};

    /// Verify that construction preserves category, code, and message.
    #[kani::proof]
    fn verify_error_creation_safety() {
        let code: u16 = kani::any();
        let error = Error::new(ErrorCategory::Validation, code, "verification");

        assert_eq!(error.code, code);
        assert_eq!(error.category, ErrorCategory::Validation);
        assert_eq!(error.message, "verification");
        assert!(error.is_validation_error());
        assert!(!error.is_capacity_error());
    }

    /// Verify that `?` propagation leaves the error untouched.
    #[kani::proof]
    fn verify_error_propagation() {
        fn fails() -> Result<u32> {
            Err(Error::capacity_exceeded("list is full"))
        }

        fn relays() -> Result<u32> {
            let value = fails()?;
            Ok(value)
        }

        let error = relays().unwrap_err();
        assert_eq!(error.code, codes::CAPACITY_EXCEEDED);
        assert_eq!(error.category, ErrorCategory::Capacity);
    }
}
