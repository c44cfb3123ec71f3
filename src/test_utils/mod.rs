// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macro for float comparison,
//! which properly handles floating-point precision issues that `assert_eq!` cannot.
//! [`fakes`] holds recording implementations of every port, shared by unit
//! and integration tests. Outside this crate's own unit tests the module is
//! only compiled with the `test-utils` feature.

pub mod fakes;

// Re-export approx macros for convenient use in tests
#[cfg(test)]
pub use approx::assert_abs_diff_eq;
