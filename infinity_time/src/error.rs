// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for the infinity-time crate.

/// Error type for all fallible calendar arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// Returned when a month, week, day, or year is outside its valid range.
    #[error("{what} {value} is outside {range}")]
    InvalidArgument {
        /// Name of the offending argument.
        what: &'static str,
        /// The rejected value.
        value: i64,
        /// Human-readable description of the accepted range.
        range: &'static str,
    },
}
