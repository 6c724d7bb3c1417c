// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for the infinity-view crate.

use infinity_time::TimeError;

use crate::ViewLevel;

/// Error type for view transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// Returned when a segment index is not on the active ring.
    #[error("segment {index} is out of range for the {level} ring of {count} segments")]
    SegmentOutOfRange {
        /// Level of the active ring.
        level: ViewLevel,
        /// The rejected index.
        index: u32,
        /// Number of segments on the ring.
        count: u32,
    },
    /// Returned when a segment is used with a ring of another level.
    #[error("a {segment} segment cannot be shown on the {view} ring")]
    LevelMismatch {
        /// The ring level asked for.
        view: ViewLevel,
        /// The level of the segment supplied.
        segment: ViewLevel,
    },
    /// Returned when an operation only applies to other levels.
    #[error("{operation} is not available at the {level} level")]
    WrongLevel {
        /// The attempted operation.
        operation: &'static str,
        /// Level of the active ring.
        level: ViewLevel,
    },
    /// Returned when a transition would leave the supported calendar range.
    #[error(transparent)]
    Time(#[from] TimeError),
}
