// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for the infinity-events crate.

use infinity_time::TimeError;

/// Result type alias for event store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for event store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No event has the given id.
    #[error("event not found: {id}")]
    NotFound {
        /// The missing id.
        id: String,
    },
    /// An event with the given id already exists.
    #[error("event already exists: {id}")]
    DuplicateId {
        /// The conflicting id.
        id: String,
    },
    /// The backing store cannot be reached.
    #[error("event store unavailable: {0}")]
    Unavailable(String),
    /// A document could not be parsed or written.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// An event failed validation.
    #[error("invalid event {id}: {reason}")]
    InvalidEvent {
        /// Id of the rejected event.
        id: String,
        /// What is wrong with it.
        reason: String,
    },
    /// A query window could not be built.
    #[error(transparent)]
    Time(#[from] TimeError),
}
