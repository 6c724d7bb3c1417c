// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=infinity_view --heading-base-level=0

//! Infinity View: the zoom state machine of the radial calendar.
//!
//! The calendar shows one ring at a time. The ring level is one of
//! [`ViewLevel::Year`], [`Month`](ViewLevel::Month), [`Week`](ViewLevel::Week),
//! [`Day`](ViewLevel::Day), or [`Hour`](ViewLevel::Hour), and the selection
//! at that level is a [`Segment`]. The level is never stored separately from
//! the segment, so they cannot drift apart.
//!
//! [`ViewState`] moves along the chain one level at a time:
//!
//! - [`ViewState::zoom_in`] opens segment `i` of the active ring.
//! - [`ViewState::zoom_out`] returns to the coarser ring around the selection.
//! - [`ViewState::pan`] steps to the previous or next unit at the same level.
//!
//! ## Example
//!
//! ```rust
//! use infinity_view::{Segment, Transition, ViewLevel, ViewState};
//!
//! let mut view = ViewState::new(Segment::year(2024).unwrap());
//!
//! // Click on March.
//! view.zoom_in(2).unwrap();
//! assert_eq!(view.level(), ViewLevel::Month);
//! assert_eq!(view.segment_count(), 31);
//!
//! // Back out to the year ring; a second step is a no-op.
//! assert!(view.zoom_out().is_changed());
//! assert_eq!(view.zoom_out(), Transition::AtBoundary);
//! ```
//!
//! Segment indices past the end of the ring are rejected with
//! [`ViewError::SegmentOutOfRange`] and leave the state as it was.

mod error;
mod level;
mod segment;
mod state;

pub use error::ViewError;
pub use level::ViewLevel;
pub use segment::{HOURS_PER_DAY, MINUTES_PER_HOUR, MONTHS_PER_YEAR, Segment, segment_count};
pub use state::{PanDirection, Transition, ViewSnapshot, ViewState};
