// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=infinity_input --heading-base-level=0

//! Infinity Input: the input model and interaction state of the radial calendar.
//!
//! Hosts deliver [`InputEvent`](event::InputEvent) values; the calendar
//! widget turns them into zoom, pan, and hover actions with the help of a
//! few small state managers:
//!
//! - [`hover`]: the last pointer position and the segment under it
//! - [`click`]: press/release pairs on the same segment
//! - [`pinch`]: two-finger spread and close steps with a resetting baseline
//! - [`debounce`]: at most one keyboard zoom per interval
//!
//! None of these know about rings or calendars. They take segment indices
//! (already hit tested) or raw points and report transitions.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use infinity_input::click::{ClickResult, ClickState};
//! use infinity_input::debounce::Debounce;
//!
//! let mut clicks = ClickState::new();
//! clicks.on_down(Some(4), Point::new(120.0, 40.0));
//! assert_eq!(clicks.on_up(Some(4), Point::new(121.0, 40.0)), ClickResult::Click(4));
//!
//! let mut zoom_keys = Debounce::new(300);
//! assert!(zoom_keys.try_fire(10_000));
//! assert!(!zoom_keys.try_fire(10_200));
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod click;
pub mod debounce;
pub mod event;
pub mod hover;
pub mod pinch;
