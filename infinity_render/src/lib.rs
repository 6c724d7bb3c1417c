// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=infinity_render --heading-base-level=0

//! Infinity Render: backend-neutral drawing for the radial calendar.
//!
//! The [`Renderer`] turns a view (a level plus a selected segment) into a
//! short list of calls on a [`DrawSurface`]:
//!
//! - one background ring,
//! - one bordered [`Wedge`](infinity_geometry::Wedge) per segment, the hovered one highlighted,
//! - segment labels and a centre label,
//! - events: arcs on the day ring, dots on the month and year rings.
//!
//! Backends implement [`DrawSurface`]; see `infinity_render_svg` and
//! `infinity_render_vello_cpu`. [`RecordingSurface`] captures calls for tests
//! and headless inspection.
//!
//! ## Example
//!
//! ```rust
//! use infinity_render::{EventsView, RecordingSurface, Renderer};
//! use infinity_view::{Segment, ViewSnapshot};
//! use kurbo::Size;
//!
//! let renderer = Renderer::default();
//! let mut surface = RecordingSurface::new(Size::new(400.0, 400.0));
//! let snapshot = ViewSnapshot {
//!     segment: Segment::year(2024).unwrap(),
//!     hovered: None,
//!     generation: 0,
//! };
//! renderer
//!     .render_snapshot(&mut surface, &snapshot, EventsView::Loading)
//!     .unwrap();
//!
//! assert_eq!(surface.texts().next(), Some("Jan"));
//! assert_eq!(surface.texts().last(), Some("2024"));
//! ```
//!
//! Rendering never mutates view state. When the segment does not belong to
//! the requested view, [`Renderer::render`] returns
//! [`RenderError::InvalidState`] and leaves the surface as it was.

mod error;
pub mod labels;
mod renderer;
mod style;
mod surface;

pub use error::RenderError;
pub use renderer::{EVENTS_UNAVAILABLE, EventsView, Renderer};
pub use style::{FontSizes, Palette, RingLayout};
pub use surface::{DrawCommand, DrawSurface, RecordingSurface, TextAnchor, TextRun};
