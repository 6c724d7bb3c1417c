// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=infinity_calendar --heading-base-level=0

//! Infinity Calendar: a zoomable radial calendar widget.
//!
//! [`InfinityCalendar`] ties the pieces together:
//!
//! - input events (`infinity_input`) are hit-tested against the active ring
//!   and turned into view transitions (`infinity_view`),
//! - event data is fetched through an `EventStore` (`infinity_events`), one
//!   request per view generation, with stale results dropped,
//! - frames are drawn by the `infinity_render` renderer onto any
//!   `DrawSurface`.
//!
//! The widget is single-threaded: each input is applied to completion and
//! the returned [`Response`] says whether to redraw. The only asynchronous
//! step is the event fetch.
//!
//! ## Example
//!
//! ```rust
//! use infinity_calendar::{CalendarConfig, InfinityCalendar};
//! use infinity_events::InMemoryEventStore;
//! use infinity_input::event::InputEvent;
//! use infinity_render::RecordingSurface;
//! use infinity_view::{Segment, ViewLevel};
//! use kurbo::{Point, Size};
//!
//! let config = CalendarConfig::default();
//! let mut calendar = InfinityCalendar::new(&config, Segment::year(2024).unwrap()).unwrap();
//! let mut surface = RecordingSurface::new(Size::new(400.0, 400.0));
//! calendar.render(&mut surface);
//!
//! // Click on March, between two and three o'clock on the ring.
//! let march = Point::new(345.0, 161.0);
//! calendar.handle_input(&InputEvent::PointerDown(march));
//! let response = calendar.handle_input(&InputEvent::PointerUp(march));
//! assert!(response.redraw);
//! assert_eq!(calendar.state().level(), ViewLevel::Month);
//! assert_eq!(calendar.state().segment().month_value(), Some(2));
//!
//! // Fetch the month's events, then draw them.
//! let store = InMemoryEventStore::new();
//! pollster::block_on(calendar.sync_events(&store));
//! assert!(calendar.render(&mut surface));
//! ```
//!
//! Configuration is TOML; see [`CalendarConfig`].

mod config;
mod fetch;
mod widget;

pub use config::{CalendarConfig, ConfigError, FontSizeConfig, PaletteConfig, parse_hex_color};
pub use fetch::{Delivery, EventRequest};
pub use widget::{InfinityCalendar, Response};
