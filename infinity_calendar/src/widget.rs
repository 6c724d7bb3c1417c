// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The calendar widget.

use infinity_events::{CalendarEvent, EventStore, StoreResult};
use infinity_geometry::{RingGeometry, hit_test};
use infinity_input::click::{ClickResult, ClickState};
use infinity_input::debounce::Debounce;
use infinity_input::event::{InputEvent, Key};
use infinity_input::hover::HoverState;
use infinity_input::pinch::{PinchState, PinchStep};
use infinity_render::{DrawSurface, EventsView, Renderer};
use infinity_view::{PanDirection, Segment, Transition, ViewError, ViewSnapshot, ViewState};
use kurbo::{Point, Size};
use tracing::{debug, error, trace};

use crate::fetch::{Delivery, EventRequest, EventSlot};
use crate::{CalendarConfig, ConfigError};

/// What an input did to the widget.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// The host should call [`InfinityCalendar::render`].
    pub redraw: bool,
    /// The view changed level or selection.
    pub transition: Option<Transition>,
}

impl Response {
    fn redraw() -> Self {
        Self {
            redraw: true,
            transition: None,
        }
    }

    fn from_transition(transition: Transition) -> Self {
        Self {
            redraw: transition.is_changed(),
            transition: Some(transition),
        }
    }
}

/// A zoomable radial calendar.
///
/// The host forwards [`InputEvent`]s to [`handle_input`](Self::handle_input),
/// redraws with [`render`](Self::render) when asked, and services
/// [`event_request`](Self::event_request)s against its event store (or lets
/// [`sync_events`](Self::sync_events) do it).
#[derive(Debug)]
pub struct InfinityCalendar {
    state: ViewState,
    renderer: Renderer,
    size: Size,
    hover: HoverState,
    click: ClickState,
    pinch: PinchState,
    zoom_keys: Debounce,
    touch: Option<Point>,
    events: EventSlot,
}

impl InfinityCalendar {
    /// A calendar showing `segment`, styled by `config`.
    pub fn new(config: &CalendarConfig, segment: Segment) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: ViewState::new(segment),
            renderer: config.renderer()?,
            size: Size::ZERO,
            hover: HoverState::new(),
            click: ClickState::new(),
            pinch: config.pinch(),
            zoom_keys: config.zoom_debounce(),
            touch: None,
            events: EventSlot::default(),
        })
    }

    /// A calendar showing the current local year.
    pub fn current_year(config: &CalendarConfig) -> Result<Self, ConfigError> {
        Self::new(config, *ViewState::current_year().segment())
    }

    /// The view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Owned copy of the view state.
    pub fn snapshot(&self) -> ViewSnapshot {
        self.state.snapshot()
    }

    /// The renderer.
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Set the surface size used for hit testing.
    ///
    /// [`render`](Self::render) also picks the size up from the surface.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    /// Ring for the current size, if it fits.
    pub fn ring(&self) -> Option<RingGeometry> {
        self.renderer.ring_for(self.size).ok()
    }

    /// Segment of the active ring under `point`.
    pub fn segment_at(&self, point: Point) -> Option<u32> {
        let ring = self.ring()?;
        let hit = hit_test(point, &ring, self.state.segment_count());
        trace!(x = point.x, y = point.y, ?hit, "hit test");
        hit
    }

    /// Apply one input event.
    pub fn handle_input(&mut self, event: &InputEvent) -> Response {
        match event {
            InputEvent::PointerMove(p) => self.pointer_move(*p),
            InputEvent::PointerDown(p) => {
                let segment = self.segment_at(*p);
                self.click.on_down(segment, *p);
                Response::default()
            }
            InputEvent::PointerUp(p) => self.release(*p),
            InputEvent::PointerLeave => {
                self.hover.leave();
                self.click.cancel();
                self.hovered(None)
            }
            InputEvent::Wheel { position, delta_y } => {
                if *delta_y < 0.0 {
                    self.zoom_in_at(*position)
                } else {
                    self.zoom_out()
                }
            }
            InputEvent::TouchStart(points) => {
                if points.len() == 2 {
                    self.click.cancel();
                    self.touch = None;
                    self.pinch.start(points);
                } else if let [p] = points.as_slice() {
                    let segment = self.segment_at(*p);
                    self.touch = Some(*p);
                    self.click.on_down(segment, *p);
                }
                Response::default()
            }
            InputEvent::TouchMove(points) => {
                if let [p] = points.as_slice() {
                    self.touch = Some(*p);
                    return Response::default();
                }
                self.click.cancel();
                self.touch = None;
                match self.pinch.update(points) {
                    Some(PinchStep::ZoomIn { center }) => self.zoom_in_at(center),
                    Some(PinchStep::ZoomOut) => self.zoom_out(),
                    None => Response::default(),
                }
            }
            InputEvent::TouchEnd => {
                self.pinch.end();
                match self.touch.take() {
                    Some(p) => self.release(p),
                    None => Response::default(),
                }
            }
            InputEvent::Key { key, timestamp_ms } => self.key(*key, *timestamp_ms),
        }
    }

    /// From the month ring, open the day under `point`, skipping the week ring.
    pub fn open_day_at(&mut self, point: Point) -> Response {
        let Some(index) = self.segment_at(point) else {
            return Response::default();
        };
        let result = self.state.open_day(index);
        self.after(result)
    }

    /// Jump to `year`.
    pub fn go_to_year(&mut self, year: i32) -> Response {
        let result = self.state.go_to_year(year);
        self.after(result)
    }

    /// The fetch to run for the current view, if one is needed.
    ///
    /// At most one request is issued per view generation.
    pub fn event_request(&mut self) -> Option<EventRequest> {
        let snapshot = self.state.snapshot();
        self.events.request(&snapshot)
    }

    /// Hand over the result of `request`.
    ///
    /// Results for a generation other than the current one are dropped.
    pub fn deliver_events(
        &mut self,
        request: &EventRequest,
        result: StoreResult<Vec<CalendarEvent>>,
    ) -> Delivery {
        let delivery = self
            .events
            .deliver(self.state.generation(), request, result);
        if delivery == Delivery::Stale {
            tracing::warn!(
                request = request.generation,
                current = self.state.generation(),
                "dropping stale event delivery"
            );
        }
        delivery
    }

    /// Fetch events for the current view from `store`, if needed.
    pub async fn sync_events<S: EventStore + ?Sized>(&mut self, store: &S) -> Option<Delivery> {
        let request = self.event_request()?;
        let result = store.events_for_range(request.start, request.end).await;
        Some(self.deliver_events(&request, result))
    }

    /// What the renderer will be given for events.
    pub fn events_view(&self) -> EventsView<'_> {
        self.events.view(self.state.generation())
    }

    /// Draw the current view onto `surface`.
    ///
    /// Failures are logged and leave the surface untouched; returns whether
    /// a frame was drawn.
    pub fn render<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        self.size = surface.bounding_size();
        let snapshot = self.state.snapshot();
        let events = self.events.view(snapshot.generation);
        match self.renderer.render_snapshot(surface, &snapshot, events) {
            Ok(_) => true,
            Err(err) => {
                error!(%err, segment = %snapshot.segment, "calendar render failed");
                false
            }
        }
    }

    fn key(&mut self, key: Key, timestamp_ms: u64) -> Response {
        match key {
            Key::Character('z' | 'Z') => {
                if !self.zoom_keys.try_fire(timestamp_ms) {
                    trace!(timestamp_ms, "zoom key debounced");
                    return Response::default();
                }
                match self.hover.position() {
                    Some(p) => self.zoom_in_at(p),
                    None => Response::default(),
                }
            }
            Key::Character('x' | 'X') => {
                if !self.zoom_keys.try_fire(timestamp_ms) {
                    trace!(timestamp_ms, "zoom key debounced");
                    return Response::default();
                }
                self.zoom_out()
            }
            Key::Escape => self.zoom_out(),
            Key::ArrowLeft | Key::ArrowUp => self.pan(PanDirection::Previous),
            Key::ArrowRight | Key::ArrowDown => self.pan(PanDirection::Next),
            Key::Character(_) => Response::default(),
        }
    }

    fn release(&mut self, p: Point) -> Response {
        let segment = self.segment_at(p);
        match self.click.on_up(segment, p) {
            ClickResult::Click(index) => self.zoom_in(index),
            ClickResult::None => Response::default(),
        }
    }

    fn pointer_move(&mut self, p: Point) -> Response {
        let segment = self.segment_at(p);
        self.hover.update(p, segment);
        self.hovered(segment)
    }

    fn hovered(&mut self, segment: Option<u32>) -> Response {
        if self.state.set_hovered_segment(segment) {
            Response::redraw()
        } else {
            Response::default()
        }
    }

    fn zoom_in_at(&mut self, p: Point) -> Response {
        match self.segment_at(p) {
            Some(index) => self.zoom_in(index),
            None => {
                debug!(x = p.x, y = p.y, "zoom in off the ring");
                Response::default()
            }
        }
    }

    fn zoom_in(&mut self, index: u32) -> Response {
        let result = self.state.zoom_in(index);
        self.after(result)
    }

    fn zoom_out(&mut self) -> Response {
        let transition = self.state.zoom_out();
        self.after(Ok(transition))
    }

    fn pan(&mut self, direction: PanDirection) -> Response {
        let result = self.state.pan(direction);
        self.after(result)
    }

    fn after(&mut self, result: Result<Transition, ViewError>) -> Response {
        match result {
            Ok(transition) => {
                if transition.is_changed() {
                    // The ring changed under a stationary pointer.
                    self.hover.reset_segment();
                    if let Some(p) = self.hover.position() {
                        let segment = self.segment_at(p);
                        self.hover.update(p, segment);
                        self.state.set_hovered_segment(segment);
                    }
                }
                Response::from_transition(transition)
            }
            Err(err) => {
                debug!(%err, "view transition rejected");
                Response::default()
            }
        }
    }
}
