// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing-surface port and a recording implementation.

use infinity_geometry::Wedge;
use kurbo::{Point, Size};
use peniko::Color;

/// Horizontal alignment of a text run relative to its position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the position.
    Start,
    /// Text is centred on the position.
    #[default]
    Middle,
    /// Text ends at the position.
    End,
}

/// A line of text, vertically centred on `position`.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    /// The text.
    pub text: String,
    /// Anchor point.
    pub position: Point,
    /// Font size in surface units.
    pub font_size: f64,
    /// Fill colour.
    pub color: Color,
    /// Rotation about `position`, in radians, clockwise on screen.
    pub rotation: f64,
    /// Horizontal alignment.
    pub anchor: TextAnchor,
}

impl TextRun {
    /// Centred, unrotated text.
    pub fn centered(text: impl Into<String>, position: Point, font_size: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            position,
            font_size,
            color,
            rotation: 0.0,
            anchor: TextAnchor::Middle,
        }
    }

    /// Rotate by `rotation` radians.
    #[must_use]
    pub fn rotated(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }
}

/// Where the calendar draws.
///
/// Implementations map these four calls onto a concrete target: an SVG
/// document, a pixmap, or a host canvas.
pub trait DrawSurface {
    /// Erase everything.
    fn clear(&mut self);

    /// Size of the drawable area.
    fn bounding_size(&self) -> Size;

    /// Fill `wedge`, optionally outlining it.
    fn fill_wedge(&mut self, wedge: &Wedge, fill: Color, border: Option<Color>);

    /// Draw one line of text.
    fn draw_text(&mut self, text: &TextRun);
}

/// A draw call captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// [`DrawSurface::clear`].
    Clear,
    /// [`DrawSurface::fill_wedge`].
    FillWedge {
        /// The shape.
        wedge: Wedge,
        /// Fill colour.
        fill: Color,
        /// Outline colour.
        border: Option<Color>,
    },
    /// [`DrawSurface::draw_text`].
    Text(TextRun),
}

/// A [`DrawSurface`] that records every call.
///
/// `clear` drops earlier commands, so the list always describes the current
/// frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSurface {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// An empty recording of a `size` surface.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    /// Resize the surface.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Commands since the last clear, in order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Text of every recorded run, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(run) => Some(run.text.as_str()),
            _ => None,
        })
    }

    /// Every recorded wedge with its fill.
    pub fn wedges(&self) -> impl Iterator<Item = (&Wedge, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillWedge { wedge, fill, .. } => Some((wedge, *fill)),
            _ => None,
        })
    }

    /// Whether nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn bounding_size(&self) -> Size {
        self.size
    }

    fn fill_wedge(&mut self, wedge: &Wedge, fill: Color, border: Option<Color>) {
        self.commands.push(DrawCommand::FillWedge {
            wedge: *wedge,
            fill,
            border,
        });
    }

    fn draw_text(&mut self, text: &TextRun) {
        self.commands.push(DrawCommand::Text(text.clone()));
    }
}
