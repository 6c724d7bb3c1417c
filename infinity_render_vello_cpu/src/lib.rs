// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=infinity_render_vello_cpu --heading-base-level=0

//! Vello CPU raster surface for the Infinity calendar renderer.
//!
//! [`VelloCpuSurface`] implements [`DrawSurface`] on top of the sparse-strips
//! [`vello_cpu::RenderContext`]. Wedges are flattened to Bézier paths and
//! filled (and outlined) in the context; [`VelloCpuSurface::render_to_rgba`]
//! resolves the frame into straight-alpha RGBA bytes.
//!
//! Glyph rasterisation needs host fonts, so text runs are not painted into
//! the pixmap. They are collected in [`VelloCpuSurface::text_overlay`] for
//! the host's text layer to draw on top.
//!
//! ```rust
//! use infinity_render::{EventsView, Renderer};
//! use infinity_render_vello_cpu::VelloCpuSurface;
//! use infinity_view::{Segment, ViewSnapshot};
//!
//! let mut surface = VelloCpuSurface::new(128, 128);
//! let snapshot = ViewSnapshot {
//!     segment: Segment::year(2024).unwrap(),
//!     hovered: None,
//!     generation: 0,
//! };
//! Renderer::default()
//!     .render_snapshot(&mut surface, &snapshot, EventsView::Loading)
//!     .unwrap();
//! let rgba = surface.render_to_rgba();
//! assert_eq!(rgba.len(), 128 * 128 * 4);
//! assert!(surface.text_overlay().iter().any(|run| run.text == "Jan"));
//! ```

use infinity_geometry::Wedge;
use infinity_render::{DrawSurface, TextRun};
use kurbo::{PathEl, Size};
use peniko::{Color, Fill};
use tracing::trace;
use vello_cpu::kurbo::{BezPath, Stroke};
use vello_cpu::{Pixmap, RenderContext, RenderMode, RenderSettings};

/// Flattening tolerance for wedge arcs, in pixels.
const ARC_TOLERANCE: f64 = 0.1;

/// Outline width for bordered wedges, in pixels.
const BORDER_WIDTH: f64 = 1.0;

/// A [`DrawSurface`] rasterising into a `vello_cpu` context.
pub struct VelloCpuSurface {
    ctx: RenderContext,
    width: u16,
    height: u16,
    overlay: Vec<TextRun>,
}

impl core::fmt::Debug for VelloCpuSurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VelloCpuSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("overlay", &self.overlay.len())
            .finish_non_exhaustive()
    }
}

impl VelloCpuSurface {
    /// A blank `width` × `height` pixel surface.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            ctx: new_context(width, height),
            width,
            height,
            overlay: Vec::new(),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, discarding the current frame.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.clear();
    }

    /// Text runs drawn since the last clear, for the host text layer.
    pub fn text_overlay(&self) -> &[TextRun] {
        &self.overlay
    }

    /// Resolve the frame into straight-alpha RGBA8 bytes, row by row.
    pub fn render_to_rgba(&mut self) -> Vec<u8> {
        let mut pixmap = Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        let unpremul = pixmap.take_unpremultiplied();
        let mut bytes = Vec::with_capacity(unpremul.len() * 4);
        for p in unpremul {
            bytes.extend_from_slice(&[p.r, p.g, p.b, p.a]);
        }
        bytes
    }
}

impl DrawSurface for VelloCpuSurface {
    fn clear(&mut self) {
        self.ctx = new_context(self.width, self.height);
        self.overlay.clear();
    }

    fn bounding_size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    fn fill_wedge(&mut self, wedge: &Wedge, fill: Color, border: Option<Color>) {
        let path = to_cpu_path(&wedge.path().to_bez_path(ARC_TOLERANCE));
        if path.elements().is_empty() {
            return;
        }
        self.ctx.set_paint(fill);
        self.ctx.fill_path(&path);
        if let Some(border) = border {
            self.ctx.set_paint(border);
            self.ctx.set_stroke(Stroke::new(BORDER_WIDTH));
            self.ctx.stroke_path(&path);
        }
    }

    fn draw_text(&mut self, text: &TextRun) {
        trace!(text = %text.text, "queued text run for overlay");
        self.overlay.push(text.clone());
    }
}

fn new_context(width: u16, height: u16) -> RenderContext {
    let settings = RenderSettings {
        render_mode: RenderMode::OptimizeSpeed,
        ..RenderSettings::default()
    };
    let mut ctx = RenderContext::new_with(width, height, settings);
    // Full rings carry a hole subpath.
    ctx.set_fill_rule(Fill::EvenOdd);
    ctx
}

fn to_cpu_path(path: &kurbo::BezPath) -> BezPath {
    let mut p = BezPath::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(a) => p.move_to((a.x, a.y)),
            PathEl::LineTo(a) => p.line_to((a.x, a.y)),
            PathEl::QuadTo(a, b) => p.quad_to((a.x, a.y), (b.x, b.y)),
            PathEl::CurveTo(a, b, c) => p.curve_to((a.x, a.y), (b.x, b.y), (c.x, c.y)),
            PathEl::ClosePath => p.close_path(),
        }
    }
    p
}
