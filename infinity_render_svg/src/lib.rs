// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=infinity_render_svg --heading-base-level=0

//! SVG export surface for the Infinity calendar renderer.
//!
//! [`SvgSurface`] implements [`DrawSurface`] by appending SVG elements:
//! wedges become `<path>` elements and text runs become `<text>` elements,
//! centred with `text-anchor`/`dominant-baseline` and rotated with a
//! `transform` when needed. [`SvgSurface::to_svg`] wraps the elements into a
//! standalone document.
//!
//! ```rust
//! use infinity_render::{EventsView, Renderer};
//! use infinity_render_svg::SvgSurface;
//! use infinity_view::{Segment, ViewSnapshot};
//! use kurbo::Size;
//!
//! let mut surface = SvgSurface::new(Size::new(300.0, 300.0));
//! let snapshot = ViewSnapshot {
//!     segment: Segment::year(2024).unwrap(),
//!     hovered: None,
//!     generation: 0,
//! };
//! Renderer::default()
//!     .render_snapshot(&mut surface, &snapshot, EventsView::Loading)
//!     .unwrap();
//! let svg = surface.to_svg();
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains(">Jan</text>"));
//! ```
//!
//! Output is meant for inspection and static export; text uses the viewer's
//! default sans-serif font.

use core::fmt::Write as _;

use infinity_geometry::{SvgNumber, Wedge};
use infinity_render::{DrawSurface, TextAnchor, TextRun};
use kurbo::Size;
use peniko::Color;

/// Outline width for bordered wedges.
const BORDER_WIDTH: f64 = 1.0;

/// A [`DrawSurface`] that builds an SVG document.
#[derive(Clone, Debug, Default)]
pub struct SvgSurface {
    size: Size,
    body: String,
    elements: usize,
}

impl SvgSurface {
    /// An empty surface of `size`.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            body: String::new(),
            elements: 0,
        }
    }

    /// Resize the surface. Already recorded elements are kept.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Number of elements drawn since the last clear.
    pub fn element_count(&self) -> usize {
        self.elements
    }

    /// Export the current frame as an SVG document.
    ///
    /// The surface size is used both as the `width`/`height` attributes and
    /// to set `viewBox="0 0 width height"`.
    pub fn to_svg(&self) -> String {
        let width = SvgNumber(self.size.width);
        let height = SvgNumber(self.size.height);
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" font-family=\"sans-serif\">"
        );
        svg.push_str(&self.body);
        svg.push_str("</svg>");
        svg
    }
}

impl DrawSurface for SvgSurface {
    fn clear(&mut self) {
        self.body.clear();
        self.elements = 0;
    }

    fn bounding_size(&self) -> Size {
        self.size
    }

    fn fill_wedge(&mut self, wedge: &Wedge, fill: Color, border: Option<Color>) {
        let d = wedge.path().to_svg_d();
        if d.is_empty() {
            return;
        }
        let mut attrs = String::new();
        write_paint(&mut attrs, "fill", fill);
        match border {
            Some(color) => {
                write_paint(&mut attrs, "stroke", color);
                let _ = write!(attrs, " stroke-width=\"{}\"", SvgNumber(BORDER_WIDTH));
            }
            None => attrs.push_str(" stroke=\"none\""),
        }
        // Full rings carry a hole subpath.
        attrs.push_str(" fill-rule=\"evenodd\"");
        let _ = writeln!(self.body, "<path d=\"{d}\"{attrs}/>");
        self.elements += 1;
    }

    fn draw_text(&mut self, text: &TextRun) {
        if text.text.is_empty() {
            return;
        }
        let x = SvgNumber(text.position.x);
        let y = SvgNumber(text.position.y);
        let mut attrs = String::new();
        let _ = write!(
            attrs,
            " x=\"{x}\" y=\"{y}\" font-size=\"{}\" text-anchor=\"{}\" dominant-baseline=\"middle\"",
            SvgNumber(text.font_size),
            anchor_svg(text.anchor)
        );
        write_paint(&mut attrs, "fill", text.color);
        if text.rotation != 0.0 {
            let _ = write!(
                attrs,
                " transform=\"rotate({} {x} {y})\"",
                SvgNumber(text.rotation.to_degrees())
            );
        }
        let _ = writeln!(self.body, "<text{attrs}>{}</text>", escape_xml(&text.text));
        self.elements += 1;
    }
}

fn anchor_svg(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn write_paint(out: &mut String, attr: &str, color: Color) {
    let (rgb, a) = color_to_svg(color);
    let _ = write!(out, " {attr}=\"{rgb}\"");
    if a < 1.0 {
        let _ = write!(out, " {attr}-opacity=\"{}\"", SvgNumber(f64::from(a)));
    }
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use infinity_geometry::{RingGeometry, angle_range_for};
    use infinity_render::{EventsView, Renderer};
    use infinity_view::{Segment, ViewSnapshot};
    use kurbo::Point;

    fn ring() -> RingGeometry {
        RingGeometry::new(Point::new(100.0, 100.0), 50.0, 25.0)
    }

    #[test]
    fn exports_document_header() {
        let surface = SvgSurface::new(Size::new(200.0, 120.0));
        let svg = surface.to_svg();
        assert!(svg.starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"200\" height=\"120\" viewBox=\"0 0 200 120\""
        ));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn wedge_becomes_path_with_border() {
        let mut surface = SvgSurface::new(Size::new(200.0, 200.0));
        let wedge = Wedge::on_ring(&ring(), angle_range_for(0, 4));
        surface.fill_wedge(
            &wedge,
            Color::from_rgba8(255, 0, 0, 255),
            Some(Color::from_rgb8(0, 0, 0)),
        );
        let svg = surface.to_svg();
        assert!(svg.contains("<path d=\"M 100 50 A 50 50 0 0 1 150 100"));
        assert!(svg.contains("fill=\"#ff0000\""));
        assert!(svg.contains("stroke=\"#000000\" stroke-width=\"1\""));
        assert!(!svg.contains("fill-opacity"));
    }

    #[test]
    fn translucent_fill_has_opacity() {
        let mut surface = SvgSurface::new(Size::new(200.0, 200.0));
        let wedge = Wedge::on_ring(&ring(), angle_range_for(1, 4));
        surface.fill_wedge(&wedge, Color::from_rgba8(0, 0, 255, 128), None);
        let svg = surface.to_svg();
        assert!(svg.contains("fill=\"#0000ff\" fill-opacity=\"0.502\""));
        assert!(svg.contains("stroke=\"none\""));
    }

    #[test]
    fn text_is_centred_rotated_and_escaped() {
        let mut surface = SvgSurface::new(Size::new(200.0, 200.0));
        let run = TextRun::centered(
            "R&D <sync>",
            Point::new(10.0, 20.5),
            12.0,
            Color::from_rgb8(0x33, 0x33, 0x33),
        )
        .rotated(core::f64::consts::FRAC_PI_2);
        surface.draw_text(&run);
        let svg = surface.to_svg();
        assert!(svg.contains(
            "<text x=\"10\" y=\"20.5\" font-size=\"12\" text-anchor=\"middle\" dominant-baseline=\"middle\" fill=\"#333333\" transform=\"rotate(90 10 20.5)\">R&amp;D &lt;sync&gt;</text>"
        ));
    }

    #[test]
    fn clear_starts_a_new_frame() {
        let mut surface = SvgSurface::new(Size::new(200.0, 200.0));
        surface.draw_text(&TextRun::centered(
            "old",
            Point::ZERO,
            10.0,
            Color::from_rgb8(0, 0, 0),
        ));
        surface.clear();
        assert_eq!(surface.element_count(), 0);
        assert!(!surface.to_svg().contains("old"));
    }

    #[test]
    fn renders_a_month_view() {
        let mut surface = SvgSurface::new(Size::new(400.0, 400.0));
        let snapshot = ViewSnapshot {
            segment: Segment::month(2024, 1).unwrap(),
            hovered: Some(0),
            generation: 0,
        };
        Renderer::default()
            .render_snapshot(&mut surface, &snapshot, EventsView::Loading)
            .unwrap();
        let svg = surface.to_svg();
        // Background, 29 days, their labels, and the centre line.
        assert_eq!(surface.element_count(), 1 + 29 + 29 + 1);
        assert_eq!(svg.matches("fill=\"#e0e0e0\"").count(), 1);
        assert!(svg.contains(">February, 2024</text>"));
        assert!(svg.contains(">29</text>"));
    }
}
