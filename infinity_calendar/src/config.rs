// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget configuration, loaded from TOML.

use std::fs;
use std::path::{Path, PathBuf};

use infinity_geometry::RingGeometry;
use infinity_input::debounce::Debounce;
use infinity_input::pinch::PinchState;
use infinity_render::{FontSizes, Palette, Renderer, RingLayout};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {}", .path.display())]
    Io {
        /// The file.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or has unknown keys.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Colours as `#rrggbb` strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteConfig {
    /// Doughnut behind the segments.
    pub background: String,
    /// Segment fill.
    pub segment: String,
    /// Segment outlines.
    pub border: String,
    /// Labels.
    pub text: String,
    /// Event arcs and dots.
    pub event: String,
    /// Hovered segment fill.
    pub highlight: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            background: "#f0f0f0".into(),
            segment: "#ffffff".into(),
            border: "#000000".into(),
            text: "#333333".into(),
            event: "#4285f4".into(),
            highlight: "#e0e0e0".into(),
        }
    }
}

impl PaletteConfig {
    /// Parse every colour.
    pub fn to_palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            background: color_field("background", &self.background)?,
            segment: color_field("segment", &self.segment)?,
            border: color_field("border", &self.border)?,
            text: color_field("text", &self.text)?,
            event: color_field("event", &self.event)?,
            highlight: color_field("highlight", &self.highlight)?,
        })
    }
}

/// Font sizes in surface units.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontSizeConfig {
    /// Month and weekday names.
    pub label: f64,
    /// Day numbers, hours, and minutes.
    pub small_label: f64,
    /// Year in the centre.
    pub title: f64,
    /// Main centre line.
    pub heading: f64,
    /// Secondary centre line.
    pub subheading: f64,
    /// Week number.
    pub detail: f64,
    /// Event titles.
    pub event: f64,
}

impl Default for FontSizeConfig {
    fn default() -> Self {
        let f = FontSizes::default();
        Self {
            label: f.label,
            small_label: f.small_label,
            title: f.title,
            heading: f.heading,
            subheading: f.subheading,
            detail: f.detail,
            event: f.event,
        }
    }
}

impl From<FontSizeConfig> for FontSizes {
    fn from(c: FontSizeConfig) -> Self {
        Self {
            label: c.label,
            small_label: c.small_label,
            title: c.title,
            heading: c.heading,
            subheading: c.subheading,
            detail: c.detail,
            event: c.event,
        }
    }
}

/// Everything tunable about the widget.
///
/// Missing keys take their defaults, so an empty file is a valid config.
///
/// ```toml
/// inner_radius_ratio = 0.5
/// zoom_debounce_ms = 250
///
/// [palette]
/// event = "#e91e63"
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    /// Inner radius as a fraction of the outer radius, in `(0, 1)`.
    pub inner_radius_ratio: f64,
    /// Gap between the ring and the surface edge.
    pub margin: f64,
    /// Minimum spacing between keyboard zooms.
    pub zoom_debounce_ms: u64,
    /// Finger-spread ratio that zooms in.
    pub pinch_in_ratio: f64,
    /// Finger-close ratio that zooms out.
    pub pinch_out_ratio: f64,
    /// Start of the day-ring event band, as a fraction of the ring width.
    pub event_band: f64,
    /// Colours.
    pub palette: PaletteConfig,
    /// Font sizes.
    pub font_sizes: FontSizeConfig,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        let layout = RingLayout::default();
        Self {
            inner_radius_ratio: RingGeometry::DEFAULT_INNER_RATIO,
            margin: RingGeometry::DEFAULT_MARGIN,
            zoom_debounce_ms: Debounce::DEFAULT_INTERVAL_MS,
            pinch_in_ratio: PinchState::DEFAULT_IN_RATIO,
            pinch_out_ratio: PinchState::DEFAULT_OUT_RATIO,
            event_band: layout.event_band,
            palette: PaletteConfig::default(),
            font_sizes: FontSizeConfig::default(),
        }
    }
}

impl CalendarConfig {
    /// Read and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges and colours.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.inner_radius_ratio > 0.0 && self.inner_radius_ratio < 1.0) {
            return Err(invalid(format!(
                "inner_radius_ratio must be in (0, 1), got {}",
                self.inner_radius_ratio
            )));
        }
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return Err(invalid(format!(
                "margin must be a non-negative number, got {}",
                self.margin
            )));
        }
        if !(self.pinch_out_ratio > 0.0
            && self.pinch_out_ratio < 1.0
            && self.pinch_in_ratio > 1.0
            && self.pinch_in_ratio.is_finite())
        {
            return Err(invalid(format!(
                "pinch ratios must satisfy 0 < pinch_out_ratio < 1 < pinch_in_ratio, got {} and {}",
                self.pinch_out_ratio, self.pinch_in_ratio
            )));
        }
        if !(self.event_band >= 0.0 && self.event_band < 1.0) {
            return Err(invalid(format!(
                "event_band must be in [0, 1), got {}",
                self.event_band
            )));
        }
        let fonts = self.font_sizes;
        let sizes = [
            ("label", fonts.label),
            ("small_label", fonts.small_label),
            ("title", fonts.title),
            ("heading", fonts.heading),
            ("subheading", fonts.subheading),
            ("detail", fonts.detail),
            ("event", fonts.event),
        ];
        if let Some((name, size)) = sizes
            .iter()
            .find(|(_, size)| !(size.is_finite() && *size > 0.0))
        {
            return Err(invalid(format!(
                "font_sizes.{name} must be positive, got {size}"
            )));
        }
        self.palette.to_palette()?;
        Ok(())
    }

    /// Build the renderer this config describes.
    pub fn renderer(&self) -> Result<Renderer, ConfigError> {
        Ok(Renderer::new(
            self.palette.to_palette()?,
            self.font_sizes.into(),
            RingLayout {
                inner_radius_ratio: self.inner_radius_ratio,
                margin: self.margin,
                event_band: self.event_band,
                ..RingLayout::default()
            },
        ))
    }

    /// Pinch recogniser with the configured ratios.
    pub fn pinch(&self) -> PinchState {
        PinchState::new(self.pinch_in_ratio, self.pinch_out_ratio)
    }

    /// Keyboard zoom debounce with the configured interval.
    pub fn zoom_debounce(&self) -> Debounce {
        Debounce::new(self.zoom_debounce_ms)
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::Invalid(message)
}

fn color_field(name: &str, value: &str) -> Result<Color, ConfigError> {
    parse_hex_color(value).ok_or_else(|| {
        invalid(format!(
            "palette.{name} must be a #rrggbb colour, got {value:?}"
        ))
    })
}

/// Parse `#rrggbb`.
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = CalendarConfig::from_toml_str("").unwrap();
        assert_eq!(config, CalendarConfig::default());
        assert_eq!(config.renderer().unwrap(), Renderer::default());
    }

    #[test]
    fn partial_override() {
        let config = CalendarConfig::from_toml_str(
            r##"
inner_radius_ratio = 0.5
zoom_debounce_ms = 250

[palette]
event = "#E91E63"
"##,
        )
        .unwrap();
        assert_eq!(config.inner_radius_ratio, 0.5);
        assert_eq!(config.zoom_debounce(), Debounce::new(250));
        let renderer = config.renderer().unwrap();
        assert_eq!(renderer.palette.event, Color::from_rgb8(0xe9, 0x1e, 0x63));
        assert_eq!(renderer.palette.segment, Palette::default().segment);
        assert_eq!(renderer.layout.inner_radius_ratio, 0.5);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = CalendarConfig::from_toml_str("inner_ratio = 0.5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_out_of_range_values() {
        for text in [
            "inner_radius_ratio = 0.0",
            "inner_radius_ratio = 1.0",
            "margin = -1.0",
            "pinch_in_ratio = 0.95",
            "pinch_out_ratio = 1.2",
            "event_band = 1.0",
            "[font_sizes]\nlabel = 0.0",
        ] {
            let err = CalendarConfig::from_toml_str(text).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{text}");
        }
    }

    #[test]
    fn rejects_bad_colours() {
        let err = CalendarConfig::from_toml_str("[palette]\nborder = \"black\"").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid config: palette.border must be a #rrggbb colour, got \"black\""
        );
    }

    #[test]
    fn hex_colours() {
        assert_eq!(
            parse_hex_color("#4285f4"),
            Some(Color::from_rgb8(0x42, 0x85, 0xf4))
        );
        assert_eq!(parse_hex_color("4285f4"), None);
        assert_eq!(parse_hex_color("#4285f"), None);
        assert_eq!(parse_hex_color("#4285fg"), None);
        assert_eq!(parse_hex_color("#é285f4"), None);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = CalendarConfig::load("/nonexistent/infinity.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/infinity.toml"));
    }
}
