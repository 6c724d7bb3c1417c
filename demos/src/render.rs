// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless frame output.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDate, Weekday};
use infinity_calendar::{CalendarConfig, InfinityCalendar};
use infinity_events::{InMemoryEventStore, import_time_entries};
use infinity_geometry::{angle_range_for, label_position};
use infinity_input::event::InputEvent;
use infinity_render_svg::SvgSurface;
use infinity_render_vello_cpu::VelloCpuSurface;
use infinity_view::Segment;
use kurbo::Size;
use png::{BitDepth, ColorType, Encoder};
use tracing::{debug, info};

use crate::cli::RenderArgs;

const SAMPLE_ENTRIES: &str = include_str!("../data/sample_entries.json");

/// Time entries from `path`, or the bundled sample.
pub(crate) fn read_entries(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read time entries from {}", path.display())),
        None => Ok(SAMPLE_ENTRIES.to_owned()),
    }
}

pub(crate) fn load_store(path: Option<&Path>) -> Result<InMemoryEventStore> {
    let json = read_entries(path)?;
    let store = InMemoryEventStore::new();
    let count = pollster::block_on(import_time_entries(&store, &json))?;
    info!(count, "loaded time entries");
    Ok(store)
}

fn load_config(path: Option<&Path>) -> Result<CalendarConfig> {
    Ok(match path {
        Some(path) => CalendarConfig::load(path)?,
        None => CalendarConfig::default(),
    })
}

/// Render one frame per zoom level around `args.date`.
pub(crate) fn run(args: &RenderArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let store = load_store(args.events.as_deref())?;
    fs::create_dir_all(&args.out)
        .with_context(|| format!("failed to create {}", args.out.display()))?;

    let date = args.date;
    let segments = [
        Segment::year(date.year())?,
        Segment::month_of(date),
        Segment::week_of(date),
        Segment::day_of(date),
        Segment::hour_of(date, args.hour)?,
    ];
    for (step, segment) in segments.into_iter().enumerate() {
        let mut calendar = InfinityCalendar::new(&config, segment)?;
        if let Some(delivery) = pollster::block_on(calendar.sync_events(&store)) {
            debug!(?delivery, %segment, "events delivered");
        }
        write_frame(&mut calendar, &args.out, step, args.size)?;
    }
    Ok(())
}

/// Click down from the year ring to the hour of `args.date`, saving a frame
/// after every zoom.
pub(crate) fn walk(args: &RenderArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let store = load_store(args.events.as_deref())?;
    fs::create_dir_all(&args.out)
        .with_context(|| format!("failed to create {}", args.out.display()))?;

    let date = args.date;
    let mut calendar = InfinityCalendar::new(&config, Segment::year(date.year())?)?;
    calendar.resize(Size::new(f64::from(args.size), f64::from(args.size)));

    let path = [
        date.month0(),
        date.day0(),
        week_ring_index(date),
        args.hour,
    ];
    for (step, index) in path.into_iter().enumerate() {
        pollster::block_on(calendar.sync_events(&store));
        write_frame(&mut calendar, &args.out, step, args.size)?;
        let Some(ring) = calendar.ring() else {
            bail!("a {0}x{0} surface is too small for the ring", args.size);
        };
        let range = angle_range_for(index, calendar.state().segment_count());
        let point = label_position(&range, &ring);
        calendar.handle_input(&InputEvent::PointerMove(point));
        calendar.handle_input(&InputEvent::PointerDown(point));
        let response = calendar.handle_input(&InputEvent::PointerUp(point));
        info!(index, segment = %calendar.state().segment(), redraw = response.redraw, "clicked");
    }
    pollster::block_on(calendar.sync_events(&store));
    write_frame(&mut calendar, &args.out, path.len(), args.size)
}

fn write_frame(
    calendar: &mut InfinityCalendar,
    out: &Path,
    step: usize,
    size: u16,
) -> Result<()> {
    let stem = format!("{step}_{}", calendar.state().level());

    let mut svg = SvgSurface::new(Size::new(f64::from(size), f64::from(size)));
    if !calendar.render(&mut svg) {
        bail!("failed to render the {stem} frame");
    }
    let svg_path = frame_path(out, &stem, "svg");
    fs::write(&svg_path, svg.to_svg())
        .with_context(|| format!("failed to write {}", svg_path.display()))?;

    let mut raster = VelloCpuSurface::new(size, size);
    if !calendar.render(&mut raster) {
        bail!("failed to rasterise the {stem} frame");
    }
    let rgba = raster.render_to_rgba();
    let png_path = frame_path(out, &stem, "png");
    write_png(&png_path, u32::from(size), u32::from(size), &rgba)?;

    info!(
        segment = %calendar.state().segment(),
        svg_elements = svg.element_count(),
        labels = raster.text_overlay().len(),
        "wrote {stem}"
    );
    Ok(())
}

fn frame_path(out: &Path, stem: &str, extension: &str) -> PathBuf {
    out.join(stem).with_extension(extension)
}

fn write_png(path: &Path, width: u32, height: u32, rgba: &[u8]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut encoder = Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    writer.finish()?;
    Ok(())
}

/// Weekday of `date` as shown by the week ring, Monday first.
fn week_ring_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from(Weekday::Mon)
}
