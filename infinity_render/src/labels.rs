// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label text for ring segments and the ring centre.

use chrono::{Datelike, Days, NaiveDate};
use infinity_time::{
    DAYS_PER_WEEK, month_name, monday_of, short_month_name, short_weekday_name, weekday_index,
    weekday_name,
};
use infinity_view::Segment;

use crate::FontSizes;

/// One line of label text, offset vertically from its anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelLine {
    /// The text.
    pub text: String,
    /// Font size.
    pub font_size: f64,
    /// Vertical offset from the anchor, positive downwards.
    pub dy: f64,
}

impl LabelLine {
    fn new(text: impl Into<String>, font_size: f64, dy: f64) -> Self {
        Self {
            text: text.into(),
            font_size,
            dy,
        }
    }
}

/// Text drawn inside segment `index` of the ring showing `segment`.
///
/// Minutes on the hour ring are only labelled every five minutes; other
/// indices there yield no lines.
pub fn segment_label(segment: &Segment, index: u32, fonts: &FontSizes) -> Vec<LabelLine> {
    match *segment {
        Segment::Year { .. } => short_month_name(index)
            .map(|name| vec![LabelLine::new(name, fonts.label, 0.0)])
            .unwrap_or_default(),
        Segment::Month { .. } => vec![LabelLine::new(
            (index + 1).to_string(),
            fonts.small_label,
            0.0,
        )],
        Segment::Week { date, .. } => {
            let Some(day) = week_day(date, index) else {
                return Vec::new();
            };
            let mut lines = Vec::with_capacity(2);
            if let Ok(name) = short_weekday_name(index) {
                lines.push(LabelLine::new(name, fonts.label, -10.0));
            }
            lines.push(LabelLine::new(
                day.format("%-d").to_string(),
                fonts.small_label,
                10.0,
            ));
            lines
        }
        Segment::Day { .. } => vec![LabelLine::new(
            format!("{index}:00"),
            fonts.small_label,
            0.0,
        )],
        Segment::Hour { .. } if index % 5 == 0 => {
            vec![LabelLine::new(index.to_string(), fonts.small_label, 0.0)]
        }
        _ => Vec::new(),
    }
}

/// Text drawn in the hole of the ring showing `segment`.
pub fn center_label(segment: &Segment, fonts: &FontSizes) -> Vec<LabelLine> {
    match *segment {
        Segment::Year { year, .. } => vec![LabelLine::new(year.to_string(), fonts.title, 0.0)],
        Segment::Month { year, month, .. } => {
            let name = month_name(month).unwrap_or("?");
            vec![LabelLine::new(format!("{name}, {year}"), fonts.heading, 0.0)]
        }
        Segment::Week { week, date, .. } => {
            let monday = monday_of(date);
            let sunday = week_day(date, DAYS_PER_WEEK - 1).unwrap_or(monday);
            vec![
                LabelLine::new(
                    format!(
                        "{} to {}",
                        monday.format("%Y-%m-%d"),
                        sunday.format("%Y-%m-%d")
                    ),
                    fonts.subheading,
                    -10.0,
                ),
                LabelLine::new(format!("Week {}", week + 1), fonts.detail, 15.0),
            ]
        }
        Segment::Day { date, .. } => {
            let weekday = weekday_name(weekday_index(date)).unwrap_or("?");
            let month = month_name(date.month0()).unwrap_or("?");
            vec![
                LabelLine::new(weekday, fonts.heading, -15.0),
                LabelLine::new(
                    format!("{month} {}, {}", date.day(), date.year()),
                    fonts.subheading,
                    15.0,
                ),
            ]
        }
        Segment::Hour { date, hour, .. } => vec![LabelLine::new(
            format!("{} {hour}:00", date.format("%a %b %d %Y")),
            fonts.heading,
            0.0,
        )],
    }
}

/// Date of weekday `index` (Monday = 0) in the week containing `date`.
pub(crate) fn week_day(date: NaiveDate, index: u32) -> Option<NaiveDate> {
    monday_of(date).checked_add_days(Days::new(u64::from(index)))
}
