// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "infinity_demo",
    version,
    about = "Headless renders of the Infinity radial calendar"
)]
pub(crate) struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub(crate) verbose: u8,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Render every zoom level around a date as SVG and PNG.
    Render(RenderArgs),
    /// Drive the widget with a scripted click walk from year to hour.
    Walk(RenderArgs),
    /// Re-export time entries after a round trip through the event store.
    Export(ExportArgs),
}

#[derive(clap::Args)]
pub(crate) struct RenderArgs {
    /// Directory the images are written to.
    #[arg(short, long, default_value = "infinity_out")]
    pub(crate) out: PathBuf,

    /// TOML widget configuration.
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// Time-entry JSON document; a bundled sample is used when absent.
    #[arg(short, long)]
    pub(crate) events: Option<PathBuf>,

    /// Date the views are centred on.
    #[arg(short, long, default_value = "2024-03-05")]
    pub(crate) date: NaiveDate,

    /// Hour shown by the hour view.
    #[arg(long, default_value_t = 9)]
    pub(crate) hour: u32,

    /// Square image size in pixels.
    #[arg(short, long, default_value_t = 600)]
    pub(crate) size: u16,
}

#[derive(clap::Args)]
pub(crate) struct ExportArgs {
    /// Time-entry JSON document; a bundled sample is used when absent.
    #[arg(short, long)]
    pub(crate) events: Option<PathBuf>,

    /// Output file; stdout when absent.
    #[arg(short, long)]
    pub(crate) out: Option<PathBuf>,
}
