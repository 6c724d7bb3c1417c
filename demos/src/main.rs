// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless demo for the Infinity radial calendar.
//!
//! `render` writes an SVG and a PNG for each zoom level around a date,
//! `walk` gets to the same frames by clicking through the widget, and
//! `export` round-trips a time-entry document through the event store.

mod cli;
mod logging;
mod render;

use std::fs;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use infinity_events::export_time_entries;

use crate::cli::{Cli, Command, ExportArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Render(args) => render::run(&args),
        Command::Walk(args) => render::walk(&args),
        Command::Export(args) => export(&args),
    }
}

fn export(args: &ExportArgs) -> Result<()> {
    let store = render::load_store(args.events.as_deref())?;
    let json = pollster::block_on(export_time_entries(&store))?;
    match &args.out {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
