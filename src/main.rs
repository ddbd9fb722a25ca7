// SPDX-License-Identifier: GPL-3.0-or-later
use structopt::StructOpt;
use tracing_subscriber::filter::EnvFilter;

mod composite;
mod icon;
mod placeholder;
mod render;
mod settings;

use crate::settings::cli::{Args, Command};

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let args = Args::from_args();
    match args.command {
        Command::CropIcon(crop_args) => icon::run(&crop_args),
        Command::Composite(composite_args) => composite::run(&composite_args),
        Command::Photo(canvas_args) => placeholder::run_photo(&canvas_args)?,
        Command::Placeholders(canvas_args) => placeholder::run_placeholders(&canvas_args)?,
    }
    Ok(())
}
