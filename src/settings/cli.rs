// SPDX-License-Identifier: GPL-3.0-or-later
use structopt::StructOpt;

use std::path::PathBuf;

#[derive(Debug, StructOpt)]
#[structopt(about = "Generate placeholder drawable assets.")]
pub struct Args {
    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Crop the center of an image into a circular 512x512 icon.
    CropIcon(CropIconArgs),
    /// Render a framed composite photo for each character sprite.
    Composite(CompositeArgs),
    /// Generate the placeholder user photo.
    Photo(CanvasArgs),
    /// Generate the full set of placeholder backgrounds, sprites and icons.
    Placeholders(CanvasArgs),
}

#[derive(Debug, StructOpt)]
pub struct CropIconArgs {
    /// Path to the source image.
    #[structopt(parse(from_os_str))]
    pub input: PathBuf,

    /// Path the cropped icon is written to.
    #[structopt(parse(from_os_str))]
    pub output: PathBuf,

    /// Fraction of the source's shorter edge kept by the crop. Smaller
    /// values zoom in further on the center.
    #[structopt(long, default_value = "0.85")]
    pub scale_factor: f32,
}

#[derive(Debug, StructOpt)]
pub struct CompositeArgs {
    /// Directory the photo, frame and sprites are read from and the
    /// composites are written to.
    #[structopt(
        short,
        long,
        parse(from_os_str),
        default_value = "app/src/main/res/drawable"
    )]
    pub resource_dir: PathBuf,

    /// Character identifiers to render composites for.
    pub characters: Vec<String>,
}

#[derive(Debug, StructOpt)]
pub struct CanvasArgs {
    /// Directory the generated assets are written to.
    #[structopt(
        short,
        long,
        parse(from_os_str),
        default_value = "app/src/main/res/drawable"
    )]
    pub resource_dir: PathBuf,

    /// Font file used for captions, with a system sans-serif fallback.
    #[structopt(long, parse(from_os_str), default_value = "arial.ttf")]
    pub font: PathBuf,
}
