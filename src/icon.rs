// SPDX-License-Identifier: GPL-3.0-or-later
//! Circular icon cropping.
use std::path::Path;

use anyhow::Context;
use image::imageops::{self, FilterType};
use image::{GrayImage, Luma, RgbaImage};
use imageproc::drawing::draw_filled_ellipse_mut;
use tracing::{error, info};

use crate::settings::cli::CropIconArgs;

/// Edge length of the finished icon.
const TARGET_SIZE: u32 = 512;

/// Any failure is reported and swallowed; the command still exits cleanly.
pub(crate) fn run(args: &CropIconArgs) {
    if let Err(crop_error) = crop_circle(&args.input, &args.output, args.scale_factor) {
        error!(error = %format!("{:#}", crop_error), "icon crop failed");
    }
}

/// Crop the center of `input` into a circular 512x512 icon at `output`.
///
/// `scale_factor` is the fraction of the shorter source edge kept by the
/// crop; values below 1.0 zoom in on the center.
pub(crate) fn crop_circle(input: &Path, output: &Path, scale_factor: f32) -> anyhow::Result<()> {
    let source = image::open(input)
        .with_context(|| format!("opening {}", input.display()))?
        .to_rgba8();
    let icon = render_icon(&source, scale_factor);
    icon.save(output)
        .with_context(|| format!("saving {}", output.display()))?;
    info!(path = %output.display(), "saved circular icon");
    Ok(())
}

fn render_icon(source: &RgbaImage, scale_factor: f32) -> RgbaImage {
    let (width, height) = source.dimensions();
    // A sub-pixel crop is bumped to one pixel; resizing a 0x0 image panics.
    let crop_size = ((width.min(height) as f32 * scale_factor) as u32).max(1);
    // Center the crop rectangle with truncating division. Oversized crops
    // are clamped to the image bounds by crop_imm.
    let left = (i64::from(width / 2) - i64::from(crop_size / 2)).max(0) as u32;
    let top = (i64::from(height / 2) - i64::from(crop_size / 2)).max(0) as u32;
    let cropped = imageops::crop_imm(source, left, top, crop_size, crop_size).to_image();
    let resized = imageops::resize(&cropped, TARGET_SIZE, TARGET_SIZE, FilterType::Lanczos3);

    let mut mask = GrayImage::new(TARGET_SIZE, TARGET_SIZE);
    let radius = (TARGET_SIZE / 2) as i32;
    draw_filled_ellipse_mut(&mut mask, (radius, radius), radius, radius, Luma([255u8]));

    // Paste the crop through the mask: opacity is gated by the ellipse.
    let mut icon = RgbaImage::new(TARGET_SIZE, TARGET_SIZE);
    for (dest, (src, coverage)) in icon
        .pixels_mut()
        .zip(resized.pixels().zip(mask.iter()))
    {
        if *coverage == 0 {
            continue;
        }
        let mut pixel = *src;
        pixel.0[3] = ((u16::from(pixel.0[3]) * u16::from(*coverage)) / 255) as u8;
        *dest = pixel;
    }
    icon
}
