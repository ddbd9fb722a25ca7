// SPDX-License-Identifier: GPL-3.0-or-later
//! Caption rasterization using the [fontdue] crate.
//!
//! Text is first rendered into a [GrayImage] coverage mask, then blended
//! onto a canvas in a solid color with the mask as the per-pixel alpha.
use std::fs;
use std::path::Path;

use anyhow::anyhow;
use fontdue::layout::{
    CoordinateSystem, HorizontalAlign, Layout, LayoutSettings, TextStyle, VerticalAlign,
};
use fontdue::{Font, FontSettings};
use image::imageops::overlay;
use image::{GrayImage, ImageBuffer, Pixel, RgbaImage};
use tracing::warn;

use super::color::Color;

pub(crate) const FONT_SIZE: f32 = 40.0;

/// Load the caption font.
///
/// The named font file is tried first. When it isn't usable, a system
/// sans-serif located through [fontdb] stands in for it.
pub(crate) fn load_font(path: &Path) -> anyhow::Result<Font> {
    match fs::read(path) {
        Ok(data) => match Font::from_bytes(data, FontSettings::default()) {
            Ok(font) => return Ok(font),
            Err(parse_error) => warn!(
                path = %path.display(),
                error = parse_error,
                "unusable font file, falling back to a system font"
            ),
        },
        Err(read_error) => warn!(
            path = %path.display(),
            error = %read_error,
            "font file not readable, falling back to a system font"
        ),
    }
    system_font()
}

/// Find any sans-serif font installed on this system.
pub(crate) fn system_font() -> anyhow::Result<Font> {
    let mut database = fontdb::Database::new();
    database.load_system_fonts();
    let query = fontdb::Query {
        families: &[fontdb::Family::SansSerif],
        ..fontdb::Query::default()
    };
    let id = database
        .query(&query)
        .ok_or_else(|| anyhow!("no sans-serif font installed"))?;
    database
        .with_face_data(id, |data, index| {
            let settings = FontSettings {
                collection_index: index,
                ..FontSettings::default()
            };
            Font::from_bytes(data, settings)
                .map_err(|parse_error| anyhow!("unusable system font: {}", parse_error))
        })
        .ok_or_else(|| anyhow!("system font data unavailable"))?
}

/// Rasterize `text` centered within a `width` x `height` coverage mask.
///
/// Embedded newlines start new lines. Each line is centered horizontally
/// and the whole block is centered vertically.
pub(crate) fn caption_mask(font: &Font, text: &str, width: u32, height: u32) -> GrayImage {
    let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings {
        x: 0.0,
        y: 0.0,
        max_width: Some(width as f32),
        max_height: Some(height as f32),
        horizontal_align: HorizontalAlign::Center,
        vertical_align: VerticalAlign::Middle,
        ..LayoutSettings::default()
    });
    layout.append(&[font], &TextStyle::new(text, FONT_SIZE, 0));
    // Transfer the rasterized glyphs from fontdue onto an image mask. The
    // mask is just the opacity for each pixel of the caption.
    let mut mask = GrayImage::new(width, height);
    for glyph in layout.glyphs() {
        let (metrics, bitmap) = font.rasterize_config(glyph.key);
        if metrics.width == 0 || metrics.height == 0 {
            // Control characters and spaces have no raster data.
            continue;
        }
        let bitmap = ImageBuffer::from_vec(metrics.width as u32, metrics.height as u32, bitmap)
            .expect("the provided buffer to be large enough");
        overlay(&mut mask, &bitmap, glyph.x as u32, glyph.y as u32);
    }
    mask
}

/// Blend a coverage mask onto `canvas` in a solid color.
///
/// Only pixels with non-zero coverage are touched; the mask value becomes
/// the alpha of the blended text color.
pub(crate) fn draw_mask(canvas: &mut RgbaImage, mask: &GrayImage, color: Color) {
    canvas
        .pixels_mut()
        .zip(mask.iter())
        .filter(|(_, coverage)| **coverage != 0)
        .for_each(|(pixel, coverage)| {
            pixel.blend(&color.to_rgba(*coverage));
        });
}
