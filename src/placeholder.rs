// SPDX-License-Identifier: GPL-3.0-or-later
//! Solid-color placeholder canvases with centered captions.
use std::fs;

use anyhow::Context;
use fontdue::Font;
use image::buffer::ConvertBuffer;
use image::{RgbImage, RgbaImage};
use tracing::info;

use crate::render::color::Color;
use crate::render::font::{caption_mask, draw_mask, load_font};
use crate::settings::cli::CanvasArgs;

/// Default edge lengths for square placeholder assets.
const DEFAULT_SIZE: (u32, u32) = (512, 512);

/// One entry of the fixed placeholder asset set.
struct Asset {
    file: &'static str,
    caption: &'static str,
    fill: Color,
    size: (u32, u32),
}

const PLACEHOLDERS: &[Asset] = &[
    Asset {
        file: "ultraman_bg_graveyard.png",
        caption: "Monster Graveyard\n(Placeholder)",
        fill: Color::new(50, 0, 50),
        size: (1080, 1920),
    },
    Asset {
        file: "char_sd_zero.png",
        caption: "Ultraman Zero\n(Placeholder)",
        fill: Color::new(0, 0, 255),
        size: DEFAULT_SIZE,
    },
    Asset {
        file: "char_sd_belial.png",
        caption: "Ultraman Belial\n(Placeholder)",
        fill: Color::new(0, 0, 0),
        size: DEFAULT_SIZE,
    },
    Asset {
        file: "char_sd_ace.png",
        caption: "Ultraman Ace\n(Placeholder)",
        fill: Color::new(255, 100, 0),
        size: DEFAULT_SIZE,
    },
    Asset {
        file: "effect_beam_zero.png",
        caption: "Zero Beam",
        fill: Color::new(0, 255, 255),
        size: (200, 50),
    },
    Asset {
        file: "effect_beam_belial.png",
        caption: "Belial Beam",
        fill: Color::new(255, 0, 0),
        size: (200, 50),
    },
    Asset {
        file: "icon_ultraman_toy.png",
        caption: "Ultraman Game",
        fill: Color::new(200, 200, 200),
        size: DEFAULT_SIZE,
    },
];

/// Fill a canvas with `fill` and draw `caption` centered in `text_color`.
pub(crate) fn render_canvas(
    font: &Font,
    caption: &str,
    fill: Color,
    size: (u32, u32),
    text_color: Color,
) -> RgbaImage {
    let (width, height) = size;
    let mut canvas = RgbaImage::from_pixel(width, height, fill.to_rgba(u8::MAX));
    let mask = caption_mask(font, caption, width, height);
    draw_mask(&mut canvas, &mask, text_color);
    canvas
}

/// Generate the placeholder user photo as an opaque JPEG.
pub(crate) fn run_photo(args: &CanvasArgs) -> anyhow::Result<()> {
    fs::create_dir_all(&args.resource_dir)
        .with_context(|| format!("creating {}", args.resource_dir.display()))?;
    let font = load_font(&args.font)?;
    let canvas = render_canvas(
        &font,
        "User Child Photo\n(Placeholder)",
        Color::new(255, 255, 200),
        DEFAULT_SIZE,
        Color::BLACK,
    );
    let flattened: RgbImage = canvas.convert();
    let path = args.resource_dir.join("user_child_photo.jpg");
    flattened
        .save(&path)
        .with_context(|| format!("saving {}", path.display()))?;
    info!(path = %path.display(), "created placeholder photo");
    Ok(())
}

/// Generate the full placeholder asset set as RGBA PNGs.
pub(crate) fn run_placeholders(args: &CanvasArgs) -> anyhow::Result<()> {
    fs::create_dir_all(&args.resource_dir)
        .with_context(|| format!("creating {}", args.resource_dir.display()))?;
    let font = load_font(&args.font)?;
    for asset in PLACEHOLDERS {
        let canvas = render_canvas(&font, asset.caption, asset.fill, asset.size, Color::WHITE);
        let path = args.resource_dir.join(asset.file);
        canvas
            .save(&path)
            .with_context(|| format!("saving {}", path.display()))?;
        info!(path = %path.display(), fill = %format!("{:x}", asset.fill), "created placeholder asset");
    }
    Ok(())
}

#[cfg(test)]
mod placeholder_test {
    use super::{render_canvas, PLACEHOLDERS};
    use crate::render::color::Color;
    use crate::render::font::system_font;
    use fontdue::Font;

    fn any_font() -> Option<Font> {
        system_font().ok()
    }

    #[test]
    fn asset_table_is_complete() {
        assert_eq!(PLACEHOLDERS.len(), 7);
        assert!(PLACEHOLDERS.iter().all(|asset| asset.file.ends_with(".png")));
        for asset in PLACEHOLDERS {
            let (width, height) = asset.size;
            assert!(width > 0 && height > 0);
        }
    }

    #[test]
    fn canvas_is_filled_and_opaque() {
        let font = match any_font() {
            Some(font) => font,
            None => return,
        };
        let fill = Color::new(0, 0, 255);
        let canvas = render_canvas(&font, "Ultraman Zero", fill, (512, 512), Color::WHITE);
        assert_eq!(canvas.dimensions(), (512, 512));
        // Every pixel is opaque; corners are untouched fill.
        assert!(canvas.pixels().all(|pixel| pixel[3] == 255));
        assert_eq!(canvas.get_pixel(0, 0), &fill.to_rgba(255));
        assert_eq!(canvas.get_pixel(511, 511), &fill.to_rgba(255));
        // And the caption actually shows up somewhere.
        assert!(canvas.pixels().any(|pixel| *pixel != fill.to_rgba(255)));
    }

    #[test]
    fn generation_is_deterministic() {
        let font = match any_font() {
            Some(font) => font,
            None => return,
        };
        let first = render_canvas(&font, "Zero Beam", Color::new(0, 255, 255), (200, 50), Color::WHITE);
        let second = render_canvas(&font, "Zero Beam", Color::new(0, 255, 255), (200, 50), Color::WHITE);
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn round_trip_through_files() {
        let font = match any_font() {
            Some(font) => font,
            None => return,
        };
        let dir = tempfile::tempdir().unwrap();
        let canvas = render_canvas(&font, "Ultraman Game", Color::new(200, 200, 200), (64, 64), Color::WHITE);
        let path = dir.path().join("icon_ultraman_toy.png");
        canvas.save(&path).unwrap();
        let reread = image::open(&path).unwrap().to_rgba8();
        assert_eq!(reread.as_raw(), canvas.as_raw());
    }
}
