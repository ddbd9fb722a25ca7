// SPDX-License-Identifier: GPL-3.0-or-later
//! Framed composite photos: the user photo, a character sprite, then the
//! frame overlay, flattened to an opaque JPEG.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use image::buffer::ConvertBuffer;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{RgbImage, Rgba, RgbaImage};
use tracing::{error, info, warn};

use crate::render::fit::fit;
use crate::settings::cli::CompositeArgs;

/// Edge length of the square composite canvas.
const CANVAS_SIZE: u32 = 1024;
/// Height sprites are scaled to before placement.
const SPRITE_HEIGHT: u32 = 500;
/// Distance from the bottom and right canvas edges to the sprite.
const SPRITE_MARGIN: u32 = 50;
/// Quality of the flattened JPEG output.
const JPEG_QUALITY: u8 = 90;
/// Channel value above which a pixel counts as white.
const WHITE_THRESHOLD: u8 = 240;

const DEFAULT_CHARACTERS: &[&str] = &["zero", "ace", "belial"];

pub(crate) fn run(args: &CompositeArgs) {
    let characters: Vec<String> = if args.characters.is_empty() {
        DEFAULT_CHARACTERS.iter().map(|name| name.to_string()).collect()
    } else {
        args.characters.clone()
    };
    for character in &characters {
        // A failed composite is logged; the remaining characters still
        // get rendered.
        if let Err(composite_error) = create_composite(&args.resource_dir, character) {
            error!(
                character = character.as_str(),
                error = %format!("{:#}", composite_error),
                "composite failed"
            );
        }
    }
}

/// Key out the frame's white background.
///
/// Every pixel whose red, green and blue channels are all above
/// [WHITE_THRESHOLD] becomes fully transparent white; everything else keeps
/// its color and alpha. The scan is purely per-pixel, so isolated white
/// pixels inside non-white regions are keyed out as well.
pub(crate) fn key_out_white(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let [red, green, blue, _] = pixel.0;
        if red > WHITE_THRESHOLD && green > WHITE_THRESHOLD && blue > WHITE_THRESHOLD {
            *pixel = Rgba([255, 255, 255, 0]);
        }
    }
}

/// A sprite scaled for placement, with its top-left canvas offset.
pub(crate) struct PlacedSprite {
    pub(crate) image: RgbaImage,
    pub(crate) x: u32,
    pub(crate) y: u32,
}

/// Stack the layers in their fixed order: background, sprite, frame.
pub(crate) fn compose(
    background: &RgbaImage,
    frame: &RgbaImage,
    sprite: Option<&PlacedSprite>,
) -> RgbaImage {
    let mut canvas = RgbaImage::new(CANVAS_SIZE, CANVAS_SIZE);
    imageops::overlay(&mut canvas, background, 0, 0);
    if let Some(sprite) = sprite {
        imageops::overlay(&mut canvas, &sprite.image, sprite.x, sprite.y);
    }
    imageops::overlay(&mut canvas, frame, 0, 0);
    canvas
}

/// Render `photo_pike_<character>.jpg` from the layers in `resource_dir`.
///
/// The background is the one layer the composite can't do without. A
/// missing frame is replaced with a transparent canvas and a missing
/// sprite is simply left out.
pub(crate) fn create_composite(resource_dir: &Path, character: &str) -> anyhow::Result<()> {
    let background_path = resource_dir.join("user_child_photo.jpg");
    let background = image::open(&background_path)
        .with_context(|| format!("opening {}", background_path.display()))?
        .to_rgba8();
    let background = fit(&background, CANVAS_SIZE, CANVAS_SIZE);

    let frame = match load_frame(resource_dir) {
        Ok(frame) => frame,
        Err(frame_error) => {
            warn!(
                error = %format!("{:#}", frame_error),
                "no usable frame, compositing without one"
            );
            RgbaImage::new(CANVAS_SIZE, CANVAS_SIZE)
        }
    };

    let sprite = match load_sprite(resource_dir, character) {
        Ok(sprite) => Some(sprite),
        Err(sprite_error) => {
            warn!(
                character,
                error = %format!("{:#}", sprite_error),
                "no usable sprite, omitting the layer"
            );
            None
        }
    };

    let flattened: RgbImage = compose(&background, &frame, sprite.as_ref()).convert();
    let output_path = resource_dir.join(format!("photo_pike_{}.jpg", character));
    let file = File::create(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY)
        .encode_image(&flattened)
        .with_context(|| format!("encoding {}", output_path.display()))?;
    writer
        .flush()
        .with_context(|| format!("writing {}", output_path.display()))?;
    info!(path = %output_path.display(), "saved composite photo");
    Ok(())
}

fn load_frame(resource_dir: &Path) -> anyhow::Result<RgbaImage> {
    let path = resource_dir.join("ultraman_photo_frame.png");
    let frame = image::open(&path)
        .with_context(|| format!("opening {}", path.display()))?
        .to_rgba8();
    let mut frame = imageops::resize(&frame, CANVAS_SIZE, CANVAS_SIZE, FilterType::Lanczos3);
    key_out_white(&mut frame);
    Ok(frame)
}

fn load_sprite(resource_dir: &Path, character: &str) -> anyhow::Result<PlacedSprite> {
    let path = resource_dir.join(format!("char_sd_{}.png", character));
    let sprite = image::open(&path)
        .with_context(|| format!("opening {}", path.display()))?
        .to_rgba8();
    let (source_width, source_height) = sprite.dimensions();
    let ratio = source_width as f32 / source_height as f32;
    let width = ((SPRITE_HEIGHT as f32 * ratio) as u32).max(1);
    let image = imageops::resize(&sprite, width, SPRITE_HEIGHT, FilterType::Lanczos3);
    // Bottom-right placement; sprites wider than the canvas pin to the
    // left edge instead of hanging off it.
    let x = CANVAS_SIZE.saturating_sub(width + SPRITE_MARGIN);
    let y = CANVAS_SIZE - SPRITE_HEIGHT - SPRITE_MARGIN;
    Ok(PlacedSprite { image, x, y })
}



#[cfg(test)]
mod create_composite_test {
    use super::{create_composite, CANVAS_SIZE};
    use image::{Rgba, RgbaImage};

    #[test]
    fn missing_background_aborts() {
        let dir = tempfile::tempdir().unwrap();
        assert!(create_composite(dir.path(), "zero").is_err());
        assert!(!dir.path().join("photo_pike_zero.jpg").exists());
    }

    #[test]
    fn frame_and_sprite_are_optional() {
        let dir = tempfile::tempdir().unwrap();
        let background = RgbaImage::from_pixel(32, 32, Rgba([255, 0, 0, 255]));
        image::DynamicImage::ImageRgba8(background)
            .to_rgb8()
            .save(dir.path().join("user_child_photo.jpg"))
            .unwrap();
        create_composite(dir.path(), "zero").unwrap();
        let output = image::open(dir.path().join("photo_pike_zero.jpg"))
            .unwrap()
            .to_rgb8();
        assert_eq!(output.dimensions(), (CANVAS_SIZE, CANVAS_SIZE));
        // Only the background layer is present, so everything stays red
        // (within JPEG tolerance).
        let center = output.get_pixel(512, 512);
        assert!(center[0] > 200 && center[1] < 60 && center[2] < 60);
    }

    #[test]
    fn sprite_lands_bottom_right() {
        let dir = tempfile::tempdir().unwrap();
        let background = RgbaImage::from_pixel(32, 32, Rgba([255, 0, 0, 255]));
        image::DynamicImage::ImageRgba8(background)
            .to_rgb8()
            .save(dir.path().join("user_child_photo.jpg"))
            .unwrap();
        let sprite = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 255, 255]));
        sprite.save(dir.path().join("char_sd_zero.png")).unwrap();
        create_composite(dir.path(), "zero").unwrap();
        let output = image::open(dir.path().join("photo_pike_zero.jpg"))
            .unwrap()
            .to_rgb8();
        // A square sprite scaled to 500px sits at (474, 474)..(974, 974).
        let inside = output.get_pixel(700, 700);
        assert!(inside[2] > 200 && inside[0] < 60);
        let outside = output.get_pixel(100, 100);
        assert!(outside[0] > 200 && outside[2] < 60);
    }
}
