// SPDX-License-Identifier: GPL-3.0-or-later
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Resize `image` so it completely fills `width` x `height` while keeping
/// its aspect ratio, trimming the overhang evenly from both sides.
pub(crate) fn fit(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let (source_width, source_height) = image.dimensions();
    let scale = f64::max(
        width as f64 / source_width as f64,
        height as f64 / source_height as f64,
    );
    // Rounding must never leave the scaled image smaller than the target.
    let scaled_width = ((source_width as f64 * scale).round() as u32).max(width);
    let scaled_height = ((source_height as f64 * scale).round() as u32).max(height);
    let resized = imageops::resize(image, scaled_width, scaled_height, FilterType::Lanczos3);
    let left = (scaled_width - width) / 2;
    let top = (scaled_height - height) / 2;
    imageops::crop_imm(&resized, left, top, width, height).to_image()
}

#[cfg(test)]
mod fit_test {
    use super::fit;
    use image::{Rgba, RgbaImage};

    #[test]
    fn exact_dimensions() {
        let wide = RgbaImage::new(300, 100);
        let tall = RgbaImage::new(100, 300);
        let square = RgbaImage::new(64, 64);
        for source in &[wide, tall, square] {
            let fitted = fit(source, 128, 128);
            assert_eq!(fitted.dimensions(), (128, 128));
        }
    }

    #[test]
    fn upscales_small_sources() {
        let tiny = RgbaImage::new(10, 7);
        assert_eq!(fit(&tiny, 1024, 1024).dimensions(), (1024, 1024));
    }

    #[test]
    fn uniform_source_stays_uniform() {
        let red = Rgba([255, 0, 0, 255]);
        let source = RgbaImage::from_pixel(200, 100, red);
        let fitted = fit(&source, 50, 50);
        assert!(fitted.pixels().all(|pixel| *pixel == red));
    }

    #[test]
    fn crops_the_long_axis() {
        // Left half green, right half blue. Fitting to a square keeps the
        // middle, so both halves survive at the edges.
        let mut source = RgbaImage::from_pixel(400, 100, Rgba([0, 255, 0, 255]));
        for x in 200..400 {
            for y in 0..100 {
                source.put_pixel(x, y, Rgba([0, 0, 255, 255]));
            }
        }
        let fitted = fit(&source, 100, 100);
        assert_eq!(fitted.get_pixel(0, 50), &Rgba([0, 255, 0, 255]));
        assert_eq!(fitted.get_pixel(99, 50), &Rgba([0, 0, 255, 255]));
    }
}
