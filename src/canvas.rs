use std::convert::Infallible;
use std::path::Path;

use anyhow::{Context, Result};
use embedded_graphics::Drawable;
use embedded_graphics::Pixel;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Point, Size};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::text::{Baseline, Text};
use image::{Rgb, RgbImage};

/// In-memory RGB raster the generator draws onto before serialization.
///
/// Implements the embedded-graphics `DrawTarget` so text renders through
/// that crate's built-in bitmap fonts instead of a font file on disk.
pub struct Canvas {
    pixels: RgbImage,
}

impl Canvas {
    /// Allocate a canvas filled with a solid background color.
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            pixels: RgbImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Draw one line of text with its top-left corner at (x, y).
    pub fn draw_label(&mut self, text: &str, x: i32, y: i32, color: Rgb888) {
        let style = MonoTextStyle::new(&FONT_6X10, color);
        // The draw target is infallible, so the result carries no error.
        let _ = Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(self);
    }

    /// Encode the canvas as PNG at `path` and return the on-disk byte size.
    pub fn save(&self, path: &Path) -> Result<u64> {
        self.pixels
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        let meta = std::fs::metadata(path)
            .with_context(|| format!("Failed to stat {}", path.display()))?;
        Ok(meta.len())
    }

    /// Read a pixel, or `None` when (x, y) lies outside the canvas.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        self.pixels.get_pixel_checked(x, y).copied()
    }

    pub fn into_inner(self) -> RgbImage {
        self.pixels
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.pixels.width(), self.pixels.height())
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // Clip anything outside the canvas
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as u32, point.y as u32);
            if x >= self.pixels.width() || y >= self.pixels.height() {
                continue;
            }
            self.pixels.put_pixel(x, y, Rgb([color.r(), color.g(), color.b()]));
        }
        Ok(())
    }
}
