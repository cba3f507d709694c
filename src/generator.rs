use std::path::{Path, PathBuf};

use anyhow::Result;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use image::Rgb;

use crate::canvas::Canvas;

/// Output image dimensions in pixels.
pub const WIDTH: u32 = 200;
pub const HEIGHT: u32 = 200;

/// CSS "lightblue"
pub const BACKGROUND: Rgb<u8> = Rgb([173, 216, 230]);

/// Fixed output filename, relative to the working directory.
pub const OUTPUT_FILE: &str = "test_inspection_photo.png";

/// The two annotation lines and their top-left anchor points.
const LABELS: [(&str, i32, i32); 2] = [("INSPECTION", 50, 90), ("PHOTO", 70, 110)];

/// Where the generated file landed and how big it is.
#[derive(Debug)]
pub struct Report {
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// Build the in-memory test card: a light-blue background with the two
/// black annotation lines drawn in a fixed order.
pub fn render() -> Canvas {
    let mut canvas = Canvas::new(WIDTH, HEIGHT, BACKGROUND);
    for (text, x, y) in LABELS {
        canvas.draw_label(text, x, y, Rgb888::BLACK);
    }
    canvas
}

/// Render the test card and write it as `test_inspection_photo.png`
/// inside `dir`, overwriting any previous file.
pub fn generate_into(dir: &Path) -> Result<Report> {
    let path = dir.join(OUTPUT_FILE);
    let size_bytes = render().save(&path)?;
    Ok(Report { path, size_bytes })
}

/// Render the test card into the current working directory.
pub fn generate() -> Result<Report> {
    generate_into(Path::new("."))
}
