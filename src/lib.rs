pub mod canvas;
pub mod generator;

pub use canvas::Canvas;
pub use generator::{BACKGROUND, HEIGHT, OUTPUT_FILE, Report, WIDTH, generate, generate_into, render};
