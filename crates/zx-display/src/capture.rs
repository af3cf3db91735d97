//! Headless capture: PNG screenshots of a presented surface.

use std::error::Error;
use std::fs;
use std::io::BufWriter;
use std::path::Path;

use crate::surface::BufferSurface;

/// Save a surface's contents as a PNG file.
pub fn save_screenshot(surface: &BufferSurface, path: &Path) -> Result<(), Box<dyn Error>> {
    let file = fs::File::create(path)?;
    let w = BufWriter::new(file);
    let mut encoder = png::Encoder::new(w, surface.width() as u32, surface.height() as u32);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(surface.pixels())?;
    Ok(())
}
