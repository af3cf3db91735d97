//! Integration tests for the display subsystem.
//!
//! These drive the full drawing-to-presentation flow and verify the
//! composited output. Screenshot artefacts are saved to `test_output/` at
//! the repository root for visual inspection.

use std::path::Path;

use zx_display::palette::{self, PALETTE};
use zx_display::{BufferSurface, CHAR_SIZE, COLUMNS, Display, LINES, SCALE, XMAX, YMAX, glyph};

/// Output directory for test artefacts (repo root's test_output/).
const OUTPUT_DIR: &str = "../../test_output";

fn ensure_output_dir() {
    let _ = std::fs::create_dir_all(OUTPUT_DIR);
}

/// RGBA pixel at a physical surface coordinate.
fn surface_pixel(surface: &BufferSurface, x: usize, y: usize) -> [u8; 4] {
    surface.pixel(x, y)
}

#[test]
fn demo_sequence_presents_to_surface() {
    let mut display = Display::new();

    // The classic boot demo: black ink dithered over bright yellow paper
    display.set_paper(palette::BRIGHT_YELLOW);
    display.set_ink(palette::BLACK);
    display.clear();
    display.draw_charset();
    display.draw_text(2, 4, "ZX SPECTRUM DISPLAY");

    let mut surface = BufferSurface::new();
    display.present(&mut surface);

    assert_eq!(surface.width(), XMAX * SCALE);
    assert_eq!(surface.height(), YMAX * SCALE);

    // Top-left logical pixel of the dither is paper (bright yellow)
    assert_eq!(
        surface_pixel(&surface, 0, 0),
        PALETTE[palette::BRIGHT_YELLOW as usize]
    );
    // Its right neighbour is ink (black)
    assert_eq!(
        surface_pixel(&surface, SCALE, 0),
        PALETTE[palette::BLACK as usize]
    );

    ensure_output_dir();
    let path = Path::new(OUTPUT_DIR).join("demo_sequence.png");
    if let Err(err) = zx_display::capture::save_screenshot(&surface, &path) {
        eprintln!("Warning: could not save {}: {err}", path.display());
    }
}

#[test]
fn partial_present_updates_only_its_region() {
    let mut display = Display::new();
    display.set_ink(palette::WHITE);
    display.set_paper(palette::BLACK);
    display.draw_text(10, 12, "HI");

    let mut surface = BufferSurface::new();
    // Present just the two touched cells
    display.present_region(&mut surface, 10, 12, 1, 2);

    // A pixel far outside the presented region keeps the surface default
    assert_eq!(surface_pixel(&surface, 0, 0), [0x00, 0x00, 0x00, 0xFF]);

    // The 'H' lands at cell (10, 12): check its vertical stroke pixel.
    // Glyph row 1 of 'H' is 0x42, bit 1 set (x offset 1 inside the cell).
    let h = glyph(b'H').expect("glyph");
    assert_eq!(h[1], 0x42);
    let x = (12 * CHAR_SIZE + 1) * SCALE;
    let y = (10 * CHAR_SIZE + 1) * SCALE;
    assert_eq!(
        surface_pixel(&surface, x, y),
        PALETTE[palette::WHITE as usize]
    );
}

#[test]
fn full_screen_present_covers_every_cell() {
    let mut display = Display::new();
    display.set_ink(palette::BRIGHT_CYAN);
    display.set_paper(palette::BLUE);
    display.clear();

    let mut surface = BufferSurface::new();
    display.present(&mut surface);

    // Sample one pixel per cell corner; a dithered clear leaves no cell
    // at the surface default, since neither blue nor bright cyan is
    // opaque black.
    for row in 0..LINES {
        for col in 0..COLUMNS {
            let pixel = surface_pixel(&surface, col * CHAR_SIZE * SCALE, row * CHAR_SIZE * SCALE);
            assert_ne!(pixel, [0x00, 0x00, 0x00, 0xFF], "cell ({row},{col}) untouched");
        }
    }
}

#[test]
fn noise_burst_then_present_stays_in_bounds() {
    let mut display = Display::new();
    display.clear();
    display.randomize_region(6, 6, 400, 400);

    // Rendering after arbitrary noise must stay well-formed
    let frame = display.render();
    assert_eq!(
        frame.pixels.len(),
        COLUMNS * CHAR_SIZE * SCALE * LINES * CHAR_SIZE * SCALE * 4
    );
    // Every pixel is a palette colour (alpha always opaque)
    for alpha in frame.pixels.iter().skip(3).step_by(4) {
        assert_eq!(*alpha, 0xFF);
    }
}
