//! Virtual display memory: the two planes behind the Spectrum screen.
//!
//! The pixel plane holds one bit per pixel, packed eight to a byte with
//! the MSB leftmost. Bytes are laid out character-row-major: byte
//! `(row*8 + subrow) * COLUMNS + col` is scanline `subrow` of the cell at
//! `(row, col)`. The attribute plane holds one byte per cell at
//! `row * COLUMNS + col`.
//!
//! All mutating operations are bounds-forgiving: coordinates outside the
//! grid clip or no-op, they never fail.

use rand::Rng;

use crate::attribute;
use crate::display::{CHAR_SIZE, COLUMNS, LINES, XMAX, YMAX};
use crate::palette;

/// Pixel plane size in bytes (one bit per pixel).
pub const PIXEL_PLANE_LEN: usize = XMAX * YMAX / 8;

/// Attribute plane size in bytes (one byte per cell).
pub const ATTR_PLANE_LEN: usize = COLUMNS * LINES;

/// Checkerboard dither byte for even scanlines (leftmost pixel = paper).
const DITHER_EVEN: u8 = 0b0101_0101;
/// Checkerboard dither byte for odd scanlines.
const DITHER_ODD: u8 = 0b1010_1010;

/// The Spectrum's two display memory planes.
pub struct DisplayMemory {
    pixels: [u8; PIXEL_PLANE_LEN],
    attrs: [u8; ATTR_PLANE_LEN],
}

impl DisplayMemory {
    /// Fresh display memory: blank bitmap, black ink on white paper.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pixels: [0; PIXEL_PLANE_LEN],
            attrs: [attribute::pack(palette::BLACK, palette::WHITE); ATTR_PLANE_LEN],
        }
    }

    /// Byte offset of scanline `subrow` of the cell at `(row, col)`.
    fn pixel_index(row: usize, subrow: usize, col: usize) -> usize {
        (row * CHAR_SIZE + subrow) * COLUMNS + col
    }

    /// Byte offset of the attribute for the cell at `(row, col)`.
    fn attr_index(row: usize, col: usize) -> usize {
        row * COLUMNS + col
    }

    /// Bitmap byte for scanline `subrow` (0–7) of the cell at `(row, col)`.
    ///
    /// Coordinates must be within the grid.
    #[must_use]
    pub fn bitmap(&self, row: usize, subrow: usize, col: usize) -> u8 {
        self.pixels[Self::pixel_index(row, subrow, col)]
    }

    /// Attribute byte for the cell at `(row, col)`.
    ///
    /// Coordinates must be within the grid.
    #[must_use]
    pub fn attr(&self, row: usize, col: usize) -> u8 {
        self.attrs[Self::attr_index(row, col)]
    }

    /// The raw pixel plane.
    #[must_use]
    pub fn pixel_plane(&self) -> &[u8] {
        &self.pixels
    }

    /// The raw attribute plane.
    #[must_use]
    pub fn attribute_plane(&self) -> &[u8] {
        &self.attrs
    }

    /// Clear the whole screen to an ink/paper pair with a dither pattern.
    ///
    /// Every attribute cell gets the packed pair; the bitmap becomes a
    /// one-pixel checkerboard of ink and paper, so the screen reads as a
    /// 50% blend of the two colours. Scanline parity picks the phase,
    /// which keeps the alternation true in both axes.
    pub fn clear(&mut self, ink: u8, paper: u8) {
        self.attrs = [attribute::pack(ink, paper); ATTR_PLANE_LEN];
        for y in 0..YMAX {
            let pattern = if y % 2 == 0 { DITHER_EVEN } else { DITHER_ODD };
            let start = y * COLUMNS;
            self.pixels[start..start + COLUMNS].fill(pattern);
        }
    }

    /// Write a glyph's 8 scanlines and an attribute byte into one cell.
    ///
    /// Out-of-grid coordinates are a silent no-op.
    pub fn set_glyph(&mut self, row: usize, col: usize, glyph: &[u8; 8], attr: u8) {
        if row >= LINES || col >= COLUMNS {
            return;
        }
        self.attrs[Self::attr_index(row, col)] = attr;
        for (subrow, &byte) in glyph.iter().enumerate() {
            self.pixels[Self::pixel_index(row, subrow, col)] = byte;
        }
    }

    /// Fill a cell rectangle of both planes with random bytes.
    ///
    /// Height and width clip to the grid. Random attribute bytes keep
    /// bit 7 clear (FLASH is unsupported). Cells outside the rectangle
    /// are untouched.
    pub fn randomize_region(&mut self, row: usize, col: usize, height: usize, width: usize) {
        if row >= LINES || col >= COLUMNS {
            return;
        }
        let height = height.min(LINES - row);
        let width = width.min(COLUMNS - col);

        let mut rng = rand::rng();
        for r in row..row + height {
            for c in col..col + width {
                self.attrs[Self::attr_index(r, c)] = rng.random::<u8>() & 0x7F;
                for subrow in 0..CHAR_SIZE {
                    self.pixels[Self::pixel_index(r, subrow, c)] = rng.random();
                }
            }
        }
    }
}

impl Default for DisplayMemory {
    fn default() -> Self {
        Self::new()
    }
}
