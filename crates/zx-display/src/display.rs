//! Display context: geometry constants, colour state, drawing operations.

use crate::attribute;
use crate::charset;
use crate::memory::DisplayMemory;
use crate::palette;

/// Each character cell is 8 pixels high and wide.
pub const CHAR_SIZE: usize = 8;
/// Number of text columns (and horizontal colour attributes).
pub const COLUMNS: usize = 32;
/// Number of text lines (and vertical colour attributes).
pub const LINES: usize = 24;
/// One Spectrum pixel is this many pixels on modern displays.
pub const SCALE: usize = 3;
/// Horizontal resolution.
pub const XMAX: usize = 256;
/// Vertical resolution.
pub const YMAX: usize = 192;

/// The display: virtual screen memory plus the current ink/paper pair.
///
/// Owns all mutable display state. Drawing operations write into the
/// memory planes; the compositor (see `render_region`) reads them back
/// out. All operations are synchronous and run to completion.
pub struct Display {
    memory: DisplayMemory,
    ink: u8,
    paper: u8,
}

impl Display {
    /// A blank display with black ink on white paper.
    #[must_use]
    pub fn new() -> Self {
        Self {
            memory: DisplayMemory::new(),
            ink: palette::BLACK,
            paper: palette::WHITE,
        }
    }

    /// Current ink colour index.
    #[must_use]
    pub fn ink(&self) -> u8 {
        self.ink
    }

    /// Current paper colour index.
    #[must_use]
    pub fn paper(&self) -> u8 {
        self.paper
    }

    /// Set the ink colour (0–15; higher values clamp to bright white).
    pub fn set_ink(&mut self, ink: u8) {
        self.ink = ink.min(15);
    }

    /// Set the paper colour (0–15; higher values clamp to bright white).
    pub fn set_paper(&mut self, paper: u8) {
        self.paper = paper.min(15);
    }

    /// Read access to the underlying memory planes.
    #[must_use]
    pub fn memory(&self) -> &DisplayMemory {
        &self.memory
    }

    /// Clear the screen to a dither of the current ink and paper.
    pub fn clear(&mut self) {
        self.memory.clear(self.ink, self.paper);
    }

    /// Fill a cell rectangle of both planes with random bytes.
    pub fn randomize_region(&mut self, row: usize, col: usize, height: usize, width: usize) {
        self.memory.randomize_region(row, col, height, width);
    }

    /// Draw one character at a cell position in the current colours.
    ///
    /// Characters outside the ROM's 0x20–0x7F range draw the `'?'`
    /// placeholder. Out-of-grid positions are a silent no-op.
    pub fn draw_char(&mut self, row: usize, col: usize, ch: char) {
        let code = u8::try_from(u32::from(ch)).unwrap_or(0);
        let glyph = charset::glyph_or_placeholder(code);
        let attr = attribute::pack(self.ink, self.paper);
        self.memory.set_glyph(row, col, glyph, attr);
    }

    /// Draw a string left to right from a cell position.
    ///
    /// Wraps to column 0 of the next row at the right edge; characters
    /// past the last row are dropped.
    pub fn draw_text(&mut self, row: usize, col: usize, text: &str) {
        let mut row = row;
        let mut col = col;
        for ch in text.chars() {
            if col >= COLUMNS {
                col = 0;
                row += 1;
            }
            if row >= LINES {
                return;
            }
            self.draw_char(row, col, ch);
            col += 1;
        }
    }

    /// Draw the full character ROM near the bottom of the grid.
    ///
    /// 96 glyphs fill exactly three rows. Visual self-test for the ROM.
    pub fn draw_charset(&mut self) {
        let all: String = (0x20..=0x7Fu8).map(char::from).collect();
        self.draw_text(LINES - 3, 0, &all);
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::glyph;

    #[test]
    fn draw_char_writes_glyph_and_attribute() {
        let mut display = Display::new();
        display.set_ink(palette::BLUE);
        display.set_paper(palette::WHITE);
        display.draw_char(3, 7, 'A');

        let expected = glyph(b'A').expect("glyph");
        for subrow in 0..CHAR_SIZE {
            assert_eq!(display.memory().bitmap(3, subrow, 7), expected[subrow]);
        }
        assert_eq!(
            display.memory().attr(3, 7),
            attribute::pack(palette::BLUE, palette::WHITE)
        );
    }

    #[test]
    fn draw_char_out_of_range_uses_placeholder() {
        let mut display = Display::new();
        display.draw_char(0, 0, '\u{241B}');
        display.draw_char(0, 1, '\x07');

        let placeholder = glyph(b'?').expect("glyph");
        for subrow in 0..CHAR_SIZE {
            assert_eq!(display.memory().bitmap(0, subrow, 0), placeholder[subrow]);
            assert_eq!(display.memory().bitmap(0, subrow, 1), placeholder[subrow]);
        }
    }

    #[test]
    fn draw_text_wraps_at_right_edge() {
        let mut display = Display::new();
        // 30 -> two chars on row 1, the rest from column 0 of row 2
        display.draw_text(1, 30, "WRAP");

        let w = glyph(b'W').expect("glyph");
        let r = glyph(b'R').expect("glyph");
        let a = glyph(b'A').expect("glyph");
        let p = glyph(b'P').expect("glyph");
        assert_eq!(display.memory().bitmap(1, 1, 30), w[1]);
        assert_eq!(display.memory().bitmap(1, 1, 31), r[1]);
        assert_eq!(display.memory().bitmap(2, 1, 0), a[1]);
        assert_eq!(display.memory().bitmap(2, 1, 1), p[1]);
    }

    #[test]
    fn draw_text_truncates_past_last_row() {
        let mut display = Display::new();
        let before = display.memory().pixel_plane().to_vec();

        // Two cells left on the grid: "XY" lands, "Z" is dropped
        display.draw_text(LINES - 1, COLUMNS - 2, "XYZ");

        let x = glyph(b'X').expect("glyph");
        let y = glyph(b'Y').expect("glyph");
        assert_eq!(display.memory().bitmap(LINES - 1, 1, COLUMNS - 2), x[1]);
        assert_eq!(display.memory().bitmap(LINES - 1, 1, COLUMNS - 1), y[1]);
        // Everything before the last two cells is untouched
        let after = display.memory().pixel_plane();
        let last_cells = (LINES - 1) * CHAR_SIZE * COLUMNS;
        assert_eq!(&after[..last_cells], &before[..last_cells]);
    }

    #[test]
    fn draw_text_entirely_off_grid_is_dropped() {
        let mut display = Display::new();
        let before = display.memory().pixel_plane().to_vec();
        display.draw_text(LINES, 0, "NOPE");
        assert_eq!(display.memory().pixel_plane(), &before[..]);
    }

    #[test]
    fn charset_fills_last_three_rows() {
        let mut display = Display::new();
        display.draw_charset();

        // First glyph is the space at (LINES-3, 0), last is 0x7F at the
        // bottom-right cell.
        let copyright = glyph(0x7F).expect("glyph");
        assert_eq!(display.memory().bitmap(LINES - 1, 0, COLUMNS - 1), copyright[0]);
        let space = glyph(b' ').expect("glyph");
        assert_eq!(display.memory().bitmap(LINES - 3, 0, 0), space[0]);
    }

    #[test]
    fn colour_setters_clamp() {
        let mut display = Display::new();
        display.set_ink(99);
        display.set_paper(200);
        assert_eq!(display.ink(), 15);
        assert_eq!(display.paper(), 15);
    }
}
