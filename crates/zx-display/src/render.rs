//! Raster compositor: memory planes in, upscaled RGBA frames out.
//!
//! For each cell in the requested region the attribute byte selects an
//! ink/paper colour pair, and each bitmap bit selects one of the two for
//! its pixel. Every logical pixel becomes a SCALE×SCALE block in the
//! output: the horizontal copies are written inline with the bit loop,
//! the vertical copies by duplicating each finished scanline. Attribute
//! lookups go through a one-deep cache: runs of same-coloured cells are
//! the common case, and the cache skips the unpack and palette fetch for
//! every cell after the first of a run.

use crate::attribute;
use crate::display::{CHAR_SIZE, COLUMNS, Display, LINES, SCALE};
use crate::palette::{PALETTE, Rgba};
use crate::surface::Surface;

/// Bytes per RGBA pixel.
const PIXEL_BYTES: usize = 4;

/// One rendered frame: an RGBA buffer plus its target position.
///
/// Pixels are 8-bit RGBA, row-major, top to bottom. `origin_x`/`origin_y`
/// locate the frame on the full scaled screen.
pub struct Frame {
    /// Horizontal position on the target surface, in physical pixels.
    pub origin_x: usize,
    /// Vertical position on the target surface, in physical pixels.
    pub origin_y: usize,
    /// Frame width in physical pixels.
    pub width: usize,
    /// Frame height in physical pixels.
    pub height: usize,
    /// RGBA pixel data, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl Display {
    /// Render a cell rectangle of the screen to an RGBA frame.
    ///
    /// The rectangle clips to the grid; a request that is empty (zero
    /// height or width) or starts off-grid yields `None`. The frame
    /// covers `width*8*SCALE` × `height*8*SCALE` physical pixels with its
    /// origin at `(col*8*SCALE, row*8*SCALE)`.
    #[must_use]
    pub fn render_region(&self, row: usize, col: usize, height: usize, width: usize) -> Option<Frame> {
        if height < 1 || width < 1 || row >= LINES || col >= COLUMNS {
            return None;
        }
        let height = height.min(LINES - row);
        let width = width.min(COLUMNS - col);
        Some(self.render_clipped(row, col, height, width))
    }

    /// Render the full screen.
    #[must_use]
    pub fn render(&self) -> Frame {
        self.render_clipped(0, 0, LINES, COLUMNS)
    }

    /// Render a cell rectangle and blit it to a surface.
    pub fn present_region(
        &self,
        surface: &mut dyn Surface,
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    ) {
        if let Some(frame) = self.render_region(row, col, height, width) {
            surface.blit(&frame);
        }
    }

    /// Render the full screen and blit it to a surface.
    pub fn present(&self, surface: &mut dyn Surface) {
        surface.blit(&self.render());
    }

    /// Core compositing loop. The rectangle must already be clipped.
    fn render_clipped(&self, row: usize, col: usize, height: usize, width: usize) -> Frame {
        let frame_width = width * CHAR_SIZE * SCALE;
        let frame_height = height * CHAR_SIZE * SCALE;
        let stride = frame_width * PIXEL_BYTES;
        let mut pixels = vec![0u8; stride * frame_height];

        // One-deep attribute cache: adjacent cells usually share colours.
        let mut cached: Option<(u8, Rgba, Rgba)> = None;

        for cell_row in 0..height {
            for subrow in 0..CHAR_SIZE {
                let line_start = (cell_row * CHAR_SIZE + subrow) * SCALE * stride;

                for cell_col in 0..width {
                    let attr = self.memory().attr(row + cell_row, col + cell_col);
                    let (ink_rgba, paper_rgba) = match cached {
                        Some((seen, ink, paper)) if seen == attr => (ink, paper),
                        _ => {
                            let (ink, paper) = attribute::unpack(attr);
                            let pair = (PALETTE[ink as usize], PALETTE[paper as usize]);
                            cached = Some((attr, pair.0, pair.1));
                            pair
                        }
                    };

                    let bitmap = self.memory().bitmap(row + cell_row, subrow, col + cell_col);
                    for bit in 0..CHAR_SIZE {
                        let colour = if bitmap & (0x80 >> bit) != 0 {
                            ink_rgba
                        } else {
                            paper_rgba
                        };
                        // Horizontal upscale: SCALE copies per bit
                        let x = (cell_col * CHAR_SIZE + bit) * SCALE;
                        let mut offset = line_start + x * PIXEL_BYTES;
                        for _ in 0..SCALE {
                            pixels[offset..offset + PIXEL_BYTES].copy_from_slice(&colour);
                            offset += PIXEL_BYTES;
                        }
                    }
                }

                // Vertical upscale: duplicate the finished scanline
                for dup in 1..SCALE {
                    pixels.copy_within(line_start..line_start + stride, line_start + dup * stride);
                }
            }
        }

        Frame {
            origin_x: col * CHAR_SIZE * SCALE,
            origin_y: row * CHAR_SIZE * SCALE,
            width: frame_width,
            height: frame_height,
            pixels,
        }
    }
}
