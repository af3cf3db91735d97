//! ZX Spectrum 16-colour palette.
//!
//! The Spectrum displays 15 unique colours (black appears twice) using a
//! 3-bit RGB scheme with a BRIGHT modifier. Non-bright colours use a lower
//! intensity (0xD7) while bright colours use full intensity (0xFF).

/// One palette entry: 8-bit RGBA, fully opaque.
pub type Rgba = [u8; 4];

/// RGBA palette: 16 entries (8 normal + 8 bright).
///
/// Index layout: `bright_bit << 3 | colour_3bit`
///
/// Colours: black, blue, red, magenta, green, cyan, yellow, white.
pub const PALETTE: [Rgba; 16] = [
    // Normal (bright = 0)
    [0x00, 0x00, 0x00, 0xFF], // 0: Black
    [0x00, 0x00, 0xD7, 0xFF], // 1: Blue
    [0xD7, 0x00, 0x00, 0xFF], // 2: Red
    [0xD7, 0x00, 0xD7, 0xFF], // 3: Magenta
    [0x00, 0xD7, 0x00, 0xFF], // 4: Green
    [0x00, 0xD7, 0xD7, 0xFF], // 5: Cyan
    [0xD7, 0xD7, 0x00, 0xFF], // 6: Yellow
    [0xD7, 0xD7, 0xD7, 0xFF], // 7: White
    // Bright (bright = 1)
    [0x00, 0x00, 0x00, 0xFF], // 8: Black (same as normal)
    [0x00, 0x00, 0xFF, 0xFF], // 9: Bright Blue
    [0xFF, 0x00, 0x00, 0xFF], // 10: Bright Red
    [0xFF, 0x00, 0xFF, 0xFF], // 11: Bright Magenta
    [0x00, 0xFF, 0x00, 0xFF], // 12: Bright Green
    [0x00, 0xFF, 0xFF, 0xFF], // 13: Bright Cyan
    [0xFF, 0xFF, 0x00, 0xFF], // 14: Bright Yellow
    [0xFF, 0xFF, 0xFF, 0xFF], // 15: Bright White
];

/// Colour indices into [`PALETTE`].
pub const BLACK: u8 = 0;
pub const BLUE: u8 = 1;
pub const RED: u8 = 2;
pub const MAGENTA: u8 = 3;
pub const GREEN: u8 = 4;
pub const CYAN: u8 = 5;
pub const YELLOW: u8 = 6;
pub const WHITE: u8 = 7;
pub const BRIGHT_BLACK: u8 = 8;
pub const BRIGHT_BLUE: u8 = 9;
pub const BRIGHT_RED: u8 = 10;
pub const BRIGHT_MAGENTA: u8 = 11;
pub const BRIGHT_GREEN: u8 = 12;
pub const BRIGHT_CYAN: u8 = 13;
pub const BRIGHT_YELLOW: u8 = 14;
pub const BRIGHT_WHITE: u8 = 15;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bright_black_matches_normal_black() {
        assert_eq!(PALETTE[BLACK as usize], PALETTE[BRIGHT_BLACK as usize]);
    }

    #[test]
    fn bright_counterparts_differ_except_black() {
        for base in 1..8usize {
            assert_ne!(PALETTE[base], PALETTE[base + 8]);
        }
    }

    #[test]
    fn all_entries_opaque() {
        for entry in &PALETTE {
            assert_eq!(entry[3], 0xFF);
        }
    }
}
