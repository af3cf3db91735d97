//! Character ROM: 8×8 glyphs for the printable range 0x20–0x7F.
//!
//! Each glyph is 8 bytes, one per scanline top to bottom, MSB = leftmost
//! pixel, bit set = ink. The shapes follow the Sinclair character ROM:
//! code 0x60 is the pound sign and 0x7F the copyright symbol.

/// Number of glyphs in the character ROM.
pub const GLYPH_COUNT: usize = 96;

/// First character code covered by the ROM (space).
pub const FIRST_CODE: u8 = 0x20;

/// Look up the glyph for a character code.
///
/// Returns `None` for codes outside 0x20–0x7F.
#[must_use]
pub fn glyph(code: u8) -> Option<&'static [u8; 8]> {
    if (0x20..=0x7F).contains(&code) {
        Some(&CHARSET[(code - FIRST_CODE) as usize])
    } else {
        None
    }
}

/// Look up the glyph for a character code, substituting the `'?'`
/// placeholder for codes outside the ROM.
#[must_use]
pub fn glyph_or_placeholder(code: u8) -> &'static [u8; 8] {
    glyph(code).unwrap_or(&CHARSET[(b'?' - FIRST_CODE) as usize])
}

/// Glyph bitmaps, indexed by `code - 0x20`.
static CHARSET: [[u8; 8]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x20 ' '
    [0x00, 0x10, 0x10, 0x10, 0x10, 0x00, 0x10, 0x00], // 0x21 '!'
    [0x00, 0x24, 0x24, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x22 '"'
    [0x00, 0x24, 0x7E, 0x24, 0x24, 0x7E, 0x24, 0x00], // 0x23 '#'
    [0x00, 0x08, 0x3E, 0x28, 0x3E, 0x0A, 0x3E, 0x08], // 0x24 '$'
    [0x00, 0x62, 0x64, 0x08, 0x10, 0x26, 0x46, 0x00], // 0x25 '%'
    [0x00, 0x10, 0x28, 0x10, 0x2A, 0x44, 0x3A, 0x00], // 0x26 '&'
    [0x00, 0x08, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x27 '\''
    [0x00, 0x04, 0x08, 0x08, 0x08, 0x08, 0x04, 0x00], // 0x28 '('
    [0x00, 0x20, 0x10, 0x10, 0x10, 0x10, 0x20, 0x00], // 0x29 ')'
    [0x00, 0x00, 0x14, 0x08, 0x3E, 0x08, 0x14, 0x00], // 0x2A '*'
    [0x00, 0x00, 0x08, 0x08, 0x3E, 0x08, 0x08, 0x00], // 0x2B '+'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x08, 0x10], // 0x2C ','
    [0x00, 0x00, 0x00, 0x00, 0x3E, 0x00, 0x00, 0x00], // 0x2D '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00], // 0x2E '.'
    [0x00, 0x00, 0x02, 0x04, 0x08, 0x10, 0x20, 0x00], // 0x2F '/'
    [0x00, 0x3C, 0x46, 0x4A, 0x52, 0x62, 0x3C, 0x00], // 0x30 '0'
    [0x00, 0x18, 0x28, 0x08, 0x08, 0x08, 0x3E, 0x00], // 0x31 '1'
    [0x00, 0x3C, 0x42, 0x02, 0x3C, 0x40, 0x7E, 0x00], // 0x32 '2'
    [0x00, 0x3C, 0x42, 0x0C, 0x02, 0x42, 0x3C, 0x00], // 0x33 '3'
    [0x00, 0x08, 0x18, 0x28, 0x48, 0x7E, 0x08, 0x00], // 0x34 '4'
    [0x00, 0x7E, 0x40, 0x7C, 0x02, 0x42, 0x3C, 0x00], // 0x35 '5'
    [0x00, 0x3C, 0x40, 0x7C, 0x42, 0x42, 0x3C, 0x00], // 0x36 '6'
    [0x00, 0x7E, 0x02, 0x04, 0x08, 0x10, 0x10, 0x00], // 0x37 '7'
    [0x00, 0x3C, 0x42, 0x3C, 0x42, 0x42, 0x3C, 0x00], // 0x38 '8'
    [0x00, 0x3C, 0x42, 0x42, 0x3E, 0x02, 0x3C, 0x00], // 0x39 '9'
    [0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00], // 0x3A ':'
    [0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x10, 0x20], // 0x3B ';'
    [0x00, 0x00, 0x04, 0x08, 0x10, 0x08, 0x04, 0x00], // 0x3C '<'
    [0x00, 0x00, 0x00, 0x3E, 0x00, 0x3E, 0x00, 0x00], // 0x3D '='
    [0x00, 0x00, 0x10, 0x08, 0x04, 0x08, 0x10, 0x00], // 0x3E '>'
    [0x00, 0x3C, 0x42, 0x04, 0x08, 0x00, 0x08, 0x00], // 0x3F '?'
    [0x00, 0x3C, 0x4A, 0x56, 0x5E, 0x40, 0x3C, 0x00], // 0x40 '@'
    [0x00, 0x3C, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x00], // 0x41 'A'
    [0x00, 0x7C, 0x42, 0x7C, 0x42, 0x42, 0x7C, 0x00], // 0x42 'B'
    [0x00, 0x3C, 0x42, 0x40, 0x40, 0x42, 0x3C, 0x00], // 0x43 'C'
    [0x00, 0x78, 0x44, 0x42, 0x42, 0x44, 0x78, 0x00], // 0x44 'D'
    [0x00, 0x7E, 0x40, 0x7C, 0x40, 0x40, 0x7E, 0x00], // 0x45 'E'
    [0x00, 0x7E, 0x40, 0x7C, 0x40, 0x40, 0x40, 0x00], // 0x46 'F'
    [0x00, 0x3C, 0x42, 0x40, 0x4E, 0x42, 0x3C, 0x00], // 0x47 'G'
    [0x00, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x42, 0x00], // 0x48 'H'
    [0x00, 0x3E, 0x08, 0x08, 0x08, 0x08, 0x3E, 0x00], // 0x49 'I'
    [0x00, 0x02, 0x02, 0x02, 0x42, 0x42, 0x3C, 0x00], // 0x4A 'J'
    [0x00, 0x44, 0x48, 0x70, 0x48, 0x44, 0x42, 0x00], // 0x4B 'K'
    [0x00, 0x40, 0x40, 0x40, 0x40, 0x40, 0x7E, 0x00], // 0x4C 'L'
    [0x00, 0x42, 0x66, 0x5A, 0x42, 0x42, 0x42, 0x00], // 0x4D 'M'
    [0x00, 0x42, 0x62, 0x52, 0x4A, 0x46, 0x42, 0x00], // 0x4E 'N'
    [0x00, 0x3C, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00], // 0x4F 'O'
    [0x00, 0x7C, 0x42, 0x42, 0x7C, 0x40, 0x40, 0x00], // 0x50 'P'
    [0x00, 0x3C, 0x42, 0x42, 0x52, 0x4A, 0x3C, 0x00], // 0x51 'Q'
    [0x00, 0x7C, 0x42, 0x42, 0x7C, 0x44, 0x42, 0x00], // 0x52 'R'
    [0x00, 0x3C, 0x40, 0x3C, 0x02, 0x42, 0x3C, 0x00], // 0x53 'S'
    [0x00, 0xFE, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00], // 0x54 'T'
    [0x00, 0x42, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00], // 0x55 'U'
    [0x00, 0x42, 0x42, 0x42, 0x42, 0x24, 0x18, 0x00], // 0x56 'V'
    [0x00, 0x42, 0x42, 0x42, 0x42, 0x5A, 0x24, 0x00], // 0x57 'W'
    [0x00, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x00], // 0x58 'X'
    [0x00, 0x82, 0x44, 0x28, 0x10, 0x10, 0x10, 0x00], // 0x59 'Y'
    [0x00, 0x7E, 0x04, 0x08, 0x10, 0x20, 0x7E, 0x00], // 0x5A 'Z'
    [0x00, 0x0E, 0x08, 0x08, 0x08, 0x08, 0x0E, 0x00], // 0x5B '['
    [0x00, 0x00, 0x40, 0x20, 0x10, 0x08, 0x04, 0x00], // 0x5C '\\'
    [0x00, 0x70, 0x10, 0x10, 0x10, 0x10, 0x70, 0x00], // 0x5D ']'
    [0x00, 0x10, 0x38, 0x54, 0x10, 0x10, 0x10, 0x00], // 0x5E '^' (up arrow)
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF], // 0x5F '_'
    [0x00, 0x1C, 0x22, 0x78, 0x20, 0x20, 0x7E, 0x00], // 0x60 pound sign
    [0x00, 0x00, 0x38, 0x04, 0x3C, 0x44, 0x3C, 0x00], // 0x61 'a'
    [0x00, 0x20, 0x20, 0x3C, 0x22, 0x22, 0x3C, 0x00], // 0x62 'b'
    [0x00, 0x00, 0x1C, 0x20, 0x20, 0x20, 0x1C, 0x00], // 0x63 'c'
    [0x00, 0x04, 0x04, 0x3C, 0x44, 0x44, 0x3C, 0x00], // 0x64 'd'
    [0x00, 0x00, 0x38, 0x44, 0x78, 0x40, 0x3C, 0x00], // 0x65 'e'
    [0x00, 0x0C, 0x10, 0x18, 0x10, 0x10, 0x10, 0x00], // 0x66 'f'
    [0x00, 0x00, 0x3C, 0x44, 0x44, 0x3C, 0x04, 0x38], // 0x67 'g'
    [0x00, 0x40, 0x40, 0x78, 0x44, 0x44, 0x44, 0x00], // 0x68 'h'
    [0x00, 0x10, 0x00, 0x30, 0x10, 0x10, 0x38, 0x00], // 0x69 'i'
    [0x00, 0x04, 0x00, 0x04, 0x04, 0x04, 0x24, 0x18], // 0x6A 'j'
    [0x00, 0x20, 0x28, 0x30, 0x30, 0x28, 0x24, 0x00], // 0x6B 'k'
    [0x00, 0x10, 0x10, 0x10, 0x10, 0x10, 0x0C, 0x00], // 0x6C 'l'
    [0x00, 0x00, 0x68, 0x54, 0x54, 0x54, 0x54, 0x00], // 0x6D 'm'
    [0x00, 0x00, 0x78, 0x44, 0x44, 0x44, 0x44, 0x00], // 0x6E 'n'
    [0x00, 0x00, 0x38, 0x44, 0x44, 0x44, 0x38, 0x00], // 0x6F 'o'
    [0x00, 0x00, 0x78, 0x44, 0x44, 0x78, 0x40, 0x40], // 0x70 'p'
    [0x00, 0x00, 0x3C, 0x44, 0x44, 0x3C, 0x04, 0x06], // 0x71 'q'
    [0x00, 0x00, 0x1C, 0x20, 0x20, 0x20, 0x20, 0x00], // 0x72 'r'
    [0x00, 0x00, 0x38, 0x40, 0x38, 0x04, 0x78, 0x00], // 0x73 's'
    [0x00, 0x10, 0x38, 0x10, 0x10, 0x10, 0x0C, 0x00], // 0x74 't'
    [0x00, 0x00, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00], // 0x75 'u'
    [0x00, 0x00, 0x44, 0x44, 0x28, 0x28, 0x10, 0x00], // 0x76 'v'
    [0x00, 0x00, 0x44, 0x54, 0x54, 0x54, 0x28, 0x00], // 0x77 'w'
    [0x00, 0x00, 0x44, 0x28, 0x10, 0x28, 0x44, 0x00], // 0x78 'x'
    [0x00, 0x00, 0x44, 0x44, 0x44, 0x3C, 0x04, 0x38], // 0x79 'y'
    [0x00, 0x00, 0x7C, 0x08, 0x10, 0x20, 0x7C, 0x00], // 0x7A 'z'
    [0x00, 0x0E, 0x08, 0x30, 0x08, 0x08, 0x0E, 0x00], // 0x7B '{'
    [0x00, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00], // 0x7C '|'
    [0x00, 0x70, 0x10, 0x0C, 0x10, 0x10, 0x70, 0x00], // 0x7D '}'
    [0x00, 0x14, 0x28, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x7E '~'
    [0x3C, 0x42, 0x99, 0xA1, 0xA1, 0x99, 0x42, 0x3C], // 0x7F copyright
];
