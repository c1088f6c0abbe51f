//! A fixed 5x7 bitmap font covering printable ASCII, `' '` through `'~'`.
//!
//! Each glyph is 5 column bytes, one bit per row with bit 0 the top row and bit 7 unused, which
//! matches the display RAM byte layout of a page so glyph columns can be burst straight into a
//! data transaction.

pub const GLYPH_WIDTH: usize = 5;

const FIRST_CHAR: u8 = 0x20;
const NUM_GLYPHS: usize = 95;

/// Look up the column bytes for `c`. Returns `None` for characters outside printable ASCII.
pub fn glyph(c: char) -> Option<&'static [u8; GLYPH_WIDTH]> {
    match c {
        ' '..='~' => Some(&GLYPHS[c as usize - FIRST_CHAR as usize]),
        _ => None,
    }
}

#[cfg_attr(rustfmt, rustfmt_skip)]
pub const GLYPHS: [[u8; GLYPH_WIDTH]; NUM_GLYPHS] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // Space
    [0x00, 0x00, 0x4f, 0x00, 0x00], // !
    [0x00, 0x03, 0x00, 0x03, 0x00], // "
    [0x14, 0x3e, 0x14, 0x3e, 0x14], // #
    [0x24, 0x2a, 0x7f, 0x2a, 0x12], // $
    [0x63, 0x13, 0x08, 0x64, 0x63], // %
    [0x36, 0x49, 0x55, 0x22, 0x50], // &
    [0x00, 0x00, 0x07, 0x00, 0x00], // '
    [0x00, 0x1c, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1c, 0x00], // )
    [0x0a, 0x04, 0x1f, 0x04, 0x0a], // *
    [0x04, 0x04, 0x1f, 0x04, 0x04], // +
    [0x50, 0x30, 0x00, 0x00, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x60, 0x60, 0x00, 0x00, 0x00], // .
    [0x00, 0x60, 0x1c, 0x03, 0x00], // /
    [0x3e, 0x41, 0x49, 0x41, 0x3e], // 0
    [0x00, 0x02, 0x7f, 0x00, 0x00], // 1
    [0x46, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x49, 0x4d, 0x4b, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7f, 0x10], // 4
    [0x4f, 0x49, 0x49, 0x49, 0x31], // 5
    [0x3e, 0x51, 0x49, 0x49, 0x32], // 6
    [0x01, 0x01, 0x71, 0x0d, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x26, 0x49, 0x49, 0x49, 0x3e], // 9
    [0x00, 0x33, 0x33, 0x00, 0x00], // :
    [0x00, 0x53, 0x33, 0x00, 0x00], // ;
    [0x00, 0x08, 0x14, 0x22, 0x41], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x41, 0x22, 0x14, 0x08, 0x00], // >
    [0x06, 0x01, 0x51, 0x09, 0x06], // ?
    [0x3e, 0x41, 0x49, 0x15, 0x1e], // @
    [0x78, 0x16, 0x11, 0x16, 0x78], // A
    [0x7f, 0x49, 0x49, 0x49, 0x36], // B
    [0x3e, 0x41, 0x41, 0x41, 0x22], // C
    [0x7f, 0x41, 0x41, 0x41, 0x3e], // D
    [0x7f, 0x49, 0x49, 0x49, 0x49], // E
    [0x7f, 0x09, 0x09, 0x09, 0x09], // F
    [0x3e, 0x41, 0x41, 0x49, 0x7b], // G
    [0x7f, 0x08, 0x08, 0x08, 0x7f], // H
    [0x00, 0x00, 0x7f, 0x00, 0x00], // I
    [0x38, 0x40, 0x40, 0x41, 0x3f], // J
    [0x7f, 0x08, 0x08, 0x14, 0x63], // K
    [0x7f, 0x40, 0x40, 0x40, 0x40], // L
    [0x7f, 0x06, 0x18, 0x06, 0x7f], // M
    [0x7f, 0x06, 0x18, 0x60, 0x7f], // N
    [0x3e, 0x41, 0x41, 0x41, 0x3e], // O
    [0x7f, 0x09, 0x09, 0x09, 0x06], // P
    [0x3e, 0x41, 0x51, 0x21, 0x5e], // Q
    [0x7f, 0x09, 0x19, 0x29, 0x46], // R
    [0x26, 0x49, 0x49, 0x49, 0x32], // S
    [0x01, 0x01, 0x7f, 0x01, 0x01], // T
    [0x3f, 0x40, 0x40, 0x40, 0x7f], // U
    [0x0f, 0x30, 0x40, 0x30, 0x0f], // V
    [0x1f, 0x60, 0x1c, 0x60, 0x1f], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x03, 0x04, 0x78, 0x04, 0x03], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
    [0x00, 0x7f, 0x41, 0x00, 0x00], // [
    [0x03, 0x1c, 0x60, 0x00, 0x00], // backslash
    [0x00, 0x41, 0x7f, 0x00, 0x00], // ]
    [0x0c, 0x02, 0x01, 0x02, 0x0c], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x01, 0x02, 0x04, 0x00], // `
    [0x20, 0x54, 0x54, 0x54, 0x78], // a
    [0x7f, 0x48, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x44], // c
    [0x38, 0x44, 0x44, 0x48, 0x7f], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x08, 0x7e, 0x09, 0x09, 0x00], // f
    [0x0c, 0x52, 0x52, 0x54, 0x3e], // g
    [0x7f, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x00, 0x7d, 0x00, 0x00], // i
    [0x00, 0x40, 0x3d, 0x00, 0x00], // j
    [0x7f, 0x10, 0x28, 0x44, 0x00], // k
    [0x00, 0x00, 0x3f, 0x40, 0x00], // l
    [0x7c, 0x04, 0x18, 0x04, 0x78], // m
    [0x7c, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0x7f, 0x12, 0x11, 0x11, 0x0e], // p
    [0x0e, 0x11, 0x11, 0x12, 0x7f], // q
    [0x00, 0x7c, 0x08, 0x04, 0x04], // r
    [0x48, 0x54, 0x54, 0x54, 0x24], // s
    [0x04, 0x3e, 0x44, 0x44, 0x00], // t
    [0x3c, 0x40, 0x40, 0x20, 0x7c], // u
    [0x1c, 0x20, 0x40, 0x20, 0x1c], // v
    [0x1c, 0x60, 0x18, 0x60, 0x1c], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x46, 0x28, 0x10, 0x08, 0x06], // y
    [0x44, 0x64, 0x54, 0x4c, 0x44], // z
    [0x00, 0x08, 0x77, 0x41, 0x00], // {
    [0x00, 0x00, 0x7f, 0x00, 0x00], // |
    [0x00, 0x41, 0x77, 0x08, 0x00], // }
    [0x10, 0x08, 0x18, 0x10, 0x08], // ~
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_printable_ascii() {
        assert_eq!(GLYPHS.len(), NUM_GLYPHS);
        assert_eq!('~' as usize - ' ' as usize + 1, NUM_GLYPHS);
    }

    #[test]
    fn known_glyphs() {
        assert_eq!(glyph('A'), Some(&[0x78, 0x16, 0x11, 0x16, 0x78]));
        assert_eq!(glyph(' '), Some(&[0x00, 0x00, 0x00, 0x00, 0x00]));
        assert_eq!(glyph('~'), Some(&[0x10, 0x08, 0x18, 0x10, 0x08]));
    }

    #[test]
    fn no_glyph_outside_printable_ascii() {
        assert_eq!(glyph('\x1f'), None);
        assert_eq!(glyph('\x7f'), None);
        assert_eq!(glyph('é'), None);
        assert_eq!(glyph('\n'), None);
    }

    #[test]
    fn glyph_rows_fit_seven_pixels() {
        for entry in GLYPHS.iter() {
            for &column in entry.iter() {
                assert_eq!(column & 0x80, 0);
            }
        }
    }
}
