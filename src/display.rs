use crate::font::FONT;

/// Prepares the 8x8 frame for the MAX7219 device: tens digit at
/// columns 0-2, ones digit at columns 4-6. Bit 7 of each row byte is
/// column 0.
pub fn prepare_buffer(seconds: u8) -> [u8; 8] {
    let digits = [seconds / 10, seconds % 10];

    let mut rows = [0u8; 8];
    let mut cursor = 0;

    for &d in digits.iter() {
        for r in 0..8 {
            for c in 0..3 {
                if FONT[d as usize][r][c] != 0 {
                    rows[r] |= 1 << (7 - (cursor + c));
                }
            }
        }
        cursor += 4; // 3 glyph columns plus a blank separator
    }

    rows
}
