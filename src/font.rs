/// 3x5 digit glyphs padded to 8 rows, indexed as FONT[digit][row][col].
/// Nonzero means the pixel is lit.
pub const FONT: [[[u8; 3]; 8]; 10] = [
    // 0
    [
        [0, 0, 0],
        [1, 1, 1],
        [1, 0, 1],
        [1, 0, 1],
        [1, 0, 1],
        [1, 1, 1],
        [0, 0, 0],
        [0, 0, 0],
    ],
    // 1
    [
        [0, 0, 0],
        [0, 1, 0],
        [1, 1, 0],
        [0, 1, 0],
        [0, 1, 0],
        [1, 1, 1],
        [0, 0, 0],
        [0, 0, 0],
    ],
    // 2
    [
        [0, 0, 0],
        [1, 1, 1],
        [0, 0, 1],
        [1, 1, 1],
        [1, 0, 0],
        [1, 1, 1],
        [0, 0, 0],
        [0, 0, 0],
    ],
    // 3
    [
        [0, 0, 0],
        [1, 1, 1],
        [0, 0, 1],
        [0, 1, 1],
        [0, 0, 1],
        [1, 1, 1],
        [0, 0, 0],
        [0, 0, 0],
    ],
    // 4
    [
        [0, 0, 0],
        [1, 0, 1],
        [1, 0, 1],
        [1, 1, 1],
        [0, 0, 1],
        [0, 0, 1],
        [0, 0, 0],
        [0, 0, 0],
    ],
    // 5
    [
        [0, 0, 0],
        [1, 1, 1],
        [1, 0, 0],
        [1, 1, 1],
        [0, 0, 1],
        [1, 1, 1],
        [0, 0, 0],
        [0, 0, 0],
    ],
    // 6
    [
        [0, 0, 0],
        [1, 1, 1],
        [1, 0, 0],
        [1, 1, 1],
        [1, 0, 1],
        [1, 1, 1],
        [0, 0, 0],
        [0, 0, 0],
    ],
    // 7
    [
        [0, 0, 0],
        [1, 1, 1],
        [0, 0, 1],
        [0, 1, 0],
        [0, 1, 0],
        [0, 1, 0],
        [0, 0, 0],
        [0, 0, 0],
    ],
    // 8
    [
        [0, 0, 0],
        [1, 1, 1],
        [1, 0, 1],
        [1, 1, 1],
        [1, 0, 1],
        [1, 1, 1],
        [0, 0, 0],
        [0, 0, 0],
    ],
    // 9
    [
        [0, 0, 0],
        [1, 1, 1],
        [1, 0, 1],
        [1, 1, 1],
        [0, 0, 1],
        [1, 1, 1],
        [0, 0, 0],
        [0, 0, 0],
    ],
];
