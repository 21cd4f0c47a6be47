/*
    zx81scr

    Copyright 2022-2025 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------

    zx81scr_core::glyph_table::charset.rs

    Embedded character set definitions. The ZX81 ROM font is stored in ROM
    order; the ZX80 uses the same 64 glyph bitmaps with a different code
    assignment for block graphics and punctuation, described by a
    code-to-ZX81-index map.

*/

/// 64 glyphs, 8 row bytes each, in ZX81 code order.
#[rustfmt::skip]
pub const ZX81_FONT: [[u8; 8]; 64] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0  space
    [0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00], // 1  quadrant upper left
    [0x0F, 0x0F, 0x0F, 0x0F, 0x00, 0x00, 0x00, 0x00], // 2  quadrant upper right
    [0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00], // 3  upper half
    [0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0xF0, 0xF0], // 4  quadrant lower left
    [0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0], // 5  left half
    [0x0F, 0x0F, 0x0F, 0x0F, 0xF0, 0xF0, 0xF0, 0xF0], // 6  upper right + lower left
    [0xFF, 0xFF, 0xFF, 0xFF, 0xF0, 0xF0, 0xF0, 0xF0], // 7  three quadrants
    [0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55], // 8  grey
    [0x00, 0x00, 0x00, 0x00, 0xAA, 0x55, 0xAA, 0x55], // 9  lower half grey
    [0xAA, 0x55, 0xAA, 0x55, 0x00, 0x00, 0x00, 0x00], // 10 upper half grey
    [0x00, 0x24, 0x24, 0x00, 0x00, 0x00, 0x00, 0x00], // 11 "
    [0x00, 0x1C, 0x22, 0x78, 0x20, 0x20, 0x7E, 0x00], // 12 £
    [0x00, 0x08, 0x3E, 0x28, 0x3E, 0x0A, 0x3E, 0x08], // 13 $
    [0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00], // 14 :
    [0x00, 0x3C, 0x42, 0x04, 0x08, 0x00, 0x08, 0x00], // 15 ?
    [0x00, 0x04, 0x08, 0x08, 0x08, 0x08, 0x04, 0x00], // 16 (
    [0x00, 0x20, 0x10, 0x10, 0x10, 0x10, 0x20, 0x00], // 17 )
    [0x00, 0x00, 0x10, 0x08, 0x04, 0x08, 0x10, 0x00], // 18 >
    [0x00, 0x00, 0x04, 0x08, 0x10, 0x08, 0x04, 0x00], // 19 <
    [0x00, 0x00, 0x00, 0x3E, 0x00, 0x3E, 0x00, 0x00], // 20 =
    [0x00, 0x00, 0x08, 0x08, 0x3E, 0x08, 0x08, 0x00], // 21 +
    [0x00, 0x00, 0x00, 0x00, 0x3E, 0x00, 0x00, 0x00], // 22 -
    [0x00, 0x00, 0x14, 0x08, 0x3E, 0x08, 0x14, 0x00], // 23 *
    [0x00, 0x00, 0x02, 0x04, 0x08, 0x10, 0x20, 0x00], // 24 /
    [0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x10, 0x20], // 25 ;
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x08, 0x10], // 26 ,
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00], // 27 .
    [0x00, 0x3C, 0x46, 0x4A, 0x52, 0x62, 0x3C, 0x00], // 28 0
    [0x00, 0x18, 0x28, 0x08, 0x08, 0x08, 0x3E, 0x00], // 29 1
    [0x00, 0x3C, 0x42, 0x02, 0x3C, 0x40, 0x7E, 0x00], // 30 2
    [0x00, 0x3C, 0x42, 0x0C, 0x02, 0x42, 0x3C, 0x00], // 31 3
    [0x00, 0x08, 0x18, 0x28, 0x48, 0x7E, 0x08, 0x00], // 32 4
    [0x00, 0x7E, 0x40, 0x7C, 0x02, 0x42, 0x3C, 0x00], // 33 5
    [0x00, 0x3C, 0x40, 0x7C, 0x42, 0x42, 0x3C, 0x00], // 34 6
    [0x00, 0x7E, 0x02, 0x04, 0x08, 0x10, 0x10, 0x00], // 35 7
    [0x00, 0x3C, 0x42, 0x3C, 0x42, 0x42, 0x3C, 0x00], // 36 8
    [0x00, 0x3C, 0x42, 0x42, 0x3E, 0x02, 0x3C, 0x00], // 37 9
    [0x00, 0x3C, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x00], // 38 A
    [0x00, 0x7C, 0x42, 0x7C, 0x42, 0x42, 0x7C, 0x00], // 39 B
    [0x00, 0x3C, 0x42, 0x40, 0x40, 0x42, 0x3C, 0x00], // 40 C
    [0x00, 0x78, 0x44, 0x42, 0x42, 0x44, 0x78, 0x00], // 41 D
    [0x00, 0x7E, 0x40, 0x7C, 0x40, 0x40, 0x7E, 0x00], // 42 E
    [0x00, 0x7E, 0x40, 0x7C, 0x40, 0x40, 0x40, 0x00], // 43 F
    [0x00, 0x3C, 0x42, 0x40, 0x4E, 0x42, 0x3C, 0x00], // 44 G
    [0x00, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x42, 0x00], // 45 H
    [0x00, 0x3E, 0x08, 0x08, 0x08, 0x08, 0x3E, 0x00], // 46 I
    [0x00, 0x02, 0x02, 0x02, 0x42, 0x42, 0x3C, 0x00], // 47 J
    [0x00, 0x44, 0x48, 0x70, 0x48, 0x44, 0x42, 0x00], // 48 K
    [0x00, 0x40, 0x40, 0x40, 0x40, 0x40, 0x7E, 0x00], // 49 L
    [0x00, 0x42, 0x66, 0x5A, 0x42, 0x42, 0x42, 0x00], // 50 M
    [0x00, 0x42, 0x62, 0x52, 0x4A, 0x46, 0x42, 0x00], // 51 N
    [0x00, 0x3C, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00], // 52 O
    [0x00, 0x7C, 0x42, 0x42, 0x7C, 0x40, 0x40, 0x00], // 53 P
    [0x00, 0x3C, 0x42, 0x42, 0x52, 0x4A, 0x3C, 0x00], // 54 Q
    [0x00, 0x7C, 0x42, 0x42, 0x7C, 0x44, 0x42, 0x00], // 55 R
    [0x00, 0x3C, 0x40, 0x3C, 0x02, 0x42, 0x3C, 0x00], // 56 S
    [0x00, 0xFE, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00], // 57 T
    [0x00, 0x42, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00], // 58 U
    [0x00, 0x42, 0x42, 0x42, 0x42, 0x24, 0x18, 0x00], // 59 V
    [0x00, 0x42, 0x42, 0x42, 0x42, 0x5A, 0x24, 0x00], // 60 W
    [0x00, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x00], // 61 X
    [0x00, 0x82, 0x44, 0x28, 0x10, 0x10, 0x10, 0x00], // 62 Y
    [0x00, 0x7E, 0x04, 0x08, 0x10, 0x20, 0x7E, 0x00], // 63 Z
];

/// Printable form of each ZX81 glyph. The half-grey blocks use the
/// Symbols for Legacy Computing block.
#[rustfmt::skip]
pub const ZX81_GLYPHS: [char; 64] = [
    ' ', '▘', '▝', '▀', '▖', '▌', '▞', '▛', '▒', '\u{1FB8F}', '\u{1FB8E}',
    '"', '£', '$', ':', '?', '(', ')', '>', '<', '=', '+', '-', '*', '/', ';', ',', '.',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// ZX81 font index for each ZX80 character code.
#[rustfmt::skip]
pub const ZX80_TO_ZX81: [u8; 64] = [
    0,  11, 1,  2,  3,  4,  5,  6,  7,  8,  9,  10, 12, 13, 14, 15,
    16, 17, 22, 21, 23, 24, 20, 18, 19, 25, 26, 27, 28, 29, 30, 31,
    32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47,
    48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63,
];
