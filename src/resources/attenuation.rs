//! Attenuation lookup tables.
//!
//! The traditional MA-220 curve is a measured curve, quantized to whole dB
//! with minimized quantization error:
//!
//! | RVC   | dB      |
//! |-------|---------|
//! | 1     | 0       |
//! | 0.875 | -1.501  |
//! | 0.75  | -4.408  |
//! | 0.625 | -6.363  |
//! | 0.5   | -8.637  |
//! | 0.375 | -10.011 |
//! | 0.25  | -10.937 |
//! | 0.125 | -11.527 |
//! | 0     | -11.841 |

/// Number of entries in [`LUT_MA220_ATTENUATION`].
pub const LUT_MA220_ATTENUATION_SIZE: usize = 134;

/// Traditional MA-220 attenuation in dB, indexed by reversed RVC value.
#[rustfmt::skip]
pub const LUT_MA220_ATTENUATION: [i8; LUT_MA220_ATTENUATION_SIZE] = [
    -12, -12, -12, -12, -12, -12, -12, -12, -12, -12,
    -12, -12, -12, -12, -12, -12, -12, -12, -11, -11,
    -11, -11, -11, -11, -11, -11, -11, -11, -11, -11,
    -11, -11, -11, -11, -11, -11, -11, -11, -11, -11,
    -11, -11, -10, -10, -10, -10, -10, -10, -10, -10,
    -10, -10, -10, -10, -10, -10, -10,  -9,  -9,  -9,
     -9,  -9,  -9,  -9,  -9,  -9,  -9,  -9,  -8,  -8,
     -8,  -8,  -8,  -8,  -8,  -8,  -7,  -7,  -7,  -7,
     -7,  -7,  -7,  -6,  -6,  -6,  -6,  -6,  -6,  -6,
     -6,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,
     -4,  -4,  -4,  -4,  -4,  -3,  -3,  -3,  -3,  -3,
     -3,  -2,  -2,  -2,  -2,  -2,  -2,  -1,  -1,  -1,
     -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,   0,   0,
      0,   0,   0,   0,
];
