//! Traditional MA-220 curve.
//!
//! Measured curve without mute. Maximum attenuation is 12 dB at the fully
//! counter-clockwise position.

use crate::resources::LUT_MA220_ATTENUATION;

use super::RVC_MAX;

/// Reverses an RVC value so that 0 is the loudest position.
#[inline]
pub fn reverse(rvc: u8) -> u8 {
    if rvc >= RVC_MAX {
        0
    } else {
        RVC_MAX - rvc
    }
}

/// Returns the positive attenuation in dB for a reversed RVC value.
///
/// Indices above the table end are clamped to the last entry.
#[inline]
pub fn hilton_attenuation(rvc: u8) -> u8 {
    let rvc = rvc.min(RVC_MAX);

    (-LUT_MA220_ATTENUATION[rvc as usize]) as u8
}

/// Returns the attenuation in dB (0 or negative) for a raw RVC value.
#[inline]
pub fn attenuation_db(rvc: u8) -> i8 {
    -(hilton_attenuation(reverse(rvc)) as i8)
}
