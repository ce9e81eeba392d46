//! Resources definitions.

// Tables taken verbatim from the LB-202 MCU firmware.

pub mod attenuation;

pub use attenuation::LUT_MA220_ATTENUATION;
