#![doc = include_str!("../README.md")]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "chart")]
pub mod chart;
pub mod curve;
pub mod resources;
pub mod rvc;

pub use curve::{CurveSet, Sample};
pub use rvc::RvcMode;
