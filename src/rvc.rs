//! Remote volume control handling.
//!
//! Converts ADC readings of the remote pot into attenuator settings for the
//! selected curve, and ramps between settings in 1 dB steps so that changes
//! don't produce zipper noise.

use crate::curve::default_mode::TaperShape;
use crate::curve::traditional;

/// ADC readings above this value mean no remote is plugged in.
pub const RVC_ABSENT_THRESHOLD: u8 = 0xE0;

/// Attenuation programmed by [`RvcController::init`], before the first reading.
pub const STARTUP_ATTENUATION_DB: u8 = 15;

/// Curve selection, stored as a 1-bit preference.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RvcMode {
    /// Linearized audio taper with mute.
    #[default]
    DefaultWithMute = 0,
    /// Measured MA-220 curve, no mute.
    TraditionalMa220 = 1,
}

impl RvcMode {
    pub fn from_pref_bit(bit: u8) -> Self {
        match bit & 0x1 {
            0 => Self::DefaultWithMute,
            _ => Self::TraditionalMa220,
        }
    }

    #[inline]
    pub fn pref_bit(self) -> u8 {
        self as u8
    }

    pub fn toggled(self) -> Self {
        Self::from_pref_bit(self.pref_bit() + 1)
    }

    /// Number of LED flashes used to indicate the mode.
    pub fn flash_count(self) -> u8 {
        match self {
            Self::DefaultWithMute => 1,
            Self::TraditionalMa220 => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::DefaultWithMute => "Default Mode with Mute",
            Self::TraditionalMa220 => "Traditional MA-220 Mode",
        }
    }
}

/// Returns the positive attenuation in dB for an ADC reading.
pub fn attenuation(mode: RvcMode, shape: &TaperShape, adc: u8) -> u8 {
    if adc > RVC_ABSENT_THRESHOLD {
        return 0;
    }

    match mode {
        RvcMode::TraditionalMa220 => traditional::hilton_attenuation(traditional::reverse(adc)),
        RvcMode::DefaultWithMute => shape.attenuation_for_rvc(adc),
    }
}

/// Attenuator settings to apply, in order.
///
/// Yields every 1 dB step strictly between the start and the target, then the
/// target itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttenuationRamp {
    next: u8,
    target: u8,
    done: bool,
}

impl AttenuationRamp {
    pub fn new(from: u8, target: u8) -> Self {
        let next = if from < target {
            from + 1
        } else if from > target {
            from - 1
        } else {
            target
        };

        Self {
            next,
            target,
            done: from == target,
        }
    }

    /// Ramp that jumps straight to the target.
    pub fn immediate(target: u8) -> Self {
        Self {
            next: target,
            target,
            done: false,
        }
    }

    #[inline]
    pub fn target(&self) -> u8 {
        self.target
    }
}

impl Iterator for AttenuationRamp {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.done {
            return None;
        }

        let value = self.next;
        if value == self.target {
            self.done = true;
        } else if value < self.target {
            self.next += 1;
        } else {
            self.next -= 1;
        }

        Some(value)
    }
}

/// Tracks the applied attenuation and the selected curve.
#[derive(Debug, Clone)]
pub struct RvcController {
    mode: RvcMode,
    shape: TaperShape,
    previous: u8,
}

impl Default for RvcController {
    fn default() -> Self {
        Self::new(RvcMode::default())
    }
}

impl RvcController {
    pub fn new(mode: RvcMode) -> Self {
        Self {
            mode,
            shape: TaperShape::default(),
            previous: 0,
        }
    }

    /// Resets the ramp state and returns the attenuation to program at start-up.
    ///
    /// The ramp keeps starting from 0 dB, so the first non-forced update
    /// steps up from there regardless of the start-up setting.
    pub fn init(&mut self) -> u8 {
        self.previous = 0;
        STARTUP_ATTENUATION_DB
    }

    pub fn with_shape(mut self, shape: TaperShape) -> Self {
        self.shape = shape;
        self
    }

    #[inline]
    pub fn mode(&self) -> RvcMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: RvcMode) {
        self.mode = mode;
        log::debug!("RVC Mode: {} ({} flashes)", mode.name(), mode.flash_count());
    }

    /// Switches to the other curve and returns the new mode.
    pub fn toggle_mode(&mut self) -> RvcMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    /// Attenuation in dB most recently handed out.
    #[inline]
    pub fn previous(&self) -> u8 {
        self.previous
    }

    /// Processes an ADC reading and returns the settings to apply.
    ///
    /// With `force`, only the target is returned.
    pub fn update(&mut self, adc: u8, force: bool) -> AttenuationRamp {
        let res = attenuation(self.mode, &self.shape, adc);

        let ramp = if force {
            AttenuationRamp::immediate(res)
        } else {
            AttenuationRamp::new(self.previous, res)
        };

        if res != self.previous {
            log::debug!("RVC {} -> attenuation {} dB (was {} dB)", adc, res, self.previous);
        }
        self.previous = res;

        ramp
    }
}
