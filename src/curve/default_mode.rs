//! Default curve: linearized audio taper with mute.
//!
//! The pot is linearized first, then mapped onto two slopes. A gentle slope
//! runs from the start guard band up to the knee, a steep one from the knee to
//! the end guard band. Beyond the end guard band the output is muted.

/// Attenuation magnitude in dB used for mute.
pub const MUTE_DB: u8 = 64;

/// Linearizes an audio-taper pot reading.
///
/// Computes `rvc * 255 / (255 - rvc)` with 16-bit integer math, capped to 255.
#[inline]
pub fn linearize(rvc: u8) -> u8 {
    let rvc = rvc as u16;
    let top = (rvc << 8) - rvc;
    let bot = 255 - rvc;

    if bot == 0 {
        return 255;
    }

    (top / bot).min(255) as u8
}

/// Shape of the piecewise curve.
///
/// Only shapes that keep the firmware ordering can be built: the start guard
/// band ends at or before the knee, the knee lies below the end guard band and
/// the attenuation rises from the knee towards the end without exceeding mute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaperShape {
    knee: u8,
    knee_db: u8,
    end_db: u8,
    end_guard: u8,
    start_guard: u8,
}

impl Default for TaperShape {
    fn default() -> Self {
        Self {
            knee: 3 * 64,
            knee_db: 14,
            end_db: 48,
            end_guard: 236,
            start_guard: 6,
        }
    }
}

impl TaperShape {
    /// Builds a shape, or `None` if the segments are out of order.
    pub fn new(knee: u8, knee_db: u8, end_db: u8, end_guard: u8, start_guard: u8) -> Option<Self> {
        let valid = knee > 0
            && start_guard <= knee
            && knee < end_guard
            && knee_db <= end_db
            && end_db <= MUTE_DB;

        valid.then_some(Self {
            knee,
            knee_db,
            end_db,
            end_guard,
            start_guard,
        })
    }

    /// Linearized position of the knee.
    #[inline]
    pub fn knee(&self) -> u8 {
        self.knee
    }

    /// Attenuation at the knee in dB.
    #[inline]
    pub fn knee_db(&self) -> u8 {
        self.knee_db
    }

    /// Attenuation at the end of the active range in dB.
    #[inline]
    pub fn end_db(&self) -> u8 {
        self.end_db
    }

    /// Linearized position above which the output is muted.
    #[inline]
    pub fn end_guard(&self) -> u8 {
        self.end_guard
    }

    /// Linearized position below which there is no attenuation.
    #[inline]
    pub fn start_guard(&self) -> u8 {
        self.start_guard
    }

    /// Returns the positive attenuation in dB for a linearized pot value.
    #[inline]
    pub fn attenuation(&self, linear: u8) -> u8 {
        let x = linear as u16;
        let a = self.knee as u16;
        let b = self.knee_db as u16;
        let c = self.end_db as u16;
        let d = self.end_guard as u16;
        let e = self.start_guard as u16;

        let res = if x < e {
            0
        } else if x > d {
            MUTE_DB as u16
        } else if x <= a {
            ((x - e) * b) / a
        } else {
            b + ((x - a) * (c - b)) / (d - a)
        };

        res as u8
    }

    /// Returns the positive attenuation in dB for a raw RVC value.
    #[inline]
    pub fn attenuation_for_rvc(&self, rvc: u8) -> u8 {
        self.attenuation(linearize(rvc))
    }

    /// Returns the attenuation in dB (0 or negative) for a raw RVC value.
    #[inline]
    pub fn attenuation_db(&self, rvc: u8) -> i8 {
        -(self.attenuation_for_rvc(rvc) as i8)
    }

    /// First RVC value whose linearized reading reaches the knee.
    pub fn knee_rvc(&self) -> Option<u8> {
        (0..=u8::MAX).find(|&rvc| linearize(rvc) >= self.knee)
    }

    /// First RVC value that mutes the output.
    pub fn mute_rvc(&self) -> Option<u8> {
        (0..=u8::MAX).find(|&rvc| self.attenuation_for_rvc(rvc) == MUTE_DB)
    }
}
