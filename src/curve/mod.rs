//! Attenuation curves over the full RVC travel.
//!
//! Both curves are evaluated for every RVC reading the pot can produce
//! (0..=133) and collected into a [`CurveSet`], ordered by knob position.

pub mod default_mode;
pub mod traditional;

use spin::Once;

use default_mode::TaperShape;

/// Highest RVC reading produced by the pot.
pub const RVC_MAX: u8 = 133;

/// Number of samples in a curve set.
pub const NUM_SAMPLES: usize = RVC_MAX as usize + 1;

static CURVES: Once<CurveSet> = Once::new();

/// Knob position for an RVC reading.
///
/// 1.0 is fully clockwise (loud, RVC 0), 0.0 fully counter-clockwise (RVC 133).
#[inline]
pub fn position(rvc: u8) -> f32 {
    1.0 - rvc as f32 / RVC_MAX as f32
}

/// Both curve values at one RVC reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub rvc: u8,
    pub position: f32,
    pub traditional_db: i8,
    pub default_db: i8,
}

impl Sample {
    pub fn new(rvc: u8, shape: &TaperShape) -> Self {
        Self {
            rvc,
            position: position(rvc),
            traditional_db: traditional::attenuation_db(rvc),
            default_db: shape.attenuation_db(rvc),
        }
    }
}

/// Samples of both curves sorted by ascending knob position.
#[derive(Debug, Clone)]
pub struct CurveSet {
    samples: [Sample; NUM_SAMPLES],
    knee_rvc: u8,
    mute_rvc: u8,
}

impl CurveSet {
    /// Evaluates both curves with the firmware taper shape.
    pub fn compute() -> Self {
        Self::with_shape(&TaperShape::default())
    }

    pub fn with_shape(shape: &TaperShape) -> Self {
        let mut samples: [Sample; NUM_SAMPLES] =
            core::array::from_fn(|i| Sample::new(i as u8, shape));
        samples.sort_unstable_by(|a, b| a.position.total_cmp(&b.position));

        let knee_rvc = shape.knee_rvc().unwrap_or(RVC_MAX).min(RVC_MAX);
        let mute_rvc = shape.mute_rvc().unwrap_or(RVC_MAX).min(RVC_MAX);

        log::debug!(
            "Computed {} samples, knee at RVC {}, mute at RVC {}",
            NUM_SAMPLES,
            knee_rvc,
            mute_rvc
        );

        Self {
            samples,
            knee_rvc,
            mute_rvc,
        }
    }

    /// Shared set computed with the firmware taper shape on first use.
    pub fn shared() -> &'static Self {
        CURVES.call_once(Self::compute)
    }

    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample for an RVC reading, if it is within the pot travel.
    pub fn sample(&self, rvc: u8) -> Option<&Sample> {
        self.samples.iter().find(|sample| sample.rvc == rvc)
    }

    /// RVC reading where the default curve reaches its knee.
    #[inline]
    pub fn knee_rvc(&self) -> u8 {
        self.knee_rvc
    }

    #[inline]
    pub fn knee_position(&self) -> f32 {
        position(self.knee_rvc)
    }

    /// RVC reading where the default curve starts to mute.
    #[inline]
    pub fn mute_rvc(&self) -> u8 {
        self.mute_rvc
    }

    #[inline]
    pub fn mute_position(&self) -> f32 {
        position(self.mute_rvc)
    }

    pub fn positions(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().map(|sample| sample.position)
    }

    /// Traditional curve as (position, dB) points.
    pub fn traditional(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.samples
            .iter()
            .map(|sample| (sample.position, sample.traditional_db as f32))
    }

    /// Default curve as (position, dB) points.
    pub fn default_mode(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.samples
            .iter()
            .map(|sample| (sample.position, sample.default_db as f32))
    }
}

impl Default for CurveSet {
    fn default() -> Self {
        Self::compute()
    }
}
