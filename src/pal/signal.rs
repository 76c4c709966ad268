use super::{BLANK_LEVEL, CC_PERIOD, PAL_HRES, PAL_INPUT_SIZE};
use crate::types::{PhaseGroupTable, SampleLevel};

/// One field of composite signal, `PAL_VRES` scanlines of `PAL_HRES` samples each. The buffer is
/// always the full size, so the encoder never has to check it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalogSignal {
    samples: Vec<SampleLevel>,
}

impl AnalogSignal {
    /// Create a field with every sample at the blanking level.
    pub fn new() -> Self {
        Self::filled(BLANK_LEVEL)
    }

    /// Create a field with every sample at the given level.
    pub fn filled(level: SampleLevel) -> Self {
        Self {
            samples: vec![level; PAL_INPUT_SIZE],
        }
    }

    /// Put every sample back to the blanking level. The sync skeleton goes with it, so the
    /// settings used with this signal need [`super::EncoderSettings::invalidate_field`] too.
    pub fn reset(&mut self) {
        self.samples.fill(BLANK_LEVEL);
    }

    /// All samples, scanline after scanline.
    pub fn samples(&self) -> &[SampleLevel] {
        &self.samples
    }

    /// The samples of scanline `n`.
    pub fn line(&self, n: usize) -> &[SampleLevel] {
        &self.samples[n * PAL_HRES..(n + 1) * PAL_HRES]
    }

    /// The samples of scanline `n`, mutably.
    pub fn line_mut(&mut self, n: usize) -> &mut [SampleLevel] {
        &mut self.samples[n * PAL_HRES..(n + 1) * PAL_HRES]
    }
}

impl Default for AnalogSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// What the decoder needs to lock onto the color burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurstCalibration {
    /// The burst sample written for each phase group and quadrant, shifted left by
    /// [`super::CALIBRATION_SHIFT`].
    pub ccf: PhaseGroupTable,

    /// The number of scanlines in one burst phase cycle.
    pub period: i32,
}

impl Default for BurstCalibration {
    fn default() -> Self {
        Self {
            ccf: [[0; 4]; 6],
            period: CC_PERIOD,
        }
    }
}
