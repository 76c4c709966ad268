use crate::types::{Ire, Phase, PixelCode};

/// Converts a console pixel into a square wave sample of the composite signal. Each console
/// generates its video differently, so the encoder takes one of these at construction time.
pub trait PixelModulator {
    /// The contribution of `pixel` to the signal at the given subcarrier phase, in IRE scaled
    /// by 1024. Phases are in twelfths of a subcarrier cycle and any value is allowed.
    fn sample(&self, pixel: PixelCode, phase: Phase) -> Ire;

    /// Approximate integrating the signal over one output sample, by summing four evaluations
    /// a quadrant of the sample period apart.
    fn integrate(&self, pixel: PixelCode, phase: Phase) -> Ire {
        (0..4).map(|q| self.sample(pixel, phase + q)).sum()
    }
}

/// Measured output levels of the PAL console, in amplified IRE:
/// `((mV / 7.143) - 312 / 7.143) * 1024`.
///
/// Indexed by `(high << 3) | (emphasized << 2) | luma`, where `high` picks the upper half of
/// the square wave.
pub const NES_PAL_IRE: [Ire; 16] = [
    // low, luma 0-3
    -12042, 0, 34406, 81427,
    // low, emphasized
    -17203, -8028, 19497, 57342,
    // high, luma 0-3
    43581, 75693, 112965, 112965,
    // high, emphasized
    26951, 52181, 83721, 83721,
];

/// Which emphasis bits attenuate the signal, for each sixth of a subcarrier cycle.
pub const NES_PAL_EMPHASIS_ACTIVE: [u16; 6] = [0o300, 0o200, 0o600, 0o400, 0o500, 0o100];

/// The PAL variant of the NES picture processing unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NesPalModulator;

impl NesPalModulator {
    /// The table row a hue selects at a given phase: `true` for the high half of the wave.
    pub fn is_high(hue: u16, phase: Phase) -> bool {
        match hue {
            0x00 => true,
            0x0d => false,
            _ => (hue as Phase + phase).rem_euclid(12) < 6,
        }
    }

    /// Whether the pixel's emphasis bits attenuate the signal at a given phase.
    pub fn is_emphasized(pixel: PixelCode, phase: Phase) -> bool {
        let active = NES_PAL_EMPHASIS_ACTIVE[(phase >> 1).rem_euclid(6) as usize];
        pixel.emphasis() & active != 0
    }
}

impl PixelModulator for NesPalModulator {
    fn sample(&self, pixel: PixelCode, phase: Phase) -> Ire {
        let hue = pixel.hue();

        // The last two columns of the palette are black.
        if hue >= 0x0e {
            return 0;
        }

        let l = Self::is_high(hue, phase) as usize;
        let e = Self::is_emphasized(pixel, phase) as usize;

        NES_PAL_IRE[(l << 3) | (e << 2) | pixel.luma() as usize]
    }
}
