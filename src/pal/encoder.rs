use super::{
    burst_sample, burst_sign, setup_field, swinging_burst, AnalogSignal, BurstCalibration,
    EncoderSettings, NesPalModulator, PixelModulator, SourceFrame, BLACK_LEVEL, BURST_PHASE_GROUPS,
    BW_BEG, CALIBRATION_SHIFT, CB_BEG, CB_LEN, SYNC_LEVEL, WHITE_LEVEL,
};
use crate::types::{Ire, Phase, PhaseGroupTable, SampleLevel};

/// How far the subcarrier advances per output sample, in twelfths of a cycle.
pub const PHASE_STEP: Phase = 3;

/// Extra phase applied to lines whose burst swings positive.
pub const POSITIVE_BURST_PHASE: Phase = 6;

/// Map a destination coordinate back to the source coordinate that covers it, rounding down.
pub fn scale_coord(dest: usize, source_len: usize, dest_len: usize) -> usize {
    dest * source_len / dest_len
}

/// The subcarrier phase at the start of active video on field line `n`.
pub fn line_start_phase(n: usize) -> Phase {
    let phase = (n % 12) as Phase * 2;

    if burst_sign(n % BURST_PHASE_GROUPS) == 1 {
        phase + POSITIVE_BURST_PHASE
    } else {
        phase
    }
}

/// The PAL encoder, turns frames of console pixels into one field of composite signal.
#[derive(Debug, Clone, Default)]
pub struct PalEncoder<M = NesPalModulator> {
    modulator: M,
}

impl PalEncoder<NesPalModulator> {
    /// An encoder for the PAL NES.
    pub fn nes() -> Self {
        Self::new(NesPalModulator)
    }
}

impl<M: PixelModulator> PalEncoder<M> {
    /// Create an encoder that generates the picture with the given modulator.
    pub fn new(modulator: M) -> Self {
        Self { modulator }
    }

    /// The modulator generating the picture.
    pub fn modulator(&self) -> &M {
        &self.modulator
    }

    /// Encode `frame` into `signal`, scaling it to fill the active window.
    ///
    /// The sync skeleton is only generated the first time, or after
    /// [`EncoderSettings::invalidate_field`]; if `signal` gets cleared or replaced, the settings
    /// must be invalidated too. Returns the burst calibration for the decoder.
    pub fn encode(
        &self,
        signal: &mut AnalogSignal,
        settings: &mut EncoderSettings,
        frame: &SourceFrame<'_>,
    ) -> BurstCalibration {
        if !settings.is_field_initialized() {
            setup_field(signal);
            settings.mark_field_initialized();
        } else {
            log::trace!("sync skeleton already in place, skipping field setup");
        }

        let ccburst = swinging_burst(settings.hue());
        let window = *settings.window();
        let (xo, yo) = (window.x(), window.y());
        let (destw, desth) = (window.width(), window.height());

        log::trace!(
            "encoding {}x{} frame into {destw}x{desth} window at ({xo}, {yo})",
            frame.width(),
            frame.height()
        );

        let mut iccf: PhaseGroupTable = [[0; 4]; BURST_PHASE_GROUPS];

        for y in 0..desth {
            let sy = scale_coord(y, frame.height(), desth).min(frame.height() - 1);
            let n = y + yo;
            let group = n % BURST_PHASE_GROUPS;
            let line = signal.line_mut(n);

            line[BW_BEG..CB_BEG].fill(SYNC_LEVEL);

            for t in CB_BEG..CB_BEG + CB_LEN {
                let sample = burst_sample(ccburst[group][t & 3]);
                line[t] = sample;
                iccf[group][t & 3] = sample as Ire;
            }

            let row = sy * frame.width();
            let mut phase = line_start_phase(n);

            for (x, out) in line[xo..xo + destw].iter_mut().enumerate() {
                let p = frame.pixel(scale_coord(x, frame.width(), destw) + row);
                let ire = BLACK_LEVEL + settings.black_point() + self.modulator.integrate(p, phase);

                *out = normalize(ire, settings.white_point());
                phase += PHASE_STEP;
            }
        }

        let mut calibration = BurstCalibration::default();
        for (dst, src) in calibration.ccf.iter_mut().zip(iccf.iter()) {
            for (d, s) in dst.iter_mut().zip(src.iter()) {
                *d = s << CALIBRATION_SHIFT;
            }
        }
        calibration
    }
}

/// Scale an accumulated sample by the white point and bring it back to IRE.
fn normalize(ire: Ire, white_point: i32) -> SampleLevel {
    let level = (ire * white_point / 110) >> 12;
    level.clamp(SYNC_LEVEL as Ire, WHITE_LEVEL as Ire) as SampleLevel
}
