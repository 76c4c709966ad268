mod burst;
mod encoder;
mod modulator;
mod settings;
mod signal;
mod timing;
mod trig;

pub use burst::*;
pub use encoder::*;
pub use modulator::*;
pub use settings::*;
pub use signal::*;
pub use timing::*;
pub use trig::*;

use crate::types::SampleLevel;

// Signal levels, in IRE units (100 = 1.0V, -40 = 0.0V).

/// Peak white.
pub const WHITE_LEVEL: SampleLevel = 100;

/// Amplitude of the color burst around the blanking level.
pub const BURST_LEVEL: i32 = 20;

/// Black. PAL has no setup so this sits right on the blanking level.
pub const BLACK_LEVEL: i32 = 0;

/// Blanking level.
pub const BLANK_LEVEL: SampleLevel = 0;

/// Sync tip.
pub const SYNC_LEVEL: SampleLevel = -40;

/// The number of samples per subcarrier cycle.
pub const PAL_CB_FREQ: usize = 4;

/// Subcarrier cycles per scanline, times ten. The PAL console's line is 341 dots of 5 master
/// clocks, at 6 master clocks per subcarrier cycle that's ~284.1 cycles.
pub const PAL_CC_LINE: usize = 2841;

/// The number of samples in a scanline.
pub const PAL_HRES: usize = PAL_CC_LINE * PAL_CB_FREQ / 10;

/// The number of scanlines in a field.
pub const PAL_VRES: usize = 312;

/// The first scanline with active video.
pub const PAL_TOP: usize = 42;

/// The scanline after the last one with active video.
pub const PAL_BOT: usize = 282;

/// The number of scanlines carrying active video.
pub const PAL_LINES: usize = PAL_BOT - PAL_TOP;

/// The number of samples in a whole field.
pub const PAL_INPUT_SIZE: usize = PAL_HRES * PAL_VRES;

// PAL line timing, in nanoseconds.

/// Front porch.
pub const FP_NS: usize = 1650;

/// Sync tip.
pub const SYNC_NS: usize = 4700;

/// Breezeway.
pub const BW_NS: usize = 900;

/// Color burst.
pub const CB_NS: usize = 2250;

/// Back porch.
pub const BP_NS: usize = 2500;

/// Active video.
pub const AV_NS: usize = 52000;

/// Horizontal blanking, everything before active video.
pub const HB_NS: usize = FP_NS + SYNC_NS + BW_NS + CB_NS + BP_NS;

/// The whole scanline, 64us.
pub const LINE_NS: usize = HB_NS + AV_NS;

/// Convert a time from the start of the line to a sample position.
pub const fn ns_to_pos(ns: usize) -> usize {
    ns * PAL_HRES / LINE_NS
}

/// Start of the line.
pub const LINE_BEG: usize = 0;

/// Start of the horizontal sync pulse.
pub const SYNC_BEG: usize = ns_to_pos(FP_NS);

/// Start of the breezeway.
pub const BW_BEG: usize = ns_to_pos(FP_NS + SYNC_NS);

/// Start of the color burst.
pub const CB_BEG: usize = ns_to_pos(FP_NS + SYNC_NS + BW_NS);

/// Start of the back porch.
pub const BP_BEG: usize = ns_to_pos(FP_NS + SYNC_NS + BW_NS + CB_NS);

/// Start of active video.
pub const AV_BEG: usize = ns_to_pos(HB_NS);

/// Length of active video.
pub const AV_LEN: usize = ns_to_pos(AV_NS);

/// The number of subcarrier cycles in the color burst.
pub const CB_CYCLES: usize = 10;

/// The number of samples in the color burst.
pub const CB_LEN: usize = CB_CYCLES * PAL_CB_FREQ;

/// The burst calibration values handed to the decoder are shifted left by this much.
pub const CALIBRATION_SHIFT: u32 = 7;

/// The subcarrier period reported to the decoder: the burst phase repeats every 6 lines.
pub const CC_PERIOD: i32 = 6;
