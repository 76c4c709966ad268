use super::{degrees_to_t14, sincos14, BLANK_LEVEL, BURST_LEVEL};
use crate::types::{Ire, PhaseGroupTable, SampleLevel};

/// The number of scanlines before the burst phase pattern repeats.
pub const BURST_PHASE_GROUPS: usize = 6;

/// How far the burst swings either side of its nominal phase, in degrees.
pub const BURST_SWING_DEGREES: i32 = 60;

/// The burst's swing direction for a phase group: +1 on even groups and -1 on odd ones.
pub const fn burst_sign(group: usize) -> i32 {
    if group & 1 == 1 {
        -1
    } else {
        1
    }
}

/// Compute the swinging burst for every phase group and quadrant, as sine amplitudes in the
/// range -32..=32. `hue` rotates the whole burst, in degrees.
pub fn swinging_burst(hue: i32) -> PhaseGroupTable {
    let mut table = [[0; 4]; BURST_PHASE_GROUPS];

    for (group, row) in table.iter_mut().enumerate() {
        let vert = group as i32 * (360 / BURST_PHASE_GROUPS as i32);
        let swing = burst_sign(group) * BURST_SWING_DEGREES;

        for (quadrant, amplitude) in row.iter_mut().enumerate() {
            let n = vert + hue + quadrant as i32 * 90 + 135;
            let (sn, _) = sincos14(degrees_to_t14(n + swing));
            *amplitude = sn >> 10;
        }
    }

    table
}

/// Scale a burst amplitude into the signal's blank/burst range.
pub fn burst_sample(amplitude: Ire) -> SampleLevel {
    ((BLANK_LEVEL as Ire + amplitude * BURST_LEVEL) >> 5) as SampleLevel
}
