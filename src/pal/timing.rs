use super::{AnalogSignal, BLANK_LEVEL, BW_BEG, LINE_BEG, PAL_HRES, PAL_VRES, SYNC_BEG, SYNC_LEVEL};
use crate::types::SampleLevel;

/// The kind of timing waveform a scanline carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Mostly blank, with two short sync blips.
    Equalizing,

    /// Mostly sync, with two short blank blips.
    VerticalSync,

    /// A normal line: front porch, horizontal sync, then blank until active video is written over it.
    Video,
}

/// A run of samples at a single level, running from the end of the previous segment to
/// `end_percent` of the line.
type Segment = (usize, SampleLevel);

const EQUALIZING_SEGMENTS: [Segment; 4] = [
    (4, SYNC_LEVEL),
    (50, BLANK_LEVEL),
    (54, SYNC_LEVEL),
    (100, BLANK_LEVEL),
];

const VERTICAL_SYNC_SEGMENTS: [Segment; 4] = [
    (46, SYNC_LEVEL),
    (50, BLANK_LEVEL),
    (96, SYNC_LEVEL),
    (100, BLANK_LEVEL),
];

/// The first scanline after the vertical sync interval.
pub const FIRST_NON_SYNC_LINE: usize = 10;

impl LineKind {
    /// The kind of the given scanline within a field.
    pub const fn of(line: usize) -> Self {
        match line {
            0..=3 | 7..=9 => LineKind::Equalizing,
            4..=6 => LineKind::VerticalSync,
            _ => LineKind::Video,
        }
    }

    /// Write this kind's timing waveform into a single scanline.
    fn fill(self, line: &mut [SampleLevel]) {
        debug_assert_eq!(line.len(), PAL_HRES);

        match self {
            LineKind::Equalizing => fill_segments(line, &EQUALIZING_SEGMENTS),
            LineKind::VerticalSync => fill_segments(line, &VERTICAL_SYNC_SEGMENTS),
            LineKind::Video => {
                // Front porch, horizontal sync, blank. Active video gets written over the tail.
                line[LINE_BEG..SYNC_BEG].fill(BLANK_LEVEL);
                line[SYNC_BEG..BW_BEG].fill(SYNC_LEVEL);
                line[BW_BEG..].fill(BLANK_LEVEL);
            }
        }
    }
}

fn fill_segments(line: &mut [SampleLevel], segments: &[Segment]) {
    let mut start = LINE_BEG;
    for &(end_percent, level) in segments {
        let end = end_percent * PAL_HRES / 100;
        line[start..end].fill(level);
        start = end;
    }
}

/// The kind of every scanline in a field, worked out once.
const LINE_KINDS: [LineKind; PAL_VRES] = {
    let mut kinds = [LineKind::Video; PAL_VRES];
    let mut n = 0;
    while n < PAL_VRES {
        kinds[n] = LineKind::of(n);
        n += 1;
    }
    kinds
};

/// The kind of every scanline in a field, indexed by line number.
pub fn line_kinds() -> &'static [LineKind; PAL_VRES] {
    &LINE_KINDS
}

/// Write the sync skeleton of a whole field: equalizing pulses, vertical sync and the horizontal
/// timing of every other line. This doesn't depend on the picture at all, so as long as the
/// signal isn't cleared it only needs to happen once.
pub fn setup_field(signal: &mut AnalogSignal) {
    for (n, kind) in LINE_KINDS.iter().enumerate() {
        kind.fill(signal.line_mut(n));
    }

    log::debug!("generated PAL field sync skeleton ({PAL_VRES} lines of {PAL_HRES} samples)");
}
