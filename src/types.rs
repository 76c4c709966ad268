/// The type of a single sample in the analog signal buffer. Samples are stored in IRE units, so
/// the whole range from sync tip (-40) to peak white (100) fits comfortably in a signed byte.
pub type SampleLevel = i8;

/// The integer type used for intermediate signal calculations. Modulator outputs are scaled by
/// 1024 and four of them get summed per output sample, so this needs more room than the samples.
pub type Ire = i32;

/// The instantaneous subcarrier phase, in twelfths of a subcarrier cycle.
pub type Phase = i32;

/// One row of the burst table: a value for each of the four subcarrier quadrants.
pub type QuadrantRow = [Ire; 4];

/// A table with one row per burst phase group (the burst repeats every 6 lines).
pub type PhaseGroupTable = [QuadrantRow; 6];

/// A 9-bit console pixel code: three emphasis bits, two luma bits and a hue nibble.
///
/// ```text
/// 8 7 6 | 5 4 | 3 2 1 0
///  emph | luma|   hue
/// ```
///
/// Every bit pattern is a valid color, anything above bit 8 is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelCode(u16);

impl PixelCode {
    /// Emphasis bit for red. Red and green swap places compared to the NTSC console.
    pub const EMPHASIS_RED: u16 = 0o200;

    /// Emphasis bit for green.
    pub const EMPHASIS_GREEN: u16 = 0o100;

    /// Emphasis bit for blue.
    pub const EMPHASIS_BLUE: u16 = 0o400;

    /// Mask covering all three emphasis bits.
    pub const EMPHASIS_MASK: u16 = 0o700;

    /// Create a pixel code, discarding anything above the low 9 bits.
    pub const fn new(raw: u16) -> Self {
        Self(raw & 0x1ff)
    }

    /// Build a pixel code from its parts.
    pub const fn from_parts(emphasis: u16, luma: u16, hue: u16) -> Self {
        Self::new(((emphasis & 0o7) << 6) | ((luma & 3) << 4) | (hue & 0x0f))
    }

    /// The raw 9-bit value.
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// The hue nibble, selects the color angle (0x0 is grey, 0xD is black, 0xE/0xF are forced black).
    pub const fn hue(self) -> u16 {
        self.0 & 0x0f
    }

    /// The two luma bits.
    pub const fn luma(self) -> u16 {
        (self.0 >> 4) & 3
    }

    /// The emphasis bits, left in place (masked with [`PixelCode::EMPHASIS_MASK`]).
    pub const fn emphasis(self) -> u16 {
        self.0 & Self::EMPHASIS_MASK
    }
}

impl From<u16> for PixelCode {
    fn from(raw: u16) -> Self {
        Self::new(raw)
    }
}
