use super::{AV_BEG, AV_LEN, BP_BEG, FIRST_NON_SYNC_LINE, PAL_HRES, PAL_LINES, PAL_TOP, PAL_VRES};
use crate::error::EncoderError;
use crate::types::PixelCode;

/// The largest hue rotation accepted, in degrees either way.
pub const MAX_HUE: i32 = 3600;

/// The largest white point accepted. Keeps the scaled sum of four modulator samples inside an i32.
pub const MAX_WHITE_POINT: i32 = 1000;

/// The largest black point offset accepted, either way.
pub const MAX_BLACK_POINT: i32 = 1 << 16;

/// Where the picture goes in the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveWindow {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

impl ActiveWindow {
    /// Place a `width` x `height` picture with its top left corner at sample `x` of line `y`.
    /// `x` gets aligned down to a whole subcarrier cycle.
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Result<Self, EncoderError> {
        let x = x & !3;
        let out_of_bounds = EncoderError::WindowOutOfBounds {
            x,
            y,
            width,
            height,
        };

        let past_end = |start: usize, len: usize, limit: usize| {
            start.checked_add(len).map_or(true, |end| end > limit)
        };

        if width == 0
            || height == 0
            || past_end(x, width, PAL_HRES)
            || past_end(y, height, PAL_VRES)
        {
            return Err(out_of_bounds);
        }
        if x < BP_BEG {
            return Err(EncoderError::WindowOverlapsBurst { x });
        }
        if y < FIRST_NON_SYNC_LINE {
            return Err(EncoderError::WindowOverlapsVerticalSync { y });
        }

        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// The first sample of each line that gets active video.
    pub fn x(&self) -> usize {
        self.x
    }

    /// The first line that gets active video.
    pub fn y(&self) -> usize {
        self.y
    }

    /// Active video samples per line.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Lines of active video.
    pub fn height(&self) -> usize {
        self.height
    }
}

impl Default for ActiveWindow {
    /// The standard PAL active video area. There's no border on the PAL console.
    fn default() -> Self {
        Self {
            x: AV_BEG & !3,
            y: PAL_TOP,
            width: AV_LEN,
            height: PAL_LINES,
        }
    }
}

/// A frame of console pixel codes, row after row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceFrame<'a> {
    width: usize,
    height: usize,
    data: &'a [u16],
}

impl<'a> SourceFrame<'a> {
    /// Wrap a `width` x `height` buffer of pixel codes.
    pub fn new(width: usize, height: usize, data: &'a [u16]) -> Result<Self, EncoderError> {
        if width == 0 || height == 0 {
            return Err(EncoderError::EmptyFrame { width, height });
        }
        if width.checked_mul(height) != Some(data.len()) {
            return Err(EncoderError::InvalidFrameSize {
                width,
                height,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Pixels per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The pixel at index `idx` of the buffer.
    pub(crate) fn pixel(&self, idx: usize) -> PixelCode {
        PixelCode::new(self.data[idx])
    }
}

/// Knobs for the encoder, kept across frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderSettings {
    hue: i32,
    black_point: i32,
    white_point: i32,
    window: ActiveWindow,

    /// Set once the sync skeleton has been written to the signal used with these settings.
    field_initialized: bool,
}

impl EncoderSettings {
    /// Default settings: no hue rotation, unity levels, the standard active window.
    pub fn new() -> Self {
        Self {
            hue: 0,
            black_point: 0,
            white_point: 100,
            window: ActiveWindow::default(),
            field_initialized: false,
        }
    }

    /// Rotate the color burst by `hue` degrees, which shifts every decoded color the other way.
    pub fn with_hue(mut self, hue: i32) -> Result<Self, EncoderError> {
        if !(-MAX_HUE..=MAX_HUE).contains(&hue) {
            return Err(EncoderError::HueOutOfRange(hue));
        }
        self.hue = hue;
        Ok(self)
    }

    /// Adjust the black point offset and the white point gain (100 is unity).
    pub fn with_levels(mut self, black_point: i32, white_point: i32) -> Result<Self, EncoderError> {
        if !(0..=MAX_WHITE_POINT).contains(&white_point)
            || !(-MAX_BLACK_POINT..=MAX_BLACK_POINT).contains(&black_point)
        {
            return Err(EncoderError::LevelsOutOfRange {
                black_point,
                white_point,
            });
        }
        self.black_point = black_point;
        self.white_point = white_point;
        Ok(self)
    }

    /// Put the picture somewhere other than the standard active video area.
    pub fn with_window(mut self, window: ActiveWindow) -> Self {
        self.window = window;
        self
    }

    /// The hue rotation, in degrees.
    pub fn hue(&self) -> i32 {
        self.hue
    }

    /// The black point offset.
    pub fn black_point(&self) -> i32 {
        self.black_point
    }

    /// The white point gain, 100 is unity.
    pub fn white_point(&self) -> i32 {
        self.white_point
    }

    /// Where the picture goes in the field.
    pub fn window(&self) -> &ActiveWindow {
        &self.window
    }

    /// Whether the sync skeleton is already in place.
    pub fn is_field_initialized(&self) -> bool {
        self.field_initialized
    }

    /// Force the sync skeleton to be rebuilt on the next encode. Call this whenever the signal
    /// buffer gets cleared or swapped out.
    pub fn invalidate_field(&mut self) {
        self.field_initialized = false;
    }

    pub(crate) fn mark_field_initialized(&mut self) {
        self.field_initialized = true;
    }
}

impl Default for EncoderSettings {
    fn default() -> Self {
        Self::new()
    }
}
