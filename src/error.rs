use thiserror::Error;

/// Reasons encoder inputs get rejected when they're built. Once built, encoding can't fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncoderError {
    #[error("source frame has no pixels ({width}x{height})")]
    EmptyFrame { width: usize, height: usize },

    #[error("source frame is {width}x{height} but holds {actual} pixels")]
    InvalidFrameSize {
        width: usize,
        height: usize,
        actual: usize,
    },

    #[error("active window {width}x{height} at ({x}, {y}) doesn't fit in the field")]
    WindowOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("active window starting at sample {x} overlaps the color burst")]
    WindowOverlapsBurst { x: usize },

    #[error("active window starting on line {y} overlaps vertical sync")]
    WindowOverlapsVerticalSync { y: usize },

    #[error("hue offset {0} is out of range")]
    HueOutOfRange(i32),

    #[error("black point {black_point} / white point {white_point} out of range")]
    LevelsOutOfRange { black_point: i32, white_point: i32 },
}
