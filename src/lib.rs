//! Integer-only PAL composite video encoder for the NES.
//!
//! Takes frames of 9-bit console pixel codes and turns them into one field of composite signal,
//! sampled at four samples per subcarrier cycle: sync skeleton, swinging color burst and the
//! square wave chroma the console's video output actually generates. The burst calibration
//! returned alongside lets a decoder lock onto the color phase.
//!
//! ```
//! use pal_nes::pal::{AnalogSignal, EncoderSettings, PalEncoder, SourceFrame};
//!
//! let pixels = vec![0x16u16; 256 * 240];
//! let frame = SourceFrame::new(256, 240, &pixels)?;
//!
//! let encoder = PalEncoder::nes();
//! let mut signal = AnalogSignal::new();
//! let mut settings = EncoderSettings::new();
//! let calibration = encoder.encode(&mut signal, &mut settings, &frame);
//! assert_eq!(calibration.period, 6);
//! # Ok::<(), pal_nes::EncoderError>(())
//! ```

mod error;
pub mod pal;
pub mod types;

pub use error::EncoderError;
