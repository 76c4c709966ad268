/// A full turn in the 14-bit angle format.
pub const T14_2PI: i32 = 16384;

/// Mask that wraps an angle into a single turn.
pub const T14_MASK: i32 = T14_2PI - 1;

/// Half a turn in the 14-bit angle format.
pub const T14_PI: i32 = T14_2PI / 2;

/// Significant points on a quarter sine wave, 15-bit amplitude, one every 256 angle units. The
/// trailing entry lets the interpolation read one past the peak.
const SIGPSIN15: [i32; 18] = [
    0x0000, 0x0c88, 0x18f8, 0x2528, 0x30f8, 0x3c50, 0x4718, 0x5130, 0x5a80, 0x62f0, 0x6a68,
    0x70e0, 0x7640, 0x7a78, 0x7d88, 0x7f60, 0x8000, 0x7f60,
];

/// Linearly interpolate the quarter wave table. `n` must be within a quarter turn.
fn sin_interp8(n: i32) -> i32 {
    debug_assert!((0..=T14_2PI / 4).contains(&n));

    let f = n & 0xff;
    let i = ((n >> 8) & 0xff) as usize;
    let a = SIGPSIN15[i];
    let b = SIGPSIN15[i + 1];

    a + (((b - a) * f) >> 8)
}

/// Integer sine and cosine of a 14-bit angle, returned as `(sin, cos)` with a peak of `0x8000`.
/// Angles outside a single turn (including negative ones) wrap.
pub fn sincos14(n: i32) -> (i32, i32) {
    let n = n & T14_MASK;
    let h = n & (T14_PI - 1);

    let (s, c) = if h > (T14_2PI >> 2) - 1 {
        (sin_interp8(T14_PI - h), -sin_interp8(h - (T14_2PI >> 2)))
    } else {
        (sin_interp8(h), sin_interp8((T14_2PI >> 2) - h))
    };

    if n > T14_PI - 1 {
        (-s, -c)
    } else {
        (s, c)
    }
}

/// Convert whole degrees to the 14-bit angle format, truncating towards zero.
pub const fn degrees_to_t14(degrees: i32) -> i32 {
    degrees * 8192 / 180
}
