//! Numeric constants and helpers shared by stimuli and the DAC adapter.

use std::f32::consts::TAU;

/// Lowest tone frequency (exclusive) a stimulus will generate, in Hz.
///
/// Tones under 20 Hz are inaudible; 10 Hz leaves headroom for sub-audible test signals.
pub const MIN_GENERATABLE_FREQUENCY: f32 = 10.0;

/// Highest tone frequency (exclusive) a stimulus will generate, in Hz.
pub const MAX_GENERATABLE_FREQUENCY: f32 = 20000.0;

/// Six-digit tolerance for comparing single precision values.
pub const FLOAT32_TOLERANCE: f32 = 0.000_001;

/// Returns true if `frequency` lies strictly inside the generatable range.
///
/// NaN is never generatable.
///
/// # Examples
///
/// ```
/// use stimgen::core::math::is_generatable;
///
/// assert!(is_generatable(1000.0));
/// assert!(!is_generatable(10.0));
/// assert!(!is_generatable(20000.0));
/// assert!(!is_generatable(f32::NAN));
/// ```
pub fn is_generatable(frequency: f32) -> bool {
    frequency > MIN_GENERATABLE_FREQUENCY && frequency < MAX_GENERATABLE_FREQUENCY
}

/// Rounds to the nearest integer, resolving ties toward positive infinity.
///
/// This is the single rounding rule used for period lengths and DAC codes, so
/// `127.5` becomes `128` and `-0.5` becomes `0`.
///
/// # Examples
///
/// ```
/// use stimgen::core::math::round_half_up;
///
/// assert_eq!(round_half_up(127.5), 128.0);
/// assert_eq!(round_half_up(-0.5), 0.0);
/// assert_eq!(round_half_up(-127.0), -127.0);
/// ```
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Wraps an angle in radians into `[0, 2π)`.
pub fn normalize_radian(phase: f32) -> f32 {
    let wrapped = phase.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Least common multiple of two sample counts, via the Euclidean algorithm.
///
/// Used to find the common repeating period of several periodic stimuli. Returns 0 when
/// either input is 0. The result is widened to `u64` so the product cannot overflow.
///
/// # Examples
///
/// ```
/// use stimgen::least_common_multiple;
///
/// assert_eq!(least_common_multiple(6, 4), 12);
/// assert_eq!(least_common_multiple(48, 0), 0);
/// ```
pub fn least_common_multiple(a: u32, b: u32) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }

    let (mut x, mut y) = (a, b);
    while y != 0 {
        (x, y) = (y, x % y);
    }

    u64::from(a / x) * u64::from(b)
}
