//! Destination integer formats for DAC conversion.

use crate::core::math::round_half_up;

/// An integer sample type a DAC can consume.
///
/// Implemented for the six supported widths and signedness combinations: `u8`, `i8`, `u16`,
/// `i16`, `u32` and `i32`. The adapter uses `BITS` to reject resolutions the type cannot hold
/// and `SIGNED` to pick the range mapping.
pub trait DacSample: Copy {
    /// Width of the type in bits
    const BITS: u16;
    /// Whether the type holds negative codes
    const SIGNED: bool;

    /// Converts an already rounded code, saturating at the type's bounds.
    fn from_code(code: f64) -> Self;
}

macro_rules! impl_dac_sample {
    ($($ty:ty => $signed:expr),* $(,)?) => {
        $(
            impl DacSample for $ty {
                const BITS: u16 = <$ty>::BITS as u16;
                const SIGNED: bool = $signed;

                #[inline]
                fn from_code(code: f64) -> Self {
                    code as $ty
                }
            }
        )*
    };
}

impl_dac_sample! {
    u8 => false,
    i8 => true,
    u16 => false,
    i16 => true,
    u32 => false,
    i32 => true,
}

/// Maps one normalized sample onto a DAC code.
///
/// Unsigned destinations map `[-1, 1]` onto `[0, dynamic_range - 1]`; signed destinations map
/// it onto `[-scale_factor, scale_factor]`. Inputs outside `[-1, 1]` are clamped first.
#[inline]
pub(crate) fn quantize<T: DacSample>(sample: f32, dynamic_range: u64, scale_factor: u64) -> T {
    let sample = f64::from(sample.clamp(-1.0, 1.0));
    let code = if T::SIGNED {
        sample * scale_factor as f64
    } else {
        (sample + 1.0) / 2.0 * dynamic_range.saturating_sub(1) as f64
    };
    T::from_code(round_half_up(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths_and_signedness() {
        assert_eq!((<u8 as DacSample>::BITS, u8::SIGNED), (8, false));
        assert_eq!((<i8 as DacSample>::BITS, i8::SIGNED), (8, true));
        assert_eq!((<u16 as DacSample>::BITS, u16::SIGNED), (16, false));
        assert_eq!((<i16 as DacSample>::BITS, i16::SIGNED), (16, true));
        assert_eq!((<u32 as DacSample>::BITS, u32::SIGNED), (32, false));
        assert_eq!((<i32 as DacSample>::BITS, i32::SIGNED), (32, true));
    }

    #[test]
    fn test_unsigned_8_bit() {
        assert_eq!(quantize::<u8>(-1.0, 256, 127), 0);
        assert_eq!(quantize::<u8>(1.0, 256, 127), 255);
        assert_eq!(quantize::<u8>(0.0, 256, 127), 128);
    }

    #[test]
    fn test_signed_8_bit() {
        assert_eq!(quantize::<i8>(1.0, 256, 127), 127);
        assert_eq!(quantize::<i8>(-1.0, 256, 127), -127);
        assert_eq!(quantize::<i8>(0.0, 256, 127), 0);
        assert_eq!(quantize::<i8>(0.5, 256, 127), 64);
    }

    #[test]
    fn test_full_32_bit_range() {
        let range = 1u64 << 32;
        let scale = (range / 2) - 1;
        assert_eq!(quantize::<u32>(1.0, range, scale), u32::MAX);
        assert_eq!(quantize::<u32>(-1.0, range, scale), 0);
        assert_eq!(quantize::<i32>(1.0, range, scale), i32::MAX);
        assert_eq!(quantize::<i32>(-1.0, range, scale), -i32::MAX);
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        assert_eq!(quantize::<u8>(3.0, 256, 127), 255);
        assert_eq!(quantize::<i16>(-2.0, 65536, 32767), -32767);
    }

    #[test]
    fn test_lower_resolution_in_wider_type() {
        // 12-bit DAC fed through a 16-bit container
        assert_eq!(quantize::<u16>(1.0, 4096, 2047), 4095);
        assert_eq!(quantize::<i16>(-1.0, 4096, 2047), -2047);
    }
}
