//! Adapter converting stimulus output into DAC sample codes.

use super::sample::{DacSample, quantize};
use crate::core::{Batch, Stimulus};
use std::fmt;

/// Converts normalized stimulus samples into integer DAC codes.
///
/// The adapter borrows a stimulus without owning it and pulls samples from it one at a time,
/// mapping each onto the destination integer type at the configured DAC resolution. One
/// generic routine serves every destination width and signedness through [`DacSample`].
///
/// The resolution is not checked when it is set. Instead every conversion call refuses to
/// write anything when the resolution exceeds the destination type's width.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "tones")]
/// # {
/// use stimgen::{DacAdapter, PureTone};
///
/// let mut tone = PureTone::with_tone(48000.0, 1000.0).unwrap();
/// let mut dac = DacAdapter::new(Some(&mut tone), 8);
/// assert_eq!(dac.dynamic_range(), 256);
/// assert_eq!(dac.scale_factor(), 127);
///
/// let mut codes = [0u8; 48];
/// let batch = dac.generate(&mut codes);
/// assert_eq!(batch.produced, 48);
/// assert_eq!(codes[0], 128);
/// assert_eq!(codes[12], 255);
///
/// // A 24-bit DAC does not fit into 8-bit codes
/// dac.set_dac_resolution(24);
/// assert!(dac.generate(&mut codes).is_empty());
/// # }
/// ```
///
/// Captured samples convert without any stimulus attached:
///
/// ```
/// use stimgen::DacAdapter;
///
/// let dac = DacAdapter::new(None, 8);
/// let mut codes = [0u8; 3];
/// let batch = dac.reproduce(&[-1.0, 0.0, 1.0], &mut codes);
/// assert_eq!(batch.produced, 3);
/// assert_eq!(codes, [0, 128, 255]);
/// ```
pub struct DacAdapter<'a> {
    /// Stimulus samples are pulled from
    stimulus: Option<&'a mut dyn Stimulus>,
    /// DAC resolution in bits
    resolution_bits: u16,
    /// Number of distinct codes (2^resolution_bits)
    dynamic_range: u64,
    /// Largest signed magnitude (dynamic_range / 2 - 1)
    scale_factor: u64,
}

impl<'a> DacAdapter<'a> {
    /// Resolution used when none is given.
    pub const DEFAULT_RESOLUTION: u16 = 24;

    /// Creates an adapter over `stimulus` for a DAC of `resolution_bits` bits.
    pub fn new(stimulus: Option<&'a mut dyn Stimulus>, resolution_bits: u16) -> Self {
        let mut adapter = Self {
            stimulus,
            resolution_bits: 0,
            dynamic_range: 0,
            scale_factor: 0,
        };
        adapter.set_dac_resolution(resolution_bits);
        adapter
    }

    /// Gets the wrapped stimulus, if any.
    pub fn stimulus(&self) -> Option<&(dyn Stimulus + 'a)> {
        self.stimulus.as_deref()
    }

    /// Gets mutable access to the wrapped stimulus, e.g. to rewind it between batches.
    pub fn stimulus_mut(&mut self) -> Option<&mut (dyn Stimulus + 'a)> {
        self.stimulus.as_deref_mut()
    }

    /// Replaces the wrapped stimulus.
    pub fn set_stimulus(&mut self, stimulus: Option<&'a mut dyn Stimulus>) {
        self.stimulus = stimulus;
    }

    /// Gets the DAC resolution in bits.
    pub fn dac_resolution(&self) -> u16 {
        self.resolution_bits
    }

    /// Sets the DAC resolution and re-derives the dynamic range and scale factor.
    pub fn set_dac_resolution(&mut self, resolution_bits: u16) {
        self.resolution_bits = resolution_bits;
        self.dynamic_range = 1u64
            .checked_shl(u32::from(resolution_bits))
            .unwrap_or(u64::MAX);
        self.scale_factor = (self.dynamic_range / 2).saturating_sub(1);
        tracing::debug!(
            resolution_bits,
            dynamic_range = self.dynamic_range,
            "dac resolution set"
        );
    }

    /// Number of distinct output codes, `2^resolution`.
    pub fn dynamic_range(&self) -> u64 {
        self.dynamic_range
    }

    /// Largest magnitude of a signed output code, `dynamic_range / 2 - 1`.
    pub fn scale_factor(&self) -> u64 {
        self.scale_factor
    }

    /// Fills `buffer` with DAC codes pulled from the wrapped stimulus.
    ///
    /// Produces nothing if the buffer is empty, no stimulus is attached, or the resolution
    /// exceeds the width of `T`. If the stimulus stops producing mid-batch, the count of codes
    /// written so far is returned and the rest of `buffer` is left untouched. The sync index
    /// is the batch-local index of the first sample that started a stimulus period.
    pub fn generate<T: DacSample>(&mut self, buffer: &mut [T]) -> Batch {
        if buffer.is_empty() || !self.fits::<T>() {
            return Batch::empty();
        }

        let (dynamic_range, scale_factor) = (self.dynamic_range, self.scale_factor);
        let Some(stimulus) = self.stimulus.as_deref_mut() else {
            return Batch::empty();
        };

        let requested = buffer.len();
        let mut sync = None;
        let mut sample = [0.0f32];
        for (index, code) in buffer.iter_mut().enumerate() {
            let pulled = stimulus.generate(&mut sample);
            if pulled.is_empty() {
                tracing::debug!(index, requested, "stimulus stalled");
                return Batch::new(index, sync);
            }

            *code = quantize(sample[0], dynamic_range, scale_factor);

            if sync.is_none() && pulled.sync.is_some() {
                sync = Some(index);
            }
        }

        Batch::new(requested, sync)
    }

    /// Converts previously captured samples from `source` into DAC codes in `destination`.
    ///
    /// Uses the same range mapping and rounding as [`DacAdapter::generate`] and converts
    /// `min(source.len(), destination.len())` samples. Captured streams carry no period marks,
    /// so no sync index is reported. No stimulus needs to be attached.
    pub fn reproduce<T: DacSample>(&self, source: &[f32], destination: &mut [T]) -> Batch {
        if !self.fits::<T>() {
            return Batch::empty();
        }

        let mut produced = 0;
        for (code, &sample) in destination.iter_mut().zip(source) {
            *code = quantize(sample, self.dynamic_range, self.scale_factor);
            produced += 1;
        }

        Batch::new(produced, None)
    }

    fn fits<T: DacSample>(&self) -> bool {
        if self.resolution_bits > T::BITS {
            tracing::debug!(
                resolution_bits = self.resolution_bits,
                width = T::BITS,
                "dac resolution exceeds destination width"
            );
            return false;
        }
        true
    }
}

impl Default for DacAdapter<'_> {
    fn default() -> Self {
        Self::new(None, Self::DEFAULT_RESOLUTION)
    }
}

impl fmt::Debug for DacAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DacAdapter")
            .field("has_stimulus", &self.stimulus.is_some())
            .field("resolution_bits", &self.resolution_bits)
            .field("dynamic_range", &self.dynamic_range)
            .field("scale_factor", &self.scale_factor)
            .finish()
    }
}
