//! Loading previously captured stimulus samples from WAV files.
//!
//! Captured streams are fed to [`crate::DacAdapter::reproduce`] to drive a DAC from stored
//! samples instead of a live generator.

use std::path::Path;

/// Errors raised while loading stored samples.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened or decoded
    #[error("failed to read WAV file: {0}")]
    Wav(#[from] hound::Error),
    /// The file decoded but held no samples
    #[error("WAV file contains no samples")]
    Empty,
}

/// Loads the first channel of a WAV file as normalized `f32` samples.
///
/// Float files are read as-is. Integer files are scaled by `2^(bits - 1)` so full scale maps
/// onto `[-1.0, 1.0)`. Sample rate conversion is not performed.
///
/// # Examples
///
/// ```ignore
/// use stimgen::{DacAdapter, load_stored_samples};
///
/// let samples = load_stored_samples("captures/click.wav")?;
/// let dac = DacAdapter::new(None, 16);
/// let mut codes = vec![0i16; samples.len()];
/// dac.reproduce(&samples, &mut codes);
/// ```
pub fn load_stored_samples<P: AsRef<Path>>(path: P) -> Result<Vec<f32>, LoadError> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader.samples::<f32>().collect::<Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let full_scale = (1u64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / full_scale))
                .collect::<Result<_, _>>()?
        }
    };

    if samples.is_empty() {
        return Err(LoadError::Empty);
    }

    tracing::debug!(
        samples = samples.len(),
        channels = spec.channels,
        sample_rate = spec.sample_rate,
        "loaded stored samples"
    );

    // Keep only the first channel of interleaved frames
    if spec.channels > 1 {
        Ok(samples
            .into_iter()
            .step_by(usize::from(spec.channels))
            .collect())
    } else {
        Ok(samples)
    }
}
