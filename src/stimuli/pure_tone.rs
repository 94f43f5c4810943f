//! Pure tone stimulus implementation.

use crate::core::math::{is_generatable, normalize_radian, round_half_up};
use crate::core::{Batch, Stimulus, StimulusError, StimulusParameters, StimulusState};
use std::f32::consts::TAU;

/// A single sinusoid at a fixed frequency and phase.
///
/// The tone starts unconfigured: it keeps a default frequency but has no period length, and
/// produces nothing until [`PureTone::set_tone_frequency`] succeeds against a usable sampling
/// frequency. Generation tracks the position inside the current period and wraps it at every
/// period boundary, which keeps the sine argument small over arbitrarily long runs.
///
/// # Examples
///
/// ```
/// use stimgen::{PureTone, Stimulus};
///
/// let mut tone = PureTone::with_tone(48000.0, 1000.0).unwrap();
/// assert_eq!(tone.period_size_samples(), 48);
///
/// let mut buffer = [0.0f32; 100];
/// let batch = tone.generate(&mut buffer);
/// assert_eq!(batch.produced, 100);
/// assert_eq!(batch.sync, Some(0));
/// assert_eq!(tone.position(), 4);
/// ```
#[derive(Debug)]
pub struct PureTone {
    state: StimulusState,
    /// Tone frequency in Hz
    tone_frequency: f32,
    /// Initial phase in radians, within [0, 2π)
    phase: f32,
    /// Phase advance per sample (2π · frequency / sampling frequency)
    step_argument: f32,
    /// Samples in one period; 0 while unconfigured
    period_size_samples: u32,
    /// Set once a tone frequency has been accepted
    configured: bool,
}

impl PureTone {
    /// Frequency held by a tone that has not been configured yet, in Hz.
    pub const DEFAULT_FREQUENCY: f32 = 500.0;

    /// Creates an unconfigured tone with a 1 Hz sampling frequency.
    pub fn new() -> Self {
        Self {
            state: StimulusState::default(),
            tone_frequency: Self::DEFAULT_FREQUENCY,
            phase: 0.0,
            step_argument: 0.0,
            period_size_samples: 0,
            configured: false,
        }
    }

    /// Creates a configured tone.
    ///
    /// # Arguments
    ///
    /// * `sampling_frequency` - Sampling frequency in Hz
    /// * `frequency` - Tone frequency in Hz, strictly inside (10, 20000)
    pub fn with_tone(sampling_frequency: f32, frequency: f32) -> Result<Self, StimulusError> {
        let mut tone = Self::new();
        tone.set_sampling_frequency(sampling_frequency)?;
        tone.set_tone_frequency(frequency)?;
        Ok(tone)
    }

    /// Gets the tone frequency in Hz.
    pub fn tone_frequency(&self) -> f32 {
        self.tone_frequency
    }

    /// Sets the tone frequency and re-derives the step argument and period length.
    ///
    /// Frequencies at or beyond the generatable bounds, and NaN, are rejected and leave the
    /// tone unchanged. A frequency above twice the sampling frequency is still accepted, but
    /// its period rounds to zero samples and [`Stimulus::generate`] produces nothing until the
    /// sampling frequency is raised.
    pub fn set_tone_frequency(&mut self, frequency: f32) -> Result<(), StimulusError> {
        if !is_generatable(frequency) {
            tracing::debug!(frequency, "rejected tone frequency");
            return Err(StimulusError::FrequencyOutOfRange(frequency));
        }

        self.tone_frequency = frequency;
        self.configured = true;
        self.derive_timing();
        tracing::debug!(
            frequency,
            period_size_samples = self.period_size_samples,
            "tone frequency set"
        );
        Ok(())
    }

    /// Gets the phase offset in radians.
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Sets the phase offset, wrapping it into `[0, 2π)`.
    pub fn set_phase(&mut self, phase: f32) {
        self.phase = normalize_radian(phase);
    }

    /// Phase advance per sample in radians.
    pub fn step_argument(&self) -> f32 {
        self.step_argument
    }

    /// Number of samples in one period, or 0 while unconfigured.
    pub fn period_size_samples(&self) -> u32 {
        self.period_size_samples
    }

    /// Overrides the period length used for sync marks and position wrapping.
    ///
    /// A zero-length period is rejected.
    pub fn set_period_size_samples(
        &mut self,
        period_size_samples: u32,
    ) -> Result<(), StimulusError> {
        if period_size_samples == 0 {
            return Err(StimulusError::EmptyPeriod);
        }
        self.period_size_samples = period_size_samples;
        Ok(())
    }

    fn derive_timing(&mut self) {
        let sampling_frequency = self.state.sampling_frequency();
        self.step_argument = TAU * self.tone_frequency / sampling_frequency;
        let samples = f64::from(sampling_frequency) / f64::from(self.tone_frequency);
        // Saturates for absurdly high sampling rates
        self.period_size_samples = round_half_up(samples) as u32;
        if self.period_size_samples == 0 {
            tracing::warn!(
                frequency = self.tone_frequency,
                sampling_frequency,
                "tone period rounds to zero samples, generation will stall"
            );
        }
    }
}

impl Default for PureTone {
    fn default() -> Self {
        Self::new()
    }
}

impl Stimulus for PureTone {
    fn state(&self) -> &StimulusState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut StimulusState {
        &mut self.state
    }

    fn generate(&mut self, buffer: &mut [f32]) -> Batch {
        if buffer.is_empty()
            || self.tone_frequency == 0.0
            || self.state.sampling_frequency() == 0.0
            || self.period_size_samples == 0
        {
            return Batch::empty();
        }

        let start = u64::from(self.state.position());
        let period = u64::from(self.period_size_samples);
        let mut sync = None;

        for (index, sample) in buffer.iter_mut().enumerate() {
            let n = start + index as u64;
            *sample = (self.step_argument * n as f32 + self.phase).sin();

            if sync.is_none() && n % period == 0 {
                sync = Some(index);
            }
        }

        let end = start + buffer.len() as u64;
        let next = if end >= period { end % period } else { end };
        // Both branches are below the period, which fits in u32
        self.state.set_position(next as u32);

        Batch::new(buffer.len(), sync)
    }

    fn configure(&mut self, params: &StimulusParameters) -> Result<(), StimulusError> {
        let StimulusParameters::PureTone(tone) = params;
        tone.validate()?;
        self.set_tone_frequency(tone.frequency)
    }

    fn period_secs(&self) -> f32 {
        1.0 / self.tone_frequency
    }

    fn set_sampling_frequency(&mut self, sampling_frequency: f32) -> Result<(), StimulusError> {
        self.state.set_sampling_frequency(sampling_frequency)?;
        if self.configured {
            self.derive_timing();
        }
        Ok(())
    }
}
