//! Core stimulus trait and shared sampling state.
//!
//! This module provides the fundamental `Stimulus` trait implemented by every tone generator
//! or sample replayer, along with the `StimulusState` they embed and the `Batch` result
//! returned from each generation call.

use super::error::StimulusError;
use super::params::{EarSide, StimulusParameters};

/// Outcome of one generation or reproduction call.
///
/// `produced` is the number of leading samples written to the caller's buffer. A count
/// shorter than the buffer means generation could not continue past that index; callers must
/// not assume the trailing entries were written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Batch {
    /// Number of samples written, starting at index 0
    pub produced: usize,
    /// Batch-local index of the first sample that starts a signal period
    pub sync: Option<usize>,
}

impl Batch {
    /// A batch that produced nothing.
    pub const fn empty() -> Self {
        Self {
            produced: 0,
            sync: None,
        }
    }

    /// Creates a batch result.
    pub const fn new(produced: usize, sync: Option<usize>) -> Self {
        Self { produced, sync }
    }

    /// Returns true if no samples were produced.
    pub fn is_empty(&self) -> bool {
        self.produced == 0
    }
}

/// Position and sampling frequency tracked by every stimulus.
///
/// # Examples
///
/// ```
/// use stimgen::StimulusState;
///
/// let mut state = StimulusState::default();
/// assert_eq!(state.sampling_frequency(), 1.0);
///
/// assert!(state.set_sampling_frequency(48000.0).is_ok());
/// assert!(state.set_sampling_frequency(0.0).is_err());
/// assert_eq!(state.sampling_frequency(), 48000.0);
/// ```
#[derive(Debug, PartialEq)]
pub struct StimulusState {
    /// Index the next generated sample starts from
    position: u32,
    /// Sampling frequency in Hz
    sampling_frequency: f32,
}

impl StimulusState {
    /// Creates a state at position 0 with the given sampling frequency.
    ///
    /// Returns an error if `sampling_frequency` is not a positive finite value.
    pub fn new(sampling_frequency: f32) -> Result<Self, StimulusError> {
        let mut state = Self::default();
        state.set_sampling_frequency(sampling_frequency)?;
        Ok(state)
    }

    /// Gets the index the next generated sample starts from.
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Sets the position unconditionally.
    pub fn set_position(&mut self, position: u32) {
        self.position = position;
    }

    /// Gets the sampling frequency in Hz.
    pub fn sampling_frequency(&self) -> f32 {
        self.sampling_frequency
    }

    /// Sets the sampling frequency.
    ///
    /// Zero, negative, infinite and NaN values are rejected and the previous value is kept.
    pub fn set_sampling_frequency(&mut self, sampling_frequency: f32) -> Result<(), StimulusError> {
        if !(sampling_frequency > 0.0 && sampling_frequency.is_finite()) {
            tracing::debug!(sampling_frequency, "rejected sampling frequency");
            return Err(StimulusError::InvalidSamplingFrequency(sampling_frequency));
        }
        self.sampling_frequency = sampling_frequency;
        Ok(())
    }
}

impl Default for StimulusState {
    fn default() -> Self {
        Self {
            position: 0,
            sampling_frequency: 1.0,
        }
    }
}

/// Common interface for all stimuli.
///
/// A stimulus produces a periodic test signal as `f32` samples in `[-1.0, 1.0]` and reports,
/// per batch, the index of the first sample that starts a period. Generation never fails with
/// an error: invalid requests and stalls are reported as a short `Batch::produced` count.
///
/// Implementors only provide access to their `StimulusState` plus the generation and
/// configuration methods; position and sampling frequency handling come for free.
pub trait Stimulus {
    /// Shared sampling state.
    fn state(&self) -> &StimulusState;

    /// Mutable access to the shared sampling state.
    fn state_mut(&mut self) -> &mut StimulusState;

    /// Generates up to `buffer.len()` samples into `buffer`.
    ///
    /// Returns a full count on success, or a shorter count (possibly 0) if generation could
    /// not continue. An empty buffer always produces nothing.
    fn generate(&mut self, buffer: &mut [f32]) -> Batch;

    /// Replays previously captured samples from `source` into `destination`.
    ///
    /// Follows the same partial-result and sync rules as [`Stimulus::generate`]. Stimuli that
    /// compute their samples do not replay, so the default produces nothing.
    fn reproduce(&mut self, source: &[f32], destination: &mut [f32]) -> Batch {
        let _ = (source, destination);
        Batch::empty()
    }

    /// Applies a parameter record. On error the stimulus is left unchanged.
    fn configure(&mut self, params: &StimulusParameters) -> Result<(), StimulusError>;

    /// Applies a parameter record to one ear only.
    ///
    /// Stimuli without per-ear parameters reject this with
    /// [`StimulusError::EarSideUnsupported`].
    fn configure_ear(
        &mut self,
        params: &StimulusParameters,
        ear: EarSide,
    ) -> Result<(), StimulusError> {
        let _ = params;
        tracing::debug!(?ear, "per-ear configuration not supported");
        Err(StimulusError::EarSideUnsupported)
    }

    /// Duration of one stimulus period in seconds.
    fn period_secs(&self) -> f32;

    /// Index the next generated sample starts from.
    fn position(&self) -> u32 {
        self.state().position()
    }

    /// Moves the generation position. No range validation is applied.
    fn set_position(&mut self, position: u32) {
        self.state_mut().set_position(position);
    }

    /// Rewinds the generation position to 0.
    fn reset_position(&mut self) {
        self.set_position(0);
    }

    /// Sampling frequency in Hz.
    fn sampling_frequency(&self) -> f32 {
        self.state().sampling_frequency()
    }

    /// Sets the sampling frequency, rejecting zero, negative, infinite and NaN values.
    fn set_sampling_frequency(&mut self, sampling_frequency: f32) -> Result<(), StimulusError> {
        self.state_mut().set_sampling_frequency(sampling_frequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal stimulus emitting a constant, used to exercise the provided methods
    struct Constant {
        state: StimulusState,
        level: f32,
    }

    impl Stimulus for Constant {
        fn state(&self) -> &StimulusState {
            &self.state
        }

        fn state_mut(&mut self) -> &mut StimulusState {
            &mut self.state
        }

        fn generate(&mut self, buffer: &mut [f32]) -> Batch {
            buffer.fill(self.level);
            Batch::new(buffer.len(), None)
        }

        fn configure(&mut self, _params: &StimulusParameters) -> Result<(), StimulusError> {
            Ok(())
        }

        fn period_secs(&self) -> f32 {
            0.0
        }
    }

    fn constant() -> Constant {
        Constant {
            state: StimulusState::default(),
            level: 0.5,
        }
    }

    #[test]
    fn test_state_defaults() {
        let state = StimulusState::default();
        assert_eq!(state.position(), 0);
        assert_eq!(state.sampling_frequency(), 1.0);
    }

    #[test]
    fn test_state_new_validates() {
        assert!(StimulusState::new(44100.0).is_ok());
        assert_eq!(
            StimulusState::new(-1.0),
            Err(StimulusError::InvalidSamplingFrequency(-1.0))
        );
    }

    #[test]
    fn test_rejected_sampling_frequency_keeps_previous() {
        let mut stim = constant();
        stim.set_sampling_frequency(44100.0).unwrap();

        for bad in [0.0, -0.0, -48000.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert!(stim.set_sampling_frequency(bad).is_err());
            assert_eq!(stim.sampling_frequency(), 44100.0);
        }

        assert!(stim.set_sampling_frequency(f32::MIN_POSITIVE).is_ok());
        assert_eq!(stim.sampling_frequency(), f32::MIN_POSITIVE);
    }

    #[test]
    fn test_position_accessors() {
        let mut stim = constant();
        stim.set_position(u32::MAX);
        assert_eq!(stim.position(), u32::MAX);
        stim.reset_position();
        assert_eq!(stim.position(), 0);
    }

    #[test]
    fn test_default_reproduce_produces_nothing() {
        let mut stim = constant();
        let source = [0.25; 8];
        let mut destination = [0.0; 8];
        let batch = stim.reproduce(&source, &mut destination);
        assert!(batch.is_empty());
        assert_eq!(batch.sync, None);
        assert_eq!(destination, [0.0; 8]);
    }

    #[test]
    fn test_default_configure_ear_is_unsupported() {
        let mut stim = constant();
        let params = StimulusParameters::PureTone(Default::default());
        assert_eq!(
            stim.configure_ear(&params, EarSide::Left),
            Err(StimulusError::EarSideUnsupported)
        );
    }

    #[test]
    fn test_batch_helpers() {
        assert!(Batch::empty().is_empty());
        assert_eq!(Batch::default(), Batch::empty());
        let batch = Batch::new(4, Some(2));
        assert!(!batch.is_empty());
        assert_eq!(batch.sync, Some(2));
    }
}
