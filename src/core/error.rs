//! Error type for rejected stimulus configuration.

/// Reasons a stimulus refused a configuration change.
///
/// Every setter that returns this error leaves the stimulus exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum StimulusError {
    /// The sampling frequency was zero, negative, infinite or NaN
    #[error("sampling frequency must be a positive finite value, got {0}")]
    InvalidSamplingFrequency(f32),
    /// The tone frequency fell outside the open generatable range
    #[error("tone frequency {0} Hz is outside the generatable range (10 Hz, 20000 Hz)")]
    FrequencyOutOfRange(f32),
    /// A period of zero samples was requested
    #[error("period size must be at least one sample")]
    EmptyPeriod,
    /// The stimulus has no per-ear parameters
    #[error("stimulus does not support per-ear configuration")]
    EarSideUnsupported,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_value() {
        let err = StimulusError::FrequencyOutOfRange(25000.0);
        assert!(err.to_string().contains("25000"));

        let err = StimulusError::InvalidSamplingFrequency(-1.0);
        assert!(err.to_string().contains("-1"));
    }
}
