//! Tagged parameter records for configuring stimuli.
//!
//! Each stimulus kind has its own record type. `StimulusParameters` wraps them in a sum type,
//! so a record can only be handed to the stimulus that understands it, and every record is
//! validated at the boundary before it reaches a generator.

use super::error::StimulusError;
use super::math::is_generatable;

/// Byte offset of the stimulus-specific payload inside a host parameter frame.
pub const PAYLOAD_OFFSET: u8 = 8;

/// Number of tone frequencies grouped per stimulus record.
pub const TONE_FREQUENCIES_GROUP: u8 = 4;

/// Maximum number of modulated tones a mixed stimulus may carry.
pub const MIXED_TONES_MAXIMUM: u8 = 5;

/// The kinds of stimulus a parameter record can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StimulusKind {
    /// A single sinusoid
    PureTone,
}

/// Ear selection for stimuli that are configured per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EarSide {
    /// Left channel only
    Left,
    /// Right channel only
    Right,
    /// Both channels
    Both,
}

/// Parameters for a pure tone stimulus.
///
/// # Examples
///
/// ```
/// use stimgen::ToneParameters;
///
/// let params = ToneParameters::new(1000.0);
/// assert!(params.validate().is_ok());
/// assert!(ToneParameters::new(20000.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToneParameters {
    /// Tone frequency in Hz
    pub frequency: f32,
}

impl ToneParameters {
    /// Creates a record for a tone at `frequency` Hz.
    pub fn new(frequency: f32) -> Self {
        Self { frequency }
    }

    /// Checks that the frequency lies strictly inside the generatable range.
    pub fn validate(&self) -> Result<(), StimulusError> {
        if is_generatable(self.frequency) {
            Ok(())
        } else {
            Err(StimulusError::FrequencyOutOfRange(self.frequency))
        }
    }
}

impl Default for ToneParameters {
    fn default() -> Self {
        Self { frequency: 10.0 }
    }
}

/// A configuration record tagged with the kind of stimulus it targets.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
#[non_exhaustive]
pub enum StimulusParameters {
    /// Parameters for [`crate::PureTone`]
    PureTone(ToneParameters),
}

impl StimulusParameters {
    /// Returns the kind of stimulus this record targets.
    pub fn kind(&self) -> StimulusKind {
        match self {
            StimulusParameters::PureTone(_) => StimulusKind::PureTone,
        }
    }

    /// Validates every value in the record.
    pub fn validate(&self) -> Result<(), StimulusError> {
        match self {
            StimulusParameters::PureTone(tone) => tone.validate(),
        }
    }
}

impl From<ToneParameters> for StimulusParameters {
    fn from(params: ToneParameters) -> Self {
        StimulusParameters::PureTone(params)
    }
}
