//! Stimgen - Auditory test stimulus generation for DAC-driven hardware
//!
//! This library generates periodic test tones as normalized `f32` sample streams and converts
//! them into the fixed-width integer codes a digital-to-analog converter expects, while
//! reporting where each signal period starts inside every generated batch.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "tones")]
//! # {
//! use stimgen::{DacAdapter, PureTone, Stimulus};
//!
//! let mut tone = PureTone::new();
//! tone.set_sampling_frequency(48000.0).unwrap();
//! tone.set_tone_frequency(1000.0).unwrap();
//!
//! let mut dac = DacAdapter::new(Some(&mut tone), 16);
//! let mut codes = [0i16; 64];
//! let batch = dac.generate(&mut codes);
//!
//! assert_eq!(batch.produced, 64);
//! assert_eq!(batch.sync, Some(0));
//! # }
//! ```

pub mod core;
pub mod dac;
#[cfg(feature = "wav-loader")]
pub mod loader;
#[cfg(feature = "tones")]
pub mod stimuli;

// Re-export commonly used types at the crate root
pub use crate::core::{
    Batch, EarSide, Stimulus, StimulusError, StimulusKind, StimulusParameters, StimulusState,
    ToneParameters, least_common_multiple,
};
pub use dac::{DacAdapter, DacSample};
#[cfg(feature = "wav-loader")]
pub use loader::{LoadError, load_stored_samples};
#[cfg(feature = "tones")]
pub use stimuli::PureTone;
