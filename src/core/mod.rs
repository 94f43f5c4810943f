//! Core stimulus types and traits.
//!
//! This module provides the abstractions shared by every stimulus, including:
//! - `Stimulus` trait for all tone generators and sample replayers
//! - `StimulusState` for the position and sampling frequency every stimulus tracks
//! - `Batch` describing the outcome of one generation call
//! - `StimulusParameters` for tagged, validated configuration records
//! - Numeric helpers shared by generators and the DAC adapter

mod error;
pub mod math;
mod params;
mod stimulus;

pub use error::StimulusError;
pub use math::least_common_multiple;
pub use params::{
    EarSide, MIXED_TONES_MAXIMUM, PAYLOAD_OFFSET, StimulusKind, StimulusParameters,
    TONE_FREQUENCIES_GROUP, ToneParameters,
};
pub use stimulus::{Batch, Stimulus, StimulusState};
