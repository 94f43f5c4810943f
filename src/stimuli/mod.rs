//! Stimulus implementations for auditory testing.
//!
//! This module contains the concrete generators implementing the `Stimulus` trait.

mod pure_tone;

pub use pure_tone::PureTone;
