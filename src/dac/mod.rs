//! Conversion of stimulus samples into DAC codes.
//!
//! This module contains the `DacAdapter` and the `DacSample` trait describing the integer
//! formats it can produce.

mod adapter;
mod sample;

pub use adapter::DacAdapter;
pub use sample::DacSample;
