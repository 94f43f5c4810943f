//! Plays a pure tone through the default output device via 16-bit DAC codes.
//!
//! Usage: `cargo run --example play_tone -- [frequency_hz] [seconds]`

use anyhow::{Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SampleFormat, SizedSample, StreamConfig};
use std::time::Duration;
use stimgen::{DacAdapter, PureTone, Stimulus};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let frequency: f32 = match args.next() {
        Some(arg) => arg.parse().context("frequency must be a number")?,
        None => 1000.0,
    };
    let seconds: u64 = match args.next() {
        Some(arg) => arg.parse().context("duration must be whole seconds")?,
        None => 3,
    };

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow::anyhow!("No output device available"))?;
    let config = device.default_output_config()?;

    let tone = PureTone::with_tone(config.sample_rate().0 as f32, frequency)?;
    tracing::info!(
        frequency,
        sample_rate = config.sample_rate().0,
        period_size_samples = tone.period_size_samples(),
        "playing pure tone"
    );

    let _stream = match config.sample_format() {
        SampleFormat::I16 => play::<i16>(&device, &config.into(), tone)?,
        SampleFormat::F32 => play::<f32>(&device, &config.into(), tone)?,
        SampleFormat::U16 => play::<u16>(&device, &config.into(), tone)?,
        sample_format => {
            return Err(anyhow::anyhow!(
                "Unsupported sample format: {}",
                sample_format
            ));
        }
    };

    std::thread::sleep(Duration::from_secs(seconds));
    Ok(())
}

/// Builds a stream that feeds 16-bit DAC codes from `tone` to every channel.
fn play<T>(device: &cpal::Device, config: &StreamConfig, mut tone: PureTone) -> Result<cpal::Stream>
where
    T: SizedSample + FromSample<i16>,
{
    let channels = usize::from(config.channels);
    let mut codes: Vec<i16> = Vec::new();

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let frames = data.len() / channels;
            codes.resize(frames, 0);

            let mut dac = DacAdapter::new(Some(&mut tone as &mut dyn Stimulus), 16);
            let batch = dac.generate(&mut codes);
            if let Some(sync) = batch.sync {
                tracing::trace!(sync, "period start");
            }

            for (frame, &code) in data.chunks_mut(channels).zip(&codes[..batch.produced]) {
                frame.fill(T::from_sample(code));
            }
        },
        |err| tracing::error!(%err, "audio stream error"),
        None,
    )?;

    stream.play()?;
    Ok(stream)
}
