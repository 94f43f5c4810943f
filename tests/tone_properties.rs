#![cfg(feature = "tones")]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stimgen::core::math::round_half_up;
use stimgen::{PureTone, Stimulus, StimulusError, StimulusParameters, ToneParameters};

#[test]
fn test_period_matches_rounded_ratio_for_random_rates() {
    let mut rng = StdRng::seed_from_u64(0x5717);

    for _ in 0..500 {
        let fs: f32 = rng.gen_range(1000.0..192000.0);
        let f: f32 = rng.gen_range(10.001..19999.99);

        let mut tone = PureTone::new();
        tone.set_sampling_frequency(fs).unwrap();
        tone.set_tone_frequency(f).unwrap();

        let expected = round_half_up(f64::from(fs) / f64::from(f)) as u32;
        assert_eq!(tone.period_size_samples(), expected, "fs={} f={}", fs, f);
        assert_eq!(tone.tone_frequency(), f);
    }
}

#[test]
fn test_tone_frequency_bounds() {
    let mut tone = PureTone::with_tone(48000.0, 1000.0).unwrap();

    for bad in [10.0, 20000.0, -1.0, 0.0, f32::NAN] {
        assert!(matches!(
            tone.set_tone_frequency(bad),
            Err(StimulusError::FrequencyOutOfRange(_))
        ));
    }
    assert_eq!(tone.tone_frequency(), 1000.0);

    for good in [10.5, 440.0, 19999.0] {
        assert!(tone.set_tone_frequency(good).is_ok());
        assert_eq!(tone.tone_frequency(), good);
    }
}

#[test]
fn test_sync_marks_every_period_start() {
    let mut tone = PureTone::with_tone(48000.0, 1000.0).unwrap();
    let period = tone.period_size_samples() as usize;
    let mut rng = StdRng::seed_from_u64(7);

    // Track the absolute sample index independently of the tone's wrapped position
    let mut absolute = 0usize;
    for _ in 0..200 {
        let len = rng.gen_range(1..130);
        let mut buffer = vec![0.0f32; len];
        let batch = tone.generate(&mut buffer);
        assert_eq!(batch.produced, len);

        let expected = (0..len).find(|i| (absolute + i) % period == 0);
        assert_eq!(batch.sync, expected);

        absolute += len;
        assert_eq!(tone.position() as usize, absolute % period);
    }
}

#[test]
fn test_long_runs_stay_bounded() {
    let mut tone = PureTone::with_tone(44100.0, 997.0).unwrap();
    let mut buffer = [0.0f32; 441];

    for _ in 0..10_000 {
        tone.generate(&mut buffer);
        assert!(tone.position() < tone.period_size_samples());
    }

    // The wrapped position keeps the sine argument small, so samples stay accurate
    let step = tone.step_argument();
    let start = tone.position();
    tone.generate(&mut buffer);
    for (index, sample) in buffer.iter().enumerate().take(16) {
        let expected = (step * (start as usize + index) as f32).sin();
        assert!((sample - expected).abs() < 1e-5);
    }
}

#[test]
fn test_configure_through_trait_object() {
    let mut tone = PureTone::with_tone(48000.0, 1000.0).unwrap();
    let stimulus: &mut dyn Stimulus = &mut tone;

    let params = StimulusParameters::from(ToneParameters::new(500.0));
    stimulus.configure(&params).unwrap();
    assert!((stimulus.period_secs() - 0.002).abs() < 1e-7);

    stimulus.set_position(17);
    stimulus.reset_position();
    assert_eq!(stimulus.position(), 0);

    assert_eq!(tone.period_size_samples(), 96);
}
