use std::path::Path;

use anyhow::Result;
use hound::{SampleFormat, WavSpec, WavWriter};

use crate::encoder::{encode, Scheme};
use crate::waveform::Waveform;

pub const DEFAULT_SAMPLES_PER_BIT: usize = 192;
pub const DEFAULT_SAMPLE_RATE: u32 = 48000;
const SAMPLE_SCALE: f32 = 0.8;

#[derive(Clone, Debug)]
pub struct GenerateConfig {
    pub bits: String,
    pub scheme: Scheme,
    pub samples_per_bit: usize,
    pub sample_rate: u32,
    pub output_gain: f32,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        GenerateConfig {
            bits: String::new(),
            scheme: Scheme::UnipolarNrz,
            samples_per_bit: DEFAULT_SAMPLES_PER_BIT,
            sample_rate: DEFAULT_SAMPLE_RATE,
            output_gain: 1.0,
        }
    }
}

/// Expand a step waveform to PCM samples, holding each segment's level for
/// its duration scaled by `samples_per_bit`.
pub fn render_samples(wave: &Waveform, samples_per_bit: usize) -> Vec<f32> {
    let mut samples = Vec::with_capacity(wave.span().ceil() as usize * samples_per_bit);
    for segment in wave.times.chunks_exact(2).zip(wave.levels.chunks_exact(2)) {
        let (times, levels) = segment;
        let duration = times[1] - times[0];
        let count = (duration * samples_per_bit as f32).round() as usize;
        samples.extend(std::iter::repeat(levels[0]).take(count));
    }
    samples
}

/// Encode the configured bit string and write it as a mono float WAV, one
/// held level per sample. `progress` is called with a 0..=1 fraction.
pub fn generate_wav<F>(config: &GenerateConfig, output_path: &str, mut progress: F) -> Result<()>
where
    F: FnMut(f32),
{
    let wave = encode(config.scheme, &config.bits)?;
    let samples = render_samples(&wave, config.samples_per_bit);

    let spec = WavSpec {
        channels: 1,
        sample_rate: config.sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(Path::new(output_path), spec)?;
    let total = samples.len().max(1);

    for (i, sample) in samples.into_iter().enumerate() {
        writer.write_sample(sample * SAMPLE_SCALE * config.output_gain)?;
        progress((i + 1) as f32 / total as f32);
    }

    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::manchester;

    #[test]
    fn render_produces_samples_per_bit_times_bits() {
        let wave = manchester("1011").unwrap();
        let samples = render_samples(&wave, 192);
        assert_eq!(samples.len(), 4 * 192);
    }

    #[test]
    fn rendered_samples_follow_held_levels() {
        let wave = manchester("1").unwrap();
        let samples = render_samples(&wave, 4);
        assert_eq!(samples, vec![-1.0, -1.0, 1.0, 1.0]);
    }

    #[test]
    fn render_of_empty_waveform_is_empty() {
        let wave = Waveform::new();
        assert!(render_samples(&wave, 192).is_empty());
    }
}
