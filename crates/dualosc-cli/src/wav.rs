//! WAV writing for Q31 sample buffers.

use anyhow::Context;
use clap::ValueEnum;
use dualosc_platform::SAMPLE_RATE;
use hound::{SampleFormat, WavSpec, WavWriter};
use std::path::Path;

/// PCM bit depth of rendered files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum BitDepth {
    /// 16-bit integer PCM.
    #[default]
    #[value(name = "16")]
    Sixteen,
    /// 32-bit integer PCM, the full Q31 word.
    #[value(name = "32")]
    ThirtyTwo,
}

impl BitDepth {
    /// Bits per sample.
    pub const fn bits(self) -> u16 {
        match self {
            BitDepth::Sixteen => 16,
            BitDepth::ThirtyTwo => 32,
        }
    }
}

/// Mono, host-rate WAV spec for a bit depth.
pub fn wav_spec(depth: BitDepth) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE as u32,
        bits_per_sample: depth.bits(),
        sample_format: SampleFormat::Int,
    }
}

/// Write Q31 samples as integer PCM.
///
/// 16-bit output keeps the top half of each Q31 word.
pub fn write_q31_wav(path: &Path, samples: &[i32], depth: BitDepth) -> anyhow::Result<()> {
    let mut writer = WavWriter::create(path, wav_spec(depth))
        .with_context(|| format!("failed to create '{}'", path.display()))?;

    match depth {
        BitDepth::Sixteen => {
            for &q in samples {
                writer.write_sample((q >> 16) as i16)?;
            }
        }
        BitDepth::ThirtyTwo => {
            for &q in samples {
                writer.write_sample(q)?;
            }
        }
    }

    writer
        .finalize()
        .with_context(|| format!("failed to finalize '{}'", path.display()))?;
    Ok(())
}
