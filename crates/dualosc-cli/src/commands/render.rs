//! Offline render command.
//!
//! Drives [`DualOsc`] through the same host callbacks firmware uses: `init`,
//! one `param_change` per patch value, then `cycle` once per host block.

use crate::commands::common::{load_patch, parse_param_override};
use crate::wav::{BitDepth, write_q31_wav};
use anyhow::Context;
use clap::Args;
use dualosc_config::{Patch, validate_patch};
use dualosc_platform::{DualOsc, SAMPLE_RATE, UserOscParams, UserOscillator};
use dualosc_synth::Pitch;
use std::f32::consts::TAU;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args)]
pub struct RenderArgs {
    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// MIDI note number
    #[arg(long, default_value = "60")]
    note: u8,

    /// Pitch bend in semitones added to the note
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    bend: f32,

    /// Duration in seconds
    #[arg(long, default_value = "1.0")]
    duration: f32,

    /// Factory patch name or patch file path
    #[arg(short, long)]
    patch: Option<String>,

    /// Raw parameter override applied after the patch (INDEX=VALUE, repeatable)
    #[arg(long = "param", value_parser = parse_param_override)]
    params: Vec<(u16, u16)>,

    /// Shape LFO value (-1 to 1), or sweep depth with --lfo-rate
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    lfo: f32,

    /// Sweep the shape LFO as a sine at this rate in Hz
    #[arg(long)]
    lfo_rate: Option<f32>,

    /// Frames per host cycle
    #[arg(long, default_value = "64")]
    block_size: usize,

    /// Output bit depth
    #[arg(long, value_enum, default_value = "16")]
    bits: BitDepth,

    /// Seed for the random starting phases
    #[arg(long, default_value = "1")]
    seed: u32,
}

/// Shape LFO value for the block starting at `frame`.
fn lfo_at(frame: usize, depth: f32, rate: Option<f32>) -> f32 {
    match rate {
        Some(hz) => depth * (TAU * hz * frame as f32 / SAMPLE_RATE).sin(),
        None => depth,
    }
}

/// Render `frames` samples of `patch` at `pitch` in host-sized blocks.
fn render(
    patch: &Patch,
    overrides: &[(u16, u16)],
    pitch: Pitch,
    args: &RenderArgs,
    frames: usize,
) -> Vec<i32> {
    let mut osc = DualOsc::new(args.seed);
    osc.init(0, 0);
    for (index, value) in patch.param_changes().into_iter().chain(overrides.iter().copied()) {
        osc.param_change(index, value);
    }

    let mut output = vec![0i32; frames];
    for (block, chunk) in output.chunks_mut(args.block_size).enumerate() {
        let lfo = lfo_at(block * args.block_size, args.lfo, args.lfo_rate);
        osc.cycle(&UserOscParams::new(pitch, lfo), chunk);
    }
    output
}

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.block_size > 0, "block size must be at least 1");
    anyhow::ensure!(
        args.duration.is_finite() && args.duration > 0.0,
        "duration must be positive"
    );
    anyhow::ensure!((-1.0..=1.0).contains(&args.lfo), "LFO must be within -1..1");

    let patch = match &args.patch {
        Some(name) => load_patch(name).with_context(|| format!("loading patch '{name}'"))?,
        None => Patch::new("Init"),
    };
    info!(patch = %patch.name, "patch loaded");

    for issue in validate_patch(&patch) {
        warn!("{issue}; applying unchanged");
    }
    if patch.sample_rate != SAMPLE_RATE as u32 {
        warn!(
            hint = patch.sample_rate,
            rate = SAMPLE_RATE,
            "patch sample rate hint ignored, rendering at host rate"
        );
    }

    let pitch = Pitch::from_semitones(f32::from(args.note) + args.bend);
    let frames = (args.duration * SAMPLE_RATE).round() as usize;
    info!(
        note = pitch.note,
        modifier = pitch.modifier,
        hz = pitch.frequency(),
        frames,
        block_size = args.block_size,
        lfo = args.lfo,
        lfo_rate = ?args.lfo_rate,
        "rendering"
    );

    let output = render(&patch, &args.params, pitch, &args, frames);
    write_q31_wav(&args.output, &output, args.bits)?;

    println!(
        "Rendered {} samples ({:.2}s, {}-bit) to {}",
        output.len(),
        args.duration,
        args.bits.bits(),
        args.output.display()
    );
    Ok(())
}
