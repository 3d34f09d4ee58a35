//! Parameter listing command.

#![allow(clippy::print_literal)] // Table headers use literal strings intentionally

use clap::Args;
use dualosc_core::{ParamFlags, ParameterInfo};
use dualosc_synth::VoiceState;

#[derive(Args)]
pub struct ParamsArgs {
    /// Include reserved slots
    #[arg(long)]
    all: bool,
}

pub fn run(args: ParamsArgs) -> anyhow::Result<()> {
    let voice = VoiceState::default();

    println!("Parameters");
    println!("==========");
    println!();
    println!(
        "  {:5}  {:12}  {:12}  {:8}  {}",
        "Index", "Name", "Id", "Default", "Range"
    );
    println!(
        "  {:5}  {:12}  {:12}  {:8}  {}",
        "-----", "----", "--", "-------", "-----"
    );

    for index in 0..voice.param_count() {
        let Some(desc) = voice.param_info(index) else {
            continue;
        };
        let reserved = desc.flags.contains(ParamFlags::RESERVED);
        if reserved && !args.all {
            continue;
        }
        println!(
            "  {:5}  {:12}  {:12}  {:8}  {}-{}{}{}",
            index,
            desc.name,
            desc.string_id,
            desc.default,
            desc.min,
            desc.max,
            desc.unit.suffix(),
            if reserved { " (reserved)" } else { "" }
        );
    }

    println!();
    println!("Waveforms: 0 saw, 1 square, 2 triangle, 3 sine, 4 noise");
    println!("Override with: dualosc render out.wav --param INDEX=VALUE");
    Ok(())
}
