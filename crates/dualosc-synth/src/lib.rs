//! dualosc Synth - dual oscillator voice engine
//!
//! This crate turns the primitives of `dualosc-core` into a complete voice:
//! two phase-accumulator oscillators crossfaded by a balance control, with
//! oscillator 2 detuned by an LFO-scaled amount and optionally hard-synced to
//! oscillator 1.
//!
//! # Core Components
//!
//! ## Voice State
//!
//! - [`VoiceState`] - Waveforms, sync, phases, balance, detune and noise
//! - [`SyncMode`] - Hard sync toggle
//!
//! ## Parameters
//!
//! - [`ParamIndex`] - The eight host parameter slots
//! - [`balance_from_raw`] / [`detune_from_raw`] - Raw value scaling
//!
//! ## Pitch
//!
//! - [`Pitch`] - Note number plus upward modifier
//! - [`OscFrequencies`] - Both oscillator frequencies for one cycle
//!
//! ## Engine
//!
//! - [`PhaseStep`] - Per-sample phase increments
//! - [`VoiceState::tick`] / [`VoiceState::render`] - The sample loop
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! dualosc-synth = { version = "0.1", default-features = false }
//! ```
//!
//! # Example: Synced Saw Lead
//!
//! ```rust
//! use dualosc_core::{ParameterInfo, Xorshift32};
//! use dualosc_synth::{OscFrequencies, ParamIndex, Pitch, VoiceState};
//!
//! let mut rng = Xorshift32::new(42);
//! let mut voice = VoiceState::new(&mut rng);
//!
//! voice.set_param(ParamIndex::Waveform1.index(), 0); // saw
//! voice.set_param(ParamIndex::Waveform2.index(), 0); // saw
//! voice.set_param(ParamIndex::Sync.index(), 1);
//! voice.set_param(ParamIndex::Detune.index(), 180);
//!
//! let freqs = OscFrequencies::resolve(Pitch::from_note(57), voice.detune(), 0.5);
//! let mut buffer = [0.0f32; 256];
//! voice.render(freqs, 48000.0, &mut buffer);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod engine;
pub mod params;
pub mod pitch;
pub mod voice;

pub use engine::PhaseStep;
pub use params::{
    MAX_PARAM, PARAM_COUNT, ParamIndex, SyncMode, balance_from_raw, detune_from_raw,
};
pub use pitch::{MAX_NOTE, NOTE_MAX_HZ, OscFrequencies, Pitch, detuned_frequency, midi_to_freq};
pub use voice::VoiceState;

// Re-export commonly used types from dualosc-core
pub use dualosc_core::{ParameterInfo, Waveform, Xorshift32};
