//! dualosc Core - waveform and parameter primitives for the dualosc voice
//!
//! This crate provides the leaf building blocks of the dual oscillator voice.
//! Everything here is allocation-free and safe to call from an audio callback.
//!
//! # Core Abstractions
//!
//! ## Waveform Generators
//!
//! Pure functions mapping a phase ratio in `[0.0, 1.0)` to a sample in
//! `[-1.0, 1.0]`:
//!
//! - [`saw`], [`square`], [`triangle`], [`sine`] - Closed-form generators
//! - [`Waveform`] - Selector enum dispatching to a generator
//!
//! ## Random Source
//!
//! - [`Xorshift32`] - Tiny PRNG for white noise and phase randomization
//!
//! ## Parameter Introspection
//!
//! - [`ParameterInfo`] - Index-based parameter discovery and mutation
//! - [`ParamDescriptor`] - Raw-range metadata for one parameter slot
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! dualosc-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use dualosc_core::{Waveform, Xorshift32};
//!
//! let mut noise = Xorshift32::default();
//! let wf = Waveform::from(2u8);
//! assert_eq!(wf, Waveform::Triangle);
//! assert_eq!(wf.generate(0.25, &mut noise), 1.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod math;
pub mod param_info;
pub mod random;
pub mod waveform;

pub use math::{bipolar_to_unipolar, phase_increment, wrap_phase};
pub use param_info::{ParamDescriptor, ParamFlags, ParamUnit, ParameterInfo};
pub use random::Xorshift32;
pub use waveform::{Waveform, saw, sine, square, triangle};
