//! dualosc Platform - host boundary for the dual oscillator voice
//!
//! This crate adapts the float-domain voice of `dualosc-synth` to a host that
//! speaks Q31 fixed point and raw 10-bit controls.
//!
//! # Core Abstractions
//!
//! ## Host Interface
//!
//! - [`UserOscillator`] - `init` / `cycle` / `note_on` / `note_off` /
//!   `param_change` callbacks
//! - [`UserOscParams`] - Per-buffer pitch and shape LFO
//! - [`DualOsc`] - The voice packaged as a user oscillator
//!
//! ## Fixed Point
//!
//! - [`q31_to_f32`] / [`f32_to_q31`] - Sample and LFO conversion
//! - [`param_val_to_f32`] - 10-bit knob value to `[0, 1]`
//!
//! ## Control Mapping
//!
//! - [`ControlId`] - Namespaced control identifier (hardware, MIDI)
//! - [`ControlMapper`] - Routes knobs and CCs to parameter slots
//!
//! # Control ID Namespaces
//!
//! Control IDs use a 16-bit identifier with namespace prefixes:
//!
//! - `0x00XX` - Hardware controls (physical knobs on the device)
//! - `0x02XX` - MIDI controls (CC number in the low byte)
//!
//! # Logging
//!
//! The optional `tracing` feature emits `debug!` events from `init` and
//! `param_change`. `cycle` never logs.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded audio applications.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dualosc-platform = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use dualosc_platform::{DualOsc, UserOscParams, UserOscillator};
//! use dualosc_synth::Pitch;
//!
//! let mut osc = DualOsc::default();
//! osc.init(0, 0);
//! osc.param_change(3, 200); // detune fully up
//!
//! let params = UserOscParams::new(Pitch::from_note(60), 1.0);
//! let mut block = [0i32; 32];
//! osc.cycle(&params, &mut block);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod control_mapper;
pub mod host;
pub mod q31;

// Re-export dualosc-core types for convenience
pub use dualosc_core::{ParamDescriptor, ParamUnit, ParameterInfo};

// Re-export main types at crate root
pub use control_mapper::{
    ControlMapper, DEFAULT_MAPPING, ParamChange, cc_to_param_value, knob_to_param_value,
};
pub use host::{DualOsc, SAMPLE_RATE, UserOscParams, UserOscillator};
pub use q31::{PARAM_10BIT_MAX, f32_to_q31, param_val_to_f32, q31_to_f32};

/// Namespace identifiers for control sources.
pub mod namespace {
    /// Hardware controls (physical knobs on the device).
    pub const HARDWARE: u16 = 0x0000;
    /// MIDI controls (CC messages).
    pub const MIDI: u16 = 0x0200;
}

/// Shape knob (knob A).
pub const KNOB_A: ControlId = ControlId::hardware(0);
/// Shift-shape knob (knob B).
pub const KNOB_B: ControlId = ControlId::hardware(1);
/// MIDI CC number driving the shape slot.
pub const CC_SHAPE: u8 = 54;
/// MIDI CC number driving the shift-shape slot.
pub const CC_SHIFT_SHAPE: u8 = 55;

/// A namespaced control identifier.
///
/// The high byte is the namespace (source type) and the low byte is the
/// control index within that namespace.
///
/// # Example
///
/// ```rust
/// use dualosc_platform::ControlId;
///
/// let knob = ControlId::hardware(0x01);
/// assert_eq!(knob.raw(), 0x0001);
/// assert!(knob.is_hardware());
///
/// let cc = ControlId::midi(54);
/// assert_eq!(cc.raw(), 0x0236);
/// assert!(cc.is_midi());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(u16);

impl ControlId {
    /// Creates a new ControlId from a raw 16-bit value.
    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Creates a hardware control ID (namespace 0x00XX).
    #[inline]
    pub const fn hardware(index: u8) -> Self {
        Self(namespace::HARDWARE | index as u16)
    }

    /// Creates a MIDI control ID (namespace 0x02XX).
    #[inline]
    pub const fn midi(index: u8) -> Self {
        Self(namespace::MIDI | index as u16)
    }

    /// Returns the raw 16-bit value.
    #[inline]
    pub const fn raw(&self) -> u16 {
        self.0
    }

    /// Returns the namespace portion (high byte).
    #[inline]
    pub const fn namespace(&self) -> u16 {
        self.0 & 0xFF00
    }

    /// Returns the index within the namespace (low byte).
    #[inline]
    pub const fn index(&self) -> u8 {
        (self.0 & 0x00FF) as u8
    }

    /// Returns true if this is a hardware control.
    #[inline]
    pub const fn is_hardware(&self) -> bool {
        self.namespace() == namespace::HARDWARE
    }

    /// Returns true if this is a MIDI control.
    #[inline]
    pub const fn is_midi(&self) -> bool {
        self.namespace() == namespace::MIDI
    }
}
