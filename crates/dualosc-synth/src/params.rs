//! Parameter slots of the dual oscillator voice and their raw-value scaling.
//!
//! Hosts send `(index, value)` pairs with 16-bit raw values. Each slot has a
//! fixed scaling rule and no validation: values outside the declared range
//! are applied as-is, and unknown indices are ignored.
//!
//! | Index | Slot        | Raw range | Stored value                 |
//! |-------|-------------|-----------|------------------------------|
//! | 0     | Waveform 1  | 0-4       | byte → [`Waveform`]          |
//! | 1     | Waveform 2  | 0-4       | byte → [`Waveform`]          |
//! | 2     | Balance     | 0-100     | `value / 100`                |
//! | 3     | Detune      | 0-200     | `(value - 100) / 100`        |
//! | 4     | Sync        | 0-1       | byte → [`SyncMode`]          |
//! | 5     | Param 6     | 0-100     | unused                       |
//! | 6     | Shape       | 0-1023    | unused                       |
//! | 7     | Shift Shape | 0-1023    | unused                       |
//!
//! [`Waveform`]: dualosc_core::Waveform

use dualosc_core::{ParamDescriptor, ParamFlags};

/// Full scale of percent-style parameters.
pub const MAX_PARAM: u16 = 100;

/// Number of parameter slots a host can address.
pub const PARAM_COUNT: usize = 8;

/// Hard sync between the two oscillators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SyncMode {
    /// Oscillators run free.
    #[default]
    Disabled,
    /// Oscillator 2 restarts at oscillator 1's phase whenever oscillator 1
    /// completes a cycle.
    Enabled,
}

impl From<u8> for SyncMode {
    fn from(raw: u8) -> Self {
        if raw == 1 {
            SyncMode::Enabled
        } else {
            SyncMode::Disabled
        }
    }
}

impl SyncMode {
    /// Returns `true` if hard sync is on.
    #[inline]
    pub const fn is_enabled(self) -> bool {
        matches!(self, SyncMode::Enabled)
    }
}

/// Addressable parameter slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamIndex {
    /// Oscillator 1 waveform.
    Waveform1,
    /// Oscillator 2 waveform.
    Waveform2,
    /// Oscillator 1/2 crossfade.
    Balance,
    /// Oscillator 2 detune amount and direction.
    Detune,
    /// Hard sync toggle.
    Sync,
    /// Sixth user slot, unused.
    Param6,
    /// 10-bit shape knob, reserved.
    Shape,
    /// 10-bit shift-shape knob, reserved.
    ShiftShape,
}

impl ParamIndex {
    /// All slots in index order.
    pub const ALL: [ParamIndex; PARAM_COUNT] = [
        ParamIndex::Waveform1,
        ParamIndex::Waveform2,
        ParamIndex::Balance,
        ParamIndex::Detune,
        ParamIndex::Sync,
        ParamIndex::Param6,
        ParamIndex::Shape,
        ParamIndex::ShiftShape,
    ];

    /// Slot for a host index, or `None` for unrecognized indices.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < PARAM_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Host index of this slot.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display and range metadata for this slot.
    pub const fn descriptor(self) -> ParamDescriptor {
        match self {
            ParamIndex::Waveform1 => {
                ParamDescriptor::selector("Waveform 1", "Wave 1", 4, 1).with_id("waveform1")
            }
            ParamIndex::Waveform2 => {
                ParamDescriptor::selector("Waveform 2", "Wave 2", 4, 1).with_id("waveform2")
            }
            ParamIndex::Balance => ParamDescriptor::percent("Balance", "Balance", 50).with_id("balance"),
            ParamIndex::Detune => {
                ParamDescriptor::bipolar_percent("Detune", "Detune", 150).with_id("detune")
            }
            ParamIndex::Sync => ParamDescriptor::selector("Sync", "Sync", 1, 0).with_id("sync"),
            ParamIndex::Param6 => ParamDescriptor::percent("Param 6", "Param 6", 0)
                .with_id("param6")
                .with_flags(ParamFlags::RESERVED),
            ParamIndex::Shape => ParamDescriptor::ten_bit("Shape", "Shape")
                .with_id("shape")
                .with_flags(ParamFlags::RESERVED),
            ParamIndex::ShiftShape => ParamDescriptor::ten_bit("Shift Shape", "Shift")
                .with_id("shift_shape")
                .with_flags(ParamFlags::RESERVED),
        }
    }
}

/// Balance raw value (0-100) to crossfade weight (0.0-1.0). Not clamped.
#[inline]
pub fn balance_from_raw(value: u16) -> f32 {
    f32::from(value) / f32::from(MAX_PARAM)
}

/// Detune raw value (0-200, 100 = none) to detune amount (-1.0 to 1.0).
///
/// The raw value is reinterpreted as signed 16-bit before centering, so
/// values above `i16::MAX` come out strongly negative. Not clamped.
#[inline]
pub fn detune_from_raw(value: u16) -> f32 {
    (i32::from(value as i16) - i32::from(MAX_PARAM)) as f32 / f32::from(MAX_PARAM)
}
