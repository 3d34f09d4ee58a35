//! Pitch and detune resolution.
//!
//! Turns a host pitch (MIDI note plus an upward sub-semitone modifier) and a
//! shape-LFO value into the two oscillator frequencies used for one cycle.
//!
//! # Pitch Encoding
//!
//! Hosts pack pitch into 16 bits: the high byte is the note number, the low
//! byte a modifier in 1/255ths of a semitone. The modifier only bends
//! upward, so a downward bend arrives as a lower note plus a large modifier.
//!
//! # Detune
//!
//! Oscillator 2 is offset from the base frequency by the detune amount,
//! scaled by the LFO (rescaled to `[0, 1]`):
//!
//! ```text
//! detune > 0:  f2 = base * (1 + detune * lfo)          up to +1 octave
//! detune <= 0: f2 = base * (1 + 0.5 * detune * lfo)    down to -1 octave
//! ```
//!
//! The negative branch is halved: halving the frequency is already a full
//! octave down, while doubling it is an octave up.

use dualosc_core::bipolar_to_unipolar;

/// Highest note index with a defined frequency; higher notes clip to it.
pub const MAX_NOTE: u8 = 151;

/// Upper limit on the resolved base frequency (the frequency of note 138,
/// just under the 24 kHz Nyquist limit of a 48 kHz host).
pub const NOTE_MAX_HZ: f32 = 23_679.643;

/// Scale from the 8-bit pitch modifier to a fraction of a semitone.
const NOTE_MOD_SCALE: f32 = 1.0 / 255.0;

/// A host pitch: note number plus upward modifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pitch {
    /// MIDI-style note number (69 = A4).
    pub note: u8,
    /// Upward bend in 1/255ths of a semitone.
    pub modifier: u8,
}

impl Pitch {
    /// Pitch at an exact note.
    pub const fn from_note(note: u8) -> Self {
        Self { note, modifier: 0 }
    }

    /// Unpack `note << 8 | modifier`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dualosc_synth::Pitch;
    ///
    /// let p = Pitch::from_packed(0x3C80);
    /// assert_eq!(p.note, 60);
    /// assert_eq!(p.modifier, 128);
    /// assert_eq!(p.packed(), 0x3C80);
    /// ```
    pub const fn from_packed(packed: u16) -> Self {
        Self {
            note: (packed >> 8) as u8,
            modifier: (packed & 0xFF) as u8,
        }
    }

    /// Pack into `note << 8 | modifier`.
    pub const fn packed(self) -> u16 {
        ((self.note as u16) << 8) | self.modifier as u16
    }

    /// Pitch for a fractional note, with the bend split into a note and an
    /// upward modifier. Negative input clamps to note 0.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dualosc_synth::Pitch;
    ///
    /// // A quarter-tone below C4 is B3 plus half a semitone.
    /// let p = Pitch::from_semitones(59.5);
    /// assert_eq!(p.note, 59);
    /// assert_eq!(p.modifier, 128);
    /// ```
    pub fn from_semitones(semitones: f32) -> Self {
        let clamped = semitones.clamp(0.0, 255.0);
        let note = libm::floorf(clamped);
        let modifier = libm::roundf((clamped - note) * 255.0);
        Self {
            note: note as u8,
            modifier: modifier as u8,
        }
    }

    /// Base oscillator frequency in Hz.
    ///
    /// Interpolates linearly between the frequencies of `note` and `note + 1`
    /// by the modifier, then clips to [`NOTE_MAX_HZ`].
    pub fn frequency(self) -> f32 {
        let f0 = note_hz(self.note);
        let f1 = note_hz(self.note.saturating_add(1));
        let f = f0 + (f1 - f0) * (f32::from(self.modifier) * NOTE_MOD_SCALE);
        f.min(NOTE_MAX_HZ)
    }
}

/// Equal-tempered frequency of a MIDI note (A4 = 69 = 440 Hz).
#[inline]
pub fn midi_to_freq(note: u8) -> f32 {
    440.0 * libm::powf(2.0, (f32::from(note) - 69.0) / 12.0)
}

/// Frequency of a note, with notes above [`MAX_NOTE`] clipped.
#[inline]
fn note_hz(note: u8) -> f32 {
    midi_to_freq(note.min(MAX_NOTE))
}

/// Oscillator 2 frequency for a base frequency, detune amount and unipolar
/// LFO value.
///
/// # Example
///
/// ```rust
/// use dualosc_synth::detuned_frequency;
///
/// assert_eq!(detuned_frequency(100.0, 1.0, 1.0), 200.0);
/// assert_eq!(detuned_frequency(100.0, -1.0, 1.0), 50.0);
/// assert_eq!(detuned_frequency(100.0, 0.5, 0.0), 100.0);
/// ```
#[inline]
pub fn detuned_frequency(base_hz: f32, detune: f32, lfo_unipolar: f32) -> f32 {
    if detune > 0.0 {
        base_hz * (1.0 + detune * lfo_unipolar)
    } else {
        base_hz * (1.0 + 0.5 * detune * lfo_unipolar)
    }
}

/// Frequencies of both oscillators for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OscFrequencies {
    /// Oscillator 1 frequency in Hz (the base pitch).
    pub osc1: f32,
    /// Oscillator 2 frequency in Hz (detuned).
    pub osc2: f32,
}

impl OscFrequencies {
    /// Resolve both frequencies from a pitch, detune amount and bipolar LFO
    /// value in `[-1, 1]`.
    pub fn resolve(pitch: Pitch, detune: f32, lfo: f32) -> Self {
        let base = pitch.frequency();
        Self {
            osc1: base,
            osc2: detuned_frequency(base, detune, bipolar_to_unipolar(lfo)),
        }
    }
}
