//! Host-facing oscillator interface.
//!
//! A host drives a user oscillator through four callbacks: `init` once at
//! load, then `cycle` from the audio context with parameter and note
//! callbacks arriving between buffers. [`UserOscillator`] expresses that
//! contract; [`DualOsc`] implements it on top of a
//! [`VoiceState`](dualosc_synth::VoiceState).
//!
//! # Realtime Rules
//!
//! `cycle` never allocates, blocks or logs. Logging (with the `tracing`
//! feature) happens only in `init` and `param_change`.

use dualosc_core::{ParameterInfo, Xorshift32};
use dualosc_synth::{OscFrequencies, ParamIndex, PhaseStep, Pitch, VoiceState};

use crate::q31::{f32_to_q31, q31_to_f32};

/// Host sample rate in Hz.
pub const SAMPLE_RATE: f32 = 48000.0;

/// Per-buffer values the host passes to `cycle` and the note callbacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserOscParams {
    /// Shape LFO value in Q31, spanning -1.0 to 1.0.
    pub shape_lfo: i32,
    /// Packed pitch: note number in the high byte, upward modifier in the
    /// low byte.
    pub pitch: u16,
}

impl UserOscParams {
    /// Params for a pitch and a float LFO value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dualosc_platform::UserOscParams;
    /// use dualosc_synth::Pitch;
    ///
    /// let params = UserOscParams::new(Pitch::from_note(69), 0.0);
    /// assert_eq!(params.pitch, 69 << 8);
    /// assert_eq!(params.shape_lfo, 0);
    /// ```
    pub fn new(pitch: Pitch, lfo: f32) -> Self {
        Self {
            shape_lfo: f32_to_q31(lfo),
            pitch: pitch.packed(),
        }
    }

    /// Unpacked pitch.
    #[inline]
    pub const fn pitch(&self) -> Pitch {
        Pitch::from_packed(self.pitch)
    }

    /// Shape LFO as a float.
    #[inline]
    pub fn lfo(&self) -> f32 {
        q31_to_f32(self.shape_lfo)
    }
}

/// Callback interface a host uses to run a user oscillator.
///
/// Calls are single-threaded and non-reentrant: the host holds `&mut self`
/// for each callback, and parameter changes land between `cycle` calls.
pub trait UserOscillator {
    /// Reset all state. `platform` and `api_version` identify the host and
    /// are informational.
    fn init(&mut self, platform: u32, api_version: u32);

    /// Fill every frame of `output` with Q31 samples.
    fn cycle(&mut self, params: &UserOscParams, output: &mut [i32]);

    /// Note start. No action by default.
    fn note_on(&mut self, _params: &UserOscParams) {}

    /// Note end. No action by default.
    fn note_off(&mut self, _params: &UserOscParams) {}

    /// Apply a raw parameter value to slot `index`.
    fn param_change(&mut self, index: u16, value: u16);
}

/// The dual oscillator as a host-loadable user oscillator.
///
/// Owns the voice plus the random source used to seed starting phases, so
/// repeated `init` calls start from different phases.
///
/// # Example
///
/// ```rust
/// use dualosc_platform::{DualOsc, UserOscParams, UserOscillator};
/// use dualosc_synth::Pitch;
///
/// let mut osc = DualOsc::new(0xC0FFEE);
/// osc.init(0, 0);
/// osc.param_change(0, 0); // osc1 saw
/// osc.param_change(4, 1); // sync on
///
/// let params = UserOscParams::new(Pitch::from_note(45), 0.25);
/// let mut block = [0i32; 64];
/// osc.cycle(&params, &mut block);
/// ```
#[derive(Debug, Clone)]
pub struct DualOsc {
    voice: VoiceState,
    rng: Xorshift32,
}

impl DualOsc {
    /// Create an oscillator whose phase randomization starts from `seed`.
    pub fn new(seed: u32) -> Self {
        let mut rng = Xorshift32::new(seed);
        let voice = VoiceState::new(&mut rng);
        Self { voice, rng }
    }

    /// The underlying voice.
    pub fn voice(&self) -> &VoiceState {
        &self.voice
    }

    /// Mutable access to the underlying voice.
    pub fn voice_mut(&mut self) -> &mut VoiceState {
        &mut self.voice
    }
}

impl Default for DualOsc {
    fn default() -> Self {
        // Zero selects the generator's default seed.
        Self::new(0)
    }
}

impl UserOscillator for DualOsc {
    fn init(&mut self, platform: u32, api_version: u32) {
        self.voice.init(&mut self.rng);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            platform,
            api_version,
            osc1_phase = self.voice.osc1_phase(),
            osc2_phase = self.voice.osc2_phase(),
            "dualosc init"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = (platform, api_version);
    }

    fn cycle(&mut self, params: &UserOscParams, output: &mut [i32]) {
        let freqs = OscFrequencies::resolve(params.pitch(), self.voice.detune(), params.lfo());
        let step = PhaseStep::new(freqs, SAMPLE_RATE);
        for y in output.iter_mut() {
            *y = f32_to_q31(self.voice.tick(step));
        }
    }

    fn param_change(&mut self, index: u16, value: u16) {
        let index = usize::from(index);
        if ParamIndex::from_index(index).is_none() {
            #[cfg(feature = "tracing")]
            tracing::trace!(index, value, "param_change: ignored index");
            return;
        }
        self.voice.set_param(index, value);
        #[cfg(feature = "tracing")]
        tracing::debug!(index, value, "param_change");
    }
}
