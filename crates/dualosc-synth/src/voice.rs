//! Voice state for the dual oscillator.
//!
//! [`VoiceState`] is the complete mutable record of one voice: waveform
//! selections, sync mode, both phase accumulators, balance, detune and the
//! noise generator. It is an ordinary owned value; hosts that run several
//! voices simply hold several instances.
//!
//! # Lifecycle
//!
//! - [`VoiceState::new`] / [`VoiceState::init`] reset every parameter to its
//!   default and draw two independent random starting phases.
//! - [`ParameterInfo::set_param`] edits one field at a time.
//! - [`VoiceState::render`] (see the engine module) advances the phases
//!   every sample.

use dualosc_core::{ParamDescriptor, ParameterInfo, Waveform, Xorshift32};

use crate::params::{PARAM_COUNT, ParamIndex, SyncMode, balance_from_raw, detune_from_raw};

/// Initial waveform for both oscillators.
pub const INIT_WAVEFORM: Waveform = Waveform::Square;
/// Initial sync mode.
pub const INIT_SYNC: SyncMode = SyncMode::Disabled;
/// Initial oscillator balance (equal mix).
pub const INIT_BALANCE: f32 = 0.5;
/// Initial detune (half of the upward range).
pub const INIT_DETUNE: f32 = 0.5;

/// Mutable parameter and phase record of one dual oscillator voice.
///
/// # Example
///
/// ```rust
/// use dualosc_core::{ParameterInfo, Waveform, Xorshift32};
/// use dualosc_synth::{ParamIndex, SyncMode, VoiceState};
///
/// let mut rng = Xorshift32::new(1);
/// let mut voice = VoiceState::new(&mut rng);
/// assert_eq!(voice.osc1_waveform(), Waveform::Square);
///
/// voice.set_param(ParamIndex::Waveform2.index(), 0); // saw
/// voice.set_param(ParamIndex::Sync.index(), 1);
/// assert_eq!(voice.osc2_waveform(), Waveform::Saw);
/// assert_eq!(voice.sync(), SyncMode::Enabled);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceState {
    /// Oscillator 1 waveform
    pub(crate) osc1_wf: Waveform,
    /// Oscillator 2 waveform
    pub(crate) osc2_wf: Waveform,
    /// Hard sync of oscillator 2 to oscillator 1
    pub(crate) sync: SyncMode,
    /// Oscillator 1 phase ratio [0.0, 1.0)
    pub(crate) osc1_phase: f32,
    /// Oscillator 2 phase ratio [0.0, 1.0)
    pub(crate) osc2_phase: f32,
    /// Crossfade weight: 0 = osc1 only, 1 = osc2 only
    pub(crate) balance: f32,
    /// Oscillator 2 detune, -1.0 to 1.0
    pub(crate) detune: f32,
    /// Shared white-noise source for both oscillators
    pub(crate) noise: Xorshift32,
}

impl Default for VoiceState {
    fn default() -> Self {
        Self::new(&mut Xorshift32::default())
    }
}

impl VoiceState {
    /// Create an initialized voice, drawing its starting phases (and the
    /// noise seed) from `rng`.
    pub fn new(rng: &mut Xorshift32) -> Self {
        let osc1_phase = rng.next_unipolar();
        let osc2_phase = rng.next_unipolar();
        Self {
            osc1_wf: INIT_WAVEFORM,
            osc2_wf: INIT_WAVEFORM,
            sync: INIT_SYNC,
            osc1_phase,
            osc2_phase,
            balance: INIT_BALANCE,
            detune: INIT_DETUNE,
            noise: Xorshift32::new(rng.next_u32()),
        }
    }

    /// Reset every field to its default and re-randomize both phases.
    ///
    /// Successive calls with the same `rng` give different phase pairs.
    pub fn init(&mut self, rng: &mut Xorshift32) {
        *self = Self::new(rng);
    }

    /// Oscillator 1 waveform.
    pub fn osc1_waveform(&self) -> Waveform {
        self.osc1_wf
    }

    /// Oscillator 2 waveform.
    pub fn osc2_waveform(&self) -> Waveform {
        self.osc2_wf
    }

    /// Hard sync mode.
    pub fn sync(&self) -> SyncMode {
        self.sync
    }

    /// Oscillator 1 phase ratio.
    pub fn osc1_phase(&self) -> f32 {
        self.osc1_phase
    }

    /// Oscillator 2 phase ratio.
    pub fn osc2_phase(&self) -> f32 {
        self.osc2_phase
    }

    /// Crossfade weight between the oscillators.
    pub fn balance(&self) -> f32 {
        self.balance
    }

    /// Detune amount.
    pub fn detune(&self) -> f32 {
        self.detune
    }

    /// Set oscillator 1 waveform.
    pub fn set_osc1_waveform(&mut self, waveform: Waveform) {
        self.osc1_wf = waveform;
    }

    /// Set oscillator 2 waveform.
    pub fn set_osc2_waveform(&mut self, waveform: Waveform) {
        self.osc2_wf = waveform;
    }

    /// Set hard sync mode.
    pub fn set_sync(&mut self, sync: SyncMode) {
        self.sync = sync;
    }

    /// Set crossfade weight. Not clamped.
    pub fn set_balance(&mut self, balance: f32) {
        self.balance = balance;
    }

    /// Set detune amount. Not clamped.
    pub fn set_detune(&mut self, detune: f32) {
        self.detune = detune;
    }

    /// Place both phase accumulators directly.
    pub fn set_phases(&mut self, osc1: f32, osc2: f32) {
        self.osc1_phase = osc1;
        self.osc2_phase = osc2;
    }

    /// Apply one host parameter change.
    ///
    /// Waveform and sync values pass through an 8-bit truncating cast;
    /// balance and detune are scaled without clamping. Reserved and unknown
    /// slots leave the voice untouched.
    pub fn apply_param(&mut self, index: ParamIndex, value: u16) {
        match index {
            ParamIndex::Waveform1 => self.osc1_wf = Waveform::from(value as u8),
            ParamIndex::Waveform2 => self.osc2_wf = Waveform::from(value as u8),
            ParamIndex::Balance => self.balance = balance_from_raw(value),
            ParamIndex::Detune => self.detune = detune_from_raw(value),
            ParamIndex::Sync => self.sync = SyncMode::from(value as u8),
            ParamIndex::Param6 | ParamIndex::Shape | ParamIndex::ShiftShape => {}
        }
    }
}

impl ParameterInfo for VoiceState {
    fn param_count(&self) -> usize {
        PARAM_COUNT
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        ParamIndex::from_index(index).map(ParamIndex::descriptor)
    }

    fn set_param(&mut self, index: usize, value: u16) {
        if let Some(slot) = ParamIndex::from_index(index) {
            self.apply_param(slot, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults_match(v: &VoiceState) -> bool {
        v.osc1_wf == Waveform::Square
            && v.osc2_wf == Waveform::Square
            && v.sync == SyncMode::Disabled
            && v.balance == 0.5
            && v.detune == 0.5
    }

    #[test]
    fn new_voice_has_defaults_and_random_phases() {
        let mut rng = Xorshift32::new(3);
        let v = VoiceState::new(&mut rng);
        assert!(defaults_match(&v));
        assert!((0.0..1.0).contains(&v.osc1_phase));
        assert!((0.0..1.0).contains(&v.osc2_phase));
        assert_ne!(v.osc1_phase, v.osc2_phase, "phases drawn independently");
    }

    #[test]
    fn init_twice_changes_phases_not_defaults() {
        let mut rng = Xorshift32::new(11);
        let mut v = VoiceState::new(&mut rng);
        v.set_param(ParamIndex::Balance.index(), 10);
        v.set_param(ParamIndex::Sync.index(), 1);

        v.init(&mut rng);
        let first = (v.osc1_phase, v.osc2_phase);
        assert!(defaults_match(&v));

        v.init(&mut rng);
        let second = (v.osc1_phase, v.osc2_phase);
        assert!(defaults_match(&v));
        assert_ne!(first, second);
    }

    #[test]
    fn waveform_params_truncate_to_byte() {
        let mut v = VoiceState::default();
        v.set_param(0, 2);
        assert_eq!(v.osc1_waveform(), Waveform::Triangle);
        v.set_param(1, 3);
        assert_eq!(v.osc2_waveform(), Waveform::Sine);
        // 256 truncates to 0.
        v.set_param(0, 256);
        assert_eq!(v.osc1_waveform(), Waveform::Saw);
        v.set_param(1, 7);
        assert_eq!(v.osc2_waveform(), Waveform::Unknown(7));
    }

    #[test]
    fn balance_and_detune_params_scale() {
        let mut v = VoiceState::default();
        v.set_param(2, 0);
        assert_eq!(v.balance(), 0.0);
        v.set_param(2, 100);
        assert_eq!(v.balance(), 1.0);
        v.set_param(2, 200);
        assert_eq!(v.balance(), 2.0);

        v.set_param(3, 0);
        assert_eq!(v.detune(), -1.0);
        v.set_param(3, 100);
        assert_eq!(v.detune(), 0.0);
        v.set_param(3, 200);
        assert_eq!(v.detune(), 1.0);
    }

    #[test]
    fn sync_param_uses_low_byte() {
        let mut v = VoiceState::default();
        v.set_param(4, 1);
        assert_eq!(v.sync(), SyncMode::Enabled);
        v.set_param(4, 0);
        assert_eq!(v.sync(), SyncMode::Disabled);
        v.set_param(4, 257);
        assert_eq!(v.sync(), SyncMode::Enabled);
    }

    #[test]
    fn reserved_and_unknown_params_are_noops() {
        let mut v = VoiceState::default();
        let before = v.clone();
        for index in [5, 6, 7, 8, 100] {
            v.set_param(index, 1023);
        }
        assert_eq!(v, before);
    }

    #[test]
    fn each_param_touches_one_field() {
        let base = VoiceState::default();

        let mut v = base.clone();
        v.set_param(2, 30);
        assert_eq!(
            VoiceState {
                balance: base.balance,
                ..v.clone()
            },
            base
        );

        let mut v = base.clone();
        v.set_param(3, 20);
        assert_eq!(VoiceState { detune: base.detune, ..v }, base);
    }

    #[test]
    fn parameter_info_lists_all_slots() {
        let v = VoiceState::default();
        assert_eq!(v.param_count(), 8);
        assert_eq!(v.param_info(2).map(|d| d.string_id), Some("balance"));
        assert!(v.param_info(8).is_none());
        assert_eq!(v.find_param_by_name("detune"), Some(3));
        assert_eq!(v.find_param_by_name("Wave 2"), Some(1));
    }
}
