//! Per-sample synthesis loop and phase integrator.
//!
//! Each sample:
//!
//! 1. Evaluate both oscillators at their current phases.
//! 2. Mix: `(1 - balance) * osc1 + balance * osc2`.
//! 3. Emit the mixed sample.
//! 4. Advance both phases by `frequency / sample_rate`.
//! 5. Wrap:
//!    - if oscillator 1 crossed 1.0, drop its integer part, and with sync
//!      enabled copy its new phase into oscillator 2;
//!    - otherwise drop oscillator 2's integer part.
//!
//! Oscillator 2 is never wrapped on its own in a sample where oscillator 1
//! wrapped. With sync disabled it may therefore sit at or above 1.0 for one
//! sample before the next step brings it back.
//!
//! The loop never allocates, blocks or fails, and works entirely in
//! normalized `f32` samples. Fixed-point conversion is left to the host
//! boundary.

use dualosc_core::{phase_increment, wrap_phase};

use crate::pitch::OscFrequencies;
use crate::voice::VoiceState;

/// Per-sample phase increments of both oscillators, constant for a cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhaseStep {
    /// Oscillator 1 increment (phase ratio per sample).
    pub osc1: f32,
    /// Oscillator 2 increment (phase ratio per sample).
    pub osc2: f32,
}

impl PhaseStep {
    /// Increments for both oscillators at a sample rate.
    pub fn new(frequencies: OscFrequencies, sample_rate: f32) -> Self {
        Self {
            osc1: phase_increment(frequencies.osc1, sample_rate),
            osc2: phase_increment(frequencies.osc2, sample_rate),
        }
    }
}

impl VoiceState {
    /// Generate one mixed sample and advance both phases.
    #[inline]
    pub fn tick(&mut self, step: PhaseStep) -> f32 {
        let osc1 = self.osc1_wf.generate(self.osc1_phase, &mut self.noise);
        let osc2 = self.osc2_wf.generate(self.osc2_phase, &mut self.noise);

        let sample = (1.0 - self.balance) * osc1 + self.balance * osc2;

        self.osc1_phase += step.osc1;
        self.osc2_phase += step.osc2;

        if self.osc1_phase >= 1.0 {
            self.osc1_phase = wrap_phase(self.osc1_phase);
            if self.sync.is_enabled() {
                self.osc2_phase = self.osc1_phase;
            }
        } else {
            self.osc2_phase = wrap_phase(self.osc2_phase);
        }

        sample
    }

    /// Fill `out` with consecutive samples at fixed oscillator frequencies.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dualosc_synth::{OscFrequencies, Pitch, VoiceState};
    ///
    /// let mut voice = VoiceState::default();
    /// let freqs = OscFrequencies::resolve(Pitch::from_note(60), voice.detune(), 0.0);
    ///
    /// let mut buffer = [0.0f32; 64];
    /// voice.render(freqs, 48000.0, &mut buffer);
    /// assert!(buffer.iter().all(|s| (-1.0..=1.0).contains(s)));
    /// ```
    pub fn render(&mut self, frequencies: OscFrequencies, sample_rate: f32, out: &mut [f32]) {
        let step = PhaseStep::new(frequencies, sample_rate);
        for y in out.iter_mut() {
            *y = self.tick(step);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SyncMode;
    use dualosc_core::{Waveform, saw, square, triangle, wrap_phase};

    fn voice(osc1: f32, osc2: f32, sync: SyncMode) -> VoiceState {
        let mut v = VoiceState::default();
        v.set_phases(osc1, osc2);
        v.set_sync(sync);
        v
    }

    #[test]
    fn phases_advance_by_step() {
        let mut v = voice(0.1, 0.2, SyncMode::Disabled);
        v.tick(PhaseStep { osc1: 0.05, osc2: 0.1 });
        assert!((v.osc1_phase() - 0.15).abs() < 1e-6);
        assert!((v.osc2_phase() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn osc1_wrap_with_sync_copies_phase() {
        let mut v = voice(0.95, 0.4, SyncMode::Enabled);
        v.tick(PhaseStep { osc1: 0.1, osc2: 0.3 });
        assert!((v.osc1_phase() - 0.05).abs() < 1e-6);
        assert_eq!(v.osc2_phase(), v.osc1_phase());
    }

    #[test]
    fn osc1_wrap_without_sync_leaves_osc2_unwrapped() {
        let mut v = voice(0.95, 0.8, SyncMode::Disabled);
        v.tick(PhaseStep { osc1: 0.1, osc2: 0.3 });
        assert!((v.osc1_phase() - 0.05).abs() < 1e-6);
        // osc2 crossed 1.0 in the same sample and is left for the next step.
        assert!((v.osc2_phase() - 1.1).abs() < 1e-6);

        v.tick(PhaseStep { osc1: 0.1, osc2: 0.3 });
        assert!((v.osc2_phase() - 0.4).abs() < 1e-5);
    }

    #[test]
    fn unwrapped_osc2_is_evaluated_at_wrapped_phase() {
        let step = PhaseStep { osc1: 0.1, osc2: 0.3 };

        let mut v = voice(0.95, 0.8, SyncMode::Disabled);
        v.set_osc2_waveform(Waveform::Square);
        v.set_balance(1.0);
        assert_eq!(v.tick(step), -1.0);
        let held = v.osc2_phase();
        assert!(held >= 1.0);
        // Square at 1.1 reads as 0.1, the first half of the cycle.
        assert_eq!(v.tick(step), square(wrap_phase(held)));
        assert_eq!(square(wrap_phase(held)), 1.0);

        let mut v = voice(0.95, 0.8, SyncMode::Disabled);
        v.set_osc2_waveform(Waveform::Saw);
        v.set_balance(1.0);
        v.tick(step);
        let held = v.osc2_phase();
        assert_eq!(v.tick(step), saw(wrap_phase(held)));
    }

    #[test]
    fn saw_stays_in_range_at_high_increments() {
        let mut v = voice(0.0, 0.0, SyncMode::Disabled);
        v.set_osc1_waveform(Waveform::Saw);
        v.set_osc2_waveform(Waveform::Saw);
        v.set_balance(1.0);
        let step = PhaseStep { osc1: 0.49, osc2: 0.98 };
        for _ in 0..64 {
            let s = v.tick(step);
            assert!((-1.0..=1.0).contains(&s), "saw sample {s}");
        }
    }

    #[test]
    fn osc2_wraps_on_its_own_when_osc1_does_not() {
        let mut v = voice(0.1, 0.9, SyncMode::Enabled);
        v.tick(PhaseStep { osc1: 0.1, osc2: 0.2 });
        assert!((v.osc1_phase() - 0.2).abs() < 1e-6);
        assert!((v.osc2_phase() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn multiple_cycles_in_one_step_wrap_once() {
        let mut v = voice(0.0, 0.5, SyncMode::Disabled);
        v.tick(PhaseStep { osc1: 0.25, osc2: 2.75 });
        assert!((v.osc2_phase() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn balance_zero_is_osc1_alone() {
        let mut v = voice(0.0, 0.3, SyncMode::Disabled);
        v.set_osc1_waveform(Waveform::Saw);
        v.set_osc2_waveform(Waveform::Triangle);
        v.set_balance(0.0);
        let step = PhaseStep { osc1: 0.01, osc2: 0.013 };

        let mut phase = 0.0f32;
        for _ in 0..500 {
            let expected = saw(phase);
            assert_eq!(v.tick(step), expected);
            phase = v.osc1_phase();
        }
    }

    #[test]
    fn balance_one_is_osc2_alone() {
        let mut v = voice(0.2, 0.0, SyncMode::Disabled);
        v.set_osc1_waveform(Waveform::Noise);
        v.set_osc2_waveform(Waveform::Triangle);
        v.set_balance(1.0);
        let step = PhaseStep { osc1: 0.017, osc2: 0.01 };

        let mut phase = 0.0f32;
        for _ in 0..500 {
            let expected = triangle(phase);
            assert_eq!(v.tick(step), expected);
            phase = v.osc2_phase();
        }
    }

    #[test]
    fn equal_balance_averages() {
        let mut v = voice(0.0, 0.5, SyncMode::Disabled);
        v.set_osc1_waveform(Waveform::Square);
        v.set_osc2_waveform(Waveform::Square);
        v.set_balance(0.5);
        // +1 and -1 cancel.
        assert_eq!(v.tick(PhaseStep { osc1: 0.0, osc2: 0.0 }), 0.0);
    }

    #[test]
    fn unknown_waveform_contributes_silence() {
        let mut v = voice(0.25, 0.25, SyncMode::Disabled);
        v.set_osc1_waveform(Waveform::Unknown(9));
        v.set_osc2_waveform(Waveform::Unknown(200));
        let mut out = [1.0f32; 16];
        v.render(
            OscFrequencies { osc1: 440.0, osc2: 660.0 },
            48000.0,
            &mut out,
        );
        assert!(out.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn render_fills_every_frame() {
        let mut v = VoiceState::default();
        let mut out = [f32::NAN; 37];
        v.render(
            OscFrequencies { osc1: 1000.0, osc2: 1500.0 },
            48000.0,
            &mut out,
        );
        assert!(out.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn render_is_deterministic() {
        let mut a = VoiceState::default();
        let mut b = a.clone();
        a.set_osc1_waveform(Waveform::Noise);
        b.set_osc1_waveform(Waveform::Noise);
        let f = OscFrequencies { osc1: 220.0, osc2: 330.0 };
        let mut out_a = [0.0f32; 128];
        let mut out_b = [0.0f32; 128];
        a.render(f, 48000.0, &mut out_a);
        b.render(f, 48000.0, &mut out_b);
        assert_eq!(out_a, out_b);
    }
}
