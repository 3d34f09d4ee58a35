//! Phase-ratio waveform generators.
//!
//! Each generator maps a phase ratio `p` in `[0.0, 1.0)` to a sample in
//! `[-1.0, 1.0]`. They are naive (non band-limited) shapes, matching the
//! lightweight oscillators of small hardware synth platforms.
//!
//! [`saw`], [`square`] and [`sine`] drop the integer part of the phase
//! first, so a ratio that has run past `1.0` reads as its wrapped position.
//! [`triangle`] takes the phase as given.
//!
//! | Waveform | Raw | Shape over one cycle |
//! |----------|-----|----------------------|
//! | Saw      | 0   | 0 → +1, jump to -1, → 0 |
//! | Square   | 1   | +1 for the first half, -1 for the second |
//! | Triangle | 2   | 0 → +1 → 0 → -1 → 0, linear quartiles |
//! | Sine     | 3   | `sin(2πp)` |
//! | Noise    | 4   | white noise, independent of phase |

use core::f32::consts::PI;
use libm::sinf;

use crate::math::wrap_phase;
use crate::random::Xorshift32;

/// Phase at the end of the first triangle segment.
pub const QUARTER_PHASE: f32 = 0.25;
/// Phase at the end of the second triangle segment.
pub const HALF_PHASE: f32 = 0.5;
/// Phase at the end of the third triangle segment.
pub const THREE_QUARTER_PHASE: f32 = 0.75;

/// Oscillator waveform selection.
///
/// Built from the raw byte a host stores for a waveform parameter. Bytes
/// outside `0..=4` are kept as [`Waveform::Unknown`] and generate silence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Waveform {
    /// Sawtooth - all harmonics, bright.
    Saw,
    /// Square (50% duty) - odd harmonics, hollow.
    #[default]
    Square,
    /// Triangle - weak odd harmonics, mellow.
    Triangle,
    /// Sine - fundamental only.
    Sine,
    /// White noise.
    Noise,
    /// Unrecognized selection; outputs 0.0.
    Unknown(u8),
}

impl From<u8> for Waveform {
    fn from(raw: u8) -> Self {
        match raw {
            0 => Waveform::Saw,
            1 => Waveform::Square,
            2 => Waveform::Triangle,
            3 => Waveform::Sine,
            4 => Waveform::Noise,
            other => Waveform::Unknown(other),
        }
    }
}

impl Waveform {
    /// All recognized waveforms in raw-value order.
    pub const ALL: [Waveform; 5] = [
        Waveform::Saw,
        Waveform::Square,
        Waveform::Triangle,
        Waveform::Sine,
        Waveform::Noise,
    ];

    /// Raw byte value of this selection.
    pub const fn raw(self) -> u8 {
        match self {
            Waveform::Saw => 0,
            Waveform::Square => 1,
            Waveform::Triangle => 2,
            Waveform::Sine => 3,
            Waveform::Noise => 4,
            Waveform::Unknown(raw) => raw,
        }
    }

    /// Lowercase display name.
    pub const fn name(self) -> &'static str {
        match self {
            Waveform::Saw => "saw",
            Waveform::Square => "square",
            Waveform::Triangle => "triangle",
            Waveform::Sine => "sine",
            Waveform::Noise => "noise",
            Waveform::Unknown(_) => "unknown",
        }
    }

    /// Generate one sample at `phase`.
    ///
    /// Saw, square and sine accept phases at or above `1.0` and evaluate them
    /// at `phase - trunc(phase)`; a phase in `[1.0, 2.0)` left unwrapped by
    /// the sample loop reads as the start of the next cycle. Triangle is
    /// evaluated unwrapped and stays within `[-1.0, 1.0]` up to a phase of
    /// `1.25`.
    ///
    /// `noise` is only advanced for [`Waveform::Noise`].
    #[inline]
    pub fn generate(self, phase: f32, noise: &mut Xorshift32) -> f32 {
        match self {
            Waveform::Saw => saw(phase),
            Waveform::Square => square(phase),
            Waveform::Triangle => triangle(phase),
            Waveform::Sine => sine(phase),
            Waveform::Noise => noise.next_bipolar(),
            Waveform::Unknown(_) => 0.0,
        }
    }
}

/// Sawtooth: zero at phase 0, rising to +1 at the half cycle, then jumping
/// to -1 and rising back to zero.
#[inline]
pub fn saw(phase: f32) -> f32 {
    let phase = wrap_phase(phase);
    if phase < HALF_PHASE {
        2.0 * phase
    } else {
        2.0 * phase - 2.0
    }
}

/// Square: +1 for the first half cycle, -1 for the second.
#[inline]
pub fn square(phase: f32) -> f32 {
    if wrap_phase(phase) < HALF_PHASE { 1.0 } else { -1.0 }
}

/// Sine of `2π * phase`.
#[inline]
pub fn sine(phase: f32) -> f32 {
    sinf(wrap_phase(phase) * 2.0 * PI)
}

/// Triangle built from four linear quartile segments.
///
/// Boundaries compare with `<=`, so a phase sitting exactly on a quartile
/// belongs to the segment that ends there.
///
/// ```text
///  +1 |    /\
///   0 |---/--\----------
///     |  /    \      /
///  -1 |         \  /
///      0  .25  .5  .75  1
/// ```
#[inline]
pub fn triangle(phase: f32) -> f32 {
    if phase <= QUARTER_PHASE {
        phase / QUARTER_PHASE
    } else if phase <= HALF_PHASE {
        1.0 - (phase - QUARTER_PHASE) / QUARTER_PHASE
    } else if phase <= THREE_QUARTER_PHASE {
        -(phase - HALF_PHASE) / QUARTER_PHASE
    } else {
        -1.0 + (phase - THREE_QUARTER_PHASE) / QUARTER_PHASE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn triangle_key_points() {
        assert_eq!(triangle(0.0), 0.0);
        assert_eq!(triangle(0.25), 1.0);
        assert_eq!(triangle(0.5), 0.0);
        assert_eq!(triangle(0.75), -1.0);
        assert!((triangle(0.125) - 0.5).abs() < EPS);
        assert!((triangle(0.875) + 0.5).abs() < EPS);
    }

    #[test]
    fn triangle_continuous_at_quartiles() {
        for &b in &[QUARTER_PHASE, HALF_PHASE, THREE_QUARTER_PHASE] {
            let left = triangle(b - 1e-4);
            let right = triangle(b + 1e-4);
            assert!(
                (left - right).abs() < 1e-3,
                "discontinuity at {b}: {left} vs {right}"
            );
        }
    }

    #[test]
    fn triangle_approaches_zero_at_cycle_end() {
        assert!(triangle(0.9999).abs() < 1e-3);
    }

    #[test]
    fn saw_shape() {
        assert_eq!(saw(0.0), 0.0);
        assert!((saw(0.25) - 0.5).abs() < EPS);
        assert!((saw(0.4999) - 0.9998).abs() < 1e-4);
        assert_eq!(saw(0.5), -1.0);
        assert!((saw(0.75) + 0.5).abs() < EPS);
    }

    #[test]
    fn square_shape() {
        assert_eq!(square(0.0), 1.0);
        assert_eq!(square(0.4999), 1.0);
        assert_eq!(square(0.5), -1.0);
        assert_eq!(square(0.99), -1.0);
    }

    #[test]
    fn sine_shape() {
        assert!(sine(0.0).abs() < EPS);
        assert!((sine(0.25) - 1.0).abs() < EPS);
        assert!(sine(0.5).abs() < 1e-5);
        assert!((sine(0.75) + 1.0).abs() < EPS);
    }

    #[test]
    fn phase_past_one_wraps_for_saw_square_sine() {
        assert_eq!(square(1.1), 1.0);
        assert_eq!(square(1.6), -1.0);
        assert!((saw(1.25) - saw(0.25)).abs() < EPS);
        assert!((saw(1.9) - saw(0.9)).abs() < 1e-5);
        assert!((sine(1.25) - 1.0).abs() < 1e-5);
        assert!((sine(2.75) + 1.0).abs() < 1e-5);
    }

    #[test]
    fn triangle_is_not_wrapped() {
        // Continues the last segment past the cycle end.
        assert!((triangle(1.1) - 0.4).abs() < 1e-5);
        assert_eq!(triangle(1.25), 1.0);
    }

    #[test]
    fn saw_bounded_between_one_and_two() {
        for i in 0..1000 {
            let p = 1.0 + i as f32 / 1000.0;
            let s = saw(p);
            assert!((-1.0..=1.0).contains(&s), "saw({p}) = {s}");
        }
    }

    #[test]
    fn generators_stay_in_range() {
        let mut noise = Xorshift32::default();
        for wf in Waveform::ALL {
            for i in 0..1000 {
                let p = i as f32 / 1000.0;
                let s = wf.generate(p, &mut noise);
                assert!((-1.0..=1.0).contains(&s), "{wf:?} at {p} gave {s}");
            }
        }
    }

    #[test]
    fn raw_round_trip_and_unknown() {
        for wf in Waveform::ALL {
            assert_eq!(Waveform::from(wf.raw()), wf);
        }
        assert_eq!(Waveform::from(5), Waveform::Unknown(5));
        assert_eq!(Waveform::from(255).raw(), 255);
    }

    #[test]
    fn unknown_is_silent() {
        let mut noise = Xorshift32::default();
        let before = noise.clone();
        assert_eq!(Waveform::Unknown(9).generate(0.3, &mut noise), 0.0);
        assert_eq!(noise, before, "unknown waveform must not consume noise");
    }

    #[test]
    fn noise_ignores_phase() {
        let mut a = Xorshift32::new(99);
        let mut b = Xorshift32::new(99);
        assert_eq!(
            Waveform::Noise.generate(0.1, &mut a),
            Waveform::Noise.generate(0.9, &mut b)
        );
    }

    #[test]
    fn default_is_square() {
        assert_eq!(Waveform::default(), Waveform::Square);
    }
}
