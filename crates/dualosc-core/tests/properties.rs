//! Property-based tests for dualosc-core primitives.
//!
//! Covers generator output ranges, triangle continuity and phase wrapping
//! using proptest for randomized input generation.

use dualosc_core::{Waveform, Xorshift32, bipolar_to_unipolar, triangle, wrap_phase};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Every recognized waveform stays within [-1, 1] for any phase in [0, 1).
    #[test]
    fn generators_bounded(phase in 0.0f32..1.0f32, raw in 0u8..5, seed in any::<u32>()) {
        let mut noise = Xorshift32::new(seed);
        let s = Waveform::from(raw).generate(phase, &mut noise);
        prop_assert!((-1.0..=1.0).contains(&s), "{:?} at {} gave {}", Waveform::from(raw), phase, s);
    }

    /// Triangle has slope magnitude 4 everywhere, so nearby phases give nearby
    /// samples: no jumps anywhere in the cycle, including the quartile joins.
    #[test]
    fn triangle_lipschitz(phase in 0.0f32..0.999f32, delta in 0.0f32..0.001f32) {
        let a = triangle(phase);
        let b = triangle(phase + delta);
        prop_assert!((a - b).abs() <= 4.0 * delta + 1e-5,
            "jump between {} and {}: {} vs {}", phase, phase + delta, a, b);
    }

    /// Wrapping any non-negative phase lands in [0, 1) and preserves the
    /// fractional part.
    #[test]
    fn wrap_phase_in_range(phase in 0.0f32..64.0f32) {
        let w = wrap_phase(phase);
        prop_assert!((0.0..1.0).contains(&w), "wrap_phase({}) = {}", phase, w);
        prop_assert!((w - phase.fract()).abs() < 1e-5);
    }

    /// Unipolar conversion maps [-1, 1] onto [0, 1].
    #[test]
    fn unipolar_range(x in -1.0f32..=1.0f32) {
        let u = bipolar_to_unipolar(x);
        prop_assert!((0.0..=1.0).contains(&u));
    }

    /// Random phases drawn for voice init are always in [0, 1).
    #[test]
    fn random_phase_in_range(seed in any::<u32>()) {
        let mut rng = Xorshift32::new(seed);
        for _ in 0..32 {
            let p = rng.next_unipolar();
            prop_assert!((0.0..1.0).contains(&p));
        }
    }
}
