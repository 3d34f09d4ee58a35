//! Xorshift pseudo-random source.
//!
//! Feeds the noise waveform and the phase randomization performed when a
//! voice is initialized. Not cryptographic; it only has to be fast, tiny and
//! allocation-free.

/// Default seed used when none (or zero) is supplied.
const DEFAULT_SEED: u32 = 0x1234_5678;

/// 32-bit xorshift generator (Marsaglia 13/17/5 triple).
///
/// # Example
///
/// ```rust
/// use dualosc_core::Xorshift32;
///
/// let mut rng = Xorshift32::new(42);
/// let phase = rng.next_unipolar();
/// assert!((0.0..1.0).contains(&phase));
///
/// let sample = rng.next_bipolar();
/// assert!((-1.0..=1.0).contains(&sample));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift32 {
    state: u32,
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Xorshift32 {
    /// Create a generator from a seed. A zero seed is replaced by the default,
    /// since xorshift never leaves the all-zero state.
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    /// Next raw 32-bit value.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Next value in `[0.0, 1.0)`.
    ///
    /// Only the top 24 bits are used so the result is exactly representable
    /// and never rounds up to `1.0`.
    #[inline]
    pub fn next_unipolar(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Next value in `[-1.0, 1.0]`.
    #[inline]
    pub fn next_bipolar(&mut self) -> f32 {
        (self.next_u32() as i32 as f32) / (i32::MAX as f32)
    }
}
