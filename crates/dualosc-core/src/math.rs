//! Phase and modulation math shared by the oscillator engine.
//!
//! # Phase Ratios
//!
//! Oscillator position is kept as a ratio in `[0.0, 1.0)`, where `1.0` is one
//! full waveform cycle. Advancing by `frequency / sample_rate` per sample and
//! dropping the integer part keeps the ratio in range.
//!
//! # Bipolar and Unipolar Signals
//!
//! ```text
//! bipolar   unipolar
//! -1.0      0.0
//!  0.0      0.5
//! +1.0      1.0
//! ```

/// Drop the integer part of a phase ratio.
///
/// Uses truncation semantics, so a ratio that crossed several whole cycles in
/// one step lands back in `[0.0, 1.0)` in a single subtraction. Ratios below
/// zero are returned unchanged.
///
/// # Example
/// ```rust
/// use dualosc_core::wrap_phase;
///
/// assert_eq!(wrap_phase(1.25), 0.25);
/// assert_eq!(wrap_phase(3.5), 0.5);
/// assert_eq!(wrap_phase(0.75), 0.75);
/// ```
#[inline]
pub fn wrap_phase(phase: f32) -> f32 {
    phase - (phase as u32) as f32
}

/// Phase ratio advanced per sample for a frequency in Hz.
#[inline]
pub fn phase_increment(frequency_hz: f32, sample_rate: f32) -> f32 {
    frequency_hz / sample_rate
}

/// Convert a bipolar signal (-1.0 to +1.0) to unipolar (0.0 to 1.0).
///
/// # Example
/// ```rust
/// use dualosc_core::bipolar_to_unipolar;
///
/// assert_eq!(bipolar_to_unipolar(-1.0), 0.0);
/// assert_eq!(bipolar_to_unipolar(0.0), 0.5);
/// assert_eq!(bipolar_to_unipolar(1.0), 1.0);
/// ```
#[inline]
pub fn bipolar_to_unipolar(bipolar: f32) -> f32 {
    (bipolar + 1.0) * 0.5
}
