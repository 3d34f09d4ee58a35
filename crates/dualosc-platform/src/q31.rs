//! Q31 fixed-point conversion at the host boundary.
//!
//! The host exchanges audio and LFO values as signed 32-bit Q31 numbers,
//! where `i32::MIN` is -1.0 and `i32::MAX` is just under +1.0. The synthesis
//! code works in `f32`; these helpers convert at the edge.

/// Scale between Q31 integers and unit floats (2^31).
const Q31_SCALE: f32 = 2_147_483_648.0;

/// Full scale of 10-bit knob parameters.
pub const PARAM_10BIT_MAX: u16 = 1023;

/// Q31 to float in `[-1.0, 1.0]`.
///
/// # Example
///
/// ```rust
/// use dualosc_platform::q31_to_f32;
///
/// assert_eq!(q31_to_f32(0), 0.0);
/// assert_eq!(q31_to_f32(i32::MIN), -1.0);
/// assert_eq!(q31_to_f32(0x4000_0000), 0.5);
/// ```
#[inline]
pub fn q31_to_f32(q: i32) -> f32 {
    q as f32 / Q31_SCALE
}

/// Float to Q31, saturating outside `[-1.0, 1.0)`.
///
/// `NaN` maps to 0.
///
/// # Example
///
/// ```rust
/// use dualosc_platform::f32_to_q31;
///
/// assert_eq!(f32_to_q31(0.5), 0x4000_0000);
/// assert_eq!(f32_to_q31(1.0), i32::MAX);
/// assert_eq!(f32_to_q31(-3.0), i32::MIN);
/// ```
#[inline]
pub fn f32_to_q31(x: f32) -> i32 {
    // Float-to-int `as` saturates at the integer bounds.
    (x * Q31_SCALE) as i32
}

/// 10-bit parameter value (0-1023) to `[0.0, 1.0]`.
#[inline]
pub fn param_val_to_f32(value: u16) -> f32 {
    f32::from(value) / f32::from(PARAM_10BIT_MAX)
}
