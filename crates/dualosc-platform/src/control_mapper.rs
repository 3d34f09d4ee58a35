//! Control-to-parameter mapping for knobs and MIDI CCs.
//!
//! This module provides [`ControlMapper`] which routes physical knobs and
//! MIDI continuous controllers to oscillator parameter slots, scaling each
//! source to the 10-bit raw value the slot expects.
//!
//! # Value Scaling
//!
//! - Knobs report a normalized position in `[0.0, 1.0]`, scaled to 0-1023.
//! - MIDI CC values (0-127) are multiplied by 8, with 127 mapped to 1023 so
//!   the top of the controller reaches full scale.
//!
//! # Example
//!
//! ```rust
//! use dualosc_platform::{CC_SHAPE, ControlMapper, DualOsc, UserOscillator};
//!
//! let mapper = ControlMapper::<4>::with_default_mapping();
//! let mut osc = DualOsc::new(1);
//!
//! let change = mapper.dispatch_cc(CC_SHAPE, 127).unwrap();
//! assert_eq!((change.index, change.value), (6, 1023));
//! mapper.apply(change, &mut osc);
//! ```

use dualosc_synth::ParamIndex;

use crate::host::UserOscillator;
use crate::q31::PARAM_10BIT_MAX;
use crate::{CC_SHAPE, CC_SHIFT_SHAPE, ControlId, KNOB_A, KNOB_B};

/// Control routing used by the stock firmware: both knobs and both CCs
/// drive the shape pair.
pub const DEFAULT_MAPPING: [(ControlId, ParamIndex); 4] = [
    (KNOB_A, ParamIndex::Shape),
    (KNOB_B, ParamIndex::ShiftShape),
    (ControlId::midi(CC_SHAPE), ParamIndex::Shape),
    (ControlId::midi(CC_SHIFT_SHAPE), ParamIndex::ShiftShape),
];

/// MIDI CC value (0-127) to a 10-bit parameter value.
///
/// # Example
///
/// ```rust
/// use dualosc_platform::cc_to_param_value;
///
/// assert_eq!(cc_to_param_value(0), 0);
/// assert_eq!(cc_to_param_value(64), 512);
/// assert_eq!(cc_to_param_value(126), 1008);
/// assert_eq!(cc_to_param_value(127), 1023);
/// ```
#[inline]
pub const fn cc_to_param_value(cc_value: u8) -> u16 {
    if cc_value >= 127 {
        PARAM_10BIT_MAX
    } else {
        cc_value as u16 * 8
    }
}

/// Normalized knob position to a 10-bit parameter value, rounded to the
/// nearest step. Positions outside `[0.0, 1.0]` clamp.
#[inline]
pub fn knob_to_param_value(position: f32) -> u16 {
    let clamped = if position.is_nan() {
        0.0
    } else {
        position.clamp(0.0, 1.0)
    };
    (clamped * f32::from(PARAM_10BIT_MAX) + 0.5) as u16
}

/// A parameter change ready for [`UserOscillator::param_change`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamChange {
    /// Parameter slot index.
    pub index: u16,
    /// Raw parameter value.
    pub value: u16,
}

/// A single mapping entry from control to parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
struct MappingEntry {
    control_id: ControlId,
    param: ParamIndex,
}

/// Maps controls to oscillator parameter slots.
///
/// Fixed-capacity table associating control IDs with parameter slots.
///
/// # Type Parameter
///
/// - `N`: Maximum number of mappings (compile-time constant for no_std support)
///
/// # Example
///
/// ```rust
/// use dualosc_platform::{ControlId, ControlMapper};
/// use dualosc_synth::ParamIndex;
///
/// let mut mapper = ControlMapper::<8>::new();
/// mapper.map(ControlId::hardware(2), ParamIndex::Balance);
/// mapper.map(ControlId::midi(74), ParamIndex::Detune);
///
/// assert_eq!(mapper.get_param(ControlId::hardware(2)), Some(ParamIndex::Balance));
/// assert_eq!(mapper.get_param(ControlId::midi(75)), None);
/// ```
#[derive(Debug, Clone)]
pub struct ControlMapper<const N: usize> {
    mappings: [Option<MappingEntry>; N],
    count: usize,
}

impl<const N: usize> ControlMapper<N> {
    /// Creates a new empty control mapper.
    pub const fn new() -> Self {
        Self {
            mappings: [None; N],
            count: 0,
        }
    }

    /// Creates a mapper holding [`DEFAULT_MAPPING`]. Entries beyond the
    /// capacity `N` are dropped.
    pub fn with_default_mapping() -> Self {
        let mut mapper = Self::new();
        for (control_id, param) in DEFAULT_MAPPING {
            mapper.map(control_id, param);
        }
        mapper
    }

    /// Returns the number of active mappings.
    #[inline]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns true if there are no mappings.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the maximum number of mappings.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Maps a control to a parameter slot.
    ///
    /// If the control is already mapped, updates the mapping.
    /// Returns `true` if the mapping was added/updated, `false` if at capacity.
    pub fn map(&mut self, control_id: ControlId, param: ParamIndex) -> bool {
        for entry in self.mappings.iter_mut().flatten() {
            if entry.control_id == control_id {
                entry.param = param;
                return true;
            }
        }

        for slot in self.mappings.iter_mut() {
            if slot.is_none() {
                *slot = Some(MappingEntry { control_id, param });
                self.count += 1;
                return true;
            }
        }

        false
    }

    /// Removes the mapping for a control.
    ///
    /// Returns `true` if a mapping was removed, `false` if not found.
    pub fn unmap(&mut self, control_id: ControlId) -> bool {
        for slot in self.mappings.iter_mut() {
            if let Some(entry) = slot
                && entry.control_id == control_id
            {
                *slot = None;
                self.count -= 1;
                return true;
            }
        }
        false
    }

    /// Gets the parameter slot mapped to a control.
    #[inline]
    pub fn get_param(&self, control_id: ControlId) -> Option<ParamIndex> {
        self.mappings
            .iter()
            .flatten()
            .find(|entry| entry.control_id == control_id)
            .map(|entry| entry.param)
    }

    /// Gets the first control mapped to a parameter slot.
    #[inline]
    pub fn get_control_for_param(&self, param: ParamIndex) -> Option<ControlId> {
        self.mappings
            .iter()
            .flatten()
            .find(|entry| entry.param == param)
            .map(|entry| entry.control_id)
    }

    /// Clears all mappings.
    pub fn clear(&mut self) {
        for slot in self.mappings.iter_mut() {
            *slot = None;
        }
        self.count = 0;
    }

    /// Turn an already-scaled raw value on `control_id` into a parameter
    /// change, or `None` if the control is unmapped.
    pub fn dispatch(&self, control_id: ControlId, raw: u16) -> Option<ParamChange> {
        let param = self.get_param(control_id)?;
        Some(ParamChange {
            index: param.index() as u16,
            value: raw,
        })
    }

    /// Dispatch a MIDI CC message.
    pub fn dispatch_cc(&self, cc: u8, cc_value: u8) -> Option<ParamChange> {
        self.dispatch(ControlId::midi(cc), cc_to_param_value(cc_value))
    }

    /// Dispatch a hardware knob position in `[0.0, 1.0]`.
    pub fn dispatch_knob(&self, knob: ControlId, position: f32) -> Option<ParamChange> {
        self.dispatch(knob, knob_to_param_value(position))
    }

    /// Deliver a parameter change to an oscillator.
    pub fn apply<O: UserOscillator>(&self, change: ParamChange, osc: &mut O) {
        osc.param_change(change.index, change.value);
    }
}

impl<const N: usize> Default for ControlMapper<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UserOscParams;

    #[derive(Default)]
    struct Recorder {
        last: Option<(u16, u16)>,
    }

    impl UserOscillator for Recorder {
        fn init(&mut self, _platform: u32, _api_version: u32) {}
        fn cycle(&mut self, _params: &UserOscParams, _output: &mut [i32]) {}
        fn param_change(&mut self, index: u16, value: u16) {
            self.last = Some((index, value));
        }
    }

    #[test]
    fn test_mapper_new() {
        let mapper = ControlMapper::<8>::new();
        assert_eq!(mapper.len(), 0);
        assert!(mapper.is_empty());
        assert_eq!(mapper.capacity(), 8);
    }

    #[test]
    fn test_default_mapping() {
        let mapper = ControlMapper::<4>::with_default_mapping();
        assert_eq!(mapper.len(), 4);
        assert_eq!(mapper.get_param(KNOB_A), Some(ParamIndex::Shape));
        assert_eq!(mapper.get_param(KNOB_B), Some(ParamIndex::ShiftShape));
        assert_eq!(
            mapper.get_param(ControlId::midi(54)),
            Some(ParamIndex::Shape)
        );
        assert_eq!(
            mapper.get_param(ControlId::midi(55)),
            Some(ParamIndex::ShiftShape)
        );
    }

    #[test]
    fn test_default_mapping_truncates_to_capacity() {
        let mapper = ControlMapper::<2>::with_default_mapping();
        assert_eq!(mapper.len(), 2);
        assert_eq!(mapper.get_param(ControlId::midi(CC_SHAPE)), None);
    }

    #[test]
    fn test_mapper_update_existing() {
        let mut mapper = ControlMapper::<8>::new();
        mapper.map(KNOB_A, ParamIndex::Shape);
        mapper.map(KNOB_A, ParamIndex::Balance);
        assert_eq!(mapper.get_param(KNOB_A), Some(ParamIndex::Balance));
        assert_eq!(mapper.len(), 1);
    }

    #[test]
    fn test_mapper_at_capacity() {
        let mut mapper = ControlMapper::<2>::new();
        assert!(mapper.map(ControlId::hardware(0), ParamIndex::Shape));
        assert!(mapper.map(ControlId::hardware(1), ParamIndex::ShiftShape));
        assert!(!mapper.map(ControlId::hardware(2), ParamIndex::Balance));
        assert_eq!(mapper.len(), 2);
    }

    #[test]
    fn test_mapper_unmap_and_clear() {
        let mut mapper = ControlMapper::<4>::with_default_mapping();
        assert!(mapper.unmap(KNOB_A));
        assert!(!mapper.unmap(KNOB_A));
        assert_eq!(mapper.len(), 3);
        assert_eq!(
            mapper.get_control_for_param(ParamIndex::Shape),
            Some(ControlId::midi(CC_SHAPE))
        );

        mapper.clear();
        assert!(mapper.is_empty());
        assert_eq!(mapper.get_param(KNOB_B), None);
    }

    #[test]
    fn test_cc_scaling() {
        assert_eq!(cc_to_param_value(0), 0);
        assert_eq!(cc_to_param_value(1), 8);
        assert_eq!(cc_to_param_value(100), 800);
        assert_eq!(cc_to_param_value(126), 1008);
        assert_eq!(cc_to_param_value(127), 1023);
        assert_eq!(cc_to_param_value(255), 1023);
    }

    #[test]
    fn test_knob_scaling() {
        assert_eq!(knob_to_param_value(0.0), 0);
        assert_eq!(knob_to_param_value(1.0), 1023);
        assert_eq!(knob_to_param_value(0.5), 512);
        assert_eq!(knob_to_param_value(-0.3), 0);
        assert_eq!(knob_to_param_value(4.0), 1023);
        assert_eq!(knob_to_param_value(f32::NAN), 0);
    }

    #[test]
    fn test_dispatch() {
        let mapper = ControlMapper::<4>::with_default_mapping();
        assert_eq!(
            mapper.dispatch_cc(CC_SHIFT_SHAPE, 10),
            Some(ParamChange { index: 7, value: 80 })
        );
        assert_eq!(
            mapper.dispatch_knob(KNOB_A, 1.0),
            Some(ParamChange { index: 6, value: 1023 })
        );
        assert_eq!(mapper.dispatch_cc(1, 64), None);
        assert_eq!(mapper.dispatch(ControlId::hardware(9), 5), None);
    }

    #[test]
    fn test_apply_reaches_oscillator() {
        let mapper = ControlMapper::<4>::with_default_mapping();
        let mut osc = Recorder::default();
        if let Some(change) = mapper.dispatch_knob(KNOB_B, 0.25) {
            mapper.apply(change, &mut osc);
        }
        assert_eq!(osc.last, Some((7, 256)));
    }
}
