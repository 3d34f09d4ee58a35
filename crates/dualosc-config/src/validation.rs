//! Range checks for patch values.
//!
//! The voice applies raw values without validation, so an out-of-range patch
//! value is not an error: it still plays, just outside the range the control
//! was designed for. These checks let callers report such values.

use dualosc_synth::ParamIndex;
use thiserror::Error;

use crate::Patch;

/// A patch value outside its slot's declared range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Parameter value out of range.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Parameter identifier.
        param: &'static str,
        /// The stored value.
        value: u16,
        /// Minimum declared value.
        min: u16,
        /// Maximum declared value.
        max: u16,
    },
}

/// Check every active slot of `patch` against its declared range.
///
/// Returns one entry per offending value, in slot order; empty when the
/// patch is fully in range.
///
/// # Example
///
/// ```rust
/// use dualosc_config::{Patch, validate_patch};
///
/// let mut patch = Patch::new("Hot");
/// patch.balance = 150;
/// let issues = validate_patch(&patch);
/// assert_eq!(issues.len(), 1);
/// assert!(issues[0].to_string().contains("balance"));
/// ```
pub fn validate_patch(patch: &Patch) -> Vec<ValidationError> {
    patch
        .param_changes()
        .iter()
        .filter_map(|&(index, value)| {
            let desc = ParamIndex::from_index(usize::from(index))?.descriptor();
            (!desc.contains(value)).then_some(ValidationError::OutOfRange {
                param: desc.string_id,
                value,
                min: desc.min,
                max: desc.max,
            })
        })
        .collect()
}
