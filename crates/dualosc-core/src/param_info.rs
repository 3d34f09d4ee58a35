//! Parameter introspection for host-editable voice parameters.
//!
//! Hosts edit parameters by slot index with raw 16-bit integer values; the
//! receiving voice applies its own scaling. This module describes each slot
//! so that front ends (a CLI, a control surface, a MIDI mapper) can discover
//! names and declared ranges without knowing the voice.
//!
//! # Design
//!
//! - [`ParameterInfo`] - index-based discovery and mutation
//! - [`ParamDescriptor`] - name, unit and declared raw range of one slot
//! - [`ParamFlags`] - capability flags (stepped, reserved)
//!
//! Declared ranges are descriptive only. [`ParameterInfo::set_param`]
//! implementations receive raw values untouched; range checks, when wanted,
//! belong to the caller via [`ParamDescriptor::contains`].
//!
//! # Example
//!
//! ```rust
//! use dualosc_core::{ParameterInfo, ParamDescriptor};
//!
//! struct Level {
//!     level: f32,
//! }
//!
//! impl ParameterInfo for Level {
//!     fn param_count(&self) -> usize { 1 }
//!
//!     fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
//!         match index {
//!             0 => Some(ParamDescriptor::percent("Level", "Level", 100).with_id("level")),
//!             _ => None,
//!         }
//!     }
//!
//!     fn set_param(&mut self, index: usize, value: u16) {
//!         if index == 0 {
//!             self.level = f32::from(value) / 100.0;
//!         }
//!     }
//! }
//!
//! let mut l = Level { level: 0.0 };
//! l.set_param(0, 50);
//! assert_eq!(l.level, 0.5);
//! assert_eq!(l.find_param_by_name("level"), Some(0));
//! ```

/// Parameter capability flags.
///
/// # Example
///
/// ```rust
/// use dualosc_core::ParamFlags;
///
/// let flags = ParamFlags::STEPPED.union(ParamFlags::RESERVED);
/// assert!(flags.contains(ParamFlags::STEPPED));
/// assert!(!ParamFlags::NONE.contains(ParamFlags::RESERVED));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParamFlags(u8);

impl ParamFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Parameter selects between discrete values (enum-like).
    pub const STEPPED: Self = Self(1 << 0);
    /// Slot is accepted but currently has no effect on the sound.
    pub const RESERVED: Self = Self(1 << 1);

    /// Returns `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of two flag sets.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

/// Unit type for parameter display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Unipolar percent, raw 0-100.
    Percent,
    /// Bipolar percent, raw 0-200 with 100 as center.
    BipolarPercent,
    /// Discrete selection (waveform, on/off).
    Selector,
    /// Raw controller value with no unit.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dualosc_core::ParamUnit;
    ///
    /// assert_eq!(ParamUnit::Percent.suffix(), "%");
    /// assert_eq!(ParamUnit::Selector.suffix(), "");
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Percent | ParamUnit::BipolarPercent => "%",
            ParamUnit::Selector | ParamUnit::None => "",
        }
    }
}

/// Describes one parameter slot: display names, unit and declared raw range.
///
/// Short names stay within 8 characters for small hardware displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name (e.g. "Waveform 1").
    pub name: &'static str,
    /// Short name for hardware displays, max 8 characters.
    pub short_name: &'static str,
    /// Stable lowercase identifier used by patch files (e.g. `"waveform1"`).
    pub string_id: &'static str,
    /// Unit type for formatting.
    pub unit: ParamUnit,
    /// Lowest declared raw value.
    pub min: u16,
    /// Highest declared raw value.
    pub max: u16,
    /// Raw value matching the voice's initial state.
    pub default: u16,
    /// Capability flags.
    pub flags: ParamFlags,
}

impl ParamDescriptor {
    /// Unipolar percent parameter (raw 0-100).
    pub const fn percent(name: &'static str, short_name: &'static str, default: u16) -> Self {
        Self {
            name,
            short_name,
            string_id: "",
            unit: ParamUnit::Percent,
            min: 0,
            max: 100,
            default,
            flags: ParamFlags::NONE,
        }
    }

    /// Bipolar percent parameter (raw 0-200, 100 is the center).
    pub const fn bipolar_percent(
        name: &'static str,
        short_name: &'static str,
        default: u16,
    ) -> Self {
        Self {
            name,
            short_name,
            string_id: "",
            unit: ParamUnit::BipolarPercent,
            min: 0,
            max: 200,
            default,
            flags: ParamFlags::NONE,
        }
    }

    /// Discrete selector parameter with values `0..=max`.
    pub const fn selector(
        name: &'static str,
        short_name: &'static str,
        max: u16,
        default: u16,
    ) -> Self {
        Self {
            name,
            short_name,
            string_id: "",
            unit: ParamUnit::Selector,
            min: 0,
            max,
            default,
            flags: ParamFlags::STEPPED,
        }
    }

    /// 10-bit controller parameter (raw 0-1023).
    pub const fn ten_bit(name: &'static str, short_name: &'static str) -> Self {
        Self {
            name,
            short_name,
            string_id: "",
            unit: ParamUnit::None,
            min: 0,
            max: 1023,
            default: 0,
            flags: ParamFlags::NONE,
        }
    }

    /// Sets the stable string ID.
    pub const fn with_id(mut self, string_id: &'static str) -> Self {
        self.string_id = string_id;
        self
    }

    /// Sets the parameter flags.
    pub const fn with_flags(mut self, flags: ParamFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Returns `true` if `raw` lies within the declared range.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dualosc_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::percent("Balance", "Balance", 50);
    /// assert!(desc.contains(100));
    /// assert!(!desc.contains(200));
    /// ```
    #[inline]
    pub const fn contains(&self, raw: u16) -> bool {
        raw >= self.min && raw <= self.max
    }

    /// Converts a raw value to the normalized range (0.0 to 1.0).
    #[inline]
    pub fn normalize(&self, raw: u16) -> f32 {
        let range = f32::from(self.max - self.min);
        if range == 0.0 {
            return 0.0;
        }
        (f32::from(raw) - f32::from(self.min)) / range
    }

    /// Converts a normalized value (0.0 to 1.0) to the nearest raw value.
    ///
    /// Input is clamped to `[0.0, 1.0]`, so the result always lies within the
    /// declared range.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dualosc_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::bipolar_percent("Detune", "Detune", 150);
    /// assert_eq!(desc.denormalize(0.5), 100);
    /// assert_eq!(desc.denormalize(2.0), 200);
    /// ```
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> u16 {
        let range = f32::from(self.max - self.min);
        let offset = libm::roundf(normalized.clamp(0.0, 1.0) * range) as u16;
        self.min + offset
    }
}

/// Trait for voices that expose introspectable parameter slots.
///
/// Slots are addressed by zero-based index, stable for the lifetime of the
/// implementor. Values are the raw integers a host sends.
pub trait ParameterInfo {
    /// Returns the number of parameter slots.
    fn param_count(&self) -> usize;

    /// Returns the descriptor for the slot at `index`, or `None` past the end.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Applies a raw value to the slot at `index`.
    ///
    /// Unknown indices are ignored. Values are not clamped.
    fn set_param(&mut self, index: usize, value: u16);

    /// Find a parameter index by name (case-insensitive).
    ///
    /// Matches against [`ParamDescriptor::name`], [`ParamDescriptor::short_name`]
    /// and [`ParamDescriptor::string_id`].
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        (0..self.param_count()).find(|&i| {
            self.param_info(i).is_some_and(|desc| {
                desc.name.eq_ignore_ascii_case(name)
                    || desc.short_name.eq_ignore_ascii_case(name)
                    || desc.string_id.eq_ignore_ascii_case(name)
            })
        })
    }
}
