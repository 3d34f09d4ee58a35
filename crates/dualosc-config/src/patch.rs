//! Patch file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use dualosc_synth::ParamIndex;

use crate::error::ConfigError;

/// A stored voice setting: the raw values of the five active parameter
/// slots plus a name and sample-rate hint.
///
/// Values are kept in the host's raw units so a patch replays exactly
/// through `param_change`.
///
/// # TOML Format
///
/// ```toml
/// name = "Sync Lead"
/// description = "Hard-synced saws"
/// sample_rate = 48000
/// waveform1 = 0
/// waveform2 = 0
/// balance = 70
/// detune = 200
/// sync = 1
/// ```
///
/// Omitted values take the voice's init defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Patch {
    /// Name of the patch.
    pub name: String,

    /// Optional description of the patch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sample rate hint (defaults to 48000).
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Oscillator 1 waveform (0 saw, 1 square, 2 triangle, 3 sine, 4 noise).
    #[serde(default = "default_waveform")]
    pub waveform1: u16,

    /// Oscillator 2 waveform.
    #[serde(default = "default_waveform")]
    pub waveform2: u16,

    /// Balance, 0-100.
    #[serde(default = "default_balance")]
    pub balance: u16,

    /// Detune, 0-200 with 100 as center.
    #[serde(default = "default_detune")]
    pub detune: u16,

    /// Hard sync, 0 or 1.
    #[serde(default)]
    pub sync: u16,
}

fn default_sample_rate() -> u32 {
    48000
}

fn default_waveform() -> u16 {
    ParamIndex::Waveform1.descriptor().default
}

fn default_balance() -> u16 {
    ParamIndex::Balance.descriptor().default
}

fn default_detune() -> u16 {
    ParamIndex::Detune.descriptor().default
}

impl Patch {
    /// Create a patch holding the init values.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            sample_rate: default_sample_rate(),
            waveform1: default_waveform(),
            waveform2: default_waveform(),
            balance: default_balance(),
            detune: default_detune(),
            sync: 0,
        }
    }

    /// Create a patch with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the sample rate hint.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set one raw parameter value. Reserved slots are ignored.
    pub fn with_param(mut self, param: ParamIndex, value: u16) -> Self {
        match param {
            ParamIndex::Waveform1 => self.waveform1 = value,
            ParamIndex::Waveform2 => self.waveform2 = value,
            ParamIndex::Balance => self.balance = value,
            ParamIndex::Detune => self.detune = value,
            ParamIndex::Sync => self.sync = value,
            ParamIndex::Param6 | ParamIndex::Shape | ParamIndex::ShiftShape => {}
        }
        self
    }

    /// Load a patch from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a patch from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the patch to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the patch to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The `(slot, raw value)` pairs to replay through `param_change`, in
    /// slot order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dualosc_config::Patch;
    ///
    /// let changes = Patch::new("Init").param_changes();
    /// assert_eq!(changes[2], (2, 50));
    /// ```
    pub fn param_changes(&self) -> [(u16, u16); 5] {
        [
            (ParamIndex::Waveform1.index() as u16, self.waveform1),
            (ParamIndex::Waveform2.index() as u16, self.waveform2),
            (ParamIndex::Balance.index() as u16, self.balance),
            (ParamIndex::Detune.index() as u16, self.detune),
            (ParamIndex::Sync.index() as u16, self.sync),
        ]
    }
}

impl Default for Patch {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
