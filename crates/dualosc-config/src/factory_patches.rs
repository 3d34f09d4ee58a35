//! Factory patches bundled with the library.
//!
//! Built-in voice settings that are always available without external files.

use crate::{ConfigError, Patch};

/// Internal names of the factory patches.
pub static FACTORY_PATCH_NAMES: &[&str] = &[
    "init",
    "sync_lead",
    "detuned_saws",
    "sub_octave",
    "noise_sweep",
];

/// TOML content for factory patches, embedded at compile time.
static FACTORY_PATCHES_TOML: &[(&str, &str)] = &[
    ("init", INIT_PATCH),
    ("sync_lead", SYNC_LEAD_PATCH),
    ("detuned_saws", DETUNED_SAWS_PATCH),
    ("sub_octave", SUB_OCTAVE_PATCH),
    ("noise_sweep", NOISE_SWEEP_PATCH),
];

/// Power-on state of the voice.
const INIT_PATCH: &str = r#"
name = "Init"
description = "Power-on state: two squares, equal mix, mild upward detune"
sample_rate = 48000
waveform1 = 1
waveform2 = 1
balance = 50
detune = 150
sync = 0
"#;

/// Hard-synced saw lead.
const SYNC_LEAD_PATCH: &str = r#"
name = "Sync Lead"
description = "Osc 2 saw hard-synced to osc 1, LFO sweeps the sync ratio up an octave"
sample_rate = 48000
waveform1 = 0
waveform2 = 0
balance = 70
detune = 200
sync = 1
"#;

/// Slightly detuned saw pair.
const DETUNED_SAWS_PATCH: &str = r#"
name = "Detuned Saws"
description = "Two free-running saws with a small LFO-driven detune"
sample_rate = 48000
waveform1 = 0
waveform2 = 0
balance = 50
detune = 108
sync = 0
"#;

/// Square with a triangle an octave below at full LFO.
const SUB_OCTAVE_PATCH: &str = r#"
name = "Sub Octave"
description = "Square over a triangle that drops up to an octave with the LFO"
sample_rate = 48000
waveform1 = 1
waveform2 = 2
balance = 40
detune = 0
sync = 0
"#;

/// Noise blended with a sine.
const NOISE_SWEEP_PATCH: &str = r#"
name = "Noise Sweep"
description = "White noise over a sine, for breathy and percussive textures"
sample_rate = 48000
waveform1 = 4
waveform2 = 3
balance = 65
detune = 100
sync = 0
"#;

/// Get all factory patches.
///
/// # Example
///
/// ```rust
/// use dualosc_config::factory_patches;
///
/// for patch in factory_patches() {
///     println!("{}: {}", patch.name, patch.description.as_deref().unwrap_or(""));
/// }
/// ```
pub fn factory_patches() -> Vec<Patch> {
    FACTORY_PATCHES_TOML
        .iter()
        .filter_map(|(_, toml)| Patch::from_toml(toml).ok())
        .collect()
}

/// Get a factory patch by internal or display name, case-insensitively.
///
/// # Example
///
/// ```rust
/// use dualosc_config::get_factory_patch;
///
/// assert_eq!(get_factory_patch("sync_lead").unwrap().sync, 1);
/// assert!(get_factory_patch("Sync Lead").is_some());
/// assert!(get_factory_patch("nonexistent").is_none());
/// ```
pub fn get_factory_patch(name: &str) -> Option<Patch> {
    let name_lower = name.to_lowercase();

    for (patch_name, toml) in FACTORY_PATCHES_TOML {
        if patch_name.to_lowercase() == name_lower {
            return Patch::from_toml(toml).ok();
        }
    }

    factory_patches()
        .into_iter()
        .find(|patch| patch.name.to_lowercase() == name_lower)
}

/// Like [`get_factory_patch`], but reports a missing patch as an error.
pub fn require_factory_patch(name: &str) -> Result<Patch, ConfigError> {
    get_factory_patch(name).ok_or_else(|| ConfigError::PatchNotFound(name.to_string()))
}

/// Returns true if `name` matches any factory patch.
pub fn is_factory_patch(name: &str) -> bool {
    get_factory_patch(name).is_some()
}
