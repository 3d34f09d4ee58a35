//! Patch management for the dualosc voice.
//!
//! This crate stores voice settings as TOML patch files and ships a small
//! set of factory patches.
//!
//! # Features
//!
//! - **Patches**: Load and save raw parameter values as TOML
//! - **Factory Patches**: Built-in starting points, looked up by name
//! - **Validation**: Report values outside a slot's declared range
//!
//! # Example
//!
//! ```rust,no_run
//! use dualosc_config::{Patch, get_factory_patch};
//!
//! let lead = get_factory_patch("sync_lead").unwrap();
//! lead.save("patches/lead.toml").unwrap();
//!
//! let loaded = Patch::load("patches/lead.toml").unwrap();
//! for (index, value) in loaded.param_changes() {
//!     println!("param {index} = {value}");
//! }
//! ```

mod error;
mod patch;

/// Range checks for patch values.
pub mod validation;

/// Factory patches bundled with the library.
pub mod factory_patches;

pub use error::ConfigError;
pub use factory_patches::{
    FACTORY_PATCH_NAMES, factory_patches, get_factory_patch, is_factory_patch,
    require_factory_patch,
};
pub use patch::Patch;
pub use validation::{ValidationError, validate_patch};
