//! CLI command implementations.

pub mod common;
pub mod params;
pub mod patches;
pub mod render;
