//! Shared CLI helpers used across multiple commands.

use dualosc_config::{Patch, get_factory_patch};
use std::path::Path;

/// Parse an `index=value` raw parameter override for clap's `value_parser`.
pub fn parse_param_override(s: &str) -> Result<(u16, u16), String> {
    let (index, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter format: '{s}' (expected INDEX=VALUE)"))?;
    let index = index
        .trim()
        .parse()
        .map_err(|e| format!("invalid parameter index '{index}': {e}"))?;
    let value = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid parameter value '{value}': {e}"))?;
    Ok((index, value))
}

/// Load a patch by factory name or file path.
///
/// Factory patches win over files of the same name.
pub fn load_patch(name: &str) -> anyhow::Result<Patch> {
    if let Some(patch) = get_factory_patch(name) {
        tracing::debug!(name, "using factory patch");
        return Ok(patch);
    }

    let path = Path::new(name);
    if path.exists() {
        tracing::debug!(path = %path.display(), "loading patch file");
        return Ok(Patch::load(path)?);
    }

    anyhow::bail!(
        "Patch '{}' not found. Use 'dualosc patches list' to see factory patches.",
        name
    )
}
