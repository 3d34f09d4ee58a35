//! Factory patch commands.
//!
//! Lists, shows and exports the built-in patches.

use anyhow::Context;
use clap::{Args, Subcommand};
use dualosc_config::{FACTORY_PATCH_NAMES, get_factory_patch, require_factory_patch};
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct PatchesArgs {
    #[command(subcommand)]
    command: PatchesCommand,
}

#[derive(Subcommand)]
enum PatchesCommand {
    /// List factory patches
    List,

    /// Print a factory patch as TOML
    Show {
        /// Patch name
        name: String,
    },

    /// Write a factory patch to a TOML file for editing
    Export {
        /// Patch name
        name: String,

        /// Destination file
        output: PathBuf,

        /// Overwrite if the file already exists
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: PatchesArgs) -> anyhow::Result<()> {
    match args.command {
        PatchesCommand::List => list_patches(),
        PatchesCommand::Show { name } => show_patch(&name),
        PatchesCommand::Export {
            name,
            output,
            force,
        } => export_patch(&name, &output, force),
    }
}

fn list_patches() -> anyhow::Result<()> {
    println!("Factory Patches:");
    println!("================");
    for name in FACTORY_PATCH_NAMES {
        if let Some(patch) = get_factory_patch(name) {
            let desc = patch.description.as_deref().unwrap_or("");
            println!("  {:14} {:14} - {}", name, patch.name, desc);
        }
    }
    println!();
    println!("Render one with: dualosc render out.wav --patch <name>");
    Ok(())
}

fn show_patch(name: &str) -> anyhow::Result<()> {
    let patch = require_factory_patch(name)?;
    print!("{}", patch.to_toml()?);
    Ok(())
}

fn export_patch(name: &str, output: &Path, force: bool) -> anyhow::Result<()> {
    let patch = require_factory_patch(name)?;
    anyhow::ensure!(
        force || !output.exists(),
        "'{}' already exists (use --force to overwrite)",
        output.display()
    );
    patch
        .save(output)
        .with_context(|| format!("exporting '{name}'"))?;
    tracing::info!(name, path = %output.display(), "patch exported");
    println!("Exported '{}' to {}", patch.name, output.display());
    Ok(())
}
