//! dualosc CLI - offline renderer and patch browser for the dualosc voice.

mod commands;
mod wav;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dualosc")]
#[command(author, version, about = "Dual oscillator voice renderer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a note to a WAV file
    Render(commands::render::RenderArgs),

    /// List the voice parameters
    Params(commands::params::ParamsArgs),

    /// List, show and export factory patches
    Patches(commands::patches::PatchesArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Params(args) => commands::params::run(args),
        Commands::Patches(args) => commands::patches::run(args),
    }
}
