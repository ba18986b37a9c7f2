mod dispatch;
mod intent;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Parser};
use tracing_subscriber::EnvFilter;

use crate::dispatch::run_cli;

#[derive(Parser, Debug)]
#[command(name = "xlcore-installer", version)]
#[command(about = "Install, update and remove XIVLauncher.Core", long_about = None)]
#[command(group(
    ArgGroup::new("target").args(["local", "custom", "steam", "flatpak", "update"])
))]
#[command(group(ArgGroup::new("action").args(["uninstall", "rb"])))]
struct Cli {
    /// Install into the user data directory (default)
    #[arg(short, long)]
    local: bool,
    /// Install into PATH
    #[arg(long, value_name = "PATH")]
    custom: Option<PathBuf>,
    /// Install as a Steam compatibility tool
    #[arg(short, long)]
    steam: bool,
    /// Install as a compatibility tool for Flatpak Steam
    #[arg(short, long)]
    flatpak: bool,
    /// Update the install this binary lives in
    #[arg(long, hide = true)]
    update: bool,
    /// Remove the selected install
    #[arg(short, long)]
    uninstall: bool,
    /// Use the XIVLauncher-RB release line
    #[arg(long = "RB")]
    rb: bool,
    /// Show what would be installed and exit
    #[arg(long)]
    info: bool,
    /// Reinstall even if the installed version is current
    #[arg(long)]
    force: bool,
    /// Install this version instead of the latest one
    #[arg(long, value_name = "TAG")]
    tag: Option<String>,
    /// Download archives even if they are cached
    #[arg(short, long)]
    download: bool,
    /// Delete the download cache
    #[arg(
        long,
        conflicts_with_all = [
            "local", "custom", "steam", "flatpak", "update", "uninstall", "info"
        ]
    )]
    clear: bool,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run_cli(cli)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests;
