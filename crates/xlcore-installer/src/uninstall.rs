use anyhow::{anyhow, Context, Result};
use std::fs;
use tracing::debug;

use crate::desktop::remove_desktop_integration;
use crate::fs_utils::clear_dir_contents;
use crate::InstallContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UninstallOutcome {
    /// Steam only rescans compatibility tools on restart.
    pub steam_restart_required: bool,
}

pub fn uninstall(ctx: &InstallContext) -> Result<UninstallOutcome> {
    let layout = &ctx.layout;
    let install_dir = layout.install_dir();
    if !layout.app_dir().is_dir() {
        return Err(anyhow!(
            "{} is not an XIVLauncher install: {} is missing; nothing was removed",
            install_dir.display(),
            layout.app_dir().display()
        ));
    }

    let is_symlink = fs::symlink_metadata(install_dir)
        .with_context(|| format!("failed to stat {}", install_dir.display()))?
        .file_type()
        .is_symlink();

    debug!(install_dir = %install_dir.display(), is_symlink, "removing install");
    clear_dir_contents(install_dir)?;
    if is_symlink {
        fs::remove_file(install_dir)
            .with_context(|| format!("failed to unlink {}", install_dir.display()))?;
    } else {
        fs::remove_dir(install_dir)
            .with_context(|| format!("failed to remove {}", install_dir.display()))?;
    }

    if !ctx.steam {
        remove_desktop_integration(layout)?;
    }

    Ok(UninstallOutcome {
        steam_restart_required: ctx.steam,
    })
}
