use anyhow::{anyhow, Context, Result};
use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

use crate::assets::{
    DESKTOP_ENTRY_TEMPLATE, PLACEHOLDER_EXEC, PLACEHOLDER_ICON, PLACEHOLDER_TITLE,
};
use crate::extract::run_command;
use crate::fs_utils::{ensure_dir, remove_file_if_exists};
use crate::{render_template, write_atomic, InstallLayout};

/// Points `<user-bin>/xivlauncher-core` at the installed launch script,
/// replacing whatever link was there before.
pub(crate) fn install_launcher_link(layout: &InstallLayout) -> Result<()> {
    ensure_dir(layout.user_bin_dir())?;
    let link = layout.launcher_link_path();
    let target = layout.launch_script_path();

    match fs::symlink_metadata(&link) {
        Ok(metadata) if metadata.is_dir() => {
            return Err(anyhow!(
                "{} is a directory; remove it manually and try again",
                link.display()
            ))
        }
        Ok(_) => fs::remove_file(&link)
            .with_context(|| format!("failed to replace existing link: {}", link.display()))?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err).with_context(|| format!("failed to stat {}", link.display()));
        }
    }

    debug!(link = %link.display(), target = %target.display(), "creating launcher link");
    create_symlink(&target, &link)
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> Result<()> {
    std::os::unix::fs::symlink(target, link).with_context(|| {
        format!(
            "failed to create symlink {} -> {}",
            link.display(),
            target.display()
        )
    })
}

#[cfg(not(unix))]
fn create_symlink(_target: &Path, link: &Path) -> Result<()> {
    Err(anyhow!(
        "symlinks are not supported on this platform: {}",
        link.display()
    ))
}

pub(crate) fn write_desktop_entry(layout: &InstallLayout, title: &str) -> Result<()> {
    ensure_dir(layout.applications_dir())?;
    let exec = layout.launch_script_path();
    let icon = layout.icon_path();
    let entry = render_template(
        DESKTOP_ENTRY_TEMPLATE,
        &[
            (PLACEHOLDER_TITLE, title),
            (PLACEHOLDER_EXEC, &exec.display().to_string()),
            (PLACEHOLDER_ICON, &icon.display().to_string()),
        ],
    );
    write_atomic(&layout.desktop_entry_path(), entry.as_bytes())
}

/// Removes the launcher link and the desktop entry when they belong to this
/// install. Entries pointing at another install are left alone.
pub(crate) fn remove_desktop_integration(layout: &InstallLayout) -> Result<()> {
    let script = layout.launch_script_path();

    let link = layout.launcher_link_path();
    match fs::read_link(&link) {
        Ok(target) if target == script => remove_file_if_exists(&link)
            .with_context(|| format!("failed to remove launcher link: {}", link.display()))?,
        Ok(target) => debug!(
            link = %link.display(),
            target = %target.display(),
            "launcher link belongs to another install; keeping it"
        ),
        Err(_) => {}
    }

    let entry = layout.desktop_entry_path();
    let exec_line = format!("Exec={}", script.display());
    match fs::read_to_string(&entry) {
        Ok(contents) if contents.lines().any(|line| line == exec_line) => {
            remove_file_if_exists(&entry)
                .with_context(|| format!("failed to remove desktop entry: {}", entry.display()))?
        }
        Ok(_) => debug!(
            entry = %entry.display(),
            "desktop entry belongs to another install; keeping it"
        ),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", entry.display()));
        }
    }
    Ok(())
}

/// Asks the desktop to re-read its menu entries. Failure only logs a warning.
pub fn refresh_desktop_database_best_effort(applications_dir: &Path) {
    let mut refresh = Command::new("update-desktop-database");
    refresh.arg(applications_dir);
    if let Err(err) = run_command(&mut refresh, "failed to refresh desktop entry database") {
        warn!("{err:#}");
    }
}
