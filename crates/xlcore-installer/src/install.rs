use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;
use xlcore_core::{needs_update, InstallIntent, ReleaseLine, TargetKind, VersionRecord};

use crate::assets::{
    Asset, COPYING, ICON, LAUNCH_SCRIPT, LICENSE, PLACEHOLDER_INSTALL_DIR, PLACEHOLDER_TITLE,
    STEAM_FILES,
};
use crate::desktop::{install_launcher_link, write_desktop_entry};
use crate::fs_utils::{clear_dir_contents, ensure_dir, set_executable};
use crate::{
    ensure_cache, extract_archive, refresh_desktop_database_best_effort, render_template,
    write_atomic, write_version_record, CacheReport, Downloader, InstallContext,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallDecision {
    Install,
    UpToDate,
    ReleaseMismatch { installed: ReleaseLine },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed { version: String, cache: CacheReport },
    UpToDate { version: String },
    ReleaseMismatch {
        installed: ReleaseLine,
        requested: ReleaseLine,
    },
}

pub fn decide_install(ctx: &InstallContext, intent: &InstallIntent) -> InstallDecision {
    if intent.force {
        return InstallDecision::Install;
    }
    let Some(installed) = &ctx.installed else {
        return InstallDecision::Install;
    };
    if installed.release != ctx.release {
        return InstallDecision::ReleaseMismatch {
            installed: installed.release,
        };
    }
    if needs_update(&ctx.latest, &installed.version) || intent.always_download {
        return InstallDecision::Install;
    }
    InstallDecision::UpToDate
}

/// Installs or updates the launcher when [`decide_install`] says so; any
/// other decision returns without touching the filesystem.
pub fn install(
    ctx: &InstallContext,
    intent: &InstallIntent,
    downloader: &dyn Downloader,
) -> Result<InstallOutcome> {
    match decide_install(ctx, intent) {
        InstallDecision::Install => {}
        InstallDecision::UpToDate => {
            return Ok(InstallOutcome::UpToDate {
                version: ctx.installed_version().unwrap_or_default().to_string(),
            })
        }
        InstallDecision::ReleaseMismatch { installed } => {
            return Ok(InstallOutcome::ReleaseMismatch {
                installed,
                requested: ctx.release,
            })
        }
    }

    if ctx.target == TargetKind::Clear {
        return Err(anyhow!(
            "unrecognized install target '{}': nothing to install",
            ctx.target
        ));
    }

    let cache = ensure_cache(ctx, intent, downloader)?;

    let layout = &ctx.layout;
    ensure_dir(layout.install_dir())?;
    let app_dir = layout.app_dir();
    if app_dir.exists() {
        if !app_dir.is_dir() {
            return Err(anyhow!(
                "{} exists but is not a directory; remove it manually and try again",
                app_dir.display()
            ));
        }
        debug!(app_dir = %app_dir.display(), "clearing previous install");
        clear_dir_contents(&app_dir)?;
    } else {
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("failed to create {}", app_dir.display()))?;
    }

    extract_archive(&layout.cached_archive_path(ctx.release), &app_dir)?;
    extract_archive(&layout.cached_helper_archive_path(), &app_dir)?;

    match ctx.target {
        TargetKind::Steam | TargetKind::Flatpak => {
            install_steam_files(ctx)?;
            copy_installer(ctx)?;
        }
        TargetKind::Local | TargetKind::Custom => {
            install_desktop_files(ctx)?;
            copy_installer(ctx)?;
        }
        TargetKind::Update | TargetKind::Clear => {}
    }

    write_version_record(
        &layout.version_path(),
        &VersionRecord::new(ctx.latest.clone(), ctx.release),
    )?;

    Ok(InstallOutcome::Installed {
        version: ctx.latest.clone(),
        cache,
    })
}

fn install_steam_files(ctx: &InstallContext) -> Result<()> {
    for asset in STEAM_FILES.iter().chain([&LICENSE, &COPYING]) {
        write_asset(ctx, asset)?;
    }
    Ok(())
}

fn install_desktop_files(ctx: &InstallContext) -> Result<()> {
    for asset in [&LAUNCH_SCRIPT, &LICENSE, &COPYING, &ICON] {
        write_asset(ctx, asset)?;
    }

    let layout = &ctx.layout;
    install_launcher_link(layout)?;
    write_desktop_entry(layout, ctx.release.title())?;
    refresh_desktop_database_best_effort(layout.applications_dir());
    Ok(())
}

fn write_asset(ctx: &InstallContext, asset: &Asset) -> Result<()> {
    let install_dir = ctx.layout.install_dir().display().to_string();
    let contents = render_template(
        asset.contents,
        &[
            (PLACEHOLDER_TITLE, ctx.release.title()),
            (PLACEHOLDER_INSTALL_DIR, &install_dir),
        ],
    );
    let path = ctx.layout.install_dir().join(asset.file_name);
    write_atomic(&path, contents.as_bytes())?;
    if asset.executable {
        set_executable(&path)?;
    }
    Ok(())
}

/// Leaves a copy of this installer in the install root so `--update` can be
/// run from there later.
fn copy_installer(ctx: &InstallContext) -> Result<()> {
    let dst = ctx.layout.installer_copy_path();
    if same_file(&ctx.installer_exe, &dst) {
        return Ok(());
    }

    let tmp = dst.with_file_name(format!(".{}.tmp", crate::INSTALLER_FILE_NAME));
    fs::copy(&ctx.installer_exe, &tmp).with_context(|| {
        format!(
            "failed to copy installer from {} to {}",
            ctx.installer_exe.display(),
            tmp.display()
        )
    })?;
    set_executable(&tmp)?;
    fs::rename(&tmp, &dst)
        .with_context(|| format!("failed to move installer into place: {}", dst.display()))
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
