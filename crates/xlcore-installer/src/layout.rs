use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use xlcore_core::{ReleaseLine, TargetKind, HELPER_ARCHIVE_FILE_NAME};

use crate::BaseDirs;

/// Directory inside the install root populated from the launcher archive.
/// Its presence marks a valid prior install.
pub const APP_SUBDIR_NAME: &str = "XIVLauncher";
pub const INSTALLER_FILE_NAME: &str = "xlcore-installer";

const STEAM_TOOL_DIR_NAME: &str = "xlcore";
const FLATPAK_STEAM_APP_ID: &str = "com.valvesoftware.Steam";
const LAUNCHER_LINK_NAME: &str = "xivlauncher-core";
const DESKTOP_ENTRY_FILE_NAME: &str = "XIVLauncher.desktop";
const STEAM_MARKER_FILE_NAME: &str = "compatibilitytool.vdf";

/// Every path derived for one install target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    install_dir: PathBuf,
    cache_dir: PathBuf,
    user_bin_dir: PathBuf,
    applications_dir: PathBuf,
}

impl InstallLayout {
    pub fn new(
        install_dir: impl Into<PathBuf>,
        cache_dir: impl Into<PathBuf>,
        user_bin_dir: impl Into<PathBuf>,
        applications_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            install_dir: install_dir.into(),
            cache_dir: cache_dir.into(),
            user_bin_dir: user_bin_dir.into(),
            applications_dir: applications_dir.into(),
        }
    }

    pub fn resolve(
        target: TargetKind,
        custom_path: Option<&Path>,
        dirs: &BaseDirs,
        installer_exe: &Path,
    ) -> Result<Self> {
        let install_dir = match target {
            TargetKind::Local => dirs.data().join("xivlauncher-core"),
            TargetKind::Custom => {
                let path = custom_path.context("custom install target requires a path")?;
                std::path::absolute(path)
                    .with_context(|| format!("failed to resolve custom path {}", path.display()))?
            }
            TargetKind::Steam => dirs
                .data()
                .join("Steam")
                .join("compatibilitytools.d")
                .join(STEAM_TOOL_DIR_NAME),
            TargetKind::Flatpak => dirs
                .home()
                .join(".var")
                .join("app")
                .join(FLATPAK_STEAM_APP_ID)
                .join("data")
                .join("Steam")
                .join("compatibilitytools.d")
                .join(STEAM_TOOL_DIR_NAME),
            TargetKind::Update => installer_exe
                .parent()
                .map(Path::to_path_buf)
                .ok_or_else(|| {
                    anyhow!(
                        "cannot determine the directory containing {}",
                        installer_exe.display()
                    )
                })?,
            TargetKind::Clear => {
                return Err(anyhow!(
                    "unrecognized install target '{}': no install directory applies",
                    target
                ))
            }
        };

        Ok(Self::new(
            install_dir,
            dirs.installer_cache_dir(),
            dirs.user_bin_dir(),
            dirs.applications_dir(),
        ))
    }

    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn app_dir(&self) -> PathBuf {
        self.install_dir.join(APP_SUBDIR_NAME)
    }

    pub fn version_path(&self) -> PathBuf {
        self.install_dir.join("version")
    }

    pub fn installer_copy_path(&self) -> PathBuf {
        self.install_dir.join(INSTALLER_FILE_NAME)
    }

    pub fn launch_script_path(&self) -> PathBuf {
        self.install_dir.join(LAUNCHER_LINK_NAME)
    }

    pub fn icon_path(&self) -> PathBuf {
        self.install_dir.join("xivlauncher.svg")
    }

    pub fn steam_marker_path(&self) -> PathBuf {
        self.install_dir.join(STEAM_MARKER_FILE_NAME)
    }

    pub fn cached_version_path(&self, release: ReleaseLine) -> PathBuf {
        self.cache_dir.join(format!("version-{}", release.tag()))
    }

    pub fn cached_archive_path(&self, release: ReleaseLine) -> PathBuf {
        self.cache_dir.join(release.archive_file_name())
    }

    pub fn cached_helper_archive_path(&self) -> PathBuf {
        self.cache_dir.join(HELPER_ARCHIVE_FILE_NAME)
    }

    pub fn user_bin_dir(&self) -> &Path {
        &self.user_bin_dir
    }

    pub fn launcher_link_path(&self) -> PathBuf {
        self.user_bin_dir.join(LAUNCHER_LINK_NAME)
    }

    pub fn applications_dir(&self) -> &Path {
        &self.applications_dir
    }

    pub fn desktop_entry_path(&self) -> PathBuf {
        self.applications_dir.join(DESKTOP_ENTRY_FILE_NAME)
    }
}
