use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use xlcore_core::{
    needs_update, validate_version, Action, InstallIntent, ReleaseLine, TargetKind, VersionRecord,
};

use crate::{read_version_record, BaseDirs, Downloader, InstallLayout};

/// Everything derived for one run: paths, the active release line, and the
/// installed, cached and latest versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallContext {
    pub target: TargetKind,
    pub layout: InstallLayout,
    pub steam: bool,
    pub release: ReleaseLine,
    pub latest: String,
    pub tag: Option<String>,
    pub installed: Option<VersionRecord>,
    pub cached: Option<VersionRecord>,
    pub installer_exe: PathBuf,
}

impl InstallContext {
    pub fn build(
        intent: &InstallIntent,
        dirs: &BaseDirs,
        installer_exe: &Path,
        downloader: &dyn Downloader,
    ) -> Result<Self> {
        let layout = InstallLayout::resolve(
            intent.target,
            intent.custom_path.as_deref(),
            dirs,
            installer_exe,
        )?;
        debug!(
            kind = %intent.target,
            install_dir = %layout.install_dir().display(),
            cache_dir = %layout.cache_dir().display(),
            "resolved install layout"
        );

        if intent.target == TargetKind::Update && !layout.app_dir().is_dir() {
            return Err(anyhow!(
                "{} is not an XIVLauncher install: {} is missing",
                layout.install_dir().display(),
                layout.app_dir().display()
            ));
        }

        let installed = read_version_record(&layout.version_path())?;
        let release = if intent.action == Action::Info || intent.target == TargetKind::Update {
            installed
                .as_ref()
                .map(|record| record.release)
                .unwrap_or(intent.release)
        } else {
            intent.release
        };
        let cached = read_version_record(&layout.cached_version_path(release))?;

        let latest = match &intent.tag {
            Some(tag) => {
                validate_version(tag).with_context(|| format!("invalid version tag {tag:?}"))?;
                tag.clone()
            }
            None => fetch_latest_version(downloader, release)?,
        };

        let steam = match intent.target {
            TargetKind::Update => layout.steam_marker_path().is_file(),
            target => target.is_steam_slot(),
        };

        Ok(Self {
            target: intent.target,
            layout,
            steam,
            release,
            latest,
            tag: intent.tag.clone(),
            installed,
            cached,
            installer_exe: installer_exe.to_path_buf(),
        })
    }

    /// Release archive for the requested tag, or for the newest release.
    pub fn archive_url(&self) -> String {
        self.release.archive_url_for(self.tag.as_deref())
    }

    pub fn installed_version(&self) -> Option<&str> {
        self.installed.as_ref().map(|record| record.version.as_str())
    }

    pub fn cached_version(&self) -> Option<&str> {
        self.cached.as_ref().map(|record| record.version.as_str())
    }

    pub fn update_available(&self) -> bool {
        needs_update(&self.latest, self.installed_version().unwrap_or_default())
    }
}

fn fetch_latest_version(downloader: &dyn Downloader, release: ReleaseLine) -> Result<String> {
    let body = downloader
        .fetch_text(release.version_url())
        .with_context(|| format!("failed to fetch latest {} version", release.title()))?;
    let latest = body.lines().next().unwrap_or_default().trim().to_string();
    if latest.is_empty() {
        return Err(anyhow!(
            "version feed {} returned no version",
            release.version_url()
        ));
    }
    debug!(release = release.tag(), latest = %latest, "fetched latest version");
    Ok(latest)
}
