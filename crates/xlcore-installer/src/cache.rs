use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;
use xlcore_core::{needs_update, InstallIntent, VersionRecord, HELPER_ARCHIVE_URL};

use crate::fs_utils::{clear_dir_contents, ensure_dir};
use crate::{write_version_record, Downloader, InstallContext};

/// Why the release archive is fetched again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadReason {
    AlwaysDownload,
    TagOverride,
    Missing,
    Stale,
}

impl DownloadReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AlwaysDownload => "download requested",
            Self::TagOverride => "explicit tag",
            Self::Missing => "not cached",
            Self::Stale => "cached copy is outdated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheReport {
    pub archive: Option<DownloadReason>,
    pub helper_downloaded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared,
    NothingToClear,
}

/// Decides whether the release archive must be downloaded. `Ok(None)` means
/// the cached archive is current.
pub fn plan_archive_download(
    ctx: &InstallContext,
    intent: &InstallIntent,
) -> Result<Option<DownloadReason>> {
    if intent.always_download {
        return Ok(Some(DownloadReason::AlwaysDownload));
    }
    if intent.tag.is_some() {
        return Ok(Some(DownloadReason::TagOverride));
    }

    let archive_present = ctx.layout.cached_archive_path(ctx.release).is_file();
    let Some(cached) = ctx.cached.as_ref().filter(|_| archive_present) else {
        return Ok(Some(DownloadReason::Missing));
    };
    if needs_update(&ctx.latest, &cached.version) {
        return Ok(Some(DownloadReason::Stale));
    }
    if archive_present {
        return Ok(None);
    }

    Err(anyhow!(
        "inconsistent cache state in {}: cannot decide whether to download {}",
        ctx.layout.cache_dir().display(),
        ctx.release.archive_file_name()
    ))
}

/// Makes sure both archives are in the cache, downloading whatever the
/// policy says is missing or stale.
pub fn ensure_cache(
    ctx: &InstallContext,
    intent: &InstallIntent,
    downloader: &dyn Downloader,
) -> Result<CacheReport> {
    let layout = &ctx.layout;
    ensure_dir(layout.cache_dir())?;

    let archive = plan_archive_download(ctx, intent)?;
    if let Some(reason) = archive {
        let url = ctx.archive_url();
        debug!(reason = reason.as_str(), url = %url, "downloading release archive");
        downloader.download_file(&url, &layout.cached_archive_path(ctx.release))?;
        write_version_record(
            &layout.cached_version_path(ctx.release),
            &VersionRecord::new(ctx.latest.clone(), ctx.release),
        )?;
    }

    let helper_path = layout.cached_helper_archive_path();
    let helper_downloaded = intent.always_download || !helper_path.is_file();
    if helper_downloaded {
        debug!("downloading helper archive");
        downloader.download_file(HELPER_ARCHIVE_URL, &helper_path)?;
    }

    Ok(CacheReport {
        archive,
        helper_downloaded,
    })
}

/// Deletes the cache directory and everything in it.
pub fn clear_cache(cache_dir: &Path) -> Result<ClearOutcome> {
    let metadata = match fs::symlink_metadata(cache_dir) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ClearOutcome::NothingToClear)
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to stat {}", cache_dir.display()))
        }
    };
    if !metadata.is_dir() {
        return Err(anyhow!(
            "{} is not a directory; remove it manually and try again",
            cache_dir.display()
        ));
    }

    clear_dir_contents(cache_dir)?;
    fs::remove_dir(cache_dir)
        .with_context(|| format!("failed to remove {}", cache_dir.display()))?;
    Ok(ClearOutcome::Cleared)
}
