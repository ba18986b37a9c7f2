use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Base directories taken from `HOME`, `XDG_DATA_HOME` and `XDG_CACHE_HOME`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDirs {
    home: PathBuf,
    data: PathBuf,
    cache: PathBuf,
}

impl BaseDirs {
    pub fn new(
        home: impl Into<PathBuf>,
        data: impl Into<PathBuf>,
        cache: impl Into<PathBuf>,
    ) -> Self {
        Self {
            home: home.into(),
            data: data.into(),
            cache: cache.into(),
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Applies the XDG fallbacks; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let home = non_empty("HOME")
            .map(PathBuf::from)
            .context("HOME is not set; cannot resolve install directories")?;
        let data = non_empty("XDG_DATA_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| home.join(".local").join("share"));
        let cache = non_empty("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| home.join(".cache"));

        Ok(Self { home, data, cache })
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn data(&self) -> &Path {
        &self.data
    }

    pub fn cache(&self) -> &Path {
        &self.cache
    }

    pub fn user_bin_dir(&self) -> PathBuf {
        self.home.join(".local").join("bin")
    }

    pub fn applications_dir(&self) -> PathBuf {
        self.data.join("applications")
    }

    pub fn installer_cache_dir(&self) -> PathBuf {
        self.cache.join("xlcore-installer")
    }
}
