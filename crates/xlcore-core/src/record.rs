use anyhow::{anyhow, Context, Result};

use crate::ReleaseLine;

/// Contents of a two-line `version` file: version string, then release tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    pub version: String,
    pub release: ReleaseLine,
}

impl VersionRecord {
    pub fn new(version: impl Into<String>, release: ReleaseLine) -> Self {
        Self {
            version: version.into(),
            release,
        }
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let mut lines = raw.lines().map(str::trim);
        let version = lines
            .next()
            .filter(|line| !line.is_empty())
            .context("missing version line")?;
        let tag = lines
            .next()
            .filter(|line| !line.is_empty())
            .context("missing release tag line")?;
        let release = ReleaseLine::from_tag(tag).ok_or_else(|| {
            anyhow!(
                "unrecognized release tag '{}': expected one of {}",
                tag,
                ReleaseLine::ALL
                    .iter()
                    .map(|line| line.tag())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })?;

        Ok(Self {
            version: version.to_string(),
            release,
        })
    }

    pub fn render(&self) -> String {
        format!("{}\n{}", self.version, self.release.tag())
    }
}

/// Rejects version strings that [`VersionRecord::parse`] could not read back.
pub fn validate_version(version: &str) -> Result<()> {
    if version.trim().is_empty() {
        return Err(anyhow!("version must not be empty"));
    }
    if version.contains(['\n', '\r']) {
        return Err(anyhow!("version '{}' must be a single line", version.escape_default()));
    }
    if version.trim() != version {
        return Err(anyhow!("version '{version}' must not have surrounding whitespace"));
    }
    Ok(())
}
