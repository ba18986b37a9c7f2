use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use xlcore_core::VersionRecord;

use crate::fs_utils::remove_file_if_exists;

/// Reads a version record; a missing file means "not installed".
pub fn read_version_record(path: &Path) -> Result<Option<VersionRecord>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read version record: {}", path.display()))
        }
    };

    let record = VersionRecord::parse(&raw)
        .with_context(|| format!("failed to parse version record: {}", path.display()))?;
    Ok(Some(record))
}

/// Replaces the record wholesale: the old file is removed before the new one
/// is written.
pub fn write_version_record(path: &Path, record: &VersionRecord) -> Result<()> {
    remove_file_if_exists(path)
        .with_context(|| format!("failed to remove old version record: {}", path.display()))?;
    fs::write(path, record.render().as_bytes())
        .with_context(|| format!("failed to write version record: {}", path.display()))
}
