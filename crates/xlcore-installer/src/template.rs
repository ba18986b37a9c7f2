use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::fs_utils::remove_file_if_exists;

/// Replaces every literal occurrence of each placeholder with its value.
pub fn render_template(template: &str, substitutions: &[(&str, &str)]) -> String {
    substitutions
        .iter()
        .fold(template.to_string(), |rendered, (placeholder, value)| {
            rendered.replace(placeholder, value)
        })
}

/// Writes `contents` beside `path` first and renames it into place, so a
/// failure never leaves a half-written file at `path`.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let tmp_path = sibling_tmp_path(path)?;
    if let Err(err) = fs::write(&tmp_path, contents) {
        let _ = remove_file_if_exists(&tmp_path);
        return Err(err).with_context(|| format!("failed to write {}", tmp_path.display()));
    }

    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = remove_file_if_exists(&tmp_path);
        return Err(err).with_context(|| {
            format!(
                "failed to move {} into place at {}",
                tmp_path.display(),
                path.display()
            )
        });
    }
    Ok(())
}

fn sibling_tmp_path(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("invalid output path: {}", path.display()))?;
    Ok(path.with_file_name(format!(".{file_name}.{}.tmp", std::process::id())))
}
