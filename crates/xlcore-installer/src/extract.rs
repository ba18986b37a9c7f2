use anyhow::{anyhow, Context, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Unpacks a cached `.tar.gz` archive into `dst`.
pub fn extract_archive(archive_path: &Path, dst: &Path) -> Result<()> {
    let is_tar_gz = archive_path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".tar.gz"));
    if !is_tar_gz {
        return Err(anyhow!(
            "unsupported archive format: {} (expected .tar.gz)",
            archive_path.display()
        ));
    }
    debug!(archive = %archive_path.display(), dst = %dst.display(), "extracting");

    run_command(
        Command::new("tar")
            .arg("-xzf")
            .arg(archive_path)
            .arg("-C")
            .arg(dst),
        &format!("failed to extract {}", archive_path.display()),
    )
}

pub(crate) fn run_command(command: &mut Command, context_message: &str) -> Result<()> {
    let output = command
        .output()
        .with_context(|| format!("{context_message}: command failed to start"))?;
    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    Err(anyhow!(
        "{context_message}: status={} stdout='{}' stderr='{}'",
        output.status,
        stdout.trim(),
        stderr.trim()
    ))
}
