use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::fs_utils::remove_file_if_exists;

const CHUNK_SIZE: usize = 64 * 1024;

/// Network access used by the install pipeline.
pub trait Downloader {
    /// Fetches a small plain-text document, such as a version feed.
    fn fetch_text(&self, url: &str) -> Result<String>;

    /// Stores the body of `url` at `dst`, replacing any existing file.
    fn download_file(&self, url: &str, dst: &Path) -> Result<()>;
}

pub struct HttpDownloader {
    client: reqwest::blocking::Client,
    show_progress: bool,
}

impl HttpDownloader {
    pub fn new(show_progress: bool) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("xlcore-installer/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            show_progress,
        })
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("request failed: {url}"))?;
        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("request failed: {url} returned HTTP {status}"));
        }
        Ok(response)
    }

    fn start_progress(&self, label: &str, total: Option<u64>) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let progress_bar = match total {
            Some(total) => ProgressBar::new(total),
            None => ProgressBar::new_spinner(),
        };
        if let Ok(style) = ProgressStyle::with_template(
            "{spinner:.cyan.bold} {msg:<22} [{bar:20.cyan/blue}] {bytes:>10}/{total_bytes:10} {elapsed_precise}",
        ) {
            progress_bar.set_style(style.tick_chars("|/-\\ ").progress_chars("=>-"));
        }
        progress_bar.set_message(label.to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(80));
        progress_bar
    }
}

impl Downloader for HttpDownloader {
    fn fetch_text(&self, url: &str) -> Result<String> {
        self.get(url)?
            .text()
            .with_context(|| format!("failed to read response body: {url}"))
    }

    fn download_file(&self, url: &str, dst: &Path) -> Result<()> {
        let response = self.get(url)?;
        let label = dst
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("download")
            .to_string();
        let progress = self.start_progress(&label, response.content_length());

        let result = store_via_part_file(dst, |file| {
            stream_to_writer(response, file, |written| progress.set_position(written))
        });
        match &result {
            Ok(()) => progress.finish_and_clear(),
            Err(_) => progress.abandon(),
        }
        result.with_context(|| format!("failed to download {url}"))
    }
}

/// Copies `reader` into `writer` in fixed-size chunks until it is exhausted.
pub(crate) fn stream_to_writer<R, W, F>(
    mut reader: R,
    writer: &mut W,
    mut on_progress: F,
) -> Result<u64>
where
    R: Read,
    W: Write,
    F: FnMut(u64),
{
    let mut buf = vec![0_u8; CHUNK_SIZE];
    let mut written = 0_u64;
    loop {
        let read = reader.read(&mut buf).context("error reading download stream")?;
        if read == 0 {
            break;
        }
        writer
            .write_all(&buf[..read])
            .context("error writing download chunk")?;
        written += read as u64;
        on_progress(written);
    }
    writer.flush().context("error flushing download")?;
    Ok(written)
}

/// Runs `fill` against `<dst>.part` and renames it to `dst` on success. On
/// failure the partial file is removed and `dst` is left untouched.
pub(crate) fn store_via_part_file<F, T>(dst: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut File) -> Result<T>,
{
    let part_path = part_path(dst);
    let result = File::create(&part_path)
        .with_context(|| format!("failed to create {}", part_path.display()))
        .and_then(|mut file| fill(&mut file).map(drop));

    if let Err(err) = result {
        let _ = remove_file_if_exists(&part_path);
        return Err(err);
    }

    remove_file_if_exists(dst)
        .with_context(|| format!("failed to replace cache file: {}", dst.display()))?;
    fs::rename(&part_path, dst)
        .with_context(|| format!("failed to move download into place: {}", dst.display()))
}

fn part_path(dst: &Path) -> PathBuf {
    dst.with_file_name(format!(
        "{}.part",
        dst.file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("artifact")
    ))
}
