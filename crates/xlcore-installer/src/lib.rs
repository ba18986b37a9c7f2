mod assets;
mod cache;
mod context;
mod desktop;
mod dirs;
mod download;
mod extract;
mod fs_utils;
mod install;
mod layout;
mod records;
mod template;
mod uninstall;

pub use cache::{
    clear_cache, ensure_cache, plan_archive_download, CacheReport, ClearOutcome, DownloadReason,
};
pub use context::InstallContext;
pub use desktop::refresh_desktop_database_best_effort;
pub use dirs::BaseDirs;
pub use download::{Downloader, HttpDownloader};
pub use extract::extract_archive;
pub use install::{decide_install, install, InstallDecision, InstallOutcome};
pub use layout::{InstallLayout, APP_SUBDIR_NAME, INSTALLER_FILE_NAME};
pub use records::{read_version_record, write_version_record};
pub use template::{render_template, write_atomic};
pub use uninstall::{uninstall, UninstallOutcome};
