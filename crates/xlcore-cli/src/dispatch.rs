use anyhow::{Context, Result};
use xlcore_core::{Action, InstallIntent, TargetKind, VersionRecord, HELPER_ARCHIVE_URL};
use xlcore_installer::{
    clear_cache, install, uninstall, BaseDirs, ClearOutcome, HttpDownloader, InstallContext,
    InstallOutcome, UninstallOutcome,
};

use crate::intent::resolve_intent;
use crate::render::{OutputStyle, TerminalRenderer};
use crate::Cli;

pub(crate) fn run_cli(cli: Cli) -> Result<()> {
    let intent = resolve_intent(&cli)?;
    let renderer = TerminalRenderer::current();
    let dirs = BaseDirs::from_env()?;

    if intent.target == TargetKind::Clear {
        let cache_dir = dirs.installer_cache_dir();
        let outcome = clear_cache(&cache_dir)?;
        let (status, message) = format_clear_outcome(outcome, &cache_dir.display().to_string());
        renderer.print_status(status, &message);
        return Ok(());
    }

    let installer_exe =
        std::env::current_exe().context("failed to locate the running installer executable")?;
    let downloader = HttpDownloader::new(renderer.style() == OutputStyle::Rich)?;
    let ctx = InstallContext::build(&intent, &dirs, &installer_exe, &downloader)?;

    match intent.action {
        Action::Info => {
            renderer.print_section("XIVLauncher install info");
            renderer.print_lines(&format_info_lines(&ctx));
        }
        Action::Install => {
            renderer.print_section(&format!("Installing {}", ctx.release.title()));
            let outcome = install(&ctx, &intent, &downloader)?;
            for (status, message) in format_install_outcome(&ctx, &intent, &outcome) {
                renderer.print_status(status, &message);
            }
        }
        Action::Uninstall => {
            renderer.print_section("Uninstalling XIVLauncher");
            let outcome = uninstall(&ctx)?;
            for (status, message) in format_uninstall_outcome(&ctx, outcome) {
                renderer.print_status(status, &message);
            }
        }
    }

    Ok(())
}

pub(crate) fn format_info_lines(ctx: &InstallContext) -> Vec<String> {
    let layout = &ctx.layout;
    vec![
        format!("Install target:    {}", ctx.target),
        format!("Install directory: {}", layout.install_dir().display()),
        format!("Application dir:   {}", layout.app_dir().display()),
        format!("Steam tool:        {}", yes_no(ctx.steam)),
        format!("Release line:      {}", ctx.release),
        format!("Latest version:    {}", display_or_none(&ctx.latest)),
        format!("Installed version: {}", display_record(ctx.installed.as_ref())),
        format!("Cached version:    {}", display_record(ctx.cached.as_ref())),
        format!("Cache directory:   {}", layout.cache_dir().display()),
        format!("Archive URL:       {}", ctx.archive_url()),
        format!("Helper URL:        {}", HELPER_ARCHIVE_URL),
        format!("Update available:  {}", yes_no(ctx.update_available())),
    ]
}

pub(crate) fn format_install_outcome(
    ctx: &InstallContext,
    intent: &InstallIntent,
    outcome: &InstallOutcome,
) -> Vec<(&'static str, String)> {
    let title = ctx.release.title();
    match outcome {
        InstallOutcome::Installed { version, cache } => {
            let archive = ctx.release.archive_file_name();
            let mut lines = Vec::new();
            match cache.archive {
                Some(reason) => {
                    lines.push(("info", format!("downloaded {archive} ({})", reason.as_str())))
                }
                None => lines.push(("info", format!("using cached {archive}"))),
            }
            if cache.helper_downloaded {
                lines.push(("info", "downloaded aria2-static.tar.gz".to_string()));
            }
            lines.push((
                "ok",
                format!(
                    "installed {title} {version} into {}",
                    ctx.layout.install_dir().display()
                ),
            ));
            lines
        }
        InstallOutcome::UpToDate { version } => {
            let hint = if intent.force {
                ""
            } else {
                "; use --force to reinstall"
            };
            vec![(
                "info",
                format!("{title} {version} is already up to date{hint}"),
            )]
        }
        InstallOutcome::ReleaseMismatch {
            installed,
            requested,
        } => vec![(
            "warn",
            format!(
                "installed release line {installed} does not match requested {requested}; use --force to replace it"
            ),
        )],
    }
}

pub(crate) fn format_uninstall_outcome(
    ctx: &InstallContext,
    outcome: UninstallOutcome,
) -> Vec<(&'static str, String)> {
    let mut lines = vec![(
        "ok",
        format!("removed {}", ctx.layout.install_dir().display()),
    )];
    if outcome.steam_restart_required {
        lines.push((
            "warn",
            "restart Steam to refresh its list of compatibility tools".to_string(),
        ));
    }
    lines
}

pub(crate) fn format_clear_outcome(
    outcome: ClearOutcome,
    cache_dir: &str,
) -> (&'static str, String) {
    match outcome {
        ClearOutcome::Cleared => ("ok", format!("cleared cache {cache_dir}")),
        ClearOutcome::NothingToClear => ("info", format!("nothing to clear at {cache_dir}")),
    }
}

fn display_record(record: Option<&VersionRecord>) -> String {
    match record {
        Some(record) => format!("{} ({})", record.version, record.release.tag()),
        None => "None".to_string(),
    }
}

fn display_or_none(value: &str) -> &str {
    if value.is_empty() {
        "None"
    } else {
        value
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
