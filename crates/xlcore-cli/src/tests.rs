use super::*;
use clap::error::ErrorKind;
use std::path::{Path, PathBuf};
use xlcore_core::{Action, InstallIntent, ReleaseLine, TargetKind, VersionRecord};
use xlcore_installer::{
    BaseDirs, CacheReport, ClearOutcome, DownloadReason, InstallContext, InstallLayout,
    InstallOutcome, UninstallOutcome,
};

use crate::dispatch::{
    format_clear_outcome, format_info_lines, format_install_outcome, format_uninstall_outcome,
};
use crate::intent::resolve_intent;
use crate::render::{render_status_line, resolve_output_style, OutputStyle};

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["xlcore-installer"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("must parse")
}

fn intent_for(args: &[&str]) -> InstallIntent {
    resolve_intent(&parse(args)).expect("must resolve intent")
}

fn sample_context(target: TargetKind) -> InstallContext {
    let dirs = BaseDirs::new("/home/alice", "/home/alice/.local/share", "/home/alice/.cache");
    let exe = Path::new("/home/alice/.local/share/xivlauncher-core/xlcore-installer");
    InstallContext {
        target,
        layout: InstallLayout::resolve(target, None, &dirs, exe).expect("must resolve layout"),
        steam: target.is_steam_slot(),
        release: ReleaseLine::Official,
        latest: "6.3.1.2".to_string(),
        tag: None,
        installed: None,
        cached: None,
        installer_exe: exe.to_path_buf(),
    }
}

#[test]
fn no_target_flag_defaults_to_local_install() {
    let intent = intent_for(&[]);
    assert_eq!(intent, InstallIntent::new(TargetKind::Local, Action::Install));
}

#[test]
fn target_flags_map_to_target_kinds() {
    assert_eq!(intent_for(&["-l"]).target, TargetKind::Local);
    assert_eq!(intent_for(&["--steam"]).target, TargetKind::Steam);
    assert_eq!(intent_for(&["-s"]).target, TargetKind::Steam);
    assert_eq!(intent_for(&["-f"]).target, TargetKind::Flatpak);
    assert_eq!(intent_for(&["--update"]).target, TargetKind::Update);
    assert_eq!(intent_for(&["--clear"]).target, TargetKind::Clear);

    let custom = intent_for(&["--custom", "/games/xl"]);
    assert_eq!(custom.target, TargetKind::Custom);
    assert_eq!(custom.custom_path, Some(PathBuf::from("/games/xl")));
}

#[test]
fn action_and_independent_flags_are_carried() {
    let intent = intent_for(&["--RB", "--force", "--tag", "1.1.0.4", "-d"]);
    assert_eq!(intent.action, Action::Install);
    assert_eq!(intent.release, ReleaseLine::RankynBass);
    assert!(intent.force);
    assert!(intent.always_download);
    assert_eq!(intent.tag.as_deref(), Some("1.1.0.4"));

    assert_eq!(intent_for(&["-u", "--steam"]).action, Action::Uninstall);
    assert_eq!(intent_for(&["--info", "--uninstall"]).action, Action::Info);
}

#[test]
fn target_flags_are_mutually_exclusive() {
    let err = Cli::try_parse_from(["xlcore-installer", "--steam", "--flatpak"])
        .expect_err("two targets must conflict");
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

    let err = Cli::try_parse_from(["xlcore-installer", "--local", "--custom", "/tmp/xl"])
        .expect_err("two targets must conflict");
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
}

#[test]
fn uninstall_and_rb_are_mutually_exclusive() {
    let err = Cli::try_parse_from(["xlcore-installer", "--uninstall", "--RB"])
        .expect_err("action flags must conflict");
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
}

#[test]
fn clear_conflicts_with_targets_uninstall_and_info() {
    for flag in ["--steam", "--uninstall", "--update", "--info"] {
        let err = Cli::try_parse_from(["xlcore-installer", "--clear", flag])
            .expect_err("clear must not combine with targets");
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }
}

#[test]
fn tag_must_be_a_single_non_empty_line() {
    for tag in ["", "  ", "6.3.1.2\nRankynBass"] {
        let err = resolve_intent(&parse(&["--tag", tag]))
            .expect_err("unusable tag must be rejected");
        assert!(
            err.to_string().contains("invalid --tag value"),
            "unexpected error for {tag:?}: {err:#}"
        );
    }
    assert_eq!(
        intent_for(&["--tag", "6.2.0.0"]).tag.as_deref(),
        Some("6.2.0.0")
    );
}

#[test]
fn custom_requires_a_path() {
    let err = Cli::try_parse_from(["xlcore-installer", "--custom"])
        .expect_err("custom needs a value");
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn update_flag_is_hidden_from_help() {
    let err = Cli::try_parse_from(["xlcore-installer", "--help"]).expect_err("help exits");
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    let help = err.to_string();
    assert!(help.contains("--flatpak"));
    assert!(!help.contains("--update"));
}

#[test]
fn cli_supports_version_flag() {
    let err = Cli::try_parse_from(["xlcore-installer", "--version"])
        .expect_err("version flag should exit with version output");
    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
}

#[test]
fn info_lines_report_missing_install_as_none() {
    let ctx = sample_context(TargetKind::Local);
    let lines = format_info_lines(&ctx);

    assert!(lines.contains(&"Install target:    local".to_string()));
    assert!(lines.contains(&"Installed version: None".to_string()));
    assert!(lines.contains(&"Cached version:    None".to_string()));
    assert!(lines.contains(&"Latest version:    6.3.1.2".to_string()));
    assert!(lines.contains(&"Release line:      XIVLauncher (Official)".to_string()));
    assert!(lines.contains(&"Update available:  yes".to_string()));
    assert!(lines.contains(
        &"Application dir:   /home/alice/.local/share/xivlauncher-core/XIVLauncher".to_string()
    ));
}

#[test]
fn info_lines_show_installed_record() {
    let mut ctx = sample_context(TargetKind::Steam);
    ctx.installed = Some(VersionRecord::new("6.3.1.2", ReleaseLine::Official));
    let lines = format_info_lines(&ctx);

    assert!(lines.contains(&"Steam tool:        yes".to_string()));
    assert!(lines.contains(&"Installed version: 6.3.1.2 (Official)".to_string()));
    assert!(lines.contains(&"Update available:  no".to_string()));
}

#[test]
fn install_outcome_lines_describe_downloads() {
    let ctx = sample_context(TargetKind::Local);
    let intent = InstallIntent::new(TargetKind::Local, Action::Install);
    let lines = format_install_outcome(
        &ctx,
        &intent,
        &InstallOutcome::Installed {
            version: "6.3.1.2".to_string(),
            cache: CacheReport {
                archive: Some(DownloadReason::Missing),
                helper_downloaded: true,
            },
        },
    );

    assert_eq!(
        lines,
        vec![
            ("info", "downloaded XIVLauncher.tar.gz (not cached)".to_string()),
            ("info", "downloaded aria2-static.tar.gz".to_string()),
            (
                "ok",
                "installed XIVLauncher 6.3.1.2 into /home/alice/.local/share/xivlauncher-core"
                    .to_string()
            ),
        ]
    );
}

#[test]
fn mismatch_outcome_is_a_warning() {
    let ctx = sample_context(TargetKind::Local);
    let intent = InstallIntent::new(TargetKind::Local, Action::Install);
    let lines = format_install_outcome(
        &ctx,
        &intent,
        &InstallOutcome::ReleaseMismatch {
            installed: ReleaseLine::RankynBass,
            requested: ReleaseLine::Official,
        },
    );

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].0, "warn");
    assert!(lines[0].1.contains("XIVLauncher-RB (RankynBass)"));
    assert!(lines[0].1.contains("--force"));
}

#[test]
fn steam_uninstall_mentions_restart() {
    let ctx = sample_context(TargetKind::Steam);
    let lines = format_uninstall_outcome(
        &ctx,
        UninstallOutcome {
            steam_restart_required: true,
        },
    );
    assert_eq!(lines.len(), 2);
    assert!(lines[1].1.contains("restart Steam"));
}

#[test]
fn clear_outcome_reports_nothing_to_clear() {
    assert_eq!(
        format_clear_outcome(ClearOutcome::NothingToClear, "/home/alice/.cache/xlcore-installer"),
        (
            "info",
            "nothing to clear at /home/alice/.cache/xlcore-installer".to_string()
        )
    );
}

#[test]
fn resolve_output_style_follows_stdout_tty() {
    assert_eq!(resolve_output_style(true), OutputStyle::Rich);
    assert_eq!(resolve_output_style(false), OutputStyle::Plain);
}

#[test]
fn render_status_line_plain_is_unadorned() {
    assert_eq!(
        render_status_line(OutputStyle::Plain, "ok", "installed XIVLauncher 6.3.1.2"),
        "installed XIVLauncher 6.3.1.2"
    );
}

#[test]
fn render_status_line_rich_includes_badges() {
    assert_eq!(
        render_status_line(OutputStyle::Rich, "ok", "installed XIVLauncher 6.3.1.2"),
        "[OK] installed XIVLauncher 6.3.1.2"
    );
    assert_eq!(
        render_status_line(OutputStyle::Rich, "warn", "restart Steam"),
        "[WARN] restart Steam"
    );
    assert_eq!(
        render_status_line(OutputStyle::Rich, "info", "using cached XIVLauncher.tar.gz"),
        "[..] using cached XIVLauncher.tar.gz"
    );
}
