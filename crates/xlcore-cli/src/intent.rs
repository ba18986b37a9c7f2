use anyhow::{anyhow, Context, Result};
use xlcore_core::{validate_version, Action, InstallIntent, ReleaseLine, TargetKind};

use crate::Cli;

/// Turns parsed flags into the single intent every later stage works from.
pub(crate) fn resolve_intent(cli: &Cli) -> Result<InstallIntent> {
    let selected = [
        (cli.local, TargetKind::Local),
        (cli.custom.is_some(), TargetKind::Custom),
        (cli.steam, TargetKind::Steam),
        (cli.flatpak, TargetKind::Flatpak),
        (cli.update, TargetKind::Update),
        (cli.clear, TargetKind::Clear),
    ]
    .into_iter()
    .filter_map(|(set, kind)| set.then_some(kind))
    .collect::<Vec<_>>();

    let target = match selected.as_slice() {
        [] => TargetKind::Local,
        [kind] => *kind,
        kinds => {
            return Err(anyhow!(
                "unrecognized install target: conflicting selections {}",
                kinds
                    .iter()
                    .map(|kind| kind.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        }
    };

    if let Some(tag) = &cli.tag {
        validate_version(tag).with_context(|| format!("invalid --tag value {tag:?}"))?;
    }

    let action = if cli.info {
        Action::Info
    } else if cli.uninstall {
        Action::Uninstall
    } else {
        Action::Install
    };

    Ok(InstallIntent {
        target,
        custom_path: cli.custom.clone(),
        action,
        release: if cli.rb {
            ReleaseLine::RankynBass
        } else {
            ReleaseLine::Official
        },
        force: cli.force,
        always_download: cli.download,
        tag: cli.tag.clone(),
    })
}
