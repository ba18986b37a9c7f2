use std::fmt;
use std::path::PathBuf;

use crate::ReleaseLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Local,
    Custom,
    Steam,
    Flatpak,
    Update,
    Clear,
}

impl TargetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Custom => "custom",
            Self::Steam => "steam",
            Self::Flatpak => "flatpak",
            Self::Update => "update",
            Self::Clear => "clear",
        }
    }

    /// Targets that land in a Steam `compatibilitytools.d` slot.
    pub fn is_steam_slot(self) -> bool {
        matches!(self, Self::Steam | Self::Flatpak)
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Install,
    Uninstall,
    Info,
}

/// What the user asked for, resolved once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallIntent {
    pub target: TargetKind,
    pub custom_path: Option<PathBuf>,
    pub action: Action,
    pub release: ReleaseLine,
    pub force: bool,
    pub always_download: bool,
    pub tag: Option<String>,
}

impl InstallIntent {
    pub fn new(target: TargetKind, action: Action) -> Self {
        Self {
            target,
            custom_path: None,
            action,
            release: ReleaseLine::Official,
            force: false,
            always_download: false,
            tag: None,
        }
    }
}
