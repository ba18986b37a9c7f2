use std::fmt;

pub const HELPER_ARCHIVE_URL: &str =
    "https://github.com/rankynbass/aria2-static-build/releases/latest/download/aria2-static.tar.gz";
pub const HELPER_ARCHIVE_FILE_NAME: &str = "aria2-static.tar.gz";

const ARCHIVE_ASSET_NAME: &str = "XIVLauncher.Core.tar.gz";

/// One of the two upstream sources the launcher can be installed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseLine {
    Official,
    RankynBass,
}

impl ReleaseLine {
    pub const ALL: [ReleaseLine; 2] = [ReleaseLine::Official, ReleaseLine::RankynBass];

    pub fn title(self) -> &'static str {
        match self {
            Self::Official => "XIVLauncher",
            Self::RankynBass => "XIVLauncher-RB",
        }
    }

    /// Literal written as the second line of every version record.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Official => "Official",
            Self::RankynBass => "RankynBass",
        }
    }

    pub fn version_url(self) -> &'static str {
        match self {
            Self::Official => "https://raw.githubusercontent.com/goatcorp/xlcore-distrib/main/version",
            Self::RankynBass => {
                "https://raw.githubusercontent.com/rankynbass/XIVLauncher.Core/RB-patched/version"
            }
        }
    }

    fn releases_url(self) -> &'static str {
        match self {
            Self::Official => "https://github.com/goatcorp/XIVLauncher.Core/releases",
            Self::RankynBass => "https://github.com/rankynbass/XIVLauncher.Core/releases",
        }
    }

    /// Archive of the newest published release.
    pub fn archive_url(self) -> String {
        self.archive_url_for(None)
    }

    /// Archive of the release published under `tag`, or of the newest one.
    pub fn archive_url_for(self, tag: Option<&str>) -> String {
        match tag {
            Some(tag) => format!("{}/download/{tag}/{ARCHIVE_ASSET_NAME}", self.releases_url()),
            None => format!("{}/latest/download/{ARCHIVE_ASSET_NAME}", self.releases_url()),
        }
    }

    pub fn archive_file_name(self) -> String {
        format!("{}.tar.gz", self.title())
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|line| line.tag() == tag)
    }
}

impl fmt::Display for ReleaseLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title(), self.tag())
    }
}
