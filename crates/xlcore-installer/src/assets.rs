//! Resource files shipped inside the installer binary.

pub struct Asset {
    pub file_name: &'static str,
    pub contents: &'static str,
    pub executable: bool,
}

pub const PLACEHOLDER_TITLE: &str = "@@TITLE@@";
pub const PLACEHOLDER_EXEC: &str = "@@EXEC@@";
pub const PLACEHOLDER_ICON: &str = "@@ICON@@";
pub const PLACEHOLDER_INSTALL_DIR: &str = "@@INSTALL_DIR@@";

pub const LICENSE: Asset = Asset {
    file_name: "LICENSE",
    contents: include_str!("../assets/LICENSE"),
    executable: false,
};

pub const COPYING: Asset = Asset {
    file_name: "COPYING",
    contents: include_str!("../assets/COPYING"),
    executable: false,
};

pub const STEAM_FILES: [Asset; 3] = [
    Asset {
        file_name: "compatibilitytool.vdf",
        contents: include_str!("../assets/compatibilitytool.vdf"),
        executable: false,
    },
    Asset {
        file_name: "toolmanifest.vdf",
        contents: include_str!("../assets/toolmanifest.vdf"),
        executable: false,
    },
    Asset {
        file_name: "xlcore",
        contents: include_str!("../assets/xlcore"),
        executable: true,
    },
];

pub const LAUNCH_SCRIPT: Asset = Asset {
    file_name: "xivlauncher-core",
    contents: include_str!("../assets/xivlauncher-core"),
    executable: true,
};

pub const ICON: Asset = Asset {
    file_name: "xivlauncher.svg",
    contents: include_str!("../assets/xivlauncher.svg"),
    executable: false,
};

pub const DESKTOP_ENTRY_TEMPLATE: &str = include_str!("../assets/XIVLauncher.desktop");
