mod intent;
mod record;
mod release;
mod version;

pub use intent::{Action, InstallIntent, TargetKind};
pub use record::{validate_version, VersionRecord};
pub use release::{ReleaseLine, HELPER_ARCHIVE_FILE_NAME, HELPER_ARCHIVE_URL};
pub use version::{needs_update, VersionTuple};

#[cfg(test)]
mod tests;
