/// A dotted `major.minor[.release[.patch]]` version, missing trailing
/// components defaulting to zero.
///
/// Field order matters: the derived `Ord` compares lexicographically from
/// `major` down to `patch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionTuple {
    pub major: u64,
    pub minor: u64,
    pub release: u64,
    pub patch: u64,
}

impl VersionTuple {
    pub fn parse(input: &str) -> Option<Self> {
        let mut components = [0_u64; 4];
        let mut count = 0;
        for part in input.split('.') {
            if count == components.len() {
                return None;
            }
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            components[count] = part.parse().ok()?;
            count += 1;
        }
        if count < 2 {
            return None;
        }

        let [major, minor, release, patch] = components;
        Some(Self {
            major,
            minor,
            release,
            patch,
        })
    }
}

/// Returns true when `latest` is a parseable version strictly newer than
/// `current`.
///
/// An unparseable `latest` never triggers an update; an unparseable
/// `current` (including an empty string for "not installed") always does.
pub fn needs_update(latest: &str, current: &str) -> bool {
    let Some(latest) = VersionTuple::parse(latest) else {
        return false;
    };
    let Some(current) = VersionTuple::parse(current) else {
        return true;
    };
    latest > current
}
