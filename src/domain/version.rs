use semver::Version;
use std::fmt;

/// A minor version line: all releases sharing (major, minor), differing
/// only by patch number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MinorLine {
    pub major: u64,
    pub minor: u64,
}

impl MinorLine {
    /// Create a new minor line
    pub fn new(major: u64, minor: u64) -> Self {
        MinorLine { major, minor }
    }

    /// Extract the minor line of a parsed version
    pub fn of(version: &Version) -> Self {
        MinorLine {
            major: version.major,
            minor: version.minor,
        }
    }
}

impl fmt::Display for MinorLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
