use std::fmt;

/// Warnings raised while resolving the next release.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Current version string is not a plain `major.minor.patch` triple
    NonStandardVersion { version: String },
    /// Version changed, so the build number starts over
    BuildReset,
    /// Version unchanged, so the previous build number is incremented
    BuildIncremented { previous: u64 },
    /// A component no longer fits its digit budget in the versionCode encoding
    VersionCodeOverflow { version: String, build: u64 },
}

impl BoundaryWarning {
    /// Whether the warning only narrates expected behaviour.
    pub fn is_informational(&self) -> bool {
        matches!(
            self,
            BoundaryWarning::BuildReset | BoundaryWarning::BuildIncremented { .. }
        )
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NonStandardVersion { version } => {
                write!(f, "I can't understand format of the version \"{}\"", version)
            }
            BoundaryWarning::BuildReset => {
                write!(f, "New version, build number will be reset to 1")
            }
            BoundaryWarning::BuildIncremented { previous } => write!(
                f,
                "Same as current version, build number will be increased by 1 (was {})",
                previous
            ),
            BoundaryWarning::VersionCodeOverflow { version, build } => write!(
                f,
                "versionCode for {} ({}) overflows its digit budget: minor, patch and build each get two digits, \
                 so a value of 100 or more spills into the next component (build 100 collides with patch) \
                 and the code may not sort after earlier releases",
                version, build
            ),
        }
    }
}
