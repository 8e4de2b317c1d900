use crate::domain::VersionTriple;
use crate::error::{Result, VersionUpError};

/// Android versionCode for a version and build.
///
/// Encoded as `MMmmppbb`-style decimal: `1_000_000 * major + 10_000 * minor + 100 * patch + build`.
/// Ordering only holds while minor and patch stay below 100 and build below 100.
/// Returns `None` when the encoding does not fit in a `u64`.
pub fn version_code(version: &VersionTriple, build: u64) -> Option<u64> {
    version
        .major
        .checked_mul(1_000_000)?
        .checked_add(version.minor.checked_mul(10_000)?)?
        .checked_add(version.patch.checked_mul(100)?)?
        .checked_add(build)
}

/// Whether `version_code` can no longer keep releases ordered
pub fn version_code_overflows(version: &VersionTriple, build: u64) -> bool {
    version.minor >= 100 || version.patch >= 100 || build >= 100
}

/// Everything computed for one release; built once by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseState {
    pub current_version: String,
    pub current_build: u64,
    pub target_version: VersionTriple,
    pub target_build: u64,
    pub target_version_code: u64,
}

impl ReleaseState {
    /// # Errors
    /// * `VersionOutOfRange` - The versionCode encoding overflows `u64`
    pub fn new(
        current_version: impl Into<String>,
        current_build: u64,
        target_version: VersionTriple,
        target_build: u64,
    ) -> Result<Self> {
        let target_version_code = version_code(&target_version, target_build).ok_or_else(|| {
            VersionUpError::out_of_range(format!(
                "versionCode for {} ({}) does not fit in 64 bits",
                target_version, target_build
            ))
        })?;

        Ok(ReleaseState {
            current_version: current_version.into(),
            current_build,
            target_version,
            target_build,
            target_version_code,
        })
    }

    /// Dotted target version, e.g. "1.1.0"
    pub fn version_string(&self) -> String {
        self.target_version.to_string()
    }

    /// A new version line gets tagged; a rebuild of the same version does not.
    pub fn version_changed(&self) -> bool {
        self.version_string() != self.current_version
    }
}
