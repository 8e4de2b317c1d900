//! Version-bearing project manifests
//!
//! Each manifest format gets a reader for the current state and a mutator that
//! patches the version/build values in place. Mutators are text-level: they
//! locate a known key pattern and splice a new value into its value span, so
//! everything else in the file (formatting, comments, unrelated keys, arbitrary
//! build-script logic) is left byte-for-byte intact.
//!
//! - [package]: JSON package descriptor (`package.json`)
//! - [plist]: iOS property list (`Info.plist`)
//! - [gradle]: Android build script (`build.gradle`)

pub mod gradle;
pub mod package;
pub mod plist;

pub use gradle::GradleMutator;
pub use package::{read_package_info, PackageInfo, PackageMutator};
pub use plist::{read_build_number, PlistMutator};

use crate::domain::ReleaseState;
use crate::error::{Result, VersionUpError};
use regex::Regex;
use std::fs;
use std::ops::Range;
use std::path::Path;

/// In-place patcher for one manifest format
pub trait ManifestMutator {
    /// Human readable name of the manifest kind (e.g. "package.json")
    fn label(&self) -> &'static str;

    /// Patch the manifest text for the given release.
    ///
    /// # Returns
    /// * `Ok(String)` - The patched text
    /// * `Err(String)` - Reason the expected pattern could not be found
    fn patch(&self, content: &str, state: &ReleaseState) -> std::result::Result<String, String>;

    /// Read, patch and write back the manifest at `path`.
    ///
    /// # Errors
    /// * `ManifestRead` - The file could not be read
    /// * `ManifestWrite` - A target pattern is missing or the file could not be written
    fn apply(&self, path: &Path, state: &ReleaseState) -> Result<()> {
        let content = fs::read_to_string(path)
            .map_err(|e| VersionUpError::manifest_read(path, e.to_string()))?;

        let patched = self
            .patch(&content, state)
            .map_err(|reason| VersionUpError::manifest_write(path, reason))?;

        fs::write(path, patched).map_err(|e| VersionUpError::manifest_write(path, e.to_string()))
    }
}

/// Compile one of the fixed manifest patterns
pub(crate) fn compile(pattern: &str) -> std::result::Result<Regex, String> {
    Regex::new(pattern).map_err(|e| format!("invalid manifest pattern: {}", e))
}

/// Replace the span captured as `value` by the first match of `pattern`.
///
/// Returns `None` when the pattern does not occur in `content`.
pub(crate) fn replace_value_span(content: &str, pattern: &Regex, value: &str) -> Option<String> {
    let captures = pattern.captures(content)?;
    let span = captures.name("value")?;
    Some(splice(content, span.range(), value))
}

/// Replace `span` of `content` with `value`
pub(crate) fn splice(content: &str, span: Range<usize>, value: &str) -> String {
    let mut patched = String::with_capacity(content.len() + value.len());
    patched.push_str(&content[..span.start]);
    patched.push_str(value);
    patched.push_str(&content[span.end..]);
    patched
}
