use super::{compile, splice, ManifestMutator};
use crate::domain::ReleaseState;
use crate::error::{Result, VersionUpError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const VERSION_PATTERN: &str = r#""version"\s*:\s*"(?P<value>[^"]*)""#;

/// Fields of `package.json` the release flow cares about
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageInfo {
    #[serde(default)]
    pub name: Option<String>,
    pub version: String,
}

/// Reads name and version from a JSON package descriptor.
///
/// # Errors
/// * `ManifestRead` - File missing, not valid JSON, or without a string `version`
pub fn read_package_info(path: &Path) -> Result<PackageInfo> {
    let content =
        fs::read_to_string(path).map_err(|e| VersionUpError::manifest_read(path, e.to_string()))?;

    serde_json::from_str::<PackageInfo>(&content)
        .map_err(|e| VersionUpError::manifest_read(path, e.to_string()))
}

/// Object nesting depth at byte `offset`, or `None` when `offset` falls inside a string
fn nesting_at(content: &str, offset: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for &byte in &content.as_bytes()[..offset] {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => depth += 1,
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    (!in_string).then_some(depth)
}

/// Rewrites the top-level `"version"` string of a package descriptor.
///
/// `"version"` keys of nested objects (configs, engines, overrides) are left alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct PackageMutator;

impl ManifestMutator for PackageMutator {
    fn label(&self) -> &'static str {
        "package.json"
    }

    fn patch(&self, content: &str, state: &ReleaseState) -> std::result::Result<String, String> {
        let pattern = compile(VERSION_PATTERN)?;
        let span = pattern
            .captures_iter(content)
            .find(|captures| {
                captures
                    .get(0)
                    .is_some_and(|m| nesting_at(content, m.start()) == Some(1))
            })
            .and_then(|captures| captures.name("value"))
            .ok_or_else(|| "\"version\" field not found".to_string())?;

        Ok(splice(content, span.range(), &state.version_string()))
    }
}
