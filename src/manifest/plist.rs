use super::{compile, replace_value_span, ManifestMutator};
use crate::domain::ReleaseState;
use crate::error::{Result, VersionUpError};
use std::fs;
use std::path::Path;

/// Marketing version key (`1.2.3`)
pub const SHORT_VERSION_KEY: &str = "CFBundleShortVersionString";
/// Build number key (`42`)
pub const BUNDLE_VERSION_KEY: &str = "CFBundleVersion";

fn key_pattern(key: &str) -> String {
    format!(
        r"<key>{}</key>\s*<string>(?P<value>[^<]*)</string>",
        regex::escape(key)
    )
}

/// Reads the current build number (`CFBundleVersion`) from a plist file.
///
/// # Errors
/// * `ManifestRead` - File missing, key absent, or value not an integer
pub fn read_build_number(path: &Path) -> Result<u64> {
    let content =
        fs::read_to_string(path).map_err(|e| VersionUpError::manifest_read(path, e.to_string()))?;

    let pattern = compile(&key_pattern(BUNDLE_VERSION_KEY))
        .map_err(|reason| VersionUpError::manifest_read(path, reason))?;

    let value = pattern
        .captures(&content)
        .and_then(|c| c.name("value"))
        .map(|m| m.as_str().trim())
        .ok_or_else(|| {
            VersionUpError::manifest_read(path, format!("{} not found", BUNDLE_VERSION_KEY))
        })?;

    value.parse::<u64>().map_err(|_| {
        VersionUpError::manifest_read(
            path,
            format!("{} value '{}' is not an integer", BUNDLE_VERSION_KEY, value),
        )
    })
}

/// Rewrites marketing version and build number of an `Info.plist`
#[derive(Debug, Default, Clone, Copy)]
pub struct PlistMutator;

impl ManifestMutator for PlistMutator {
    fn label(&self) -> &'static str {
        "Info.plist"
    }

    fn patch(&self, content: &str, state: &ReleaseState) -> std::result::Result<String, String> {
        let short_version = compile(&key_pattern(SHORT_VERSION_KEY))?;
        let bundle_version = compile(&key_pattern(BUNDLE_VERSION_KEY))?;

        let patched = replace_value_span(content, &short_version, &state.version_string())
            .ok_or_else(|| format!("{} not found", SHORT_VERSION_KEY))?;

        replace_value_span(&patched, &bundle_version, &state.target_build.to_string())
            .ok_or_else(|| format!("{} not found", BUNDLE_VERSION_KEY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VersionTriple;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const PLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>CFBundleDisplayName</key>
	<string>AwesomeApp</string>
	<key>CFBundleShortVersionString</key>
	<string>1.0.0</string>
	<key>CFBundleSignature</key>
	<string>????</string>
	<key>CFBundleVersion</key>
	<string>3</string>
</dict>
</plist>
"#;

    fn plist_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_build_number() {
        let file = plist_file(PLIST);
        assert_eq!(read_build_number(file.path()).unwrap(), 3);
    }

    #[test]
    fn test_read_build_number_missing_key() {
        let file = plist_file("<plist><dict></dict></plist>");
        let err = read_build_number(file.path()).unwrap_err();
        assert!(err.to_string().contains("CFBundleVersion not found"));
    }

    #[test]
    fn test_read_build_number_not_integer() {
        let file = plist_file(
            "<dict><key>CFBundleVersion</key><string>$(CURRENT_PROJECT_VERSION)</string></dict>",
        );
        let err = read_build_number(file.path()).unwrap_err();
        assert!(matches!(err, VersionUpError::ManifestRead { .. }));
        assert!(err.to_string().contains("not an integer"));
    }

    #[test]
    fn test_patch_changes_only_the_two_values() {
        let state = ReleaseState::new("1.0.0", 3, VersionTriple::new(1, 1, 0), 1).unwrap();
        let patched = PlistMutator.patch(PLIST, &state).unwrap();

        let expected = PLIST
            .replace("<string>1.0.0</string>", "<string>1.1.0</string>")
            .replace(
                "<key>CFBundleVersion</key>\n\t<string>3</string>",
                "<key>CFBundleVersion</key>\n\t<string>1</string>",
            );
        assert_eq!(patched, expected);
        assert!(patched.contains("<string>????</string>"));
    }

    #[test]
    fn test_patch_missing_short_version() {
        let state = ReleaseState::new("1.0.0", 3, VersionTriple::new(1, 1, 0), 1).unwrap();
        let content = "<dict><key>CFBundleVersion</key><string>3</string></dict>";
        let err = PlistMutator.patch(content, &state).unwrap_err();
        assert!(err.contains(SHORT_VERSION_KEY));
    }

    #[test]
    fn test_patch_missing_bundle_version() {
        let state = ReleaseState::new("1.0.0", 3, VersionTriple::new(1, 1, 0), 1).unwrap();
        let content = "<dict><key>CFBundleShortVersionString</key><string>1.0.0</string></dict>";
        let err = PlistMutator.patch(content, &state).unwrap_err();
        assert!(err.contains(BUNDLE_VERSION_KEY));
    }

    #[test]
    fn test_apply_round_trip_reads_new_build() {
        let file = plist_file(PLIST);
        let state = ReleaseState::new("1.0.0", 3, VersionTriple::new(1, 0, 0), 4).unwrap();

        PlistMutator.apply(file.path(), &state).unwrap();
        assert_eq!(read_build_number(file.path()).unwrap(), 4);
    }
}
