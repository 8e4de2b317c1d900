use super::{compile, replace_value_span, ManifestMutator};
use crate::domain::ReleaseState;

// Groovy (`versionName "1.0"`) and Kotlin DSL (`versionName = "1.0"`) forms, either quote style.
// Only statements that open a line count; comments and expressions mentioning the names do not.
const VERSION_NAME_PATTERN: &str =
    r#"(?m)^[ \t]*versionName[ \t]*=?[ \t]*["'](?P<value>[^"'\r\n]*)["']"#;
const VERSION_CODE_PATTERN: &str = r"(?m)^[ \t]*versionCode[ \t]*=?[ \t]*(?P<value>\d+)";

/// Rewrites `versionName` and `versionCode` of an Android build script
#[derive(Debug, Default, Clone, Copy)]
pub struct GradleMutator;

impl ManifestMutator for GradleMutator {
    fn label(&self) -> &'static str {
        "build.gradle"
    }

    fn patch(&self, content: &str, state: &ReleaseState) -> std::result::Result<String, String> {
        let version_name = compile(VERSION_NAME_PATTERN)?;
        let version_code = compile(VERSION_CODE_PATTERN)?;

        let patched = replace_value_span(content, &version_name, &state.version_string())
            .ok_or_else(|| "versionName not found".to_string())?;

        replace_value_span(
            &patched,
            &version_code,
            &state.target_version_code.to_string(),
        )
        .ok_or_else(|| "versionCode not found".to_string())
    }
}
