/// Default commit message used when the operator does not supply one
pub const DEFAULT_MESSAGE_TEMPLATE: &str = "release ${version} (${build})";

/// Default tag naming pattern
pub const DEFAULT_TAG_PATTERN: &str = "v{version}";

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPattern {
    pub pattern: String,
}

impl TagPattern {
    /// Create a new tag pattern
    pub fn new(pattern: impl Into<String>) -> Self {
        TagPattern {
            pattern: pattern.into(),
        }
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version="1.2.3" -> "v1.2.3"
    pub fn format(&self, version: &str) -> String {
        self.pattern.replace("{version}", version)
    }
}

impl Default for TagPattern {
    fn default() -> Self {
        TagPattern::new(DEFAULT_TAG_PATTERN)
    }
}

/// Commit message template with `${version}` and `${build}` placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    pub template: String,
}

impl MessageTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        MessageTemplate {
            template: template.into(),
        }
    }

    /// Substitute the first `${build}`, then the first `${version}`.
    pub fn render(&self, version: &str, build: u64) -> String {
        self.template
            .replacen("${build}", &build.to_string(), 1)
            .replacen("${version}", version, 1)
    }
}

impl Default for MessageTemplate {
    fn default() -> Self {
        MessageTemplate::new(DEFAULT_MESSAGE_TEMPLATE)
    }
}
