use crate::domain::tag::{DEFAULT_MESSAGE_TEMPLATE, DEFAULT_TAG_PATTERN};
use crate::domain::{MessageTemplate, TagPattern};
use crate::error::{Result, VersionUpError};
use crate::resolver::VersionOverrides;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project-level configuration file
pub const CONFIG_FILE_NAME: &str = "versionup.toml";

/// Contents of a `versionup.toml` file.
///
/// Every key is optional; missing keys fall back to the React Native project layout.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub release: ReleaseSection,

    #[serde(default)]
    pub paths: PathsConfig,
}

fn default_message() -> String {
    DEFAULT_MESSAGE_TEMPLATE.to_string()
}

fn default_tag_pattern() -> String {
    DEFAULT_TAG_PATTERN.to_string()
}

/// Commit and tag naming.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseSection {
    #[serde(default = "default_message")]
    pub message: String,

    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,
}

impl Default for ReleaseSection {
    fn default() -> Self {
        ReleaseSection {
            message: default_message(),
            tag_pattern: default_tag_pattern(),
        }
    }
}

fn default_package_path() -> PathBuf {
    PathBuf::from("package.json")
}

fn default_gradle_path() -> PathBuf {
    PathBuf::from("android/app/build.gradle")
}

/// Manifest locations, relative to the project root unless absolute.
///
/// An empty `plists` list means `ios/<package name>/Info.plist`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PathsConfig {
    #[serde(default = "default_package_path")]
    pub package: PathBuf,

    #[serde(default)]
    pub plists: Vec<PathBuf>,

    #[serde(default = "default_gradle_path")]
    pub gradle: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            package: default_package_path(),
            plists: Vec::new(),
            gradle: default_gradle_path(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versionup.toml` in the project root
/// 3. `.versionup.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err(Config)` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>, root: &Path) -> Result<Config> {
    let path = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if root.join(CONFIG_FILE_NAME).exists() {
        root.join(CONFIG_FILE_NAME)
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_config = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if user_config.exists() {
            user_config
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        VersionUpError::config(format!("cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&config_str)
        .map_err(|e| VersionUpError::config(format!("cannot parse {}: {}", path.display(), e)))
}

/// Everything one release run needs, assembled once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseConfig {
    /// Project root that relative manifest paths resolve against
    pub root: PathBuf,
    pub package_path: PathBuf,
    /// Empty means the default `ios/<package name>/Info.plist`
    pub plist_paths: Vec<PathBuf>,
    pub gradle_path: PathBuf,
    pub overrides: VersionOverrides,
    pub message: MessageTemplate,
    pub tag_pattern: TagPattern,
    /// Answer yes to both confirmations
    pub assume_yes: bool,
    /// Present the plan and stop before writing anything
    pub dry_run: bool,
}

impl ReleaseConfig {
    /// Build a release configuration for `root` from a loaded config file
    pub fn new(root: impl Into<PathBuf>, config: &Config) -> Self {
        ReleaseConfig {
            root: root.into(),
            package_path: config.paths.package.clone(),
            plist_paths: config.paths.plists.clone(),
            gradle_path: config.paths.gradle.clone(),
            overrides: VersionOverrides::default(),
            message: MessageTemplate::new(config.release.message.clone()),
            tag_pattern: TagPattern::new(config.release.tag_pattern.clone()),
            assume_yes: false,
            dry_run: false,
        }
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Absolute location of the package descriptor
    pub fn package_location(&self) -> PathBuf {
        self.resolve_path(&self.package_path)
    }

    /// Resolve every manifest location, deriving the default plist path from the package name.
    ///
    /// # Errors
    /// * `ManifestRead` - No plist paths configured and the package has no `name`
    pub fn manifest_locations(&self, package_name: Option<&str>) -> Result<ManifestLocations> {
        let package = self.package_location();

        let plists = if self.plist_paths.is_empty() {
            let name = package_name.ok_or_else(|| {
                VersionUpError::manifest_read(
                    &package,
                    "\"name\" field is required to locate ios/<name>/Info.plist",
                )
            })?;
            vec![self.root.join("ios").join(name).join("Info.plist")]
        } else {
            self.plist_paths.iter().map(|p| self.resolve_path(p)).collect()
        };

        Ok(ManifestLocations {
            package,
            plists,
            gradle: self.resolve_path(&self.gradle_path),
        })
    }
}

/// Resolved manifest paths for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestLocations {
    pub package: PathBuf,
    /// Never empty; the first entry supplies the current build number
    pub plists: Vec<PathBuf>,
    pub gradle: PathBuf,
}

impl ManifestLocations {
    /// All files in mutation order: package, every plist, gradle
    pub fn all(&self) -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(self.plists.len() + 2);
        paths.push(self.package.clone());
        paths.extend(self.plists.iter().cloned());
        paths.push(self.gradle.clone());
        paths
    }
}
