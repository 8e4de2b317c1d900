#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use mobile_version_up::config::{Config, ReleaseConfig};
use tempfile::TempDir;

pub const FIXTURE_PROJECT: &str = "tests/fixtures/rn_project";

fn copy_dir(from: &Path, to: &Path) {
    fs::create_dir_all(to).expect("Could not create fixture dir");
    for entry in fs::read_dir(from).expect("Could not read fixture dir") {
        let entry = entry.expect("Could not read fixture entry");
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).expect("Could not copy fixture file");
        }
    }
}

/// Fresh copy of the sample React Native project
pub fn setup_project() -> TempDir {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    copy_dir(Path::new(FIXTURE_PROJECT), temp_dir.path());
    temp_dir
}

pub fn release_config(root: &Path) -> ReleaseConfig {
    ReleaseConfig::new(root, &Config::default())
}

pub fn package_path(root: &Path) -> PathBuf {
    root.join("package.json")
}

pub fn plist_path(root: &Path) -> PathBuf {
    root.join("ios/AwesomeApp/Info.plist")
}

pub fn gradle_path(root: &Path) -> PathBuf {
    root.join("android/app/build.gradle")
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("Could not read file")
}

/// Contents of every manifest, in mutation order
pub fn snapshot(root: &Path) -> Vec<String> {
    vec![
        read(&package_path(root)),
        read(&plist_path(root)),
        read(&gradle_path(root)),
    ]
}
