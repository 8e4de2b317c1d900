use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use mobile_version_up::cli::run_release_workflow;
use mobile_version_up::config::{self, ReleaseConfig};
use mobile_version_up::domain::MessageTemplate;
use mobile_version_up::git::Git2Repository;
use mobile_version_up::resolver::VersionOverrides;
use mobile_version_up::ui::{self, AssumeYes, TerminalPrompter};

#[derive(clap::Parser)]
#[command(
    name = "mobile-version-up",
    version,
    about = "Bump version and build number of a React Native app for iOS and Android"
)]
struct Args {
    #[arg(
        long,
        num_args = 0..=1,
        value_name = "N",
        help = "Bump major version, or set it to N"
    )]
    major: Option<Option<String>>,

    #[arg(
        long,
        num_args = 0..=1,
        value_name = "N",
        help = "Bump minor version, or set it to N"
    )]
    minor: Option<Option<String>>,

    #[arg(
        long,
        num_args = 0..=1,
        value_name = "N",
        help = "Bump patch version, or set it to N"
    )]
    patch: Option<Option<String>>,

    #[arg(
        short,
        long,
        help = "Commit message template (placeholders: ${version}, ${build})"
    )]
    message: Option<String>,

    #[arg(long, help = "Path to package.json")]
    path_to_package: Option<PathBuf>,

    #[arg(long, help = "Path to an Info.plist (repeat for several targets)")]
    path_to_plist: Vec<PathBuf>,

    #[arg(long, help = "Path to android/app/build.gradle")]
    path_to_gradle: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Skip confirmation prompts")]
    yes: bool,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,
}

/// Split a `--major [N]` style flag into explicit value and bump request
fn split_override(flag: Option<Option<String>>) -> (Option<String>, bool) {
    match flag {
        Some(Some(value)) => (Some(value), false),
        Some(None) => (None, true),
        None => (None, false),
    }
}

fn release_config(args: Args, root: PathBuf, file_config: &config::Config) -> ReleaseConfig {
    let mut release = ReleaseConfig::new(root, file_config);

    let (major, bump_major) = split_override(args.major);
    let (minor, bump_minor) = split_override(args.minor);
    let (patch, bump_patch) = split_override(args.patch);
    release.overrides = VersionOverrides {
        major,
        minor,
        patch,
        bump_major,
        bump_minor,
        bump_patch,
    };

    if let Some(message) = args.message {
        release.message = MessageTemplate::new(message);
    }
    if let Some(package) = args.path_to_package {
        release.package_path = package;
    }
    if !args.path_to_plist.is_empty() {
        release.plist_paths = args.path_to_plist;
    }
    if let Some(gradle) = args.path_to_gradle {
        release.gradle_path = gradle;
    }

    release.assume_yes = args.yes;
    release.dry_run = args.dry_run;
    release
}

fn main() -> Result<()> {
    let args = Args::parse();
    let root = std::env::current_dir()?;

    // Load configuration
    let file_config = match config::load_config(args.config.as_deref(), &root) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let release = release_config(args, root, &file_config);
    let open_repo = |root: &Path| Git2Repository::open(root);

    let result = if release.assume_yes {
        run_release_workflow(&release, &mut AssumeYes, open_repo)
    } else {
        run_release_workflow(&release, &mut TerminalPrompter, open_repo)
    };

    match result {
        Ok(_) => Ok(()),
        Err(e) if e.is_cancellation() => {
            ui::display_line();
            ui::display_warning(&e.to_string(), 0);
            Ok(())
        }
        Err(e) => {
            ui::display_line();
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
