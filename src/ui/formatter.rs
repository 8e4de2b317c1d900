//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.
//! Every function takes an indentation level; each level indents by two spaces.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::config::ManifestLocations;
use crate::domain::ReleaseState;

fn indent(level: usize) -> String {
    "  ".repeat(level)
}

/// Plain informational line.
pub fn format_info(message: &str, level: usize) -> String {
    format!("{}{}", indent(level), message)
}

/// Format and print an informational message.
pub fn display_info(message: &str, level: usize) {
    println!("{}", format_info(message, level));
}

/// Format and print a notice (section heading) in bold cyan.
pub fn display_notice(message: &str, level: usize) {
    println!("{}{}", indent(level), style(message).cyan().bold());
}

/// Format and print a warning in yellow.
pub fn display_warning(message: &str, level: usize) {
    println!("{}{}", indent(level), style(message).yellow());
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str, level: usize) {
    println!("{}{} {}", indent(level), style("✓").green(), message);
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a separator line.
pub fn display_line() {
    println!();
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    if warning.is_informational() {
        display_warning(&format!("{}.", warning), 0);
    } else {
        eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
    }
}

/// Lines describing which files will change and how.
pub fn format_plan(state: &ReleaseState, locations: &ManifestLocations) -> Vec<String> {
    let plists: Vec<String> = locations
        .plists
        .iter()
        .map(|p| p.display().to_string())
        .collect();

    vec![
        format!("- package.json ({});", locations.package.display()),
        format!("- ios project ({});", plists.join(", ")),
        format!("- android project ({}).", locations.gradle.display()),
        format!("- from: {} ({});", state.current_version, state.current_build),
        format!(
            "- to: iOS version string: {}, bundle version: {}.",
            state.version_string(),
            state.target_build
        ),
        format!(
            "- to: Android versionName: {}, versionCode: {}.",
            state.version_string(),
            state.target_version_code
        ),
    ]
}

/// Display the computed release plan.
pub fn display_plan(state: &ReleaseState, locations: &ManifestLocations) {
    let lines = format_plan(state, locations);

    display_notice("\nI'm going to increase the version in:", 0);
    for line in &lines[..3] {
        display_info(line, 1);
    }

    display_notice("\nThe version will be changed:", 0);
    for line in &lines[3..] {
        display_info(line, 1);
    }
}

/// Display the commit (and tag) about to be created.
pub fn display_commit_plan(message: &str, tag: Option<&str>) {
    display_notice("\nI'm ready to cooperate with the git!", 0);
    display_info("I want to make a commit with message:", 1);
    display_info(&format!("\"{}\"", message), 2);
    if let Some(tag) = tag {
        display_info("I want to add a tag:", 1);
        display_info(&format!("\"{}\"", tag), 2);
    }
}
