//! Release workflow orchestration
//!
//! The workflow is a chain of typed stages. Each transition consumes the
//! previous stage and returns the next one or a [VersionUpError]:
//!
//! ```text
//! ReleaseConfig --resolve_release--> ResolvedRelease --confirm--> ConfirmedRelease
//!   --apply--> MutatedRelease --confirm_commit--> ConfirmedCommit --commit--> Committed
//!                                              \-> Skipped
//! ```
//!
//! Rejecting the plan ends the run with [VersionUpError::UserCancelled] before
//! any file is touched. Declining the commit leaves the rewritten manifests in
//! place. A failing mutator aborts the run; manifests already rewritten stay
//! rewritten.

use std::path::Path;

use crate::boundary::BoundaryWarning;
use crate::config::{ManifestLocations, ReleaseConfig};
use crate::domain::ReleaseState;
use crate::error::{Result, VersionUpError};
use crate::git::{commit_release, CommitReceipt, CommitRequest, Repository};
use crate::manifest::{
    read_build_number, read_package_info, GradleMutator, ManifestMutator, PackageMutator,
    PlistMutator,
};
use crate::resolver::VersionResolver;
use crate::ui::{self, Prompter};

/// Plan computed from the manifests, not yet approved
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRelease {
    pub state: ReleaseState,
    pub locations: ManifestLocations,
    pub warnings: Vec<BoundaryWarning>,
}

/// Plan approved by the operator
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmedRelease {
    pub state: ReleaseState,
    pub locations: ManifestLocations,
}

/// Every manifest has been rewritten
#[derive(Debug, Clone, PartialEq)]
pub struct MutatedRelease {
    pub state: ReleaseState,
    pub locations: ManifestLocations,
}

/// Commit approved by the operator
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmedCommit {
    pub state: ReleaseState,
    pub request: CommitRequest,
}

/// How a run ended
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseOutcome {
    /// Plan presented, nothing written
    DryRun,
    /// Manifests rewritten and committed
    Committed(CommitReceipt),
    /// Manifests rewritten, commit declined
    Skipped,
}

/// Result of a finished release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub state: ReleaseState,
    pub warnings: Vec<BoundaryWarning>,
    pub outcome: ReleaseOutcome,
}

/// Read the manifests and compute the release plan.
///
/// The current build number comes from the first configured plist.
pub fn resolve_release(config: &ReleaseConfig) -> Result<ResolvedRelease> {
    let package = read_package_info(&config.package_location())?;
    let locations = config.manifest_locations(package.name.as_deref())?;

    let first_plist = locations.plists.first().ok_or_else(|| {
        VersionUpError::config("at least one Info.plist path is required")
    })?;
    let current_build = read_build_number(first_plist)?;

    let resolution =
        VersionResolver::new(config.overrides.clone()).resolve(&package.version, current_build)?;

    Ok(ResolvedRelease {
        state: resolution.state,
        locations,
        warnings: resolution.warnings,
    })
}

impl ResolvedRelease {
    /// Show warnings and the plan to the operator
    pub fn present(&self) {
        ui::display_line();
        for warning in &self.warnings {
            ui::display_boundary_warning(warning);
        }
        ui::display_plan(&self.state, &self.locations);
        ui::display_line();
    }

    /// Ask the operator to accept the plan.
    ///
    /// # Errors
    /// * `UserCancelled` - The operator declined
    pub fn confirm<P: Prompter + ?Sized>(self, prompter: &mut P) -> Result<ConfirmedRelease> {
        let prompt = format!(
            "Use \"{}\" as the next version?",
            self.state.version_string()
        );

        if !prompter.confirm(&prompt)? {
            return Err(VersionUpError::UserCancelled);
        }

        Ok(ConfirmedRelease {
            state: self.state,
            locations: self.locations,
        })
    }
}

impl ConfirmedRelease {
    /// Rewrite package descriptor, every plist, then the gradle script.
    ///
    /// Stops at the first failure without restoring files already rewritten.
    pub fn apply(self) -> Result<MutatedRelease> {
        ui::display_notice("\nUpdating versions", 0);

        ui::display_info("Updating version in package.json...", 1);
        PackageMutator.apply(&self.locations.package, &self.state)?;
        ui::display_success("Version in package.json changed.", 2);

        ui::display_info("Updating version in xcode project...", 1);
        for plist in &self.locations.plists {
            PlistMutator.apply(plist, &self.state)?;
        }
        ui::display_success(
            "Version and build number in ios project (plist file) changed.",
            2,
        );

        ui::display_info("Updating version in android project...", 1);
        GradleMutator.apply(&self.locations.gradle, &self.state)?;
        ui::display_success(
            "Version and build number in android project (gradle file) changed.",
            2,
        );

        Ok(MutatedRelease {
            state: self.state,
            locations: self.locations,
        })
    }
}

impl MutatedRelease {
    /// Commit for this release; tagged only when the version changed.
    pub fn commit_request(&self, config: &ReleaseConfig) -> CommitRequest {
        let version = self.state.version_string();
        let tag = self
            .state
            .version_changed()
            .then(|| config.tag_pattern.format(&version));

        CommitRequest {
            message: config.message.render(&version, self.state.target_build),
            paths: self.locations.all(),
            tag,
        }
    }

    /// Ask the operator whether to commit.
    ///
    /// # Returns
    /// * `Ok(Some(_))` - Commit approved
    /// * `Ok(None)` - Commit declined; manifests stay rewritten
    pub fn confirm_commit<P: Prompter + ?Sized>(
        self,
        config: &ReleaseConfig,
        prompter: &mut P,
    ) -> Result<Option<ConfirmedCommit>> {
        let request = self.commit_request(config);
        ui::display_commit_plan(&request.message, request.tag.as_deref());

        if !prompter.confirm("Do you allow me to do this?")? {
            ui::display_warning("Skipped.", 1);
            return Ok(None);
        }

        Ok(Some(ConfirmedCommit {
            state: self.state,
            request,
        }))
    }
}

impl ConfirmedCommit {
    /// Stage, commit and tag through the version control collaborator
    pub fn commit<R: Repository + ?Sized>(self, repo: &R) -> Result<CommitReceipt> {
        let receipt = commit_release(repo, &self.request)?;
        ui::display_success("Commit with files added. Run \"git push\".", 1);
        Ok(receipt)
    }
}

/// Run the whole release flow.
///
/// `open_repo` is only called once the operator has approved the commit, with
/// the project root as argument.
///
/// # Returns
/// * `Ok(WorkflowResult)` - The run finished (committed, skipped or dry run)
/// * `Err(UserCancelled)` - The plan was rejected; nothing was written
/// * `Err(_)` - Any other failure, surfaced as-is
pub fn run_release_workflow<P, R, F>(
    config: &ReleaseConfig,
    prompter: &mut P,
    open_repo: F,
) -> Result<WorkflowResult>
where
    P: Prompter + ?Sized,
    R: Repository,
    F: FnOnce(&Path) -> Result<R>,
{
    let resolved = resolve_release(config)?;
    resolved.present();

    let warnings = resolved.warnings.clone();

    if config.dry_run {
        ui::display_warning("Dry run: no files were changed.", 0);
        return Ok(WorkflowResult {
            state: resolved.state,
            warnings,
            outcome: ReleaseOutcome::DryRun,
        });
    }

    let mutated = resolved.confirm(prompter)?.apply()?;
    let state = mutated.state.clone();

    let outcome = match mutated.confirm_commit(config, prompter)? {
        Some(confirmed) => {
            let repo = open_repo(&config.root)?;
            ReleaseOutcome::Committed(confirmed.commit(&repo)?)
        }
        None => ReleaseOutcome::Skipped,
    };

    ui::display_success("\nDone!", 0);

    Ok(WorkflowResult {
        state,
        warnings,
        outcome,
    })
}
