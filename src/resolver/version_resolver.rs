use crate::boundary::BoundaryWarning;
use crate::domain::release::version_code_overflows;
use crate::domain::version::parse_component;
use crate::domain::{Component, CurrentVersion, ReleaseState, VersionTriple};
use crate::error::{Result, VersionUpError};

/// Operator requests layered on top of the current version.
///
/// An explicit value always wins for its own slot. A bump flag increments its
/// own slot and zeroes every lower slot that has no explicit value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionOverrides {
    pub major: Option<String>,
    pub minor: Option<String>,
    pub patch: Option<String>,
    pub bump_major: bool,
    pub bump_minor: bool,
    pub bump_patch: bool,
}

impl VersionOverrides {
    fn explicit(&self, component: Component) -> Option<&str> {
        match component {
            Component::Major => self.major.as_deref(),
            Component::Minor => self.minor.as_deref(),
            Component::Patch => self.patch.as_deref(),
        }
    }

    fn bumps(&self, component: Component) -> bool {
        match component {
            Component::Major => self.bump_major,
            Component::Minor => self.bump_minor,
            Component::Patch => self.bump_patch,
        }
    }

    fn bumps_above(&self, component: Component) -> bool {
        match component {
            Component::Major => false,
            Component::Minor => self.bump_major,
            Component::Patch => self.bump_major || self.bump_minor,
        }
    }
}

/// Resolution result: the immutable release state plus anything worth telling the operator
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub state: ReleaseState,
    pub warnings: Vec<BoundaryWarning>,
}

/// Computes the next version, build number and versionCode
pub struct VersionResolver {
    overrides: VersionOverrides,
}

impl VersionResolver {
    /// Create a new resolver for the given operator overrides
    pub fn new(overrides: VersionOverrides) -> Self {
        VersionResolver { overrides }
    }

    /// Resolve one slot of the target triple
    pub fn resolve_component(&self, current: &CurrentVersion, component: Component) -> Result<u64> {
        if let Some(raw) = self.overrides.explicit(component) {
            return parse_component(component.name(), raw);
        }

        let value = if self.overrides.bumps(component) {
            let value = current.component(component);
            value.checked_add(1).ok_or_else(|| {
                VersionUpError::out_of_range(format!(
                    "{} {} cannot be incremented",
                    component.name(),
                    value
                ))
            })?
        } else if self.overrides.bumps_above(component) {
            0
        } else {
            current.component(component)
        };

        Ok(value)
    }

    /// Resolve the target triple for a current version string
    pub fn resolve_version(&self, current: &CurrentVersion) -> Result<VersionTriple> {
        Ok(VersionTriple::new(
            self.resolve_component(current, Component::Major)?,
            self.resolve_component(current, Component::Minor)?,
            self.resolve_component(current, Component::Patch)?,
        ))
    }

    /// Resolve the full release state from what was read off the manifests.
    ///
    /// A changed version starts the build count over at 1; an unchanged one
    /// increments the previous build.
    pub fn resolve(&self, current_version: &str, current_build: u64) -> Result<Resolution> {
        let current = CurrentVersion::parse(current_version);
        let mut warnings = Vec::new();

        if !current.is_standard() {
            warnings.push(BoundaryWarning::NonStandardVersion {
                version: current_version.to_string(),
            });
        }

        let target = self.resolve_version(&current)?;

        let build = if current.differs_from(&target) {
            warnings.push(BoundaryWarning::BuildReset);
            1
        } else {
            warnings.push(BoundaryWarning::BuildIncremented {
                previous: current_build,
            });
            current_build.checked_add(1).ok_or_else(|| {
                VersionUpError::out_of_range(format!(
                    "build number {} cannot be incremented",
                    current_build
                ))
            })?
        };

        if version_code_overflows(&target, build) {
            warnings.push(BoundaryWarning::VersionCodeOverflow {
                version: target.to_string(),
                build,
            });
        }

        Ok(Resolution {
            state: ReleaseState::new(current_version, current_build, target, build)?,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(current: &str, build: u64, overrides: VersionOverrides) -> Resolution {
        VersionResolver::new(overrides).resolve(current, build).unwrap()
    }

    #[test]
    fn test_no_overrides_is_identity() {
        for version in ["0.0.1", "1.2.3", "10.20.30"] {
            let resolution = resolve(version, 4, VersionOverrides::default());
            assert_eq!(resolution.state.version_string(), version);
        }
    }

    #[test]
    fn test_patch_bump() {
        let overrides = VersionOverrides {
            bump_patch: true,
            ..Default::default()
        };
        let resolution = resolve("1.2.3", 4, overrides);
        assert_eq!(resolution.state.target_version, VersionTriple::new(1, 2, 4));
    }

    #[test]
    fn test_major_bump_resets_lower_components() {
        let overrides = VersionOverrides {
            bump_major: true,
            ..Default::default()
        };
        let resolution = resolve("1.2.3", 4, overrides);
        assert_eq!(resolution.state.target_version, VersionTriple::new(2, 0, 0));
    }

    #[test]
    fn test_minor_bump_scenario() {
        let overrides = VersionOverrides {
            bump_minor: true,
            ..Default::default()
        };
        let resolution = resolve("1.0.0", 3, overrides);
        assert_eq!(resolution.state.version_string(), "1.1.0");
        assert_eq!(resolution.state.target_build, 1);
        assert_eq!(resolution.state.target_version_code, 1_010_001);
        assert!(resolution.warnings.contains(&BoundaryWarning::BuildReset));
    }

    #[test]
    fn test_same_version_increments_build() {
        let resolution = resolve("1.1.0", 1, VersionOverrides::default());
        assert_eq!(resolution.state.version_string(), "1.1.0");
        assert_eq!(resolution.state.target_build, 2);
        assert_eq!(resolution.state.target_version_code, 1_010_002);
        assert!(resolution
            .warnings
            .contains(&BoundaryWarning::BuildIncremented { previous: 1 }));
    }

    #[test]
    fn test_explicit_lower_component_survives_higher_bump() {
        let overrides = VersionOverrides {
            bump_major: true,
            patch: Some("7".to_string()),
            ..Default::default()
        };
        let resolution = resolve("1.2.3", 4, overrides);
        assert_eq!(resolution.state.target_version, VersionTriple::new(2, 0, 7));
    }

    #[test]
    fn test_explicit_wins_over_own_bump() {
        let overrides = VersionOverrides {
            minor: Some("9".to_string()),
            bump_minor: true,
            ..Default::default()
        };
        let resolution = resolve("1.2.3", 4, overrides);
        assert_eq!(resolution.state.target_version, VersionTriple::new(1, 9, 0));
    }

    #[test]
    fn test_explicit_same_as_current_keeps_build_line() {
        let overrides = VersionOverrides {
            major: Some("1".to_string()),
            ..Default::default()
        };
        let resolution = resolve("1.2.3", 4, overrides);
        assert_eq!(resolution.state.target_build, 5);
    }

    #[test]
    fn test_malformed_current_version_warns_and_defaults_to_zero() {
        let resolution = resolve("1.2", 3, VersionOverrides::default());
        assert_eq!(resolution.state.target_version, VersionTriple::new(1, 2, 0));
        assert!(resolution.warnings.contains(&BoundaryWarning::NonStandardVersion {
            version: "1.2".to_string()
        }));
        // "1.2" and "1.2.0" are different strings, so this is a new version line
        assert_eq!(resolution.state.target_build, 1);
    }

    #[test]
    fn test_malformed_current_version_with_patch_bump() {
        let overrides = VersionOverrides {
            bump_patch: true,
            ..Default::default()
        };
        let resolution = resolve("3", 9, overrides);
        assert_eq!(resolution.state.target_version, VersionTriple::new(3, 0, 1));
    }

    #[test]
    fn test_non_integer_override_fails() {
        let overrides = VersionOverrides {
            minor: Some("two".to_string()),
            ..Default::default()
        };
        let err = VersionResolver::new(overrides).resolve("1.2.3", 1).unwrap_err();
        assert!(matches!(
            err,
            VersionUpError::InvalidVersionComponent { ref component, .. } if component == "minor"
        ));
    }

    #[test]
    fn test_overflow_warning_keeps_encoding() {
        let overrides = VersionOverrides {
            patch: Some("150".to_string()),
            ..Default::default()
        };
        let resolution = resolve("1.0.0", 1, overrides);
        assert_eq!(resolution.state.target_version_code, 1_015_001);
        assert!(resolution
            .warnings
            .iter()
            .any(|w| matches!(w, BoundaryWarning::VersionCodeOverflow { .. })));
    }

    #[test]
    fn test_huge_explicit_override_is_out_of_range() {
        let overrides = VersionOverrides {
            major: Some("20000000000000".to_string()),
            ..Default::default()
        };
        let err = VersionResolver::new(overrides).resolve("1.0.0", 1).unwrap_err();
        assert!(matches!(err, VersionUpError::VersionOutOfRange(_)));
    }

    #[test]
    fn test_bumping_max_component_is_out_of_range() {
        let overrides = VersionOverrides {
            bump_patch: true,
            ..Default::default()
        };
        let err = VersionResolver::new(overrides)
            .resolve("1.0.18446744073709551615", 1)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Version out of range: patch 18446744073709551615 cannot be incremented"
        );
    }

    #[test]
    fn test_incrementing_max_build_is_out_of_range() {
        let err = VersionResolver::new(VersionOverrides::default())
            .resolve("1.0.0", u64::MAX)
            .unwrap_err();
        assert!(matches!(err, VersionUpError::VersionOutOfRange(_)));
    }
}
