use crate::error::{Result, VersionUpError};
use std::fmt;

/// Semantic version triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct VersionTriple {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl VersionTriple {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        VersionTriple {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which slot of the triple a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl Component {
    pub fn index(self) -> usize {
        match self {
            Component::Major => 0,
            Component::Minor => 1,
            Component::Patch => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
        }
    }
}

/// Version string as found in the package descriptor.
///
/// Parsing never fails: components are split on `.`, each one contributes its
/// leading digits (none means 0), and slots beyond the ones present read as 0.
/// `is_standard` records whether the string was a clean three-part triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentVersion {
    raw: String,
    components: Vec<u64>,
    standard: bool,
}

impl CurrentVersion {
    pub fn parse(raw: &str) -> Self {
        let parts: Vec<&str> = raw.split('.').collect();
        let components = parts.iter().map(|p| leading_digits(p)).collect();
        let standard = parts.len() == 3
            && parts
                .iter()
                .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));

        CurrentVersion {
            raw: raw.to_string(),
            components,
            standard,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_standard(&self) -> bool {
        self.standard
    }

    /// Value of a slot, 0 when the string has no such component
    pub fn component(&self, component: Component) -> u64 {
        self.components
            .get(component.index())
            .copied()
            .unwrap_or(0)
    }

    /// Whether `target` is a different version than this one, compared as dotted strings.
    pub fn differs_from(&self, target: &VersionTriple) -> bool {
        target.to_string() != self.raw
    }
}

impl fmt::Display for CurrentVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parse an operator-supplied component value
pub fn parse_component(component: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| VersionUpError::invalid_component(component, value))
}

fn leading_digits(part: &str) -> u64 {
    let digits: String = part
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}
