//! Domain logic - pure release rules independent of files and git

pub mod release;
pub mod tag;
pub mod version;

pub use release::{version_code, ReleaseState};
pub use tag::{MessageTemplate, TagPattern};
pub use version::{Component, CurrentVersion, VersionTriple};
