pub mod version_resolver;

pub use version_resolver::{Resolution, VersionOverrides, VersionResolver};
