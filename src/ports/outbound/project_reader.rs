use crate::shared::Result;
use crate::tracker::domain::{LockGraph, ManifestRoots};
use std::path::Path;

/// ProjectReader port for loading an npm project's manifest and lock graph
///
/// This port abstracts reading and deserializing `package.json` and
/// `package-lock.json`, so the trail resolver only ever sees parsed data.
pub trait ProjectReader {
    /// Reads the direct dependencies declared in `package.json`
    ///
    /// # Errors
    /// Returns an error if the manifest is missing or cannot be parsed
    fn read_manifest(&self, project_path: &Path) -> Result<ManifestRoots>;

    /// Reads the resolved dependency graph from `package-lock.json`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The lockfile does not exist
    /// - The lockfile is not valid JSON or holds invalid package names/versions
    fn read_lock_graph(&self, project_path: &Path) -> Result<LockGraph>;
}
