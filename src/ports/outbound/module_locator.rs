use crate::tracker::domain::LockEntry;
use std::path::Path;

/// ModuleLocator port for checking whether a package was installed
///
/// Optional dependencies that failed to install or were skipped for the
/// current platform are listed in the lockfile but have no module directory.
pub trait ModuleLocator {
    /// Returns true if `entry` is present in the project's installed modules
    fn is_materialized(&self, project_path: &Path, entry: &LockEntry) -> bool;
}
