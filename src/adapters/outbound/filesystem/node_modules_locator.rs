use crate::ports::outbound::ModuleLocator;
use crate::tracker::domain::LockEntry;
use std::path::Path;

const NODE_MODULES: &str = "node_modules";

/// NodeModulesLocator adapter: an optional package counts as installed when
/// `<project>/node_modules/<name>` is a directory.
///
/// Non-optional entries are always considered installed.
#[derive(Debug, Default)]
pub struct NodeModulesLocator;

impl NodeModulesLocator {
    pub fn new() -> Self {
        Self
    }
}

impl ModuleLocator for NodeModulesLocator {
    fn is_materialized(&self, project_path: &Path, entry: &LockEntry) -> bool {
        if !entry.is_optional() {
            return true;
        }
        project_path.join(NODE_MODULES).join(entry.name()).is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::domain::Package;
    use std::fs;
    use tempfile::TempDir;

    fn entry(name: &str, optional: bool) -> LockEntry {
        LockEntry::new(
            Package::new(name.to_string(), "1.0.0".to_string()).unwrap(),
            Vec::new(),
            false,
            optional,
        )
    }

    #[test]
    fn test_non_optional_always_materialized() {
        let temp_dir = TempDir::new().unwrap();
        let locator = NodeModulesLocator::new();
        assert!(locator.is_materialized(temp_dir.path(), &entry("express", false)));
    }

    #[test]
    fn test_optional_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let locator = NodeModulesLocator::new();
        assert!(!locator.is_materialized(temp_dir.path(), &entry("fsevents", true)));
    }

    #[test]
    fn test_optional_installed_scoped_package() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("node_modules/@esbuild/linux-x64")).unwrap();

        let locator = NodeModulesLocator::new();
        assert!(locator.is_materialized(temp_dir.path(), &entry("@esbuild/linux-x64", true)));
    }

    #[test]
    fn test_optional_file_is_not_a_module() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("node_modules")).unwrap();
        fs::write(temp_dir.path().join("node_modules/fsevents"), "").unwrap();

        let locator = NodeModulesLocator::new();
        assert!(!locator.is_materialized(temp_dir.path(), &entry("fsevents", true)));
    }
}
