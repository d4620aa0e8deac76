use npm_tracker::prelude::*;
use std::collections::HashSet;
use std::path::Path;

/// Mock ModuleLocator with a fixed set of installed optional packages
#[derive(Default)]
pub struct MockModuleLocator {
    installed: HashSet<String>,
}

impl MockModuleLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_installed(mut self, name: &str) -> Self {
        self.installed.insert(name.to_string());
        self
    }
}

impl ModuleLocator for MockModuleLocator {
    fn is_materialized(&self, _project_path: &Path, entry: &LockEntry) -> bool {
        !entry.is_optional() || self.installed.contains(entry.name())
    }
}
