use npm_tracker::adapters::outbound::filesystem::{parse_lock_graph, parse_manifest};
use npm_tracker::prelude::*;
use std::path::Path;

/// Mock ProjectReader serving package.json and package-lock.json from memory
pub struct MockProjectReader {
    manifest: String,
    lockfile: String,
    should_fail: bool,
}

impl MockProjectReader {
    pub fn new(manifest: &str, lockfile: &str) -> Self {
        Self {
            manifest: manifest.to_string(),
            lockfile: lockfile.to_string(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            manifest: String::new(),
            lockfile: String::new(),
            should_fail: true,
        }
    }
}

impl ProjectReader for MockProjectReader {
    fn read_manifest(&self, _project_path: &Path) -> Result<ManifestRoots> {
        if self.should_fail {
            anyhow::bail!("Mock manifest read failure");
        }
        parse_manifest(&self.manifest)
    }

    fn read_lock_graph(&self, _project_path: &Path) -> Result<LockGraph> {
        if self.should_fail {
            anyhow::bail!("Mock lockfile read failure");
        }
        parse_lock_graph(&self.lockfile)
    }
}
