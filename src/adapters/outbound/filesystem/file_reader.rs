use crate::ports::outbound::ProjectReader;
use crate::shared::error::TrackerError;
use crate::shared::security::safe_read_to_string;
use crate::shared::Result;
use crate::tracker::domain::{LockEntry, LockGraph, ManifestRoots, Package};
use anyhow::Context;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

pub const PACKAGE_JSON: &str = "package.json";
pub const PACKAGE_LOCK_JSON: &str = "package-lock.json";

const NODE_MODULES_PREFIX: &str = "node_modules/";

/// Name and version used when package.json does not declare them (private apps)
const FALLBACK_PROJECT_NAME: &str = "unnamed";
const FALLBACK_PROJECT_VERSION: &str = "0.0.0";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageJson {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    dependencies: IndexMap<String, Value>,
    #[serde(default)]
    dev_dependencies: IndexMap<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageLock {
    #[serde(default)]
    lockfile_version: Option<u32>,
    /// lockfileVersion 1 and 2
    #[serde(default)]
    dependencies: Option<IndexMap<String, LockDependency>>,
    /// lockfileVersion 2 and 3
    #[serde(default)]
    packages: Option<IndexMap<String, LockPackage>>,
}

#[derive(Debug, Deserialize)]
struct LockDependency {
    version: String,
    #[serde(default)]
    dev: bool,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    requires: IndexMap<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LockPackage {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    dev: bool,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    dependencies: IndexMap<String, Value>,
    #[serde(default)]
    optional_dependencies: IndexMap<String, Value>,
}

/// Parses package.json content into manifest roots
pub fn parse_manifest(content: &str) -> Result<ManifestRoots> {
    let manifest: PackageJson =
        serde_json::from_str(content).context("Failed to parse package.json")?;

    let name = manifest
        .name
        .unwrap_or_else(|| FALLBACK_PROJECT_NAME.to_string());
    let version = manifest
        .version
        .unwrap_or_else(|| FALLBACK_PROJECT_VERSION.to_string());
    let project = Package::new(name, version)
        .context("Invalid project name or version in package.json")?;

    Ok(ManifestRoots::new(
        project,
        manifest.dependencies.into_keys(),
        manifest.dev_dependencies.into_keys(),
    ))
}

/// Parses package-lock.json content into a lock graph
///
/// The flat `dependencies` map of lockfileVersion 1/2 is used when present.
/// A lockfileVersion 3 file only has `packages`; from it the top-level
/// `node_modules/<name>` entries are taken, nested installs are ignored.
pub fn parse_lock_graph(content: &str) -> Result<LockGraph> {
    let lock: PackageLock =
        serde_json::from_str(content).context("Failed to parse package-lock.json")?;

    let mut graph = LockGraph::new(lock.lockfile_version);

    if let Some(dependencies) = lock.dependencies {
        for (name, dependency) in dependencies {
            let package = Package::new(name.clone(), dependency.version)
                .with_context(|| format!("Invalid lock entry '{}'", name))?;
            graph.insert(LockEntry::new(
                package,
                dependency.requires.into_keys().collect(),
                dependency.dev,
                dependency.optional,
            ));
        }
    } else if let Some(packages) = lock.packages {
        for (key, package) in packages {
            let Some(name) = top_level_module_name(&key) else {
                continue;
            };
            // links to workspace folders carry no version
            let Some(version) = package.version else {
                continue;
            };
            let requires = package
                .dependencies
                .into_keys()
                .chain(package.optional_dependencies.into_keys())
                .collect();
            let resolved = Package::new(name.to_string(), version)
                .with_context(|| format!("Invalid lock entry '{}'", key))?;
            graph.insert(LockEntry::new(
                resolved,
                requires,
                package.dev,
                package.optional,
            ));
        }
    } else {
        anyhow::bail!("package-lock.json contains neither 'dependencies' nor 'packages'");
    }

    Ok(graph)
}

/// `node_modules/@scope/name` -> `@scope/name`; `None` for the root entry,
/// workspace folders and nested `node_modules`
fn top_level_module_name(key: &str) -> Option<&str> {
    let name = key.strip_prefix(NODE_MODULES_PREFIX)?;
    if name.is_empty() || name.contains("/node_modules/") {
        return None;
    }
    Some(name)
}

/// FileSystemReader adapter for reading npm project files
///
/// Implements the ProjectReader port: reads package.json and
/// package-lock.json from a project directory with the usual safety checks.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectReader for FileSystemReader {
    fn read_manifest(&self, project_path: &Path) -> Result<ManifestRoots> {
        let manifest_path = project_path.join(PACKAGE_JSON);

        if !manifest_path.exists() {
            return Err(TrackerError::ManifestNotFound {
                path: manifest_path,
                suggestion: format!(
                    "package.json does not exist in project directory \"{}\".\n   \
                     Please run in the root directory of an npm project, or specify the correct path with the --path option.",
                    project_path.display()
                ),
            }
            .into());
        }

        safe_read_to_string(&manifest_path, PACKAGE_JSON)
            .and_then(|content| parse_manifest(&content))
            .map_err(|e| {
                TrackerError::GraphLoadError {
                    path: manifest_path,
                    details: format!("{:#}", e),
                }
                .into()
            })
    }

    fn read_lock_graph(&self, project_path: &Path) -> Result<LockGraph> {
        let lockfile_path = project_path.join(PACKAGE_LOCK_JSON);

        if !lockfile_path.exists() {
            return Err(TrackerError::LockfileNotFound {
                path: lockfile_path,
                suggestion: "Run `npm install` to create package-lock.json before generating a report."
                    .to_string(),
            }
            .into());
        }

        safe_read_to_string(&lockfile_path, PACKAGE_LOCK_JSON)
            .and_then(|content| parse_lock_graph(&content))
            .map_err(|e| {
                TrackerError::GraphLoadError {
                    path: lockfile_path,
                    details: format!("{:#}", e),
                }
                .into()
            })
    }
}
