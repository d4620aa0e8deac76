use crate::shared::Result;

/// Maximum length for package names (npm registry limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 214;

/// Maximum length for resolved versions.
///
/// Lockfiles may pin tarball URLs or git refs instead of semver strings.
const MAX_VERSION_LENGTH: usize = 512;

/// Scope used in identities of unscoped packages
const DEFAULT_SCOPE: &str = "@npm";

/// NewType wrapper for an npm package name with validation
///
/// Accepts plain names (`lodash`) and scoped names (`@angular/core`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '~' | '@' | '/'))
        {
            anyhow::bail!(
                "Package name '{}' contains invalid characters. Only alphanumeric, '-', '_', '.', '~', '@' and '/' are allowed.",
                name
            );
        }

        if name.starts_with('@') && name.matches('/').count() != 1 {
            anyhow::bail!("Scoped package name '{}' must look like @scope/name", name);
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits the name into (scope, bare name); unscoped packages get `@npm`
    pub fn scope_and_name(&self) -> (&str, &str) {
        match self.0.split_once('/') {
            Some((scope, name)) if scope.starts_with('@') => (scope, name),
            _ => (DEFAULT_SCOPE, self.0.as_str()),
        }
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for a resolved version, treated as an opaque string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(version: String) -> Result<Self> {
        if version.is_empty() {
            anyhow::bail!("Package version cannot be empty");
        }

        if version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Package version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            );
        }

        if version.chars().any(|c| c.is_whitespace() || c.is_control()) {
            anyhow::bail!("Package version '{}' contains whitespace or control characters", version);
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Package value object: a name pinned to a resolved version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Package {
    name: PackageName,
    version: Version,
}

impl Package {
    pub fn new(name: String, version: String) -> Result<Self> {
        Ok(Self {
            name: PackageName::new(name)?,
            version: Version::new(version)?,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn version(&self) -> &str {
        self.version.as_str()
    }

    /// Identity reported to the tracker: `@scope:name:version`
    ///
    /// `@angular/core@14.2.10` becomes `@angular:core:14.2.10` and
    /// `tslib@2.4.1` becomes `@npm:tslib:2.4.1`.
    pub fn identity(&self) -> String {
        let (scope, name) = self.name.scope_and_name();
        format!("{}:{}:{}", scope, name, self.version)
    }
}
