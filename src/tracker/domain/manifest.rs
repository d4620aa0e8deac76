use super::Package;
use indexmap::IndexSet;

/// Direct dependencies declared by the project manifest (package.json)
///
/// A name declared in both groups is kept only in `normal`.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestRoots {
    project: Package,
    normal: IndexSet<String>,
    dev: IndexSet<String>,
}

impl ManifestRoots {
    pub fn new<N, D>(project: Package, normal: N, dev: D) -> Self
    where
        N: IntoIterator<Item = String>,
        D: IntoIterator<Item = String>,
    {
        let normal: IndexSet<String> = normal.into_iter().collect();
        let dev = dev.into_iter().filter(|name| !normal.contains(name)).collect();
        Self {
            project,
            normal,
            dev,
        }
    }

    /// The project itself, as declared by package.json
    pub fn project(&self) -> &Package {
        &self.project
    }

    pub fn normal(&self) -> &IndexSet<String> {
        &self.normal
    }

    pub fn dev(&self) -> &IndexSet<String> {
        &self.dev
    }

    /// Root group searched for an entry, chosen by the entry's own lock `dev`
    /// flag rather than by which group the manifest lists the name in.
    pub fn roots_for(&self, dev: bool) -> &IndexSet<String> {
        if dev {
            &self.dev
        } else {
            &self.normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> Package {
        Package::new("app".to_string(), "1.0.0".to_string()).unwrap()
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_roots_for_selects_group() {
        let roots = ManifestRoots::new(
            app(),
            names(&["react"]),
            names(&["jest"]),
        );

        assert!(roots.roots_for(false).contains("react"));
        assert!(roots.roots_for(true).contains("jest"));
        assert!(!roots.roots_for(true).contains("react"));
    }

    #[test]
    fn test_normal_takes_precedence_over_dev() {
        let roots = ManifestRoots::new(
            app(),
            names(&["typescript", "react"]),
            names(&["typescript", "jest"]),
        );

        assert!(roots.normal().contains("typescript"));
        assert!(!roots.dev().contains("typescript"));
        assert_eq!(roots.dev().len(), 1);
    }

    #[test]
    fn test_declaration_order_preserved() {
        let roots = ManifestRoots::new(
            app(),
            names(&["zod", "axios", "lodash"]),
            Vec::new(),
        );

        let order: Vec<&String> = roots.normal().iter().collect();
        assert_eq!(order, vec!["zod", "axios", "lodash"]);
        assert_eq!(roots.project().identity(), "@npm:app:1.0.0");
    }
}
