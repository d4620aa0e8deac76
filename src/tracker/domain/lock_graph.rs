use super::Package;
use indexmap::IndexMap;

/// One resolved package recorded in the lockfile
#[derive(Debug, Clone, PartialEq)]
pub struct LockEntry {
    package: Package,
    requires: Vec<String>,
    dev: bool,
    optional: bool,
}

impl LockEntry {
    pub fn new(package: Package, requires: Vec<String>, dev: bool, optional: bool) -> Self {
        Self {
            package,
            requires,
            dev,
            optional,
        }
    }

    pub fn name(&self) -> &str {
        self.package.name()
    }

    pub fn package(&self) -> &Package {
        &self.package
    }

    /// Names this entry requires, in lockfile order
    pub fn requires(&self) -> &[String] {
        &self.requires
    }

    pub fn is_dev(&self) -> bool {
        self.dev
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

/// LockGraph aggregate: the resolved dependency graph of a lockfile
///
/// Entries are keyed by package name and iterate in the order they were
/// inserted, which is the order of the lockfile. Trail search walks
/// requirement edges in that order, so keeping it stable keeps resolution
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct LockGraph {
    lockfile_version: Option<u32>,
    entries: IndexMap<String, LockEntry>,
}

impl LockGraph {
    pub fn new(lockfile_version: Option<u32>) -> Self {
        Self {
            lockfile_version,
            entries: IndexMap::new(),
        }
    }

    /// Adds an entry; a later entry with the same name replaces the earlier one
    /// but keeps its original position.
    pub fn insert(&mut self, entry: LockEntry) {
        self.entries.insert(entry.name().to_string(), entry);
    }

    pub fn lockfile_version(&self) -> Option<u32> {
        self.lockfile_version
    }

    pub fn entries(&self) -> impl Iterator<Item = &LockEntry> {
        self.entries.values()
    }

    pub fn get(&self, name: &str) -> Option<&LockEntry> {
        self.entries.get(name)
    }

    /// Outgoing requirement edges of `name`; empty when the name is not in the graph
    pub fn requirements_of(&self, name: &str) -> &[String] {
        self.entries
            .get(name)
            .map(LockEntry::requires)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<LockEntry> for LockGraph {
    fn from_iter<I: IntoIterator<Item = LockEntry>>(iter: I) -> Self {
        let mut graph = LockGraph::default();
        for entry in iter {
            graph.insert(entry);
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, requires: &[&str]) -> LockEntry {
        LockEntry::new(
            Package::new(name.to_string(), "1.0.0".to_string()).unwrap(),
            requires.iter().map(|s| s.to_string()).collect(),
            false,
            false,
        )
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let graph: LockGraph = vec![entry("zeta", &[]), entry("alpha", &[]), entry("mid", &[])]
            .into_iter()
            .collect();

        let names: Vec<&str> = graph.entries().map(LockEntry::name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_requirements_of_known_entry() {
        let graph: LockGraph = vec![entry("a", &["b", "c"]), entry("b", &[])]
            .into_iter()
            .collect();

        assert_eq!(graph.requirements_of("a"), &["b".to_string(), "c".to_string()]);
        assert!(graph.requirements_of("b").is_empty());
    }

    #[test]
    fn test_requirements_of_unknown_entry_is_empty() {
        let graph = LockGraph::new(Some(1));
        assert!(graph.requirements_of("missing").is_empty());
        assert!(graph.is_empty());
        assert_eq!(graph.lockfile_version(), Some(1));
    }

    #[test]
    fn test_insert_replaces_duplicate_name() {
        let mut graph = LockGraph::default();
        graph.insert(entry("a", &[]));
        graph.insert(entry("b", &[]));
        graph.insert(entry("a", &["b"]));

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.requirements_of("a"), &["b".to_string()]);
        assert_eq!(graph.entries().next().unwrap().name(), "a");
    }
}
