use crate::tracker::domain::{Artifact, LockEntry, LockGraph, ManifestRoots, ModuleDependencies};
use indexmap::IndexSet;

/// Result of searching a trail for a single lock entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailSearch {
    /// The entry is itself a direct dependency
    Root,
    /// Names from a direct dependency down to the entry, excluding the entry
    Found(Vec<String>),
    /// No chain of requirement edges leads from any root to the entry
    Unreachable,
}

impl TrailSearch {
    pub fn into_trail(self) -> Option<Vec<String>> {
        match self {
            TrailSearch::Found(trail) => Some(trail),
            TrailSearch::Root | TrailSearch::Unreachable => None,
        }
    }
}

/// Outcome of classifying a whole lock graph
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolutionOutcome {
    pub dependencies: ModuleDependencies,
    /// Transitive entries that were classified without a trail
    pub unreachable: Vec<String>,
    /// Optional entries left out because they were never installed
    pub skipped_optional: Vec<String>,
}

/// TrailResolver service: classifies lock entries and finds their trails
///
/// Pure computation over a [`LockGraph`]. The only outside knowledge it needs,
/// whether an optional package was installed, is supplied by the caller.
pub struct TrailResolver;

impl TrailResolver {
    /// Longest trail the search will build before abandoning a branch.
    /// Bounds recursion on hostile or corrupted lockfiles.
    const MAX_TRAIL_DEPTH: usize = 256;

    /// Classifies every entry of `graph` into compile or development artifacts
    ///
    /// # Arguments
    /// * `roots` - Direct dependencies declared by the manifest
    /// * `graph` - Resolved lock graph
    /// * `is_materialized` - Whether an optional entry is present on disk
    pub fn resolve<F>(roots: &ManifestRoots, graph: &LockGraph, is_materialized: F) -> ResolutionOutcome
    where
        F: Fn(&LockEntry) -> bool,
    {
        Self::resolve_with_progress(roots, graph, is_materialized, |_, _| {})
    }

    /// Same as [`TrailResolver::resolve`], calling `progress(current, total)`
    /// once per lock entry.
    pub fn resolve_with_progress<F, P>(
        roots: &ManifestRoots,
        graph: &LockGraph,
        is_materialized: F,
        mut progress: P,
    ) -> ResolutionOutcome
    where
        F: Fn(&LockEntry) -> bool,
        P: FnMut(usize, usize),
    {
        let total = graph.len();
        let mut outcome = ResolutionOutcome::default();

        for (index, entry) in graph.entries().enumerate() {
            progress(index + 1, total);

            if entry.is_optional() && !is_materialized(entry) {
                outcome.skipped_optional.push(entry.name().to_string());
                continue;
            }

            let search = Self::find_trail(roots.roots_for(entry.is_dev()), graph, entry.name());
            if search == TrailSearch::Unreachable {
                outcome.unreachable.push(entry.name().to_string());
            }

            let artifact = Artifact::npm(entry.package().identity(), search.into_trail());
            outcome.dependencies.push(artifact, entry.is_dev());
        }

        outcome
    }

    /// Finds a trail from one of `roots` to `target`
    ///
    /// Depth-first, first match wins: candidates are tried in root order and
    /// then in lockfile requirement order, so the returned trail is *a* valid
    /// one, not necessarily the shortest.
    pub fn find_trail(roots: &IndexSet<String>, graph: &LockGraph, target: &str) -> TrailSearch {
        if roots.contains(target) {
            return TrailSearch::Root;
        }

        let mut path = Vec::new();
        match Self::collect_trail(graph, target, roots, &mut path) {
            Some(trail) => TrailSearch::Found(trail),
            None => TrailSearch::Unreachable,
        }
    }

    /// Recursive step of the trail search.
    ///
    /// `path` holds the names walked so far. A name already on the path is
    /// never entered again, which is the only cycle guard: the same package
    /// may still be explored on several different branches.
    fn collect_trail<'a, I>(
        graph: &'a LockGraph,
        target: &str,
        frontier: I,
        path: &mut Vec<&'a str>,
    ) -> Option<Vec<String>>
    where
        I: IntoIterator<Item = &'a String> + Copy,
    {
        if frontier.into_iter().any(|name| name == target) {
            return Some(path.iter().map(|name| name.to_string()).collect());
        }

        if path.len() >= Self::MAX_TRAIL_DEPTH {
            return None;
        }

        for candidate in frontier {
            if path.contains(&candidate.as_str()) {
                continue;
            }
            // Requirements that npm did not record at the top level have no edges to follow
            let Some(entry) = graph.get(candidate) else {
                continue;
            };

            path.push(candidate);
            let found = Self::collect_trail(graph, target, entry.requires(), path);
            path.pop();

            if found.is_some() {
                return found;
            }
        }

        None
    }
}
