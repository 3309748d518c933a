use super::PackageName;
use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};

/// Adjacency mapping from a package to an ordered list of neighbors.
///
/// The `BTreeMap` gives deterministic key iteration; the per-key `Vec`
/// preserves edge-parse insertion order. Insertion order is never
/// semantically significant - every consumer sorts before display.
pub type AdjacencyMap = BTreeMap<PackageName, Vec<PackageName>>;

impl Borrow<str> for PackageName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

/// DependencyGraph aggregate holding the forward adjacency map and its
/// derived reverse index.
///
/// Built once per invocation from the parsed graph file and read-only
/// thereafter. The reverse map is always the exact transpose of the
/// forward map: `dependent ∈ reverse[x] ⟺ x ∈ forward[dependent]`.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    forward: AdjacencyMap,
    reverse: AdjacencyMap,
}

impl DependencyGraph {
    /// Builds the aggregate from a forward adjacency map, deriving the
    /// reverse index as its transpose.
    pub fn from_forward(forward: AdjacencyMap) -> Self {
        let reverse = Self::build_reverse(&forward);
        Self { forward, reverse }
    }

    /// Derives the reverse adjacency map: for every key K and every
    /// dependency D in forward[K], K is appended to reverse[D].
    ///
    /// Per-key list order is insertion order over the forward key
    /// traversal, not sorted; callers sort before display.
    pub fn build_reverse(forward: &AdjacencyMap) -> AdjacencyMap {
        let mut reverse = AdjacencyMap::new();

        for (name, depends) in forward {
            for depend in depends {
                reverse
                    .entry(depend.clone())
                    .or_default()
                    .push(name.clone());
            }
        }

        reverse
    }

    /// Direct dependencies of a package, or `None` if the package has no
    /// forward entry (it either does not exist or is only ever depended on).
    pub fn dependencies_of(&self, package: &str) -> Option<&[PackageName]> {
        self.forward.get(package).map(Vec::as_slice)
    }

    /// Direct dependents of a package, or `None` if nothing depends on it.
    pub fn dependents_of(&self, package: &str) -> Option<&[PackageName]> {
        self.reverse.get(package).map(Vec::as_slice)
    }

    /// True if the package has at least one outgoing dependency edge.
    pub fn has_dependencies(&self, package: &str) -> bool {
        self.forward.contains_key(package)
    }

    /// True if at least one package depends on this one.
    pub fn has_dependents(&self, package: &str) -> bool {
        self.reverse.contains_key(package)
    }

    /// Sorted names of every package with a forward entry. This is the
    /// index listing shown when the tool is invoked without a package.
    pub fn package_names(&self) -> Vec<&str> {
        self.forward.keys().map(PackageName::as_str).collect()
    }

    /// The universe of known names: every key and every list member of the
    /// forward map. Because the reverse map is an exact transpose, a
    /// second pass over it would contribute nothing new.
    pub fn known_names(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();

        for (name, depends) in &self.forward {
            names.insert(name.as_str());
            for depend in depends {
                names.insert(depend.as_str());
            }
        }

        names
    }

    pub fn package_count(&self) -> usize {
        self.forward.len()
    }

    pub fn edge_count(&self) -> usize {
        self.forward.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
