use crate::graph_query::domain::{DependencyGraph, PackageName};

/// Depth sentinel treated as unbounded.
///
/// Recursion-free traversal cannot blow the stack, but an enormous depth
/// bound on a graph with surviving long cycles could still make tree
/// output explode; request builders clamp user-supplied depths to this
/// value, and it is the default when no depth is given.
pub const DEPTH_UNLIMITED: usize = 1000;

/// One row of tree-mode output: a package name at its indentation depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub depth: usize,
    pub name: PackageName,
}

/// Structured result of a single traversal query.
///
/// The traversal functions return data; rendering is the presentation
/// layer's job. "Not found" and "no dependencies" are ordinary outcomes,
/// not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The package appears nowhere in the graph.
    NotFound { package: String },
    /// Forward query on a package known only as a dependency target.
    NoDependencies { package: String },
    /// Reverse query on a package nothing depends on.
    NoDependents { package: String },
    /// Tree-mode dependency listing, preorder, children sorted per branch.
    DependencyTree {
        package: String,
        rows: Vec<TreeRow>,
    },
    /// Tree-mode dependent listing over the reverse graph.
    DependentTree {
        package: String,
        rows: Vec<TreeRow>,
    },
    /// Flat-mode dependency listing, deduplicated and sorted.
    DependencyList {
        package: String,
        names: Vec<String>,
    },
    /// Flat-mode dependent listing over the reverse graph.
    DependentList {
        package: String,
        names: Vec<String>,
    },
}

/// Accessor selecting which adjacency direction a walk follows.
type Neighbors = for<'a> fn(&'a DependencyGraph, &str) -> Option<&'a [PackageName]>;

/// Worklist frame for the tree walk. `list` is the raw dependency list of
/// the node this frame expands; it becomes the parent-duplicate
/// suppression set for the frames pushed beneath it.
struct TreeFrame<'a> {
    list: &'a [PackageName],
    sorted: Vec<&'a PackageName>,
    idx: usize,
    depth: usize,
    parent_list: &'a [PackageName],
}

/// Worklist frame for the flat walk. `depth` is the hop distance of the
/// items in `list`.
struct FlatFrame<'a> {
    list: &'a [PackageName],
    idx: usize,
    depth: usize,
}

/// TraversalEngine - the four bounded-depth walks over an immutable graph.
///
/// All walks use explicit frame stacks instead of recursion, so recursion
/// depth never depends on graph shape or the depth bound. The engine only
/// reads the graph; independent engines can safely share one graph.
pub struct TraversalEngine<'g> {
    graph: &'g DependencyGraph,
}

impl<'g> TraversalEngine<'g> {
    pub fn new(graph: &'g DependencyGraph) -> Self {
        Self { graph }
    }

    /// Tree-mode forward walk. Children are emitted sorted, indented by
    /// depth, starting at depth 1; the bound is inclusive. When
    /// `show_parent_deps` is false a child already present in its parent's
    /// direct-dependency list is suppressed and not descended into.
    pub fn dependencies_tree(
        &self,
        package: &str,
        max_depth: usize,
        show_parent_deps: bool,
    ) -> QueryOutcome {
        match self.graph.dependencies_of(package) {
            Some(_) => QueryOutcome::DependencyTree {
                package: package.to_string(),
                rows: self.walk_tree(
                    DependencyGraph::dependencies_of,
                    package,
                    max_depth,
                    !show_parent_deps,
                ),
            },
            None if self.graph.has_dependents(package) => QueryOutcome::NoDependencies {
                package: package.to_string(),
            },
            None => QueryOutcome::NotFound {
                package: package.to_string(),
            },
        }
    }

    /// Tree-mode reverse walk. Parent-duplicate suppression is never
    /// applied here; only the forward tree honors show_parent_deps.
    pub fn dependents_tree(&self, package: &str, max_depth: usize) -> QueryOutcome {
        match self.graph.dependents_of(package) {
            Some(_) => QueryOutcome::DependentTree {
                package: package.to_string(),
                rows: self.walk_tree(DependencyGraph::dependents_of, package, max_depth, false),
            },
            None if self.graph.has_dependencies(package) => QueryOutcome::NoDependents {
                package: package.to_string(),
            },
            None => QueryOutcome::NotFound {
                package: package.to_string(),
            },
        }
    }

    /// Flat-mode forward walk: the deduplicated transitive closure within
    /// the depth bound, sorted for display. Direct dependencies are depth
    /// 1 and always included; expansion beyond them starts at depth 2.
    pub fn dependencies_flat(&self, package: &str, max_depth: usize) -> QueryOutcome {
        match self.graph.dependencies_of(package) {
            Some(direct) => QueryOutcome::DependencyList {
                package: package.to_string(),
                names: self.collect_flat(DependencyGraph::dependencies_of, direct, max_depth),
            },
            None if self.graph.has_dependents(package) => QueryOutcome::NoDependencies {
                package: package.to_string(),
            },
            None => QueryOutcome::NotFound {
                package: package.to_string(),
            },
        }
    }

    /// Flat-mode reverse walk over the reverse graph.
    pub fn dependents_flat(&self, package: &str, max_depth: usize) -> QueryOutcome {
        match self.graph.dependents_of(package) {
            Some(direct) => QueryOutcome::DependentList {
                package: package.to_string(),
                names: self.collect_flat(DependencyGraph::dependents_of, direct, max_depth),
            },
            None if self.graph.has_dependencies(package) => QueryOutcome::NoDependents {
                package: package.to_string(),
            },
            None => QueryOutcome::NotFound {
                package: package.to_string(),
            },
        }
    }

    /// Depth-first preorder emission with an explicit frame stack.
    ///
    /// Equivalent to the recursive walk: at each node the sorted children
    /// are emitted at the current depth and descended into immediately,
    /// one past the bound stops the descent. Suppressed children are
    /// neither emitted nor descended into.
    fn walk_tree(
        &self,
        neighbors: Neighbors,
        root: &str,
        max_depth: usize,
        suppress_parent_duplicates: bool,
    ) -> Vec<TreeRow> {
        let mut rows = Vec::new();

        let Some(root_list) = neighbors(self.graph, root) else {
            return rows;
        };
        if max_depth < 1 {
            return rows;
        }

        let mut stack = vec![TreeFrame {
            list: root_list,
            sorted: sorted_refs(root_list),
            idx: 0,
            depth: 1,
            parent_list: &[],
        }];

        while let Some(frame) = stack.last_mut() {
            if frame.idx >= frame.sorted.len() {
                stack.pop();
                continue;
            }

            let dep = frame.sorted[frame.idx];
            frame.idx += 1;
            let depth = frame.depth;
            let own_list = frame.list;

            if suppress_parent_duplicates && frame.parent_list.contains(dep) {
                continue;
            }

            rows.push(TreeRow {
                depth,
                name: dep.clone(),
            });

            if depth + 1 <= max_depth {
                if let Some(child_list) = neighbors(self.graph, dep.as_str()) {
                    stack.push(TreeFrame {
                        list: child_list,
                        sorted: sorted_refs(child_list),
                        idx: 0,
                        depth: depth + 1,
                        parent_list: own_list,
                    });
                }
            }
        }

        rows
    }

    /// Depth-first set accumulation with an explicit frame stack.
    ///
    /// A name is expanded only the first time it is seen, at the depth it
    /// was first reached; the direct list is consumed in insertion order
    /// and the final set is sorted for display.
    fn collect_flat(
        &self,
        neighbors: Neighbors,
        direct: &'g [PackageName],
        max_depth: usize,
    ) -> Vec<String> {
        let mut seen: Vec<&PackageName> = Vec::new();

        for dep in direct {
            if seen.contains(&dep) {
                continue;
            }
            seen.push(dep);

            if max_depth < 2 {
                continue;
            }
            let Some(list) = neighbors(self.graph, dep.as_str()) else {
                continue;
            };

            let mut stack = vec![FlatFrame {
                list,
                idx: 0,
                depth: 2,
            }];

            while let Some(frame) = stack.last_mut() {
                if frame.idx >= frame.list.len() {
                    stack.pop();
                    continue;
                }

                let item = &frame.list[frame.idx];
                frame.idx += 1;
                let depth = frame.depth;

                if seen.contains(&item) {
                    continue;
                }
                seen.push(item);

                if depth + 1 <= max_depth {
                    if let Some(child_list) = neighbors(self.graph, item.as_str()) {
                        stack.push(FlatFrame {
                            list: child_list,
                            idx: 0,
                            depth: depth + 1,
                        });
                    }
                }
            }
        }

        let mut names: Vec<String> = seen.iter().map(|name| name.as_str().to_string()).collect();
        names.sort();
        names
    }
}

fn sorted_refs(list: &[PackageName]) -> Vec<&PackageName> {
    let mut refs: Vec<&PackageName> = list.iter().collect();
    refs.sort();
    refs
}
