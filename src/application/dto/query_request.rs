use crate::graph_query::services::DEPTH_UNLIMITED;
use std::path::PathBuf;

/// Default graph file name, as written by `bitbake -g <recipe>`.
pub const DEFAULT_GRAPH_FILE: &str = "pn-depends.dot";

/// Which adjacency direction a query walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryDirection {
    /// What the package depends on
    Forward,
    /// What depends on the package
    Reverse,
}

/// Shape of the query output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Deduplicated, sorted flat list
    Flat,
    /// Indented per-branch tree
    Tree,
}

/// QueryRequest - Internal request DTO for the dependency query use case
#[derive(Debug, Clone)]
pub struct QueryRequest {
    /// Path to the graph file
    pub graph_path: PathBuf,
    /// Package name or wildcard pattern; None lists all known packages
    pub pattern: Option<String>,
    /// Forward or reverse query
    pub direction: QueryDirection,
    /// Flat or tree output
    pub mode: OutputMode,
    /// Inclusive traversal depth bound
    pub max_depth: usize,
    /// Disable parent-duplicate suppression in the forward tree walk
    pub show_parent_deps: bool,
    /// Surface parse diagnostics (loop notices, statistics)
    pub verbose: bool,
}

impl QueryRequest {
    pub fn builder() -> QueryRequestBuilder {
        QueryRequestBuilder::default()
    }
}

/// Builder for QueryRequest.
///
/// Applies the defaults of the CLI surface and clamps the depth bound to
/// the unbounded sentinel so a pathological `--depth` value cannot make
/// tree output explode further than "unbounded" already allows.
#[derive(Debug)]
pub struct QueryRequestBuilder {
    graph_path: PathBuf,
    pattern: Option<String>,
    direction: QueryDirection,
    mode: OutputMode,
    max_depth: usize,
    show_parent_deps: bool,
    verbose: bool,
}

impl Default for QueryRequestBuilder {
    fn default() -> Self {
        Self {
            graph_path: PathBuf::from(DEFAULT_GRAPH_FILE),
            pattern: None,
            direction: QueryDirection::Forward,
            mode: OutputMode::Flat,
            max_depth: DEPTH_UNLIMITED,
            show_parent_deps: false,
            verbose: false,
        }
    }
}

impl QueryRequestBuilder {
    pub fn graph_path(mut self, path: PathBuf) -> Self {
        self.graph_path = path;
        self
    }

    pub fn pattern(mut self, pattern: Option<String>) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn direction(mut self, direction: QueryDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn show_parent_deps(mut self, show: bool) -> Self {
        self.show_parent_deps = show;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn build(self) -> QueryRequest {
        QueryRequest {
            graph_path: self.graph_path,
            pattern: self.pattern,
            direction: self.direction,
            mode: self.mode,
            max_depth: self.max_depth.min(DEPTH_UNLIMITED),
            show_parent_deps: self.show_parent_deps,
            verbose: self.verbose,
        }
    }
}
