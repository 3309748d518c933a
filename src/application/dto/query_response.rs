use crate::graph_query::services::QueryOutcome;

/// Top-level result of one invocation of the query use case.
///
/// Traversal outcomes are wrapped so the pattern-resolution results
/// (index listing, multiple wildcard matches, no match) sit beside them
/// in a single value the formatters can render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// No package argument: the sorted index of known package names
    PackageIndex { packages: Vec<String> },
    /// A wildcard pattern matched more than one name; no traversal ran
    PatternMatches {
        pattern: String,
        packages: Vec<String>,
    },
    /// A wildcard pattern matched nothing
    NoPatternMatch { pattern: String },
    /// A single resolved package was queried
    Traversal(QueryOutcome),
}

/// QueryResponse - Internal response DTO for the dependency query use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResponse {
    pub outcome: ResponseOutcome,
    /// Number of packages with a forward entry in the parsed graph
    pub package_count: usize,
    /// Total number of dependency edges in the parsed graph
    pub edge_count: usize,
}
