//! Query view structs for the read model
//!
//! These structs provide a serialization-ready view of a query response,
//! decoupling the output formats from the domain types. The canonical
//! user-facing message strings for informational outcomes live here so
//! the text and JSON formatters stay in agreement.

use crate::application::dto::{QueryResponse, ResponseOutcome};
use crate::graph_query::services::{QueryOutcome, TreeRow};
use serde::Serialize;

/// Canonical message for an informational (non-listing) outcome, or
/// `None` when the outcome carries a listing instead.
pub fn outcome_message(outcome: &QueryOutcome) -> Option<String> {
    match outcome {
        QueryOutcome::NotFound { package } => {
            Some(format!("Package [ {} ] not found", package))
        }
        QueryOutcome::NoDependencies { package } => {
            Some(format!("Package [ {} ] has no dependencies", package))
        }
        QueryOutcome::NoDependents { package } => {
            Some(format!("No package depends on [ {} ]", package))
        }
        _ => None,
    }
}

/// Canonical message for a wildcard pattern that matched nothing.
pub fn no_match_message(pattern: &str) -> String {
    format!("No package found matching [ {} ]", pattern)
}

/// Header line introducing a dependency listing.
pub fn dependency_header(package: &str) -> String {
    format!("Package [ {} ] depends on", package)
}

/// Header line introducing a dependent listing.
pub fn dependent_header(package: &str) -> String {
    format!("Package [ {} ] is needed by", package)
}

/// Top-level serializable view of a query response.
#[derive(Debug, Serialize)]
pub struct QueryView {
    /// RFC 3339 generation timestamp
    pub generated: String,
    pub package_count: usize,
    pub edge_count: usize,
    pub result: ResultView,
}

/// Serializable view of the query result itself.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ResultView {
    PackageIndex {
        packages: Vec<String>,
    },
    PatternMatches {
        pattern: String,
        packages: Vec<String>,
    },
    Message {
        message: String,
    },
    Tree {
        package: String,
        relation: String,
        rows: Vec<TreeRowView>,
    },
    Flat {
        package: String,
        relation: String,
        packages: Vec<String>,
    },
}

/// One row of a tree listing.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TreeRowView {
    pub depth: usize,
    pub name: String,
}

/// Builder assembling a QueryView from a query response.
pub struct QueryViewBuilder;

impl QueryViewBuilder {
    pub fn build(response: &QueryResponse) -> QueryView {
        QueryView {
            generated: chrono::Utc::now().to_rfc3339(),
            package_count: response.package_count,
            edge_count: response.edge_count,
            result: Self::build_result(&response.outcome),
        }
    }

    fn build_result(outcome: &ResponseOutcome) -> ResultView {
        match outcome {
            ResponseOutcome::PackageIndex { packages } => ResultView::PackageIndex {
                packages: packages.clone(),
            },
            ResponseOutcome::PatternMatches { pattern, packages } => ResultView::PatternMatches {
                pattern: pattern.clone(),
                packages: packages.clone(),
            },
            ResponseOutcome::NoPatternMatch { pattern } => ResultView::Message {
                message: no_match_message(pattern),
            },
            ResponseOutcome::Traversal(outcome) => Self::build_traversal(outcome),
        }
    }

    fn build_traversal(outcome: &QueryOutcome) -> ResultView {
        if let Some(message) = outcome_message(outcome) {
            return ResultView::Message { message };
        }

        match outcome {
            QueryOutcome::DependencyTree { package, rows } => ResultView::Tree {
                package: package.clone(),
                relation: "depends-on".to_string(),
                rows: Self::tree_rows(rows),
            },
            QueryOutcome::DependentTree { package, rows } => ResultView::Tree {
                package: package.clone(),
                relation: "needed-by".to_string(),
                rows: Self::tree_rows(rows),
            },
            QueryOutcome::DependencyList { package, names } => ResultView::Flat {
                package: package.clone(),
                relation: "depends-on".to_string(),
                packages: names.clone(),
            },
            QueryOutcome::DependentList { package, names } => ResultView::Flat {
                package: package.clone(),
                relation: "needed-by".to_string(),
                packages: names.clone(),
            },
            // outcome_message covered the informational variants
            _ => unreachable!("informational outcome handled above"),
        }
    }

    fn tree_rows(rows: &[TreeRow]) -> Vec<TreeRowView> {
        rows.iter()
            .map(|row| TreeRowView {
                depth: row.depth,
                name: row.name.as_str().to_string(),
            })
            .collect()
    }
}
