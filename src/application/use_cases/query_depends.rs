use crate::application::dto::{
    OutputMode, QueryDirection, QueryRequest, QueryResponse, ResponseOutcome,
};
use crate::graph_query::domain::DependencyGraph;
use crate::graph_query::services::{GraphParser, PackageMatcher, QueryOutcome, TraversalEngine};
use crate::ports::outbound::{DiagnosticsReporter, GraphFileReader};
use crate::shared::Result;

/// QueryDependsUseCase - Core use case for dependency queries
///
/// Orchestrates one invocation: read the graph file, parse it into the
/// immutable graph aggregate, resolve the package pattern, and run the
/// requested traversal. Infrastructure is injected generically.
///
/// # Type Parameters
/// * `GR` - GraphFileReader implementation
/// * `DR` - DiagnosticsReporter implementation
pub struct QueryDependsUseCase<GR, DR> {
    graph_reader: GR,
    diagnostics: DR,
}

impl<GR, DR> QueryDependsUseCase<GR, DR>
where
    GR: GraphFileReader,
    DR: DiagnosticsReporter,
{
    /// Creates a new QueryDependsUseCase with injected dependencies
    pub fn new(graph_reader: GR, diagnostics: DR) -> Self {
        Self {
            graph_reader,
            diagnostics,
        }
    }

    /// Executes the query use case
    ///
    /// # Errors
    /// Fails only when the graph file cannot be read. Unknown packages
    /// and unmatched patterns are informational outcomes in the response.
    pub fn execute(&self, request: QueryRequest) -> Result<QueryResponse> {
        let content = self.graph_reader.read_graph(&request.graph_path)?;

        let report = GraphParser::parse(&content);
        if request.verbose {
            for notice in &report.loop_notices {
                self.diagnostics.report_warning(&notice.to_string());
            }
            self.diagnostics.report(&format!(
                "Parsed {} package(s), {} dependency edge(s)",
                report.graph.package_count(),
                report.graph.edge_count()
            ));
        }
        let graph = report.graph;

        let outcome = match &request.pattern {
            None => ResponseOutcome::PackageIndex {
                packages: graph
                    .package_names()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            },
            Some(pattern) => Self::resolve_and_query(&graph, pattern, &request),
        };

        Ok(QueryResponse {
            package_count: graph.package_count(),
            edge_count: graph.edge_count(),
            outcome,
        })
    }

    /// Resolves the pattern and dispatches the traversal for a single
    /// match. Multiple wildcard matches are listed without traversal.
    fn resolve_and_query(
        graph: &DependencyGraph,
        pattern: &str,
        request: &QueryRequest,
    ) -> ResponseOutcome {
        let mut matches = PackageMatcher::resolve(pattern, graph);

        match matches.len() {
            0 => ResponseOutcome::NoPatternMatch {
                pattern: pattern.to_string(),
            },
            1 => {
                let package = matches.remove(0);
                ResponseOutcome::Traversal(Self::run_traversal(graph, &package, request))
            }
            _ => ResponseOutcome::PatternMatches {
                pattern: pattern.to_string(),
                packages: matches,
            },
        }
    }

    fn run_traversal(
        graph: &DependencyGraph,
        package: &str,
        request: &QueryRequest,
    ) -> QueryOutcome {
        let engine = TraversalEngine::new(graph);

        match (request.direction, request.mode) {
            (QueryDirection::Forward, OutputMode::Tree) => {
                engine.dependencies_tree(package, request.max_depth, request.show_parent_deps)
            }
            (QueryDirection::Forward, OutputMode::Flat) => {
                engine.dependencies_flat(package, request.max_depth)
            }
            (QueryDirection::Reverse, OutputMode::Tree) => {
                engine.dependents_tree(package, request.max_depth)
            }
            (QueryDirection::Reverse, OutputMode::Flat) => {
                engine.dependents_flat(package, request.max_depth)
            }
        }
    }
}
