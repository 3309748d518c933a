use crate::graph_query::domain::{AdjacencyMap, DependencyGraph, EdgeRecord, PackageName};
use std::fmt;

/// A dependency loop detected while parsing annotated edge records.
///
/// `name -> depend` arrived after `depend -> name` was already recorded,
/// closing a 2-node cycle; the second-seen direction was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopNotice {
    pub name: PackageName,
    pub depend: PackageName,
}

impl fmt::Display for LoopNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dependency loop detected: [ {} ] depends on [ {} ] and [ {} ] depends on [ {} ]; keeping only [ {} ] -> [ {} ]",
            self.name, self.depend, self.depend, self.name, self.depend, self.name
        )
    }
}

/// Result of one parse pass: the built graph plus the loop diagnostics
/// collected along the way. The caller decides whether to surface the
/// notices (verbose mode) or discard them.
#[derive(Debug, Clone)]
pub struct ParseReport {
    pub graph: DependencyGraph,
    pub loop_notices: Vec<LoopNotice>,
}

/// GraphParser service building a DependencyGraph from graph-file text.
///
/// This service contains pure parsing logic with no I/O dependencies;
/// reading the file is the adapter's concern, and a read failure is the
/// only error path - parsing itself never fails. Empty input yields an
/// empty graph.
pub struct GraphParser;

impl GraphParser {
    /// Parses graph-file content into a dependency graph.
    ///
    /// Plain 3-field edge records are appended as-is, duplicates included.
    /// Annotated 4-field records go through the loop-aware path:
    /// - self-loops are skipped,
    /// - an edge whose reverse is already recorded closes a 2-cycle and is
    ///   skipped with a LoopNotice (longer cycles are not detected),
    /// - otherwise the edge is appended unless already present.
    pub fn parse(content: &str) -> ParseReport {
        let mut forward = AdjacencyMap::new();
        let mut loop_notices = Vec::new();

        for line in content.lines() {
            let Some(edge) = EdgeRecord::parse_line(line) else {
                continue;
            };

            if !edge.annotated {
                forward.entry(edge.name).or_default().push(edge.depend);
                continue;
            }

            if edge.name == edge.depend {
                continue;
            }

            let closes_cycle = forward
                .get(edge.depend.as_str())
                .is_some_and(|depends| depends.contains(&edge.name));
            if closes_cycle {
                loop_notices.push(LoopNotice {
                    name: edge.name,
                    depend: edge.depend,
                });
                continue;
            }

            let depends = forward.entry(edge.name).or_default();
            if !depends.contains(&edge.depend) {
                depends.push(edge.depend);
            }
        }

        ParseReport {
            graph: DependencyGraph::from_forward(forward),
            loop_notices,
        }
    }
}
