use crate::application::dto::{QueryResponse, ResponseOutcome};
use crate::application::read_models::{
    dependency_header, dependent_header, no_match_message, outcome_message,
};
use crate::graph_query::services::QueryOutcome;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// TextReportFormatter - renders a query response as plain text
///
/// Mirrors the classic console layout: listings open with a
/// `Package [ name ] ...` header, tree rows indent one tab per depth
/// level, flat rows indent a single tab.
pub struct TextReportFormatter;

impl TextReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextReportFormatter {
    fn format(&self, response: &QueryResponse) -> Result<String> {
        let mut out = String::new();

        match &response.outcome {
            ResponseOutcome::PackageIndex { packages }
            | ResponseOutcome::PatternMatches { packages, .. } => {
                for name in packages {
                    out.push_str(name);
                    out.push('\n');
                }
            }
            ResponseOutcome::NoPatternMatch { pattern } => {
                out.push_str(&no_match_message(pattern));
                out.push('\n');
            }
            ResponseOutcome::Traversal(outcome) => {
                if let Some(message) = outcome_message(outcome) {
                    out.push_str(&message);
                    out.push('\n');
                } else {
                    Self::format_listing(&mut out, outcome);
                }
            }
        }

        Ok(out)
    }
}

impl TextReportFormatter {
    fn format_listing(out: &mut String, outcome: &QueryOutcome) {
        match outcome {
            QueryOutcome::DependencyTree { package, rows } => {
                out.push('\n');
                out.push_str(&dependency_header(package));
                out.push('\n');
                for row in rows {
                    out.push_str(&"\t".repeat(row.depth));
                    out.push_str(row.name.as_str());
                    out.push('\n');
                }
            }
            QueryOutcome::DependentTree { package, rows } => {
                out.push('\n');
                out.push_str(&dependent_header(package));
                out.push('\n');
                for row in rows {
                    out.push_str(&"\t".repeat(row.depth));
                    out.push_str(row.name.as_str());
                    out.push('\n');
                }
            }
            QueryOutcome::DependencyList { package, names } => {
                out.push('\n');
                out.push_str(&dependency_header(package));
                out.push('\n');
                for name in names {
                    out.push('\t');
                    out.push_str(name);
                    out.push('\n');
                }
            }
            QueryOutcome::DependentList { package, names } => {
                out.push('\n');
                out.push_str(&dependent_header(package));
                out.push('\n');
                for name in names {
                    out.push('\t');
                    out.push_str(name);
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}
