use crate::application::dto::QueryResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering query responses
///
/// Implementations turn the structured query response into a textual
/// report (plain text, JSON, ...) ready for presentation.
pub trait ReportFormatter {
    /// Formats a query response into its final textual form
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &QueryResponse) -> Result<String>;
}
