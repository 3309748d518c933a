use crate::application::dto::QueryResponse;
use crate::application::read_models::QueryViewBuilder;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonReportFormatter - renders a query response as pretty-printed JSON
///
/// The payload is the serializable query view: generation timestamp,
/// graph statistics, and a `kind`-tagged result object.
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, response: &QueryResponse) -> Result<String> {
        let view = QueryViewBuilder::build(response);
        let mut json = serde_json::to_string_pretty(&view)
            .map_err(|e| anyhow::anyhow!("Failed to serialize query result to JSON: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
