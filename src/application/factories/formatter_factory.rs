use crate::adapters::outbound::formatters::{JsonReportFormatter, TextReportFormatter};
use crate::ports::outbound::ReportFormatter;

/// Formatter types available in the application layer.
///
/// The CLI maps its own output-format flag onto this enum so the
/// application layer never depends on clap types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterType {
    Text,
    Json,
}

/// Factory for creating report formatter instances
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified type
    pub fn create(formatter_type: FormatterType) -> Box<dyn ReportFormatter> {
        match formatter_type {
            FormatterType::Text => Box::new(TextReportFormatter::new()),
            FormatterType::Json => Box::new(JsonReportFormatter::new()),
        }
    }
}
