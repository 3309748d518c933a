use crate::ports::outbound::DiagnosticsReporter;
use owo_colors::OwoColorize;

/// StderrDiagnosticsReporter adapter for reporting diagnostics to stderr
///
/// Diagnostics go to stderr so they never mix with query output on
/// stdout, which may be piped or redirected to a file.
pub struct StderrDiagnosticsReporter;

impl StderrDiagnosticsReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrDiagnosticsReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticsReporter for StderrDiagnosticsReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_warning(&self, message: &str) {
        eprintln!("⚠️  {}", message.yellow());
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", message.red());
    }
}
