/// Console adapters for diagnostics output
mod diagnostics_reporter;

pub use diagnostics_reporter::StderrDiagnosticsReporter;
