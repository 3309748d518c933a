/// Mock implementations for testing
mod mock_diagnostics_reporter;
mod mock_graph_reader;

pub use mock_diagnostics_reporter::MockDiagnosticsReporter;
pub use mock_graph_reader::MockGraphReader;
