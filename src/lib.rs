//! oe-depends - Dependency query tool for bitbake pn-depends graphs
//!
//! This library parses the `pn-depends.dot` graph description written by
//! `bitbake -g <recipe>` and answers queries about package dependencies
//! and reverse dependencies, flat or as an indented tree, with depth
//! limiting, wildcard matching, and loop-dependency detection.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`graph_query`): Pure graph model and the parse,
//!   match, and traversal services
//! - **Application Layer** (`application`): Use cases, DTOs, read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use oe_depends::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let graph_reader = FileSystemReader::new();
//! let diagnostics = StderrDiagnosticsReporter::new();
//!
//! // Create use case
//! let use_case = QueryDependsUseCase::new(graph_reader, diagnostics);
//!
//! // Execute
//! let request = QueryRequest::builder()
//!     .pattern(Some("busybox".to_string()))
//!     .build();
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let formatter = TextReportFormatter::new();
//! let output = formatter.format(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod graph_query;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrDiagnosticsReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonReportFormatter, TextReportFormatter};
    pub use crate::application::dto::{
        OutputMode, QueryDirection, QueryRequest, QueryResponse, ResponseOutcome,
        DEFAULT_GRAPH_FILE,
    };
    pub use crate::application::factories::{FormatterFactory, FormatterType};
    pub use crate::application::read_models::{QueryView, QueryViewBuilder};
    pub use crate::application::use_cases::QueryDependsUseCase;
    pub use crate::graph_query::domain::{DependencyGraph, EdgeRecord, PackageName};
    pub use crate::graph_query::services::{
        GraphParser, PackageMatcher, QueryOutcome, TraversalEngine, TreeRow, DEPTH_UNLIMITED,
    };
    pub use crate::ports::outbound::{
        DiagnosticsReporter, GraphFileReader, OutputPresenter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
