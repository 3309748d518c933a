/// Domain services containing pure graph-query logic
pub mod graph_parser;
pub mod package_matcher;
pub mod traversal;

pub use graph_parser::{GraphParser, LoopNotice, ParseReport};
pub use package_matcher::PackageMatcher;
pub use traversal::{QueryOutcome, TraversalEngine, TreeRow, DEPTH_UNLIMITED};
