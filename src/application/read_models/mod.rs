//! Read models decoupling output formats from domain types
pub mod query_view;

pub use query_view::{
    dependency_header, dependent_header, no_match_message, outcome_message, QueryView,
    QueryViewBuilder, ResultView, TreeRowView,
};
