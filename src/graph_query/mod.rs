/// Graph query bounded context
///
/// Contains the domain model (packages, edges, the dependency graph
/// aggregate) and the domain services that parse, match, and traverse it.
pub mod domain;
pub mod services;
