/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: file system access,
/// console diagnostics, and report formatters.
pub mod outbound;
