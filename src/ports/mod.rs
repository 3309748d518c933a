/// Ports module defining interfaces for hexagonal architecture
///
/// Ports are the boundaries between the application core and the
/// outside world. Outbound ports are implemented by adapters.
pub mod outbound;
