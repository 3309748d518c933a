/// Application layer - Use cases and DTOs
///
/// Orchestrates the domain services behind the ports, carrying data in
/// and out through request/response DTOs.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
