/// Use cases module containing application business logic orchestration
mod query_depends;

pub use query_depends::QueryDependsUseCase;
