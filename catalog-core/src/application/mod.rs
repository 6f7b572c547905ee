//! Application layer: DTOs, use cases and the repository bundle they are
//! built from.

pub mod dto;
pub mod unit_of_work;
pub mod use_cases;

pub use unit_of_work::CatalogRepositories;
pub use use_cases::UseCase;
