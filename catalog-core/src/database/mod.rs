//! Persistence: pagination types, repository ports and the PostgreSQL
//! adapter behind the `database` feature.

#[cfg(feature = "database")]
pub mod infrastructure;
pub mod pagination;
pub mod ports;

pub use pagination::{
    DEFAULT_PAGE, DEFAULT_PER_PAGE, ListFilter, PageRequest, Paginated,
    SortOrder,
};

#[cfg(feature = "database")]
pub use infrastructure::postgres::{PoolSettings, PostgresDatabase};
