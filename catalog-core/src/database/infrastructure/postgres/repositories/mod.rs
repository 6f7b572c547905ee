//! PostgreSQL-backed repository implementations.

pub mod cast_members;
pub mod categories;
pub mod genres;
pub mod videos;

pub use cast_members::PostgresCastMemberRepository;
pub use categories::PostgresCategoryRepository;
pub use genres::PostgresGenreRepository;
pub use videos::PostgresVideoRepository;
