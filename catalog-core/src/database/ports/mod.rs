//! Repository ports (interfaces), one per aggregate. Implementations live in
//! the Postgres adapter under `database::infrastructure::postgres`.

pub mod cast_members;
pub mod categories;
pub mod genres;
pub mod videos;

pub use cast_members::CastMemberRepository;
pub use categories::CategoryRepository;
pub use genres::GenreRepository;
pub use videos::VideoRepository;

#[cfg(test)]
pub use cast_members::MockCastMemberRepository;
#[cfg(test)]
pub use categories::MockCategoryRepository;
#[cfg(test)]
pub use genres::MockGenreRepository;
#[cfg(test)]
pub use videos::MockVideoRepository;
