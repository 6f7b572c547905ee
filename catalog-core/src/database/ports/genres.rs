use async_trait::async_trait;
use catalog_model::GenreID;

use crate::database::pagination::{ListFilter, PageRequest, Paginated};
use crate::domain::Genre;
use crate::error::Result;

/// Persistence port for genres and their category links.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// Stores the genre row and its category links in one transaction.
    async fn insert(&self, genre: &Genre) -> Result<Genre>;

    /// Fails with `NotFound` when the row is missing or soft-deleted.
    async fn find_by_id(&self, id: GenreID) -> Result<Genre>;

    /// Subset of `ids` that exists and is not soft-deleted.
    async fn get_ids_list_ids(&self, ids: &[GenreID]) -> Result<Vec<GenreID>>;

    async fn find_all(&self, list: &ListFilter) -> Result<Vec<Genre>>;

    async fn paginate(&self, request: &PageRequest) -> Result<Paginated<Genre>>;

    /// Replaces the stored category links with the genre's current set.
    async fn update(&self, genre: &Genre) -> Result<Genre>;

    /// Soft delete. Fails with `NotFound` when nothing matched.
    async fn delete(&self, id: GenreID) -> Result<bool>;
}
