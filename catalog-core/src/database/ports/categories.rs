use async_trait::async_trait;
use catalog_model::CategoryID;

use crate::database::pagination::{ListFilter, PageRequest, Paginated};
use crate::domain::Category;
use crate::error::Result;

/// Persistence port for categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: &Category) -> Result<Category>;

    /// Fails with `NotFound` when the row is missing or soft-deleted.
    async fn find_by_id(&self, id: CategoryID) -> Result<Category>;

    /// Subset of `ids` that exists and is not soft-deleted.
    async fn get_ids_list_ids(&self, ids: &[CategoryID]) -> Result<Vec<CategoryID>>;

    async fn find_all(&self, list: &ListFilter) -> Result<Vec<Category>>;

    async fn paginate(&self, request: &PageRequest) -> Result<Paginated<Category>>;

    async fn update(&self, category: &Category) -> Result<Category>;

    /// Soft delete. Fails with `NotFound` when nothing matched.
    async fn delete(&self, id: CategoryID) -> Result<bool>;
}
