use async_trait::async_trait;
use catalog_model::VideoID;

use crate::database::pagination::{ListFilter, PageRequest, Paginated};
use crate::domain::Video;
use crate::error::Result;

/// Persistence port for videos, their relations and media slots.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoRepository: Send + Sync {
    async fn insert(&self, video: &Video) -> Result<Video>;

    /// Fails with `NotFound` when the row is missing or soft-deleted.
    async fn find_by_id(&self, id: VideoID) -> Result<Video>;

    /// Title search; relations and media are loaded for every row.
    async fn find_all(&self, list: &ListFilter) -> Result<Vec<Video>>;

    async fn paginate(&self, request: &PageRequest) -> Result<Paginated<Video>>;

    async fn update(&self, video: &Video) -> Result<Video>;

    /// Soft delete. Fails with `NotFound` when nothing matched.
    async fn delete(&self, id: VideoID) -> Result<bool>;

    /// Upsert the image and media slots the video carries, then return the
    /// stored video.
    async fn update_media(&self, video: &Video) -> Result<Video>;
}
