use async_trait::async_trait;
use catalog_model::CastMemberID;

use crate::database::pagination::{ListFilter, PageRequest, Paginated};
use crate::domain::CastMember;
use crate::error::Result;

/// Persistence port for cast members.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CastMemberRepository: Send + Sync {
    async fn insert(&self, cast_member: &CastMember) -> Result<CastMember>;

    async fn find_by_id(&self, id: CastMemberID) -> Result<CastMember>;

    /// Subset of `ids` that exists and is not soft-deleted.
    async fn get_ids_list_ids(&self, ids: &[CastMemberID]) -> Result<Vec<CastMemberID>>;

    async fn find_all(&self, list: &ListFilter) -> Result<Vec<CastMember>>;

    async fn paginate(&self, request: &PageRequest) -> Result<Paginated<CastMember>>;

    async fn update(&self, cast_member: &CastMember) -> Result<CastMember>;

    async fn delete(&self, id: CastMemberID) -> Result<bool>;
}
