use std::sync::Arc;

use async_trait::async_trait;
use catalog_model::CastMemberID;
use tracing::info;

use super::UseCase;
use crate::application::dto::{
    CastMemberOutput, CreateCastMemberInput, DeleteOutput, IdInput, ListInput,
    UpdateCastMemberInput,
};
use crate::database::pagination::{PageRequest, Paginated};
use crate::database::ports::CastMemberRepository;
use crate::domain::CastMember;
use crate::error::Result;

#[derive(Clone)]
pub struct CreateCastMember {
    repository: Arc<dyn CastMemberRepository>,
}

debug_ports!(CreateCastMember { repository });

impl CreateCastMember {
    pub fn new(repository: Arc<dyn CastMemberRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<CreateCastMemberInput, CastMemberOutput> for CreateCastMember {
    async fn execute(
        &self,
        input: CreateCastMemberInput,
    ) -> Result<CastMemberOutput> {
        let cast_member = CastMember::new(input.name, input.kind)?;
        let stored = self.repository.insert(&cast_member).await?;
        info!(cast_member_id = %stored.id(), kind = %stored.kind(), "cast member created");
        Ok(stored.into())
    }
}

#[derive(Clone)]
pub struct ListCastMember {
    repository: Arc<dyn CastMemberRepository>,
}

debug_ports!(ListCastMember { repository });

impl ListCastMember {
    pub fn new(repository: Arc<dyn CastMemberRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<IdInput, CastMemberOutput> for ListCastMember {
    async fn execute(&self, input: IdInput) -> Result<CastMemberOutput> {
        let id = CastMemberID::parse(&input.id)?;
        Ok(self.repository.find_by_id(id).await?.into())
    }
}

#[derive(Clone)]
pub struct ListCastMembers {
    repository: Arc<dyn CastMemberRepository>,
}

debug_ports!(ListCastMembers { repository });

impl ListCastMembers {
    pub fn new(repository: Arc<dyn CastMemberRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<ListInput, Paginated<CastMemberOutput>> for ListCastMembers {
    async fn execute(
        &self,
        input: ListInput,
    ) -> Result<Paginated<CastMemberOutput>> {
        let page = self.repository.paginate(&PageRequest::from(input)).await?;
        Ok(page.map(CastMemberOutput::from))
    }
}

#[derive(Clone)]
pub struct UpdateCastMember {
    repository: Arc<dyn CastMemberRepository>,
}

debug_ports!(UpdateCastMember { repository });

impl UpdateCastMember {
    pub fn new(repository: Arc<dyn CastMemberRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<UpdateCastMemberInput, CastMemberOutput> for UpdateCastMember {
    async fn execute(
        &self,
        input: UpdateCastMemberInput,
    ) -> Result<CastMemberOutput> {
        let id = CastMemberID::parse(&input.id)?;
        let mut cast_member = self.repository.find_by_id(id).await?;
        cast_member.update(input.name)?;

        let stored = self.repository.update(&cast_member).await?;
        info!(cast_member_id = %id, "cast member updated");
        Ok(stored.into())
    }
}

#[derive(Clone)]
pub struct DeleteCastMember {
    repository: Arc<dyn CastMemberRepository>,
}

debug_ports!(DeleteCastMember { repository });

impl DeleteCastMember {
    pub fn new(repository: Arc<dyn CastMemberRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<IdInput, DeleteOutput> for DeleteCastMember {
    async fn execute(&self, input: IdInput) -> Result<DeleteOutput> {
        let id = CastMemberID::parse(&input.id)?;
        let success = self.repository.delete(id).await?;
        info!(cast_member_id = %id, success, "cast member deleted");
        Ok(DeleteOutput { success })
    }
}
