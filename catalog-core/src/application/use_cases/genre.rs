use std::sync::Arc;

use async_trait::async_trait;
use catalog_model::{CategoryID, GenreID, parse_ids};
use tracing::info;

use super::UseCase;
use super::relations::{CATEGORY, ensure_all_found};
use crate::application::dto::{
    CreateGenreInput, DeleteOutput, GenreOutput, IdInput, ListInput,
    UpdateGenreInput,
};
use crate::database::pagination::{PageRequest, Paginated};
use crate::database::ports::{CategoryRepository, GenreRepository};
use crate::domain::Genre;
use crate::error::Result;

async fn validate_categories(
    categories: &dyn CategoryRepository,
    ids: &[CategoryID],
) -> Result<()> {
    if ids.is_empty() {
        return Ok(());
    }
    let found = categories.get_ids_list_ids(ids).await?;
    ensure_all_found(CATEGORY, ids, &found)
}

#[derive(Clone)]
pub struct CreateGenre {
    genres: Arc<dyn GenreRepository>,
    categories: Arc<dyn CategoryRepository>,
}

debug_ports!(CreateGenre { genres, categories });

impl CreateGenre {
    pub fn new(
        genres: Arc<dyn GenreRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self { genres, categories }
    }
}

#[async_trait]
impl UseCase<CreateGenreInput, GenreOutput> for CreateGenre {
    async fn execute(&self, input: CreateGenreInput) -> Result<GenreOutput> {
        let category_ids: Vec<CategoryID> = parse_ids(&input.categories_id)?;
        validate_categories(self.categories.as_ref(), &category_ids).await?;

        let mut genre = Genre::new(input.name)?;
        if !input.is_active {
            genre.deactivate();
        }
        for category_id in category_ids {
            genre.add_category(category_id);
        }

        let stored = self.genres.insert(&genre).await?;
        info!(
            genre_id = %stored.id(),
            categories = stored.categories_id().len(),
            "genre created"
        );
        Ok(stored.into())
    }
}

#[derive(Clone)]
pub struct ListGenre {
    genres: Arc<dyn GenreRepository>,
}

debug_ports!(ListGenre { genres });

impl ListGenre {
    pub fn new(genres: Arc<dyn GenreRepository>) -> Self {
        Self { genres }
    }
}

#[async_trait]
impl UseCase<IdInput, GenreOutput> for ListGenre {
    async fn execute(&self, input: IdInput) -> Result<GenreOutput> {
        let id = GenreID::parse(&input.id)?;
        Ok(self.genres.find_by_id(id).await?.into())
    }
}

#[derive(Clone)]
pub struct ListGenres {
    genres: Arc<dyn GenreRepository>,
}

debug_ports!(ListGenres { genres });

impl ListGenres {
    pub fn new(genres: Arc<dyn GenreRepository>) -> Self {
        Self { genres }
    }
}

#[async_trait]
impl UseCase<ListInput, Paginated<GenreOutput>> for ListGenres {
    async fn execute(&self, input: ListInput) -> Result<Paginated<GenreOutput>> {
        let page = self.genres.paginate(&PageRequest::from(input)).await?;
        Ok(page.map(GenreOutput::from))
    }
}

#[derive(Clone)]
pub struct UpdateGenre {
    genres: Arc<dyn GenreRepository>,
    categories: Arc<dyn CategoryRepository>,
}

debug_ports!(UpdateGenre { genres, categories });

impl UpdateGenre {
    pub fn new(
        genres: Arc<dyn GenreRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self { genres, categories }
    }
}

#[async_trait]
impl UseCase<UpdateGenreInput, GenreOutput> for UpdateGenre {
    async fn execute(&self, input: UpdateGenreInput) -> Result<GenreOutput> {
        let id = GenreID::parse(&input.id)?;
        let category_ids: Vec<CategoryID> = parse_ids(&input.categories_id)?;

        let mut genre = self.genres.find_by_id(id).await?;
        validate_categories(self.categories.as_ref(), &category_ids).await?;

        genre.update(input.name)?;
        let stale: Vec<CategoryID> = genre.categories_id().to_vec();
        for category_id in stale {
            genre.remove_category(category_id);
        }
        for category_id in category_ids {
            genre.add_category(category_id);
        }

        let stored = self.genres.update(&genre).await?;
        info!(genre_id = %id, "genre updated");
        Ok(stored.into())
    }
}

#[derive(Clone)]
pub struct DeleteGenre {
    genres: Arc<dyn GenreRepository>,
}

debug_ports!(DeleteGenre { genres });

impl DeleteGenre {
    pub fn new(genres: Arc<dyn GenreRepository>) -> Self {
        Self { genres }
    }
}

#[async_trait]
impl UseCase<IdInput, DeleteOutput> for DeleteGenre {
    async fn execute(&self, input: IdInput) -> Result<DeleteOutput> {
        let id = GenreID::parse(&input.id)?;
        let success = self.genres.delete(id).await?;
        info!(genre_id = %id, success, "genre deleted");
        Ok(DeleteOutput { success })
    }
}
