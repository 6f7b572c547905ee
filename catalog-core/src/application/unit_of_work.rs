use std::any::type_name_of_val;
use std::fmt;
use std::sync::Arc;

use crate::application::use_cases::{
    ChangeEncodedPath, CreateCastMember, CreateCategory, CreateGenre,
    CreateVideo, DeleteCastMember, DeleteCategory, DeleteGenre, DeleteVideo,
    ListCastMember, ListCastMembers, ListCategories, ListCategory, ListGenre,
    ListGenres, ListVideo, ListVideos, UpdateCastMember, UpdateCategory,
    UpdateGenre, UpdateVideo,
};
use crate::database::ports::{
    CastMemberRepository, CategoryRepository, GenreRepository, VideoRepository,
};
#[cfg(feature = "database")]
use crate::database::{
    PostgresDatabase,
    infrastructure::postgres::{
        PostgresCastMemberRepository, PostgresCategoryRepository,
        PostgresGenreRepository, PostgresVideoRepository,
    },
};

/// Every repository port the use cases need, behind trait objects.
#[derive(Clone)]
pub struct CatalogRepositories {
    pub categories: Arc<dyn CategoryRepository>,
    pub genres: Arc<dyn GenreRepository>,
    pub cast_members: Arc<dyn CastMemberRepository>,
    pub videos: Arc<dyn VideoRepository>,
}

impl fmt::Debug for CatalogRepositories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogRepositories")
            .field("categories", &type_name_of_val(self.categories.as_ref()))
            .field("genres", &type_name_of_val(self.genres.as_ref()))
            .field(
                "cast_members",
                &type_name_of_val(self.cast_members.as_ref()),
            )
            .field("videos", &type_name_of_val(self.videos.as_ref()))
            .finish()
    }
}

impl CatalogRepositories {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        genres: Arc<dyn GenreRepository>,
        cast_members: Arc<dyn CastMemberRepository>,
        videos: Arc<dyn VideoRepository>,
    ) -> Self {
        Self {
            categories,
            genres,
            cast_members,
            videos,
        }
    }

    /// Wire the PostgreSQL adapters over one shared pool.
    #[cfg(feature = "database")]
    pub fn postgres(db: &PostgresDatabase) -> Self {
        let pool = db.pool().clone();
        Self {
            categories: Arc::new(PostgresCategoryRepository::new(pool.clone())),
            genres: Arc::new(PostgresGenreRepository::new(pool.clone())),
            cast_members: Arc::new(PostgresCastMemberRepository::new(
                pool.clone(),
            )),
            videos: Arc::new(PostgresVideoRepository::new(pool)),
        }
    }

    pub fn create_category(&self) -> CreateCategory {
        CreateCategory::new(self.categories.clone())
    }

    pub fn list_category(&self) -> ListCategory {
        ListCategory::new(self.categories.clone())
    }

    pub fn list_categories(&self) -> ListCategories {
        ListCategories::new(self.categories.clone())
    }

    pub fn update_category(&self) -> UpdateCategory {
        UpdateCategory::new(self.categories.clone())
    }

    pub fn delete_category(&self) -> DeleteCategory {
        DeleteCategory::new(self.categories.clone())
    }

    pub fn create_genre(&self) -> CreateGenre {
        CreateGenre::new(self.genres.clone(), self.categories.clone())
    }

    pub fn list_genre(&self) -> ListGenre {
        ListGenre::new(self.genres.clone())
    }

    pub fn list_genres(&self) -> ListGenres {
        ListGenres::new(self.genres.clone())
    }

    pub fn update_genre(&self) -> UpdateGenre {
        UpdateGenre::new(self.genres.clone(), self.categories.clone())
    }

    pub fn delete_genre(&self) -> DeleteGenre {
        DeleteGenre::new(self.genres.clone())
    }

    pub fn create_cast_member(&self) -> CreateCastMember {
        CreateCastMember::new(self.cast_members.clone())
    }

    pub fn list_cast_member(&self) -> ListCastMember {
        ListCastMember::new(self.cast_members.clone())
    }

    pub fn list_cast_members(&self) -> ListCastMembers {
        ListCastMembers::new(self.cast_members.clone())
    }

    pub fn update_cast_member(&self) -> UpdateCastMember {
        UpdateCastMember::new(self.cast_members.clone())
    }

    pub fn delete_cast_member(&self) -> DeleteCastMember {
        DeleteCastMember::new(self.cast_members.clone())
    }

    pub fn create_video(&self) -> CreateVideo {
        CreateVideo::new(
            self.videos.clone(),
            self.categories.clone(),
            self.genres.clone(),
            self.cast_members.clone(),
        )
    }

    pub fn list_video(&self) -> ListVideo {
        ListVideo::new(self.videos.clone())
    }

    pub fn list_videos(&self) -> ListVideos {
        ListVideos::new(self.videos.clone())
    }

    pub fn update_video(&self) -> UpdateVideo {
        UpdateVideo::new(
            self.videos.clone(),
            self.categories.clone(),
            self.genres.clone(),
            self.cast_members.clone(),
        )
    }

    pub fn delete_video(&self) -> DeleteVideo {
        DeleteVideo::new(self.videos.clone())
    }

    pub fn change_encoded_path(&self) -> ChangeEncodedPath {
        ChangeEncodedPath::new(self.videos.clone())
    }
}
