use std::sync::Arc;

use async_trait::async_trait;
use catalog_model::{
    CastMemberID, CategoryID, GenreID, MediaKind, MediaStatus, VideoID,
    parse_ids,
};
use tracing::info;

use super::UseCase;
use super::relations::{CAST_MEMBER, CATEGORY, GENRE, ensure_all_found};
use crate::application::dto::{
    ChangeEncodedPathInput, ChangeEncodedPathOutput, CreateVideoInput,
    DeleteOutput, IdInput, ListInput, UpdateVideoInput, VideoOutput,
};
use crate::database::pagination::{PageRequest, Paginated};
use crate::database::ports::{
    CastMemberRepository, CategoryRepository, GenreRepository, VideoRepository,
};
use crate::domain::Video;
use crate::error::{CatalogError, Result};

/// Parsed relation ids of a create / update request.
struct Relations {
    categories: Vec<CategoryID>,
    genres: Vec<GenreID>,
    cast_members: Vec<CastMemberID>,
}

impl Relations {
    fn parse(
        categories: &[String],
        genres: &[String],
        cast_members: &[String],
    ) -> Result<Self> {
        Ok(Self {
            categories: parse_ids(categories)?,
            genres: parse_ids(genres)?,
            cast_members: parse_ids(cast_members)?,
        })
    }

    fn apply(self, video: &mut Video) {
        video.replace_categories(self.categories);
        video.replace_genres(self.genres);
        video.replace_cast_members(self.cast_members);
    }
}

/// Ports needed to confirm every referenced entity exists.
#[derive(Clone)]
struct RelationCheck {
    categories: Arc<dyn CategoryRepository>,
    genres: Arc<dyn GenreRepository>,
    cast_members: Arc<dyn CastMemberRepository>,
}

impl RelationCheck {
    async fn verify(&self, relations: &Relations) -> Result<()> {
        if !relations.categories.is_empty() {
            let found = self
                .categories
                .get_ids_list_ids(&relations.categories)
                .await?;
            ensure_all_found(CATEGORY, &relations.categories, &found)?;
        }
        if !relations.genres.is_empty() {
            let found = self.genres.get_ids_list_ids(&relations.genres).await?;
            ensure_all_found(GENRE, &relations.genres, &found)?;
        }
        if !relations.cast_members.is_empty() {
            let found = self
                .cast_members
                .get_ids_list_ids(&relations.cast_members)
                .await?;
            ensure_all_found(CAST_MEMBER, &relations.cast_members, &found)?;
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct CreateVideo {
    videos: Arc<dyn VideoRepository>,
    check: RelationCheck,
}

impl std::fmt::Debug for CreateVideo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateVideo")
            .field("videos", &std::any::type_name_of_val(self.videos.as_ref()))
            .finish_non_exhaustive()
    }
}

impl CreateVideo {
    pub fn new(
        videos: Arc<dyn VideoRepository>,
        categories: Arc<dyn CategoryRepository>,
        genres: Arc<dyn GenreRepository>,
        cast_members: Arc<dyn CastMemberRepository>,
    ) -> Self {
        Self {
            videos,
            check: RelationCheck {
                categories,
                genres,
                cast_members,
            },
        }
    }
}

#[async_trait]
impl UseCase<CreateVideoInput, VideoOutput> for CreateVideo {
    async fn execute(&self, input: CreateVideoInput) -> Result<VideoOutput> {
        let relations = Relations::parse(
            &input.categories,
            &input.genres,
            &input.cast_members,
        )?;
        self.check.verify(&relations).await?;

        let mut video = Video::new(input.fields.into())?;
        relations.apply(&mut video);

        let stored = self.videos.insert(&video).await?;
        info!(video_id = %stored.id(), title = stored.title(), "video created");
        Ok(stored.into())
    }
}

#[derive(Clone)]
pub struct ListVideo {
    videos: Arc<dyn VideoRepository>,
}

debug_ports!(ListVideo { videos });

impl ListVideo {
    pub fn new(videos: Arc<dyn VideoRepository>) -> Self {
        Self { videos }
    }
}

#[async_trait]
impl UseCase<IdInput, VideoOutput> for ListVideo {
    async fn execute(&self, input: IdInput) -> Result<VideoOutput> {
        let id = VideoID::parse(&input.id)?;
        Ok(self.videos.find_by_id(id).await?.into())
    }
}

#[derive(Clone)]
pub struct ListVideos {
    videos: Arc<dyn VideoRepository>,
}

debug_ports!(ListVideos { videos });

impl ListVideos {
    pub fn new(videos: Arc<dyn VideoRepository>) -> Self {
        Self { videos }
    }
}

#[async_trait]
impl UseCase<ListInput, Paginated<VideoOutput>> for ListVideos {
    async fn execute(&self, input: ListInput) -> Result<Paginated<VideoOutput>> {
        let page = self.videos.paginate(&PageRequest::from(input)).await?;
        Ok(page.map(VideoOutput::from))
    }
}

#[derive(Clone)]
pub struct UpdateVideo {
    videos: Arc<dyn VideoRepository>,
    check: RelationCheck,
}

impl std::fmt::Debug for UpdateVideo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateVideo")
            .field("videos", &std::any::type_name_of_val(self.videos.as_ref()))
            .finish_non_exhaustive()
    }
}

impl UpdateVideo {
    pub fn new(
        videos: Arc<dyn VideoRepository>,
        categories: Arc<dyn CategoryRepository>,
        genres: Arc<dyn GenreRepository>,
        cast_members: Arc<dyn CastMemberRepository>,
    ) -> Self {
        Self {
            videos,
            check: RelationCheck {
                categories,
                genres,
                cast_members,
            },
        }
    }
}

#[async_trait]
impl UseCase<UpdateVideoInput, VideoOutput> for UpdateVideo {
    async fn execute(&self, input: UpdateVideoInput) -> Result<VideoOutput> {
        let id = VideoID::parse(&input.id)?;
        let relations = Relations::parse(
            &input.categories,
            &input.genres,
            &input.cast_members,
        )?;

        let mut video = self.videos.find_by_id(id).await?;
        self.check.verify(&relations).await?;

        video.update(input.fields.into())?;
        relations.apply(&mut video);

        let stored = self.videos.update(&video).await?;
        info!(video_id = %id, "video updated");
        Ok(stored.into())
    }
}

#[derive(Clone)]
pub struct DeleteVideo {
    videos: Arc<dyn VideoRepository>,
}

debug_ports!(DeleteVideo { videos });

impl DeleteVideo {
    pub fn new(videos: Arc<dyn VideoRepository>) -> Self {
        Self { videos }
    }
}

#[async_trait]
impl UseCase<IdInput, DeleteOutput> for DeleteVideo {
    async fn execute(&self, input: IdInput) -> Result<DeleteOutput> {
        let id = VideoID::parse(&input.id)?;
        let success = self.videos.delete(id).await?;
        info!(video_id = %id, success, "video deleted");
        Ok(DeleteOutput { success })
    }
}

/// Marks a media slot as encoded: stores the encoded path and flips the
/// status to complete.
#[derive(Clone)]
pub struct ChangeEncodedPath {
    videos: Arc<dyn VideoRepository>,
}

debug_ports!(ChangeEncodedPath { videos });

impl ChangeEncodedPath {
    pub fn new(videos: Arc<dyn VideoRepository>) -> Self {
        Self { videos }
    }
}

#[async_trait]
impl UseCase<ChangeEncodedPathInput, ChangeEncodedPathOutput>
    for ChangeEncodedPath
{
    async fn execute(
        &self,
        input: ChangeEncodedPathInput,
    ) -> Result<ChangeEncodedPathOutput> {
        let id = VideoID::parse(&input.id)?;
        let mut video = self.videos.find_by_id(id).await?;

        let slot = match input.kind {
            MediaKind::Video => video.video_file(),
            MediaKind::Trailer => video.trailer_file(),
        };
        let Some(current) = slot else {
            return Err(CatalogError::NotFound(format!(
                "Video {id} has no {} file",
                input.kind
            )));
        };

        let mut media = current.clone();
        media.encoded_path = Some(input.encoded_path.clone());
        media.media_status = MediaStatus::Complete;
        match input.kind {
            MediaKind::Video => video.set_video_file(media),
            MediaKind::Trailer => video.set_trailer_file(media),
        }

        self.videos.update_media(&video).await?;
        info!(video_id = %id, kind = %input.kind, "encoded path recorded");

        Ok(ChangeEncodedPathOutput {
            id: id.to_string(),
            encoded_path: input.encoded_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::VideoFieldsInput;
    use crate::database::ports::{
        MockCastMemberRepository, MockCategoryRepository, MockGenreRepository,
        MockVideoRepository,
    };
    use crate::domain::VideoFields;
    use catalog_model::{Media, Rating};

    fn fields() -> VideoFieldsInput {
        VideoFieldsInput {
            title: "Video title".into(),
            description: "Video description".into(),
            year_launched: 2026,
            duration: 90,
            opened: false,
            rating: Rating::Rate14,
        }
    }

    fn echo_lookups() -> (
        MockCategoryRepository,
        MockGenreRepository,
        MockCastMemberRepository,
    ) {
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_get_ids_list_ids()
            .returning(|ids| Ok(ids.to_vec()));
        let mut genres = MockGenreRepository::new();
        genres
            .expect_get_ids_list_ids()
            .returning(|ids| Ok(ids.to_vec()));
        let mut cast_members = MockCastMemberRepository::new();
        cast_members
            .expect_get_ids_list_ids()
            .returning(|ids| Ok(ids.to_vec()));
        (categories, genres, cast_members)
    }

    #[tokio::test]
    async fn create_attaches_relations() {
        let category = CategoryID::new();
        let genre = GenreID::new();
        let member = CastMemberID::new();
        let (categories, genres, cast_members) = echo_lookups();
        let mut videos = MockVideoRepository::new();
        videos
            .expect_insert()
            .times(1)
            .returning(|video| Ok(video.clone()));

        let output = CreateVideo::new(
            Arc::new(videos),
            Arc::new(categories),
            Arc::new(genres),
            Arc::new(cast_members),
        )
        .execute(CreateVideoInput {
            fields: fields(),
            categories: vec![category.to_string()],
            genres: vec![genre.to_string()],
            cast_members: vec![member.to_string()],
        })
        .await
        .unwrap();

        assert_eq!(output.title, "Video title");
        assert!(!output.published);
        assert_eq!(output.categories, vec![category.to_string()]);
        assert_eq!(output.genres, vec![genre.to_string()]);
        assert_eq!(output.cast_members, vec![member.to_string()]);
    }

    #[tokio::test]
    async fn create_rejects_missing_genres() {
        let categories = MockCategoryRepository::new();
        let mut genres = MockGenreRepository::new();
        genres.expect_get_ids_list_ids().returning(|_| Ok(Vec::new()));
        let cast_members = MockCastMemberRepository::new();
        let mut videos = MockVideoRepository::new();
        videos.expect_insert().never();

        let missing = [GenreID::new(), GenreID::new()];
        let err = CreateVideo::new(
            Arc::new(videos),
            Arc::new(categories),
            Arc::new(genres),
            Arc::new(cast_members),
        )
        .execute(CreateVideoInput {
            fields: fields(),
            categories: Vec::new(),
            genres: missing.iter().map(ToString::to_string).collect(),
            cast_members: Vec::new(),
        })
        .await
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("Genres {}, {} not found", missing[0], missing[1])
        );
    }

    #[tokio::test]
    async fn create_collects_validation_messages() {
        let (categories, genres, cast_members) = echo_lookups();
        let mut videos = MockVideoRepository::new();
        videos.expect_insert().never();

        let err = CreateVideo::new(
            Arc::new(videos),
            Arc::new(categories),
            Arc::new(genres),
            Arc::new(cast_members),
        )
        .execute(CreateVideoInput {
            fields: VideoFieldsInput {
                title: "ab".into(),
                ..fields()
            },
            categories: Vec::new(),
            genres: Vec::new(),
            cast_members: Vec::new(),
        })
        .await
        .unwrap_err();

        assert!(matches!(err, CatalogError::Notification(_)));
        assert!(err.to_string().starts_with("video: The title field"));
    }

    #[tokio::test]
    async fn update_replaces_relations() {
        let mut existing = Video::new(VideoFields::from(fields())).unwrap();
        existing.add_category_id(CategoryID::new());
        let id = existing.id();
        let (categories, genres, cast_members) = echo_lookups();

        let mut videos = MockVideoRepository::new();
        videos
            .expect_find_by_id()
            .returning(move |_| Ok(existing.clone()));
        videos
            .expect_update()
            .withf(|video| video.categories_id().is_empty())
            .returning(|video| Ok(video.clone()));

        let genre = GenreID::new();
        let output = UpdateVideo::new(
            Arc::new(videos),
            Arc::new(categories),
            Arc::new(genres),
            Arc::new(cast_members),
        )
        .execute(UpdateVideoInput {
            id: id.to_string(),
            fields: VideoFieldsInput {
                title: "Renamed video".into(),
                ..fields()
            },
            categories: Vec::new(),
            genres: vec![genre.to_string()],
            cast_members: Vec::new(),
        })
        .await
        .unwrap();

        assert_eq!(output.title, "Renamed video");
        assert!(output.categories.is_empty());
        assert_eq!(output.genres, vec![genre.to_string()]);
    }

    #[tokio::test]
    async fn change_encoded_path_completes_media() {
        let mut existing = Video::new(VideoFields::from(fields())).unwrap();
        existing.set_video_file(Media::new("raw.mp4", MediaStatus::Processing));
        let id = existing.id();

        let mut videos = MockVideoRepository::new();
        videos
            .expect_find_by_id()
            .returning(move |_| Ok(existing.clone()));
        videos
            .expect_update_media()
            .withf(|video| {
                video.video_file().is_some_and(|media| {
                    media.is_complete()
                        && media.encoded_path.as_deref() == Some("encoded.mp4")
                })
            })
            .times(1)
            .returning(|video| Ok(video.clone()));

        let output = ChangeEncodedPath::new(Arc::new(videos))
            .execute(ChangeEncodedPathInput {
                id: id.to_string(),
                encoded_path: "encoded.mp4".into(),
                kind: MediaKind::Video,
            })
            .await
            .unwrap();

        assert_eq!(output.id, id.to_string());
        assert_eq!(output.encoded_path, "encoded.mp4");
    }

    #[tokio::test]
    async fn change_encoded_path_needs_existing_slot() {
        let existing = Video::new(VideoFields::from(fields())).unwrap();
        let id = existing.id();
        let mut videos = MockVideoRepository::new();
        videos
            .expect_find_by_id()
            .returning(move |_| Ok(existing.clone()));
        videos.expect_update_media().never();

        let err = ChangeEncodedPath::new(Arc::new(videos))
            .execute(ChangeEncodedPathInput {
                id: id.to_string(),
                encoded_path: "encoded.mp4".into(),
                kind: MediaKind::Trailer,
            })
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), format!("Video {id} has no trailer file"));
    }
}
