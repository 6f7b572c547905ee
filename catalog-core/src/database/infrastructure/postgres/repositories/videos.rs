use std::collections::HashMap;

use async_trait::async_trait;
use catalog_model::{
    CastMemberID, CategoryID, GenreID, Image, ImageKind, Media, MediaKind,
    MediaStatus, Rating, VideoID,
};
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::database::infrastructure::postgres::db_err;
use crate::database::infrastructure::postgres::links::{
    CAST_MEMBER_VIDEO, CATEGORY_VIDEO, GENRE_VIDEO,
};
use crate::database::pagination::{ListFilter, PageRequest, Paginated};
use crate::database::ports::VideoRepository;
use crate::domain::{Video, VideoFields};
use crate::error::{CatalogError, Result};

const COLUMNS: &str = "id, title, description, year_launched, duration, \
                       opened, published, rating, created_at";

#[derive(Debug, sqlx::FromRow)]
struct VideoRow {
    id: Uuid,
    title: String,
    description: String,
    year_launched: i32,
    duration: i32,
    opened: bool,
    published: bool,
    rating: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct MediaRow {
    video_id: Uuid,
    file_path: String,
    encoded_path: Option<String>,
    media_status: i16,
    #[sqlx(rename = "type")]
    kind: i16,
}

#[derive(Debug, sqlx::FromRow)]
struct ImageRow {
    video_id: Uuid,
    path: String,
    #[sqlx(rename = "type")]
    kind: i16,
}

/// Everything hanging off a set of video rows, keyed by video id.
#[derive(Debug, Default)]
struct Attachments {
    categories: HashMap<Uuid, Vec<Uuid>>,
    genres: HashMap<Uuid, Vec<Uuid>>,
    cast_members: HashMap<Uuid, Vec<Uuid>>,
    medias: HashMap<Uuid, Vec<MediaRow>>,
    images: HashMap<Uuid, Vec<ImageRow>>,
}

impl Attachments {
    fn assemble(&mut self, row: VideoRow) -> Result<Video> {
        let fields = VideoFields {
            title: row.title,
            description: row.description,
            year_launched: row.year_launched,
            duration: row.duration,
            opened: row.opened,
            rating: row.rating.parse::<Rating>()?,
        };
        let mut video =
            Video::restore(VideoID(row.id), fields, row.published, row.created_at)?;

        video.replace_categories(
            take(&mut self.categories, row.id)
                .into_iter()
                .map(CategoryID)
                .collect(),
        );
        video.replace_genres(
            take(&mut self.genres, row.id)
                .into_iter()
                .map(GenreID)
                .collect(),
        );
        video.replace_cast_members(
            take(&mut self.cast_members, row.id)
                .into_iter()
                .map(CastMemberID)
                .collect(),
        );

        for media in take(&mut self.medias, row.id) {
            let mut value = Media::new(
                media.file_path,
                MediaStatus::from_code(media.media_status)?,
            );
            value.encoded_path = media.encoded_path;
            match MediaKind::from_code(media.kind)? {
                MediaKind::Video => video.set_video_file(value),
                MediaKind::Trailer => video.set_trailer_file(value),
            }
        }

        for image in take(&mut self.images, row.id) {
            let value = Image::new(image.path);
            match ImageKind::from_code(image.kind)? {
                ImageKind::Banner => video.set_banner_file(value),
                ImageKind::Thumb => video.set_thumb_file(value),
                ImageKind::ThumbHalf => video.set_thumb_half(value),
            }
        }

        Ok(video)
    }
}

fn take<T>(map: &mut HashMap<Uuid, Vec<T>>, id: Uuid) -> Vec<T> {
    map.remove(&id).unwrap_or_default()
}

#[derive(Clone, Debug)]
pub struct PostgresVideoRepository {
    pool: PgPool,
}

impl PostgresVideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn not_found(id: VideoID) -> CatalogError {
        CatalogError::NotFound(format!("Video {id} not found"))
    }

    async fn load_attachments(&self, ids: &[Uuid]) -> Result<Attachments> {
        if ids.is_empty() {
            return Ok(Attachments::default());
        }

        let categories = CATEGORY_VIDEO.load(self.pool(), ids).await?;
        let genres = GENRE_VIDEO.load(self.pool(), ids).await?;
        let cast_members = CAST_MEMBER_VIDEO.load(self.pool(), ids).await?;

        let media_rows: Vec<MediaRow> = sqlx::query_as(
            r#"
            SELECT video_id, file_path, encoded_path, media_status, type
            FROM medias_video
            WHERE video_id = ANY($1)
            "#,
        )
        .bind(ids.to_vec())
        .fetch_all(self.pool())
        .await
        .map_err(db_err("Failed to load video media"))?;

        let image_rows: Vec<ImageRow> = sqlx::query_as(
            "SELECT video_id, path, type FROM images_video WHERE video_id = ANY($1)",
        )
        .bind(ids.to_vec())
        .fetch_all(self.pool())
        .await
        .map_err(db_err("Failed to load video images"))?;

        let mut medias: HashMap<Uuid, Vec<MediaRow>> = HashMap::new();
        for row in media_rows {
            medias.entry(row.video_id).or_default().push(row);
        }
        let mut images: HashMap<Uuid, Vec<ImageRow>> = HashMap::new();
        for row in image_rows {
            images.entry(row.video_id).or_default().push(row);
        }

        Ok(Attachments {
            categories,
            genres,
            cast_members,
            medias,
            images,
        })
    }

    async fn hydrate(&self, rows: Vec<VideoRow>) -> Result<Vec<Video>> {
        let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
        let mut attachments = self.load_attachments(&ids).await?;
        rows.into_iter()
            .map(|row| attachments.assemble(row))
            .collect()
    }

    async fn sync_relations(
        conn: &mut PgConnection,
        video: &Video,
    ) -> Result<()> {
        let id = video.id().to_uuid();
        let categories: Vec<Uuid> =
            video.categories_id().iter().map(CategoryID::to_uuid).collect();
        let genres: Vec<Uuid> =
            video.genres_id().iter().map(GenreID::to_uuid).collect();
        let cast_members: Vec<Uuid> = video
            .cast_member_ids()
            .iter()
            .map(CastMemberID::to_uuid)
            .collect();

        CATEGORY_VIDEO.replace(conn, id, &categories).await?;
        GENRE_VIDEO.replace(conn, id, &genres).await?;
        CAST_MEMBER_VIDEO.replace(conn, id, &cast_members).await?;
        Ok(())
    }

    async fn upsert_media(
        conn: &mut PgConnection,
        video_id: Uuid,
        kind: MediaKind,
        media: &Media,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO medias_video
                (id, video_id, file_path, encoded_path, media_status, type)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (video_id, type) DO UPDATE SET
                file_path = EXCLUDED.file_path,
                encoded_path = EXCLUDED.encoded_path,
                media_status = EXCLUDED.media_status,
                updated_at = NOW()
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(video_id)
        .bind(&media.file_path)
        .bind(media.encoded_path.as_deref())
        .bind(media.media_status.code())
        .bind(kind.code())
        .execute(&mut *conn)
        .await
        .map_err(db_err("Failed to store video media"))?;
        Ok(())
    }

    async fn upsert_image(
        conn: &mut PgConnection,
        video_id: Uuid,
        kind: ImageKind,
        image: &Image,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO images_video (id, video_id, path, type)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (video_id, type) DO UPDATE SET
                path = EXCLUDED.path,
                updated_at = NOW()
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(video_id)
        .bind(image.path())
        .bind(kind.code())
        .execute(&mut *conn)
        .await
        .map_err(db_err("Failed to store video image"))?;
        Ok(())
    }
}

#[async_trait]
impl VideoRepository for PostgresVideoRepository {
    async fn insert(&self, video: &Video) -> Result<Video> {
        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(db_err("Failed to begin transaction"))?;

        sqlx::query(
            r#"
            INSERT INTO videos
                (id, title, description, year_launched, duration,
                 opened, published, rating, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(video.id().to_uuid())
        .bind(video.title())
        .bind(video.description())
        .bind(video.year_launched())
        .bind(video.duration())
        .bind(video.opened())
        .bind(video.published())
        .bind(video.rating().as_str())
        .bind(video.created_at())
        .execute(&mut *tx)
        .await
        .map_err(db_err("Failed to create video"))?;

        Self::sync_relations(&mut tx, video).await?;

        tx.commit()
            .await
            .map_err(db_err("Failed to commit transaction"))?;

        debug!(video_id = %video.id(), title = video.title(), "video inserted");
        self.find_by_id(video.id()).await
    }

    async fn find_by_id(&self, id: VideoID) -> Result<Video> {
        let sql = format!(
            "SELECT {COLUMNS} FROM videos WHERE id = $1 AND deleted_at IS NULL"
        );
        let row: Option<VideoRow> = sqlx::query_as(&sql)
            .bind(id.to_uuid())
            .fetch_optional(self.pool())
            .await
            .map_err(db_err("Database query failed"))?;

        let row = row.ok_or_else(|| Self::not_found(id))?;
        self.hydrate(vec![row])
            .await?
            .pop()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn find_all(&self, list: &ListFilter) -> Result<Vec<Video>> {
        let sql = format!(
            r#"
            SELECT {COLUMNS}
            FROM videos
            WHERE deleted_at IS NULL
              AND ($1::text IS NULL OR title ILIKE $1)
            ORDER BY title {order}, id
            "#,
            order = list.order.as_sql()
        );
        let rows: Vec<VideoRow> = sqlx::query_as(&sql)
            .bind(list.like_pattern())
            .fetch_all(self.pool())
            .await
            .map_err(db_err("Database query failed"))?;

        self.hydrate(rows).await
    }

    async fn paginate(&self, request: &PageRequest) -> Result<Paginated<Video>> {
        let pattern = request.list.like_pattern();

        let (total,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM videos
            WHERE deleted_at IS NULL
              AND ($1::text IS NULL OR title ILIKE $1)
            "#,
        )
        .bind(pattern.as_deref())
        .fetch_one(self.pool())
        .await
        .map_err(db_err("Failed to count videos"))?;

        let sql = format!(
            r#"
            SELECT {COLUMNS}
            FROM videos
            WHERE deleted_at IS NULL
              AND ($1::text IS NULL OR title ILIKE $1)
            ORDER BY title {order}, id
            LIMIT $2 OFFSET $3
            "#,
            order = request.list.order.as_sql()
        );
        let rows: Vec<VideoRow> = sqlx::query_as(&sql)
            .bind(pattern.as_deref())
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(self.pool())
            .await
            .map_err(db_err("Database query failed"))?;

        let items = self.hydrate(rows).await?;
        Ok(Paginated::new(items, total.max(0) as u64, request))
    }

    async fn update(&self, video: &Video) -> Result<Video> {
        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(db_err("Failed to begin transaction"))?;

        let result = sqlx::query(
            r#"
            UPDATE videos
            SET title = $1,
                description = $2,
                year_launched = $3,
                duration = $4,
                opened = $5,
                published = $6,
                rating = $7,
                updated_at = NOW()
            WHERE id = $8 AND deleted_at IS NULL
            "#,
        )
        .bind(video.title())
        .bind(video.description())
        .bind(video.year_launched())
        .bind(video.duration())
        .bind(video.opened())
        .bind(video.published())
        .bind(video.rating().as_str())
        .bind(video.id().to_uuid())
        .execute(&mut *tx)
        .await
        .map_err(db_err("Failed to update video"))?;

        if result.rows_affected() == 0 {
            warn!(video_id = %video.id(), "update on missing video");
            return Err(Self::not_found(video.id()));
        }

        Self::sync_relations(&mut tx, video).await?;

        tx.commit()
            .await
            .map_err(db_err("Failed to commit transaction"))?;

        self.find_by_id(video.id()).await
    }

    async fn delete(&self, id: VideoID) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE videos SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id.to_uuid())
        .execute(self.pool())
        .await
        .map_err(db_err("Delete failed"))?;

        if result.rows_affected() == 0 {
            return Err(Self::not_found(id));
        }

        debug!(video_id = %id, "video soft-deleted");
        Ok(true)
    }

    async fn update_media(&self, video: &Video) -> Result<Video> {
        let id = video.id().to_uuid();
        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(db_err("Failed to begin transaction"))?;

        let exists: Option<(Uuid,)> = sqlx::query_as(
            "SELECT id FROM videos WHERE id = $1 AND deleted_at IS NULL FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_err("Database query failed"))?;

        if exists.is_none() {
            warn!(video_id = %video.id(), "media update on missing video");
            return Err(Self::not_found(video.id()));
        }

        if let Some(trailer) = video.trailer_file() {
            Self::upsert_media(&mut tx, id, MediaKind::Trailer, trailer).await?;
        }
        if let Some(file) = video.video_file() {
            Self::upsert_media(&mut tx, id, MediaKind::Video, file).await?;
        }
        if let Some(banner) = video.banner_file() {
            Self::upsert_image(&mut tx, id, ImageKind::Banner, banner).await?;
        }
        if let Some(thumb) = video.thumb_file() {
            Self::upsert_image(&mut tx, id, ImageKind::Thumb, thumb).await?;
        }
        if let Some(half) = video.thumb_half() {
            Self::upsert_image(&mut tx, id, ImageKind::ThumbHalf, half).await?;
        }

        tx.commit()
            .await
            .map_err(db_err("Failed to commit transaction"))?;

        debug!(video_id = %video.id(), "video media updated");
        self.find_by_id(video.id()).await
    }
}
