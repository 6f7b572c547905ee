mod support;

use anyhow::Result;
use catalog_core::database::{ListFilter, PageRequest, SortOrder};
use catalog_core::domain::Video;
use catalog_model::{
    CastMemberID, CategoryID, GenreID, Image, Media, MediaStatus, VideoID,
};
use sqlx::PgPool;

fn sorted<T, K: Ord>(mut ids: Vec<T>, key: impl FnMut(&T) -> K) -> Vec<T> {
    ids.sort_by_key(key);
    ids
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn insert_scalar_fields(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool.clone());
    let video = Video::new(support::video_fields("Plain video"))?;

    let stored = repos.videos.insert(&video).await?;

    assert_eq!(stored.id(), video.id());
    assert_eq!(stored.title(), "Plain video");
    assert_eq!(stored.rating(), video.rating());
    assert!(!stored.published());
    assert_eq!(support::count(&pool, "videos").await, 1);
    assert_eq!(support::count(&pool, "medias_video").await, 0);
    Ok(())
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn insert_with_relationships(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool.clone());
    let mut categories = Vec::new();
    let mut genres = Vec::new();
    let mut members = Vec::new();
    for index in 0..4 {
        categories.push(support::category(&repos, &format!("Category {index}")).await.id());
        genres.push(support::genre(&repos, &format!("Genre {index}")).await.id());
        members.push(support::cast_member(&repos, &format!("Member {index}")).await.id());
    }

    let mut video = Video::new(support::video_fields("Related video"))?;
    for index in 0..4 {
        video.add_category_id(categories[index]);
        video.add_genre(genres[index]);
        video.add_cast_member(members[index]);
    }
    let stored = repos.videos.insert(&video).await?;

    assert_eq!(support::count(&pool, "category_video").await, 4);
    assert_eq!(support::count(&pool, "genre_video").await, 4);
    assert_eq!(support::count(&pool, "cast_member_video").await, 4);
    assert_eq!(stored.categories_id(), sorted(categories, CategoryID::to_uuid));
    assert_eq!(stored.genres_id(), sorted(genres, GenreID::to_uuid));
    assert_eq!(stored.cast_member_ids(), sorted(members, CastMemberID::to_uuid));
    Ok(())
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn find_by_id_missing_is_not_found(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool);

    let err = repos.videos.find_by_id(VideoID::new()).await.unwrap_err();

    assert!(err.is_not_found());
    Ok(())
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn find_all_with_filter(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool.clone());
    for index in 0..10 {
        support::video(&repos, &format!("Generic {index}")).await;
        support::video(&repos, &format!("Special {index}")).await;
    }

    let all = repos.videos.find_all(&ListFilter::default()).await?;
    let special = repos
        .videos
        .find_all(&ListFilter::new(Some("special".into()), SortOrder::Asc))
        .await?;

    assert_eq!(all.len(), 20);
    assert_eq!(special.len(), 10);
    assert_eq!(special[0].title(), "Special 0");
    assert_eq!(support::count(&pool, "videos").await, 20);
    Ok(())
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn paginate(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool);
    for index in 0..20 {
        support::video(&repos, &format!("Video {index:02}")).await;
    }

    let first = repos.videos.paginate(&PageRequest::default()).await?;
    let second = repos
        .videos
        .paginate(&PageRequest::default().with_page(2).with_per_page(10))
        .await?;

    assert_eq!(first.items.len(), 15);
    assert_eq!(first.total, 20);
    assert_eq!(second.items.len(), 10);
    assert_eq!(second.current_page, 2);
    Ok(())
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn update_replaces_fields_and_relations(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool.clone());
    let first = support::category(&repos, "First").await.id();
    let second = support::category(&repos, "Second").await.id();

    let mut video = Video::new(support::video_fields("Original"))?;
    video.add_category_id(first);
    let mut video = repos.videos.insert(&video).await?;

    let mut fields = support::video_fields("Updated");
    fields.duration = 42;
    video.update(fields)?;
    video.publish();
    video.replace_categories(vec![second]);
    let updated = repos.videos.update(&video).await?;

    assert_eq!(updated.title(), "Updated");
    assert_eq!(updated.duration(), 42);
    assert!(updated.published());
    assert_eq!(updated.categories_id(), [second]);
    assert_eq!(support::count(&pool, "category_video").await, 1);
    Ok(())
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn update_missing_is_not_found(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool);
    let video = Video::new(support::video_fields("Not stored"))?;

    let err = repos.videos.update(&video).await.unwrap_err();

    assert!(err.is_not_found());
    Ok(())
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn delete_is_soft(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool.clone());
    let video = support::video(&repos, "To delete").await;

    assert!(repos.videos.delete(video.id()).await?);

    assert!(support::is_soft_deleted(&pool, "videos", video.id().to_uuid()).await);
    assert!(repos.videos.delete(VideoID::new()).await.unwrap_err().is_not_found());
    Ok(())
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn update_media_upserts_trailer(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool.clone());
    let mut video = support::video(&repos, "With trailer").await;

    video.set_trailer_file(Media::new("test.mp4", MediaStatus::Processing));
    repos.videos.update_media(&video).await?;
    assert_eq!(support::count(&pool, "medias_video").await, 1);

    video.set_trailer_file(
        Media::new("test.mp4", MediaStatus::Complete).with_encoded_path("test2.xpto"),
    );
    let stored = repos.videos.update_media(&video).await?;

    assert_eq!(support::count(&pool, "medias_video").await, 1);
    let trailer = stored.trailer_file().expect("trailer stored");
    assert_eq!(trailer.media_status, MediaStatus::Complete);
    assert_eq!(trailer.encoded_path.as_deref(), Some("test2.xpto"));
    assert!(stored.video_file().is_none());
    Ok(())
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn update_media_upserts_video_file(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool.clone());
    let mut video = support::video(&repos, "With file").await;

    video.set_video_file(Media::new("test.mp4", MediaStatus::Processing));
    repos.videos.update_media(&video).await?;
    video.set_video_file(
        Media::new("test.mp4", MediaStatus::Complete).with_encoded_path("test2.xpto"),
    );
    let stored = repos.videos.update_media(&video).await?;

    assert_eq!(support::count(&pool, "medias_video").await, 1);
    assert!(stored.video_file().expect("video stored").is_complete());
    Ok(())
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn update_media_upserts_images(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool.clone());
    let mut video = support::video(&repos, "With images").await;

    video.set_banner_file(Image::new("banner.png"));
    repos.videos.update_media(&video).await?;
    assert_eq!(support::count(&pool, "images_video").await, 1);

    video.set_banner_file(Image::new("banner-2.png"));
    video.set_thumb_file(Image::new("thumb.png"));
    video.set_thumb_half(Image::new("half.png"));
    let stored = repos.videos.update_media(&video).await?;

    assert_eq!(support::count(&pool, "images_video").await, 3);
    assert_eq!(stored.banner_file().map(Image::path), Some("banner-2.png"));
    assert_eq!(stored.thumb_file().map(Image::path), Some("thumb.png"));
    assert_eq!(stored.thumb_half().map(Image::path), Some("half.png"));
    Ok(())
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn update_media_on_missing_video(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool);
    let mut video = Video::new(support::video_fields("Never stored"))?;
    video.set_banner_file(Image::new("banner.png"));

    let err = repos.videos.update_media(&video).await.unwrap_err();

    assert!(err.is_not_found());
    Ok(())
}
