#![allow(dead_code)]

use catalog_core::CatalogRepositories;
use catalog_core::database::PostgresDatabase;
use catalog_core::domain::{CastMember, Category, Genre, Video, VideoFields};
use catalog_model::{CastMemberType, Rating};
use sqlx::PgPool;

pub fn repositories(pool: PgPool) -> CatalogRepositories {
    CatalogRepositories::postgres(&PostgresDatabase::from_pool(pool))
}

pub async fn category(repos: &CatalogRepositories, name: &str) -> Category {
    let category = Category::new(name, Some(format!("{name} description")))
        .expect("valid category");
    repos.categories.insert(&category).await.expect("category stored")
}

pub async fn categories(repos: &CatalogRepositories, count: usize) -> Vec<Category> {
    let mut stored = Vec::with_capacity(count);
    for index in 0..count {
        stored.push(category(repos, &format!("Category {index:02}")).await);
    }
    stored
}

pub async fn genre(repos: &CatalogRepositories, name: &str) -> Genre {
    let genre = Genre::new(name).expect("valid genre");
    repos.genres.insert(&genre).await.expect("genre stored")
}

pub async fn cast_member(repos: &CatalogRepositories, name: &str) -> CastMember {
    let member = CastMember::new(name, CastMemberType::Actor).expect("valid member");
    repos.cast_members.insert(&member).await.expect("cast member stored")
}

pub fn video_fields(title: &str) -> VideoFields {
    VideoFields {
        title: title.to_owned(),
        description: "A description long enough".to_owned(),
        year_launched: 2026,
        duration: 120,
        opened: true,
        rating: Rating::L,
    }
}

pub async fn video(repos: &CatalogRepositories, title: &str) -> Video {
    let video = Video::new(video_fields(title)).expect("valid video");
    repos.videos.insert(&video).await.expect("video stored")
}

pub async fn count(pool: &PgPool, table: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("count rows");
    count
}

pub async fn is_soft_deleted(pool: &PgPool, table: &str, id: uuid::Uuid) -> bool {
    let (deleted,): (bool,) = sqlx::query_as(&format!(
        "SELECT deleted_at IS NOT NULL FROM {table} WHERE id = $1"
    ))
    .bind(id)
    .fetch_one(pool)
    .await
    .expect("row exists");
    deleted
}
