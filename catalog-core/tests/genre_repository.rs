mod support;

use anyhow::Result;
use catalog_core::database::{ListFilter, PageRequest, SortOrder};
use catalog_core::domain::Genre;
use catalog_model::{CategoryID, GenreID};
use sqlx::PgPool;

fn sorted(mut ids: Vec<CategoryID>) -> Vec<CategoryID> {
    ids.sort_by_key(CategoryID::to_uuid);
    ids
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn insert_without_categories(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool.clone());
    let genre = Genre::new("Horror")?;

    let stored = repos.genres.insert(&genre).await?;

    assert_eq!(stored.id(), genre.id());
    assert!(stored.categories_id().is_empty());
    assert_eq!(support::count(&pool, "category_genre").await, 0);
    Ok(())
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn insert_with_categories(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool.clone());
    let categories = support::categories(&repos, 4).await;
    let ids: Vec<CategoryID> = categories.iter().map(|c| c.id()).collect();

    let mut genre = Genre::new("Comedy")?;
    for id in &ids {
        genre.add_category(*id);
    }
    genre.add_category(ids[0]);

    let stored = repos.genres.insert(&genre).await?;

    assert_eq!(support::count(&pool, "category_genre").await, 4);
    assert_eq!(stored.categories_id(), sorted(ids).as_slice());
    Ok(())
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn find_by_id_missing_is_not_found(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool);

    let err = repos.genres.find_by_id(GenreID::new()).await.unwrap_err();

    assert!(err.is_not_found());
    Ok(())
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn find_all_with_filter(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool);
    for name in ["Action", "Adventure", "Drama", "Action Comedy"] {
        support::genre(&repos, name).await;
    }

    let found = repos
        .genres
        .find_all(&ListFilter::new(Some("action".into()), SortOrder::Asc))
        .await?;

    let names: Vec<&str> = found.iter().map(Genre::name).collect();
    assert_eq!(names, ["Action", "Action Comedy"]);
    Ok(())
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn paginate_reports_totals(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool);
    for index in 0..60 {
        support::genre(&repos, &format!("Genre {index:02}")).await;
    }

    let page = repos
        .genres
        .paginate(&PageRequest::default().with_page(3).with_per_page(25))
        .await?;

    assert_eq!(page.total, 60);
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.last_page, 3);
    assert_eq!((page.from, page.to), (51, 60));
    Ok(())
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn update_replaces_categories(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool.clone());
    let categories = support::categories(&repos, 3).await;
    let mut genre = Genre::new("Before")?;
    genre.add_category(categories[0].id());
    let mut genre = repos.genres.insert(&genre).await?;

    genre.update("After")?;
    genre.remove_category(categories[0].id());
    genre.add_category(categories[1].id());
    genre.add_category(categories[2].id());
    genre.deactivate();
    let updated = repos.genres.update(&genre).await?;

    assert_eq!(updated.name(), "After");
    assert!(!updated.is_active());
    assert_eq!(
        updated.categories_id(),
        sorted(vec![categories[1].id(), categories[2].id()]).as_slice()
    );
    assert_eq!(support::count(&pool, "category_genre").await, 2);
    Ok(())
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn update_missing_is_not_found(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool);
    let genre = Genre::new("Ghost")?;

    let err = repos.genres.update(&genre).await.unwrap_err();

    assert!(err.is_not_found());
    Ok(())
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn delete_soft_deletes(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool.clone());
    let genre = support::genre(&repos, "Western").await;

    assert!(repos.genres.delete(genre.id()).await?);

    assert!(support::is_soft_deleted(&pool, "genres", genre.id().to_uuid()).await);
    assert!(repos.genres.delete(GenreID::new()).await.unwrap_err().is_not_found());
    Ok(())
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn deleted_category_drops_out_of_genre(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool);
    let categories = support::categories(&repos, 2).await;
    let mut genre = Genre::new("Mystery")?;
    genre.add_category(categories[0].id());
    genre.add_category(categories[1].id());
    let genre = repos.genres.insert(&genre).await?;

    repos.categories.delete(categories[0].id()).await?;

    let reloaded = repos.genres.find_by_id(genre.id()).await?;
    assert_eq!(reloaded.categories_id(), [categories[1].id()]);
    Ok(())
}
