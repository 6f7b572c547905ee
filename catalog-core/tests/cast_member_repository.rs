mod support;

use anyhow::Result;
use catalog_core::database::{ListFilter, PageRequest, SortOrder};
use catalog_core::domain::CastMember;
use catalog_model::{CastMemberID, CastMemberType};
use sqlx::PgPool;

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn insert_keeps_type(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool);
    let member = CastMember::new("Greta Director", CastMemberType::Director)?;

    let stored = repos.cast_members.insert(&member).await?;

    assert_eq!(stored.id(), member.id());
    assert_eq!(stored.kind(), CastMemberType::Director);
    Ok(())
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn find_by_id_missing_is_not_found(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool);

    let err = repos
        .cast_members
        .find_by_id(CastMemberID::new())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().starts_with("Cast Member "));
    Ok(())
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn find_all_with_filter_orders_by_name(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool);
    for name in ["Zoe Actor", "Adam Actor", "Maria Singer"] {
        support::cast_member(&repos, name).await;
    }

    let actors = repos
        .cast_members
        .find_all(&ListFilter::new(Some("actor".into()), SortOrder::Desc))
        .await?;

    let names: Vec<&str> = actors.iter().map(CastMember::name).collect();
    assert_eq!(names, ["Zoe Actor", "Adam Actor"]);
    Ok(())
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn paginate_second_page(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool);
    for index in 0..25 {
        support::cast_member(&repos, &format!("Member {index:02}")).await;
    }

    let page = repos
        .cast_members
        .paginate(&PageRequest::default().with_page(2))
        .await?;

    assert_eq!(page.total, 25);
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.last_page, 2);
    Ok(())
}

#[sqlx::test(migrator = "catalog_core::MIGRATOR")]
async fn update_and_delete(pool: PgPool) -> Result<()> {
    let repos = support::repositories(pool.clone());
    let mut member = support::cast_member(&repos, "First Name").await;

    member.update("Second Name")?;
    let updated = repos.cast_members.update(&member).await?;
    assert_eq!(updated.name(), "Second Name");

    assert!(repos.cast_members.delete(member.id()).await?);
    assert!(support::is_soft_deleted(&pool, "cast_members", member.id().to_uuid()).await);

    let err = repos.cast_members.update(&member).await.unwrap_err();
    assert!(err.is_not_found());
    Ok(())
}
