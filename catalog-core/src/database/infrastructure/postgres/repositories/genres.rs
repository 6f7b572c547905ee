use std::collections::HashMap;

use async_trait::async_trait;
use catalog_model::{CategoryID, GenreID};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::database::infrastructure::postgres::db_err;
use crate::database::infrastructure::postgres::links::CATEGORY_GENRE;
use crate::database::pagination::{ListFilter, PageRequest, Paginated};
use crate::database::ports::GenreRepository;
use crate::domain::Genre;
use crate::error::{CatalogError, Result};

const COLUMNS: &str = "id, name, is_active, created_at";

#[derive(Debug, sqlx::FromRow)]
struct GenreRow {
    id: Uuid,
    name: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct PostgresGenreRepository {
    pool: PgPool,
}

impl PostgresGenreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn not_found(id: GenreID) -> CatalogError {
        CatalogError::NotFound(format!("Genre {id} not found"))
    }

    /// Attach stored category links to freshly fetched rows.
    async fn hydrate(&self, rows: Vec<GenreRow>) -> Result<Vec<Genre>> {
        let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
        let mut links: HashMap<Uuid, Vec<Uuid>> =
            CATEGORY_GENRE.load(self.pool(), &ids).await?;

        rows.into_iter()
            .map(|row| {
                let categories = links
                    .remove(&row.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(CategoryID)
                    .collect();
                Genre::restore(
                    GenreID(row.id),
                    row.name,
                    row.is_active,
                    categories,
                    row.created_at,
                )
            })
            .collect()
    }

    async fn hydrate_one(&self, row: GenreRow) -> Result<Genre> {
        let id = GenreID(row.id);
        self.hydrate(vec![row])
            .await?
            .pop()
            .ok_or_else(|| Self::not_found(id))
    }

    fn category_uuids(genre: &Genre) -> Vec<Uuid> {
        genre
            .categories_id()
            .iter()
            .map(CategoryID::to_uuid)
            .collect()
    }
}

#[async_trait]
impl GenreRepository for PostgresGenreRepository {
    async fn insert(&self, genre: &Genre) -> Result<Genre> {
        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(db_err("Failed to begin transaction"))?;

        let sql = format!(
            r#"
            INSERT INTO genres (id, name, is_active, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING {COLUMNS}
            "#
        );
        let row: GenreRow = sqlx::query_as(&sql)
            .bind(genre.id().to_uuid())
            .bind(genre.name())
            .bind(genre.is_active())
            .bind(genre.created_at())
            .fetch_one(&mut *tx)
            .await
            .map_err(db_err("Failed to create genre"))?;

        CATEGORY_GENRE
            .replace(&mut tx, row.id, &Self::category_uuids(genre))
            .await?;

        tx.commit()
            .await
            .map_err(db_err("Failed to commit transaction"))?;

        debug!(
            genre_id = %row.id,
            categories = genre.categories_id().len(),
            "genre inserted"
        );
        self.hydrate_one(row).await
    }

    async fn find_by_id(&self, id: GenreID) -> Result<Genre> {
        let sql = format!(
            "SELECT {COLUMNS} FROM genres WHERE id = $1 AND deleted_at IS NULL"
        );
        let row: Option<GenreRow> = sqlx::query_as(&sql)
            .bind(id.to_uuid())
            .fetch_optional(self.pool())
            .await
            .map_err(db_err("Database query failed"))?;

        match row {
            Some(row) => self.hydrate_one(row).await,
            None => Err(Self::not_found(id)),
        }
    }

    async fn get_ids_list_ids(&self, ids: &[GenreID]) -> Result<Vec<GenreID>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let uuids: Vec<Uuid> = ids.iter().map(GenreID::to_uuid).collect();

        let found: Vec<(Uuid,)> = sqlx::query_as(
            "SELECT id FROM genres WHERE id = ANY($1) AND deleted_at IS NULL",
        )
        .bind(uuids)
        .fetch_all(self.pool())
        .await
        .map_err(db_err("Database query failed"))?;

        Ok(found.into_iter().map(|(id,)| GenreID(id)).collect())
    }

    async fn find_all(&self, list: &ListFilter) -> Result<Vec<Genre>> {
        let sql = format!(
            r#"
            SELECT {COLUMNS}
            FROM genres
            WHERE deleted_at IS NULL
              AND ($1::text IS NULL OR name ILIKE $1)
            ORDER BY name {order}, id
            "#,
            order = list.order.as_sql()
        );
        let rows: Vec<GenreRow> = sqlx::query_as(&sql)
            .bind(list.like_pattern())
            .fetch_all(self.pool())
            .await
            .map_err(db_err("Database query failed"))?;

        self.hydrate(rows).await
    }

    async fn paginate(&self, request: &PageRequest) -> Result<Paginated<Genre>> {
        let pattern = request.list.like_pattern();

        let (total,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM genres
            WHERE deleted_at IS NULL
              AND ($1::text IS NULL OR name ILIKE $1)
            "#,
        )
        .bind(pattern.as_deref())
        .fetch_one(self.pool())
        .await
        .map_err(db_err("Failed to count genres"))?;

        let sql = format!(
            r#"
            SELECT {COLUMNS}
            FROM genres
            WHERE deleted_at IS NULL
              AND ($1::text IS NULL OR name ILIKE $1)
            ORDER BY name {order}, id
            LIMIT $2 OFFSET $3
            "#,
            order = request.list.order.as_sql()
        );
        let rows: Vec<GenreRow> = sqlx::query_as(&sql)
            .bind(pattern.as_deref())
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(self.pool())
            .await
            .map_err(db_err("Database query failed"))?;

        let items = self.hydrate(rows).await?;
        Ok(Paginated::new(items, total.max(0) as u64, request))
    }

    async fn update(&self, genre: &Genre) -> Result<Genre> {
        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(db_err("Failed to begin transaction"))?;

        let sql = format!(
            r#"
            UPDATE genres
            SET name = $1,
                is_active = $2,
                updated_at = NOW()
            WHERE id = $3 AND deleted_at IS NULL
            RETURNING {COLUMNS}
            "#
        );
        let row: Option<GenreRow> = sqlx::query_as(&sql)
            .bind(genre.name())
            .bind(genre.is_active())
            .bind(genre.id().to_uuid())
            .fetch_optional(&mut *tx)
            .await
            .map_err(db_err("Failed to update genre"))?;

        let Some(row) = row else {
            warn!(genre_id = %genre.id(), "update on missing genre");
            return Err(Self::not_found(genre.id()));
        };

        CATEGORY_GENRE
            .replace(&mut tx, row.id, &Self::category_uuids(genre))
            .await?;

        tx.commit()
            .await
            .map_err(db_err("Failed to commit transaction"))?;

        self.hydrate_one(row).await
    }

    async fn delete(&self, id: GenreID) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE genres SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id.to_uuid())
        .execute(self.pool())
        .await
        .map_err(db_err("Delete failed"))?;

        if result.rows_affected() == 0 {
            return Err(Self::not_found(id));
        }

        debug!(genre_id = %id, "genre soft-deleted");
        Ok(true)
    }
}
