use async_trait::async_trait;
use catalog_model::CategoryID;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::database::infrastructure::postgres::db_err;
use crate::database::pagination::{ListFilter, PageRequest, Paginated};
use crate::database::ports::CategoryRepository;
use crate::domain::Category;
use crate::error::{CatalogError, Result};

const COLUMNS: &str = "id, name, description, is_active, created_at";

#[derive(Debug, sqlx::FromRow)]
struct CategoryRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = CatalogError;

    fn try_from(row: CategoryRow) -> Result<Self> {
        Category::restore(
            CategoryID(row.id),
            row.name,
            row.description,
            row.is_active,
            row.created_at,
        )
    }
}

#[derive(Clone, Debug)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn not_found(id: CategoryID) -> CatalogError {
        CatalogError::NotFound(format!("Category {id} not found"))
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn insert(&self, category: &Category) -> Result<Category> {
        let sql = format!(
            r#"
            INSERT INTO categories (id, name, description, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {COLUMNS}
            "#
        );
        let row: CategoryRow = sqlx::query_as(&sql)
            .bind(category.id().to_uuid())
            .bind(category.name())
            .bind(category.description())
            .bind(category.is_active())
            .bind(category.created_at())
            .fetch_one(self.pool())
            .await
            .map_err(db_err("Failed to create category"))?;

        debug!(category_id = %row.id, "category inserted");
        row.try_into()
    }

    async fn find_by_id(&self, id: CategoryID) -> Result<Category> {
        let sql = format!(
            "SELECT {COLUMNS} FROM categories WHERE id = $1 AND deleted_at IS NULL"
        );
        let row: Option<CategoryRow> = sqlx::query_as(&sql)
            .bind(id.to_uuid())
            .fetch_optional(self.pool())
            .await
            .map_err(db_err("Database query failed"))?;

        row.ok_or_else(|| Self::not_found(id))?.try_into()
    }

    async fn get_ids_list_ids(
        &self,
        ids: &[CategoryID],
    ) -> Result<Vec<CategoryID>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let uuids: Vec<Uuid> = ids.iter().map(CategoryID::to_uuid).collect();

        let found: Vec<(Uuid,)> = sqlx::query_as(
            "SELECT id FROM categories WHERE id = ANY($1) AND deleted_at IS NULL",
        )
        .bind(uuids)
        .fetch_all(self.pool())
        .await
        .map_err(db_err("Database query failed"))?;

        Ok(found.into_iter().map(|(id,)| CategoryID(id)).collect())
    }

    async fn find_all(&self, list: &ListFilter) -> Result<Vec<Category>> {
        let sql = format!(
            r#"
            SELECT {COLUMNS}
            FROM categories
            WHERE deleted_at IS NULL
              AND ($1::text IS NULL OR name ILIKE $1)
            ORDER BY name {order}, id
            "#,
            order = list.order.as_sql()
        );
        let rows: Vec<CategoryRow> = sqlx::query_as(&sql)
            .bind(list.like_pattern())
            .fetch_all(self.pool())
            .await
            .map_err(db_err("Database query failed"))?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn paginate(
        &self,
        request: &PageRequest,
    ) -> Result<Paginated<Category>> {
        let pattern = request.list.like_pattern();

        let (total,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM categories
            WHERE deleted_at IS NULL
              AND ($1::text IS NULL OR name ILIKE $1)
            "#,
        )
        .bind(pattern.as_deref())
        .fetch_one(self.pool())
        .await
        .map_err(db_err("Failed to count categories"))?;

        let sql = format!(
            r#"
            SELECT {COLUMNS}
            FROM categories
            WHERE deleted_at IS NULL
              AND ($1::text IS NULL OR name ILIKE $1)
            ORDER BY name {order}, id
            LIMIT $2 OFFSET $3
            "#,
            order = request.list.order.as_sql()
        );
        let rows: Vec<CategoryRow> = sqlx::query_as(&sql)
            .bind(pattern.as_deref())
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(self.pool())
            .await
            .map_err(db_err("Database query failed"))?;

        let items = rows
            .into_iter()
            .map(Category::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Paginated::new(items, total.max(0) as u64, request))
    }

    async fn update(&self, category: &Category) -> Result<Category> {
        let sql = format!(
            r#"
            UPDATE categories
            SET name = $1,
                description = $2,
                is_active = $3,
                updated_at = NOW()
            WHERE id = $4 AND deleted_at IS NULL
            RETURNING {COLUMNS}
            "#
        );
        let row: Option<CategoryRow> = sqlx::query_as(&sql)
            .bind(category.name())
            .bind(category.description())
            .bind(category.is_active())
            .bind(category.id().to_uuid())
            .fetch_optional(self.pool())
            .await
            .map_err(db_err("Failed to update category"))?;

        match row {
            Some(row) => row.try_into(),
            None => {
                warn!(category_id = %category.id(), "update on missing category");
                Err(Self::not_found(category.id()))
            }
        }
    }

    async fn delete(&self, id: CategoryID) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE categories SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id.to_uuid())
        .execute(self.pool())
        .await
        .map_err(db_err("Delete failed"))?;

        if result.rows_affected() == 0 {
            return Err(Self::not_found(id));
        }

        debug!(category_id = %id, "category soft-deleted");
        Ok(true)
    }
}
