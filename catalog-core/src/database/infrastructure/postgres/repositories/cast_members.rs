use async_trait::async_trait;
use catalog_model::{CastMemberID, CastMemberType};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::database::infrastructure::postgres::db_err;
use crate::database::pagination::{ListFilter, PageRequest, Paginated};
use crate::database::ports::CastMemberRepository;
use crate::domain::CastMember;
use crate::error::{CatalogError, Result};

const COLUMNS: &str = "id, name, type, created_at";

#[derive(Debug, sqlx::FromRow)]
struct CastMemberRow {
    id: Uuid,
    name: String,
    #[sqlx(rename = "type")]
    kind: i16,
    created_at: DateTime<Utc>,
}

impl TryFrom<CastMemberRow> for CastMember {
    type Error = CatalogError;

    fn try_from(row: CastMemberRow) -> Result<Self> {
        CastMember::restore(
            CastMemberID(row.id),
            row.name,
            CastMemberType::from_code(row.kind)?,
            row.created_at,
        )
    }
}

#[derive(Clone, Debug)]
pub struct PostgresCastMemberRepository {
    pool: PgPool,
}

impl PostgresCastMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn not_found(id: CastMemberID) -> CatalogError {
        CatalogError::NotFound(format!("Cast Member {id} not found"))
    }
}

#[async_trait]
impl CastMemberRepository for PostgresCastMemberRepository {
    async fn insert(&self, cast_member: &CastMember) -> Result<CastMember> {
        let sql = format!(
            r#"
            INSERT INTO cast_members (id, name, type, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING {COLUMNS}
            "#
        );
        let row: CastMemberRow = sqlx::query_as(&sql)
            .bind(cast_member.id().to_uuid())
            .bind(cast_member.name())
            .bind(cast_member.kind().code())
            .bind(cast_member.created_at())
            .fetch_one(self.pool())
            .await
            .map_err(db_err("Failed to create cast member"))?;

        debug!(cast_member_id = %row.id, kind = row.kind, "cast member inserted");
        row.try_into()
    }

    async fn find_by_id(&self, id: CastMemberID) -> Result<CastMember> {
        let sql = format!(
            "SELECT {COLUMNS} FROM cast_members WHERE id = $1 AND deleted_at IS NULL"
        );
        let row: Option<CastMemberRow> = sqlx::query_as(&sql)
            .bind(id.to_uuid())
            .fetch_optional(self.pool())
            .await
            .map_err(db_err("Database query failed"))?;

        row.ok_or_else(|| Self::not_found(id))?.try_into()
    }

    async fn get_ids_list_ids(
        &self,
        ids: &[CastMemberID],
    ) -> Result<Vec<CastMemberID>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let uuids: Vec<Uuid> = ids.iter().map(CastMemberID::to_uuid).collect();

        let found: Vec<(Uuid,)> = sqlx::query_as(
            "SELECT id FROM cast_members WHERE id = ANY($1) AND deleted_at IS NULL",
        )
        .bind(uuids)
        .fetch_all(self.pool())
        .await
        .map_err(db_err("Database query failed"))?;

        Ok(found.into_iter().map(|(id,)| CastMemberID(id)).collect())
    }

    async fn find_all(&self, list: &ListFilter) -> Result<Vec<CastMember>> {
        let sql = format!(
            r#"
            SELECT {COLUMNS}
            FROM cast_members
            WHERE deleted_at IS NULL
              AND ($1::text IS NULL OR name ILIKE $1)
            ORDER BY name {order}, id
            "#,
            order = list.order.as_sql()
        );
        let rows: Vec<CastMemberRow> = sqlx::query_as(&sql)
            .bind(list.like_pattern())
            .fetch_all(self.pool())
            .await
            .map_err(db_err("Database query failed"))?;

        rows.into_iter().map(CastMember::try_from).collect()
    }

    async fn paginate(
        &self,
        request: &PageRequest,
    ) -> Result<Paginated<CastMember>> {
        let pattern = request.list.like_pattern();

        let (total,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM cast_members
            WHERE deleted_at IS NULL
              AND ($1::text IS NULL OR name ILIKE $1)
            "#,
        )
        .bind(pattern.as_deref())
        .fetch_one(self.pool())
        .await
        .map_err(db_err("Failed to count cast members"))?;

        let sql = format!(
            r#"
            SELECT {COLUMNS}
            FROM cast_members
            WHERE deleted_at IS NULL
              AND ($1::text IS NULL OR name ILIKE $1)
            ORDER BY name {order}, id
            LIMIT $2 OFFSET $3
            "#,
            order = request.list.order.as_sql()
        );
        let rows: Vec<CastMemberRow> = sqlx::query_as(&sql)
            .bind(pattern.as_deref())
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(self.pool())
            .await
            .map_err(db_err("Database query failed"))?;

        let items = rows
            .into_iter()
            .map(CastMember::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Paginated::new(items, total.max(0) as u64, request))
    }

    async fn update(&self, cast_member: &CastMember) -> Result<CastMember> {
        let sql = format!(
            r#"
            UPDATE cast_members
            SET name = $1,
                type = $2,
                updated_at = NOW()
            WHERE id = $3 AND deleted_at IS NULL
            RETURNING {COLUMNS}
            "#
        );
        let row: Option<CastMemberRow> = sqlx::query_as(&sql)
            .bind(cast_member.name())
            .bind(cast_member.kind().code())
            .bind(cast_member.id().to_uuid())
            .fetch_optional(self.pool())
            .await
            .map_err(db_err("Failed to update cast member"))?;

        match row {
            Some(row) => row.try_into(),
            None => {
                warn!(cast_member_id = %cast_member.id(), "update on missing cast member");
                Err(Self::not_found(cast_member.id()))
            }
        }
    }

    async fn delete(&self, id: CastMemberID) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE cast_members SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id.to_uuid())
        .execute(self.pool())
        .await
        .map_err(db_err("Delete failed"))?;

        if result.rows_affected() == 0 {
            return Err(Self::not_found(id));
        }

        debug!(cast_member_id = %id, "cast member soft-deleted");
        Ok(true)
    }
}
