use std::collections::HashMap;

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use super::db_err;
use crate::error::Result;

/// Many-to-many pivot between an owner row and a soft-deletable related row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LinkTable {
    pub table: &'static str,
    pub owner_column: &'static str,
    pub related_column: &'static str,
    pub related_table: &'static str,
}

pub(crate) const CATEGORY_GENRE: LinkTable = LinkTable {
    table: "category_genre",
    owner_column: "genre_id",
    related_column: "category_id",
    related_table: "categories",
};

pub(crate) const CATEGORY_VIDEO: LinkTable = LinkTable {
    table: "category_video",
    owner_column: "video_id",
    related_column: "category_id",
    related_table: "categories",
};

pub(crate) const GENRE_VIDEO: LinkTable = LinkTable {
    table: "genre_video",
    owner_column: "video_id",
    related_column: "genre_id",
    related_table: "genres",
};

pub(crate) const CAST_MEMBER_VIDEO: LinkTable = LinkTable {
    table: "cast_member_video",
    owner_column: "video_id",
    related_column: "cast_member_id",
    related_table: "cast_members",
};

impl LinkTable {
    /// Make the stored links of `owner` exactly `related` (duplicates
    /// collapse). Must run inside the caller's transaction.
    pub async fn replace(
        &self,
        conn: &mut PgConnection,
        owner: Uuid,
        related: &[Uuid],
    ) -> Result<()> {
        let delete = format!(
            "DELETE FROM {} WHERE {} = $1",
            self.table, self.owner_column
        );
        sqlx::query(&delete)
            .bind(owner)
            .execute(&mut *conn)
            .await
            .map_err(db_err("Failed to clear relationship links"))?;

        if related.is_empty() {
            return Ok(());
        }

        let insert = format!(
            "INSERT INTO {table} ({related}, {owner}) \
             SELECT DISTINCT related_id, $2 FROM UNNEST($1::uuid[]) AS related_id \
             ON CONFLICT DO NOTHING",
            table = self.table,
            related = self.related_column,
            owner = self.owner_column,
        );
        sqlx::query(&insert)
            .bind(related.to_vec())
            .bind(owner)
            .execute(&mut *conn)
            .await
            .map_err(db_err("Failed to store relationship links"))?;

        Ok(())
    }

    /// Related ids per owner, skipping soft-deleted related rows. Ids are
    /// ordered ascending.
    pub async fn load(
        &self,
        pool: &PgPool,
        owners: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<Uuid>>> {
        let mut links: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        if owners.is_empty() {
            return Ok(links);
        }

        let select = format!(
            "SELECT l.{owner}, l.{related} FROM {table} l \
             JOIN {related_table} r ON r.id = l.{related} AND r.deleted_at IS NULL \
             WHERE l.{owner} = ANY($1) \
             ORDER BY l.{related}",
            owner = self.owner_column,
            related = self.related_column,
            table = self.table,
            related_table = self.related_table,
        );
        let rows: Vec<(Uuid, Uuid)> = sqlx::query_as(&select)
            .bind(owners.to_vec())
            .fetch_all(pool)
            .await
            .map_err(db_err("Failed to load relationship links"))?;

        for (owner, related) in rows {
            links.entry(owner).or_default().push(related);
        }
        Ok(links)
    }
}
