use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::entity::{AuditFields, Colour, NewColour};
use crate::domain::repository::ColourRepository;

pub struct ColourSqliteRepository {
    pool: Arc<SqlitePool>,
}

impl ColourSqliteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ColourRow {
    id: i64,
    name: String,
    created_by: Option<String>,
    updated_by: Option<String>,
    created_date: DateTime<Utc>,
    updated_date: Option<DateTime<Utc>>,
    deleted_date: Option<DateTime<Utc>>,
}

impl From<ColourRow> for Colour {
    fn from(r: ColourRow) -> Self {
        Colour {
            id: r.id,
            name: r.name,
            audit: AuditFields {
                created_by: r.created_by,
                updated_by: r.updated_by,
                created_date: r.created_date,
                updated_date: r.updated_date,
                deleted_date: r.deleted_date,
            },
        }
    }
}

#[async_trait]
impl ColourRepository for ColourSqliteRepository {
    async fn create(&self, colour: &NewColour) -> anyhow::Result<i64> {
        let result = sqlx::query(
            "INSERT INTO colours \
             (name, created_by, updated_by, created_date, updated_date, deleted_date) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&colour.name)
        .bind(&colour.audit.created_by)
        .bind(&colour.audit.updated_by)
        .bind(colour.audit.created_date)
        .bind(colour.audit.updated_date)
        .bind(colour.audit.deleted_date)
        .execute(self.pool.as_ref())
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Colour>> {
        let rows: Vec<ColourRow> = sqlx::query_as(
            "SELECT id, name, created_by, updated_by, created_date, updated_date, deleted_date \
             FROM colours ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
