use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::entity::{AuditFields, ProductType, NewProductType};
use crate::domain::repository::ProductTypeRepository;

pub struct ProductTypeSqliteRepository {
    pool: Arc<SqlitePool>,
}

impl ProductTypeSqliteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProductTypeRow {
    id: i64,
    name: String,
    created_by: Option<String>,
    updated_by: Option<String>,
    created_date: DateTime<Utc>,
    updated_date: Option<DateTime<Utc>>,
    deleted_date: Option<DateTime<Utc>>,
}

impl From<ProductTypeRow> for ProductType {
    fn from(r: ProductTypeRow) -> Self {
        ProductType {
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
impl ProductTypeRepository for ProductTypeSqliteRepository {
    async fn create(&self, product_type: &NewProductType) -> anyhow::Result<i64> {
        let result = sqlx::query(
            "INSERT INTO product_types \
             (name, created_by, updated_by, created_date, updated_date, deleted_date) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&product_type.name)
        .bind(&product_type.audit.created_by)
        .bind(&product_type.audit.updated_by)
        .bind(product_type.audit.created_date)
        .bind(product_type.audit.updated_date)
        .bind(product_type.audit.deleted_date)
        .execute(self.pool.as_ref())
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<ProductType>> {
        let rows: Vec<ProductTypeRow> = sqlx::query_as(
            "SELECT id, name, created_by, updated_by, created_date, updated_date, deleted_date \
             FROM product_types ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
