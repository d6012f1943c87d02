use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::entity::{AuditFields, NewProduct, Product, ProductDetail};
use crate::domain::repository::ProductRepository;

pub struct ProductSqliteRepository {
    pool: Arc<SqlitePool>,
}

impl ProductSqliteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    product_type_id: i64,
    created_by: Option<String>,
    updated_by: Option<String>,
    created_date: DateTime<Utc>,
    updated_date: Option<DateTime<Utc>>,
    deleted_date: Option<DateTime<Utc>>,
}

impl From<ProductRow> for Product {
    fn from(r: ProductRow) -> Self {
        Product {
            id: r.id,
            name: r.name,
            product_type_id: r.product_type_id,
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

#[derive(sqlx::FromRow)]
struct ProductHeadRow {
    id: i64,
    name: String,
    product_type: Option<String>,
}

#[async_trait]
impl ProductRepository for ProductSqliteRepository {
    async fn create_with_colours(
        &self,
        product: &NewProduct,
        colour_ids: &[i64],
    ) -> anyhow::Result<i64> {
        let mut tx = self.pool.begin().await?;

        let product_id = sqlx::query(
            "INSERT INTO products \
             (name, product_type_id, created_by, updated_by, created_date, updated_date, deleted_date) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&product.name)
        .bind(product.product_type_id)
        .bind(&product.audit.created_by)
        .bind(&product.audit.updated_by)
        .bind(product.audit.created_date)
        .bind(product.audit.updated_date)
        .bind(product.audit.deleted_date)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        for &colour_id in colour_ids {
            sqlx::query("INSERT INTO product_colours (product_id, colour_id) VALUES (?, ?)")
                .bind(product_id)
                .bind(colour_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(product_id)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Product>> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            "SELECT id, name, product_type_id, created_by, updated_by, \
                    created_date, updated_date, deleted_date \
             FROM products ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_detail_by_id(&self, id: i64) -> anyhow::Result<Option<ProductDetail>> {
        let head: Option<ProductHeadRow> = sqlx::query_as(
            "SELECT p.id, p.name, pt.name AS product_type \
             FROM products p \
             LEFT JOIN product_types pt ON pt.id = p.product_type_id \
             WHERE p.id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        let Some(head) = head else {
            return Ok(None);
        };

        let colours: Vec<(String,)> = sqlx::query_as(
            "SELECT c.name \
             FROM product_colours pc \
             JOIN colours c ON c.id = pc.colour_id \
             WHERE pc.product_id = ? \
             ORDER BY pc.id",
        )
        .bind(id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(Some(ProductDetail {
            id: head.id,
            name: head.name,
            product_type: head.product_type,
            colours: colours.into_iter().map(|(name,)| name).collect(),
        }))
    }
}
