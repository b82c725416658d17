//! 产品数据访问层

use async_trait::async_trait;
use sqlx::postgres::PgPool;

use super::model::{Page, Product, ProductPayload};

/// 产品存储
///
/// `fetch`/`update` 以 `None` 表示记录不存在，`delete` 返回是否命中了一行。
/// `insert`/`update` 返回存储后的记录，价格已按 `numeric(10,2)` 舍入到分。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn fetch(&self, id: i32) -> Result<Option<Product>, sqlx::Error>;

    /// 插入新记录，返回带数据库分配 id 的行
    async fn insert(&self, payload: &ProductPayload) -> Result<Product, sqlx::Error>;

    async fn update(
        &self,
        id: i32,
        payload: &ProductPayload,
    ) -> Result<Option<Product>, sqlx::Error>;

    async fn delete(&self, id: i32) -> Result<bool, sqlx::Error>;

    async fn list(&self, page: Page) -> Result<Vec<Product>, sqlx::Error>;
}

/// PostgreSQL 实现
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn fetch(&self, id: i32) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, price::FLOAT8 AS price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn insert(&self, payload: &ProductPayload) -> Result<Product, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, price) VALUES ($1, $2::NUMERIC(10, 2)) \
             RETURNING id, name, price::FLOAT8 AS price",
        )
        .bind(&payload.name)
        .bind(payload.price)
        .fetch_one(&self.pool)
        .await
    }

    async fn update(
        &self,
        id: i32,
        payload: &ProductPayload,
    ) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "UPDATE products SET name = $1, price = $2::NUMERIC(10, 2) WHERE id = $3 \
             RETURNING id, name, price::FLOAT8 AS price",
        )
        .bind(&payload.name)
        .bind(payload.price)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete(&self, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, page: Page) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, price::FLOAT8 AS price FROM products ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(page.take)
        .bind(page.skip)
        .fetch_all(&self.pool)
        .await
    }
}
