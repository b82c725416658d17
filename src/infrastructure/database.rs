//! 数据库基础设施

use sqlx::{
    postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode},
    Error,
};
use tracing::info;

use super::config::{Config, DB_HOST, DB_PORT};

const CREATE_PRODUCTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id SERIAL,
        name TEXT NOT NULL,
        price NUMERIC(10, 2) NOT NULL DEFAULT 0.00,
        CONSTRAINT products_pkey PRIMARY KEY (id)
    )
"#;

pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    pub fn connect_options(config: &Config) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(DB_HOST)
            .port(DB_PORT)
            .username(&config.user)
            .password(&config.password)
            .database(&config.dbname)
            .ssl_mode(PgSslMode::Disable)
    }

    pub async fn new(config: &Config) -> Result<Self, Error> {
        info!(
            "Connecting to database {} at {}:{} as {}",
            config.dbname, DB_HOST, DB_PORT, config.user
        );

        let pool = PgPoolOptions::new()
            .connect_with(Self::connect_options(config))
            .await?;

        Ok(Self { pool })
    }

    /// 建表（若不存在）
    pub async fn ensure_schema(&self) -> Result<(), Error> {
        sqlx::query(CREATE_PRODUCTS_TABLE)
            .execute(&self.pool)
            .await?;

        info!("Products table is ready");
        Ok(())
    }

    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
