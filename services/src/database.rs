use chrono::NaiveDate;
use serde::Serialize;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::future::Future;
use thiserror::Error;

use crate::config::Config;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

/// Query behind `GET /api/mps`.
pub const LIST_MPS_SQL: &str = "SELECT id, product_name, work_order_id, quantity, due_date, status \
     FROM mps ORDER BY id ASC";

/// Initialize a PostgreSQL connection pool
pub async fn create_pool(config: &Config) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new().connect(config.database_url()).await?;

    tracing::info!("Database connection pool established");

    Ok(pool)
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("{0}")]
    Unavailable(String),
}

/// A row of the `mps` table, with the database's column names.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct MpsRow {
    pub id: i32,
    pub product_name: String,
    pub work_order_id: String,
    pub quantity: i32,
    pub due_date: NaiveDate,
    pub status: String,
}

/// Wire shape of one MPS entry: camelCase keys, `YYYY-MM-DD` due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MpsRecord {
    pub id: i32,
    pub product_name: String,
    pub work_order_id: String,
    pub quantity: i32,
    pub due_date: String,
    pub status: String,
}

impl From<MpsRow> for MpsRecord {
    fn from(row: MpsRow) -> Self {
        Self {
            id: row.id,
            product_name: row.product_name,
            work_order_id: row.work_order_id,
            quantity: row.quantity,
            due_date: row.due_date.format("%Y-%m-%d").to_string(),
            status: row.status,
        }
    }
}

pub trait MpsStorage: Clone + Send + Sync + 'static {
    fn is_connected(&self) -> impl Future<Output = bool> + Send;

    /// All schedule rows ordered by ascending id.
    fn list_mps(&self) -> impl Future<Output = Result<Vec<MpsRow>, StorageError>> + Send;
}

#[derive(Clone)]
pub struct PgStorage {
    pub pool: PgPool,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl MpsStorage for PgStorage {
    async fn is_connected(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    async fn list_mps(&self) -> Result<Vec<MpsRow>, StorageError> {
        let rows = sqlx::query_as::<_, MpsRow>(LIST_MPS_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
