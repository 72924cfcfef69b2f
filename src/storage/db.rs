use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::pool::PoolConnection;
use sqlx::Sqlite;
use std::path::Path;
use thiserror::Error;

use super::schema;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Sqlx(Box<sqlx::Error>),
}

impl From<sqlx::Error> for DatabaseError {
    fn from(e: sqlx::Error) -> Self {
        let unique_violation = e
            .as_database_error()
            .is_some_and(|db_err| db_err.is_unique_violation());
        if unique_violation {
            DatabaseError::Conflict(e.to_string())
        } else {
            DatabaseError::Sqlx(Box::new(e))
        }
    }
}

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open or create a database file and bootstrap the schema
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self, DatabaseError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.bootstrap().await?;
        Ok(db)
    }

    async fn bootstrap(&self) -> Result<(), DatabaseError> {
        let mut conn = self.acquire().await?;
        for statement in schema::ALL {
            sqlx::query(statement).execute(&mut *conn).await?;
        }
        Ok(())
    }

    /// Check out a connection for the duration of one operation.
    /// It returns to the pool when dropped, on success and error paths alike.
    pub async fn acquire(&self) -> Result<PoolConnection<Sqlite>, DatabaseError> {
        Ok(self.pool.acquire().await?)
    }

    pub(super) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the pool, waiting for checked-out connections to return
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
