use sqlx::SqliteConnection;

use super::db::{Database, DatabaseError};
use super::models::Category;

/// Insert the category if absent and return its id, as one statement.
/// The unique index on `name` makes concurrent callers converge on a single row.
pub(super) async fn upsert_category(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<i64, DatabaseError> {
    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO categories (name) VALUES (?)
        ON CONFLICT(name) DO UPDATE SET name = excluded.name
        RETURNING id
        "#,
    )
    .bind(name)
    .fetch_one(&mut *conn)
    .await?;
    Ok(id)
}

impl Database {
    // ========================================================================
    // Category operations
    // ========================================================================

    /// Resolve a category name (exact, case-sensitive) to its id, creating it on first use
    pub async fn resolve_category(&self, name: &str) -> Result<i64, DatabaseError> {
        debug_assert!(!name.is_empty(), "category name must not be empty");

        let mut conn = self.acquire().await?;
        upsert_category(&mut *conn, name).await
    }

    pub async fn get_category(&self, id: i64) -> Result<Option<Category>, DatabaseError> {
        let mut conn = self.acquire().await?;
        let category = sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(category)
    }
}
