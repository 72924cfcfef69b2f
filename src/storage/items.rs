use super::categories::upsert_category;
use super::db::{Database, DatabaseError};
use super::models::{Item, NewItem};

impl Database {
    // ========================================================================
    // Item operations
    // ========================================================================

    /// Resolve the category and insert the item row in one transaction.
    /// The image must already be stored; it is not removed if this fails.
    pub async fn create_item(&self, item: &NewItem) -> Result<Item, DatabaseError> {
        debug_assert!(!item.name.is_empty(), "item name must not be empty");
        debug_assert!(!item.category.is_empty(), "category must not be empty");

        // Rolls back on drop if anything below returns early
        let mut tx = self.pool().begin().await?;

        let category_id = upsert_category(&mut *tx, &item.category).await?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO items2 (name, category_id, image_name) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(&item.name)
        .bind(category_id)
        .bind(&item.image_name)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Item {
            id,
            name: item.name.clone(),
            category_id,
            image_name: item.image_name.clone(),
        })
    }

    /// Get an item by id
    pub async fn get_item(&self, id: i64) -> Result<Option<Item>, DatabaseError> {
        let mut conn = self.acquire().await?;
        let item = sqlx::query_as::<_, Item>(
            "SELECT id, name, category_id, image_name FROM items2 WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(item)
    }

    /// List every item
    pub async fn list_items(&self) -> Result<Vec<Item>, DatabaseError> {
        let mut conn = self.acquire().await?;
        let items = sqlx::query_as::<_, Item>(
            "SELECT id, name, category_id, image_name FROM items2 ORDER BY id",
        )
        .fetch_all(&mut *conn)
        .await?;
        Ok(items)
    }

    /// Items whose name contains `keyword`, ignoring ASCII case
    pub async fn search_items(&self, keyword: &str) -> Result<Vec<Item>, DatabaseError> {
        let pattern = format!("%{}%", escape_like(keyword));

        let mut conn = self.acquire().await?;
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, category_id, image_name FROM items2
            WHERE name LIKE ? ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(&mut *conn)
        .await?;
        Ok(items)
    }
}

/// Escape LIKE wildcards so the keyword matches literally
fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
