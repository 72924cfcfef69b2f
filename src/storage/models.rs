use serde::{Deserialize, Serialize};

/// A category row; created lazily the first time its name is used
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// An item row as stored in `items2`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    /// Content-addressed image file name (`<sha256 hex>.jpg`)
    pub image_name: String,
}

/// Fields needed to create an item; the category is given by name
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub image_name: String,
}
